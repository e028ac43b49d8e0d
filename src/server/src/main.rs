use dotenv::dotenv;
use libdocdiff::constants::{
    DEFAULT_HOST, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_PORT, DOCDIFF_VERSION,
};
use libdocdiff::util;

pub mod app_data;
pub mod controllers;
pub mod errors;
pub mod html;
pub mod params;
pub mod routes;

extern crate log;

use actix_web::http::KeepAlive;
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{web, App, HttpServer};

// Note: these 'view' imports are for the auto-generated docs with utoipa
use libdocdiff::model::{Chunk, ChunkType, DocumentDiff, Span};
use libdocdiff::view::{DiffResponse, StatusMessage, StatusMessageDescription, VersionResponse};

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use clap::{Arg, Command};

use std::env;

const VERSION: &str = DOCDIFF_VERSION;

const START_SERVER_USAGE: &str = "Usage: `docdiff-server start -i 0.0.0.0 -p 3000`";

const ABOUT: &str =
    "DocDiff Server compares two uploaded documents and reports every changed line";

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::controllers::diff::create_json,
        crate::controllers::health::index,
        crate::controllers::version::index,
    ),
    components(
        schemas(
            DiffResponse,
            DocumentDiff,
            Chunk,
            ChunkType,
            Span,
            StatusMessage,
            StatusMessageDescription,
            VersionResponse,
            crate::controllers::diff::DiffUploadBody,
        ),
    ),
    servers(
        (url = "http://localhost:3000", description = "Local Development")
    ),
)]
struct ApiDoc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    util::logging::init_logging();

    let keep_alive_secs = env::var("DOCDIFF_KEEP_ALIVE_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(600);

    let max_upload_bytes = env::var("DOCDIFF_MAX_UPLOAD_BYTES")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

    let command = Command::new("docdiff-server")
        .version(VERSION)
        .about(ABOUT)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("start")
                .about("Starts the server on the given host and port")
                .arg(
                    Arg::new("ip")
                        .long("ip")
                        .short('i')
                        .default_value(DEFAULT_HOST)
                        .help("What host to bind the server to")
                        .action(clap::ArgAction::Set),
                )
                .arg(
                    Arg::new("port")
                        .long("port")
                        .short('p')
                        .default_value(DEFAULT_PORT)
                        .help("What port to bind the server to")
                        .action(clap::ArgAction::Set),
                ),
        );
    let matches = command.get_matches();

    match matches.subcommand() {
        Some(("start", sub_matches)) => {
            match (
                sub_matches.get_one::<String>("ip"),
                sub_matches.get_one::<String>("port"),
            ) {
                (Some(host), Some(port)) => {
                    let port: u16 = match port.parse::<u16>() {
                        Ok(port) => port,
                        Err(_) => {
                            eprintln!("Port must be a valid number between 0-65535");
                            return Ok(());
                        }
                    };
                    println!("docdiff-server v{VERSION}");
                    println!("Running on {host}:{port}");
                    log::info!("Max upload size: {max_upload_bytes} bytes");

                    let data = app_data::DocDiffAppData::new(max_upload_bytes);

                    let openapi = ApiDoc::openapi();

                    HttpServer::new(move || {
                        App::new()
                            .app_data(data.clone())
                            .service(
                                SwaggerUi::new("/swagger-ui/{_:.*}").url(
                                    "/api/_spec/docdiff_server_openapi.json",
                                    openapi.clone(),
                                ),
                            )
                            .configure(routes::config)
                            .default_service(web::route().to(controllers::not_found::index))
                            .wrap(DefaultHeaders::new().add(("docdiff-version", VERSION)))
                            .wrap(Logger::default())
                    })
                    .keep_alive(KeepAlive::Timeout(std::time::Duration::from_secs(
                        keep_alive_secs,
                    )))
                    .bind((host.to_owned(), port))?
                    .run()
                    .await
                }
                _ => {
                    eprintln!("{START_SERVER_USAGE}");
                    Ok(())
                }
            }
        }
        _ => unreachable!(), // all subcommands are defined above
    }
}
