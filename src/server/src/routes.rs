use actix_web::web;

use crate::controllers;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(controllers::pages::index))
        .route("/diff", web::post().to(controllers::diff::create))
        .route("/api/diff", web::post().to(controllers::diff::create_json))
        .route("/api/health", web::get().to(controllers::health::index))
        .route("/api/version", web::get().to(controllers::version::index));
}
