use actix_web::{HttpResponse, ResponseError};

use libdocdiff::error::{DocDiffError, StringError};
use libdocdiff::view::StatusMessageDescription;

use std::fmt;

#[derive(Debug)]
pub enum DocDiffHttpError {
    AppDataDoesNotExist,
    BadRequest(StringError),
    NotFound,
    InternalServerError,
    MultipartError(actix_multipart::MultipartError),
    InternalError(DocDiffError),
}

impl From<DocDiffError> for DocDiffHttpError {
    fn from(err: DocDiffError) -> Self {
        DocDiffHttpError::InternalError(err)
    }
}

impl fmt::Display for DocDiffHttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocDiffHttpError::AppDataDoesNotExist => write!(f, "App data does not exist"),
            DocDiffHttpError::BadRequest(desc) => write!(f, "Bad request: {desc}"),
            DocDiffHttpError::NotFound => write!(f, "Not found"),
            DocDiffHttpError::InternalServerError => write!(f, "Internal server error"),
            DocDiffHttpError::MultipartError(err) => write!(f, "Multipart error: {err}"),
            DocDiffHttpError::InternalError(err) => write!(f, "{err}"),
        }
    }
}

impl ResponseError for DocDiffHttpError {
    fn error_response(&self) -> HttpResponse {
        match self {
            DocDiffHttpError::AppDataDoesNotExist => {
                log::error!("AppDataDoesNotExist");
                HttpResponse::InternalServerError().json(
                    StatusMessageDescription::internal_server_error("app data does not exist"),
                )
            }
            DocDiffHttpError::BadRequest(desc) => HttpResponse::BadRequest()
                .json(StatusMessageDescription::bad_request(desc.to_string())),
            DocDiffHttpError::NotFound => HttpResponse::NotFound()
                .json(StatusMessageDescription::not_found("resource not found")),
            DocDiffHttpError::InternalServerError => HttpResponse::InternalServerError().json(
                StatusMessageDescription::internal_server_error("internal server error"),
            ),
            DocDiffHttpError::MultipartError(err) => {
                log::debug!("Multipart error: {err:?}");
                HttpResponse::BadRequest()
                    .json(StatusMessageDescription::bad_request(format!("{err}")))
            }
            // decoding failures are the client's problem, everything else ours
            DocDiffHttpError::InternalError(err) if err.is_decoding() => {
                HttpResponse::BadRequest()
                    .json(StatusMessageDescription::bad_request(format!("{err}")))
            }
            DocDiffHttpError::InternalError(err) => {
                log::error!("Internal error: {err:?}");
                HttpResponse::InternalServerError().json(
                    StatusMessageDescription::internal_server_error(format!("{err}")),
                )
            }
        }
    }
}
