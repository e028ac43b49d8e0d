use actix_web::{HttpRequest, HttpResponse};
use libdocdiff::view::StatusMessage;

use crate::errors::DocDiffHttpError;

pub async fn index(req: HttpRequest) -> Result<HttpResponse, DocDiffHttpError> {
    log::debug!("404 Could not find route: {}", req.path());
    Ok(HttpResponse::NotFound().json(StatusMessage::resource_not_found()))
}
