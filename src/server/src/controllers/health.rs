use actix_web::{HttpRequest, HttpResponse};
use libdocdiff::view::StatusMessage;
use utoipa;

use crate::errors::DocDiffHttpError;

/// Health check
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "System",
    responses(
        (status = 200, description = "Server is up", body = StatusMessage),
    )
)]
pub async fn index(_req: HttpRequest) -> Result<HttpResponse, DocDiffHttpError> {
    Ok(HttpResponse::Ok().json(StatusMessage::resource_found()))
}
