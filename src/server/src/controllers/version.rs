use actix_web::{HttpRequest, HttpResponse};
use libdocdiff::constants::DOCDIFF_VERSION;
use libdocdiff::view::{StatusMessage, VersionResponse};
use utoipa;

use crate::errors::DocDiffHttpError;

/// Server version
#[utoipa::path(
    get,
    path = "/api/version",
    tag = "System",
    responses(
        (status = 200, description = "Version of the server", body = VersionResponse),
    )
)]
pub async fn index(_req: HttpRequest) -> Result<HttpResponse, DocDiffHttpError> {
    Ok(HttpResponse::Ok().json(VersionResponse {
        status: StatusMessage::resource_found(),
        version: DOCDIFF_VERSION.to_string(),
    }))
}
