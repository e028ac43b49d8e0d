use actix_web::{HttpRequest, HttpResponse};

use crate::errors::DocDiffHttpError;
use crate::html;

/// The upload form
pub async fn index(_req: HttpRequest) -> Result<HttpResponse, DocDiffHttpError> {
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html::form_page()))
}
