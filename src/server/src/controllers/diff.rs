use crate::errors::DocDiffHttpError;
use crate::html;
use crate::params::app_data;

use libdocdiff::compare;
use libdocdiff::model::DocumentFile;
use libdocdiff::view::{DiffResponse, StatusMessage};

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse};
use futures_util::TryStreamExt as _;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(ToSchema, Deserialize)]
#[schema(
    title = "DiffUploadBody",
    description = "Body for uploading the two documents to compare via multipart/form-data",
    example = json!({
        "file_a": "<binary data>",
        "file_b": "<binary data>"
    })
)]
pub struct DiffUploadBody {
    #[schema(value_type = String, format = Binary)]
    pub file_a: Vec<u8>,
    #[schema(value_type = String, format = Binary)]
    pub file_b: Vec<u8>,
}

/// Compare two documents, rendered as an HTML table
pub async fn create(
    req: HttpRequest,
    payload: Multipart,
) -> actix_web::Result<HttpResponse, DocDiffHttpError> {
    log::debug!("diff::create path {:?}", req.path());
    let app_data = app_data(&req)?;

    let (file_a, file_b) = parse_multipart_documents(payload, app_data.max_upload_bytes).await?;
    let diff = compare::compare_files(&file_a, &file_b)?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html::diff_page(&diff)))
}

/// Compare two documents
#[utoipa::path(
    post,
    path = "/api/diff",
    tag = "Diff",
    request_body(
        content_type = "multipart/form-data",
        content = DiffUploadBody
    ),
    responses(
        (status = 200, description = "Every changed line between the two documents", body = DiffResponse),
        (status = 400, description = "Missing file, oversized upload, or undecodable document"),
    )
)]
pub async fn create_json(
    req: HttpRequest,
    payload: Multipart,
) -> actix_web::Result<HttpResponse, DocDiffHttpError> {
    log::debug!("diff::create_json path {:?}", req.path());
    let app_data = app_data(&req)?;

    let (file_a, file_b) = parse_multipart_documents(payload, app_data.max_upload_bytes).await?;
    let diff = compare::compare_files(&file_a, &file_b)?;

    Ok(HttpResponse::Ok().json(DiffResponse {
        status: StatusMessage::resource_found(),
        diff,
    }))
}

async fn parse_multipart_documents(
    mut payload: Multipart,
    max_upload_bytes: usize,
) -> actix_web::Result<(DocumentFile, DocumentFile), DocDiffHttpError> {
    let mut file_a: Option<DocumentFile> = None;
    let mut file_b: Option<DocumentFile> = None;

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(DocDiffHttpError::MultipartError)?
    {
        let disposition = field
            .content_disposition()
            .ok_or(DocDiffHttpError::NotFound)?;
        let field_name = disposition
            .get_name()
            .ok_or(DocDiffHttpError::NotFound)?
            .to_string();

        match field_name.as_str() {
            "file_a" | "file_b" => {
                let filename = disposition.get_filename().map_or_else(
                    || uuid::Uuid::new_v4().to_string(),
                    sanitize_filename::sanitize,
                );

                let mut contents = Vec::new();
                while let Some(chunk) = field
                    .try_next()
                    .await
                    .map_err(DocDiffHttpError::MultipartError)?
                {
                    if contents.len() + chunk.len() > max_upload_bytes {
                        return Err(DocDiffHttpError::BadRequest(
                            format!("Upload `{filename}` exceeds the max size of {max_upload_bytes} bytes")
                                .into(),
                        ));
                    }
                    contents.extend_from_slice(&chunk);
                }

                let doc = DocumentFile::new(filename, contents);
                if field_name == "file_a" {
                    file_a = Some(doc);
                } else {
                    file_b = Some(doc);
                }
            }
            _ => {}
        }
    }

    match (file_a, file_b) {
        (Some(file_a), Some(file_b)) => Ok((file_a, file_b)),
        _ => Err(DocDiffHttpError::BadRequest(
            "Both `file_a` and `file_b` files are required".into(),
        )),
    }
}
