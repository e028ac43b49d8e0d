use actix_web::HttpRequest;

use crate::app_data::DocDiffAppData;
use crate::errors::DocDiffHttpError;

pub fn app_data(req: &HttpRequest) -> Result<&DocDiffAppData, DocDiffHttpError> {
    req.app_data::<DocDiffAppData>()
        .ok_or(DocDiffHttpError::AppDataDoesNotExist)
}
