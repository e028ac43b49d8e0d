use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::diff::document_diff::DocumentDiff;

use super::StatusMessage;

#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct DiffResponse {
    #[serde(flatten)]
    pub status: StatusMessage,
    pub diff: DocumentDiff,
}
