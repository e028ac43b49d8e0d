use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::StatusMessage;

#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct VersionResponse {
    #[serde(flatten)]
    pub status: StatusMessage,
    pub version: String,
}
