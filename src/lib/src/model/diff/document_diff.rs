use crate::model::diff::chunk::Chunk;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The full result of comparing two documents: every differing position as a
/// [`Chunk`], plus the extracted line sequences so renderers can show the
/// unchanged context rows.
#[derive(Default, Deserialize, Serialize, Debug, Clone, ToSchema)]
pub struct DocumentDiff {
    pub chunks: Vec<Chunk>,
    pub filename_a: Option<String>,
    pub filename_b: Option<String>,
    pub lines_a: Vec<String>,
    pub lines_b: Vec<String>,
}

impl DocumentDiff {
    pub fn is_identical(&self) -> bool {
        self.chunks.is_empty()
    }
}
