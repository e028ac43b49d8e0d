pub mod diff;
pub mod document;

pub use crate::model::diff::chunk::{Chunk, ChunkType};
pub use crate::model::diff::document_diff::DocumentDiff;
pub use crate::model::diff::span::Span;
pub use crate::model::document::{DocumentFile, DocumentFormat};
