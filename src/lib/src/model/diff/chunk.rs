use crate::model::diff::span::Span;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash, Copy, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChunkType {
    Insert,
    Delete,
    Replace,
}

/// One reported unit of difference between two line sequences.
///
/// `line_a`/`a_text` are `None` for inserts (the line only exists on side B),
/// `line_b`/`b_text` are `None` for deletes. Replaced lines carry both sides
/// plus the character spans that differ. Line numbers are zero based and span
/// offsets count code points (see [`Span`]).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Chunk {
    pub tag: ChunkType,
    pub line_a: Option<usize>,
    pub line_b: Option<usize>,
    pub a_text: Option<String>,
    pub b_text: Option<String>,
    pub a_spans: Vec<Span>,
    pub b_spans: Vec<Span>,
}

impl Chunk {
    /// Line only present on side B; the whole line is one changed span.
    pub fn insert(line: usize, text: &str) -> Self {
        Chunk {
            tag: ChunkType::Insert,
            line_a: None,
            line_b: Some(line),
            a_text: None,
            b_text: Some(text.to_string()),
            a_spans: vec![],
            b_spans: vec![Span::new(0, text.chars().count())],
        }
    }

    /// Line only present on side A; the whole line is one changed span.
    pub fn delete(line: usize, text: &str) -> Self {
        Chunk {
            tag: ChunkType::Delete,
            line_a: Some(line),
            line_b: None,
            a_text: Some(text.to_string()),
            b_text: None,
            a_spans: vec![Span::new(0, text.chars().count())],
            b_spans: vec![],
        }
    }

    pub fn replace(
        line: usize,
        a_text: &str,
        b_text: &str,
        a_spans: Vec<Span>,
        b_spans: Vec<Span>,
    ) -> Self {
        Chunk {
            tag: ChunkType::Replace,
            line_a: Some(line),
            line_b: Some(line),
            a_text: Some(a_text.to_string()),
            b_text: Some(b_text.to_string()),
            a_spans,
            b_spans,
        }
    }

    /// The shared index this chunk was aligned at.
    pub fn position(&self) -> usize {
        self.line_a.or(self.line_b).unwrap_or(0)
    }
}
