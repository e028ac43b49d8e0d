//! Turning an uploaded document into an ordered sequence of text lines.

pub mod docx;

use crate::error::DocDiffError;
use crate::model::document::{DocumentFile, DocumentFormat};

/// Extract the line sequence of a document.
///
/// `.docx` uploads go through structured paragraph extraction, one line per
/// paragraph. Everything else is decoded as UTF-8 text with invalid byte
/// sequences replaced (never a hard failure) and split into lines.
pub fn extract_lines(doc: &DocumentFile) -> Result<Vec<String>, DocDiffError> {
    match doc.format() {
        DocumentFormat::Docx => docx::extract_paragraphs(&doc.contents),
        DocumentFormat::PlainText => Ok(plain_text_lines(&doc.contents)),
    }
}

fn plain_text_lines(contents: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(contents)
        .lines()
        .map(String::from)
        .collect()
}
