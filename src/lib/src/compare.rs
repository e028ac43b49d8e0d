//! Positional comparison of two line sequences into chunk records.
//!
//! Lines are compared index for index, not re-aligned: a single inserted line
//! shifts every following line into a `replace` chunk. That trade keeps the
//! comparison O(lines x line length) with no matching search, and it is load
//! bearing for consumers that rely on one chunk per shared index.

pub mod spans;

use crate::error::DocDiffError;
use crate::extract;
use crate::model::diff::chunk::Chunk;
use crate::model::diff::document_diff::DocumentDiff;
use crate::model::document::DocumentFile;

/// Extract lines from both documents and compare them.
pub fn compare_files(
    file_a: &DocumentFile,
    file_b: &DocumentFile,
) -> Result<DocumentDiff, DocDiffError> {
    let lines_a = extract::extract_lines(file_a)?;
    let lines_b = extract::extract_lines(file_b)?;
    log::debug!(
        "compare_files {} ({} lines) vs {} ({} lines)",
        file_a.filename,
        lines_a.len(),
        file_b.filename,
        lines_b.len()
    );

    let chunks = build_chunks(&lines_a, &lines_b);
    Ok(DocumentDiff {
        chunks,
        filename_a: Some(file_a.filename.clone()),
        filename_b: Some(file_b.filename.clone()),
        lines_a,
        lines_b,
    })
}

/// Compare two line sequences position by position.
///
/// One chunk per differing index, in ascending index order. Equal lines are
/// not reported. Indices past the end of the shorter sequence become inserts
/// (side B longer) or deletes (side A longer). Total over any two inputs;
/// two empty sequences yield an empty list.
pub fn build_chunks(lines_a: &[String], lines_b: &[String]) -> Vec<Chunk> {
    let max_len = lines_a.len().max(lines_b.len());
    let mut chunks: Vec<Chunk> = Vec::new();

    for i in 0..max_len {
        match (lines_a.get(i), lines_b.get(i)) {
            // both missing, cannot happen below max_len
            (None, None) => continue,
            (Some(a), Some(b)) if a == b => continue,
            (None, Some(b)) => chunks.push(Chunk::insert(i, b)),
            (Some(a), None) => chunks.push(Chunk::delete(i, a)),
            (Some(a), Some(b)) => {
                let (a_spans, b_spans) = spans::char_spans(a, b);
                chunks.push(Chunk::replace(i, a, b, a_spans, b_spans));
            }
        }
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::diff::chunk::ChunkType;
    use crate::model::diff::span::Span;

    fn lines(strs: &[&str]) -> Vec<String> {
        strs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_identical_sequences_produce_no_chunks() {
        let l = lines(&["foo", "bar", "baz"]);
        assert!(build_chunks(&l, &l).is_empty());
    }

    #[test]
    fn test_empty_sequences() {
        assert!(build_chunks(&[], &[]).is_empty());
    }

    #[test]
    fn test_insert_into_empty() {
        let chunks = build_chunks(&[], &lines(&["x"]));
        assert_eq!(chunks.len(), 1);
        let chunk = &chunks[0];
        assert_eq!(chunk.tag, ChunkType::Insert);
        assert_eq!(chunk.line_a, None);
        assert_eq!(chunk.line_b, Some(0));
        assert_eq!(chunk.b_text.as_deref(), Some("x"));
        assert_eq!(chunk.b_spans, vec![Span::new(0, 1)]);
        assert!(chunk.a_spans.is_empty());
    }

    #[test]
    fn test_trailing_delete() {
        let chunks = build_chunks(&lines(&["one", "two"]), &lines(&["one"]));
        assert_eq!(chunks.len(), 1);
        let chunk = &chunks[0];
        assert_eq!(chunk.tag, ChunkType::Delete);
        assert_eq!(chunk.line_a, Some(1));
        assert_eq!(chunk.line_b, None);
        assert_eq!(chunk.a_text.as_deref(), Some("two"));
        assert_eq!(chunk.a_spans, vec![Span::new(0, 3)]);
        assert!(chunk.b_spans.is_empty());
    }

    #[test]
    fn test_single_replace_with_char_spans() {
        let chunks = build_chunks(
            &lines(&["foo", "bar", "baz"]),
            &lines(&["foo", "bar!", "baz"]),
        );
        assert_eq!(chunks.len(), 1);
        let chunk = &chunks[0];
        assert_eq!(chunk.tag, ChunkType::Replace);
        assert_eq!(chunk.line_a, Some(1));
        assert_eq!(chunk.line_b, Some(1));
        assert_eq!(chunk.a_text.as_deref(), Some("bar"));
        assert_eq!(chunk.b_text.as_deref(), Some("bar!"));
        // only "!" was added, so nothing is marked on side A
        assert!(chunk.a_spans.is_empty());
        assert_eq!(chunk.b_spans, vec![Span::new(3, 4)]);
    }

    #[test]
    fn test_chunks_ascend_and_cover_all_positions() {
        let a = lines(&["same", "old1", "same2", "old2"]);
        let b = lines(&["same", "new1", "same2", "new2", "extra"]);
        let chunks = build_chunks(&a, &b);

        let positions: Vec<usize> = chunks.iter().map(|c| c.position()).collect();
        assert_eq!(positions, vec![1, 3, 4]);

        // chunks + equal positions account for every shared index
        let max_len = a.len().max(b.len());
        let equal = (0..max_len)
            .filter(|&i| a.get(i).is_some() && a.get(i) == b.get(i))
            .count();
        assert_eq!(chunks.len() + equal, max_len);
    }

    #[test]
    fn test_insert_delete_symmetry() {
        let a = lines(&["shared", "only_in_a"]);
        let b = lines(&["shared"]);

        let forward = build_chunks(&a, &b);
        let backward = build_chunks(&b, &a);
        assert_eq!(forward.len(), backward.len());

        assert_eq!(forward[0].tag, ChunkType::Delete);
        assert_eq!(backward[0].tag, ChunkType::Insert);
        assert_eq!(forward[0].a_text, backward[0].b_text);
        assert_eq!(forward[0].line_a, backward[0].line_b);
    }

    #[test]
    fn test_shifted_lines_become_replaces() {
        // no re-alignment: inserting a line at the top turns every following
        // position into a replace, plus one trailing insert
        let a = lines(&["alpha", "beta"]);
        let b = lines(&["inserted", "alpha", "beta"]);
        let chunks = build_chunks(&a, &b);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].tag, ChunkType::Replace);
        assert_eq!(chunks[1].tag, ChunkType::Replace);
        assert_eq!(chunks[2].tag, ChunkType::Insert);
    }

    #[test]
    fn test_replace_spans_stay_in_bounds() {
        let a = lines(&["the quick brown fox"]);
        let b = lines(&["the slow brown ox"]);
        let chunks = build_chunks(&a, &b);
        assert_eq!(chunks.len(), 1);
        let chunk = &chunks[0];

        let a_len = chunk.a_text.as_ref().unwrap().chars().count();
        let b_len = chunk.b_text.as_ref().unwrap().chars().count();
        for span in &chunk.a_spans {
            assert!(span.start < span.end);
            assert!(span.end <= a_len);
        }
        for span in &chunk.b_spans {
            assert!(span.start < span.end);
            assert!(span.end <= b_len);
        }
    }

    #[test]
    fn test_unicode_replace_uses_code_point_offsets() {
        let chunks = build_chunks(&lines(&["héllo"]), &lines(&["hållo"]));
        assert_eq!(chunks.len(), 1);
        let chunk = &chunks[0];
        assert_eq!(chunk.a_spans, vec![Span::new(1, 2)]);
        assert_eq!(chunk.b_spans, vec![Span::new(1, 2)]);
    }

    #[test]
    fn test_compare_files_plain_text() {
        let file_a = DocumentFile::new("a.txt", b"foo\nbar\nbaz".to_vec());
        let file_b = DocumentFile::new("b.txt", b"foo\nbar!\nbaz".to_vec());
        let diff = compare_files(&file_a, &file_b).unwrap();

        assert_eq!(diff.filename_a.as_deref(), Some("a.txt"));
        assert_eq!(diff.filename_b.as_deref(), Some("b.txt"));
        assert_eq!(diff.lines_a.len(), 3);
        assert_eq!(diff.chunks.len(), 1);
        assert!(!diff.is_identical());
    }
}
