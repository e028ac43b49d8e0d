//! Character-level change spans for a pair of differing lines.

use similar::{DiffTag, TextDiff};

use crate::model::diff::span::Span;

/// Walk the opcode stream of a character diff and collect, per side, the
/// ranges the alignment judged changed.
///
/// Ranges are code-point offsets into `old`/`new`, ascending and
/// non-overlapping (opcodes are visited in textual order). Equal opcodes
/// contribute nothing; every other opcode contributes its old range to
/// `a_spans` and/or its new range to `b_spans`, whichever sides it consumes
/// characters from.
pub fn char_spans(old: &str, new: &str) -> (Vec<Span>, Vec<Span>) {
    let diff = TextDiff::from_chars(old, new);

    let mut a_spans: Vec<Span> = Vec::new();
    let mut b_spans: Vec<Span> = Vec::new();

    for op in diff.ops() {
        if op.tag() == DiffTag::Equal {
            continue;
        }
        let old_range = op.old_range();
        if !old_range.is_empty() {
            a_spans.push(Span::new(old_range.start, old_range.end));
        }
        let new_range = op.new_range();
        if !new_range.is_empty() {
            b_spans.push(Span::new(new_range.start, new_range.end));
        }
    }

    (a_spans, b_spans)
}
