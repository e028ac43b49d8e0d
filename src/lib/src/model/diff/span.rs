use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Half-open range `[start, end)` of changed characters within a single line.
///
/// Offsets count Unicode scalar values (code points), not bytes. Consumers
/// slicing a line by span must index by `char`.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}
