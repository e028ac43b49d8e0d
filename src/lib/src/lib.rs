//! # libdocdiff
//!
//! DocDiff is a small document comparison engine. Two uploaded documents are
//! reduced to ordered line sequences, then compared position by position into
//! a list of [`model::Chunk`] records describing every inserted, deleted, or
//! replaced line, with character-level change spans on replaced lines.
//!
//! ```no_run
//! use libdocdiff::compare;
//!
//! let lines_a = vec!["foo".to_string(), "bar".to_string()];
//! let lines_b = vec!["foo".to_string(), "bar!".to_string()];
//! let chunks = compare::build_chunks(&lines_a, &lines_b);
//! assert_eq!(chunks.len(), 1);
//! ```

pub mod compare;
pub mod constants;
pub mod error;
pub mod extract;
pub mod model;
pub mod util;
pub mod view;
