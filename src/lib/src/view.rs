//! JSON response types returned over the HTTP boundary

pub mod diff;
pub mod http;
pub mod status_message;
pub mod version;

pub use crate::view::diff::DiffResponse;
pub use crate::view::status_message::{StatusMessage, StatusMessageDescription};
pub use crate::view::version::VersionResponse;
