//! Constants shared between libdocdiff and the server

pub const DOCDIFF_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Filename suffix that selects the structured paragraph extraction path
pub const DOCX_SUFFIX: &str = ".docx";

/// Zip member holding the document body of a `.docx` archive
pub const DOCX_DOCUMENT_XML: &str = "word/document.xml";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: &str = "3000";

/// Default cap on a single uploaded document, in bytes
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
