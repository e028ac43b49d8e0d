//! Error types for libdocdiff

use std::fmt;
use std::io;

/// Boxed message payload for error variants that only carry a description.
#[derive(Debug)]
pub struct StringError(String);

impl From<&str> for StringError {
    fn from(s: &str) -> Self {
        StringError(s.to_string())
    }
}

impl From<String> for StringError {
    fn from(s: String) -> Self {
        StringError(s)
    }
}

impl fmt::Display for StringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug)]
pub enum DocDiffError {
    /// Catch-all with a human readable message
    Basic(StringError),
    /// Uploaded bytes could not be interpreted under the declared format
    Decoding(StringError),
    IO(io::Error),
    Serde(serde_json::Error),
    Zip(zip::result::ZipError),
}

impl DocDiffError {
    pub fn basic_str(s: impl AsRef<str>) -> Self {
        DocDiffError::Basic(StringError::from(s.as_ref()))
    }

    pub fn decoding_str(s: impl AsRef<str>) -> Self {
        DocDiffError::Decoding(StringError::from(s.as_ref()))
    }

    pub fn is_decoding(&self) -> bool {
        matches!(self, DocDiffError::Decoding(_))
    }
}

impl fmt::Display for DocDiffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocDiffError::Basic(err) => write!(f, "{err}"),
            DocDiffError::Decoding(err) => write!(f, "Could not decode document: {err}"),
            DocDiffError::IO(err) => write!(f, "IO error: {err}"),
            DocDiffError::Serde(err) => write!(f, "Serialization error: {err}"),
            DocDiffError::Zip(err) => write!(f, "Zip error: {err}"),
        }
    }
}

impl std::error::Error for DocDiffError {}

impl From<io::Error> for DocDiffError {
    fn from(err: io::Error) -> Self {
        DocDiffError::IO(err)
    }
}

impl From<serde_json::Error> for DocDiffError {
    fn from(err: serde_json::Error) -> Self {
        DocDiffError::Serde(err)
    }
}

impl From<zip::result::ZipError> for DocDiffError {
    fn from(err: zip::result::ZipError) -> Self {
        DocDiffError::Zip(err)
    }
}
