use crate::constants::DOCX_SUFFIX;

/// An uploaded document before extraction: raw bytes plus the filename the
/// client declared, which is only used to pick the extraction path.
#[derive(Debug, Clone)]
pub struct DocumentFile {
    pub filename: String,
    pub contents: Vec<u8>,
}

impl DocumentFile {
    pub fn new(filename: impl Into<String>, contents: Vec<u8>) -> Self {
        DocumentFile {
            filename: filename.into(),
            contents,
        }
    }

    pub fn format(&self) -> DocumentFormat {
        DocumentFormat::from_filename(&self.filename)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Docx,
    PlainText,
}

impl DocumentFormat {
    pub fn from_filename(filename: &str) -> Self {
        if filename.ends_with(DOCX_SUFFIX) {
            DocumentFormat::Docx
        } else {
            DocumentFormat::PlainText
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_filename() {
        assert_eq!(
            DocumentFormat::from_filename("report.docx"),
            DocumentFormat::Docx
        );
        assert_eq!(
            DocumentFormat::from_filename("notes.txt"),
            DocumentFormat::PlainText
        );
        assert_eq!(
            DocumentFormat::from_filename("no_extension"),
            DocumentFormat::PlainText
        );
        // suffix match is case sensitive
        assert_eq!(
            DocumentFormat::from_filename("REPORT.DOCX"),
            DocumentFormat::PlainText
        );
    }
}
