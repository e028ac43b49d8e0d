//! Paragraph extraction for `.docx` uploads.
//!
//! A `.docx` file is a zip archive whose body lives in `word/document.xml`.
//! Paragraphs are `<w:p>` elements; the visible text of a paragraph is the
//! concatenation of its `<w:t>` runs. The fixed shape of those two tags lets
//! us pull the text out with anchored regexes rather than a full XML parser.

use std::io::{Cursor, Read};

use lazy_static::lazy_static;
use regex::Regex;
use zip::ZipArchive;

use crate::constants::DOCX_DOCUMENT_XML;
use crate::error::DocDiffError;

lazy_static! {
    // a paragraph element, including the self-closing empty form
    static ref PARAGRAPH_RE: Regex = Regex::new(r"(?s)<w:p(?: [^>]*)?>.*?</w:p>|<w:p(?: [^>]*)?/>").unwrap();
    // one text run inside a paragraph
    static ref TEXT_RUN_RE: Regex = Regex::new(r"(?s)<w:t(?: [^>]*)?>(.*?)</w:t>").unwrap();
}

/// Extract one line per paragraph from the raw bytes of a `.docx` archive.
///
/// Empty paragraphs become empty lines, matching how word processors show
/// them. Fails with a decoding error if the bytes are not a zip archive, the
/// archive has no document body, or the body is not UTF-8.
pub fn extract_paragraphs(contents: &[u8]) -> Result<Vec<String>, DocDiffError> {
    let xml = read_document_xml(contents)?;

    let paragraphs = PARAGRAPH_RE
        .find_iter(&xml)
        .map(|paragraph| paragraph_text(paragraph.as_str()))
        .collect();

    Ok(paragraphs)
}

fn read_document_xml(contents: &[u8]) -> Result<String, DocDiffError> {
    let mut archive = ZipArchive::new(Cursor::new(contents))
        .map_err(|err| DocDiffError::decoding_str(format!("not a docx archive: {err}")))?;

    let mut document = archive
        .by_name(DOCX_DOCUMENT_XML)
        .map_err(|_| DocDiffError::decoding_str("docx archive has no word/document.xml"))?;

    let mut xml = String::new();
    document
        .read_to_string(&mut xml)
        .map_err(|err| DocDiffError::decoding_str(format!("document body is not UTF-8: {err}")))?;
    Ok(xml)
}

fn paragraph_text(paragraph_xml: &str) -> String {
    let mut text = String::new();
    for run in TEXT_RUN_RE.captures_iter(paragraph_xml) {
        text.push_str(&unescape_xml(&run[1]));
    }
    text
}

fn unescape_xml(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn docx_bytes(document_xml: &str) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        let mut writer = ZipWriter::new(&mut cursor);
        writer
            .start_file(DOCX_DOCUMENT_XML, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap();
        cursor.into_inner()
    }

    const SAMPLE_DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>First paragraph</w:t></w:r></w:p>
    <w:p w14:paraId="3F2A"><w:r><w:t>Second, </w:t></w:r><w:r><w:t xml:space="preserve">two runs</w:t></w:r></w:p>
    <w:p/>
    <w:p><w:r><w:t>a &amp; b &lt;ok&gt;</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    #[test]
    fn test_extract_paragraphs() {
        let bytes = docx_bytes(SAMPLE_DOCUMENT);
        let lines = extract_paragraphs(&bytes).unwrap();
        assert_eq!(
            lines,
            vec![
                "First paragraph",
                "Second, two runs",
                "",
                "a & b <ok>",
            ]
        );
    }

    #[test]
    fn test_not_a_zip() {
        let err = extract_paragraphs(b"plain bytes").unwrap_err();
        assert!(err.is_decoding());
    }

    #[test]
    fn test_zip_without_document_xml() {
        let mut cursor = Cursor::new(Vec::new());
        let mut writer = ZipWriter::new(&mut cursor);
        writer
            .start_file("other.txt", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"hi").unwrap();
        writer.finish().unwrap();

        let err = extract_paragraphs(&cursor.into_inner()).unwrap_err();
        assert!(err.is_decoding());
    }

    #[test]
    fn test_unescape_xml() {
        assert_eq!(unescape_xml("a &amp; b"), "a & b");
        assert_eq!(unescape_xml("&lt;tag&gt;"), "<tag>");
        assert_eq!(unescape_xml("&quot;hi&apos;"), "\"hi'");
        assert_eq!(unescape_xml("plain"), "plain");
    }
}
