//! String-template rendering of the upload form and the comparison table.

use std::collections::HashMap;

use libdocdiff::model::{Chunk, ChunkType, DocumentDiff, Span};

const PAGE_STYLE: &str = r#"
      body { font-family: system-ui, sans-serif; }
      table.diff { font-size: 13px; border-collapse: collapse; }
      td, th { border: 1px solid #d0d7de; padding: 2px 4px; vertical-align: top; }
      th { background: #f6f8fa; }
      td.num { color: #6e7781; text-align: right; }
      .diff_add { background: #e6ffed; }   /* similar to GitHub green */
      .diff_sub { background: #ffeef0; }   /* similar to GitHub red   */
"#;

pub fn form_page() -> String {
    r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8" />
    <title>DocDiff</title>
  </head>
  <body>
    <h1>Compare two documents</h1>
    <form action="/diff" method="post" enctype="multipart/form-data">
      <div>
        <label>Document A: <input type="file" name="file_a" /></label>
      </div>
      <div>
        <label>Document B: <input type="file" name="file_b" /></label>
      </div>
      <button type="submit">Compare</button>
    </form>
  </body>
</html>
"#
    .to_string()
}

pub fn diff_page(diff: &DocumentDiff) -> String {
    let filename_a = diff.filename_a.as_deref().unwrap_or("Document A");
    let filename_b = diff.filename_b.as_deref().unwrap_or("Document B");

    let mut page = String::new();
    page.push_str("<!doctype html>\n<html>\n  <head>\n    <meta charset=\"utf-8\" />\n");
    page.push_str(&format!(
        "    <title>Diff: {} vs {}</title>\n",
        escape(filename_a),
        escape(filename_b)
    ));
    page.push_str(&format!("    <style>{PAGE_STYLE}    </style>\n"));
    page.push_str("  </head>\n  <body>\n    <a href=\"/\">&larr; back</a>\n    <h1>Diff</h1>\n");
    page.push_str(&diff_table(diff));
    page.push_str("  </body>\n</html>\n");
    page
}

fn diff_table(diff: &DocumentDiff) -> String {
    let chunks_by_position: HashMap<usize, &Chunk> = diff
        .chunks
        .iter()
        .map(|chunk| (chunk.position(), chunk))
        .collect();

    let filename_a = diff.filename_a.as_deref().unwrap_or("Document A");
    let filename_b = diff.filename_b.as_deref().unwrap_or("Document B");

    let mut table = String::new();
    table.push_str("    <table class=\"diff\">\n");
    table.push_str(&format!(
        "      <tr><th></th><th>{}</th><th></th><th>{}</th></tr>\n",
        escape(filename_a),
        escape(filename_b)
    ));

    let max_len = diff.lines_a.len().max(diff.lines_b.len());
    for i in 0..max_len {
        let row = match chunks_by_position.get(&i) {
            None => {
                // unchanged context line
                let text = escape(diff.lines_a.get(i).map(String::as_str).unwrap_or_default());
                format!(
                    "      <tr><td class=\"num\">{n}</td><td>{text}</td><td class=\"num\">{n}</td><td>{text}</td></tr>\n",
                    n = i + 1,
                )
            }
            Some(chunk) => chunk_row(chunk, i),
        };
        table.push_str(&row);
    }

    table.push_str("    </table>\n");
    table
}

fn chunk_row(chunk: &Chunk, index: usize) -> String {
    let (a_num, a_cell) = match chunk.tag {
        ChunkType::Insert => (String::new(), String::new()),
        _ => (
            format!("{}", index + 1),
            highlight(
                chunk.a_text.as_deref().unwrap_or_default(),
                &chunk.a_spans,
                "diff_sub",
            ),
        ),
    };
    let (b_num, b_cell) = match chunk.tag {
        ChunkType::Delete => (String::new(), String::new()),
        _ => (
            format!("{}", index + 1),
            highlight(
                chunk.b_text.as_deref().unwrap_or_default(),
                &chunk.b_spans,
                "diff_add",
            ),
        ),
    };

    format!(
        "      <tr><td class=\"num\">{a_num}</td><td>{a_cell}</td><td class=\"num\">{b_num}</td><td>{b_cell}</td></tr>\n"
    )
}

/// Wrap the span ranges of `text` in `<span>` tags of the given class.
///
/// Span offsets are code-point offsets, so the line is indexed by `char`
/// rather than sliced by byte.
fn highlight(text: &str, spans: &[Span], class: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();
    let mut cursor = 0;

    for span in spans {
        let start = span.start.min(chars.len());
        let end = span.end.min(chars.len());
        if start > cursor {
            out.push_str(&escape(&chars[cursor..start].iter().collect::<String>()));
        }
        if end > start {
            out.push_str(&format!("<span class=\"{class}\">"));
            out.push_str(&escape(&chars[start..end].iter().collect::<String>()));
            out.push_str("</span>");
        }
        cursor = cursor.max(end);
    }
    if cursor < chars.len() {
        out.push_str(&escape(&chars[cursor..].iter().collect::<String>()));
    }

    out
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use libdocdiff::compare;
    use libdocdiff::model::DocumentFile;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_highlight_wraps_span() {
        let html = highlight("bar!", &[Span::new(3, 4)], "diff_add");
        assert_eq!(html, "bar<span class=\"diff_add\">!</span>");
    }

    #[test]
    fn test_highlight_escapes_inside_and_outside_spans() {
        let html = highlight("a<b", &[Span::new(1, 2)], "diff_sub");
        assert_eq!(html, "a<span class=\"diff_sub\">&lt;</span>b");
    }

    #[test]
    fn test_highlight_without_spans() {
        assert_eq!(highlight("plain", &[], "diff_add"), "plain");
    }

    #[test]
    fn test_diff_page_marks_changed_chars() {
        let file_a = DocumentFile::new("a.txt", b"foo\nbar".to_vec());
        let file_b = DocumentFile::new("b.txt", b"foo\nbar!".to_vec());
        let diff = compare::compare_files(&file_a, &file_b).unwrap();

        let page = diff_page(&diff);
        assert!(page.contains("a.txt"));
        assert!(page.contains("b.txt"));
        assert!(page.contains("<span class=\"diff_add\">!</span>"));
        // the unchanged line renders as plain context on both sides
        assert!(page.contains("<td>foo</td><td class=\"num\">1</td><td>foo</td>"));
    }

    #[test]
    fn test_form_page_posts_to_diff() {
        let page = form_page();
        assert!(page.contains("action=\"/diff\""));
        assert!(page.contains("name=\"file_a\""));
        assert!(page.contains("name=\"file_b\""));
    }
}
