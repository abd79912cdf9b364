/// Rendering bookmarks into downloadable documents
use crate::bookmark::BookmarkRecord;

pub const DOCUMENT_TITLE: &str = "Twitter Bookmarks Export";
pub const HEADING: &str = "Twitter Bookmarks";

const STYLE: &str = "body { font-family: system-ui; max-width: 800px; margin: 2rem auto; padding: 0 1rem; }
.bookmark { border: 1px solid #e1e1e1; padding: 1rem; margin: 1rem 0; border-radius: 8px; }
.meta { color: #666; font-size: 0.9rem; }";

/// Output formats offered on the export buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Html,
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Html, ExportFormat::Json];

    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Html => "twitter-bookmarks.html",
            ExportFormat::Json => "twitter-bookmarks.json",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Html => "text/html",
            ExportFormat::Json => "application/json",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Html => "Export as HTML",
            ExportFormat::Json => "Export as JSON",
        }
    }

    pub fn render(&self, records: &[BookmarkRecord]) -> Result<Vec<u8>, String> {
        match self {
            ExportFormat::Html => Ok(render_html(records)),
            ExportFormat::Json => serde_json::to_vec_pretty(records)
                .map_err(|e| format!("Failed to serialize bookmarks: {:?}", e)),
        }
    }
}

/// Escape the characters that are special in HTML text and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render a standalone HTML document with one block per record, in input order
pub fn render_html(records: &[BookmarkRecord]) -> Vec<u8> {
    let blocks: String = records.iter().map(render_block).collect();

    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>{title}</title><style>\n{style}\n</style></head>\n<body><h1>{heading}</h1>\n{blocks}</body></html>\n",
        title = DOCUMENT_TITLE,
        style = STYLE,
        heading = HEADING,
        blocks = blocks,
    )
    .into_bytes()
}

fn render_block(record: &BookmarkRecord) -> String {
    format!(
        "<div class=\"bookmark\"><p>{}</p><div class=\"meta\">By @{} • {} • {} likes</div></div>\n",
        escape_html(&record.text),
        escape_html(&record.author),
        escape_html(&record.date),
        record.likes
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmark::sample_bookmarks;

    fn render_to_string(records: &[BookmarkRecord]) -> String {
        String::from_utf8(render_html(records)).unwrap()
    }

    fn block_count(html: &str) -> usize {
        html.matches("class=\"bookmark\"").count()
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain text"), "plain text");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("<b>\"hi\"</b>"), "&lt;b&gt;&quot;hi&quot;&lt;/b&gt;");
        assert_eq!(escape_html("it's"), "it&#39;s");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_escape_html_leaves_unicode_alone() {
        assert_eq!(escape_html("café • 日本 🚀"), "café • 日本 🚀");
    }

    #[test]
    fn test_render_empty() {
        let html = render_to_string(&[]);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Twitter Bookmarks Export</title>"));
        assert!(html.contains("<h1>Twitter Bookmarks</h1>"));
        assert!(html.trim_end().ends_with("</body></html>"));
        assert_eq!(block_count(&html), 0);
    }

    #[test]
    fn test_render_single_record() {
        let records = vec![BookmarkRecord::new("1", "Hello #world", "Bob", "2024-01-01", 5)];

        let html = render_to_string(&records);

        assert_eq!(block_count(&html), 1);
        assert!(html.contains("<p>Hello #world</p>"));
        assert!(html.contains("By @Bob • 2024-01-01 • 5 likes"));
    }

    #[test]
    fn test_render_preserves_order() {
        let records = vec![
            BookmarkRecord::new("a", "first", "alice", "2024-01-03", 1),
            BookmarkRecord::new("b", "second", "bob", "2024-01-02", 2),
            BookmarkRecord::new("c", "third", "carol", "2024-01-01", 3),
        ];

        let html = render_to_string(&records);

        assert_eq!(block_count(&html), 3);
        let first = html.find("<p>first</p>").unwrap();
        let second = html.find("<p>second</p>").unwrap();
        let third = html.find("<p>third</p>").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_render_sample_fields_verbatim() {
        let records = sample_bookmarks();

        let html = render_to_string(&records);

        assert_eq!(block_count(&html), records.len());
        for record in &records {
            assert!(html.contains(&format!("By @{} • {} • {} likes", record.author, record.date, record.likes)));
        }
    }

    #[test]
    fn test_render_escapes_markup() {
        let records = vec![BookmarkRecord::new(
            "1",
            "<script>alert('x')</script>",
            "<img src=x>",
            "2024-01-01",
            0,
        )];

        let html = render_to_string(&records);

        assert!(!html.contains("<script>"));
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("By @&lt;img src=x&gt;"));
        assert_eq!(block_count(&html), 1);
    }

    #[test]
    fn test_export_format_metadata() {
        assert_eq!(ExportFormat::Html.file_name(), "twitter-bookmarks.html");
        assert_eq!(ExportFormat::Html.mime_type(), "text/html");
        assert_eq!(ExportFormat::Json.file_name(), "twitter-bookmarks.json");
        assert_eq!(ExportFormat::Json.mime_type(), "application/json");
    }

    #[test]
    fn test_export_format_render_html_matches() {
        let records = sample_bookmarks();
        assert_eq!(ExportFormat::Html.render(&records).unwrap(), render_html(&records));
    }

    #[test]
    fn test_export_format_render_json() {
        let records = sample_bookmarks();

        let bytes = ExportFormat::Json.render(&records).unwrap();
        let parsed: Vec<BookmarkRecord> = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(parsed, records);
    }
}
