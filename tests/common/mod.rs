// Shared test helpers for markdown2html.

use std::fs;
use std::path::Path;

/// A loaded fixture: Markdown input, expected HTML, optional side data.
pub struct Fixture {
    pub markdown: String,
    pub expected_html: String,
    pub expected_title: Option<String>,
}

/// Load a test fixture's input Markdown, expected HTML, and side data.
///
/// Fixture directories contain `index.md`, `index.html`, and optionally
/// `index.json` (`{"title": "..."}` pins the extracted page title).
pub fn load_fixture(name: &str) -> Fixture {
    let base = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test-fixtures")
        .join(name);
    let markdown = fs::read_to_string(base.join("index.md"))
        .unwrap_or_else(|_| panic!("Missing fixture: {}/index.md", name));
    // Expected files end with an editor newline; converter output does not.
    let expected_html = fs::read_to_string(base.join("index.html"))
        .unwrap_or_else(|_| panic!("Missing fixture: {}/index.html", name))
        .trim_end()
        .to_string();

    let mut expected_title = None;
    if let Ok(json_str) = fs::read_to_string(base.join("index.json")) {
        if let Ok(val) = serde_json::from_str::<serde_json::Value>(&json_str) {
            if let Some(s) = val.get("title").and_then(|v| v.as_str()) {
                expected_title = Some(s.to_string());
            }
        }
    }

    Fixture {
        markdown,
        expected_html,
        expected_title,
    }
}
