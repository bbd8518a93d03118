// markdown2html — Markdown to HTML converter and static site generator core.
//
// Architecture:
//   Markdown string → block segmentation → block classification →
//   block handlers (inline pipeline inside) → HTML node tree → HTML string
//
// The grammar is a deliberately restricted Markdown dialect: flat inline
// styles (bold/italic/code/link/image, no nesting), blank-line-separated
// blocks, no escaping. Not a CommonMark implementation.
//
// The `site` module layers title extraction, template substitution, and
// directory generation on top of the pure core.

pub mod block;
mod error;
pub mod html;
pub mod inline;
pub mod site;
mod transform;

pub use error::MarkdownToHtmlError;
pub use html::HtmlNode;
pub use transform::markdown_to_tree;

/// Convert a Markdown document to an HTML fragment.
///
/// # Examples
///
/// ```
/// let html = markdown2html::convert("# Hello\n\nSome **bold** text").unwrap();
/// assert_eq!(html, "<div><h1>Hello</h1><p>Some <b>bold</b> text</p></div>");
/// ```
pub fn convert(markdown: &str) -> Result<String, MarkdownToHtmlError> {
    markdown_to_tree(markdown)?.to_html()
}
