// Site generation glue — everything that touches the filesystem.
//
// The core pipeline is pure; this module wires it to disk: pull a page
// title out of the source, pour the converted body into an HTML template,
// copy static assets, and mirror a content tree into generated pages. A
// document that fails to convert is skipped so the rest of the batch still
// builds.

use std::fs;
use std::path::Path;

use crate::error::MarkdownToHtmlError;

/// Extract the page title from a document's leading h1 heading.
///
/// Only the first non-blank line counts; an h1 further down is not a page
/// title.
pub fn extract_title(markdown: &str) -> Result<String, MarkdownToHtmlError> {
    let first = markdown.trim_start().split('\n').next().unwrap_or("");
    match first.strip_prefix("# ") {
        Some(rest) => Ok(rest.trim().to_string()),
        None => Err(MarkdownToHtmlError::MissingTitle),
    }
}

/// Substitute the title and content into an HTML page template.
///
/// Every `{{ Title }}` and `{{ Content }}` placeholder is replaced; no
/// escaping is applied.
pub fn render_page(template: &str, title: &str, content: &str) -> String {
    template
        .replace("{{ Title }}", title)
        .replace("{{ Content }}", content)
}

/// Generate one HTML page from a Markdown source file and a template.
pub fn generate_page(
    from: &Path,
    template: &Path,
    dest: &Path,
) -> Result<(), MarkdownToHtmlError> {
    #[cfg(feature = "tracing")]
    tracing::info!(from = %from.display(), dest = %dest.display(), "generating page");
    let markdown = fs::read_to_string(from)?;
    let template = fs::read_to_string(template)?;
    let content = crate::markdown_to_tree(&markdown)?.to_html()?;
    let title = extract_title(&markdown)?;
    let page = render_page(&template, &title, &content);
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, page)?;
    Ok(())
}

/// Walk a content tree and generate one page per `.md` file, mirroring the
/// directory structure under `dest_dir`.
///
/// A page that fails to generate is logged and skipped; errors walking the
/// tree itself still abort.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template: &Path,
    dest_dir: &Path,
) -> Result<(), MarkdownToHtmlError> {
    for entry in fs::read_dir(content_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            generate_pages_recursive(&path, template, &dest_dir.join(entry.file_name()))?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            let dest = dest_dir.join(entry.file_name()).with_extension("html");
            if let Err(err) = generate_page(&path, template, &dest) {
                #[cfg(feature = "tracing")]
                tracing::warn!(page = %path.display(), %err, "skipping page");
                #[cfg(not(feature = "tracing"))]
                eprintln!("skipping {}: {err}", path.display());
            }
        }
    }
    Ok(())
}

/// Copy a directory tree, replacing any existing destination.
pub fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<(), MarkdownToHtmlError> {
    if dest.exists() {
        fs::remove_dir_all(dest)?;
    }
    fs::create_dir_all(dest)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let path = entry.path();
        let target = dest.join(entry.file_name());
        if path.is_dir() {
            copy_dir_recursive(&path, &target)?;
        } else {
            fs::copy(&path, &target)?;
            #[cfg(feature = "tracing")]
            tracing::info!(from = %path.display(), to = %target.display(), "copied file");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_title_simple() {
        assert_eq!(extract_title("# Hello World").unwrap(), "Hello World");
    }

    #[test]
    fn test_extract_title_trims_whitespace() {
        assert_eq!(
            extract_title("#    Lots of Spaces    ").unwrap(),
            "Lots of Spaces"
        );
    }

    #[test]
    fn test_extract_title_multiline() {
        assert_eq!(
            extract_title("# The Title\n\nThis is some content.\n\n## Subtitle").unwrap(),
            "The Title"
        );
    }

    #[test]
    fn test_extract_title_missing() {
        assert!(matches!(
            extract_title("This is just text without a title"),
            Err(MarkdownToHtmlError::MissingTitle)
        ));
    }

    #[test]
    fn test_extract_title_not_at_beginning() {
        assert!(matches!(
            extract_title("Some text\n# Title"),
            Err(MarkdownToHtmlError::MissingTitle)
        ));
    }

    #[test]
    fn test_render_page_replaces_placeholders() {
        let template = "<html><title>{{ Title }}</title><body>{{ Content }}</body></html>";
        assert_eq!(
            render_page(template, "Home", "<p>hi</p>"),
            "<html><title>Home</title><body><p>hi</p></body></html>"
        );
    }

    #[test]
    fn test_render_page_replaces_every_occurrence() {
        let template = "{{ Title }} / {{ Title }}: {{ Content }}";
        assert_eq!(render_page(template, "T", "C"), "T / T: C");
    }
}
