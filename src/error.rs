/// Errors that can occur during Markdown-to-HTML conversion and page
/// generation.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MarkdownToHtmlError {
    /// Unbalanced inline delimiter in a text run.
    #[error("markdown syntax error: {0}")]
    Syntax(String),
    /// A leaf node reached serialization without a value.
    #[error("invalid HTML: {0}")]
    Content(String),
    /// A container node reached serialization without a children list.
    #[error("invalid HTML: {0}")]
    Structure(String),
    /// A document has no leading h1 heading to use as its page title.
    #[error("no h1 heading found for page title")]
    MissingTitle,
    /// A file operation failed while generating a site.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
