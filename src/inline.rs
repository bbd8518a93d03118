// Inline span parsing — flowing text → styled spans.
//
// A text run becomes spans through a fixed sequence of passes: bold,
// italic, and code delimiter splitting, then image and link extraction.
// Each pass only touches spans still marked Plain, so earlier passes
// protect their output from later ones (bold's `**` runs before italic's
// `_`, images before links).

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::MarkdownToHtmlError;

static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[([^\[\]]*)\]\(([^()]*)\)").expect("hardcoded regex is valid")
});

// No lookbehind in the regex crate; `![alt](url)` is excluded by checking
// the byte before each match instead.
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\[\]]*)\]\(([^()]*)\)").expect("hardcoded regex is valid")
});

/// Style of one inline run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanStyle {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// One inline-styled run of text. Link and image spans carry a URL.
#[derive(Debug, Clone, Eq)]
pub struct InlineSpan {
    pub text: String,
    pub style: SpanStyle,
    pub url: Option<String>,
}

impl PartialEq for InlineSpan {
    // URL-carrying styles compare all three fields; for the rest a stray
    // url value is ignored.
    fn eq(&self, other: &Self) -> bool {
        if self.text != other.text || self.style != other.style {
            return false;
        }
        match self.style {
            SpanStyle::Link | SpanStyle::Image => self.url == other.url,
            _ => true,
        }
    }
}

impl InlineSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::Plain,
            url: None,
        }
    }

    pub fn styled(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
            url: None,
        }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::Link,
            url: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: alt.into(),
            style: SpanStyle::Image,
            url: Some(url.into()),
        }
    }
}

/// Split every Plain span on `delimiter`, alternating plain/styled parts.
///
/// Even-index parts stay Plain and are dropped when blank; odd-index parts
/// take `style` and are kept verbatim. An even part count means an
/// unterminated delimiter and is a syntax error — detected by counting
/// parts, not by a nesting check.
pub fn split_delimiter(
    spans: Vec<InlineSpan>,
    delimiter: &str,
    style: SpanStyle,
) -> Result<Vec<InlineSpan>, MarkdownToHtmlError> {
    let mut result = Vec::new();
    for span in spans {
        if span.style != SpanStyle::Plain {
            result.push(span);
            continue;
        }
        let parts: Vec<&str> = span.text.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(MarkdownToHtmlError::Syntax(format!(
                "unbalanced {:?} delimiter in {:?}",
                delimiter, span.text
            )));
        }
        for (i, part) in parts.iter().enumerate() {
            if i % 2 == 0 {
                if !part.trim().is_empty() {
                    result.push(InlineSpan::plain(*part));
                }
            } else {
                result.push(InlineSpan::styled(*part, style));
            }
        }
    }
    Ok(result)
}

/// Extract all `![alt](url)` occurrences as `(alt, url)` pairs, in order.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    IMAGE_RE
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Extract all `[text](url)` occurrences not preceded by `!`, in order.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    LINK_RE
        .captures_iter(text)
        .filter(|caps| {
            let m = caps.get(0).expect("whole match is always present");
            m.start() == 0 || text.as_bytes()[m.start() - 1] != b'!'
        })
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

fn first_image(text: &str) -> Option<(Range<usize>, String, String)> {
    IMAGE_RE.captures(text).map(|caps| {
        let m = caps.get(0).expect("whole match is always present");
        (m.range(), caps[1].to_string(), caps[2].to_string())
    })
}

fn first_link(text: &str) -> Option<(Range<usize>, String, String)> {
    for caps in LINK_RE.captures_iter(text) {
        let m = caps.get(0).expect("whole match is always present");
        if m.start() > 0 && text.as_bytes()[m.start() - 1] == b'!' {
            continue;
        }
        return Some((m.range(), caps[1].to_string(), caps[2].to_string()));
    }
    None
}

/// Split every Plain span around its `![alt](url)` occurrences.
pub fn split_images(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    split_occurrences(spans, first_image, SpanStyle::Image)
}

/// Split every Plain span around its `[text](url)` occurrences.
pub fn split_links(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    split_occurrences(spans, first_link, SpanStyle::Link)
}

fn split_occurrences(
    spans: Vec<InlineSpan>,
    find: fn(&str) -> Option<(Range<usize>, String, String)>,
    style: SpanStyle,
) -> Vec<InlineSpan> {
    let mut result = Vec::new();
    for span in spans {
        if span.style != SpanStyle::Plain {
            result.push(span);
            continue;
        }
        split_around_first(&span.text, find, style, &mut result);
    }
    result
}

// One occurrence is consumed per level; the remainder is re-scanned. A text
// with no occurrence passes through as-is, which is also what emits a
// blank-but-non-empty tail verbatim at the bottom of the recursion.
fn split_around_first(
    text: &str,
    find: fn(&str) -> Option<(Range<usize>, String, String)>,
    style: SpanStyle,
    out: &mut Vec<InlineSpan>,
) {
    let Some((range, label, url)) = find(text) else {
        out.push(InlineSpan::plain(text));
        return;
    };
    let prefix = &text[..range.start];
    if !prefix.trim().is_empty() {
        out.push(InlineSpan::plain(prefix));
    }
    out.push(InlineSpan {
        text: label,
        style,
        url: Some(url),
    });
    let suffix = &text[range.end..];
    if !suffix.is_empty() {
        split_around_first(suffix, find, style, out);
    }
}

/// Run the full inline pipeline over one text run.
///
/// Pass order is fixed: bold, italic, code, images, links. Images must run
/// before links so the link pattern never claims the bracket half of an
/// image occurrence.
pub fn text_to_spans(text: &str) -> Result<Vec<InlineSpan>, MarkdownToHtmlError> {
    let spans = vec![InlineSpan::plain(text)];
    let spans = split_delimiter(spans, "**", SpanStyle::Bold)?;
    let spans = split_delimiter(spans, "_", SpanStyle::Italic)?;
    let spans = split_delimiter(spans, "`", SpanStyle::Code)?;
    let spans = split_images(spans);
    Ok(split_links(spans))
}
