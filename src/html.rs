// The HTML node tree and its serializer.
//
// Three node shapes: raw text, leaf elements wrapping a text value, and
// container elements wrapping child nodes. Parent nodes own their children.
// Shape invariants (a leaf needs a value, a container needs a children
// list) are checked when the tree is rendered, not at construction, so a
// half-built tree stays representable — `None` children is an invalid
// state, an empty `Some(vec![])` is a valid empty element.

use std::collections::BTreeMap;

use crate::error::MarkdownToHtmlError;

/// Raw text with no surrounding tag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Text {
    pub value: Option<String>,
}

/// An element rendering inline content: `<tag>value</tag>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    pub tag: String,
    pub value: Option<String>,
    pub attrs: Option<BTreeMap<String, String>>,
}

/// An element wrapping child nodes: `<tag>…children…</tag>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub tag: String,
    pub children: Option<Vec<HtmlNode>>,
    pub attrs: Option<BTreeMap<String, String>>,
}

/// A node in the HTML document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Text(Text),
    Leaf(Leaf),
    Container(Container),
}

impl HtmlNode {
    /// A text node rendering its value with no tag.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Text(Text {
            value: Some(value.into()),
        })
    }

    /// A leaf element with no attributes.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf(Leaf {
            tag: tag.into(),
            value: Some(value.into()),
            attrs: None,
        })
    }

    /// A leaf element with attributes.
    pub fn leaf_with_attrs(
        tag: impl Into<String>,
        value: impl Into<String>,
        attrs: BTreeMap<String, String>,
    ) -> Self {
        HtmlNode::Leaf(Leaf {
            tag: tag.into(),
            value: Some(value.into()),
            attrs: Some(attrs),
        })
    }

    /// A container element with no attributes.
    pub fn container(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Container(Container {
            tag: tag.into(),
            children: Some(children),
            attrs: None,
        })
    }

    /// A container element with attributes.
    pub fn container_with_attrs(
        tag: impl Into<String>,
        children: Vec<HtmlNode>,
        attrs: BTreeMap<String, String>,
    ) -> Self {
        HtmlNode::Container(Container {
            tag: tag.into(),
            children: Some(children),
            attrs: Some(attrs),
        })
    }

    /// Render this node and its subtree as an HTML string.
    ///
    /// Fails with a content error for a leaf whose value is unset and a
    /// structure error for a container whose children list is unset.
    pub fn to_html(&self) -> Result<String, MarkdownToHtmlError> {
        match self {
            HtmlNode::Text(text) => Ok(text.value.clone().unwrap_or_default()),
            HtmlNode::Leaf(leaf) => {
                let value = leaf.value.as_ref().ok_or_else(|| {
                    MarkdownToHtmlError::Content(format!("<{}> leaf node has no value", leaf.tag))
                })?;
                Ok(format!(
                    "<{}{}>{}</{}>",
                    leaf.tag,
                    attrs_to_html(leaf.attrs.as_ref()),
                    value,
                    leaf.tag
                ))
            }
            HtmlNode::Container(container) => {
                let children = container.children.as_ref().ok_or_else(|| {
                    MarkdownToHtmlError::Structure(format!(
                        "<{}> container node has no children",
                        container.tag
                    ))
                })?;
                let mut html =
                    format!("<{}{}>", container.tag, attrs_to_html(container.attrs.as_ref()));
                for child in children {
                    html.push_str(&child.to_html()?);
                }
                html.push_str(&format!("</{}>", container.tag));
                Ok(html)
            }
        }
    }
}

/// Render an attribute map as ` key="value"` pairs, sorted by key.
/// Values are emitted as-is; callers supply safe input.
fn attrs_to_html(attrs: Option<&BTreeMap<String, String>>) -> String {
    let Some(attrs) = attrs else {
        return String::new();
    };
    let mut out = String::new();
    for (key, value) in attrs {
        out.push_str(&format!(" {key}=\"{value}\""));
    }
    out
}
