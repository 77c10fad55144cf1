use crate::error::MarkdownError;

/// A generic HTML tree node.
///
/// A `Leaf` renders its value (wrapped in its tag, if it has one) and never
/// has children; a `Parent` renders its children in order inside its tag.
/// Construction is deliberately unvalidated: a node missing a required
/// field only fails when [`HtmlNode::to_html`] reaches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attrs: Vec<(String, String)>,
    },
    Parent {
        tag: Option<String>,
        children: Option<Vec<HtmlNode>>,
        attrs: Vec<(String, String)>,
    },
}

impl HtmlNode {
    /// A leaf with no surrounding tag renders its value verbatim.
    pub fn leaf(tag: Option<&str>, value: impl Into<String>) -> Self {
        Self::Leaf {
            tag: tag.map(str::to_string),
            value: Some(value.into()),
            attrs: Vec::new(),
        }
    }

    pub fn leaf_with_attrs(
        tag: &str,
        value: impl Into<String>,
        attrs: Vec<(String, String)>,
    ) -> Self {
        Self::Leaf {
            tag: Some(tag.to_string()),
            value: Some(value.into()),
            attrs,
        }
    }

    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Self {
        Self::Parent {
            tag: Some(tag.to_string()),
            children: Some(children),
            attrs: Vec::new(),
        }
    }

    /// Serialize this node and everything below it to an HTML string.
    ///
    /// Fails on the first node violating the structural contract: a leaf
    /// with no value, a parent with no tag, or a parent whose children are
    /// absent (an empty child list is fine and renders an empty body).
    pub fn to_html(&self) -> Result<String, MarkdownError> {
        match self {
            Self::Leaf { tag, value, attrs } => {
                let value = value.as_deref().ok_or(MarkdownError::MissingValue)?;
                match tag {
                    None => Ok(value.to_string()),
                    Some(tag) => Ok(format!(
                        "<{tag}{}>{value}</{tag}>",
                        attrs_to_html(attrs)
                    )),
                }
            }
            Self::Parent {
                tag,
                children,
                attrs,
            } => {
                let tag = tag.as_deref().ok_or(MarkdownError::MissingTag)?;
                let children = children.as_deref().ok_or(MarkdownError::MissingChildren)?;
                let mut body = String::new();
                for child in children {
                    body.push_str(&child.to_html()?);
                }
                Ok(format!("<{tag}{}>{body}</{tag}>", attrs_to_html(attrs)))
            }
        }
    }
}

/// Render attributes in insertion order as ` key="value"` pairs.
/// Values are emitted as-is; nothing is escaped.
fn attrs_to_html(attrs: &[(String, String)]) -> String {
    attrs
        .iter()
        .map(|(key, value)| format!(" {key}=\"{value}\""))
        .collect()
}
