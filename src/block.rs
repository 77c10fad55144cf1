/// The kind of an inline text span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Text,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A typed run of inline text. Links and images carry the URL they point
/// at in `target`; an absent target and an empty one are distinct values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub content: String,
    pub kind: SpanKind,
    pub target: Option<String>,
}

impl Span {
    pub fn new(content: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            content: content.into(),
            kind,
            target: None,
        }
    }

    pub fn with_target(
        content: impl Into<String>,
        kind: SpanKind,
        target: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            kind,
            target: Some(target.into()),
        }
    }
}

/// Block-level structure of a blank-line-separated chunk of Markdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Heading(u8),
    CodeFence,
    Quote,
    UnorderedList,
    OrderedList,
}
