use thiserror::Error;

/// Everything that can go wrong while parsing Markdown or serializing the
/// resulting HTML tree. All variants abort the document being processed;
/// nothing is retried and no partial output is produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarkdownError {
    #[error("invalid markdown: {delimiter} section not closed")]
    UnterminatedDelimiter { delimiter: &'static str },

    #[error("invalid markdown: image not properly formatted")]
    MalformedImage,

    #[error("invalid markdown: link not properly formatted")]
    MalformedLink,

    #[error("invalid heading block")]
    InvalidHeading,

    #[error("invalid code block")]
    InvalidCodeBlock,

    #[error("invalid quote block")]
    InvalidQuoteBlock,

    #[error("markdown must begin with an h1 header")]
    MissingH1Header,

    #[error("invalid HTML: no tag given")]
    MissingTag,

    #[error("invalid HTML: no value given")]
    MissingValue,

    #[error("invalid HTML: no children given")]
    MissingChildren,
}
