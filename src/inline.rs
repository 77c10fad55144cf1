use std::sync::LazyLock;

use regex::Regex;

use crate::block::{Span, SpanKind};
use crate::error::MarkdownError;

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^()]*)\)").expect("valid image regex"));

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^()]*)\)").expect("valid link regex"));

/// Split raw text into typed inline spans.
///
/// The passes run in a fixed order; each one only touches spans still
/// tagged [`SpanKind::Text`], which is what lets bold, italic, code, image
/// and link markers compose without interfering with each other.
pub fn split_inline(text: &str) -> Result<Vec<Span>, MarkdownError> {
    let spans = vec![Span::new(text, SpanKind::Text)];
    let spans = split_by_delimiter(spans, "**", SpanKind::Bold)?;
    let spans = split_by_delimiter(spans, "_", SpanKind::Italic)?;
    let spans = split_by_delimiter(spans, "`", SpanKind::Code)?;
    let spans = split_images(spans)?;
    split_links(spans)
}

/// Split every plain-text span on `delimiter`, promoting the text between
/// each delimiter pair to `kind`. An odd number of delimiters means one was
/// never closed. Empty pieces (from adjacent delimiters or a delimiter at
/// either end) are dropped.
pub fn split_by_delimiter(
    spans: Vec<Span>,
    delimiter: &'static str,
    kind: SpanKind,
) -> Result<Vec<Span>, MarkdownError> {
    let mut result = Vec::new();
    for span in spans {
        if span.kind != SpanKind::Text {
            result.push(span);
            continue;
        }

        let parts: Vec<&str> = span.content.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(MarkdownError::UnterminatedDelimiter { delimiter });
        }

        for (i, part) in parts.iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                result.push(Span::new(*part, SpanKind::Text));
            } else {
                result.push(Span::new(*part, kind));
            }
        }
    }
    Ok(result)
}

/// All `![alt](url)` occurrences in `text`, left to right.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    IMAGE_RE
        .captures_iter(text)
        .map(|cap| (cap[1].to_string(), cap[2].to_string()))
        .collect()
}

/// All `[text](url)` occurrences in `text`, left to right, skipping image
/// syntax (a match immediately preceded by `!`).
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    LINK_RE
        .captures_iter(text)
        .filter(|cap| {
            let start = cap.get(0).map_or(0, |m| m.start());
            start == 0 || text.as_bytes()[start - 1] != b'!'
        })
        .map(|cap| (cap[1].to_string(), cap[2].to_string()))
        .collect()
}

pub fn split_images(spans: Vec<Span>) -> Result<Vec<Span>, MarkdownError> {
    split_by_pattern(spans, SpanKind::Image)
}

pub fn split_links(spans: Vec<Span>) -> Result<Vec<Span>, MarkdownError> {
    split_by_pattern(spans, SpanKind::Link)
}

fn split_by_pattern(spans: Vec<Span>, kind: SpanKind) -> Result<Vec<Span>, MarkdownError> {
    let mut result = Vec::new();
    for span in spans {
        if span.kind != SpanKind::Text {
            result.push(span);
            continue;
        }

        let matches = match kind {
            SpanKind::Image => extract_images(&span.content),
            _ => extract_links(&span.content),
        };
        if matches.is_empty() {
            result.push(span);
            continue;
        }

        let mut remainder = span.content.as_str();
        for (text, url) in &matches {
            let needle = match kind {
                SpanKind::Image => format!("![{text}]({url})"),
                _ => format!("[{text}]({url})"),
            };
            let (before, after) = remainder.split_once(&needle).ok_or(match kind {
                SpanKind::Image => MarkdownError::MalformedImage,
                _ => MarkdownError::MalformedLink,
            })?;
            if !before.is_empty() {
                result.push(Span::new(before, SpanKind::Text));
            }
            result.push(Span::with_target(text.clone(), kind, url.clone()));
            remainder = after;
        }
        if !remainder.is_empty() {
            result.push(Span::new(remainder, SpanKind::Text));
        }
    }
    Ok(result)
}
