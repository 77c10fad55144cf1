use std::sync::LazyLock;

use regex::Regex;

use crate::block::BlockKind;
use crate::error::MarkdownError;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("valid heading regex"));

static UNORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^- .+$").expect("valid unordered item regex"));

static ORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\. .+").expect("valid ordered item regex"));

/// Split a document into blocks: chunks separated by blank lines, trimmed,
/// with empty chunks dropped (so runs of extra blank lines collapse).
pub fn split_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// The document title is the first block, which must be an h1 heading.
pub fn extract_title(markdown: &str) -> Result<String, MarkdownError> {
    let blocks = split_blocks(markdown);
    let header = blocks.first().ok_or(MarkdownError::MissingH1Header)?;
    header
        .strip_prefix("# ")
        .map(str::to_string)
        .ok_or(MarkdownError::MissingH1Header)
}

/// Determine the structural kind of a block. Total: any block that matches
/// no pattern is a paragraph.
///
/// Heading and code-fence shapes are only tried when the block starts with
/// their sentinel character; a block that starts with `#` or a backtick but
/// doesn't complete the pattern falls through to paragraph without being
/// tested against the line-based patterns.
pub fn classify(block: &str) -> BlockKind {
    match block.chars().next() {
        Some('#') => {
            if let Some(caps) = HEADING_RE.captures(block) {
                return BlockKind::Heading(caps[1].len() as u8);
            }
            BlockKind::Paragraph
        }
        Some('`') => {
            if block.starts_with("```") && block.ends_with("```") && block.chars().count() >= 6 {
                return BlockKind::CodeFence;
            }
            BlockKind::Paragraph
        }
        _ => classify_by_lines(block),
    }
}

fn classify_by_lines(block: &str) -> BlockKind {
    let lines: Vec<&str> = block.lines().filter(|line| !line.trim().is_empty()).collect();

    if lines.iter().all(|line| line.starts_with('>')) {
        return BlockKind::Quote;
    }
    if lines.iter().all(|line| UNORDERED_ITEM_RE.is_match(line)) {
        return BlockKind::UnorderedList;
    }
    // Ordered lists must count 1, 2, 3, ... — a gap or misorder disqualifies.
    let ordered = lines.iter().enumerate().all(|(i, line)| {
        ORDERED_ITEM_RE
            .captures(line)
            .and_then(|caps| caps[1].parse::<usize>().ok())
            .is_some_and(|n| n == i + 1)
    });
    if ordered {
        return BlockKind::OrderedList;
    }

    BlockKind::Paragraph
}
