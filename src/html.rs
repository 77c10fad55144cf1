use crate::block::{BlockKind, Span, SpanKind};
use crate::error::MarkdownError;
use crate::inline::split_inline;
use crate::node::HtmlNode;
use crate::parser::{classify, split_blocks};

/// Convert a whole Markdown document into an HTML node tree rooted at a
/// `div`, one child subtree per block, in source order.
pub fn markdown_to_node(markdown: &str) -> Result<HtmlNode, MarkdownError> {
    let mut children = Vec::new();
    for block in split_blocks(markdown) {
        children.push(block_to_node(block)?);
    }
    Ok(HtmlNode::parent("div", children))
}

/// Convert a Markdown document straight to an HTML string.
pub fn markdown_to_html(markdown: &str) -> Result<String, MarkdownError> {
    markdown_to_node(markdown)?.to_html()
}

fn block_to_node(block: &str) -> Result<HtmlNode, MarkdownError> {
    match classify(block) {
        BlockKind::Paragraph => paragraph_node(block),
        BlockKind::Heading(level) => heading_node(block, level),
        BlockKind::CodeFence => code_node(block),
        BlockKind::Quote => quote_node(block),
        BlockKind::UnorderedList => list_node(block, "ul", 2),
        BlockKind::OrderedList => list_node(block, "ol", 3),
    }
}

fn span_to_node(span: &Span) -> HtmlNode {
    let target = || span.target.as_deref().unwrap_or("").to_string();
    match span.kind {
        SpanKind::Text => HtmlNode::leaf(None, span.content.clone()),
        SpanKind::Bold => HtmlNode::leaf(Some("b"), span.content.clone()),
        SpanKind::Italic => HtmlNode::leaf(Some("i"), span.content.clone()),
        SpanKind::Code => HtmlNode::leaf(Some("code"), span.content.clone()),
        SpanKind::Link => HtmlNode::leaf_with_attrs(
            "a",
            span.content.clone(),
            vec![("href".to_string(), target())],
        ),
        SpanKind::Image => HtmlNode::leaf_with_attrs(
            "img",
            "",
            vec![
                ("src".to_string(), target()),
                ("alt".to_string(), span.content.clone()),
            ],
        ),
    }
}

fn text_children(text: &str) -> Result<Vec<HtmlNode>, MarkdownError> {
    Ok(split_inline(text)?.iter().map(span_to_node).collect())
}

fn paragraph_node(block: &str) -> Result<HtmlNode, MarkdownError> {
    let paragraph = block.lines().collect::<Vec<_>>().join(" ");
    Ok(HtmlNode::parent("p", text_children(&paragraph)?))
}

fn heading_node(block: &str, level: u8) -> Result<HtmlNode, MarkdownError> {
    // Drop the hashes plus one space; there has to be content after them.
    let text = skip_chars(block, level as usize + 1);
    if text.is_empty() {
        return Err(MarkdownError::InvalidHeading);
    }
    Ok(HtmlNode::parent(
        &format!("h{level}"),
        text_children(text)?,
    ))
}

fn code_node(block: &str) -> Result<HtmlNode, MarkdownError> {
    if !block.starts_with("```") || !block.ends_with("```") {
        return Err(MarkdownError::InvalidCodeBlock);
    }
    // Fence plus its newline in front, fence at the back. The interior is
    // one literal text span: inline markers inside code must not be parsed.
    let interior = trim_chars(block, 4, 3);
    let code = HtmlNode::parent("code", vec![HtmlNode::leaf(None, interior)]);
    Ok(HtmlNode::parent("pre", vec![code]))
}

fn list_node(block: &str, tag: &str, marker_width: usize) -> Result<HtmlNode, MarkdownError> {
    let mut items = Vec::new();
    for line in block.lines() {
        let text = skip_chars(line, marker_width);
        items.push(HtmlNode::parent("li", text_children(text)?));
    }
    Ok(HtmlNode::parent(tag, items))
}

fn quote_node(block: &str) -> Result<HtmlNode, MarkdownError> {
    let mut stripped = Vec::new();
    for line in block.lines() {
        if !line.starts_with('>') {
            return Err(MarkdownError::InvalidQuoteBlock);
        }
        stripped.push(line.trim_start_matches('>').trim());
    }
    let content = stripped.join(" ");
    Ok(HtmlNode::parent("blockquote", text_children(&content)?))
}

/// The suffix of `s` after dropping `n` characters (not bytes), or "" when
/// `s` is that short. Marker prefixes are ASCII but what follows may not be.
fn skip_chars(s: &str, n: usize) -> &str {
    s.char_indices().nth(n).map_or("", |(i, _)| &s[i..])
}

/// `s` with `front` characters dropped at the start and `back` at the end.
fn trim_chars(s: &str, front: usize, back: usize) -> &str {
    let start = s.char_indices().nth(front).map_or(s.len(), |(i, _)| i);
    let end = s
        .char_indices()
        .rev()
        .nth(back - 1)
        .map_or(0, |(i, _)| i);
    if start <= end { &s[start..end] } else { "" }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn paragraphs_with_inline_markup() {
        let md = "\
This is **bolded** paragraph
text in a p
tag here

This is another paragraph with _italic_ text and `code` here
";
        assert_eq!(
            markdown_to_html(md).unwrap(),
            "<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
        );
    }

    #[test]
    fn code_fence_is_literal() {
        let md = "\
```
This is text that _should_ remain
the **same** even with inline stuff
```
";
        assert_eq!(
            markdown_to_html(md).unwrap(),
            "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre></div>"
        );
    }

    #[test]
    fn headings() {
        let md = "# this is an h1\n\nthis is paragraph text\n\n## this is an h2";
        assert_eq!(
            markdown_to_html(md).unwrap(),
            "<div><h1>this is an h1</h1><p>this is paragraph text</p><h2>this is an h2</h2></div>"
        );
    }

    #[test]
    fn unordered_list() {
        let md = "- hello\n- this is cool";
        assert_eq!(
            markdown_to_html(md).unwrap(),
            "<div><ul><li>hello</li><li>this is cool</li></ul></div>"
        );
    }

    #[test]
    fn ordered_list() {
        let md = "1. first\n2. second\n3. third";
        assert_eq!(
            markdown_to_html(md).unwrap(),
            "<div><ol><li>first</li><li>second</li><li>third</li></ol></div>"
        );
    }

    #[test]
    fn quote_block() {
        let md = "> quoted text\n> more quoted";
        assert_eq!(
            markdown_to_html(md).unwrap(),
            "<div><blockquote>quoted text more quoted</blockquote></div>"
        );
    }

    #[test]
    fn links_and_images() {
        let md = "a [link](https://boot.dev) and ![pic](/img/x.png)";
        assert_eq!(
            markdown_to_html(md).unwrap(),
            "<div><p>a <a href=\"https://boot.dev\">link</a> and <img src=\"/img/x.png\" alt=\"pic\"></img></p></div>"
        );
    }

    #[test]
    fn title_then_list_round_trip() {
        let tree = markdown_to_node("# T\n\n- x\n- y").unwrap();
        assert_eq!(
            tree.to_html().unwrap(),
            "<div><h1>T</h1><ul><li>x</li><li>y</li></ul></div>"
        );
    }

    #[test]
    fn empty_document_renders_empty_div() {
        assert_eq!(markdown_to_html("").unwrap(), "<div></div>");
    }

    #[test]
    fn unterminated_delimiter_aborts_document() {
        let md = "fine paragraph\n\na `broken one";
        assert_eq!(
            markdown_to_html(md),
            Err(MarkdownError::UnterminatedDelimiter { delimiter: "`" })
        );
    }

    #[test]
    fn blank_line_inside_quote_block_fails() {
        // Classification ignores blank lines, assembly re-checks every line.
        let md = "> a\n \n> b";
        assert_eq!(markdown_to_html(md), Err(MarkdownError::InvalidQuoteBlock));
    }

    #[test]
    fn code_node_rejects_missing_fence() {
        assert_eq!(
            code_node("```\nunclosed"),
            Err(MarkdownError::InvalidCodeBlock)
        );
    }

    #[test]
    fn heading_node_requires_content() {
        assert_eq!(heading_node("#", 1), Err(MarkdownError::InvalidHeading));
    }

    #[test]
    fn nested_quote_markers_collapse() {
        let md = ">> deep\n> shallow";
        assert_eq!(
            markdown_to_html(md).unwrap(),
            "<div><blockquote>deep shallow</blockquote></div>"
        );
    }

    #[test]
    fn multibyte_content_after_markers() {
        let md = "- héllo\n- wörld";
        assert_eq!(
            markdown_to_html(md).unwrap(),
            "<div><ul><li>héllo</li><li>wörld</li></ul></div>"
        );
    }

    #[test]
    fn serialization_is_idempotent() {
        let tree = markdown_to_node("# T\n\npara **bold**").unwrap();
        assert_eq!(tree.to_html().unwrap(), tree.to_html().unwrap());
    }
}
