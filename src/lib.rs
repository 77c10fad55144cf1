mod block;
mod config;
mod error;
mod html;
mod inline;
mod node;
mod parser;
mod site;

pub use block::{BlockKind, Span, SpanKind};
pub use config::Config;
pub use error::MarkdownError;
pub use inline::{split_by_delimiter, split_inline};
pub use node::HtmlNode;
pub use parser::{classify, split_blocks};
pub use site::SiteError;

/// Convert a Markdown document into an HTML node tree rooted at a `div`.
pub fn markdown_to_node(markdown: &str) -> Result<HtmlNode, MarkdownError> {
    html::markdown_to_node(markdown)
}

/// Convert a Markdown document to an HTML string.
pub fn markdown_to_html(markdown: &str) -> Result<String, MarkdownError> {
    html::markdown_to_html(markdown)
}

/// Extract the document title from its leading h1 heading.
pub fn extract_title(markdown: &str) -> Result<String, MarkdownError> {
    parser::extract_title(markdown)
}

/// Build the configured site: copy static assets and render every page.
pub fn build_site(config: &Config) -> Result<(), SiteError> {
    site::build_site(config)
}
