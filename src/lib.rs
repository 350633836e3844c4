mod block;
mod config;
mod error;
mod html;
mod inline;
mod parser;
mod render;
pub mod site;

pub use block::{BlockKind, SpanKind, TextSpan};
pub use config::{Config, SiteConfig};
pub use error::{ConfigError, MarkdownError, SiteError};
pub use html::{Attributes, HtmlNode};
pub use inline::{
    Delimiter, span_to_html_node, split_delimiter, split_images, split_links, text_to_spans,
};
pub use parser::{block_to_block_kind, markdown_to_blocks};
pub use render::markdown_to_html_node;

/// Convert markdown to an HTML fragment wrapped in a single `div`.
pub fn render_document(markdown: &str) -> Result<String, MarkdownError> {
    markdown_to_html_node(markdown)?.render()
}

/// Return the text of the first `# ` line.
pub fn extract_document_title(markdown: &str) -> Result<String, MarkdownError> {
    markdown
        .split('\n')
        .find_map(|line| line.strip_prefix("# "))
        .map(str::to_string)
        .ok_or(MarkdownError::MissingTitle)
}
