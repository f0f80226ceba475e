pub mod html;
pub mod io;
pub mod models;
pub mod page;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use html::{HtmlNode, RenderError};
pub use io::*;
pub use models::MarkdownFile;
pub use page::{PageError, extract_title, render_page};
pub use parsing::{
    blocks::{BlockType, classify, split_blocks},
    inline::{SpanKind, StyleKind, TextSpan, tokenize},
    markdown_to_html, markdown_to_html_node,
};
