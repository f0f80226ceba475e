pub mod blocks;
pub mod inline;

use crate::html::HtmlNode;

use blocks::{BlockBuilder, classify_document};

/// Converts a Markdown document into an HTML tree rooted at a `<div>`.
///
/// Never fails: every block falls back to a paragraph, and the tree is
/// well-formed by construction.
pub fn markdown_to_html_node(markdown: &str) -> HtmlNode {
    let blocks = classify_document(markdown);
    log::debug!("classified {} blocks", blocks.len());

    let mut builder = BlockBuilder::new();
    for block in &blocks {
        log::trace!("building {:?} block", block.kind);
        builder.push(block);
    }
    builder.finish()
}

/// Convenience: converts and serializes in one step.
pub fn markdown_to_html(markdown: &str) -> Result<String, crate::html::RenderError> {
    markdown_to_html_node(markdown).to_html()
}
