//! Page assembly: title extraction and template substitution.

use crate::html::RenderError;
use crate::parsing::{
    blocks::{BlockType, classify_document, kinds::Heading},
    markdown_to_html_node,
};

/// Replaced with the document title.
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
/// Replaced with the rendered document.
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Heading level that supplies the page title.
const TITLE_LEVEL: usize = 1;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PageError {
    #[error("Missing title: document has no top-level `# ` heading")]
    MissingTitle,
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Returns the first line of the first level-one heading block, trimmed.
///
/// Deeper headings (`## `) do not count, and neither do `# ` lines inside
/// code blocks or paragraphs.
pub fn extract_title(markdown: &str) -> Result<String, PageError> {
    classify_document(markdown)
        .iter()
        .filter(|block| block.kind == BlockType::Heading)
        .find_map(|block| match Heading::strip(&block.text) {
            Some((TITLE_LEVEL, rest)) => rest.split('\n').next(),
            _ => None,
        })
        .map(|title| title.trim().to_string())
        .ok_or(PageError::MissingTitle)
}

/// Fills `template` with the title and rendered content of `markdown`.
///
/// Every occurrence of each placeholder is replaced.
pub fn render_page(markdown: &str, template: &str) -> Result<String, PageError> {
    let content = markdown_to_html_node(markdown).to_html()?;
    let title = extract_title(markdown)?;
    Ok(template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content))
}
