use relative_path::{RelativePath, RelativePathBuf};

/// Extension of Markdown sources.
pub const MARKDOWN_EXTENSION: &str = "md";
/// Extension of generated pages.
pub const HTML_EXTENSION: &str = "html";

/// A Markdown source addressed relative to the content directory.
///
/// The same relative path, with the extension swapped, addresses the
/// generated page inside the output directory.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownFile {
    relative_path: RelativePathBuf,
    output_path: RelativePathBuf,
}

impl MarkdownFile {
    /// Create a new MarkdownFile from a relative path
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let output_path = relative_path.with_extension(HTML_EXTENSION);
        Self {
            relative_path,
            output_path,
        }
    }

    /// Create from a relative path string
    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    /// Path of the Markdown source, relative to the content directory
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Path of the generated page, relative to the output directory
    pub fn output_path(&self) -> &RelativePath {
        &self.output_path
    }
}

impl From<RelativePathBuf> for MarkdownFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for MarkdownFile {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}
