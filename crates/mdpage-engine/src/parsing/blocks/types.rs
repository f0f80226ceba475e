/// Structural classification of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// Fallback when no other type matches.
    Paragraph,
    /// `#` to `######` followed by a space.
    Heading,
    /// Opens and closes with a triple-backtick fence.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... in strict sequence.
    OrderedList,
}

/// A trimmed, non-empty block of the document with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub text: String,
    pub kind: BlockType,
}
