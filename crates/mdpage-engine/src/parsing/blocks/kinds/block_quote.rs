/// Blockquote block type with owned delimiter constant.
///
/// All blockquote syntax knowledge lives here, not in the classifier.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';
    pub const TAG: &'static str = "blockquote";

    /// Returns true if every line of `block` starts with [`Self::PREFIX`].
    ///
    /// The prefixes are not stripped when the block is rendered; the quote
    /// body is tokenized as written.
    pub fn matches(block: &str) -> bool {
        block.split('\n').all(|line| line.starts_with(Self::PREFIX))
    }
}
