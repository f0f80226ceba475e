use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::{Block, BlockType},
};

/// Separator between blocks. Longer runs of newlines leave only whitespace
/// between separators, which trimming removes.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Splits a document into trimmed, non-empty blocks.
///
/// `\r\n` line endings are normalized first so blank lines are recognized
/// regardless of platform.
pub fn split_blocks(document: &str) -> Vec<String> {
    let normalized = document.replace("\r\n", "\n");
    normalized
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}

/// Classifies a single block.
///
/// # Precedence
/// Code, heading, quote, unordered list, ordered list, then paragraph. The
/// first match wins.
pub fn classify(block: &str) -> BlockType {
    if CodeFence::matches(block) {
        BlockType::Code
    } else if Heading::level(block).is_some() {
        BlockType::Heading
    } else if BlockQuote::matches(block) {
        BlockType::Quote
    } else if UnorderedList::matches(block) {
        BlockType::UnorderedList
    } else if OrderedList::matches(block) {
        BlockType::OrderedList
    } else {
        BlockType::Paragraph
    }
}

/// Splits and classifies a whole document.
pub fn classify_document(document: &str) -> Vec<Block> {
    split_blocks(document)
        .into_iter()
        .map(|text| {
            let kind = classify(&text);
            Block { text, kind }
        })
        .collect()
}
