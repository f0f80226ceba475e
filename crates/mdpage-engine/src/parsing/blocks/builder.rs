use crate::html::{HtmlNode, spans_to_nodes};
use crate::parsing::inline::tokenize;

use super::{
    kinds::{BlockQuote, CodeFence, Heading, ITEM_TAG, OrderedList, Paragraph, UnorderedList},
    types::{Block, BlockType},
};

/// Tag of the container every document is assembled under.
pub const ROOT_TAG: &str = "div";

/// Assembles classified blocks into one HTML tree.
///
/// Blocks are pushed in document order; [`BlockBuilder::finish`] wraps the
/// accumulated subtrees in a [`ROOT_TAG`] parent.
pub struct BlockBuilder {
    out: Vec<HtmlNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self { out: vec![] }
    }

    pub fn push(&mut self, block: &Block) {
        self.out.push(block_to_node(block));
    }

    pub fn finish(self) -> HtmlNode {
        HtmlNode::parent(ROOT_TAG, self.out)
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the subtree for one block.
pub fn block_to_node(block: &Block) -> HtmlNode {
    let text = block.text.as_str();
    match block.kind {
        BlockType::Paragraph => HtmlNode::parent(Paragraph::TAG, inline_children(text)),
        BlockType::Heading => heading_to_node(text),
        BlockType::Code => code_to_node(text),
        BlockType::Quote => HtmlNode::parent(BlockQuote::TAG, inline_children(text)),
        BlockType::UnorderedList => list_to_node(UnorderedList::TAG, UnorderedList::items(text)),
        BlockType::OrderedList => list_to_node(OrderedList::TAG, OrderedList::items(text)),
    }
}

fn inline_children(text: &str) -> Vec<HtmlNode> {
    spans_to_nodes(&tokenize(text))
}

fn heading_to_node(text: &str) -> HtmlNode {
    match Heading::strip(text) {
        Some((level, rest)) => HtmlNode::parent(Heading::tag(level), inline_children(rest)),
        // Only reachable when a block is mislabelled by hand.
        None => HtmlNode::parent(Paragraph::TAG, inline_children(text)),
    }
}

fn code_to_node(text: &str) -> HtmlNode {
    let (outer, inner) = CodeFence::TAGS;
    HtmlNode::parent(
        outer,
        vec![HtmlNode::parent(
            inner,
            vec![HtmlNode::text(CodeFence::inner(text))],
        )],
    )
}

fn list_to_node(tag: &str, items: Vec<&str>) -> HtmlNode {
    let children = items
        .into_iter()
        .map(|item| HtmlNode::parent(ITEM_TAG, inline_children(item)))
        .collect();
    HtmlNode::parent(tag, children)
}
