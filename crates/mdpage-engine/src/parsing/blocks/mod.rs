//! # Block Parsing
//!
//! Two-phase block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Classification** (`classify`): the document is split on blank lines
//!    into trimmed blocks, and each block gets exactly one `BlockType`
//!
//! 2. **Construction** (`builder`): a `BlockBuilder` turns each block into an
//!    HTML subtree and collects them under the root `<div>`
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `BlockType`)
//! - **`kinds`**: Block-specific types with owned delimiters (CodeFence, Heading, BlockQuote, lists, Paragraph)
//! - **`classify`**: `split_blocks()` and `classify()` with fixed precedence
//! - **`builder`**: `BlockBuilder` and per-type subtree construction
//!
//! ## Key Invariants
//!
//! - A block never contains a blank line, so fenced code with blank lines
//!   inside is split like any other text
//! - Fenced code blocks are raw zones: no inline parsing inside
//! - Every block produces exactly one child of the root

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::{BlockBuilder, ROOT_TAG, block_to_node};
pub use classify::{classify, classify_document, split_blocks};
pub use types::{Block, BlockType};
