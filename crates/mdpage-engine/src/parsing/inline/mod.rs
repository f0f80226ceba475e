//! # Inline Parsing
//!
//! Turns the text of one block into a flat sequence of [`TextSpan`]s.
//!
//! ## Architecture
//!
//! Tokenizing is a fixed pipeline of splitting stages. Each stage walks the
//! current span list and only rewrites spans still classified as plain:
//!
//! 1. images `![alt](url)`
//! 2. links `[label](url)` (not preceded by `!`)
//! 3. `**bold**`
//! 4. `_italic_`
//! 5. `` `code` ``
//!
//! Styles do not nest: once a span leaves the plain state no later stage
//! looks inside it.
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan`, `SpanKind` and `StyleKind`
//! - **`kinds`**: Inline types with owned delimiters (Image, Link, Delimited)
//! - **`parser`**: `tokenize()` entry point and the individual stages

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{
    extract_images, extract_links, split_delimiter, split_images, split_links, tokenize,
};
pub use types::{SpanKind, StyleKind, TextSpan};
