//! # HTML Tree
//!
//! The output side of the pipeline: a two-variant node tree, its
//! serialization, and the mapping from inline spans to leaves.
//!
//! - **`node`**: `HtmlNode`, `Attributes`, `RenderError`
//! - **`convert`**: `span_to_node()` for each `SpanKind`

pub mod convert;
pub mod node;

pub use convert::{span_to_node, spans_to_nodes};
pub use node::{Attributes, HtmlNode, RenderError, VOID_ELEMENTS};
