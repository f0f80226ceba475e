//! # Inline Kinds
//!
//! Inline-specific types that own their syntax.
//!
//! ## Types
//!
//! - **`Image`**: `![alt](url)` pattern and the `!` marker
//! - **`Link`**: `[label](url)` pattern, skipping image matches
//! - **`Delimited`**: `**`, `_` and `` ` `` with their span kinds
//!
//! The tokenizer calls these; it never hardcodes delimiters.

pub mod delimited;
pub mod image;
pub mod link;

pub use delimited::Delimited;
pub use image::Image;
pub use link::Link;
