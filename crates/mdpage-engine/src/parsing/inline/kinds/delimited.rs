use crate::parsing::inline::types::StyleKind;

/// Paired-delimiter inline styles.
///
/// Each style owns its delimiter; the tokenizer never hardcodes `**`, `_`
/// or `` ` ``.
pub struct Delimited;

impl Delimited {
    pub const BOLD: &'static str = "**";
    pub const ITALIC: &'static str = "_";
    pub const CODE: &'static str = "`";

    /// Splitting passes in the order the tokenizer applies them.
    ///
    /// Bold runs before italic and code, so later passes only see text
    /// still classified as plain.
    pub const PASSES: [(&'static str, StyleKind); 3] = [
        (Self::BOLD, StyleKind::Bold),
        (Self::ITALIC, StyleKind::Italic),
        (Self::CODE, StyleKind::Code),
    ];
}
