/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the fallback when no other
/// block type matches. The whole block, newlines included, is tokenized.
pub struct Paragraph;

impl Paragraph {
    pub const TAG: &'static str = "p";
}
