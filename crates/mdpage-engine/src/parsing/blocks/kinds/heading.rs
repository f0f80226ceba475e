/// ATX heading block type: `# Title` through `###### Title`.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';
    /// Deepest heading level HTML supports.
    pub const MAX_LEVEL: usize = 6;

    /// Returns the heading level if `block` opens with 1–6 markers and a space.
    pub fn level(block: &str) -> Option<usize> {
        let level = block.chars().take_while(|&c| c == Self::MARKER).count();
        if (1..=Self::MAX_LEVEL).contains(&level) && block[level..].starts_with(' ') {
            Some(level)
        } else {
            None
        }
    }

    /// Returns `(level, text)` with the markers and the following space removed.
    pub fn strip(block: &str) -> Option<(usize, &str)> {
        let level = Self::level(block)?;
        Some((level, &block[level + 1..]))
    }

    /// HTML tag for a heading level, `h1` to `h6`.
    pub fn tag(level: usize) -> String {
        format!("h{level}")
    }
}
