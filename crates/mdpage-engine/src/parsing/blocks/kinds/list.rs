use std::sync::OnceLock;

use regex::Regex;

/// Tag wrapping each item of either list type.
pub const ITEM_TAG: &str = "li";

/// Unordered list block type: every line starts with `- `.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";
    pub const TAG: &'static str = "ul";

    pub fn matches(block: &str) -> bool {
        block.split('\n').all(|line| line.starts_with(Self::MARKER))
    }

    /// Item texts with the marker removed.
    pub fn items(block: &str) -> Vec<&str> {
        block
            .split('\n')
            .filter_map(|line| line.strip_prefix(Self::MARKER))
            .collect()
    }
}

/// Ordered list block type: lines numbered `1. `, `2. `, ... in sequence.
pub struct OrderedList;

impl OrderedList {
    /// Separator between the item number and its text.
    pub const SEPARATOR: &'static str = ". ";
    pub const TAG: &'static str = "ol";

    /// Pattern capturing the item text of one numbered line.
    pub fn item_pattern() -> &'static Regex {
        static ITEM_REGEX: OnceLock<Regex> = OnceLock::new();
        ITEM_REGEX
            .get_or_init(|| Regex::new(r"^\s*\d+\.\s+(.*)").expect("Invalid ordered list regex"))
    }

    /// Returns true if line `n` (0-based) starts with `n + 1` and the separator.
    ///
    /// Numbering must start at 1 and never skip or repeat.
    pub fn matches(block: &str) -> bool {
        block.split('\n').enumerate().all(|(i, line)| {
            line.strip_prefix(&(i + 1).to_string())
                .is_some_and(|rest| rest.starts_with(Self::SEPARATOR))
        })
    }

    /// Item texts with the numbering removed.
    pub fn items(block: &str) -> Vec<&str> {
        block
            .split('\n')
            .filter_map(|line| Self::item_pattern().captures(line))
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect()
    }
}
