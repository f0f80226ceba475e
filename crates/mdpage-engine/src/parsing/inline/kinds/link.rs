use std::sync::OnceLock;

use regex::Regex;

use super::Image;

/// Link inline type: `[label](url)`.
///
/// Shares its shape with [`Image`], minus the leading `!`. Matches that are
/// directly preceded by [`Image::BANG`] belong to an image and are skipped.
pub struct Link;

impl Link {
    /// Pattern capturing `(label, url)`.
    pub fn pattern() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| {
            Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid link regex")
        })
    }

    /// Returns true if the match starting at `start` is really an image.
    pub fn is_image_at(text: &str, start: usize) -> bool {
        start > 0 && text.as_bytes()[start - 1] == Image::BANG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_link_syntax() {
        let caps = Link::pattern().captures("go [home](/index.html)").unwrap();
        assert_eq!(&caps[1], "home");
        assert_eq!(&caps[2], "/index.html");
    }

    #[test]
    fn detects_image_prefix() {
        let text = "![alt](u)";
        let m = Link::pattern().find(text).unwrap();
        assert!(Link::is_image_at(text, m.start()));
    }

    #[test]
    fn plain_link_is_not_image() {
        let text = "[label](u)";
        let m = Link::pattern().find(text).unwrap();
        assert!(!Link::is_image_at(text, m.start()));
    }
}
