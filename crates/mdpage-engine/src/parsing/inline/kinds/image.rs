use std::sync::OnceLock;

use regex::Regex;

/// Image inline type: `![alt](url)`.
///
/// Alt text may not contain `[` or `]`, the URL may not contain `(` or `)`.
pub struct Image;

impl Image {
    /// Leading marker that distinguishes an image from a link.
    pub const BANG: u8 = b'!';

    /// Pattern capturing `(alt, url)`.
    pub fn pattern() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| {
            Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid image regex")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_image_syntax() {
        let caps = Image::pattern().captures("see ![a cat](cat.png)").unwrap();
        assert_eq!(&caps[1], "a cat");
        assert_eq!(&caps[2], "cat.png");
    }

    #[test]
    fn rejects_brackets_in_alt() {
        assert!(Image::pattern().find("![a [b]](u)").is_none());
    }

    #[test]
    fn rejects_parens_in_url() {
        assert!(Image::pattern().find("![a](u(1))").is_none());
    }
}
