/// Style classification of a [`TextSpan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Text with no inline styling.
    Plain,
    /// `**bold**`
    Bold,
    /// `_italic_`
    Italic,
    /// `` `code` ``
    Code,
    /// `[label](url)`
    Link,
    /// `![alt](url)`
    Image,
}

impl SpanKind {
    /// Whether spans of this kind carry a destination URL.
    pub fn has_destination(self) -> bool {
        matches!(self, SpanKind::Link | SpanKind::Image)
    }
}

/// The delimiter-based styles: the span kinds that never carry a
/// destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKind {
    Bold,
    Italic,
    Code,
}

impl From<StyleKind> for SpanKind {
    fn from(style: StyleKind) -> Self {
        match style {
            StyleKind::Bold => SpanKind::Bold,
            StyleKind::Italic => SpanKind::Italic,
            StyleKind::Code => SpanKind::Code,
        }
    }
}

/// A contiguous run of inline text produced by the tokenizer.
///
/// Fields are private so the destination can only be present for
/// [`SpanKind::Link`] and [`SpanKind::Image`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    text: String,
    kind: SpanKind,
    destination: Option<String>,
}

impl TextSpan {
    /// Creates an unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SpanKind::Plain,
            destination: None,
        }
    }

    /// Creates a bold, italic or code span.
    ///
    /// Link and image spans need a destination; use [`TextSpan::link`] and
    /// [`TextSpan::image`] for those.
    pub fn styled(text: impl Into<String>, style: StyleKind) -> Self {
        Self {
            text: text.into(),
            kind: style.into(),
            destination: None,
        }
    }

    /// Creates a link span; `text` is the label.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SpanKind::Link,
            destination: Some(url.into()),
        }
    }

    /// Creates an image span; `text` is the alt text.
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: alt.into(),
            kind: SpanKind::Image,
            destination: Some(url.into()),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    /// The URL of a link or image span, `None` for every other kind.
    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}
