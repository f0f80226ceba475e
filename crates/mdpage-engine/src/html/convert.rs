use crate::parsing::inline::{SpanKind, TextSpan};

use super::node::HtmlNode;

/// Converts one inline span into its HTML leaf.
///
/// | kind   | tag    | value | attrs          |
/// |--------|--------|-------|----------------|
/// | Plain  | -      | text  |                |
/// | Bold   | `b`    | text  |                |
/// | Italic | `i`    | text  |                |
/// | Code   | `code` | text  |                |
/// | Link   | `a`    | text  | `href`         |
/// | Image  | `img`  | ""    | `src`, `alt`   |
pub fn span_to_node(span: &TextSpan) -> HtmlNode {
    match (span.kind(), span.destination()) {
        (SpanKind::Link, Some(href)) => HtmlNode::leaf("a", span.text()).with_attr("href", href),
        (SpanKind::Image, Some(src)) => HtmlNode::leaf("img", "")
            .with_attr("src", src)
            .with_attr("alt", span.text()),
        (SpanKind::Bold, _) => HtmlNode::leaf("b", span.text()),
        (SpanKind::Italic, _) => HtmlNode::leaf("i", span.text()),
        (SpanKind::Code, _) => HtmlNode::leaf("code", span.text()),
        // Link and image spans always carry a destination.
        (SpanKind::Plain | SpanKind::Link | SpanKind::Image, _) => HtmlNode::text(span.text()),
    }
}

/// Converts a span sequence, preserving order.
pub fn spans_to_nodes(spans: &[TextSpan]) -> Vec<HtmlNode> {
    spans.iter().map(span_to_node).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::StyleKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_span_is_raw_text() {
        let node = span_to_node(&TextSpan::plain("I'm a text node"));
        assert_eq!(node.tag(), None);
        assert_eq!(node.value(), Some("I'm a text node"));
    }

    #[test]
    fn styled_spans_get_their_tags() {
        assert_eq!(
            span_to_node(&TextSpan::styled("x", StyleKind::Bold)),
            HtmlNode::leaf("b", "x")
        );
        assert_eq!(
            span_to_node(&TextSpan::styled("x", StyleKind::Italic)),
            HtmlNode::leaf("i", "x")
        );
        assert_eq!(
            span_to_node(&TextSpan::styled("x", StyleKind::Code)),
            HtmlNode::leaf("code", "x")
        );
    }

    #[test]
    fn link_carries_href() {
        let node = span_to_node(&TextSpan::link("crates", "https://crates.io"));
        assert_eq!(node.tag(), Some("a"));
        assert_eq!(node.value(), Some("crates"));
        assert_eq!(
            node.attrs().get("href").map(String::as_str),
            Some("https://crates.io")
        );
    }

    #[test]
    fn image_has_empty_value_and_src_before_alt() {
        let node = span_to_node(&TextSpan::image("logo", "/logo.png"));
        assert_eq!(node.value(), Some(""));
        let attrs: Vec<(&str, &str)> = node
            .attrs()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(attrs, vec![("src", "/logo.png"), ("alt", "logo")]);
    }

    #[test]
    fn converts_sequences_in_order() {
        let nodes = spans_to_nodes(&[
            TextSpan::plain("a "),
            TextSpan::styled("b", StyleKind::Bold),
        ]);
        assert_eq!(nodes, vec![HtmlNode::text("a "), HtmlNode::leaf("b", "b")]);
    }
}
