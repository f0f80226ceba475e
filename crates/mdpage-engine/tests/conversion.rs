use insta::assert_snapshot;
use mdpage_engine::{
    BlockType, SpanKind, TextSpan, classify, markdown_to_html, markdown_to_html_node,
    render_page, split_blocks, tokenize,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn html(md: &str) -> String {
    markdown_to_html(md).unwrap()
}

#[test]
fn heading_and_paragraph() {
    assert_eq!(
        html("# Title\n\npara"),
        "<div><h1>Title</h1><p>para</p></div>"
    );
}

#[test]
fn paragraphs_with_inline_styles() {
    let md = "This is **bolded** paragraph text in a p tag here\n\nThis is another paragraph with _italic_ text and `code` here\n";
    assert_snapshot!(html(md), @"<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>");
}

#[test]
fn code_block_is_not_tokenized() {
    let md = "```\nThis is text that _should_ remain\nthe **same** even with inline stuff\n```";
    assert_eq!(
        html(md),
        "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff</code></pre></div>"
    );
}

#[test]
fn lists() {
    let md = "- Bread\n- **Eggs**\n\n1. Mix\n2. Bake `30m`";
    assert_snapshot!(html(md), @"<div><ul><li>Bread</li><li><b>Eggs</b></li></ul><ol><li>Mix</li><li>Bake <code>30m</code></li></ol></div>");
}

#[test]
fn quote_keeps_its_markers() {
    assert_eq!(
        html("> Don't quote me\n> on that"),
        "<div><blockquote>> Don't quote me\n> on that</blockquote></div>"
    );
}

#[test]
fn links_and_images() {
    let md = "See ![the logo](/logo.png) on [the site](https://example.com).";
    assert_snapshot!(html(md), @r#"<div><p>See <img src="/logo.png" alt="the logo" /> on <a href="https://example.com">the site</a>.</p></div>"#);
}

#[test]
fn full_document() {
    let md = "# Tolkien Fan Club\n\n![JRR Tolkien sitting](/images/tolkien.png)\n\nHere's the deal, **I like Tolkien**.\n\n> \"I am in fact a Hobbit in all but size.\"\n\n## Reasons\n\n- It's a _masterpiece_\n- The `lore` is deep\n\n1. Gandalf\n2. Bilbo\n\n```\nfn main() {}\n```";
    assert_snapshot!(html(md), @r#"<div><h1>Tolkien Fan Club</h1><p><img src="/images/tolkien.png" alt="JRR Tolkien sitting" /></p><p>Here's the deal, <b>I like Tolkien</b>.</p><blockquote>> "I am in fact a Hobbit in all but size."</blockquote><h2>Reasons</h2><ul><li>It's a <i>masterpiece</i></li><li>The <code>lore</code> is deep</li></ul><ol><li>Gandalf</li><li>Bilbo</li></ol><pre><code>fn main() {}</code></pre></div>"#);
}

#[test]
fn empty_document_renders_empty_root() {
    assert_eq!(html(""), "<div></div>");
    assert_eq!(html("\n\n\n"), "<div></div>");
}

#[test]
fn serialization_is_repeatable() {
    let tree = markdown_to_html_node("# A\n\n- b\n- c\n\nd _e_");
    assert_eq!(tree.to_html().unwrap(), tree.to_html().unwrap());
}

#[test]
fn plain_text_is_one_span() {
    let text = "Nothing special in here, just words.";
    assert_eq!(tokenize(text), vec![TextSpan::plain(text)]);
}

#[test]
fn image_and_link_destinations() {
    let spans = tokenize("![x](u1) and [y](u2)");
    assert_eq!(
        spans,
        vec![
            TextSpan::image("x", "u1"),
            TextSpan::plain(" and "),
            TextSpan::link("y", "u2"),
        ]
    );
    assert_eq!(spans[0].kind(), SpanKind::Image);
    assert_eq!(spans[2].destination(), Some("u2"));
}

#[test]
fn blank_line_runs_collapse() {
    assert_eq!(split_blocks("A\n\n\nB"), vec!["A", "B"]);
}

#[rstest]
#[case("```\n# looks like a heading\n```", BlockType::Code)]
#[case("1. a\n3. b", BlockType::Paragraph)]
#[case("1. a\n2. b\n3. c", BlockType::OrderedList)]
#[case("- a\n1. b", BlockType::Paragraph)]
fn classification(#[case] block: &str, #[case] expected: BlockType) {
    assert_eq!(classify(block), expected);
}

#[rstest]
#[case("**unclosed bold", "<div><p><b>unclosed bold</b></p></div>")]
#[case("a _b", "<div><p>a <i>b</i></p></div>")]
fn unmatched_delimiter_styles_the_tail(#[case] md: &str, #[case] expected: &str) {
    // The last piece is tagged even without a closing delimiter.
    assert_eq!(html(md), expected);
}

#[test]
fn page_uses_first_heading_as_title() {
    let page = render_page(
        "# Release notes\n\nFixed things.",
        "<h1>{{ Title }}</h1>{{ Content }}",
    )
    .unwrap();
    assert_snapshot!(page, @"<h1>Release notes</h1><div><h1>Release notes</h1><p>Fixed things.</p></div>");
}
