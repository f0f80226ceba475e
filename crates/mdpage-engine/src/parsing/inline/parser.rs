use std::ops::Range;

use regex::Regex;

use super::{
    kinds::{Delimited, Image, Link},
    types::{StyleKind, TextSpan},
};

/// A link or image occurrence found in a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Found<'a> {
    /// Byte range of the whole construct, delimiters included.
    range: Range<usize>,
    /// Alt text or label.
    text: &'a str,
    url: &'a str,
}

/// Tokenizes inline Markdown into a flat sequence of [`TextSpan`]s.
///
/// # Pipeline
/// Images, then links, then `**`, `_` and `` ` `` splitting. Every stage
/// only rewrites spans still classified as plain, so the order is part of
/// the contract: `**` inside a link label stays literal.
///
/// # Returns
/// Spans covering the whole input. Empty plain spans left by delimiters at
/// the edges of the text are kept.
pub fn tokenize(text: &str) -> Vec<TextSpan> {
    let mut spans = vec![TextSpan::plain(text)];
    spans = split_images(spans);
    spans = split_links(spans);
    for (delimiter, style) in Delimited::PASSES {
        spans = split_delimiter(spans, delimiter, style);
    }
    spans
}

/// Returns `(alt, url)` for every image in `text`, left to right.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    find_images(text)
        .into_iter()
        .map(|f| (f.text.to_string(), f.url.to_string()))
        .collect()
}

/// Returns `(label, url)` for every link in `text`, left to right.
///
/// Image syntax is not reported as a link.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    find_links(text)
        .into_iter()
        .map(|f| (f.text.to_string(), f.url.to_string()))
        .collect()
}

/// Splits every plain span around its images.
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_found(spans, find_images, |alt, url| TextSpan::image(alt, url))
}

/// Splits every plain span around its links.
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_found(spans, find_links, |label, url| TextSpan::link(label, url))
}

/// Splits every plain span on `delimiter`.
///
/// Pieces alternate plain, `style`, plain, ... starting from plain. An odd
/// number of delimiters leaves the last piece tagged as `style` even though
/// it was never closed; this is kept as-is rather than reported.
pub fn split_delimiter(spans: Vec<TextSpan>, delimiter: &str, style: StyleKind) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }
        for (i, piece) in span.text().split(delimiter).enumerate() {
            if i % 2 == 0 {
                out.push(TextSpan::plain(piece));
            } else {
                out.push(TextSpan::styled(piece, style));
            }
        }
    }
    out
}

fn find_images(text: &str) -> Vec<Found<'_>> {
    find_all(Image::pattern(), text)
}

fn find_links(text: &str) -> Vec<Found<'_>> {
    find_all(Link::pattern(), text)
        .into_iter()
        .filter(|f| !Link::is_image_at(text, f.range.start))
        .collect()
}

fn find_all<'a>(pattern: &Regex, text: &'a str) -> Vec<Found<'a>> {
    pattern
        .captures_iter(text)
        .filter_map(|caps| {
            let full = caps.get(0)?;
            Some(Found {
                range: full.range(),
                text: caps.get(1)?.as_str(),
                url: caps.get(2)?.as_str(),
            })
        })
        .collect()
}

/// Shared splitting loop for images and links.
fn split_found(
    spans: Vec<TextSpan>,
    find: fn(&str) -> Vec<Found<'_>>,
    make: fn(&str, &str) -> TextSpan,
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let text = span.text();
        let found = find(text);
        if found.is_empty() {
            out.push(TextSpan::plain(text));
            continue;
        }

        let mut rest = 0;
        for f in found {
            if f.range.start > rest {
                out.push(TextSpan::plain(&text[rest..f.range.start]));
            }
            out.push(make(f.text, f.url));
            rest = f.range.end;
        }
        if rest < text.len() {
            out.push(TextSpan::plain(&text[rest..]));
        }
    }
    out
}
