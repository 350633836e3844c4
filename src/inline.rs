use std::sync::LazyLock;

use regex::Regex;

use crate::block::{SpanKind, TextSpan};
use crate::error::MarkdownError;
use crate::html::HtmlNode;

static IMAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("valid image pattern"));
static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("valid link pattern"));

/// Paired inline markers that toggle a style on and off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Bold,
    Italic,
    Code,
}

impl Delimiter {
    pub fn marker(self) -> &'static str {
        match self {
            Delimiter::Bold => "**",
            Delimiter::Italic => "*",
            Delimiter::Code => "`",
        }
    }

    pub fn kind(self) -> SpanKind {
        match self {
            Delimiter::Bold => SpanKind::Bold,
            Delimiter::Italic => SpanKind::Italic,
            Delimiter::Code => SpanKind::Code,
        }
    }
}

/// Tokenize inline markdown into typed spans.
///
/// Images are extracted first, then links, then `**`, `*` and `` ` ``
/// delimited runs. Empty input yields no spans.
pub fn text_to_spans(text: &str) -> Result<Vec<TextSpan>, MarkdownError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    let spans = vec![TextSpan::plain(text)];
    let spans = split_images(spans)?;
    let spans = split_links(spans)?;
    let spans = split_delimiter(spans, Delimiter::Bold)?;
    let spans = split_delimiter(spans, Delimiter::Italic)?;
    split_delimiter(spans, Delimiter::Code)
}

/// Pull `![alt](url)` images out of plain spans.
pub fn split_images(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>, MarkdownError> {
    split_targets(spans, Target::Image)
}

/// Pull `[label](url)` links out of plain spans.
pub fn split_links(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>, MarkdownError> {
    split_targets(spans, Target::Link)
}

#[derive(Clone, Copy)]
enum Target {
    Image,
    Link,
}

fn split_targets(spans: Vec<TextSpan>, target: Target) -> Result<Vec<TextSpan>, MarkdownError> {
    let (pattern, prefix) = match target {
        Target::Image => (&*IMAGE_PATTERN, "!"),
        Target::Link => (&*LINK_PATTERN, ""),
    };

    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let found: Vec<(&str, &str)> = pattern
            .captures_iter(&span.text)
            .filter_map(|caps| Some((caps.get(1)?.as_str(), caps.get(2)?.as_str())))
            .collect();
        if found.is_empty() {
            out.push(span);
            continue;
        }

        // Matches come from the whole text; each is located again in what is left.
        let mut rest = span.text.as_str();
        for (label, url) in found {
            let needle = format!("{prefix}[{label}]({url})");
            let Some((before, after)) = rest.split_once(needle.as_str()) else {
                return Err(MarkdownError::Markup(format!("{needle} is not closed")));
            };
            if !before.is_empty() {
                out.push(TextSpan::plain(before));
            }
            out.push(match target {
                Target::Image => TextSpan::image(label, url),
                Target::Link => TextSpan::link(label, url),
            });
            rest = after;
        }
        if !rest.is_empty() {
            out.push(TextSpan::plain(rest));
        }
    }
    Ok(out)
}

/// Split plain spans on `delimiter`, styling every odd-numbered segment.
///
/// Every incoming span must contain an even number of markers, including
/// spans that are already styled.
pub fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: Delimiter,
) -> Result<Vec<TextSpan>, MarkdownError> {
    let marker = delimiter.marker();
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if span.text.matches(marker).count() % 2 == 1 {
            return Err(MarkdownError::Markup(format!("missing closing {marker}")));
        }
        if !span.is_plain() || !span.text.contains(marker) {
            out.push(span);
            continue;
        }
        for (i, piece) in span.text.split(marker).enumerate() {
            if piece.is_empty() {
                continue;
            }
            let kind = if i % 2 == 1 {
                delimiter.kind()
            } else {
                SpanKind::Plain
            };
            out.push(TextSpan::new(kind, piece));
        }
    }
    Ok(out)
}

/// Convert a span into its leaf HTML node.
pub fn span_to_html_node(span: &TextSpan) -> HtmlNode {
    match &span.kind {
        SpanKind::Plain => HtmlNode::text(span.text.as_str()),
        SpanKind::Bold => HtmlNode::leaf("b", span.text.as_str()),
        SpanKind::Italic => HtmlNode::leaf("i", span.text.as_str()),
        SpanKind::Code => HtmlNode::leaf("code", span.text.as_str()),
        SpanKind::Link { url } => {
            HtmlNode::leaf("a", span.text.as_str()).with_attribute("href", url.as_str())
        }
        SpanKind::Image { url } => HtmlNode::leaf("img", "")
            .with_attribute("src", url.as_str())
            .with_attribute("alt", span.text.as_str()),
    }
}

/// Tokenize `text` and convert every span into a node.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, MarkdownError> {
    Ok(text_to_spans(text)?.iter().map(span_to_html_node).collect())
}
