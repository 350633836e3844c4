use crate::block::BlockKind;
use crate::error::MarkdownError;
use crate::html::HtmlNode;
use crate::inline::text_to_children;
use crate::parser::{block_to_block_kind, heading_level, markdown_to_blocks};

/// Convert a whole document into a `div` holding one node per block.
///
/// The first failing block aborts the conversion.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, MarkdownError> {
    let children = markdown_to_blocks(markdown)
        .into_iter()
        .map(block_to_html_node)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent("div", children))
}

/// Classify a single block and render it.
pub fn block_to_html_node(block: &str) -> Result<HtmlNode, MarkdownError> {
    match block_to_block_kind(block) {
        BlockKind::Heading(_) => heading_to_node(block),
        BlockKind::Code => code_to_node(block),
        BlockKind::Quote => quote_to_node(block),
        kind @ (BlockKind::UnorderedList | BlockKind::OrderedList) => list_of_kind(block, kind),
        BlockKind::Paragraph => paragraph_to_node(block),
    }
}

pub fn heading_to_node(block: &str) -> Result<HtmlNode, MarkdownError> {
    let Some((marker, text)) = block.split_once(' ') else {
        return Err(MarkdownError::HeadingSyntax(format!(
            "{block:?} has no heading text"
        )));
    };
    let level = heading_level(marker).ok_or_else(|| {
        MarkdownError::HeadingSyntax(format!("{marker:?} is not a heading marker"))
    })?;
    if text.is_empty() {
        return Err(MarkdownError::HeadingFormat("heading text is empty".to_string()));
    }
    Ok(HtmlNode::parent(format!("h{level}"), text_to_children(text)?))
}

/// Render a fenced block as `pre`. Inline markup inside is still tokenized.
pub fn code_to_node(block: &str) -> Result<HtmlNode, MarkdownError> {
    if !block.starts_with("```") || !block.ends_with("```") {
        return Err(MarkdownError::CodeBlock(
            "code must be fenced with ```".to_string(),
        ));
    }
    let code = block.trim_matches('`').trim();
    Ok(HtmlNode::parent("pre", text_to_children(code)?))
}

pub fn quote_to_node(block: &str) -> Result<HtmlNode, MarkdownError> {
    let mut lines = Vec::new();
    for line in block.split('\n') {
        if !line.starts_with('>') {
            return Err(MarkdownError::QuoteBlock(format!(
                "{line:?} does not start with >"
            )));
        }
        lines.push(line.trim_start_matches('>').trim());
    }
    Ok(HtmlNode::parent(
        "blockquote",
        text_to_children(&lines.join(" "))?,
    ))
}

/// Render each line of a list block as an `li`.
pub fn list_to_items(block: &str) -> Result<Vec<HtmlNode>, MarkdownError> {
    items_of_kind(block, block_to_block_kind(block))
}

fn items_of_kind(block: &str, kind: BlockKind) -> Result<Vec<HtmlNode>, MarkdownError> {
    if !kind.is_list() {
        return Err(MarkdownError::ListBlock("block is not a list".to_string()));
    }
    block
        .split('\n')
        .map(|line| -> Result<HtmlNode, MarkdownError> {
            match line.split_once(' ') {
                Some((_, item)) if !item.is_empty() => {
                    Ok(HtmlNode::parent("li", text_to_children(item)?))
                }
                _ => Err(MarkdownError::ListBlock(format!("{line:?} has no item text"))),
            }
        })
        .collect()
}

/// Render a list block wrapped in `ul` or `ol` to match its markers.
pub fn list_to_node(block: &str) -> Result<HtmlNode, MarkdownError> {
    list_of_kind(block, block_to_block_kind(block))
}

fn list_of_kind(block: &str, kind: BlockKind) -> Result<HtmlNode, MarkdownError> {
    let items = items_of_kind(block, kind)?;
    let tag = match kind {
        BlockKind::OrderedList => "ol",
        _ => "ul",
    };
    Ok(HtmlNode::parent(tag, items))
}

pub fn paragraph_to_node(block: &str) -> Result<HtmlNode, MarkdownError> {
    let text = block.split('\n').collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        return Err(MarkdownError::Paragraph("paragraph is empty".to_string()));
    }
    Ok(HtmlNode::parent("p", text_to_children(&text)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_document;
    use pretty_assertions::assert_eq;

    #[test]
    fn paragraph() {
        let md = "
This is **bolded** paragraph
text in a p
tag here

";
        assert_eq!(
            render_document(md).unwrap(),
            "<div><p>This is <b>bolded</b> paragraph text in a p tag here</p></div>"
        );
    }

    #[test]
    fn paragraphs() {
        let md = "
This is **bolded** paragraph
text in a p
tag here

This is another paragraph with *italic* text and `code` here

";
        assert_eq!(
            render_document(md).unwrap(),
            "<div><p>This is <b>bolded</b> paragraph text in a p tag here</p>\
             <p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
        );
    }

    #[test]
    fn heading_and_paragraph() {
        let node = markdown_to_html_node("# Title\n\nSome *text* here").unwrap();
        let expected = HtmlNode::parent(
            "div",
            vec![
                HtmlNode::parent("h1", vec![HtmlNode::text("Title")]),
                HtmlNode::parent(
                    "p",
                    vec![
                        HtmlNode::text("Some "),
                        HtmlNode::leaf("i", "text"),
                        HtmlNode::text(" here"),
                    ],
                ),
            ],
        );
        assert_eq!(node, expected);
    }

    #[test]
    fn headings() {
        let md = "
# this is an h1

this is paragraph text

## this is an h2
";
        assert_eq!(
            render_document(md).unwrap(),
            "<div><h1>this is an h1</h1><p>this is paragraph text</p><h2>this is an h2</h2></div>"
        );
    }

    #[test]
    fn lists() {
        let md = "
- This is a list
- with items
- and *more* items

1. This is an `ordered` list
2. with items
3. and more items

";
        assert_eq!(
            render_document(md).unwrap(),
            "<div><ul><li>This is a list</li><li>with items</li><li>and <i>more</i> items</li></ul>\
             <ol><li>This is an <code>ordered</code> list</li><li>with items</li><li>and more items</li></ol></div>"
        );
    }

    #[test]
    fn ordered_list_items() {
        let node = list_to_node("1. a\n2. b\n3. c").unwrap();
        let expected = HtmlNode::parent(
            "ol",
            ["a", "b", "c"]
                .into_iter()
                .map(|item| HtmlNode::parent("li", vec![HtmlNode::text(item)]))
                .collect(),
        );
        assert_eq!(node, expected);
    }

    #[test]
    fn blockquote() {
        let md = "
> This is a
> blockquote block

this is paragraph text

";
        assert_eq!(
            render_document(md).unwrap(),
            "<div><blockquote>This is a blockquote block</blockquote><p>this is paragraph text</p></div>"
        );
    }

    #[test]
    fn broken_quote_renders_as_paragraph() {
        assert_eq!(
            render_document("> line1\n- line2").unwrap(),
            "<div><p>> line1 - line2</p></div>"
        );
    }

    #[test]
    fn code_block() {
        assert_eq!(
            render_document("```\nlet x = 1;\n```").unwrap(),
            "<div><pre>let x = 1;</pre></div>"
        );
    }

    #[test]
    fn links_and_images() {
        assert_eq!(
            render_document("See [docs](/docs) and ![logo](/logo.png)").unwrap(),
            "<div><p>See <a href=\"/docs\">docs</a> and <img src=\"/logo.png\" alt=\"logo\"></img></p></div>"
        );
    }

    #[test]
    fn invalid_list() {
        assert!(matches!(
            list_to_items("- \n- with items\n- and *more* items"),
            Err(MarkdownError::ListBlock(_))
        ));
        assert!(matches!(
            list_to_items("just a paragraph"),
            Err(MarkdownError::ListBlock(_))
        ));
    }

    #[test]
    fn invalid_quote() {
        assert!(matches!(
            quote_to_node("> This is a\n- blockquote block"),
            Err(MarkdownError::QuoteBlock(_))
        ));
    }

    #[test]
    fn invalid_code() {
        assert!(matches!(
            code_to_node("```\nFirst line of code\nSecond line of code\n``"),
            Err(MarkdownError::CodeBlock(_))
        ));
    }

    #[test]
    fn invalid_heading() {
        assert!(matches!(
            heading_to_node("####### this is an invalid heading"),
            Err(MarkdownError::HeadingSyntax(_))
        ));
        assert!(matches!(
            heading_to_node("#"),
            Err(MarkdownError::HeadingSyntax(_))
        ));
        assert!(matches!(
            heading_to_node("# "),
            Err(MarkdownError::HeadingFormat(_))
        ));
    }

    #[test]
    fn invalid_paragraph() {
        assert!(matches!(
            paragraph_to_node(""),
            Err(MarkdownError::Paragraph(_))
        ));
    }

    #[test]
    fn first_failing_block_aborts_document() {
        let md = "# Fine\n\nbroken `code\n\n#";
        assert!(matches!(
            render_document(md),
            Err(MarkdownError::Markup(_))
        ));
    }

    #[test]
    fn bare_heading_marker_fails() {
        assert!(matches!(
            render_document("#"),
            Err(MarkdownError::HeadingSyntax(_))
        ));
    }

    #[test]
    fn empty_document_has_no_children() {
        assert!(matches!(
            render_document(""),
            Err(MarkdownError::Structure(_))
        ));
    }

    #[test]
    fn list_tag_follows_given_kind() {
        let block = "- a\n- b";
        assert_eq!(
            list_of_kind(block, BlockKind::OrderedList)
                .unwrap()
                .render()
                .unwrap(),
            "<ol><li>a</li><li>b</li></ol>"
        );
        assert_eq!(
            list_to_node(block).unwrap().render().unwrap(),
            "<ul><li>a</li><li>b</li></ul>"
        );
        assert!(matches!(
            list_of_kind(block, BlockKind::Paragraph),
            Err(MarkdownError::ListBlock(_))
        ));
    }
}
