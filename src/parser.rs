use crate::block::BlockKind;

/// Split a document into trimmed blocks on blank lines.
///
/// Runs of three or more newlines collapse because the empty pieces between
/// them are dropped.
pub fn markdown_to_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Number of `#` in a heading marker, if `token` is one (1 to 6 hashes).
pub(crate) fn heading_level(token: &str) -> Option<u8> {
    let len = token.len();
    if (1..=6).contains(&len) && token.bytes().all(|b| b == b'#') {
        Some(len as u8)
    } else {
        None
    }
}

/// Classify a block by its leading markers.
///
/// Rules are tried in order: heading, code, quote, unordered list, ordered
/// list. A block whose later lines break its first line's pattern is a
/// paragraph.
pub fn block_to_block_kind(block: &str) -> BlockKind {
    let lines: Vec<&str> = block.split('\n').collect();
    let first = lines[0];

    let marker = block.split(' ').next().unwrap_or_default();
    if let Some(level) = heading_level(marker) {
        return BlockKind::Heading(level);
    }

    if lines.len() > 1 && first.starts_with("```") && lines[lines.len() - 1].starts_with("```") {
        return BlockKind::Code;
    }

    if first.starts_with('>') {
        return if lines.iter().all(|line| line.starts_with('>')) {
            BlockKind::Quote
        } else {
            BlockKind::Paragraph
        };
    }

    for marker in ["* ", "- "] {
        if first.starts_with(marker) {
            return if lines.iter().all(|line| line.starts_with(marker)) {
                BlockKind::UnorderedList
            } else {
                BlockKind::Paragraph
            };
        }
    }

    if first.starts_with("1. ") {
        let numbered = lines
            .iter()
            .enumerate()
            .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)));
        return if numbered {
            BlockKind::OrderedList
        } else {
            BlockKind::Paragraph
        };
    }

    BlockKind::Paragraph
}
