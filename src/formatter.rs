use crate::block::{Block, Span};

const BOLD: &str = "**";
const BULLETS: [&str; 2] = ["- ", "* "];

/// Format a generated guide into a list of blocks.
///
/// Every line is trimmed on its own. Blank lines are dropped without
/// closing an open list, so bullets separated only by blank lines end up
/// in the same `Block::List`.
pub fn format(source: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut pending_items: Vec<Vec<Span>> = Vec::new();

    for line in source.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(content) = strip_bullet(trimmed) {
            pending_items.push(parse_spans(content));
            continue;
        }

        flush_list(&mut pending_items, &mut blocks);

        let spans = parse_spans(trimmed);
        match heading_text(trimmed, &spans) {
            Some(text) => blocks.push(Block::Heading {
                text: text.to_string(),
            }),
            None => blocks.push(Block::Paragraph { spans }),
        }
    }

    flush_list(&mut pending_items, &mut blocks);
    blocks
}

/// Split a line into plain and bold spans.
///
/// An opening `**` pairs with the nearest following `**`. A marker with no
/// partner is kept as plain text.
pub fn parse_spans(content: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = content;

    while let Some((start, end)) = next_bold_pair(rest) {
        if start > 0 {
            spans.push(Span::Text(rest[..start].to_string()));
        }
        let inner = &rest[start + BOLD.len()..end - BOLD.len()];
        spans.push(Span::Bold(inner.to_string()));
        rest = &rest[end..];
    }

    if !rest.is_empty() {
        spans.push(Span::Text(rest.to_string()));
    }
    spans
}

/// Byte range of the first complete `**...**` pair, closing marker included.
fn next_bold_pair(text: &str) -> Option<(usize, usize)> {
    let open = text.find(BOLD)?;
    let after_open = open + BOLD.len();
    let close = text[after_open..].find(BOLD)? + after_open;
    Some((open, close + BOLD.len()))
}

fn strip_bullet(line: &str) -> Option<&str> {
    BULLETS.iter().find_map(|marker| line.strip_prefix(marker))
}

/// A heading is a line that is one bold pair from end to end. A line like
/// `**a** and **b**` starts and ends with a marker but holds two pairs, so
/// it stays a paragraph.
fn heading_text<'a>(line: &'a str, spans: &[Span]) -> Option<&'a str> {
    if line.len() < 2 * BOLD.len() || !matches!(spans, [Span::Bold(_)]) {
        return None;
    }
    line.strip_prefix(BOLD)?.strip_suffix(BOLD)
}

fn flush_list(pending_items: &mut Vec<Vec<Span>>, blocks: &mut Vec<Block>) {
    if !pending_items.is_empty() {
        blocks.push(Block::List {
            items: std::mem::take(pending_items),
        });
    }
}
