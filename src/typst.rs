use crate::block::{Block, Span};
use crate::render::Render;

/// Lists up to this many items are kept on one page
const UNBREAKABLE_LIST_ITEMS: usize = 5;

/// Renders blocks as Typst markup for PDF export.
#[derive(Debug, Clone, Default)]
pub struct Typst;

impl Render for Typst {
    fn render(&self, blocks: &[Block]) -> String {
        blocks_to_typst(blocks)
    }
}

/// Convert blocks to Typst markup
pub fn blocks_to_typst(blocks: &[Block]) -> String {
    let mut out = String::new();

    out.push_str("#set par(linebreaks: \"optimized\")\n\n");

    let mut i = 0;
    while i < blocks.len() {
        match &blocks[i] {
            Block::Heading { text } => {
                // Keep the heading on the same page as what follows it
                out.push_str("#block(breakable: false)[\n");
                emit_heading(text, &mut out);
                if i + 1 < blocks.len() {
                    i += 1;
                    emit_block(&blocks[i], &mut out);
                }
                out.push_str("]\n\n");
            }
            block => emit_block(block, &mut out),
        }
        i += 1;
    }

    out
}

fn emit_heading(text: &str, out: &mut String) {
    out.push_str("==== ");
    escape_into(text, out);
    out.push_str("\n\n");
}

fn emit_block(block: &Block, out: &mut String) {
    match block {
        Block::Heading { text } => emit_heading(text, out),
        Block::Paragraph { spans } => {
            spans_to_typst(spans, out);
            out.push_str("\n\n");
        }
        Block::List { items } => {
            let wrap = items.len() <= UNBREAKABLE_LIST_ITEMS;
            if wrap {
                out.push_str("#block(breakable: false)[\n");
            }
            for item in items {
                out.push_str("- ");
                spans_to_typst(item, out);
                out.push('\n');
            }
            if wrap {
                out.push_str("]\n\n");
            } else {
                out.push('\n');
            }
        }
    }
}

/// Spans always start a markup line, either a paragraph or the content
/// after a `- ` list marker.
fn spans_to_typst(spans: &[Span], out: &mut String) {
    let mut line_start = true;
    for span in spans {
        match span {
            Span::Text(text) => escape_text(text, line_start, out),
            Span::Bold(text) if text.is_empty() => continue,
            Span::Bold(text) => {
                out.push_str("#strong[");
                escape_text(text, line_start, out);
                out.push(']');
            }
        }
        line_start = line_start && span.text().trim().is_empty();
    }
}

fn escape_text(text: &str, line_start: bool, out: &mut String) {
    if line_start {
        escape_line_start(text, out);
    } else {
        escape_into(text, out);
    }
}

/// Text opening a line must not read as a list, enum or heading marker.
fn escape_line_start(text: &str, out: &mut String) {
    let rest = text.trim_start();
    out.push_str(&text[..text.len() - rest.len()]);

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if rest.starts_with(['-', '+', '=']) {
        out.push('\\');
        escape_into(rest, out);
    } else if digits > 0 && rest[digits..].starts_with('.') {
        out.push_str(&rest[..digits]);
        out.push_str("\\.");
        escape_into(&rest[digits + 1..], out);
    } else {
        escape_into(rest, out);
    }
}

fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '#' | '*' | '_' | '@' | '$' | '\\' | '`' | '<' | '>' | '[' | ']' | '/' | '~' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
}
