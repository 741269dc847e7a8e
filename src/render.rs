use serde::Deserialize;

use crate::block::{Block, Span};

/// Turns formatted blocks into one presentation.
pub trait Render {
    fn render(&self, blocks: &[Block]) -> String;
}

/// Output formats the CLI can write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Typst,
    Json,
}

/// Terminal rendering: bold spans keep their `**` markers, list items are
/// prefixed with a bullet.
#[derive(Debug, Clone)]
pub struct PlainText {
    pub bullet: String,
}

impl Default for PlainText {
    fn default() -> Self {
        Self {
            bullet: "•".to_string(),
        }
    }
}

impl Render for PlainText {
    fn render(&self, blocks: &[Block]) -> String {
        let mut out = String::new();

        for (i, block) in blocks.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            match block {
                Block::Heading { text } => {
                    out.push_str(text);
                    out.push('\n');
                }
                Block::Paragraph { spans } => {
                    push_spans(spans, &mut out);
                    out.push('\n');
                }
                Block::List { items } => {
                    for item in items {
                        out.push_str(&self.bullet);
                        out.push(' ');
                        push_spans(item, &mut out);
                        out.push('\n');
                    }
                }
            }
        }

        out
    }
}

fn push_spans(spans: &[Span], out: &mut String) {
    for span in spans {
        match span {
            Span::Text(text) => out.push_str(text),
            Span::Bold(text) => {
                out.push_str("**");
                out.push_str(text);
                out.push_str("**");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format;

    #[test]
    fn plain_text_layout() {
        let blocks = format("**Editing Guide:**\n- Keep a **fast pace**.\n- Use **music**.\nThat's it.");
        assert_eq!(
            PlainText::default().render(&blocks),
            "Editing Guide:\n\n• Keep a **fast pace**.\n• Use **music**.\n\nThat's it.\n"
        );
    }

    #[test]
    fn custom_bullet() {
        let renderer = PlainText {
            bullet: "-".to_string(),
        };
        assert_eq!(renderer.render(&format("* one")), "- one\n");
    }

    #[test]
    fn bold_markers_survive() {
        assert_eq!(
            PlainText::default().render(&format("- Use **lighting** well.")),
            "• Use **lighting** well.\n"
        );
        assert_eq!(PlainText::default().render(&format("a****b")), "a****b\n");
    }

    #[test]
    fn nothing_to_render() {
        assert_eq!(PlainText::default().render(&[]), "");
    }
}
