use serde::Serialize;

/// Inline text spans
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Span {
    Text(String),
    Bold(String),
}

impl Span {
    /// The span's text without any markers.
    pub fn text(&self) -> &str {
        match self {
            Span::Text(text) | Span::Bold(text) => text,
        }
    }
}

/// Block-level elements of a formatted guide
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading { text: String },
    Paragraph { spans: Vec<Span> },
    /// One entry per bullet line, in source order
    List { items: Vec<Vec<Span>> },
}
