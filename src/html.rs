use pulldown_cmark::{CowStr, Event, HeadingLevel, Tag, TagEnd, html};

use crate::block::{Block, Span};
use crate::render::Render;

/// Renders blocks as an HTML fragment.
///
/// Headings use `<h4>`, matching their place under a hook title.
#[derive(Debug, Clone, Default)]
pub struct Html;

impl Render for Html {
    fn render(&self, blocks: &[Block]) -> String {
        let mut out = String::new();
        html::push_html(&mut out, blocks_to_events(blocks).into_iter());
        out
    }
}

fn blocks_to_events(blocks: &[Block]) -> Vec<Event<'_>> {
    let mut events = Vec::new();

    for block in blocks {
        match block {
            Block::Heading { text } => {
                events.push(Event::Start(Tag::Heading {
                    level: HeadingLevel::H4,
                    id: None,
                    classes: Vec::new(),
                    attrs: Vec::new(),
                }));
                events.push(Event::Text(CowStr::Borrowed(text.as_str())));
                events.push(Event::End(TagEnd::Heading(HeadingLevel::H4)));
            }
            Block::Paragraph { spans } => {
                events.push(Event::Start(Tag::Paragraph));
                push_spans(spans, &mut events);
                events.push(Event::End(TagEnd::Paragraph));
            }
            Block::List { items } => {
                events.push(Event::Start(Tag::List(None)));
                for item in items {
                    events.push(Event::Start(Tag::Item));
                    push_spans(item, &mut events);
                    events.push(Event::End(TagEnd::Item));
                }
                events.push(Event::End(TagEnd::List(false)));
            }
        }
    }

    events
}

fn push_spans<'a>(spans: &'a [Span], events: &mut Vec<Event<'a>>) {
    for span in spans {
        match span {
            Span::Text(text) => events.push(Event::Text(CowStr::Borrowed(text.as_str()))),
            Span::Bold(text) => {
                events.push(Event::Start(Tag::Strong));
                events.push(Event::Text(CowStr::Borrowed(text.as_str())));
                events.push(Event::End(TagEnd::Strong));
            }
        }
    }
}
