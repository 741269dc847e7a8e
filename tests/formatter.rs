use reelgenius::{Block, Span, format};

fn text(s: &str) -> Span {
    Span::Text(s.to_string())
}

fn bold(s: &str) -> Span {
    Span::Bold(s.to_string())
}

#[test]
fn plain_lines_map_one_to_one() {
    let source = "Open on the sunrise.\n\n   Cut to the coffee pour.   \nEnd on a smile.\n";
    let blocks = format(source);
    let expected: Vec<Block> = source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| Block::Paragraph {
            spans: vec![text(line)],
        })
        .collect();
    assert_eq!(blocks, expected);
}

#[test]
fn empty_source() {
    assert!(format("").is_empty());
}

#[test]
fn heading_and_bullet_with_emphasis() {
    assert_eq!(
        format("**Shooting Guide:**\n- Use **lighting** well."),
        vec![
            Block::Heading {
                text: "Shooting Guide:".to_string(),
            },
            Block::List {
                items: vec![vec![text("Use "), bold("lighting"), text(" well.")]],
            },
        ]
    );
}

#[test]
fn blank_line_keeps_one_list() {
    assert_eq!(
        format("- a\n\n- b"),
        vec![Block::List {
            items: vec![vec![text("a")], vec![text("b")]],
        }]
    );
}

#[test]
fn list_flushes_on_paragraph() {
    assert_eq!(
        format("* item one\n* item two\nPlain line"),
        vec![
            Block::List {
                items: vec![vec![text("item one")], vec![text("item two")]],
            },
            Block::Paragraph {
                spans: vec![text("Plain line")],
            },
        ]
    );
}

#[test]
fn deterministic() {
    let guide = "**Editing Guide:**\n- Keep a **fast pace**.\n\n- Add **music**.\nDone ** here";
    assert_eq!(format(guide), format(guide));
}

#[test]
fn emphasis_pairs_are_non_greedy() {
    assert_eq!(
        format("**a** and **b**"),
        vec![Block::Paragraph {
            spans: vec![bold("a"), text(" and "), bold("b")],
        }]
    );
}

#[test]
fn full_generated_guide() {
    let guide = "\
**Shooting Guide:**
- Open with a **dynamic tracking shot**.
- Mix **close-ups** and **wide shots**.

**Editing Guide:**
- Keep a **fast pace**.

**Transitions:**
- Try a **whip pan**.
Good luck!";

    let blocks = format(guide);
    let kinds: Vec<&str> = blocks
        .iter()
        .map(|block| match block {
            Block::Heading { .. } => "heading",
            Block::Paragraph { .. } => "paragraph",
            Block::List { .. } => "list",
        })
        .collect();
    assert_eq!(
        kinds,
        ["heading", "list", "heading", "list", "heading", "list", "paragraph"]
    );
}

#[test]
fn off_convention_reply_degrades_to_paragraphs() {
    let reply = "1. Film the intro\n2. Cut fast\n# Not a heading";
    let blocks = format(reply);
    assert_eq!(blocks.len(), 3);
    assert!(blocks.iter().all(|block| matches!(block, Block::Paragraph { .. })));
}

#[test]
fn blocks_serialize_with_kind_tags() {
    let json = serde_json::to_value(format("**Hi**\n- **x** y")).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "kind": "heading", "text": "Hi" },
            { "kind": "list", "items": [[
                { "kind": "bold", "text": "x" },
                { "kind": "text", "text": " y" }
            ]] }
        ])
    );
}
