//! End-to-end tests for the rendering pipeline.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    Document, Renderer,
    blocks::{Block, ParagraphLine},
    inline::{InlineContent, InlineNode, format_inline},
    options::RenderOptions,
    render, snapshot,
};

fn plain(v: &str) -> InlineContent {
    InlineContent(vec![InlineNode::Text(v.into())])
}

fn paragraph(lines: Vec<InlineContent>) -> Block {
    Block::Paragraph {
        lines: lines.into_iter().map(ParagraphLine::Text).collect(),
    }
}

#[test]
fn rules_then_example() {
    let doc = render(
        "Here are the rules:\n- Use der for masculine\n- Use die for feminine\n\n**Example:** Der Mann",
    );
    snapshot::invariants(&doc);

    assert_eq!(
        doc.blocks,
        vec![
            paragraph(vec![plain("Here are the rules:")]),
            Block::List {
                items: vec![plain("Use der for masculine"), plain("Use die for feminine")],
            },
            paragraph(vec![InlineContent(vec![
                InlineNode::Bold("Example:".into()),
                InlineNode::Text(" Der Mann".into()),
            ])]),
        ]
    );
}

#[test]
fn recovered_labels_start_their_own_blocks() {
    let doc = render("**Note:** text here\n**Tip:** more text");
    snapshot::invariants(&doc);

    assert_eq!(doc.blocks.len(), 2);
    for (block, label) in doc.blocks.iter().zip(["Note:", "Tip:"]) {
        let Block::Paragraph { lines } = block else {
            panic!("expected paragraph, got {block:?}");
        };
        let ParagraphLine::Text(content) = &lines[0] else {
            panic!("expected text line, got {:?}", lines[0]);
        };
        assert_eq!(content.nodes()[0], InlineNode::Bold(label.into()));
    }
}

#[test]
fn two_dash_lines_are_one_list() {
    let doc = render("- one\n- two");
    assert_eq!(
        doc.blocks,
        vec![Block::List {
            items: vec![plain("one"), plain("two")]
        }]
    );
}

#[test]
fn two_prose_lines_are_one_paragraph() {
    let doc = render("hello\nworld");
    assert_eq!(doc.blocks, vec![paragraph(vec![plain("hello"), plain("world")])]);
}

#[test]
fn prose_lines_are_trimmed() {
    let doc = render("   indented line   ");
    assert_eq!(doc.blocks, vec![paragraph(vec![plain("indented line")])]);
}

/// Empty and blank inputs produce no blocks.
#[rstest]
#[case("")]
#[case("\n\n\n")]
#[case("  \n\t\n")]
fn blank_input_renders_nothing(#[case] input: &str) {
    assert_eq!(render(input), Document::default());
}

#[test]
fn triple_newline_yields_leading_break() {
    let doc = render("a\n\n\nb");
    assert_eq!(
        doc.blocks,
        vec![
            paragraph(vec![plain("a")]),
            Block::Paragraph {
                lines: vec![ParagraphLine::Break, ParagraphLine::Text(plain("b"))]
            },
        ]
    );
}

#[test]
fn disabled_recovery_keeps_one_block() {
    let renderer = Renderer::new(RenderOptions {
        recover_missing_breaks: false,
        ..RenderOptions::default()
    });
    let doc = renderer.render("**Note:** a\n**Tip:** b");
    assert_eq!(doc.blocks.len(), 1);
}

#[test]
fn custom_callout_markers() {
    let renderer = Renderer::new(RenderOptions {
        callout_markers: vec!["👉".into()],
        ..RenderOptions::default()
    });
    let doc = renderer.render("Satz eins\n👉 Hinweis\n💡 kein Block");
    assert_eq!(
        doc.blocks,
        vec![
            paragraph(vec![plain("Satz eins")]),
            paragraph(vec![plain("👉 Hinweis"), plain("💡 kein Block")]),
        ]
    );
}

#[test]
fn rendering_is_repeatable() {
    let input = "**a`b`** and `c**d**`\n1. x\n2) y";
    assert_eq!(render(input), render(input));
}

#[test]
fn renderer_is_shareable_across_threads() {
    let renderer = std::sync::Arc::new(Renderer::default());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let renderer = renderer.clone();
            std::thread::spawn(move || renderer.render(&format!("- item {i}\n- **bold**")))
        })
        .collect();
    for handle in handles {
        let doc = handle.join().unwrap();
        assert_eq!(doc.blocks.len(), 1);
        snapshot::invariants(&doc);
    }
}

/// Formatting lines without delimiters is the identity.
#[rstest]
#[case("Guten Morgen!")]
#[case("Preis: 5 * 3 = 15")]
#[case("emoji 🚀 und Umlaute äöü")]
fn plain_text_is_untouched(#[case] line: &str) {
    assert_eq!(format_inline(line), plain(line));
}

/// Every line of a realistic reply re-serializes to itself.
#[test]
fn every_formatted_line_is_lossless() {
    let lines = [
        "**Erklärung:** Der bestimmte Artikel ist `der`, `die` oder `das`.",
        "💡 Tipp: Lerne **jedes Nomen** mit Artikel!",
        "Ein ***seltsamer** Fall mit `unclosed",
        "`a**b**` **c `d** e`",
        "",
    ];
    for line in lines {
        snapshot::check_lossless(line, &format_inline(line));
    }
}
