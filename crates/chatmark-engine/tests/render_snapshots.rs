use chatmark_engine::{format_inline, render, snapshot};

const FIXTURES: [&str; 4] = [
    "rules_example",
    "missing_breaks",
    "overlapping_spans",
    "list_and_breaks",
];

#[test]
fn fixture_rules_example() {
    assert_fixture("rules_example");
}

#[test]
fn fixture_missing_breaks() {
    assert_fixture("missing_breaks");
}

#[test]
fn fixture_overlapping_spans() {
    assert_fixture("overlapping_spans");
}

#[test]
fn fixture_list_and_breaks() {
    assert_fixture("list_and_breaks");
}

fn read_fixture(name: &str) -> String {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    // Fixture files end with a newline; replies usually do not.
    md.strip_suffix('\n').unwrap_or(&md).to_string()
}

fn assert_fixture(name: &str) {
    let md = read_fixture(name);

    let doc = render(&md);
    snapshot::invariants(&doc);

    let outline = snapshot::normalize(&doc);
    insta::assert_snapshot!(name, outline);
}

/// Every fixture line survives inline formatting byte for byte
#[test]
fn fixture_lines_are_lossless() {
    for name in FIXTURES {
        let md = read_fixture(name);
        for line in md.lines() {
            snapshot::check_lossless(line, &format_inline(line));
        }
    }
}

/// Unterminated markers render as plain text
#[test]
fn unclosed_constructs_become_text() {
    use chatmark_engine::{Block, InlineNode, ParagraphLine};

    let doc = render("**unclosed and `also unclosed");
    let Block::Paragraph { lines } = &doc.blocks[0] else {
        panic!("expected paragraph");
    };
    let ParagraphLine::Text(content) = &lines[0] else {
        panic!("expected text line");
    };
    assert_eq!(
        content.nodes(),
        &[InlineNode::Text("**unclosed and `also unclosed".into())]
    );
}
