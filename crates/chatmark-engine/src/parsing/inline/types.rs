use serde::Serialize;

use super::kinds::{Bold, CodeSpan};

/// A formatted run of text within one line.
///
/// Values never include their delimiters: `**hi**` becomes `Bold("hi")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum InlineNode {
    /// Plain text outside any recognized span.
    Text(String),
    /// The inner text of a `**...**` span.
    Bold(String),
    /// The inner text of a `` `...` `` span.
    Code(String),
}

impl InlineNode {
    /// Returns the node's text, ignoring its tag.
    pub fn value(&self) -> &str {
        match self {
            InlineNode::Text(v) | InlineNode::Bold(v) | InlineNode::Code(v) => v,
        }
    }

    /// Writes the node back out with its delimiters.
    fn write_markdown(&self, out: &mut String) {
        match self {
            InlineNode::Text(v) => out.push_str(v),
            InlineNode::Bold(v) => {
                let delim = char::from(Bold::STAR);
                out.extend([delim, delim]);
                out.push_str(v);
                out.extend([delim, delim]);
            }
            InlineNode::Code(v) => {
                let tick = char::from(CodeSpan::TICK);
                out.push(tick);
                out.push_str(v);
                out.push(tick);
            }
        }
    }
}

/// The formatted content of a single line: an ordered sequence of nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InlineContent(pub Vec<InlineNode>);

impl InlineContent {
    pub fn nodes(&self) -> &[InlineNode] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InlineNode> {
        self.0.iter()
    }

    /// Concatenated node values without delimiters, i.e. the visible text.
    pub fn plain_text(&self) -> String {
        self.0.iter().map(InlineNode::value).collect()
    }

    /// Re-applies delimiters, reproducing the line the content was formatted from.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        for node in &self.0 {
            node.write_markdown(&mut out);
        }
        out
    }
}

impl<'a> IntoIterator for &'a InlineContent {
    type Item = &'a InlineNode;
    type IntoIter = std::slice::Iter<'a, InlineNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
