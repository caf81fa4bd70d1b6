pub mod blocks;
pub mod inline;
pub mod options;
pub mod snapshot;
pub mod text;

#[cfg(test)]
mod tests;

use serde::Serialize;

use blocks::{Block, BlockSegmenter, MarkdownLineClassifier, assemble};
use options::RenderOptions;

/// The rendered form of one reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

/// Renders reply text with a fixed set of options.
///
/// Rendering is a pure function of the input: no state is kept between calls,
/// so one `Renderer` can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Runs segment → classify → format → assemble over `content`.
    pub fn render(&self, content: &str) -> Document {
        let candidates = BlockSegmenter::new(&self.options).segment(content);

        let classifier = MarkdownLineClassifier;
        let classified: Vec<_> = candidates
            .iter()
            .map(|candidate| classifier.classify(candidate))
            .collect();

        let blocks = assemble(&classified);
        log::trace!(
            "rendered {} block(s) from {} candidate(s)",
            blocks.len(),
            candidates.len()
        );
        Document { blocks }
    }
}

/// Convenience: render with the default options.
pub fn render(content: &str) -> Document {
    Renderer::default().render(content)
}
