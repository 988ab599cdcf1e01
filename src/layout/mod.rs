//! Geometric document reconstruction.
//!
//! Converts a flat stream of positioned words into lines, paragraphs and
//! heading-delimited sections using only spatial and typographic signals.
//! Each stage is a fold over an ordered sequence with an explicit accumulator,
//! so the stages can be exercised in isolation.

mod fonts;
mod lines;
mod options;
mod paragraphs;
mod sections;

pub use fonts::{BodySizeEstimator, HeadingClassifier};
pub use lines::{LineBuckets, LineGrouper};
pub use options::LayoutOptions;
pub use paragraphs::{ParagraphGrouper, ParagraphState};
pub use sections::{SectionBuilder, SectionState};

use log::{info, warn};
use rayon::prelude::*;

use crate::error::Result;
use crate::model::{Section, Word};

/// Runs the full words → lines → paragraphs → sections pipeline.
#[derive(Debug, Clone)]
pub struct Reconstructor {
    options: LayoutOptions,
}

impl Reconstructor {
    /// Create a reconstructor, validating the options.
    pub fn new(options: LayoutOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Get the options in use.
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Reconstruct the sections of one document.
    ///
    /// Always returns at least one section, even for an empty word list.
    /// Words that fail [`Word::validate`] are dropped with a warning.
    pub fn reconstruct(&self, words: Vec<Word>) -> Vec<Section> {
        let words: Vec<Word> = words
            .into_iter()
            .enumerate()
            .filter_map(|(i, word)| match word.validate(i) {
                Ok(()) => Some(word),
                Err(e) => {
                    warn!("Dropping word {:?}: {}", word.text, e);
                    None
                }
            })
            .collect();
        let word_count = words.len();
        let body_size =
            BodySizeEstimator::new(self.options.default_body_size).estimate(&words);

        let lines = LineGrouper::new(self.options.y_line_threshold).group(words);
        let line_count = lines.len();

        let paragraphs = ParagraphGrouper::new(self.options.para_gap_threshold).group(lines);
        let paragraph_count = paragraphs.len();

        let classifier = HeadingClassifier::new(self.options.heading_size_delta);
        let sections = SectionBuilder::new(classifier).build(paragraphs, body_size);

        info!(
            "Reconstructed {} words -> {} lines -> {} paragraphs -> {} sections",
            word_count,
            line_count,
            paragraph_count,
            sections.len()
        );
        sections
    }

    /// Reconstruct many independent documents in parallel.
    ///
    /// Output order matches input order.
    pub fn reconstruct_batch(&self, documents: Vec<Vec<Word>>) -> Vec<Vec<Section>> {
        documents
            .into_par_iter()
            .map(|words| self.reconstruct(words))
            .collect()
    }
}

impl Default for Reconstructor {
    fn default() -> Self {
        Self {
            options: LayoutOptions::default(),
        }
    }
}
