//! The ordered cleaning cascade and entropy gate.

use log::{debug, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::options::CleanOptions;
use super::stages::{self, FillerRemover, Stage};
use crate::error::Result;

/// Result of cleaning one transcript chunk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CleanOutcome {
    /// The chunk carries content.
    Kept {
        /// Cleaned text
        text: String,
    },
    /// The chunk was judged non-content by the entropy gate.
    Rejected {
        /// Unique-token ratio that failed the gate
        unique_ratio: f64,
    },
}

impl CleanOutcome {
    /// Check if the chunk survived.
    pub fn is_kept(&self) -> bool {
        matches!(self, CleanOutcome::Kept { .. })
    }

    /// Cleaned text, or an empty string for rejected chunks.
    pub fn text(&self) -> &str {
        match self {
            CleanOutcome::Kept { text } => text,
            CleanOutcome::Rejected { .. } => "",
        }
    }

    /// Convert into the cleaned text, `None` when rejected.
    pub fn into_text(self) -> Option<String> {
        match self {
            CleanOutcome::Kept { text } => Some(text),
            CleanOutcome::Rejected { .. } => None,
        }
    }
}

/// Rule-based denoiser for spoken-language transcript chunks.
#[derive(Debug, Clone)]
pub struct TranscriptCleaner {
    options: CleanOptions,
    fillers: FillerRemover,
    stages: Vec<Stage>,
}

impl TranscriptCleaner {
    /// Create a cleaner running [`Stage::DEFAULT_ORDER`].
    pub fn new(options: CleanOptions) -> Result<Self> {
        options.validate()?;
        let fillers = FillerRemover::new(options.fillers.as_slice())?;
        Ok(Self {
            options,
            fillers,
            stages: Stage::DEFAULT_ORDER.to_vec(),
        })
    }

    /// Replace the stage list. Stages run in the given order.
    pub fn with_stages(mut self, stages: Vec<Stage>) -> Self {
        self.stages = stages;
        self
    }

    /// Get the options in use.
    pub fn options(&self) -> &CleanOptions {
        &self.options
    }

    /// Get the active stage order.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Apply a single stage.
    pub fn apply(&self, stage: Stage, text: &str) -> String {
        match stage {
            Stage::Normalize => stages::normalize(text),
            Stage::ScriptFilter => stages::filter_script(text),
            Stage::FillerRemoval => self.fillers.remove(text),
            Stage::TokenRepetition => {
                stages::collapse_token_repetition(text, self.options.max_repeat)
            }
            Stage::NgramRepetition => {
                stages::collapse_ngram_repetition(text, self.options.ngram_size)
            }
            Stage::NumericSpam => {
                stages::remove_numeric_spam(text, self.options.numeric_spam_min_run)
            }
        }
    }

    /// Run every stage in order without the entropy gate.
    pub fn transform(&self, chunk: &str) -> String {
        self.stages.iter().fold(chunk.to_string(), |text, stage| {
            let out = self.apply(*stage, &text);
            trace!("{}: {} -> {} chars", stage.name(), text.len(), out.len());
            out
        })
    }

    /// Check a transformed chunk against the entropy gate.
    pub fn gate(&self, text: &str) -> CleanOutcome {
        let unique_ratio = stages::unique_token_ratio(text);
        let empty = text.split_whitespace().next().is_none();
        if empty || unique_ratio < self.options.entropy_threshold {
            debug!(
                "Rejected chunk: unique ratio {:.2} below {:.2}",
                unique_ratio, self.options.entropy_threshold
            );
            CleanOutcome::Rejected { unique_ratio }
        } else {
            CleanOutcome::Kept {
                text: text.to_string(),
            }
        }
    }

    /// Clean one chunk: the full cascade followed by the entropy gate.
    pub fn clean(&self, chunk: &str) -> CleanOutcome {
        self.gate(&self.transform(chunk))
    }

    /// Clean one chunk, `None` when rejected.
    pub fn clean_text(&self, chunk: &str) -> Option<String> {
        self.clean(chunk).into_text()
    }

    /// Clean independent chunks in parallel. Output order matches input order.
    pub fn clean_chunks<S: AsRef<str> + Sync>(&self, chunks: &[S]) -> Vec<CleanOutcome> {
        chunks
            .par_iter()
            .map(|chunk| self.clean(chunk.as_ref()))
            .collect()
    }
}
