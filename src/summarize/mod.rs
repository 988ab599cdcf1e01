//! Section summarization.
//!
//! The default [`TruncatingSummarizer`] is a deterministic placeholder; swap in
//! [`LlmSummarizer`] to route section text through a language model.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::llm::{prompts, TextGenerator};
use crate::model::Section;

/// Produces a bounded-length plain-text summary of a section's body text.
pub trait Summarizer {
    /// Summarize `text`.
    fn summarize(&self, text: &str) -> Result<String>;
}

/// A section title paired with its summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSummary {
    /// Section title
    pub title: String,
    /// Summary text
    pub summary: String,
}

/// Options for the truncating summarizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryOptions {
    /// Character budget before truncation
    pub max_chars: usize,
    /// Marker appended when text was truncated
    pub ellipsis: String,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            max_chars: 300,
            ellipsis: "...".to_string(),
        }
    }
}

/// Keeps the first `max_chars` characters and marks truncation.
#[derive(Debug, Clone, Default)]
pub struct TruncatingSummarizer {
    options: SummaryOptions,
}

impl TruncatingSummarizer {
    /// Create a summarizer with the given options.
    pub fn new(options: SummaryOptions) -> Self {
        Self { options }
    }

    /// Create a summarizer with a custom character budget.
    pub fn with_max_chars(max_chars: usize) -> Self {
        Self::new(SummaryOptions {
            max_chars,
            ..SummaryOptions::default()
        })
    }
}

impl Summarizer for TruncatingSummarizer {
    fn summarize(&self, text: &str) -> Result<String> {
        // Truncate on char boundaries, never inside a UTF-8 sequence
        match text.char_indices().nth(self.options.max_chars) {
            Some((cut, _)) => Ok(format!("{}{}", &text[..cut], self.options.ellipsis)),
            None => Ok(text.to_string()),
        }
    }
}

/// Summarizes through a text generation backend.
#[derive(Debug, Clone)]
pub struct LlmSummarizer<G> {
    generator: G,
    system_prompt: String,
}

impl<G: TextGenerator> LlmSummarizer<G> {
    /// Create a summarizer using the default section summary prompt.
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            system_prompt: prompts::SECTION_SUMMARY.to_string(),
        }
    }

    /// Override the system prompt.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }
}

impl<G: TextGenerator> Summarizer for LlmSummarizer<G> {
    fn summarize(&self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }
        let summary = self.generator.generate(text, &self.system_prompt)?;
        Ok(summary.trim().to_string())
    }
}

/// Summarize every section in order.
///
/// Stops at the first summarizer failure and returns it.
pub fn summarize_sections<S: Summarizer + ?Sized>(
    sections: &[Section],
    summarizer: &S,
) -> Result<Vec<SectionSummary>> {
    sections
        .iter()
        .map(|section| {
            debug!("Summarizing section '{}'", section.title);
            Ok(SectionSummary {
                title: section.title.clone(),
                summary: summarizer.summarize(&section.body_text())?,
            })
        })
        .collect()
}
