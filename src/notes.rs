//! Lecture note generation and chunk merging.
//!
//! Notes combine two sources: the slide/PDF text, which is authoritative and
//! fixes the structure, and the cleaned lecture transcript, which may only
//! add detail. Processed transcript chunks are merged back in chunk order.

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::llm::{prompts, TextGenerator};

/// Builds structured notes from PDF text and a lecture transcript.
#[derive(Debug, Clone)]
pub struct NoteGenerator<G> {
    generator: G,
    system_prompt: String,
}

impl<G: TextGenerator> NoteGenerator<G> {
    /// Create a note generator using the default notes prompt.
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            system_prompt: prompts::NOTE_GENERATION.to_string(),
        }
    }

    /// Replace the system prompt.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Generate notes. Both inputs must contain non-whitespace text.
    pub fn generate(&self, pdf_text: &str, lecture_text: &str) -> Result<String> {
        if pdf_text.trim().is_empty() {
            return Err(Error::InvalidInput("PDF text cannot be empty".into()));
        }
        if lecture_text.trim().is_empty() {
            return Err(Error::InvalidInput("Lecture text cannot be empty".into()));
        }

        info!(
            "Generating notes from {} PDF chars and {} transcript chars",
            pdf_text.len(),
            lecture_text.len()
        );
        let message = user_message(pdf_text, lecture_text);
        self.generator.generate(&message, &self.system_prompt)
    }
}

fn user_message(pdf_text: &str, lecture_text: &str) -> String {
    format!(
        "PDF CONTENT (AUTHORITATIVE SOURCE):\n{}\n\n---\n\n\
         LECTURE TRANSCRIPT (SECONDARY SOURCE):\n{}\n\n---\n\n\
         Generate structured academic notes following the PDF structure, \
         enhanced only where the lecture explicitly adds value.",
        pdf_text, lecture_text
    )
}

/// Merge processed chunks in chunk-number order, separated by a blank line.
///
/// Blank chunks (e.g. rejected by the entropy gate) are skipped.
pub fn merge_chunks(chunks: &[(u32, String)]) -> String {
    let mut sorted: Vec<&(u32, String)> = chunks.iter().collect();
    sorted.sort_by_key(|(number, _)| *number);

    sorted
        .into_iter()
        .map(|(_, text)| text.trim())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Size statistics for a piece of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    /// Character count
    pub characters: usize,
    /// Whitespace-separated word count
    pub words: usize,
    /// Rough token estimate, one token per four characters
    pub tokens: usize,
}

impl TextStats {
    /// Compute statistics for `text`.
    pub fn of(text: &str) -> Self {
        let characters = text.chars().count();
        Self {
            characters,
            words: text.split_whitespace().count(),
            tokens: characters.div_ceil(4),
        }
    }
}

impl std::ops::Add for TextStats {
    type Output = TextStats;

    fn add(self, other: TextStats) -> TextStats {
        TextStats {
            characters: self.characters + other.characters,
            words: self.words + other.words,
            tokens: self.tokens + other.tokens,
        }
    }
}
