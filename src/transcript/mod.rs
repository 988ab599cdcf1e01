//! Transcript cleaning pipeline.
//!
//! A deterministic, rule-based denoising cascade for noisy ASR transcripts,
//! applied before any language-model normalization:
//!
//! 1. normalize (lowercase, whitespace, punctuation)
//! 2. script filter
//! 3. repeated filler removal
//! 4. token repetition collapse
//! 5. n-gram repetition collapse
//! 6. numeric spam removal
//! 7. entropy gate (reject low-information chunks)
//!
//! The surviving text is classified by subject to select the normalization
//! prompt for the text generation backend.

mod cleaner;
mod normalizer;
mod options;
pub mod stages;
mod subject;

pub use cleaner::{CleanOutcome, TranscriptCleaner};
pub use normalizer::{NormalizedChunk, TranscriptNormalizer};
pub use options::{CleanOptions, DEFAULT_FILLERS};
pub use stages::{FillerRemover, Stage};
pub use subject::{classify_subject, subject_scores, Subject};

/// Split a transcript into chunks on blank lines, dropping empty chunks.
pub fn split_chunks(text: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                chunks.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line.trim());
        }
    }
    if !current.is_empty() {
        chunks.push(current.join(" "));
    }

    chunks
}
