//! # unlecture
//!
//! Turns lecture material into study-ready text.
//!
//! Two independent pipelines share this crate:
//!
//! - **Document reconstruction**: positioned word records (from a PDF text
//!   layer, with OCR fallback for scanned pages) are grouped into lines,
//!   paragraphs and font-size delimited sections, then summarized.
//! - **Transcript cleaning**: noisy speech-recognition chunks go through a
//!   deterministic denoising cascade and an entropy gate before optional
//!   subject-aware normalization by a language model.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unlecture::{reconstruct_file, render, summarize};
//!
//! fn main() -> unlecture::Result<()> {
//!     // Rebuild sections from a JSON word dump
//!     let sections = reconstruct_file("slides.words.json")?;
//!
//!     // Summarize and render as Markdown
//!     let summarizer = summarize::TruncatingSummarizer::default();
//!     let summaries = summarize::summarize_sections(&sections, &summarizer)?;
//!     println!("{}", render::to_markdown(&summaries));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Layout heuristics**: line bucketing, gap-based paragraphs, median font size headings
//! - **OCR fallback**: scanned pages replaced by OCR words without font metrics
//! - **Transcript cascade**: filler, repetition and numeric spam removal
//! - **Parallel batches**: Rayon across independent documents and chunks
//! - **LLM boundary**: pluggable [`llm::TextGenerator`], OpenRouter client behind the `openrouter` feature

pub mod error;
pub mod layout;
pub mod llm;
pub mod model;
pub mod notes;
pub mod render;
pub mod source;
pub mod summarize;
pub mod transcript;

// Re-export commonly used types
pub use error::{Error, Result};
pub use layout::{LayoutOptions, Reconstructor};
pub use llm::TextGenerator;
pub use model::{FontMetrics, Line, Paragraph, Section, Word};
pub use notes::{merge_chunks, NoteGenerator, TextStats};
pub use render::JsonFormat;
pub use source::{collect_words, JsonWordSource, WordSource};
pub use summarize::{SectionSummary, Summarizer, TruncatingSummarizer};
pub use transcript::{
    classify_subject, CleanOptions, CleanOutcome, Subject, TranscriptCleaner,
    TranscriptNormalizer,
};

use std::path::Path;

/// Reconstruct sections from a JSON word dump with default options.
///
/// # Example
///
/// ```no_run
/// use unlecture::reconstruct_file;
///
/// let sections = reconstruct_file("slides.words.json").unwrap();
/// for section in &sections {
///     println!("{}: {} paragraphs", section.title, section.paragraphs.len());
/// }
/// ```
pub fn reconstruct_file<P: AsRef<Path>>(path: P) -> Result<Vec<Section>> {
    reconstruct_file_with_options(path, LayoutOptions::default())
}

/// Reconstruct sections from a JSON word dump with custom options.
pub fn reconstruct_file_with_options<P: AsRef<Path>>(
    path: P,
    options: LayoutOptions,
) -> Result<Vec<Section>> {
    let mut source = JsonWordSource::open(path)?;
    reconstruct_source(&mut source, options)
}

/// Reconstruct sections from any word source.
pub fn reconstruct_source<S: WordSource + ?Sized>(
    source: &mut S,
    options: LayoutOptions,
) -> Result<Vec<Section>> {
    let words = collect_words(source)?;
    Ok(Reconstructor::new(options)?.reconstruct(words))
}

/// Reconstruct sections from words already in memory, using default options.
///
/// Unlike [`collect_words`], this does not fail on malformed words; they are
/// dropped instead.
pub fn reconstruct_words(words: Vec<Word>) -> Vec<Section> {
    Reconstructor::default().reconstruct(words)
}

/// Render a JSON word dump as `## title` / summary Markdown using the
/// truncating summarizer.
///
/// # Example
///
/// ```no_run
/// let markdown = unlecture::summarize_file("slides.words.json").unwrap();
/// std::fs::write("summary.md", markdown).unwrap();
/// ```
pub fn summarize_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let sections = reconstruct_file(path)?;
    let summaries = summarize::summarize_sections(&sections, &TruncatingSummarizer::default())?;
    Ok(render::to_markdown(&summaries))
}

/// Clean one transcript chunk with default options.
///
/// Returns `Ok(None)` when the chunk is rejected as non-content.
///
/// # Example
///
/// ```
/// let cleaned = unlecture::clean_transcript("Okay okay so the heap is a tree").unwrap();
/// assert_eq!(cleaned.as_deref(), Some("so the heap is a tree"));
/// ```
pub fn clean_transcript(chunk: &str) -> Result<Option<String>> {
    let cleaner = TranscriptCleaner::new(CleanOptions::default())?;
    Ok(cleaner.clean_text(chunk))
}
