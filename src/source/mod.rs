//! Word sources: the boundary to PDF text extraction and OCR.
//!
//! Extraction itself happens outside this crate. A [`WordSource`] yields the
//! positioned words of each page; [`collect_words`] flattens and validates them
//! into the document word sequence consumed by the layout stages.

mod hybrid;
mod json;
mod ocr;

pub use hybrid::HybridSource;
pub use json::JsonWordSource;
pub use ocr::{parse_tesseract_tsv, OcrEngine, TsvOcrEngine};

use log::debug;

use crate::error::{Error, Result};
use crate::model::Word;

/// The positioned words of one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageWords {
    /// 1-based page number
    pub page: u32,
    /// Words on the page, in extraction order
    pub words: Vec<Word>,
}

impl PageWords {
    /// Create a page.
    pub fn new(page: u32, words: Vec<Word>) -> Self {
        Self { page, words }
    }

    /// Words joined with single spaces and trimmed.
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }
}

/// Producer of positioned words, page by page.
///
/// Implementations must yield pages with non-decreasing, 1-based page numbers.
pub trait WordSource {
    /// Extract every page of the document.
    fn pages(&mut self) -> Result<Vec<PageWords>>;
}

/// Extract all pages from a source and flatten them into one validated word sequence.
pub fn collect_words<S: WordSource + ?Sized>(source: &mut S) -> Result<Vec<Word>> {
    let pages = source.pages()?;
    let mut words = Vec::with_capacity(pages.iter().map(|p| p.words.len()).sum());
    let mut previous_page = 0u32;

    for page in pages {
        for word in page.words {
            word.validate(words.len())?;
            if word.page < previous_page {
                return Err(Error::PageOrder {
                    previous: previous_page,
                    found: word.page,
                });
            }
            previous_page = word.page;
            words.push(word);
        }
    }

    debug!("Collected {} words", words.len());
    Ok(words)
}
