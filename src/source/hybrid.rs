//! Native extraction with OCR fallback for scanned pages.

use log::warn;

use crate::error::Result;

use super::{OcrEngine, PageWords, WordSource};

/// Combines a native word source with an OCR engine.
///
/// A page whose native text is shorter than `min_chars` characters is treated
/// as scanned and its words are replaced by the OCR engine's output. When the
/// engine has nothing for such a page, the native words are kept.
pub struct HybridSource<S, O> {
    native: S,
    ocr: O,
    min_chars: usize,
    dpi: u32,
}

impl<S: WordSource, O: OcrEngine> HybridSource<S, O> {
    /// Create a hybrid source.
    pub fn new(native: S, ocr: O, min_chars: usize, dpi: u32) -> Self {
        Self {
            native,
            ocr,
            min_chars,
            dpi,
        }
    }

    /// Check if a page looks scanned (too little native text).
    pub fn is_scanned(&self, page: &PageWords) -> bool {
        page.text().chars().count() < self.min_chars
    }
}

impl<S: WordSource, O: OcrEngine> WordSource for HybridSource<S, O> {
    fn pages(&mut self) -> Result<Vec<PageWords>> {
        let mut pages = self.native.pages()?;

        // Pages known only to the OCR engine carry no native words at all
        let missing: Vec<u32> = self
            .ocr
            .known_pages()
            .into_iter()
            .filter(|n| !pages.iter().any(|p| p.page == *n))
            .collect();
        if !missing.is_empty() {
            pages.extend(missing.into_iter().map(|n| PageWords::new(n, Vec::new())));
            pages.sort_by_key(|p| p.page);
        }

        let mut result = Vec::with_capacity(pages.len());

        for page in pages {
            if self.is_scanned(&page) {
                warn!(
                    "Page {} has little native text, falling back to OCR at {} dpi",
                    page.page, self.dpi
                );
                let words = self.ocr.recognize(page.page, self.dpi)?;
                if words.is_empty() {
                    warn!(
                        "No OCR words for page {}, keeping {} native words",
                        page.page,
                        page.words.len()
                    );
                    result.push(page);
                } else {
                    result.push(PageWords::new(page.page, words));
                }
            } else {
                result.push(page);
            }
        }

        Ok(result)
    }
}
