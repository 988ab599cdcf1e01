//! OCR word recovery for scanned pages.

use std::collections::BTreeMap;

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::model::Word;

/// Recognizes the words of one rasterized page.
pub trait OcrEngine {
    /// Rasterize `page` at `dpi` and return its words, all marked as OCR-derived.
    fn recognize(&self, page: u32, dpi: u32) -> Result<Vec<Word>>;

    /// Pages the engine can recognize without the native source listing them.
    ///
    /// Fully scanned pages have no native words at all, so a word dump never
    /// mentions them; engines that know their pages report them here.
    fn known_pages(&self) -> Vec<u32> {
        Vec::new()
    }
}

/// Column count of tesseract's `image_to_data` TSV output.
const TSV_COLUMNS: usize = 12;

/// Parse tesseract TSV output (`image_to_data`) into OCR words for `page`.
///
/// Columns: `level page_num block_num par_num line_num word_num left top width
/// height conf text`. The header row and rows with blank text are skipped.
/// Every word gets `size` as its synthetic font size.
pub fn parse_tesseract_tsv(tsv: &str, page: u32, size: f32) -> Result<Vec<Word>> {
    let mut words = Vec::new();

    for (line_no, row) in tsv.lines().enumerate() {
        if row.trim().is_empty() || row.starts_with("level") {
            continue;
        }

        let fields: Vec<&str> = row.split('\t').collect();
        if fields.len() < TSV_COLUMNS - 1 {
            return Err(Error::OcrParse(format!(
                "line {}: expected {} columns, found {}",
                line_no + 1,
                TSV_COLUMNS,
                fields.len()
            )));
        }

        // Structural rows (page/block/line) carry no text column content
        let text = fields.get(TSV_COLUMNS - 1).map(|t| t.trim()).unwrap_or("");
        if text.is_empty() {
            continue;
        }

        let number = |idx: usize, name: &str| -> Result<f32> {
            fields[idx].trim().parse::<f32>().map_err(|_| {
                Error::OcrParse(format!(
                    "line {}: invalid {} value '{}'",
                    line_no + 1,
                    name,
                    fields[idx]
                ))
            })
        };
        let left = number(6, "left")?;
        let top = number(7, "top")?;
        let width = number(8, "width")?;
        let height = number(9, "height")?;

        let word = Word::new(text, page, left, left + width, top, top + height)
            .with_size(size)
            .ocr();
        words.push(word);
    }

    debug!("OCR page {}: {} words", page, words.len());
    Ok(words)
}

/// OCR engine backed by pre-computed tesseract TSV output, one document per page.
#[derive(Debug, Clone, Default)]
pub struct TsvOcrEngine {
    pages: BTreeMap<u32, String>,
    size: f32,
}

impl TsvOcrEngine {
    /// Create an engine assigning `size` to every recognized word.
    pub fn new(size: f32) -> Self {
        Self {
            pages: BTreeMap::new(),
            size,
        }
    }

    /// Register the TSV output for a page.
    pub fn with_page(mut self, page: u32, tsv: impl Into<String>) -> Self {
        self.pages.insert(page, tsv.into());
        self
    }

    /// Register the TSV output for a page.
    pub fn add_page(&mut self, page: u32, tsv: impl Into<String>) {
        self.pages.insert(page, tsv.into());
    }

    /// Pages that have OCR output.
    pub fn page_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.pages.keys().copied()
    }
}

impl OcrEngine for TsvOcrEngine {
    fn recognize(&self, page: u32, dpi: u32) -> Result<Vec<Word>> {
        match self.pages.get(&page) {
            Some(tsv) => {
                debug!("Using TSV OCR output for page {} ({} dpi requested)", page, dpi);
                parse_tesseract_tsv(tsv, page, self.size)
            }
            None => {
                warn!("No OCR output available for page {}", page);
                Ok(Vec::new())
            }
        }
    }

    fn known_pages(&self) -> Vec<u32> {
        self.page_numbers().collect()
    }
}
