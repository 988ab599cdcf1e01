//! Positioned word records.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Font name used by extractors to mark words recovered through OCR.
pub const OCR_FONT_NAME: &str = "OCR";

/// Synthetic font size given to words that carry no font metric.
pub const SYNTHETIC_FONT_SIZE: f32 = 10.0;

/// Where a word's font information comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FontMetrics {
    /// Native text extraction: the size is real and the font is named.
    Native {
        /// Font name (e.g., "Helvetica-Bold")
        name: String,
    },
    /// Optical character recognition: the size is a placeholder.
    Ocr,
}

/// A single positioned word on a page.
///
/// Coordinates are in page space with `top` growing downwards, as produced by
/// common PDF word extractors. Words are immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WordRecord", into = "WordRecord")]
pub struct Word {
    /// The text content
    pub text: String,
    /// Left edge
    pub x0: f32,
    /// Right edge
    pub x1: f32,
    /// Top edge
    pub top: f32,
    /// Bottom edge
    pub bottom: f32,
    /// 1-based page number
    pub page: u32,
    /// Font size in points
    pub size: f32,
    /// Font provenance
    pub font: FontMetrics,
}

impl Word {
    /// Create a native word with the synthetic size and an unnamed font.
    pub fn new(
        text: impl Into<String>,
        page: u32,
        x0: f32,
        x1: f32,
        top: f32,
        bottom: f32,
    ) -> Self {
        Self {
            text: text.into(),
            x0,
            x1,
            top,
            bottom,
            page,
            size: SYNTHETIC_FONT_SIZE,
            font: FontMetrics::Native {
                name: String::new(),
            },
        }
    }

    /// Set the font size.
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Mark the word as natively extracted with the given font.
    pub fn with_font(mut self, name: impl Into<String>) -> Self {
        self.font = FontMetrics::Native { name: name.into() };
        self
    }

    /// Mark the word as OCR-derived.
    pub fn ocr(mut self) -> Self {
        self.font = FontMetrics::Ocr;
        self
    }

    /// Whether `size` is a real font metric.
    pub fn has_font_metrics(&self) -> bool {
        matches!(self.font, FontMetrics::Native { .. })
    }

    /// Font name, if the word was natively extracted.
    pub fn font_name(&self) -> Option<&str> {
        match &self.font {
            FontMetrics::Native { name } => Some(name),
            FontMetrics::Ocr => None,
        }
    }

    /// Height of the bounding box.
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Check the record against the word source contract.
    ///
    /// `index` is only used for error reporting.
    pub fn validate(&self, index: usize) -> Result<()> {
        let invalid = |reason: &str| Error::InvalidWord {
            index,
            reason: reason.to_string(),
        };

        if self.page == 0 {
            return Err(invalid("page must be 1-based"));
        }
        let coords = [self.x0, self.x1, self.top, self.bottom, self.size];
        if coords.iter().any(|v| !v.is_finite()) {
            return Err(invalid("non-finite coordinate or size"));
        }
        if self.x1 < self.x0 {
            return Err(invalid("x1 is left of x0"));
        }
        if self.bottom < self.top {
            return Err(invalid("bottom is above top"));
        }
        Ok(())
    }
}

/// Wire shape of a word as emitted by extractors such as pdfplumber or OCR dumps.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WordRecord {
    text: String,
    x0: f32,
    x1: f32,
    top: f32,
    bottom: f32,
    #[serde(default = "default_size")]
    size: f32,
    #[serde(default)]
    fontname: String,
    page: u32,
}

fn default_size() -> f32 {
    SYNTHETIC_FONT_SIZE
}

impl From<WordRecord> for Word {
    fn from(record: WordRecord) -> Self {
        let font = if record.fontname == OCR_FONT_NAME {
            FontMetrics::Ocr
        } else {
            FontMetrics::Native {
                name: record.fontname,
            }
        };
        Self {
            text: record.text,
            x0: record.x0,
            x1: record.x1,
            top: record.top,
            bottom: record.bottom,
            page: record.page,
            size: record.size,
            font,
        }
    }
}

impl From<Word> for WordRecord {
    fn from(word: Word) -> Self {
        let fontname = match word.font {
            FontMetrics::Native { name } => name,
            FontMetrics::Ocr => OCR_FONT_NAME.to_string(),
        };
        Self {
            text: word.text,
            x0: word.x0,
            x1: word.x1,
            top: word.top,
            bottom: word.bottom,
            size: word.size,
            fontname,
            page: word.page,
        }
    }
}
