//! Layout reconstruction options and configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::SYNTHETIC_FONT_SIZE;

/// Options for rebuilding lines, paragraphs and sections from words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Line bucketing tolerance on the `top` coordinate
    pub y_line_threshold: f32,

    /// Vertical gap above which a new paragraph starts
    pub para_gap_threshold: f32,

    /// Margin above body size required for a heading
    pub heading_size_delta: f32,

    /// Body size used when no word carries font metrics
    pub default_body_size: f32,

    /// Rasterization resolution requested from OCR engines
    pub ocr_dpi: u32,

    /// Pages with fewer native characters than this are treated as scanned
    pub scanned_page_min_chars: usize,
}

impl LayoutOptions {
    /// Create new layout options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line bucketing tolerance.
    pub fn with_y_line_threshold(mut self, threshold: f32) -> Self {
        self.y_line_threshold = threshold;
        self
    }

    /// Set the paragraph gap threshold.
    pub fn with_para_gap_threshold(mut self, threshold: f32) -> Self {
        self.para_gap_threshold = threshold;
        self
    }

    /// Set the heading size delta.
    pub fn with_heading_size_delta(mut self, delta: f32) -> Self {
        self.heading_size_delta = delta;
        self
    }

    /// Set the fallback body size for OCR-only documents.
    pub fn with_default_body_size(mut self, size: f32) -> Self {
        self.default_body_size = size;
        self
    }

    /// Set the OCR resolution.
    pub fn with_ocr_dpi(mut self, dpi: u32) -> Self {
        self.ocr_dpi = dpi;
        self
    }

    /// Set the scanned-page character threshold.
    pub fn with_scanned_page_min_chars(mut self, chars: usize) -> Self {
        self.scanned_page_min_chars = chars;
        self
    }

    /// Reject values the grouping stages cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !(self.y_line_threshold.is_finite() && self.y_line_threshold > 0.0) {
            return Err(Error::Config(format!(
                "y_line_threshold must be positive, got {}",
                self.y_line_threshold
            )));
        }
        if !self.para_gap_threshold.is_finite() {
            return Err(Error::Config("para_gap_threshold must be finite".into()));
        }
        if !self.heading_size_delta.is_finite() {
            return Err(Error::Config("heading_size_delta must be finite".into()));
        }
        if !(self.default_body_size.is_finite() && self.default_body_size > 0.0) {
            return Err(Error::Config(format!(
                "default_body_size must be positive, got {}",
                self.default_body_size
            )));
        }
        if self.ocr_dpi == 0 {
            return Err(Error::Config("ocr_dpi must be non-zero".into()));
        }
        Ok(())
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            y_line_threshold: 3.0,
            para_gap_threshold: 10.0,
            heading_size_delta: 1.0,
            default_body_size: SYNTHETIC_FONT_SIZE,
            ocr_dpi: 300,
            scanned_page_min_chars: 20,
        }
    }
}
