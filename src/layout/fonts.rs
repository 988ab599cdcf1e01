//! Body font size estimation and heading classification.

use crate::model::{Paragraph, Word};

/// Estimates the "normal text" font size of a document.
#[derive(Debug, Clone, Copy)]
pub struct BodySizeEstimator {
    default_body_size: f32,
}

impl BodySizeEstimator {
    /// Create an estimator falling back to `default_body_size` for OCR-only input.
    pub fn new(default_body_size: f32) -> Self {
        Self { default_body_size }
    }

    /// Median font size over words that carry real font metrics.
    pub fn estimate(&self, words: &[Word]) -> f32 {
        let mut sizes: Vec<f32> = words
            .iter()
            .filter(|w| w.has_font_metrics())
            .map(|w| w.size)
            .collect();
        median(&mut sizes).unwrap_or(self.default_body_size)
    }
}

/// Statistical median; the mean of the two middle values for even counts.
fn median(values: &mut [f32]) -> Option<f32> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.total_cmp(b));
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

/// Flags paragraphs whose mean font size exceeds body size by a fixed margin.
#[derive(Debug, Clone, Copy)]
pub struct HeadingClassifier {
    delta: f32,
}

impl HeadingClassifier {
    /// Create a classifier with the given heading delta.
    pub fn new(delta: f32) -> Self {
        Self { delta }
    }

    /// Check if the paragraph reads as a heading.
    pub fn is_heading(&self, paragraph: &Paragraph, body_size: f32) -> bool {
        paragraph
            .mean_font_size()
            .is_some_and(|mean| mean > body_size + self.delta)
    }
}
