//! Text lines: words sharing a vertical position on one page.

use super::Word;

/// A line of words on one page, ordered left-to-right.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// 1-based page number
    pub page: u32,
    /// Vertical bucket index (`key / y_threshold`)
    pub bucket: i64,
    /// Bucketed top coordinate shared by all words of the line
    pub key: f32,
    /// The words in this line, sorted by `x0`
    pub words: Vec<Word>,
}

impl Line {
    /// Create a line, sorting the words into reading order.
    pub fn new(page: u32, bucket: i64, key: f32, mut words: Vec<Word>) -> Self {
        // Stable: words at the same x keep their extraction order
        words.sort_by(|a, b| a.x0.total_cmp(&b.x0));
        Self {
            page,
            bucket,
            key,
            words,
        }
    }

    /// Smallest `top` among the words.
    pub fn top(&self) -> f32 {
        self.words
            .iter()
            .map(|w| w.top)
            .fold(f32::INFINITY, f32::min)
    }

    /// Largest `bottom` among the words.
    pub fn bottom(&self) -> f32 {
        self.words
            .iter()
            .map(|w| w.bottom)
            .fold(f32::NEG_INFINITY, f32::max)
    }

    /// Words joined with single spaces.
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the line has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
