//! Grouping words into lines.

use std::collections::BTreeMap;

use log::debug;

use crate::model::{Line, Word};

/// Accumulator that buckets words by `(page, rounded top)`.
///
/// The map key order is the authoritative page/line order for every later stage.
#[derive(Debug)]
pub struct LineBuckets {
    y_threshold: f32,
    buckets: BTreeMap<(u32, i64), Vec<Word>>,
}

impl LineBuckets {
    /// Create an empty accumulator.
    pub fn new(y_threshold: f32) -> Self {
        Self {
            y_threshold,
            buckets: BTreeMap::new(),
        }
    }

    /// Bucket index of a `top` coordinate.
    ///
    /// Ties round to even so `top` values exactly between two buckets resolve
    /// the same way on every run.
    pub fn bucket_of(&self, top: f32) -> i64 {
        (top / self.y_threshold).round_ties_even() as i64
    }

    /// Add one word.
    pub fn step(mut self, word: Word) -> Self {
        let key = (word.page, self.bucket_of(word.top));
        self.buckets.entry(key).or_default().push(word);
        self
    }

    /// Number of distinct lines so far.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Check if no word has been added.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Emit the lines sorted by page, then bucket.
    pub fn finish(self) -> Vec<Line> {
        let y = self.y_threshold;
        self.buckets
            .into_iter()
            .map(|((page, bucket), words)| Line::new(page, bucket, bucket as f32 * y, words))
            .collect()
    }
}

/// Clusters words into lines using a vertical tolerance bucket.
#[derive(Debug, Clone, Copy)]
pub struct LineGrouper {
    y_threshold: f32,
}

impl LineGrouper {
    /// Create a grouper with the given tolerance.
    pub fn new(y_threshold: f32) -> Self {
        Self { y_threshold }
    }

    /// Group words (in any order, across any pages) into ordered lines.
    pub fn group(&self, words: impl IntoIterator<Item = Word>) -> Vec<Line> {
        let buckets = words
            .into_iter()
            .fold(LineBuckets::new(self.y_threshold), LineBuckets::step);
        debug!("Grouped words into {} lines", buckets.len());
        buckets.finish()
    }
}
