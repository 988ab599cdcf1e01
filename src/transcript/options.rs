//! Transcript cleaning options.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Filler phrases common in Hinglish lecture speech.
pub const DEFAULT_FILLERS: &[&str] = &[
    "okay",
    "achha",
    "bolo",
    "samjhe",
    "yes or no",
    "theek hai",
    "right",
    "fine",
    "guys",
    "देखो",
    "समझो",
];

/// Options for the transcript cleaning cascade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanOptions {
    /// Filler phrases removed when repeated back-to-back
    pub fillers: Vec<String>,

    /// Maximum run of identical consecutive tokens kept
    pub max_repeat: usize,

    /// Window size for repeated n-gram removal (0 disables)
    pub ngram_size: usize,

    /// Minimum unique-token ratio for a chunk to be kept
    pub entropy_threshold: f64,

    /// Run length at which repeated numerals collapse to one
    pub numeric_spam_min_run: usize,
}

impl CleanOptions {
    /// Create new clean options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the filler list.
    pub fn with_fillers<I, S>(mut self, fillers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fillers = fillers.into_iter().map(Into::into).collect();
        self
    }

    /// Set the maximum immediate repeat count.
    pub fn with_max_repeat(mut self, max_repeat: usize) -> Self {
        self.max_repeat = max_repeat;
        self
    }

    /// Set the n-gram window size.
    pub fn with_ngram_size(mut self, n: usize) -> Self {
        self.ngram_size = n;
        self
    }

    /// Set the entropy threshold.
    pub fn with_entropy_threshold(mut self, threshold: f64) -> Self {
        self.entropy_threshold = threshold;
        self
    }

    /// Set the numeric spam run length.
    pub fn with_numeric_spam_min_run(mut self, run: usize) -> Self {
        self.numeric_spam_min_run = run;
        self
    }

    /// Reject values the cascade cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.max_repeat == 0 {
            return Err(Error::Config("max_repeat must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.entropy_threshold) {
            return Err(Error::Config(format!(
                "entropy_threshold must be within 0..=1, got {}",
                self.entropy_threshold
            )));
        }
        if self.numeric_spam_min_run < 2 {
            return Err(Error::Config(
                "numeric_spam_min_run must be at least 2".into(),
            ));
        }
        if self.fillers.iter().any(|f| f.trim().is_empty()) {
            return Err(Error::Config("filler phrases must not be blank".into()));
        }
        Ok(())
    }
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            fillers: DEFAULT_FILLERS.iter().map(|f| f.to_string()).collect(),
            max_repeat: 2,
            ngram_size: 3,
            entropy_threshold: 0.4,
            numeric_spam_min_run: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_options_builder() {
        let options = CleanOptions::new()
            .with_fillers(["um", "uh"])
            .with_max_repeat(3)
            .with_ngram_size(4)
            .with_entropy_threshold(0.5);

        assert_eq!(options.fillers, vec!["um", "uh"]);
        assert_eq!(options.max_repeat, 3);
        assert_eq!(options.ngram_size, 4);
        assert_eq!(options.entropy_threshold, 0.5);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_default_options() {
        let options = CleanOptions::default();
        assert_eq!(options.max_repeat, 2);
        assert_eq!(options.ngram_size, 3);
        assert_eq!(options.entropy_threshold, 0.4);
        assert_eq!(options.numeric_spam_min_run, 3);
        assert!(options.fillers.iter().any(|f| f == "theek hai"));
    }

    #[test]
    fn test_validate() {
        assert!(CleanOptions::new().with_max_repeat(0).validate().is_err());
        assert!(CleanOptions::new()
            .with_entropy_threshold(1.5)
            .validate()
            .is_err());
        assert!(CleanOptions::new().with_fillers([" "]).validate().is_err());
    }
}
