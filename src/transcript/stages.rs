//! Individual cleaning stages.
//!
//! Each stage is a pure `&str -> String` transformation. Stages may drop
//! content but never reorder the tokens that survive.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::error::Result;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    static ref DISALLOWED_CHARS: Regex = Regex::new(r"[^\w\s.,=+\-*/^()]").unwrap();
}

/// Math and punctuation symbols allowed inside tokens by the script filter.
const MATH_SYMBOLS: &str = "+-*/=^()[]{}<>,.:";

/// One step of the cleaning cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Lowercase, collapse whitespace, strip disallowed punctuation
    Normalize,
    /// Drop tokens containing characters outside the allowed scripts
    ScriptFilter,
    /// Remove back-to-back repeated filler phrases
    FillerRemoval,
    /// Cap runs of identical consecutive tokens
    TokenRepetition,
    /// Drop repeated n-gram blocks
    NgramRepetition,
    /// Collapse runs of a repeated numeral
    NumericSpam,
}

impl Stage {
    /// The cascade order used unless configured otherwise.
    pub const DEFAULT_ORDER: [Stage; 6] = [
        Stage::Normalize,
        Stage::ScriptFilter,
        Stage::FillerRemoval,
        Stage::TokenRepetition,
        Stage::NgramRepetition,
        Stage::NumericSpam,
    ];

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Normalize => "normalize",
            Stage::ScriptFilter => "script_filter",
            Stage::FillerRemoval => "filler_removal",
            Stage::TokenRepetition => "token_repetition",
            Stage::NgramRepetition => "ngram_repetition",
            Stage::NumericSpam => "numeric_spam",
        }
    }
}

/// Lowercase, collapse whitespace runs to one space, and strip characters
/// other than word characters, whitespace and `. , = + - * / ^ ( )`.
///
/// Text is first composed to Unicode NFC so that precomposed and decomposed
/// spellings clean identically. Composition exclusions such as U+0958 come
/// out decomposed (U+0915 U+093C).
pub fn normalize(text: &str) -> String {
    let text = text.nfc().collect::<String>().to_lowercase();
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    DISALLOWED_CHARS.replace_all(&text, "").trim().to_string()
}

/// Check if a character belongs to the allowed set: Devanagari, Latin letters,
/// ASCII digits and a fixed set of math/punctuation symbols.
pub fn is_allowed_char(c: char) -> bool {
    matches!(c, '\u{0900}'..='\u{097F}' | 'a'..='z' | 'A'..='Z' | '0'..='9')
        || MATH_SYMBOLS.contains(c)
}

/// Keep only tokens made entirely of allowed characters.
pub fn filter_script(text: &str) -> String {
    text.split_whitespace()
        .filter(|token| token.chars().all(is_allowed_char))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Removes filler phrases that occur two or more times back-to-back.
///
/// A single standalone occurrence is left untouched.
#[derive(Debug, Clone)]
pub struct FillerRemover {
    patterns: Vec<Regex>,
}

impl FillerRemover {
    /// Compile one repeated-group pattern per filler phrase.
    pub fn new<S: AsRef<str>>(fillers: &[S]) -> Result<Self> {
        let patterns = fillers
            .iter()
            .map(|f| {
                let phrase = regex::escape(f.as_ref().trim());
                Regex::new(&format!(r"(?:\b{}\b\s*){{2,}}", phrase))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Apply every filler pattern in list order.
    pub fn remove(&self, text: &str) -> String {
        self.patterns
            .iter()
            .fold(text.to_string(), |acc, re| re.replace_all(&acc, "").into_owned())
            .trim()
            .to_string()
    }
}

/// Keep at most `max_repeat` identical consecutive tokens.
pub fn collapse_token_repetition(text: &str, max_repeat: usize) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut prev: Option<&str> = None;
    let mut count = 0usize;

    for token in text.split_whitespace() {
        if prev == Some(token) {
            count += 1;
        } else {
            prev = Some(token);
            count = 1;
        }
        if count <= max_repeat {
            kept.push(token);
        }
    }

    kept.join(" ")
}

/// Drop n-gram blocks that were already seen earlier in the text.
///
/// Scanning left to right: if the `n` tokens starting at the current position
/// form an n-gram seen before, all `n` tokens are skipped; otherwise the
/// n-gram is recorded and one token is emitted.
pub fn collapse_ngram_repetition(text: &str, n: usize) -> String {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if n == 0 {
        return tokens.join(" ");
    }

    let mut seen: HashSet<&[&str]> = HashSet::new();
    let mut kept = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        if i + n <= tokens.len() {
            let gram = &tokens[i..i + n];
            if seen.contains(&gram) {
                i += n;
                continue;
            }
            seen.insert(gram);
        }
        kept.push(tokens[i]);
        i += 1;
    }

    kept.join(" ")
}

/// Check if a token is a numeral (ASCII or Devanagari digits).
pub fn is_numeral(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || ('\u{0966}'..='\u{096F}').contains(&c))
}

/// Collapse runs of at least `min_run` identical numeral tokens to one token.
pub fn remove_numeric_spam(text: &str, min_run: usize) -> String {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut kept = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        let token = tokens[i];
        let run = tokens[i..].iter().take_while(|t| **t == token).count();
        if run >= min_run && is_numeral(token) {
            kept.push(token);
        } else {
            kept.extend_from_slice(&tokens[i..i + run]);
        }
        i += run;
    }

    kept.join(" ")
}

/// Ratio of unique tokens to total tokens; `0.0` for empty text.
pub fn unique_token_ratio(text: &str) -> f64 {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.is_empty() {
        return 0.0;
    }
    let unique: HashSet<&str> = tokens.iter().copied().collect();
    unique.len() as f64 / tokens.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Hello,\n\tWORLD!! "), "hello, world");
        assert_eq!(normalize("x^2 + y = (3*4)/2"), "x^2 + y = (3*4)/2");
        assert_eq!(normalize("what? yes; no"), "what yes no");
    }

    #[test]
    fn test_normalize_composes_nfc() {
        assert_eq!(normalize("cafe\u{301}"), "caf\u{e9}");
        assert_eq!(normalize("\u{0958}"), "\u{0915}\u{093C}");
    }

    #[test]
    fn test_filter_script() {
        assert_eq!(filter_script("hello देखो x+1 🙂 naïve [a]"), "hello देखो x+1 [a]");
        assert_eq!(filter_script("snake_case ok"), "ok");
        assert_eq!(filter_script("привет world"), "world");
    }

    #[test]
    fn test_filler_single_occurrence_kept() {
        let remover = FillerRemover::new(&["okay"]).unwrap();
        assert_eq!(remover.remove("okay let us start"), "okay let us start");
    }

    #[test]
    fn test_filler_repeated_removed() {
        let remover = FillerRemover::new(&["okay", "theek hai"]).unwrap();
        assert_eq!(remover.remove("okay okay okay let us start"), "let us start");
        assert_eq!(
            remover.remove("so theek hai theek hai now"),
            "so now"
        );
    }

    #[test]
    fn test_filler_respects_word_boundaries() {
        let remover = FillerRemover::new(&["fine"]).unwrap();
        assert_eq!(remover.remove("finest fine tuning"), "finest fine tuning");
    }

    #[test]
    fn test_filler_devanagari() {
        let remover = FillerRemover::new(&["देखो"]).unwrap();
        assert_eq!(remover.remove("देखो देखो यह matrix"), "यह matrix");
    }

    #[test]
    fn test_token_repetition() {
        assert_eq!(collapse_token_repetition("go go go go", 2), "go go");
        assert_eq!(collapse_token_repetition("a a b b b a", 2), "a a b b a");
        assert_eq!(collapse_token_repetition("go go go", 1), "go");
    }

    #[test]
    fn test_ngram_repetition() {
        assert_eq!(
            collapse_ngram_repetition("so the key is so the key is fast", 3),
            "so the key is is fast"
        );
        assert_eq!(collapse_ngram_repetition("a b", 3), "a b");
        assert_eq!(collapse_ngram_repetition("a b a b", 0), "a b a b");
    }

    #[test]
    fn test_numeric_spam() {
        assert_eq!(remove_numeric_spam("5 5 5 5 5", 3), "5");
        assert_eq!(remove_numeric_spam("5 5", 3), "5 5");
        assert_eq!(remove_numeric_spam("count 1 1 1 then 2", 3), "count 1 then 2");
        assert_eq!(remove_numeric_spam("ha ha ha", 3), "ha ha ha");
    }

    #[test]
    fn test_is_numeral() {
        assert!(is_numeral("42"));
        assert!(is_numeral("४२"));
        assert!(!is_numeral("4a"));
        assert!(!is_numeral(""));
    }

    #[test]
    fn test_unique_token_ratio() {
        assert!((unique_token_ratio("a a a a a a") - 1.0 / 6.0).abs() < 1e-9);
        assert_eq!(unique_token_ratio("the quick brown fox jumps"), 1.0);
        assert_eq!(unique_token_ratio(""), 0.0);
    }
}
