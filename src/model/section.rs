//! Heading-delimited sections.

use serde::{Deserialize, Serialize};

/// Title given to content that precedes the first heading.
pub const DEFAULT_SECTION_TITLE: &str = "Introduction";

/// A titled run of body paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section title (rendered heading text)
    pub title: String,
    /// Body paragraph texts in document order
    pub paragraphs: Vec<String>,
}

impl Section {
    /// Create an empty section with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            paragraphs: Vec::new(),
        }
    }

    /// The section that collects content before any heading.
    pub fn introduction() -> Self {
        Self::new(DEFAULT_SECTION_TITLE)
    }

    /// Body paragraphs joined with single spaces.
    pub fn body_text(&self) -> String {
        self.paragraphs.join(" ")
    }

    /// Check if the section has no body paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}

impl Default for Section {
    fn default() -> Self {
        Self::introduction()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_section() {
        let section = Section::default();
        assert_eq!(section.title, "Introduction");
        assert!(section.is_empty());
        assert_eq!(section.body_text(), "");
    }

    #[test]
    fn test_body_text() {
        let mut section = Section::new("Hashing");
        section.paragraphs.push("One way.".to_string());
        section.paragraphs.push("Deterministic.".to_string());
        assert_eq!(section.body_text(), "One way. Deterministic.");
    }
}
