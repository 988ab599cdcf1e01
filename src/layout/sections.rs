//! Folding paragraphs into heading-delimited sections.

use log::debug;

use super::HeadingClassifier;
use crate::model::{Paragraph, Section};

/// Fold state for section building.
#[derive(Debug)]
pub struct SectionState {
    classifier: HeadingClassifier,
    body_size: f32,
    sections: Vec<Section>,
    current: Section,
}

impl SectionState {
    /// Start with an empty "Introduction" section.
    pub fn new(classifier: HeadingClassifier, body_size: f32) -> Self {
        Self {
            classifier,
            body_size,
            sections: Vec::new(),
            current: Section::introduction(),
        }
    }

    /// Add one paragraph. Paragraphs rendering to nothing are skipped.
    pub fn step(mut self, paragraph: Paragraph) -> Self {
        let text = paragraph.text();
        if text.is_empty() {
            return self;
        }

        if self.classifier.is_heading(&paragraph, self.body_size) {
            let finished = std::mem::replace(&mut self.current, Section::new(text));
            self.sections.push(finished);
        } else {
            self.current.paragraphs.push(text);
        }
        self
    }

    /// Push the open section and return all sections; never empty.
    pub fn finish(mut self) -> Vec<Section> {
        self.sections.push(self.current);
        self.sections
    }
}

/// Builds ordered sections from ordered paragraphs.
#[derive(Debug, Clone, Copy)]
pub struct SectionBuilder {
    classifier: HeadingClassifier,
}

impl SectionBuilder {
    /// Create a builder using the given heading classifier.
    pub fn new(classifier: HeadingClassifier) -> Self {
        Self { classifier }
    }

    /// Fold paragraphs into sections.
    pub fn build(
        &self,
        paragraphs: impl IntoIterator<Item = Paragraph>,
        body_size: f32,
    ) -> Vec<Section> {
        let sections = paragraphs
            .into_iter()
            .fold(
                SectionState::new(self.classifier, body_size),
                SectionState::step,
            )
            .finish();
        debug!(
            "Built {} sections (body size {:.1})",
            sections.len(),
            body_size
        );
        sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Line, Word};

    fn para(text: &str, size: f32) -> Paragraph {
        let word = Word::new(text, 1, 0.0, 10.0, 0.0, 10.0).with_size(size);
        Paragraph::new(vec![Line::new(1, 0, 0.0, vec![word])])
    }

    fn builder() -> SectionBuilder {
        SectionBuilder::new(HeadingClassifier::new(1.0))
    }

    #[test]
    fn test_no_paragraphs_yields_introduction() {
        let sections = builder().build(Vec::new(), 10.0);
        assert_eq!(sections, vec![Section::introduction()]);
    }

    #[test]
    fn test_no_headings_collapse_into_introduction() {
        let sections = builder().build(vec![para("a", 10.0), para("b", 10.0)], 10.0);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Introduction");
        assert_eq!(sections[0].paragraphs, vec!["a", "b"]);
    }

    #[test]
    fn test_headings_open_sections() {
        let sections = builder().build(
            vec![
                para("intro", 10.0),
                para("Hashing", 14.0),
                para("body one", 10.0),
                para("Salting", 14.0),
                para("body two", 10.0),
            ],
            10.0,
        );
        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Introduction", "Hashing", "Salting"]);
        assert_eq!(sections[1].paragraphs, vec!["body one"]);
        assert_eq!(sections[2].paragraphs, vec!["body two"]);
    }

    #[test]
    fn test_leading_heading_leaves_empty_introduction() {
        let sections = builder().build(vec![para("Title", 16.0), para("text", 10.0)], 10.0);
        assert_eq!(sections.len(), 2);
        assert!(sections[0].is_empty());
        assert_eq!(sections[1].title, "Title");
    }

    #[test]
    fn test_blank_paragraph_is_skipped() {
        let sections = builder().build(vec![para(" ", 20.0), para("text", 10.0)], 10.0);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].paragraphs, vec!["text"]);
    }
}
