//! Paragraphs: runs of spatially contiguous lines.

use super::{Line, Word};

/// A paragraph of lines on a single page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    /// Lines in reading order
    pub lines: Vec<Line>,
}

impl Paragraph {
    /// Create a paragraph from lines.
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// Page of the first line, if any.
    pub fn page(&self) -> Option<u32> {
        self.lines.first().map(|l| l.page)
    }

    /// Iterate over every word of every line.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.lines.iter().flat_map(|l| l.words.iter())
    }

    /// Get the rendered text: words and lines joined by single spaces, trimmed.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }

    /// Arithmetic mean of the word font sizes.
    pub fn mean_font_size(&self) -> Option<f32> {
        let (sum, count) = self
            .words()
            .fold((0.0f32, 0usize), |(sum, count), w| (sum + w.size, count + 1));
        if count == 0 {
            None
        } else {
            Some(sum / count as f32)
        }
    }

    /// Check if the paragraph renders to nothing.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() || self.text().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(page: u32, top: f32, words: &[(&str, f32)]) -> Line {
        let words = words
            .iter()
            .enumerate()
            .map(|(i, (text, size))| {
                let x0 = i as f32 * 50.0;
                Word::new(*text, page, x0, x0 + 40.0, top, top + 10.0).with_size(*size)
            })
            .collect();
        Line::new(page, 0, top, words)
    }

    #[test]
    fn test_paragraph_text() {
        let para = Paragraph::new(vec![
            line(1, 0.0, &[("First", 10.0), ("line", 10.0)]),
            line(1, 12.0, &[("second", 10.0)]),
        ]);
        assert_eq!(para.text(), "First line second");
        assert_eq!(para.page(), Some(1));
    }

    #[test]
    fn test_mean_font_size() {
        let para = Paragraph::new(vec![line(1, 0.0, &[("a", 10.0), ("b", 14.0)])]);
        assert_eq!(para.mean_font_size(), Some(12.0));
        assert_eq!(Paragraph::default().mean_font_size(), None);
    }

    #[test]
    fn test_whitespace_paragraph_is_empty() {
        let para = Paragraph::new(vec![line(1, 0.0, &[("  ", 10.0)])]);
        assert!(para.is_empty());
    }
}
