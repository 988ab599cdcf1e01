//! Grouping lines into paragraphs.

use log::debug;

use crate::model::{Line, Paragraph};

/// Fold state for paragraph grouping.
#[derive(Debug)]
pub struct ParagraphState {
    gap_threshold: f32,
    paragraphs: Vec<Paragraph>,
    current: Vec<Line>,
    /// Page and bottom of the previous line
    prev: Option<(u32, f32)>,
}

impl ParagraphState {
    /// Create an empty state.
    pub fn new(gap_threshold: f32) -> Self {
        Self {
            gap_threshold,
            paragraphs: Vec::new(),
            current: Vec::new(),
            prev: None,
        }
    }

    /// Whether `line` starts a new paragraph given the previous line.
    fn breaks_before(&self, line: &Line) -> bool {
        match self.prev {
            None => false,
            Some((page, _)) if page != line.page => true,
            Some((_, bottom)) => line.top() - bottom > self.gap_threshold,
        }
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.paragraphs
                .push(Paragraph::new(std::mem::take(&mut self.current)));
        }
    }

    /// Add one line.
    pub fn step(mut self, line: Line) -> Self {
        if line.is_empty() {
            return self;
        }

        if self.breaks_before(&line) {
            self.flush();
        }

        self.prev = Some((line.page, line.bottom()));
        self.current.push(line);
        self
    }

    /// Flush the trailing paragraph and return all paragraphs in input order.
    pub fn finish(mut self) -> Vec<Paragraph> {
        self.flush();
        self.paragraphs
    }
}

/// Clusters lines into paragraphs by page boundary and vertical gap.
#[derive(Debug, Clone, Copy)]
pub struct ParagraphGrouper {
    gap_threshold: f32,
}

impl ParagraphGrouper {
    /// Create a grouper with the given gap threshold.
    pub fn new(gap_threshold: f32) -> Self {
        Self { gap_threshold }
    }

    /// Group ordered lines into paragraphs.
    pub fn group(&self, lines: impl IntoIterator<Item = Line>) -> Vec<Paragraph> {
        let paragraphs = lines
            .into_iter()
            .fold(ParagraphState::new(self.gap_threshold), ParagraphState::step)
            .finish();
        debug!("Grouped lines into {} paragraphs", paragraphs.len());
        paragraphs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Word;

    fn line(page: u32, top: f32, text: &str) -> Line {
        let words = vec![Word::new(text, page, 0.0, 30.0, top, top + 10.0)];
        Line::new(page, 0, top, words)
    }

    #[test]
    fn test_close_lines_merge() {
        let paras = ParagraphGrouper::new(10.0).group(vec![
            line(1, 0.0, "one"),
            line(1, 12.0, "two"),
            line(1, 24.0, "three"),
        ]);
        assert_eq!(paras.len(), 1);
        assert_eq!(paras[0].text(), "one two three");
    }

    #[test]
    fn test_large_gap_splits() {
        // bottom of first line is 10.0, next top 25.0: gap 15 > 10
        let paras =
            ParagraphGrouper::new(10.0).group(vec![line(1, 0.0, "one"), line(1, 25.0, "two")]);
        assert_eq!(paras.len(), 2);
    }

    #[test]
    fn test_gap_equal_to_threshold_does_not_split() {
        let paras =
            ParagraphGrouper::new(10.0).group(vec![line(1, 0.0, "one"), line(1, 20.0, "two")]);
        assert_eq!(paras.len(), 1);
    }

    #[test]
    fn test_page_boundary_splits() {
        let paras =
            ParagraphGrouper::new(10.0).group(vec![line(1, 700.0, "end"), line(2, 0.0, "start")]);
        assert_eq!(paras.len(), 2);
        assert_eq!(paras[0].page(), Some(1));
        assert_eq!(paras[1].page(), Some(2));
    }

    #[test]
    fn test_no_lines_no_paragraphs() {
        assert!(ParagraphGrouper::new(10.0).group(Vec::new()).is_empty());
    }
}
