//! Integration tests for document reconstruction.

use std::collections::HashMap;

use unlecture::layout::{
    BodySizeEstimator, HeadingClassifier, LineGrouper, ParagraphGrouper, SectionBuilder,
};
use unlecture::{reconstruct_words, LayoutOptions, Paragraph, Reconstructor, Section, Word};

/// Small deterministic generator for scattered word layouts.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn range(&mut self, max: u64) -> f32 {
        (self.next() % max) as f32
    }
}

fn word(text: &str, page: u32, x0: f32, top: f32, size: f32) -> Word {
    Word::new(text, page, x0, x0 + 20.0, top, top + size)
        .with_size(size)
        .with_font("Helvetica")
}

fn scattered_words(seed: u64, count: usize) -> Vec<Word> {
    let mut rng = Lcg(seed);
    (0..count)
        .map(|i| {
            let page = 1 + rng.range(3) as u32;
            let x0 = rng.range(500);
            let top = rng.range(700) + rng.range(10) / 10.0;
            word(&format!("w{}", i), page, x0, top, 10.0)
        })
        .collect()
}

#[test]
fn test_line_grouping_is_a_permutation() {
    for seed in 1..20 {
        let words = scattered_words(seed, 200);
        let lines = LineGrouper::new(3.0).group(words.clone());

        assert!(lines.len() <= words.len());

        let mut expected: Vec<&str> = words.iter().map(|w| w.text.as_str()).collect();
        let mut actual: Vec<&str> = lines
            .iter()
            .flat_map(|l| l.words.iter().map(|w| w.text.as_str()))
            .collect();
        expected.sort_unstable();
        actual.sort_unstable();
        assert_eq!(expected, actual);
    }
}

#[test]
fn test_lines_sorted_by_page_then_key_and_x0() {
    let lines = LineGrouper::new(3.0).group(scattered_words(7, 300));

    for pair in lines.windows(2) {
        assert!((pair[0].page, pair[0].bucket) < (pair[1].page, pair[1].bucket));
    }
    for line in &lines {
        for pair in line.words.windows(2) {
            assert!(pair[0].x0 <= pair[1].x0);
        }
        let bucket = (line.words[0].top / 3.0).round_ties_even() as i64;
        assert!(line.words.iter().all(|w| w.page == line.page));
        assert_eq!(bucket, line.bucket);
    }
}

#[test]
fn test_paragraphs_never_cross_pages_or_gaps() {
    for seed in 1..20 {
        let lines = LineGrouper::new(3.0).group(scattered_words(seed, 150));
        let paragraphs = ParagraphGrouper::new(10.0).group(lines);

        for paragraph in &paragraphs {
            let page = paragraph.lines[0].page;
            assert!(paragraph.lines.iter().all(|l| l.page == page));
            for pair in paragraph.lines.windows(2) {
                assert!(pair[1].top() - pair[0].bottom() <= 10.0);
            }
        }
    }
}

#[test]
fn test_section_builder_never_empty() {
    let classifier = HeadingClassifier::new(1.0);
    let sections = SectionBuilder::new(classifier).build(Vec::<Paragraph>::new(), 10.0);
    assert_eq!(sections, vec![Section::introduction()]);
    assert!(sections[0].paragraphs.is_empty());
}

#[test]
fn test_exactly_one_heading_flagged() {
    let mut words = Vec::new();
    let mut top = 0.0;
    for (i, size) in [10.0, 10.0, 11.2, 10.0, 10.0].into_iter().enumerate() {
        words.push(word(&format!("para{}", i), 1, 10.0, top, size));
        words.push(word("tail", 1, 40.0, top, size));
        top += 40.0;
    }

    let body = BodySizeEstimator::new(10.0).estimate(&words);
    assert_eq!(body, 10.0);

    let lines = LineGrouper::new(3.0).group(words);
    let paragraphs = ParagraphGrouper::new(10.0).group(lines);
    assert_eq!(paragraphs.len(), 5);

    let classifier = HeadingClassifier::new(1.0);
    let flagged: Vec<usize> = paragraphs
        .iter()
        .enumerate()
        .filter(|(_, p)| classifier.is_heading(p, body))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(flagged, vec![2]);
}

#[test]
fn test_two_page_lecture() {
    let words = vec![
        word("Binary", 1, 10.0, 9.5, 18.0),
        word("Heaps", 1, 80.0, 10.0, 18.0),
        word("A", 1, 10.0, 50.0, 10.0),
        word("heap", 1, 30.0, 50.0, 10.0),
        word("is", 1, 60.0, 51.0, 10.0),
        word("complete.", 1, 80.0, 50.0, 10.0),
        word("Insert", 2, 10.0, 10.0, 18.0),
        word("Push", 2, 10.0, 50.0, 10.0),
        word("then", 2, 50.0, 50.0, 10.0),
        word("sift", 2, 90.0, 50.0, 10.0),
        word("up.", 2, 130.0, 50.0, 10.0),
    ];

    let sections = reconstruct_words(words);
    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Introduction", "Binary Heaps", "Insert"]);
    assert_eq!(sections[1].paragraphs, vec!["A heap is complete."]);
    assert_eq!(sections[2].paragraphs, vec!["Push then sift up."]);
}

#[test]
fn test_all_ocr_document_uses_default_body_size() {
    let words: Vec<Word> = (0..5)
        .map(|i| {
            let top = i as f32 * 30.0;
            Word::new(format!("word{}", i), 1, 0.0, 10.0, top, top + 10.0).ocr()
        })
        .collect();
    assert_eq!(BodySizeEstimator::new(10.0).estimate(&words), 10.0);

    let sections = reconstruct_words(words);
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].paragraphs.len(), 5);
}

#[test]
fn test_input_order_does_not_matter() {
    let words = scattered_words(42, 120);
    let mut reversed = words.clone();
    reversed.reverse();

    let reconstructor = Reconstructor::new(LayoutOptions::default()).unwrap();
    let forward = reconstructor.reconstruct(words);
    let backward = reconstructor.reconstruct(reversed);

    // Words sharing a line and an x0 may swap; compare paragraph lengths instead of texts
    let count = |sections: &[Section]| {
        let mut counts: HashMap<usize, usize> = HashMap::new();
        for section in sections {
            for paragraph in &section.paragraphs {
                *counts.entry(paragraph.split_whitespace().count()).or_default() += 1;
            }
        }
        counts
    };
    assert_eq!(forward.len(), backward.len());
    assert_eq!(count(&forward), count(&backward));
}
