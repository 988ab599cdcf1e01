//! Integration tests for transcript cleaning, normalization and notes.

use std::sync::Mutex;

use unlecture::error::{Error, Result};
use unlecture::transcript::{self, stages, Stage};
use unlecture::{
    classify_subject, clean_transcript, merge_chunks, CleanOptions, NoteGenerator, Subject,
    TextGenerator, TranscriptCleaner, TranscriptNormalizer,
};

/// Records every call and answers with a canned prefix.
struct MockGenerator {
    calls: Mutex<Vec<(String, String)>>,
}

impl MockGenerator {
    fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl TextGenerator for MockGenerator {
    fn generate(&self, text: &str, system_prompt: &str) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), system_prompt.to_string()));
        Ok(format!("normalized: {}", text))
    }
}

#[test]
fn test_noisy_chunk_cascade() {
    let raw = "Okay okay okay dekho, the BINARY search tree tree tree tree is a data structure 🙂 !!";
    let cleaned = clean_transcript(raw).unwrap();
    assert_eq!(
        cleaned.as_deref(),
        Some("dekho, the binary search tree tree is a data structure")
    );
}

#[test]
fn test_clean_sentence_round_trip() {
    let sentence = "the quick brown fox jumps over the lazy dog";
    assert_eq!(clean_transcript(sentence).unwrap().as_deref(), Some(sentence));
}

#[test]
fn test_documented_stage_examples() {
    assert_eq!(stages::collapse_token_repetition("go go go go", 2), "go go");
    assert_eq!(stages::remove_numeric_spam("5 5 5 5 5", 3), "5");
    assert_eq!(stages::remove_numeric_spam("5 5", 3), "5 5");

    let cleaner = TranscriptCleaner::new(CleanOptions::default()).unwrap();
    assert!(!cleaner.gate("a a a a a a").is_kept());
    assert_eq!(
        cleaner.gate("the quick brown fox jumps").text(),
        "the quick brown fox jumps"
    );
}

#[test]
fn test_stages_never_reorder_tokens() {
    let cleaner = TranscriptCleaner::new(CleanOptions::default()).unwrap();
    let input = "so so so the matrix matrix determinant is 4 4 4 and the matrix determinant is 4";

    let mut text = input.to_string();
    for stage in Stage::DEFAULT_ORDER {
        let out = cleaner.apply(stage, &text);
        // Every surviving token appears in the input in the same relative order
        let mut source = text.split_whitespace();
        for token in out.split_whitespace() {
            assert!(source.any(|t| t == token), "{} reordered {}", stage.name(), token);
        }
        text = out;
    }
}

#[test]
fn test_custom_fillers() {
    let options = CleanOptions::new().with_fillers(["basically"]);
    let cleaner = TranscriptCleaner::new(options).unwrap();
    assert_eq!(
        cleaner.clean_text("basically basically recursion needs a base case"),
        Some("recursion needs a base case".to_string())
    );
    // Default fillers are no longer active
    assert_eq!(
        cleaner.clean_text("okay okay recursion needs a base case"),
        Some("okay okay recursion needs a base case".to_string())
    );
}

#[test]
fn test_database_lecture_classification() {
    let text = "Now the primary key and foreign key constraints in SQL";
    assert_eq!(classify_subject(text), Subject::Dbms);
}

#[test]
fn test_normalizer_pipeline() {
    let generator = MockGenerator::new();
    let cleaner = TranscriptCleaner::new(CleanOptions::default()).unwrap();
    let normalizer = TranscriptNormalizer::new(cleaner, &generator);

    let transcript = "Theek hai theek hai the derivative of a polynomial is found term by term\n\n\
                      x x y x x z x x\n\n\
                      we fetch json from the rest api endpoint with axios";
    let chunks = transcript::split_chunks(transcript);
    assert_eq!(chunks.len(), 3);

    let mut processed = Vec::new();
    for (i, chunk) in chunks.iter().enumerate() {
        if let Some(normalized) = normalizer.normalize(chunk).unwrap() {
            processed.push((i as u32 + 1, normalized));
        }
    }

    assert_eq!(processed.len(), 2);
    assert_eq!(processed[0].1.subject, Subject::Maths);
    assert_eq!(processed[1].1.subject, Subject::WebDev);

    let calls = generator.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(
        calls[0].0,
        "the derivative of a polynomial is found term by term"
    );
    assert_eq!(calls[0].1, Subject::Maths.system_prompt());
    assert_eq!(calls[1].1, Subject::WebDev.system_prompt());

    let merged = merge_chunks(
        &processed
            .into_iter()
            .rev()
            .map(|(n, c)| (n, c.text))
            .collect::<Vec<_>>(),
    );
    assert!(merged.starts_with("normalized: the derivative"));
    assert!(merged.contains("\n\nnormalized: we fetch json"));
}

#[test]
fn test_note_generation_requires_both_sources() {
    let generator = MockGenerator::new();
    let notes = NoteGenerator::new(&generator);

    assert!(matches!(
        notes.generate("", "lecture"),
        Err(Error::InvalidInput(_))
    ));
    assert!(generator.calls().is_empty());

    let out = notes.generate("Slide: Joins", "inner join keeps matches").unwrap();
    assert!(out.starts_with("normalized: PDF CONTENT (AUTHORITATIVE SOURCE):"));
    assert_eq!(generator.calls().len(), 1);
}

#[test]
fn test_parallel_chunk_cleaning_matches_sequential() {
    let cleaner = TranscriptCleaner::new(CleanOptions::default()).unwrap();
    let chunks: Vec<String> = (0..64)
        .map(|i| format!("chunk {} covers topic {} in depth", i, i * 7))
        .collect();

    let parallel = cleaner.clean_chunks(&chunks);
    let sequential: Vec<_> = chunks.iter().map(|c| cleaner.clean(c)).collect();
    assert_eq!(parallel, sequential);
}
