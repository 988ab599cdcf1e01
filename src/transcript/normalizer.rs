//! Cleaning followed by subject-aware LLM normalization.

use log::{debug, info};

use super::cleaner::TranscriptCleaner;
use super::subject::{classify_subject, Subject};
use crate::error::Result;
use crate::llm::TextGenerator;

/// A normalized chunk together with the subject that chose its prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedChunk {
    /// Subject detected on the cleaned text
    pub subject: Subject,
    /// Text returned by the generator
    pub text: String,
}

/// Runs the cleaning cascade and hands surviving chunks to a language model.
#[derive(Debug, Clone)]
pub struct TranscriptNormalizer<G> {
    cleaner: TranscriptCleaner,
    generator: G,
}

impl<G: TextGenerator> TranscriptNormalizer<G> {
    /// Create a normalizer.
    pub fn new(cleaner: TranscriptCleaner, generator: G) -> Self {
        Self { cleaner, generator }
    }

    /// Get the cleaner.
    pub fn cleaner(&self) -> &TranscriptCleaner {
        &self.cleaner
    }

    /// Normalize one chunk.
    ///
    /// Returns `Ok(None)` when the entropy gate rejects the chunk; the
    /// generator is not called in that case. Generator failures propagate.
    pub fn normalize(&self, chunk: &str) -> Result<Option<NormalizedChunk>> {
        let Some(cleaned) = self.cleaner.clean_text(chunk) else {
            info!("Chunk dropped by entropy gate");
            return Ok(None);
        };

        let subject = classify_subject(&cleaned);
        debug!("Normalizing {} chars as {}", cleaned.len(), subject);
        let text = self.generator.generate(&cleaned, &subject.system_prompt())?;

        Ok(Some(NormalizedChunk { subject, text }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::llm::prompts;
    use crate::transcript::CleanOptions;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        prompts: RefCell<Vec<String>>,
    }

    impl TextGenerator for Recorder {
        fn generate(&self, text: &str, system_prompt: &str) -> Result<String> {
            self.prompts.borrow_mut().push(system_prompt.to_string());
            Ok(text.to_uppercase())
        }
    }

    struct Failing;

    impl TextGenerator for Failing {
        fn generate(&self, _text: &str, _system_prompt: &str) -> Result<String> {
            Err(Error::Transport("timeout".into()))
        }
    }

    fn cleaner() -> TranscriptCleaner {
        TranscriptCleaner::new(CleanOptions::default()).unwrap()
    }

    #[test]
    fn test_uses_subject_prompt() {
        let recorder = Recorder::default();
        let normalizer = TranscriptNormalizer::new(cleaner(), &recorder);
        let chunk = normalizer
            .normalize("we write sql with a primary key and a foreign key")
            .unwrap()
            .unwrap();

        assert_eq!(chunk.subject, Subject::Dbms);
        assert_eq!(chunk.text, "WE WRITE SQL WITH A PRIMARY KEY AND A FOREIGN KEY");
        let sent = recorder.prompts.borrow();
        assert!(sent[0].contains(prompts::DBMS_RULES));
    }

    #[test]
    fn test_rejected_chunk_skips_generator() {
        let recorder = Recorder::default();
        let normalizer = TranscriptNormalizer::new(cleaner(), &recorder);
        assert_eq!(normalizer.normalize("x x y x x z x x").unwrap(), None);
        assert!(recorder.prompts.borrow().is_empty());
    }

    #[test]
    fn test_transport_errors_propagate() {
        let normalizer = TranscriptNormalizer::new(cleaner(), Failing);
        assert!(matches!(
            normalizer.normalize("the derivative of an integral"),
            Err(Error::Transport(_))
        ));
    }
}
