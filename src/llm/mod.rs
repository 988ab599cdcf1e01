//! Text generation boundary.
//!
//! Summarization, transcript normalization and note generation all talk to a
//! language model through [`TextGenerator`]. Transport failures surface as
//! [`Error::Transport`](crate::Error::Transport); no retry happens here.

#[cfg(feature = "openrouter")]
mod openrouter;
pub mod prompts;

#[cfg(feature = "openrouter")]
pub use openrouter::{OpenRouterClient, OpenRouterConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};

use crate::error::Result;

/// A `(text, system_prompt) -> text` generation backend.
pub trait TextGenerator {
    /// Generate a response to `text` under `system_prompt`.
    fn generate(&self, text: &str, system_prompt: &str) -> Result<String>;
}

impl<T: TextGenerator + ?Sized> TextGenerator for &T {
    fn generate(&self, text: &str, system_prompt: &str) -> Result<String> {
        (**self).generate(text, system_prompt)
    }
}

impl<T: TextGenerator + ?Sized> TextGenerator for Box<T> {
    fn generate(&self, text: &str, system_prompt: &str) -> Result<String> {
        (**self).generate(text, system_prompt)
    }
}
