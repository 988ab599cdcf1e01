//! Rendering module for converting pipeline output to Markdown and JSON.

mod json;
mod markdown;

pub use json::{to_json, JsonFormat};
pub use markdown::{sections_to_markdown, to_markdown};
