//! Document model types for layout reconstruction.
//!
//! Words are produced by an extraction collaborator and never mutated.
//! Lines, paragraphs and sections are derived from them in one pass each.

mod line;
mod paragraph;
mod section;
mod word;

pub use line::Line;
pub use paragraph::Paragraph;
pub use section::{Section, DEFAULT_SECTION_TITLE};
pub use word::{FontMetrics, Word, OCR_FONT_NAME, SYNTHETIC_FONT_SIZE};
