//! Word dumps in JSON form.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::Word;

use super::{PageWords, WordSource};

/// Reads a JSON array of word records, as dumped by pdfplumber-style extractors.
///
/// Each record has the shape
/// `{"text", "x0", "x1", "top", "bottom", "size", "fontname", "page"}`;
/// a `fontname` of `"OCR"` marks a word without font metrics.
#[derive(Debug, Clone)]
pub struct JsonWordSource {
    words: Vec<Word>,
}

impl JsonWordSource {
    /// Load a word dump from a file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load a word dump from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let words: Vec<Word> = serde_json::from_reader(reader)?;
        Ok(Self { words })
    }

    /// Load a word dump from a string.
    pub fn from_json(json: &str) -> Result<Self> {
        let words: Vec<Word> = serde_json::from_str(json)?;
        Ok(Self { words })
    }

    /// Wrap words that are already in memory.
    pub fn from_words(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Number of words in the dump.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the dump has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for JsonWordSource {
    fn pages(&mut self) -> Result<Vec<PageWords>> {
        let mut pages: Vec<PageWords> = Vec::new();

        for word in std::mem::take(&mut self.words) {
            match pages.last_mut() {
                Some(last) if last.page == word.page => last.words.push(word),
                Some(last) if last.page > word.page => {
                    return Err(Error::PageOrder {
                        previous: last.page,
                        found: word.page,
                    });
                }
                _ => {
                    let page = word.page;
                    pages.push(PageWords::new(page, vec![word]));
                }
            }
        }

        Ok(pages)
    }
}
