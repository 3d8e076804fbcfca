//! Offset recovery for word sequences produced without position information.
//!
//! Words are located left to right with a monotonic search cursor, so repeated
//! surfaces bind to successive occurrences. A word that cannot be found
//! verbatim (the tokenizer may normalize case or character width) is pinned to
//! the cursor instead of failing, which keeps offsets non-decreasing.

use serde::{Deserialize, Serialize};

/// A word with its recovered position in the original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface exactly as returned by the tokenizer.
    pub text: String,
    /// Offset of the first character, measured in the aligner's [`OffsetUnit`].
    pub start_offset: usize,
    /// `false` only when the next token starts right where this one ends.
    pub whitespace_after: bool,
}

impl Token {
    pub fn new(text: impl Into<String>, start_offset: usize) -> Self {
        Self {
            text: text.into(),
            start_offset,
            whitespace_after: true,
        }
    }
}

/// How offsets are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OffsetUnit {
    /// Unicode scalar values.
    #[default]
    Char,
    /// UTF-16 code units, as used by JavaScript and Java string indices.
    Utf16,
    /// UTF-8 bytes.
    Byte,
}

impl OffsetUnit {
    /// Length of `s` in this unit.
    pub fn measure(self, s: &str) -> usize {
        match self {
            OffsetUnit::Char => s.chars().count(),
            OffsetUnit::Utf16 => s.encode_utf16().count(),
            OffsetUnit::Byte => s.len(),
        }
    }
}

/// Search position kept both as a byte index (for slicing) and in the output unit.
#[derive(Debug, Default)]
struct Cursor {
    byte: usize,
    offset: usize,
}

impl Cursor {
    /// Moves forward to `byte`, which must be a char boundary at or after the cursor.
    fn seek(&mut self, text: &str, unit: OffsetUnit, byte: usize) {
        debug_assert!(byte >= self.byte);
        self.offset += unit.measure(&text[self.byte..byte]);
        self.byte = byte;
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Aligner {
    unit: OffsetUnit,
}

impl Aligner {
    pub fn new(unit: OffsetUnit) -> Self {
        Self { unit }
    }

    pub fn unit(&self) -> OffsetUnit {
        self.unit
    }

    /// Assigns offsets and adjacency to `words`, which must appear in text order.
    ///
    /// Never fails: the output always has one token per word and its offsets
    /// never decrease.
    pub fn align<S: AsRef<str>>(&self, text: &str, words: &[S]) -> Vec<Token> {
        let total = self.unit.measure(text);
        let mut cursor = Cursor::default();
        let mut previous_end: Option<usize> = None;
        let mut tokens: Vec<Token> = Vec::with_capacity(words.len());

        for word in words {
            let word = word.as_ref();

            let (start, end) = match text[cursor.byte..].find(word) {
                Some(relative) => {
                    let start_byte = cursor.byte + relative;
                    cursor.seek(text, self.unit, start_byte);
                    let start = cursor.offset;
                    cursor.seek(text, self.unit, start_byte + word.len());
                    (start, cursor.offset)
                }
                None => {
                    // Pin to the next non-whitespace position but do not consume
                    // the word: the following word may well start right here.
                    let searched_from = cursor.offset;
                    let next_byte = text[cursor.byte..]
                        .char_indices()
                        .find(|(_, c)| !c.is_whitespace())
                        .map_or(text.len(), |(i, _)| cursor.byte + i);
                    cursor.seek(text, self.unit, next_byte);
                    let start = cursor.offset;
                    let end = (start + self.unit.measure(word)).min(total);
                    log::debug!(
                        "word {:?} not found after offset {}, estimated at {}",
                        word,
                        searched_from,
                        start
                    );
                    (start, end)
                }
            };

            if previous_end == Some(start) {
                if let Some(previous) = tokens.last_mut() {
                    previous.whitespace_after = false;
                }
            }

            tokens.push(Token::new(word, start));
            previous_end = Some(end);
        }

        tokens
    }
}

/// Aligns `words` against `text` with character offsets.
pub fn align<S: AsRef<str>>(text: &str, words: &[S]) -> Vec<Token> {
    Aligner::default().align(text, words)
}
