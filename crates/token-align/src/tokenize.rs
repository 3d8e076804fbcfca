use std::fmt;
use std::str::FromStr;

use unicode_segmentation::UnicodeSegmentation;
use vibrato::{Dictionary, Tokenizer};

use crate::error::{Error, Result};

/// A tokenizer that returns surfaces only, one sentence at a time.
pub trait WordTokenizer: Send + Sync {
    fn tokenize(&self, sentence: &str) -> Vec<String>;

    fn name(&self) -> &'static str;
}

/// The tokenizer backends that can be selected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenizerKind {
    /// Lattice tokenizer over a MeCab-format system dictionary.
    #[default]
    Vibrato,
    /// UAX #29 word boundaries; no dictionary needed.
    Unicode,
}

impl TokenizerKind {
    pub const SUPPORTED: &'static [&'static str] = &["vibrato", "mecab", "unicode"];

    pub fn name(self) -> &'static str {
        match self {
            TokenizerKind::Vibrato => "vibrato",
            TokenizerKind::Unicode => "unicode",
        }
    }

    pub fn needs_dictionary(self) -> bool {
        matches!(self, TokenizerKind::Vibrato)
    }
}

impl FromStr for TokenizerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vibrato" | "mecab" => Ok(TokenizerKind::Vibrato),
            "unicode" => Ok(TokenizerKind::Unicode),
            _ => Err(Error::UnsupportedTokenizer {
                name: s.to_string(),
                supported: Self::SUPPORTED,
            }),
        }
    }
}

impl fmt::Display for TokenizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub struct VibratoTokenizer {
    tokenizer: Tokenizer,
}

impl VibratoTokenizer {
    /// `ignore_space` drops whitespace from the output and requires a `SPACE`
    /// category in the dictionary's `char.def`.
    pub fn new(dict: Dictionary, ignore_space: bool) -> Result<Self> {
        let tokenizer = Tokenizer::new(dict)
            .ignore_space(ignore_space)
            .map_err(|e| Error::Setup(e.to_string()))?;
        Ok(Self { tokenizer })
    }
}

impl WordTokenizer for VibratoTokenizer {
    fn tokenize(&self, sentence: &str) -> Vec<String> {
        let mut worker = self.tokenizer.new_worker();
        worker.reset_sentence(sentence);
        worker.tokenize();

        let mut tokens = Vec::with_capacity(worker.num_tokens());
        for i in 0..worker.num_tokens() {
            let token = worker.token(i);
            tokens.push(token.surface().to_string());
        }
        tokens
    }

    fn name(&self) -> &'static str {
        TokenizerKind::Vibrato.name()
    }
}

/// Splits on Unicode word boundaries, keeping punctuation as separate words.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeWordTokenizer;

impl WordTokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, sentence: &str) -> Vec<String> {
        sentence
            .split_word_bounds()
            .filter(|segment| !segment.trim().is_empty())
            .map(str::to_string)
            .collect()
    }

    fn name(&self) -> &'static str {
        TokenizerKind::Unicode.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokenizer_kind() {
        assert_eq!("vibrato".parse::<TokenizerKind>().unwrap(), TokenizerKind::Vibrato);
        assert_eq!("MeCab".parse::<TokenizerKind>().unwrap(), TokenizerKind::Vibrato);
        assert_eq!(" unicode ".parse::<TokenizerKind>().unwrap(), TokenizerKind::Unicode);
    }

    #[test]
    fn test_unknown_tokenizer_lists_supported() {
        let err = "janome".parse::<TokenizerKind>().unwrap_err();
        match &err {
            Error::UnsupportedTokenizer { name, supported } => {
                assert_eq!(name, "janome");
                assert!(supported.contains(&"vibrato"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("janome"));
    }

    #[test]
    fn test_unicode_tokenizer_drops_whitespace() {
        let words = UnicodeWordTokenizer.tokenize("Hello, world!  ok");
        assert_eq!(words, vec!["Hello", ",", "world", "!", "ok"]);
    }
}
