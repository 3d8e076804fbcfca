//! Recover token positions for tokenizers that only hand back word strings.
//!
//! Japanese morphological analyzers are usually driven sentence by sentence and
//! return surfaces only. [`align`] walks the original text and assigns each
//! surface a start offset plus a `whitespace_after` flag, which is what
//! downstream annotation pipelines expect from a tokenizer.
//!
//! ```
//! use token_align::align;
//!
//! let tokens = align("東京都に行く", &["東京都", "に", "行く"]);
//! let offsets: Vec<usize> = tokens.iter().map(|t| t.start_offset).collect();
//! assert_eq!(offsets, vec![0, 3, 4]);
//! assert!(!tokens[0].whitespace_after);
//! ```

pub mod align;
pub mod dictionary;
pub mod error;
pub mod pipeline;
pub mod sentence;
pub mod tokenize;

pub use align::{align, Aligner, OffsetUnit, Token};
pub use dictionary::{build_or_locate, DictionaryHandle, DictionarySources};
pub use error::{Error, Result};
pub use pipeline::{JapaneseTokenizer, TokenizerConfig};
pub use sentence::SentenceSplitter;
pub use tokenize::{TokenizerKind, UnicodeWordTokenizer, VibratoTokenizer, WordTokenizer};
