use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while setting up tokenizers and dictionaries.
///
/// Alignment itself never fails; everything here happens at initialization.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported tokenizer `{name}`, supported tokenizers: {supported:?}")]
    UnsupportedTokenizer {
        name: String,
        supported: &'static [&'static str],
    },

    #[error("the `{backend}` tokenizer needs a dictionary path (set TOKEN_ALIGN_DICT_PATH or pass one explicitly)")]
    MissingDictionary { backend: &'static str },

    #[error("dictionary not found at {0:?}")]
    DictionaryNotFound(PathBuf),

    #[error("dictionary source {name} not found at {path:?}")]
    MissingSource { name: &'static str, path: PathBuf },

    #[error("dictionary error for {path:?}: {message}")]
    Dictionary { path: PathBuf, message: String },

    #[error("tokenizer setup failed: {0}")]
    Setup(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn dictionary(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Error::Dictionary {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
