use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::align::{Aligner, OffsetUnit, Token};
use crate::dictionary::DictionaryHandle;
use crate::error::{Error, Result};
use crate::sentence::SentenceSplitter;
use crate::tokenize::{TokenizerKind, UnicodeWordTokenizer, VibratoTokenizer, WordTokenizer};

pub const TOKENIZER_ENV: &str = "TOKEN_ALIGN_TOKENIZER";
pub const DICT_PATH_ENV: &str = "TOKEN_ALIGN_DICT_PATH";
pub const USER_LEXICON_ENV: &str = "TOKEN_ALIGN_USER_LEXICON";

/// Selects and configures the word tokenizer backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerConfig {
    pub kind: TokenizerKind,
    /// Compiled system dictionary, required by [`TokenizerKind::Vibrato`].
    pub dictionary: Option<PathBuf>,
    /// MeCab-format CSV applied on top of the system dictionary.
    pub user_lexicon: Option<PathBuf>,
    pub ignore_space: bool,
    pub unit: OffsetUnit,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            kind: TokenizerKind::default(),
            dictionary: None,
            user_lexicon: None,
            ignore_space: true,
            unit: OffsetUnit::default(),
        }
    }
}

impl TokenizerConfig {
    pub fn new(kind: TokenizerKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        match env::var(TOKENIZER_ENV) {
            Ok(name) => config.kind = name.parse()?,
            Err(env::VarError::NotUnicode(name)) => {
                return Err(Error::UnsupportedTokenizer {
                    name: name.to_string_lossy().into_owned(),
                    supported: TokenizerKind::SUPPORTED,
                });
            }
            Err(env::VarError::NotPresent) => {}
        }
        config.dictionary = env::var_os(DICT_PATH_ENV).map(PathBuf::from);
        config.user_lexicon = env::var_os(USER_LEXICON_ENV).map(PathBuf::from);
        Ok(config)
    }

    /// Checks that the backend's resources are present and constructs it.
    pub fn build(&self) -> Result<Box<dyn WordTokenizer>> {
        match self.kind {
            TokenizerKind::Vibrato => {
                let path = self.dictionary.as_ref().ok_or(Error::MissingDictionary {
                    backend: self.kind.name(),
                })?;
                let dict = DictionaryHandle::open(path)?.load(self.user_lexicon.as_deref())?;
                Ok(Box::new(VibratoTokenizer::new(dict, self.ignore_space)?))
            }
            TokenizerKind::Unicode => {
                if self.dictionary.is_some() || self.user_lexicon.is_some() {
                    log::warn!("The unicode tokenizer does not use dictionaries; ignoring them");
                }
                Ok(Box::new(UnicodeWordTokenizer))
            }
        }
    }
}

/// Sentence splitting, word tokenization and offset alignment in one place.
pub struct JapaneseTokenizer {
    splitter: SentenceSplitter,
    words: Box<dyn WordTokenizer>,
    aligner: Aligner,
}

impl JapaneseTokenizer {
    pub fn new(config: &TokenizerConfig) -> Result<Self> {
        let tokenizer = Self::with_tokenizer(config.build()?).with_unit(config.unit);
        log::info!("Initialized {}", tokenizer.name());
        Ok(tokenizer)
    }

    pub fn with_tokenizer(words: Box<dyn WordTokenizer>) -> Self {
        Self {
            splitter: SentenceSplitter::default(),
            words,
            aligner: Aligner::default(),
        }
    }

    pub fn with_unit(mut self, unit: OffsetUnit) -> Self {
        self.aligner = Aligner::new(unit);
        self
    }

    pub fn with_splitter(mut self, splitter: SentenceSplitter) -> Self {
        self.splitter = splitter;
        self
    }

    pub fn unit(&self) -> OffsetUnit {
        self.aligner.unit()
    }

    /// Word surfaces for the whole text, sentence by sentence.
    pub fn words(&self, text: &str) -> Vec<String> {
        self.splitter
            .split(text)
            .into_iter()
            .flat_map(|sentence| self.words.tokenize(sentence))
            .filter(|word| !word.trim().is_empty())
            .collect()
    }

    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let words = self.words(text);
        self.aligner.align(text, &words)
    }

    pub fn name(&self) -> String {
        format!("JapaneseTokenizer_{}", self.words.name())
    }
}

impl fmt::Debug for JapaneseTokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JapaneseTokenizer")
            .field("splitter", &self.splitter)
            .field("words", &self.words.name())
            .field("aligner", &self.aligner)
            .finish()
    }
}
