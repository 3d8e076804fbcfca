use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use token_align::{JapaneseTokenizer, OffsetUnit, TokenizerConfig, TokenizerKind};

use crate::output::{write_tokens, OutputFormat};

#[derive(Debug, Args)]
pub struct TokenizeArgs {
    /// Input file (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Word tokenizer backend: vibrato (alias mecab) or unicode
    #[arg(short, long, env = "TOKEN_ALIGN_TOKENIZER", default_value = "vibrato")]
    pub tokenizer: String,

    /// Compiled system dictionary, required by the vibrato backend
    #[arg(short, long, env = "TOKEN_ALIGN_DICT_PATH", value_name = "FILE")]
    pub dict: Option<PathBuf>,

    /// MeCab-format CSV applied on top of the system dictionary
    #[arg(long, env = "TOKEN_ALIGN_USER_LEXICON", value_name = "FILE")]
    pub user_lexicon: Option<PathBuf>,

    /// Keep spaces in vibrato's output (for dictionaries without a SPACE category)
    #[arg(long)]
    pub keep_space: bool,

    /// Unit offsets are counted in
    #[arg(long, value_enum, default_value = "char")]
    pub unit: OffsetUnit,

    /// Output format
    #[arg(short, long, value_enum, default_value = "tsv")]
    pub format: OutputFormat,
}

impl TokenizeArgs {
    fn config(&self) -> Result<TokenizerConfig> {
        let kind: TokenizerKind = self.tokenizer.parse()?;
        Ok(TokenizerConfig {
            kind,
            dictionary: self.dict.clone(),
            user_lexicon: self.user_lexicon.clone(),
            ignore_space: !self.keep_space,
            unit: self.unit,
        })
    }

    pub fn execute(&self) -> Result<()> {
        let tokenizer = JapaneseTokenizer::new(&self.config()?)
            .context("Failed to initialize tokenizer")?;

        let text = match &self.input {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
            None => io::read_to_string(io::stdin()).context("Failed to read stdin")?,
        };

        let tokens = tokenizer.tokenize(&text);
        log::info!(
            "{} produced {} tokens ({:?} offsets)",
            tokenizer.name(),
            tokens.len(),
            tokenizer.unit()
        );

        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                write_tokens(BufWriter::new(file), &tokens, self.format)
            }
            None => write_tokens(io::stdout().lock(), &tokens, self.format),
        }
    }
}
