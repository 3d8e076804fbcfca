//! Fixture dictionaries shared by the integration tests and examples.

use std::path::{Path, PathBuf};

use anyhow::Result;
use token_align::dictionary::compile;
use token_align::{DictionaryHandle, DictionarySources};

pub fn resources_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("resources")
}

/// Sources of a tiny IPADIC-style dictionary with a single connection id.
pub fn mini_dict_sources() -> DictionarySources {
    DictionarySources::from_dir(resources_dir().join("mini-dict"))
}

pub fn user_lexicon_path() -> PathBuf {
    resources_dir().join("user-lexicon.csv")
}

/// Compiles the mini dictionary into `dir` and returns its handle.
pub fn build_mini_dictionary(dir: &Path) -> Result<DictionaryHandle> {
    Ok(compile(&mini_dict_sources(), &dir.join("system.dic.zst"))?)
}
