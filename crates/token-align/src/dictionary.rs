//! Compiling and loading vibrato system dictionaries.
//!
//! Dictionaries are built from MeCab-style sources (`lex.csv`, `matrix.def`,
//! `char.def`, `unk.def`) and stored zstd-compressed when the output path ends
//! in `.zst`. Building is always an explicit call; nothing here runs on load.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use vibrato::{Dictionary, SystemDictionaryBuilder};

use crate::error::{Error, Result};

const ZSTD_LEVEL: i32 = 19;

/// Paths of the four source files a system dictionary is compiled from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionarySources {
    pub lexicon: PathBuf,
    pub matrix: PathBuf,
    pub char_def: PathBuf,
    pub unk_def: PathBuf,
}

impl DictionarySources {
    /// Uses the conventional file names inside `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            lexicon: dir.join("lex.csv"),
            matrix: dir.join("matrix.def"),
            char_def: dir.join("char.def"),
            unk_def: dir.join("unk.def"),
        }
    }

    fn files(&self) -> [(&'static str, &Path); 4] {
        [
            ("lex.csv", self.lexicon.as_path()),
            ("matrix.def", self.matrix.as_path()),
            ("char.def", self.char_def.as_path()),
            ("unk.def", self.unk_def.as_path()),
        ]
    }

    fn check(&self) -> Result<()> {
        for (name, path) in self.files() {
            if !path.is_file() {
                return Err(Error::MissingSource {
                    name,
                    path: path.to_path_buf(),
                });
            }
        }
        Ok(())
    }
}

/// A compiled dictionary on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryHandle {
    path: PathBuf,
}

impl DictionaryHandle {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_file() {
            return Err(Error::DictionaryNotFound(path));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the dictionary, then applies `user_lexicon` (a MeCab-format CSV) if given.
    pub fn load(&self, user_lexicon: Option<&Path>) -> Result<Dictionary> {
        log::info!("Loading dictionary from {:?}", self.path);

        let file = File::open(&self.path)?;
        let dict = if is_zstd(&self.path) {
            let mut decoder = zstd::Decoder::new(file)?;
            let mut dict_data = Vec::new();
            decoder.read_to_end(&mut dict_data)?;
            Dictionary::read(&dict_data[..])
        } else {
            Dictionary::read(BufReader::new(file))
        }
        .map_err(|e| Error::dictionary(&self.path, e))?;

        let dict = match user_lexicon {
            Some(lexicon) => {
                if !lexicon.is_file() {
                    return Err(Error::MissingSource {
                        name: "user lexicon",
                        path: lexicon.to_path_buf(),
                    });
                }
                log::info!("Applying user lexicon {:?}", lexicon);
                dict.reset_user_lexicon_from_reader(Some(File::open(lexicon)?))
                    .map_err(|e| Error::dictionary(lexicon, e))?
            }
            None => dict,
        };

        log::info!("Dictionary loaded successfully");
        Ok(dict)
    }
}

/// Compiles `sources` into `output`, replacing any existing file.
pub fn compile(sources: &DictionarySources, output: &Path) -> Result<DictionaryHandle> {
    sources.check()?;
    log::info!("Compiling dictionary from {:?}", sources.lexicon);

    let dict = SystemDictionaryBuilder::from_readers(
        File::open(&sources.lexicon)?,
        File::open(&sources.matrix)?,
        File::open(&sources.char_def)?,
        File::open(&sources.unk_def)?,
    )
    .map_err(|e| Error::dictionary(&sources.lexicon, e))?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(output)?;
    if is_zstd(output) {
        let mut encoder = zstd::Encoder::new(BufWriter::new(file), ZSTD_LEVEL)?;
        dict.write(&mut encoder)
            .map_err(|e| Error::dictionary(output, e))?;
        encoder.finish()?.flush()?;
    } else {
        let mut writer = BufWriter::new(file);
        dict.write(&mut writer)
            .map_err(|e| Error::dictionary(output, e))?;
        writer.flush()?;
    }

    log::info!("Dictionary written to {:?}", output);
    Ok(DictionaryHandle {
        path: output.to_path_buf(),
    })
}

/// Returns the dictionary at `output`, compiling it from `sources` first if it is absent.
pub fn build_or_locate(output: &Path, sources: &DictionarySources) -> Result<DictionaryHandle> {
    if output.is_file() {
        log::info!("Dictionary already built at {:?}", output);
        return DictionaryHandle::open(output);
    }
    compile(sources, output)
}

fn is_zstd(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "zst")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sources_from_dir() {
        let sources = DictionarySources::from_dir("dict/src");
        assert_eq!(sources.lexicon, Path::new("dict/src/lex.csv"));
        assert_eq!(sources.unk_def, Path::new("dict/src/unk.def"));
    }

    #[test]
    fn test_missing_source_is_reported_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let sources = DictionarySources::from_dir(dir.path());
        let err = compile(&sources, &dir.path().join("system.dic.zst")).unwrap_err();
        assert!(matches!(err, Error::MissingSource { name: "lex.csv", .. }));
    }

    #[test]
    fn test_open_missing_dictionary() {
        let err = DictionaryHandle::open("does/not/exist.dic.zst").unwrap_err();
        assert!(matches!(err, Error::DictionaryNotFound(_)));
    }

    #[test]
    fn test_zstd_detection() {
        assert!(is_zstd(Path::new("system.dic.zst")));
        assert!(!is_zstd(Path::new("system.dic")));
    }
}
