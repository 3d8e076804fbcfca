use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use token_align::dictionary::compile;
use token_align::{build_or_locate, DictionarySources};

#[derive(Debug, Args)]
pub struct BuildDictArgs {
    /// Directory holding lex.csv, matrix.def, char.def and unk.def
    #[arg(short, long, value_name = "DIR")]
    pub sources: PathBuf,

    /// Compiled dictionary path; zstd-compressed when it ends in .zst
    #[arg(short, long, value_name = "FILE", default_value = "output/system.dic.zst")]
    pub output: PathBuf,

    /// Rebuild even if the output already exists
    #[arg(short, long)]
    pub force: bool,
}

impl BuildDictArgs {
    pub fn execute(&self) -> Result<()> {
        let sources = DictionarySources::from_dir(&self.sources);

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")?
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        let rebuild = self.force || !self.output.is_file();
        if rebuild {
            pb.set_message(format!("Compiling dictionary from {:?}", self.sources));
        } else {
            pb.set_message(format!("Locating dictionary at {:?}", self.output));
        }

        let result = if self.force {
            compile(&sources, &self.output)
        } else {
            build_or_locate(&self.output, &sources)
        };
        let handle = match result {
            Ok(handle) => handle,
            Err(e) => {
                pb.abandon();
                return Err(e)
                    .with_context(|| format!("Failed to build dictionary from {:?}", self.sources));
            }
        };

        pb.finish_and_clear();
        println!("Done. Dictionary available at {}", handle.path().display());
        Ok(())
    }
}
