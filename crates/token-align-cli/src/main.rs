use anyhow::Result;
use clap::{Parser, Subcommand};

mod build_dict;
mod output;
mod tokenize;

#[derive(Debug, Parser)]
#[command(name = "token-align", version, about = "Tokenize Japanese text and recover token offsets")]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compile a vibrato system dictionary from MeCab-style sources
    BuildDict(build_dict::BuildDictArgs),
    /// Tokenize text and print each token with its offset
    Tokenize(tokenize::TokenizeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    log::debug!("Arguments: {:?}", cli);

    match cli.command {
        Command::BuildDict(args) => args.execute(),
        Command::Tokenize(args) => args.execute(),
    }
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}
