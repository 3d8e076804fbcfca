use std::path::Path;

use test_resources::mini_dict_sources;
use token_align::{build_or_locate, JapaneseTokenizer, TokenizerConfig, TokenizerKind};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Falls back to the bundled mini dictionary when no full build exists yet.
    let handle = build_or_locate(Path::new("output/system.dic.zst"), &mini_dict_sources())?;
    let config = TokenizerConfig {
        kind: TokenizerKind::Vibrato,
        dictionary: Some(handle.path().to_path_buf()),
        ..TokenizerConfig::default()
    };
    let tokenizer = JapaneseTokenizer::new(&config)?;

    let text = "今日、東京都に行く。";
    println!("Tokenizing: {}", text);
    for (i, token) in tokenizer.tokenize(text).iter().enumerate() {
        println!(
            "{}: {} (start {}, whitespace_after {})",
            i, token.text, token.start_offset, token.whitespace_after
        );
    }

    Ok(())
}
