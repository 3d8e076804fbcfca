use std::io::Write;

use anyhow::Result;
use token_align::Token;

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated text, start offset and whitespace flag with a header row
    Tsv,
    /// JSON array of token records
    Json,
}

pub fn write_tokens<W: Write>(mut writer: W, tokens: &[Token], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Tsv => {
            let mut writer = csv::WriterBuilder::new()
                .delimiter(b'\t')
                .has_headers(false)
                .quote_style(csv::QuoteStyle::Necessary)
                .from_writer(writer);
            writer.write_record(["text", "start", "whitespace_after"])?;
            for token in tokens {
                let start = token.start_offset.to_string();
                let whitespace_after = if token.whitespace_after { "true" } else { "false" };
                writer.write_record([token.text.as_str(), start.as_str(), whitespace_after])?;
            }
            writer.flush()?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, tokens)?;
            writeln!(writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}
