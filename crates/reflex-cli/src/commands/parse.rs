//! `reflex parse`.

use std::error::Error;
use std::io::Write;

use clap::Args;
use reflex_core::Dialect;
use reflex_dialects::Pronunciation;
use tracing::{debug, warn};

use super::write_json_line;
use crate::CliConfig;

/// Arguments of `reflex parse`.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Dialect code: FG, PM, GC, SW, MH, JP, KR or VN.
    #[arg(long)]
    pub dialect: Option<Dialect>,
    /// Syllables in the dialect's orthography.
    #[arg(required = true)]
    pub texts: Vec<String>,
}

/// Writes one JSON reading per parsed syllable and returns how many were read.
/// Unreadable items are logged and skipped.
pub fn run(args: &ParseArgs, config: &CliConfig, out: &mut dyn Write) -> Result<usize, Box<dyn Error>> {
    let dialect = config.dialect(args.dialect)?;
    let mut read = 0;
    for text in &args.texts {
        match Pronunciation::parse(dialect, text) {
            Ok(syllable) => {
                write_json_line(out, &syllable.reading())?;
                read += 1;
            }
            Err(err) => warn!(%dialect, text = %text, error = %err, "skipping unreadable syllable"),
        }
    }
    debug!(%dialect, read, total = args.texts.len(), "parsed syllables");
    Ok(read)
}
