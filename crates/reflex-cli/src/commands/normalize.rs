//! `reflex normalize`: Japanese historical kana to modern usage.

use std::error::Error;
use std::io::Write;

use clap::Args;
use reflex_core::{Orthography, Syllable};
use reflex_dialects::Japanese;
use reflex_script::kana::KanaForm;
use tracing::warn;

use super::kebab;
use crate::CliConfig;

/// Arguments of `reflex normalize`.
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Output script, defaulting to the configured Japanese script.
    #[arg(long, value_parser = kebab::<KanaForm>)]
    pub script: Option<KanaForm>,
    /// Sino-Japanese readings in historical kana usage.
    #[arg(required = true)]
    pub texts: Vec<String>,
}

/// Rewrites historical kana readings in modern usage, one per line.
pub fn run(args: &NormalizeArgs, config: &CliConfig, out: &mut dyn Write) -> Result<usize, Box<dyn Error>> {
    let mut style = config.render_style().japanese;
    if let Some(script) = args.script {
        style.script = script;
    }
    let mut normalized = 0;
    for text in &args.texts {
        let modern = Syllable::<Japanese>::parse(text).and_then(|syllable| Japanese::normalize(&syllable));
        match modern {
            Ok(modern) => {
                writeln!(out, "{}", modern.render(style))?;
                normalized += 1;
            }
            Err(err) => warn!(text = %text, error = %err, "skipping unreadable kana"),
        }
    }
    Ok(normalized)
}
