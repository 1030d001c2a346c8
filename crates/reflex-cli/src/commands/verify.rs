//! `reflex verify`: re-parse stored readings and report the ones that drifted.

use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use reflex_dialects::{Pronunciation, Reading};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::write_json_line;

/// Arguments of `reflex verify`.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// JSON array of stored readings, each with its source text.
    #[arg(long)]
    pub input: PathBuf,
}

/// A stored reading and the text it was recorded for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredReading {
    /// Orthographic text.
    pub text: String,
    /// Recorded slots and tone.
    #[serde(flatten)]
    pub reading: Reading,
}

/// A stored reading its text does not reproduce.
#[derive(Debug, Clone, Serialize)]
pub struct Disagreement {
    /// Orthographic text.
    pub text: String,
    /// What was stored.
    pub stored: Reading,
    /// What the text parses to, if anything.
    pub parsed: Option<Reading>,
}

/// Re-parses every stored text and writes one JSON line per disagreement.
pub fn run(args: &VerifyArgs, out: &mut dyn Write) -> Result<usize, Box<dyn Error>> {
    let stored: Vec<StoredReading> = serde_json::from_str(&fs::read_to_string(&args.input)?)?;
    let mut disagreements = 0;
    for entry in &stored {
        let parsed = Pronunciation::parse(entry.reading.dialect, &entry.text);
        if let Ok(syllable) = &parsed {
            if syllable.agrees_with(&entry.reading) {
                continue;
            }
        }
        warn!(text = %entry.text, dialect = %entry.reading.dialect, "stored reading disagrees with its text");
        write_json_line(
            out,
            &Disagreement {
                text: entry.text.clone(),
                stored: entry.reading.clone(),
                parsed: parsed.ok().map(|syllable| syllable.reading()),
            },
        )?;
        disagreements += 1;
    }
    info!(checked = stored.len(), disagreements, "verified stored readings");
    Ok(disagreements)
}
