//! `reflex derive`.

use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use reflex_core::Dialect;
use reflex_derive::{derive_reflex, RhymeClass};
use reflex_dialects::Reading;
use serde::Serialize;
use tracing::info;

use crate::CliConfig;

/// Arguments of `reflex derive`.
#[derive(Args, Debug)]
pub struct DeriveArgs {
    /// Dialect with a rule set: FG or MH.
    #[arg(long)]
    pub dialect: Option<Dialect>,
    /// JSON array of rhyme-class records.
    #[arg(long)]
    pub input: PathBuf,
    /// Output file; standard output when absent.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// One derived record in the output document.
#[derive(Debug, Clone, Serialize)]
pub struct DerivedReflex {
    /// Rhyme-class number.
    pub id: u32,
    /// Category summary of the record.
    pub category: String,
    /// Derived reading.
    pub reflex: Reading,
    /// Derived reading in the dialect's orthography.
    pub spelling: String,
}

/// Derives every record; the first record without a rule aborts the run.
pub fn run(args: &DeriveArgs, config: &CliConfig, out: &mut dyn Write) -> Result<usize, Box<dyn Error>> {
    let dialect = config.dialect(args.dialect)?;
    let records = RhymeClass::from_json_list(&fs::read_to_string(&args.input)?)?;
    let style = config.render_style();
    let derived = records
        .iter()
        .map(|record| {
            let reflex = derive_reflex(dialect, record)?;
            Ok(DerivedReflex {
                id: record.id,
                category: record.describe(),
                reflex: reflex.reading(),
                spelling: reflex.render(&style),
            })
        })
        .collect::<Result<Vec<_>, reflex_core::ReflexError>>()?;

    let json = serde_json::to_string_pretty(&derived)?;
    match &args.out {
        Some(path) => fs::write(path, json)?,
        None => writeln!(out, "{json}")?,
    }
    info!(%dialect, records = derived.len(), "derived reflexes");
    Ok(derived.len())
}
