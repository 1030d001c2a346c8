use std::error::Error;
use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use reflex_cli::commands::{
    convert::{self, ConvertArgs},
    derive::{self, DeriveArgs},
    normalize::{self, NormalizeArgs},
    parse::{self, ParseArgs},
    verify::{self, VerifyArgs},
};
use reflex_cli::{init_tracing, CliConfig};

#[derive(Parser, Debug)]
#[command(name = "reflex", about = "Dialect syllable codecs and Middle Chinese reflex derivation")]
struct Cli {
    /// YAML configuration with defaults for every subcommand.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read syllables and print their slots, tone and narrow transcription.
    Parse(ParseArgs),
    /// Re-render syllables in another tone style or script.
    Convert(ConvertArgs),
    /// Predict reflexes for a file of rhyme-class records.
    Derive(DeriveArgs),
    /// Rewrite historical kana readings in modern usage.
    Normalize(NormalizeArgs),
    /// Check stored readings against their texts.
    Verify(VerifyArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?;
    init_tracing(&config.log_level);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Parse(args) => parse::run(&args, &config, &mut out).map(drop),
        Command::Convert(args) => convert::run(&args, &config, &mut out).map(drop),
        Command::Derive(args) => derive::run(&args, &config, &mut out).map(drop),
        Command::Normalize(args) => normalize::run(&args, &config, &mut out).map(drop),
        Command::Verify(args) => verify::run(&args, &mut out).map(drop),
    }
}
