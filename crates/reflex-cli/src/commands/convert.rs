//! `reflex convert`.

use std::error::Error;
use std::io::Write;

use clap::Args;
use reflex_core::{Dialect, ToneStyle};
use reflex_dialects::{KoreanScript, Pronunciation};
use reflex_script::kana::KanaForm;
use tracing::warn;

use super::kebab;
use crate::CliConfig;

/// Arguments of `reflex convert`.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Dialect code: FG, PM, GC, SW, MH, JP, KR or VN.
    #[arg(long)]
    pub dialect: Option<Dialect>,
    /// Tone writing: numeral, diacritic or omitted.
    #[arg(long, value_parser = kebab::<ToneStyle>)]
    pub style: Option<ToneStyle>,
    /// Write Cantonese checked tones as 7/8/9.
    #[arg(long)]
    pub separate_checked_tone: bool,
    /// Japanese script: katakana, hiragana, nippon, hepburn or raw.
    #[arg(long, value_parser = kebab::<KanaForm>)]
    pub japanese_script: Option<KanaForm>,
    /// Korean script: hangul or revised.
    #[arg(long, value_parser = kebab::<KoreanScript>)]
    pub korean_script: Option<KoreanScript>,
    /// Syllables in the dialect's orthography.
    #[arg(required = true)]
    pub texts: Vec<String>,
}

/// Re-renders every readable syllable, one per line.
pub fn run(args: &ConvertArgs, config: &CliConfig, out: &mut dyn Write) -> Result<usize, Box<dyn Error>> {
    let dialect = config.dialect(args.dialect)?;
    let mut style = config.render_style();
    if let Some(tone) = args.style {
        style.tone = tone;
    }
    style.separate_checked_tone |= args.separate_checked_tone;
    if let Some(script) = args.japanese_script {
        style.japanese.script = script;
    }
    if let Some(script) = args.korean_script {
        style.korean = script;
    }
    let mut converted = 0;
    for text in &args.texts {
        match Pronunciation::parse(dialect, text) {
            Ok(syllable) => {
                writeln!(out, "{}", syllable.render(&style))?;
                converted += 1;
            }
            Err(err) => warn!(%dialect, text = %text, error = %err, "skipping unreadable syllable"),
        }
    }
    Ok(converted)
}
