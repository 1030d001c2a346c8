//! YAML configuration for the `reflex` binary.

use std::error::Error;
use std::fs;
use std::path::Path;

use reflex_core::{Dialect, ErrorInfo, ReflexError, ToneStyle};
use reflex_dialects::{JapaneseStyle, KoreanScript, RenderStyle};
use reflex_script::kana::KanaForm;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Defaults shared by every subcommand. Command-line flags win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Dialect used when a subcommand is given none.
    #[serde(default)]
    pub default_dialect: Option<Dialect>,
    /// Tone writing for toned romanisations.
    #[serde(default)]
    pub tone_style: ToneStyle,
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Write Cantonese checked tones as 7/8/9.
    #[serde(default)]
    pub separate_checked_tone: bool,
    /// Japanese output script.
    #[serde(default = "default_japanese_script")]
    pub japanese_script: KanaForm,
    /// Korean output script.
    #[serde(default)]
    pub korean_script: KoreanScript,
}

fn default_log_level() -> String {
    "info".to_owned()
}

fn default_japanese_script() -> KanaForm {
    KanaForm::Katakana
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_dialect: None,
            tone_style: ToneStyle::default(),
            log_level: default_log_level(),
            separate_checked_tone: false,
            japanese_script: default_japanese_script(),
            korean_script: KoreanScript::default(),
        }
    }
}

impl CliConfig {
    /// Reads a configuration document.
    pub fn from_yaml(text: &str) -> Result<Self, ReflexError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|err| {
            let mut info = ErrorInfo::new("invalid-config", format!("cannot read configuration: {err}"));
            if let Some(location) = err.location() {
                info = info
                    .with_context("line", location.line().to_string())
                    .with_context("column", location.column().to_string());
            }
            ReflexError::Serde(info)
        })
    }

    /// Loads `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let config = Self::from_yaml(&fs::read_to_string(path)?)?;
        debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Render options derived from the configuration.
    pub fn render_style(&self) -> RenderStyle {
        RenderStyle {
            tone: self.tone_style,
            separate_checked_tone: self.separate_checked_tone,
            japanese: JapaneseStyle {
                script: self.japanese_script,
                ..JapaneseStyle::default()
            },
            korean: self.korean_script,
        }
    }

    /// `explicit`, else the configured default dialect.
    pub fn dialect(&self, explicit: Option<Dialect>) -> Result<Dialect, Box<dyn Error>> {
        explicit
            .or(self.default_dialect)
            .ok_or_else(|| "no --dialect given and no default_dialect configured".into())
    }
}
