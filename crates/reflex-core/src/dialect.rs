use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, ReflexError};

/// The eight language varieties with a syllable codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dialect {
    /// Fuzhou Gan (撫州話).
    #[serde(rename = "FG")]
    Gan,
    /// Putonghua Mandarin (普通話).
    #[serde(rename = "PM")]
    Mandarin,
    /// Guangzhou Cantonese (廣州話).
    #[serde(rename = "GC")]
    Cantonese,
    /// Shanghai Wu (上海話).
    #[serde(rename = "SW")]
    Wu,
    /// Meixian Hakka (梅縣話).
    #[serde(rename = "MH")]
    Hakka,
    /// Japanese (日本語), Sino-Japanese readings.
    #[serde(rename = "JP")]
    Japanese,
    /// Korean (朝鮮語), Sino-Korean readings.
    #[serde(rename = "KR")]
    Korean,
    /// Vietnamese (越南語), Sino-Vietnamese readings.
    #[serde(rename = "VN")]
    Vietnamese,
}

impl Dialect {
    /// Every dialect in catalog order.
    pub const ALL: [Dialect; 8] = [
        Dialect::Gan,
        Dialect::Mandarin,
        Dialect::Cantonese,
        Dialect::Wu,
        Dialect::Hakka,
        Dialect::Japanese,
        Dialect::Korean,
        Dialect::Vietnamese,
    ];

    /// Two-letter code used by storage and export.
    pub fn code(self) -> &'static str {
        match self {
            Dialect::Gan => "FG",
            Dialect::Mandarin => "PM",
            Dialect::Cantonese => "GC",
            Dialect::Wu => "SW",
            Dialect::Hakka => "MH",
            Dialect::Japanese => "JP",
            Dialect::Korean => "KR",
            Dialect::Vietnamese => "VN",
        }
    }

    /// Display name of the variety.
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Gan => "撫州話",
            Dialect::Mandarin => "普通話",
            Dialect::Cantonese => "廣州話",
            Dialect::Wu => "上海話",
            Dialect::Hakka => "梅縣話",
            Dialect::Japanese => "日本語",
            Dialect::Korean => "朝鮮語",
            Dialect::Vietnamese => "越南語",
        }
    }

    /// Whether syllables of this dialect carry a tone slot.
    pub fn is_toned(self) -> bool {
        !matches!(self, Dialect::Japanese | Dialect::Korean)
    }
}

impl Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Dialect {
    type Err = ReflexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::ALL
            .into_iter()
            .find(|dialect| dialect.code().eq_ignore_ascii_case(s) || dialect.name() == s)
            .ok_or_else(|| {
                ReflexError::ParseFailure(
                    ErrorInfo::new("unknown-dialect", format!("unknown dialect code {s:?}"))
                        .with_context("text", s)
                        .with_hint("expected one of FG, PM, GC, SW, MH, JP, KR, VN"),
                )
            })
    }
}
