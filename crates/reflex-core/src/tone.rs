//! Static tone tables.

use serde::{Deserialize, Serialize};

/// Middle Chinese tone category (四聲).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ToneClass {
    /// 平聲.
    #[serde(rename = "平")]
    Level,
    /// 上聲.
    #[serde(rename = "上")]
    Rising,
    /// 去聲.
    #[serde(rename = "去")]
    Departing,
    /// 入聲.
    #[serde(rename = "入")]
    Entering,
}

impl ToneClass {
    /// The single-character label.
    pub fn label(self) -> &'static str {
        match self {
            ToneClass::Level => "平",
            ToneClass::Rising => "上",
            ToneClass::Departing => "去",
            ToneClass::Entering => "入",
        }
    }
}

/// Which codas a tone may co-occur with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Checking {
    /// Only on syllables without a stop or glottal coda.
    Open,
    /// Only on syllables with a stop or glottal coda.
    Checked,
    /// Either kind; the neutral tone and Mandarin's unspecified tone.
    Either,
}

/// One row of a dialect tone table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tone {
    /// Tone code as stored and written in numeral style.
    pub code: &'static str,
    /// Traditional tone name.
    pub name: &'static str,
    /// Combining diacritic written over the nucleus, if the orthography marks it.
    pub mark: Option<char>,
    /// Checked/unchecked partition membership.
    pub checking: Checking,
    /// Middle Chinese category the modern tone typically continues.
    pub class: Option<ToneClass>,
}

impl Tone {
    /// Shorthand for a tone restricted to open syllables.
    pub const fn open(
        code: &'static str,
        name: &'static str,
        mark: Option<char>,
        class: ToneClass,
    ) -> Self {
        Self {
            code,
            name,
            mark,
            checking: Checking::Open,
            class: Some(class),
        }
    }

    /// Shorthand for a tone restricted to checked syllables.
    pub const fn checked(code: &'static str, name: &'static str, mark: Option<char>) -> Self {
        Self {
            code,
            name,
            mark,
            checking: Checking::Checked,
            class: Some(ToneClass::Entering),
        }
    }

    /// Shorthand for a neutral tone usable anywhere.
    pub const fn neutral(code: &'static str, name: &'static str) -> Self {
        Self {
            code,
            name,
            mark: None,
            checking: Checking::Either,
            class: None,
        }
    }
}

/// Fixed tone inventory of one dialect.
#[derive(Debug)]
pub struct ToneTable {
    tones: &'static [Tone],
    neutral: &'static str,
}

impl ToneTable {
    /// Wraps a static tone list; `neutral` is the code assumed when input omits the tone.
    pub const fn new(tones: &'static [Tone], neutral: &'static str) -> Self {
        Self { tones, neutral }
    }

    /// Looks up a tone by code.
    pub fn get(&self, code: &str) -> Option<&'static Tone> {
        self.tones.iter().find(|tone| tone.code == code)
    }

    /// Code assumed when a parsed syllable carries no tone.
    pub fn neutral(&self) -> &'static str {
        self.neutral
    }

    /// Iterates over the rows in table order.
    pub fn iter(&self) -> impl Iterator<Item = &'static Tone> {
        self.tones.iter()
    }

    /// First tone in table order written with `mark`.
    ///
    /// Where several tones share a mark the earlier row wins, so checked tones
    /// listed after their open counterparts are only reached through a
    /// checked-coda remap.
    pub fn by_mark(&self, mark: char) -> Option<&'static Tone> {
        self.tones.iter().find(|tone| tone.mark == Some(mark))
    }

    /// Whether `ch` is a diacritic used by any tone.
    pub fn is_mark(&self, ch: char) -> bool {
        self.tones.iter().any(|tone| tone.mark == Some(ch))
    }
}

/// How a toned romanisation writes the tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToneStyle {
    /// Trailing tone number.
    #[default]
    Numeral,
    /// Combining diacritic over the nucleus.
    Diacritic,
    /// No tone at all.
    Omitted,
}
