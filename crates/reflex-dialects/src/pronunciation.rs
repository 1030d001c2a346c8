//! Runtime dispatch over the eight codecs, keyed by [`Dialect`].

use reflex_core::{
    Dialect, Orthography, Phonology, ReflexError, Slots, Syllable, Tonal, ToneStyle,
    TonedSyllable,
};
use serde::{Deserialize, Serialize};

use crate::cantonese::{Cantonese, CantoneseStyle};
use crate::gan::Gan;
use crate::hakka::Hakka;
use crate::japanese::{Japanese, JapaneseStyle};
use crate::korean::{Korean, KoreanScript};
use crate::mandarin::Mandarin;
use crate::vietnamese::Vietnamese;
use crate::wu::Wu;

/// Output options for every dialect at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStyle {
    /// Tone writing for the toned romanisations.
    #[serde(default)]
    pub tone: ToneStyle,
    /// Cantonese: write checked tones as 7/8/9.
    #[serde(default)]
    pub separate_checked_tone: bool,
    /// Japanese script and kana options.
    #[serde(default)]
    pub japanese: JapaneseStyle,
    /// Korean script.
    #[serde(default)]
    pub korean: KoreanScript,
}

/// A validated syllable of any dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pronunciation {
    /// Fuzhou Gan.
    Gan(TonedSyllable<Gan>),
    /// Putonghua Mandarin.
    Mandarin(TonedSyllable<Mandarin>),
    /// Guangzhou Cantonese.
    Cantonese(TonedSyllable<Cantonese>),
    /// Shanghai Wu.
    Wu(TonedSyllable<Wu>),
    /// Meixian Hakka.
    Hakka(TonedSyllable<Hakka>),
    /// Japanese.
    Japanese(Syllable<Japanese>),
    /// Korean.
    Korean(Syllable<Korean>),
    /// Vietnamese.
    Vietnamese(TonedSyllable<Vietnamese>),
}

/// Flat, serialisable view of a [`Pronunciation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// Dialect code.
    pub dialect: Dialect,
    /// Initial.
    pub initial: String,
    /// Medial.
    pub medial: String,
    /// Nucleus.
    pub nucleus: String,
    /// Coda.
    pub coda: String,
    /// Tone code; absent for Japanese and Korean.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    /// Concatenated slots.
    #[serde(default)]
    pub raw: String,
    /// Narrow transcription.
    #[serde(default)]
    pub strict: String,
}

/// Applies `$body` to the inner syllable whatever the variant.
macro_rules! each {
    ($value:expr, $inner:ident => $body:expr) => {
        match $value {
            Pronunciation::Gan($inner) => $body,
            Pronunciation::Mandarin($inner) => $body,
            Pronunciation::Cantonese($inner) => $body,
            Pronunciation::Wu($inner) => $body,
            Pronunciation::Hakka($inner) => $body,
            Pronunciation::Japanese($inner) => $body,
            Pronunciation::Korean($inner) => $body,
            Pronunciation::Vietnamese($inner) => $body,
        }
    };
}

fn toned<D: Tonal>(
    slots: [&str; 4],
    tone: Option<&str>,
) -> Result<TonedSyllable<D>, ReflexError> {
    let [initial, medial, nucleus, coda] = slots;
    TonedSyllable::new(initial, medial, nucleus, coda, tone.unwrap_or(D::tones().neutral()))
}

fn toneless<D: Phonology>(slots: [&str; 4]) -> Result<Syllable<D>, ReflexError> {
    let [initial, medial, nucleus, coda] = slots;
    Syllable::new(initial, medial, nucleus, coda)
}

/// Every constructible syllable with every tone its coda allows.
fn all_toned<D: Tonal>() -> Vec<TonedSyllable<D>> {
    D::candidates()
        .into_iter()
        .filter_map(|slots| Syllable::<D>::from_slots(slots).ok())
        .flat_map(|syllable| {
            D::tones()
                .iter()
                .filter_map(move |tone| TonedSyllable::with_tone(syllable, tone.code).ok())
        })
        .collect()
}

fn all_toneless<D: Phonology>() -> Vec<Syllable<D>> {
    D::candidates()
        .into_iter()
        .filter_map(|slots| Syllable::<D>::from_slots(slots).ok())
        .collect()
}

impl Pronunciation {
    /// Reads orthographic text of `dialect`.
    pub fn parse(dialect: Dialect, text: &str) -> Result<Self, ReflexError> {
        Ok(match dialect {
            Dialect::Gan => Self::Gan(Gan::parse(text)?),
            Dialect::Mandarin => Self::Mandarin(Mandarin::parse(text)?),
            Dialect::Cantonese => Self::Cantonese(Cantonese::parse(text)?),
            Dialect::Wu => Self::Wu(Wu::parse(text)?),
            Dialect::Hakka => Self::Hakka(Hakka::parse(text)?),
            Dialect::Japanese => Self::Japanese(Japanese::parse(text)?),
            Dialect::Korean => Self::Korean(Korean::parse(text)?),
            Dialect::Vietnamese => Self::Vietnamese(Vietnamese::parse(text)?),
        })
    }

    /// Validates slot values of `dialect`. A missing tone defaults to the
    /// dialect's neutral tone; Japanese and Korean ignore the tone.
    pub fn from_parts(
        dialect: Dialect,
        slots: [&str; 4],
        tone: Option<&str>,
    ) -> Result<Self, ReflexError> {
        Ok(match dialect {
            Dialect::Gan => Self::Gan(toned(slots, tone)?),
            Dialect::Mandarin => Self::Mandarin(toned(slots, tone)?),
            Dialect::Cantonese => Self::Cantonese(toned(slots, tone)?),
            Dialect::Wu => Self::Wu(toned(slots, tone)?),
            Dialect::Hakka => Self::Hakka(toned(slots, tone)?),
            Dialect::Japanese => Self::Japanese(toneless(slots)?),
            Dialect::Korean => Self::Korean(toneless(slots)?),
            Dialect::Vietnamese => Self::Vietnamese(toned(slots, tone)?),
        })
    }

    /// Every constructible syllable of `dialect`, each with every legal tone.
    pub fn enumerate(dialect: Dialect) -> Vec<Self> {
        match dialect {
            Dialect::Gan => all_toned().into_iter().map(Self::Gan).collect(),
            Dialect::Mandarin => all_toned().into_iter().map(Self::Mandarin).collect(),
            Dialect::Cantonese => all_toned().into_iter().map(Self::Cantonese).collect(),
            Dialect::Wu => all_toned().into_iter().map(Self::Wu).collect(),
            Dialect::Hakka => all_toned().into_iter().map(Self::Hakka).collect(),
            Dialect::Japanese => all_toneless().into_iter().map(Self::Japanese).collect(),
            Dialect::Korean => all_toneless().into_iter().map(Self::Korean).collect(),
            Dialect::Vietnamese => all_toned().into_iter().map(Self::Vietnamese).collect(),
        }
    }

    /// The dialect of the syllable.
    pub fn dialect(&self) -> Dialect {
        match self {
            Self::Gan(_) => Dialect::Gan,
            Self::Mandarin(_) => Dialect::Mandarin,
            Self::Cantonese(_) => Dialect::Cantonese,
            Self::Wu(_) => Dialect::Wu,
            Self::Hakka(_) => Dialect::Hakka,
            Self::Japanese(_) => Dialect::Japanese,
            Self::Korean(_) => Dialect::Korean,
            Self::Vietnamese(_) => Dialect::Vietnamese,
        }
    }

    /// The segmental slots.
    pub fn slots(&self) -> Slots {
        each!(self, syllable => syllable.slots())
    }

    /// Tone code, `None` for the untoned dialects.
    pub fn tone(&self) -> Option<&'static str> {
        match self {
            Self::Gan(syllable) => Some(syllable.tone()),
            Self::Mandarin(syllable) => Some(syllable.tone()),
            Self::Cantonese(syllable) => Some(syllable.tone()),
            Self::Wu(syllable) => Some(syllable.tone()),
            Self::Hakka(syllable) => Some(syllable.tone()),
            Self::Vietnamese(syllable) => Some(syllable.tone()),
            Self::Japanese(_) | Self::Korean(_) => None,
        }
    }

    /// Narrow transcription.
    pub fn strict_ipa(&self) -> String {
        each!(self, syllable => syllable.strict_ipa())
    }

    /// Writes the syllable in its dialect's orthography.
    pub fn render(&self, style: &RenderStyle) -> String {
        match self {
            Self::Gan(syllable) => syllable.render(style.tone),
            Self::Mandarin(syllable) => syllable.render(style.tone),
            Self::Cantonese(syllable) => syllable.render(CantoneseStyle {
                tone: style.tone,
                separate_checked_tone: style.separate_checked_tone,
            }),
            Self::Wu(syllable) => syllable.render(style.tone),
            Self::Hakka(syllable) => syllable.render(style.tone),
            Self::Japanese(syllable) => syllable.render(style.japanese),
            Self::Korean(syllable) => syllable.render(style.korean),
            Self::Vietnamese(syllable) => syllable.render(style.tone),
        }
    }

    /// Whether the syllable matches a stored reading of the same text.
    ///
    /// Mandarin accepts an unspecified tone against a stored `0`.
    pub fn agrees_with(&self, stored: &Reading) -> bool {
        let slots = self.slots();
        let same_slots = stored.dialect == self.dialect()
            && [slots.initial, slots.medial, slots.nucleus, slots.coda]
                == [
                    stored.initial.as_str(),
                    stored.medial.as_str(),
                    stored.nucleus.as_str(),
                    stored.coda.as_str(),
                ];
        let tone_agrees = match self {
            Self::Mandarin(syllable) => Mandarin::agrees_with_record(
                syllable,
                &slots,
                stored.tone.as_deref().unwrap_or_default(),
            ),
            _ => self.tone() == stored.tone.as_deref(),
        };
        same_slots && tone_agrees
    }

    /// Flat view for serialisation.
    pub fn reading(&self) -> Reading {
        let slots = self.slots();
        Reading {
            dialect: self.dialect(),
            initial: slots.initial.to_owned(),
            medial: slots.medial.to_owned(),
            nucleus: slots.nucleus.to_owned(),
            coda: slots.coda.to_owned(),
            tone: self.tone().map(str::to_owned),
            raw: slots.raw(),
            strict: self.strict_ipa(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_keeps_the_dialect() {
        for (dialect, text) in [
            (Dialect::Gan, "si2"),
            (Dialect::Cantonese, "gwaang2"),
            (Dialect::Korean, "관"),
            (Dialect::Vietnamese, "quốc"),
        ] {
            let parsed = Pronunciation::parse(dialect, text).unwrap();
            assert_eq!(parsed.dialect(), dialect);
            assert_eq!(parsed.reading().dialect, dialect);
        }
    }

    #[test]
    fn untoned_dialects_ignore_the_tone() {
        let ka = Pronunciation::from_parts(Dialect::Japanese, ["k", "", "a", ""], Some("1")).unwrap();
        assert_eq!(ka.tone(), None);
        assert_eq!(ka.render(&RenderStyle::default()), "カ");
    }

    #[test]
    fn unmarked_pinyin_agrees_with_a_stored_zero_tone() {
        let stored: Reading = serde_json::from_str(
            r#"{"dialect": "PM", "initial": "p", "medial": "", "nucleus": "a", "coda": "", "tone": "0"}"#,
        )
        .unwrap();
        let ba = Pronunciation::parse(Dialect::Mandarin, "ba").unwrap();
        assert!(ba.agrees_with(&stored));
        let ba4 = Pronunciation::parse(Dialect::Mandarin, "ba4").unwrap();
        assert!(!ba4.agrees_with(&stored));
    }
}
