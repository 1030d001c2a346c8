//! Guangzhou Cantonese (廣州話) in Jyutping.
//!
//! Jyutping writes the checked tones 7/8/9 with the digits of their open
//! counterparts 1/3/6; [`CantoneseStyle::separate_checked_tone`] keeps the
//! distinct digits instead. Jyutping `j` and `w` are medials here, so `jaa`
//! is `("", j, a, "")` and `gwaang` is `(k, w, a, ŋ)`.

use std::sync::LazyLock;

use reflex_core::ipa::{StrictForm, NONE};
use reflex_core::{
    syllabic_nasal, Dialect, Orthography, Phonology, ReflexError, Slots, Tonal, Tone, ToneClass,
    ToneStyle, ToneTable, TonedSyllable,
};
use serde::{Deserialize, Serialize};

use crate::spelling::{append_tone, strict_nasal, Inventory};

/// Marker type for Guangzhou Cantonese.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cantonese;

/// Jyutping output options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CantoneseStyle {
    /// Whether to write the tone digit.
    #[serde(default)]
    pub tone: ToneStyle,
    /// Write checked tones as 7/8/9 rather than 1/3/6.
    #[serde(default)]
    pub separate_checked_tone: bool,
}

static INVENTORY: LazyLock<Inventory> = LazyLock::new(|| {
    Inventory::new(
        &[
            ("", ""),
            ("p", "b"),
            ("pʰ", "p"),
            ("m", "m"),
            ("f", "f"),
            ("t", "d"),
            ("tʰ", "t"),
            ("n", "n"),
            ("l", "l"),
            ("ts", "z"),
            ("tsʰ", "c"),
            ("s", "s"),
            ("k", "g"),
            ("kʰ", "k"),
            ("ŋ", "ng"),
            ("h", "h"),
        ],
        &[("", ""), ("j", "j"), ("w", "w")],
        &[
            ("a", "aa"),
            ("ɐ", "a"),
            ("ɛ", "e"),
            ("i", "i"),
            ("ɔ", "o"),
            ("u", "u"),
            ("œ", "eo"),
            ("œ", "oe"),
            ("y", "yu"),
        ],
        &[
            ("", ""),
            ("i", "i"),
            ("u", "u"),
            ("m", "m"),
            ("n", "n"),
            ("ŋ", "ng"),
            ("p", "p"),
            ("t", "t"),
            ("k", "k"),
        ],
    )
});

static TONES: ToneTable = ToneTable::new(
    &[
        Tone::neutral("0", "輕聲"),
        Tone::open("1", "陰平", None, ToneClass::Level),
        Tone::open("2", "陰上", None, ToneClass::Rising),
        Tone::open("3", "陰去", None, ToneClass::Departing),
        Tone::open("4", "陽平", None, ToneClass::Level),
        Tone::open("5", "陽上", None, ToneClass::Rising),
        Tone::open("6", "陽去", None, ToneClass::Departing),
        Tone::checked("7", "高陰入", None),
        Tone::checked("8", "低陰入", None),
        Tone::checked("9", "陽入", None),
    ],
    "0",
);

/// Open tone written for each checked tone, and back.
const CHECKED_DIGITS: [(&str, &str); 3] = [("1", "7"), ("3", "8"), ("6", "9")];

fn to_checked(tone: &'static str) -> &'static str {
    CHECKED_DIGITS
        .iter()
        .find(|(open, _)| *open == tone)
        .map_or(tone, |(_, checked)| checked)
}

fn from_checked(tone: &'static str) -> &'static str {
    CHECKED_DIGITS
        .iter()
        .find(|(_, checked)| *checked == tone)
        .map_or(tone, |(open, _)| open)
}

impl Phonology for Cantonese {
    const DIALECT: Dialect = Dialect::Cantonese;
    const CHECKED_CODAS: &'static [&'static str] = &["p", "t", "k"];

    fn check(initial: &str, medial: &str, nucleus: &str, coda: &str) -> Result<Slots, ReflexError> {
        if let Some(slots) = syllabic_nasal::<Self>(initial, medial, nucleus, coda) {
            return Ok(slots);
        }
        let slots = INVENTORY.intern(Self::DIALECT, initial, medial, nucleus, coda)?;
        if matches!((slots.medial, slots.nucleus), ("j", "i") | ("w", "u")) {
            return Err(ReflexError::illegal_final(
                Self::DIALECT,
                &slots.final_part(),
                &slots.raw(),
                "glide repeats the nucleus",
            ));
        }
        Ok(slots)
    }

    fn candidates() -> Vec<Slots> {
        INVENTORY.candidates::<Self>()
    }

    fn strict_ipa(slots: &Slots) -> String {
        if let Some(nasal) = strict_nasal::<Self>(slots) {
            return nasal;
        }
        let mut form = StrictForm::substitute(slots, &NONE);
        if slots.nucleus != "ɐ" {
            form.nucleus.push('ː');
        }
        match (slots.nucleus, slots.coda) {
            ("ɛ", "i") => form.nucleus = "e".to_owned(),
            ("ɔ", "u") => form.nucleus = "o".to_owned(),
            ("i", "ŋ" | "k") => form.nucleus = "ɪ".to_owned(),
            ("u", "ŋ" | "k") => form.nucleus = "ʊ".to_owned(),
            ("œ", "i") => {
                form.nucleus = "ɵ".to_owned();
                form.coda = "ʏ".to_owned();
            }
            ("œ", "n" | "t") => form.nucleus = "ɵ".to_owned(),
            _ => {}
        }
        form.join()
    }
}

impl Tonal for Cantonese {
    fn tones() -> &'static ToneTable {
        &TONES
    }
}

impl Orthography for Cantonese {
    type Value = TonedSyllable<Cantonese>;
    type Style = CantoneseStyle;

    fn render(value: &TonedSyllable<Cantonese>, style: CantoneseStyle) -> String {
        let tone = if value.is_checked() && !style.separate_checked_tone {
            from_checked(value.tone())
        } else {
            value.tone()
        };
        let [initial, mut medial, mut nucleus, coda] = INVENTORY.spell(&value.slots());
        if value.is_syllabic_nasal() {
            return append_tone(initial.to_owned(), tone, style.tone);
        }
        if initial.is_empty() && medial.is_empty() {
            match (nucleus, coda) {
                ("i", _) => medial = "j",
                ("u", "ng" | "k") => {}
                ("u", _) => medial = "w",
                _ => {}
            }
        }
        if nucleus == "eo" && !matches!(coda, "i" | "n" | "t") {
            nucleus = "oe";
        }
        append_tone([initial, medial, nucleus, coda].concat(), tone, style.tone)
    }

    fn parse(text: &str) -> Result<TonedSyllable<Cantonese>, ReflexError> {
        let trimmed = text.trim();
        let (body, mut tone) = match trimmed.char_indices().last() {
            Some((idx, last)) if last.is_ascii_digit() => (
                &trimmed[..idx],
                reflex_core::diacritic::digit_str(last).unwrap_or("0"),
            ),
            _ => (trimmed, TONES.neutral()),
        };
        let built = match body {
            "m" | "ng" => {
                let nasal = INVENTORY.initial.ipa(body).unwrap_or("m");
                TonedSyllable::new(nasal, "", "", "", tone)
            }
            _ => {
                let (initial, spelled) = INVENTORY
                    .initial
                    .spelled_prefix(body, 2)
                    .ok_or_else(|| ReflexError::unparseable(Self::DIALECT, text))?;
                let rest = &body[spelled.len()..];
                let (mut medial, rest) = match rest.chars().next() {
                    Some('j') => ("j", &rest[1..]),
                    Some('w') => ("w", &rest[1..]),
                    _ => ("", rest),
                };
                let (nucleus, coda) = INVENTORY
                    .split_rhyme(rest, 2)
                    .ok_or_else(|| ReflexError::unparseable(Self::DIALECT, text))?;
                if matches!((medial, nucleus), ("j", "i") | ("w", "u")) {
                    medial = "";
                }
                if Self::CHECKED_CODAS.contains(&coda) {
                    tone = to_checked(tone);
                }
                TonedSyllable::new(initial, medial, nucleus, coda, tone)
            }
        };
        built.map_err(|err| err.while_parsing(Self::DIALECT, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_tones_share_open_digits_by_default() {
        let syllable = TonedSyllable::<Cantonese>::new("s", "", "ɐ", "p", "9").unwrap();
        assert_eq!(syllable.render(CantoneseStyle::default()), "sap6");
        let separate = CantoneseStyle {
            separate_checked_tone: true,
            ..CantoneseStyle::default()
        };
        assert_eq!(syllable.render(separate), "sap9");
        assert_eq!(Cantonese::parse("sap6").unwrap(), syllable);
        assert_eq!(Cantonese::parse("sap9").unwrap(), syllable);
    }

    #[test]
    fn zero_initial_high_vowels_take_a_written_glide() {
        let ji = TonedSyllable::<Cantonese>::new("", "", "i", "", "1").unwrap();
        assert_eq!(ji.render(CantoneseStyle::default()), "ji1");
        assert_eq!(Cantonese::parse("ji1").unwrap(), ji);
        let ung = TonedSyllable::<Cantonese>::new("", "", "u", "ŋ", "3").unwrap();
        assert_eq!(ung.render(CantoneseStyle::default()), "ung3");
    }

    #[test]
    fn rounded_front_vowel_spelling_follows_the_coda() {
        let eoi = TonedSyllable::<Cantonese>::new("h", "", "œ", "i", "1").unwrap();
        let oeng = TonedSyllable::<Cantonese>::new("h", "", "œ", "ŋ", "1").unwrap();
        assert_eq!(eoi.render(CantoneseStyle::default()), "heoi1");
        assert_eq!(oeng.render(CantoneseStyle::default()), "hoeng1");
        assert_eq!(eoi.strict_ipa(), "hɵʏ");
    }
}
