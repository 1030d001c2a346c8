//! Sino-Korean readings in Hangul and Revised Romanization.
//!
//! Korean vowels are read as one `(medial, nucleus)` bundle per vowel jamo,
//! so the medial is never free: `ㅘ` is `(w, a)` and `ㅢ` is `(ɰ, i)`.

use std::collections::HashMap;
use std::sync::LazyLock;

use reflex_core::ipa::{Allophones, StrictForm};
use reflex_core::{Dialect, Orthography, Phonology, ReflexError, Slots, Syllable};
use reflex_script::hangul::{compose_jamo, decompose_jamo, from_jamo};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Marker type for Korean.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Korean;

/// Output script for Korean.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KoreanScript {
    /// 한글.
    #[default]
    Hangul,
    /// Revised Romanization of Korean.
    Revised,
}

const INITIALS: &[(&str, char)] = &[
    ("", 'ㅇ'),
    ("p", 'ㅂ'),
    ("pʰ", 'ㅍ'),
    ("m", 'ㅁ'),
    ("t", 'ㄷ'),
    ("tʰ", 'ㅌ'),
    ("n", 'ㄴ'),
    ("l", 'ㄹ'),
    ("tɕ", 'ㅈ'),
    ("tɕʰ", 'ㅊ'),
    ("s", 'ㅅ'),
    ("ss", 'ㅆ'),
    ("k", 'ㄱ'),
    ("kʰ", 'ㅋ'),
    ("kk", 'ㄲ'),
    ("h", 'ㅎ'),
];

/// Vowel bundles; ㅒ does not occur in Sino-Korean.
const VOWELS: &[((&str, &str), char)] = &[
    (("", "a"), 'ㅏ'),
    (("j", "a"), 'ㅑ'),
    (("w", "a"), 'ㅘ'),
    (("", "ɛ"), 'ㅐ'),
    (("w", "ɛ"), 'ㅙ'),
    (("", "e"), 'ㅔ'),
    (("j", "e"), 'ㅖ'),
    (("w", "e"), 'ㅞ'),
    (("", "ʌ"), 'ㅓ'),
    (("j", "ʌ"), 'ㅕ'),
    (("w", "ʌ"), 'ㅝ'),
    (("", "o"), 'ㅗ'),
    (("j", "o"), 'ㅛ'),
    (("", "u"), 'ㅜ'),
    (("j", "u"), 'ㅠ'),
    (("", "i"), 'ㅣ'),
    (("w", "i"), 'ㅟ'),
    (("", "ɯ"), 'ㅡ'),
    (("ɰ", "i"), 'ㅢ'),
    (("", "ø"), 'ㅚ'),
];

const CODAS: &[(&str, Option<char>)] = &[
    ("", None),
    ("m", Some('ㅁ')),
    ("n", Some('ㄴ')),
    ("ŋ", Some('ㅇ')),
    ("p", Some('ㅂ')),
    ("l", Some('ㄹ')),
    ("k", Some('ㄱ')),
];

const ALLOPHONES: Allophones = Allophones {
    initial: &[("l", "ɾ"), ("ss", "s͈"), ("kk", "k͈")],
    nucleus: &[],
    coda: &[("l", "ɭ")],
};

const ROMAN_INITIALS: &[(&str, &str)] = &[
    ("p", "b"),
    ("pʰ", "p"),
    ("t", "d"),
    ("tʰ", "t"),
    ("l", "r"),
    ("tɕ", "j"),
    ("tɕʰ", "ch"),
    ("k", "g"),
    ("kʰ", "k"),
];
const ROMAN_NUCLEI: &[(&str, &str)] = &[("ɛ", "ae"), ("ʌ", "eo"), ("ɯ", "eu"), ("ø", "oe")];

fn roman(table: &[(&'static str, &'static str)], value: &'static str) -> &'static str {
    table
        .iter()
        .find(|(ipa, _)| *ipa == value)
        .map_or(value, |(_, spelling)| *spelling)
}

fn romanize(slots: &Slots) -> String {
    let vowel = match (slots.medial, slots.nucleus) {
        ("w", "ʌ") => "wo".to_owned(),
        ("ɰ", "i") => "ui".to_owned(),
        (medial, nucleus) => {
            let medial = if medial == "j" { "y" } else { medial };
            [medial, roman(ROMAN_NUCLEI, nucleus)].concat()
        }
    };
    let coda = if slots.coda == "ŋ" { "ng" } else { slots.coda };
    [roman(ROMAN_INITIALS, slots.initial), vowel.as_str(), coda].concat()
}

fn hangul(slots: &Slots) -> Option<char> {
    let lead = INITIALS.iter().find(|(ipa, _)| *ipa == slots.initial)?.1;
    let vowel = VOWELS
        .iter()
        .find(|((medial, nucleus), _)| *medial == slots.medial && *nucleus == slots.nucleus)?
        .1;
    let trail = CODAS.iter().find(|(ipa, _)| *ipa == slots.coda)?.1;
    compose_jamo(lead, vowel, trail)
}

fn all_syllables() -> impl Iterator<Item = Slots> {
    INITIALS.iter().flat_map(|&(initial, _)| {
        VOWELS.iter().flat_map(move |&((medial, nucleus), _)| {
            CODAS
                .iter()
                .map(move |&(coda, _)| Slots::new(initial, medial, nucleus, coda))
        })
    })
}

/// Revised Romanization → syllable, first spelling wins.
static ROMAN_PARSER: LazyLock<HashMap<String, Slots>> = LazyLock::new(|| {
    let mut parser = HashMap::new();
    for slots in all_syllables() {
        let spelling = romanize(&slots);
        if let Some(kept) = parser.get(&spelling) {
            debug!(%spelling, kept = %Slots::raw(kept), dropped = %slots.raw(), "Korean spelling collision");
            continue;
        }
        parser.insert(spelling, slots);
    }
    debug!(entries = parser.len(), "built Korean romanisation parser");
    parser
});

impl Phonology for Korean {
    const DIALECT: Dialect = Dialect::Korean;
    const SYLLABIC_NASALS: &'static [&'static str] = &[];
    const CHECKED_CODAS: &'static [&'static str] = &["p", "l", "k"];

    fn check(initial: &str, medial: &str, nucleus: &str, coda: &str) -> Result<Slots, ReflexError> {
        let raw = [initial, medial, nucleus, coda].concat();
        let initial = INITIALS
            .iter()
            .find(|(ipa, _)| *ipa == initial)
            .ok_or_else(|| ReflexError::illegal_slot(Self::DIALECT, "initial", initial, &raw))?
            .0;
        let (medial, nucleus) = VOWELS
            .iter()
            .find(|((m, n), _)| *m == medial && *n == nucleus)
            .ok_or_else(|| {
                let vowel = [medial, nucleus].concat();
                ReflexError::illegal_slot(Self::DIALECT, "nucleus", &vowel, &raw)
            })?
            .0;
        let coda = CODAS
            .iter()
            .find(|(ipa, _)| *ipa == coda)
            .ok_or_else(|| ReflexError::illegal_slot(Self::DIALECT, "coda", coda, &raw))?
            .0;
        Ok(Slots::new(initial, medial, nucleus, coda))
    }

    fn candidates() -> Vec<Slots> {
        all_syllables().collect()
    }

    fn strict_ipa(slots: &Slots) -> String {
        StrictForm::substitute(slots, &ALLOPHONES).join()
    }
}

impl Orthography for Korean {
    type Value = Syllable<Korean>;
    type Style = KoreanScript;

    fn render(value: &Syllable<Korean>, style: KoreanScript) -> String {
        let slots = value.slots();
        match style {
            KoreanScript::Hangul => hangul(&slots).map_or_else(|| slots.raw(), String::from),
            KoreanScript::Revised => romanize(&slots),
        }
    }

    /// Accepts one Hangul syllable, its compatibility jamo, or a romanisation.
    fn parse(text: &str) -> Result<Syllable<Korean>, ReflexError> {
        let trimmed = text.trim();
        let composed = from_jamo(trimmed);
        let mut chars = composed.chars();
        let slots = match (chars.next().and_then(decompose_jamo), chars.next()) {
            (Some((lead, vowel, trail)), None) => {
                let initial = INITIALS.iter().find(|(_, jamo)| *jamo == lead);
                let bundle = VOWELS.iter().find(|(_, jamo)| *jamo == vowel);
                let coda = CODAS.iter().find(|(_, jamo)| *jamo == trail);
                match (initial, bundle, coda) {
                    (Some((initial, _)), Some(((medial, nucleus), _)), Some((coda, _))) => {
                        Slots::new(initial, medial, nucleus, coda)
                    }
                    _ => return Err(ReflexError::unparseable(Self::DIALECT, text)),
                }
            }
            _ => *ROMAN_PARSER
                .get(&trimmed.to_lowercase())
                .ok_or_else(|| ReflexError::unparseable(Self::DIALECT, text))?,
        };
        Syllable::from_slots(slots).map_err(|err| err.while_parsing(Self::DIALECT, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hangul_and_romanisation_agree() {
        let gwan = Syllable::<Korean>::parse("관").unwrap();
        assert_eq!(gwan.slots(), Slots::new("k", "w", "a", "n"));
        assert_eq!(gwan.render(KoreanScript::Revised), "gwan");
        assert_eq!(Syllable::<Korean>::parse("gwan").unwrap(), gwan);
        assert_eq!(Syllable::<Korean>::parse("ㄱㅘㄴ").unwrap(), gwan);
    }

    #[test]
    fn liquid_is_a_flap_initially_and_retroflex_finally() {
        let lyul = Syllable::<Korean>::new("l", "j", "u", "l").unwrap();
        assert_eq!(lyul.render(KoreanScript::Hangul), "률");
        assert_eq!(lyul.render(KoreanScript::Revised), "ryul");
        assert_eq!(lyul.strict_ipa(), "ɾjuɭ");
    }

    #[test]
    fn yae_is_outside_the_inventory() {
        Syllable::<Korean>::parse("얘").expect_err("ㅒ has no bundle");
    }
}
