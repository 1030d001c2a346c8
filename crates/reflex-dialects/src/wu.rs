//! Shanghai Wu (上海話) in the Wu Association romanisation.
//!
//! The inventory is an enumerated list of finals taken from Nyoeghau-style
//! IPA. Pinyin is produced by spelling rules and read back through a table
//! inverting those rules over the whole inventory; where two syllables are
//! spelled alike the first in inventory order keeps the spelling and the
//! other is rejected at construction.

use std::collections::HashMap;
use std::sync::LazyLock;

use reflex_core::diacritic::{nfc, split_tone_digit, superscript_to_digits};
use reflex_core::ipa::{StrictForm, NONE};
use reflex_core::{
    syllabic_nasal, Dialect, Orthography, Phonology, ReflexError, Slots, Tonal, Tone, ToneClass,
    ToneStyle, ToneTable, TonedSyllable,
};
use tracing::debug;

use crate::spelling::{append_tone, strict_nasal};

/// Marker type for Shanghai Wu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Wu;

/// 兒 `ɦəl`, outside the regular final inventory.
const ERHUA: Slots = Slots::new("ɦ", "", "ə", "l");

type Final = (&'static str, &'static str, &'static str);

/// Nyoeghau initials; `ʔ` marks the zero initial and `ɲ` is an allophone of `n`.
const NYOEGHAU_INITIALS: &[(&str, &str)] = &[
    ("ʔ", ""),
    ("p", "p"),
    ("pʰ", "pʰ"),
    ("b", "b"),
    ("m", "m"),
    ("f", "f"),
    ("v", "v"),
    ("t", "t"),
    ("tʰ", "tʰ"),
    ("d", "d"),
    ("n", "n"),
    ("ɲ", "n"),
    ("l", "l"),
    ("ts", "ts"),
    ("tsʰ", "tsʰ"),
    ("s", "s"),
    ("z", "z"),
    ("tɕ", "tɕ"),
    ("tɕʰ", "tɕʰ"),
    ("dʑ", "dʑ"),
    ("ɕ", "ɕ"),
    ("ʑ", "ʑ"),
    ("k", "k"),
    ("kʰ", "kʰ"),
    ("g", "g"),
    ("ŋ", "ŋ"),
    ("h", "h"),
    ("ɦ", "ɦ"),
];

/// Nyoeghau finals. Some rhymes the notation separates are merged.
const NYOEGHAU_FINALS: &[(&str, Final)] = &[
    ("a", ("", "a", "")),
    ("ã", ("", "a", "ŋ")),
    ("ɐʔ", ("", "a", "ʔ")),
    ("ɑ̃", ("", "ɑ", "ŋ")),
    ("ɑʔ", ("", "a", "ʔ")),
    ("ia", ("j", "a", "")),
    ("iã", ("j", "a", "ŋ")),
    ("iɑ̃", ("j", "ɑ", "ŋ")),
    ("iɐʔ", ("j", "a", "ʔ")),
    ("iɑʔ", ("j", "a", "ʔ")),
    ("ua", ("w", "a", "")),
    ("uã", ("w", "a", "ŋ")),
    ("uɑ̃", ("w", "ɑ", "ŋ")),
    ("uɐʔ", ("w", "a", "ʔ")),
    ("o", ("", "o", "")),
    ("ɔ", ("", "ɔ", "")),
    ("oŋ", ("", "o", "ŋ")),
    ("oʔ", ("", "o", "ʔ")),
    ("io", ("j", "o", "")),
    ("ioɲ", ("j", "o", "ŋ")),
    ("ioʔ", ("j", "o", "ʔ")),
    ("iɔ", ("j", "ɔ", "")),
    ("e", ("", "e", "")),
    ("ɤ", ("", "ɤ", "")),
    ("æ", ("", "æ", "")),
    ("əŋ", ("", "ə", "ŋ")),
    ("əʔ", ("", "ə", "ʔ")),
    ("ie", ("j", "e", "")),
    ("iɤ", ("j", "ɤ", "")),
    ("ue", ("w", "e", "")),
    ("uæ", ("w", "æ", "")),
    ("uəŋ", ("w", "ə", "ŋ")),
    ("uəʔ", ("w", "ə", "ʔ")),
    ("i", ("", "i", "")),
    ("iɪ", ("j", "i", "")),
    ("iɪʔ", ("", "i", "ʔ")),
    ("ɪɲ", ("", "i", "ŋ")),
    ("u", ("", "u", "")),
    ("y", ("", "y", "")),
    ("yɪɲ", ("ɥ", "i", "ŋ")),
    ("yɪʔ", ("ɥ", "i", "ʔ")),
    ("ø", ("", "ø", "")),
    ("yø", ("ɥ", "ø", "")),
    ("uø", ("w", "ø", "")),
    ("z̩", ("", "ɿ", "")),
];

const PINYIN_INITIALS: &[(&str, &str)] = &[
    ("tɕ", "c"),
    ("tɕʰ", "ch"),
    ("dʑ", "j"),
    ("ɕ", "sh"),
    ("ʑ", "zh"),
    ("ŋ", "ng"),
    ("ɦ", "gh"),
];
const PINYIN_MEDIALS: &[(&str, &str)] = &[("j", "i"), ("w", "u"), ("ɥ", "iu")];
const PINYIN_NUCLEI: &[(&str, &str)] = &[
    ("ɔ", "au"),
    ("ɑ", "au"),
    ("ɤ", "eu"),
    ("ə", "eu"),
    ("æ", "ae"),
    ("ø", "oe"),
    ("ɿ", "y"),
    ("y", "iu"),
];
const PINYIN_CODAS: &[(&str, &str)] = &[("ŋ", "n"), ("ʔ", "h")];

fn spelled(table: &[(&'static str, &'static str)], value: &'static str) -> &'static str {
    table
        .iter()
        .find(|(ipa, _)| *ipa == value)
        .map_or(value, |(_, spelling)| *spelling)
}

static TONES: ToneTable = ToneTable::new(
    &[
        Tone::neutral("0", "輕聲"),
        Tone::open("1", "陰平", None, ToneClass::Level),
        Tone::open("5", "陰去", None, ToneClass::Departing),
        Tone::open("6", "陽去", None, ToneClass::Departing),
        Tone::checked("7", "陰入", None),
        Tone::checked("8", "陽入", None),
    ],
    "0",
);

fn intern_initial(initial: &str) -> Option<&'static str> {
    NYOEGHAU_INITIALS
        .iter()
        .find(|(_, ipa)| *ipa == initial)
        .map(|(_, ipa)| *ipa)
}

fn intern_final(medial: &str, nucleus: &str, coda: &str) -> Option<Final> {
    NYOEGHAU_FINALS
        .iter()
        .find(|(_, (m, n, c))| *m == medial && *n == nucleus && *c == coda)
        .map(|(_, final_part)| *final_part)
}

/// Every regular syllable in inventory order.
fn regular_syllables() -> Vec<Slots> {
    let mut out = Vec::new();
    for &(_, initial) in NYOEGHAU_INITIALS {
        for &(_, (medial, nucleus, coda)) in NYOEGHAU_FINALS {
            let slots = Slots::new(initial, medial, nucleus, coda);
            if !out.contains(&slots) {
                out.push(slots);
            }
        }
    }
    out
}

/// Toneless romanisation.
fn spell(slots: &Slots) -> String {
    if *slots == ERHUA {
        return "r".to_owned();
    }
    let mut initial = spelled(PINYIN_INITIALS, slots.initial).replace('ʰ', "h");
    let medial = spelled(PINYIN_MEDIALS, slots.medial);
    let mut nucleus = spelled(PINYIN_NUCLEI, slots.nucleus);
    let coda = spelled(PINYIN_CODAS, slots.coda);
    if !coda.is_empty() {
        nucleus = match nucleus {
            "au" => "ao",
            "eu" => "e",
            other => other,
        };
    }
    let mut final_part = [medial, nucleus, coda].concat();
    if final_part == "iuoe" {
        final_part = "ioe".to_owned();
    }
    if initial == "gh" {
        for (head, glide) in [('u', "w"), ('i', "y")] {
            if final_part.starts_with(head) {
                initial = glide.to_owned();
                let vowel_follows = final_part[1..].starts_with(|ch: char| "aeoiu".contains(ch));
                if vowel_follows {
                    final_part.remove(0);
                }
            }
        }
    }
    if matches!(final_part.as_str(), "iuin" | "iuih") && !matches!(initial.as_str(), "" | "l" | "n") {
        final_part.remove(0);
    }
    initial + &final_part
}

/// Pinyin spelling → syllable, first spelling wins.
static PINYIN_PARSER: LazyLock<HashMap<String, Slots>> = LazyLock::new(|| {
    let syllables = regular_syllables();
    let mut parser: HashMap<String, Slots> = HashMap::with_capacity(syllables.len());
    for slots in syllables {
        let spelling = spell(&slots);
        if let Some(kept) = parser.get(&spelling) {
            debug!(%spelling, kept = %kept.raw(), dropped = %slots.raw(), "Wu spelling collision");
            continue;
        }
        parser.insert(spelling, slots);
    }
    debug!(entries = parser.len(), "built Wu pinyin parser");
    parser
});

/// Nyoeghau IPA → syllable, first reading wins.
static NYOEGHAU_PARSER: LazyLock<HashMap<String, Slots>> = LazyLock::new(|| {
    let mut parser = HashMap::new();
    for &(initial_text, initial) in NYOEGHAU_INITIALS {
        for &(final_text, (medial, nucleus, coda)) in NYOEGHAU_FINALS {
            parser
                .entry(nfc(&format!("{initial_text}{final_text}")))
                .or_insert(Slots::new(initial, medial, nucleus, coda));
        }
    }
    debug!(entries = parser.len(), "built Wu Nyoeghau parser");
    parser
});

impl Phonology for Wu {
    const DIALECT: Dialect = Dialect::Wu;
    const CHECKED_CODAS: &'static [&'static str] = &["ʔ"];

    fn check(initial: &str, medial: &str, nucleus: &str, coda: &str) -> Result<Slots, ReflexError> {
        if let Some(slots) = syllabic_nasal::<Self>(initial, medial, nucleus, coda) {
            return Ok(slots);
        }
        if ERHUA.as_tuple() == (initial, medial, nucleus, coda) {
            return Ok(ERHUA);
        }
        let raw = [initial, medial, nucleus, coda].concat();
        let initial = intern_initial(initial)
            .ok_or_else(|| ReflexError::illegal_slot(Self::DIALECT, "initial", initial, &raw))?;
        let (medial, nucleus, coda) = intern_final(medial, nucleus, coda).ok_or_else(|| {
            let final_part = [medial, nucleus, coda].concat();
            ReflexError::illegal_slot(Self::DIALECT, "final", &final_part, &raw)
        })?;
        let slots = Slots::new(initial, medial, nucleus, coda);
        if PINYIN_PARSER.get(&spell(&slots)) != Some(&slots) {
            return Err(ReflexError::illegal_final(
                Self::DIALECT,
                &slots.final_part(),
                &raw,
                "spelled like an earlier syllable",
            ));
        }
        Ok(slots)
    }

    fn candidates() -> Vec<Slots> {
        let mut out = regular_syllables();
        out.extend(Self::SYLLABIC_NASALS.iter().map(|nasal| Slots::new(nasal, "", "", "")));
        out.push(ERHUA);
        out
    }

    fn strict_ipa(slots: &Slots) -> String {
        if let Some(nasal) = strict_nasal::<Self>(slots) {
            return nasal;
        }
        let mut form = StrictForm::substitute(slots, &NONE);
        match (slots.nucleus, slots.coda) {
            ("a" | "ɑ", "ŋ") => {
                form.nucleus = nfc(&format!("{}\u{0303}", slots.nucleus));
                form.coda.clear();
            }
            (_, "ŋ") => form.coda = "ɴ".to_owned(),
            ("i", "ʔ") => form.nucleus = "ɪ".to_owned(),
            (_, "l") => form.coda = "ɭ".to_owned(),
            _ => {}
        }
        form.join()
    }
}

impl Tonal for Wu {
    fn tones() -> &'static ToneTable {
        &TONES
    }
}

fn split_tone(text: &str) -> (String, &'static str) {
    let normal = superscript_to_digits(text.trim());
    let (body, digit) = split_tone_digit(&normal);
    let tone = digit
        .and_then(reflex_core::diacritic::digit_str)
        .unwrap_or(TONES.neutral());
    (body.to_owned(), tone)
}

impl Orthography for Wu {
    type Value = TonedSyllable<Wu>;
    type Style = ToneStyle;

    fn render(value: &TonedSyllable<Wu>, style: ToneStyle) -> String {
        append_tone(spell(&value.slots()), value.tone(), style)
    }

    fn parse(text: &str) -> Result<TonedSyllable<Wu>, ReflexError> {
        let (body, tone) = split_tone(text);
        let slots = match body.as_str() {
            "m" => Slots::new("m", "", "", ""),
            "ng" => Slots::new("ŋ", "", "", ""),
            "r" => ERHUA,
            other => *PINYIN_PARSER
                .get(other)
                .ok_or_else(|| ReflexError::unparseable(Self::DIALECT, text))?,
        };
        TonedSyllable::new(slots.initial, slots.medial, slots.nucleus, slots.coda, tone)
            .map_err(|err| err.while_parsing(Self::DIALECT, text))
    }
}

impl Wu {
    /// Reads Nyoeghau-style IPA such as `ɦɑ̃6` or `ŋ̍6`; the zero initial is written `ʔ`.
    pub fn parse_nyoeghau(text: &str) -> Result<TonedSyllable<Wu>, ReflexError> {
        let (body, tone) = split_tone(text);
        let body = nfc(&body);
        let mut chars = body.chars();
        let slots = match (chars.next(), chars.next(), chars.next()) {
            (Some(nasal @ ('m' | 'ŋ')), Some('\u{0329}' | '\u{030D}'), None) => {
                let nasal = if nasal == 'm' { "m" } else { "ŋ" };
                Slots::new(nasal, "", "", "")
            }
            _ if body == "ɦəɭ" => ERHUA,
            _ => *NYOEGHAU_PARSER
                .get(&body)
                .ok_or_else(|| ReflexError::unparseable(Self::DIALECT, text))?,
        };
        TonedSyllable::new(slots.initial, slots.medial, slots.nucleus, slots.coda, tone)
            .map_err(|err| err.while_parsing(Self::DIALECT, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voiced_glottal_onset_becomes_a_written_glide() {
        let wang = TonedSyllable::<Wu>::new("ɦ", "w", "ɑ", "ŋ", "6").unwrap();
        assert_eq!(wang.render(ToneStyle::Numeral), "waon6");
        let yi = TonedSyllable::<Wu>::new("ɦ", "", "i", "", "6").unwrap();
        assert_eq!(yi.render(ToneStyle::Numeral), "yi6");
    }

    #[test]
    fn colliding_spelling_keeps_the_first_syllable() {
        TonedSyllable::<Wu>::new("ɦ", "j", "i", "", "6")
            .expect_err("ɦ + iɪ is spelled like ɦ + i");
    }

    #[test]
    fn erhua_has_its_own_spelling() {
        let er = Wu::parse("r6").unwrap();
        assert_eq!(er.slots(), ERHUA);
        assert_eq!(er.strict_ipa(), "ɦəɭ");
        assert_eq!(Wu::parse_nyoeghau("ɦəɭ⁶").unwrap(), er);
    }
}
