//! Fuzhou Gan (撫州話) in Gan pinyin.
//!
//! Tones are written either as a trailing numeral or as a diacritic over the
//! nucleus. The diacritic set is shared: 陽去 and 陰入 reuse the 陰平 macron,
//! 陽入 the 上聲 circumflex, so diacritic input reads as 1/2/3/5 and checked
//! syllables are remapped afterwards (1→7, 3→8). Tone 6 needs a numeral.

use std::sync::LazyLock;

use reflex_core::diacritic::{
    attach_mark_at, digit_str, split_tone_digit, strip_mark, ACUTE, CIRCUMFLEX, GRAVE, MACRON,
};
use reflex_core::ipa::{StrictForm, NONE};
use reflex_core::{
    syllabic_nasal, write_tone, Dialect, Orthography, Phonology, ReflexError, Slots, Tonal, Tone,
    ToneClass, ToneStyle, ToneTable, TonedSyllable,
};

use crate::spelling::{split_final, split_ipa_tone, strict_nasal, Inventory};

/// Marker type for Fuzhou Gan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Gan;

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
            ("k", "g"),
            ("kʰ", "k"),
            ("ŋ", "ng"),
            ("h", "h"),
            ("tɕ", "j"),
            ("tɕʰ", "q"),
            ("ɕ", "x"),
            ("ts", "z"),
            ("tsʰ", "c"),
            ("s", "s"),
        ],
        &[("", ""), ("j", "i"), ("w", "u"), ("ɥ", "y")],
        &[
            ("a", "a"),
            ("o", "o"),
            ("ɛ", "e"),
            ("i", "i"),
            ("ɿ", "i"),
            ("u", "u"),
            ("y", "y"),
        ],
        &[
            ("", ""),
            ("i", "i"),
            ("u", "u"),
            ("n", "n"),
            ("ŋ", "ng"),
            ("t", "t"),
            ("ʔ", "h"),
        ],
    )
});

static TONES: ToneTable = ToneTable::new(
    &[
        Tone::neutral("0", "輕聲"),
        Tone::open("1", "陰平", Some(MACRON), ToneClass::Level),
        Tone::open("2", "陽平", Some(ACUTE), ToneClass::Level),
        Tone::open("3", "上聲", Some(CIRCUMFLEX), ToneClass::Rising),
        Tone::open("5", "陰去", Some(GRAVE), ToneClass::Departing),
        Tone::open("6", "陽去", Some(MACRON), ToneClass::Departing),
        Tone::checked("7", "陰入", Some(MACRON)),
        Tone::checked("8", "陽入", Some(CIRCUMFLEX)),
    ],
    "0",
);

/// Onsets after which a bare `i` is the apical vowel ɿ.
const APICAL_ONSETS: [&str; 4] = ["ts", "tsʰ", "s", "l"];

fn apical_onset(slots: &Slots) -> bool {
    slots.medial.is_empty() && APICAL_ONSETS.contains(&slots.initial)
}

/// Finals the pinyin would read back as a different split.
fn phonotactics(slots: &Slots) -> Result<(), &'static str> {
    match (slots.medial, slots.nucleus, slots.coda) {
        ("j", "i", _) | ("w", "u", _) | ("ɥ", "y", _) => Err("glide repeats the nucleus"),
        ("ɥ", "i" | "u", "") => Err("reads back as y with a glide coda"),
        ("", "i", "u") | ("", "u", "i") | (_, "ɿ", "u") => {
            Err("reads back as a glide and a vowel")
        }
        (_, "ɿ", _) if !apical_onset(slots) => Err("ɿ only follows ts, tsʰ, s or l"),
        (_, "i", _) if apical_onset(slots) => Err("i after ts, tsʰ, s or l is ɿ"),
        _ => Ok(()),
    }
}

fn checked_remap(tone: &'static str) -> &'static str {
    match tone {
        "1" => "7",
        "3" => "8",
        other => other,
    }
}

impl Phonology for Gan {
    const DIALECT: Dialect = Dialect::Gan;

    fn check(initial: &str, medial: &str, nucleus: &str, coda: &str) -> Result<Slots, ReflexError> {
        if let Some(slots) = syllabic_nasal::<Self>(initial, medial, nucleus, coda) {
            return Ok(slots);
        }
        let slots = INVENTORY.intern(Self::DIALECT, initial, medial, nucleus, coda)?;
        phonotactics(&slots).map_err(|reason| {
            ReflexError::illegal_final(Self::DIALECT, &slots.final_part(), &slots.raw(), reason)
        })?;
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
        if slots.initial == "n"
            && (matches!(slots.medial, "j" | "ɥ") || matches!(slots.nucleus, "i" | "y"))
        {
            form.initial = "ɲ".to_owned();
        }
        form.join()
    }
}

impl Tonal for Gan {
    fn tones() -> &'static ToneTable {
        &TONES
    }
}

impl Orthography for Gan {
    type Value = TonedSyllable<Gan>;
    type Style = ToneStyle;

    fn render(value: &TonedSyllable<Gan>, style: ToneStyle) -> String {
        let [initial, medial, nucleus, coda] = INVENTORY.spell(&value.slots());
        if value.is_syllabic_nasal() {
            return write_tone(initial.to_owned(), value.tone_info(), style, |text, mark| {
                attach_mark_at(&text, 0, mark)
            });
        }
        let position = [initial, medial, nucleus]
            .iter()
            .map(|part| part.chars().count())
            .sum::<usize>()
            .saturating_sub(1);
        write_tone(
            [initial, medial, nucleus, coda].concat(),
            value.tone_info(),
            style,
            |text, mark| attach_mark_at(&text, position, mark),
        )
    }

    fn parse(text: &str) -> Result<TonedSyllable<Gan>, ReflexError> {
        let (body, mark) = strip_mark(text.trim(), |ch| TONES.is_mark(ch));
        let mut tone = mark
            .and_then(|mark| TONES.by_mark(mark))
            .map_or(TONES.neutral(), |tone| tone.code);
        let (body, digit) = split_tone_digit(&body);
        if let Some(code) = digit.and_then(digit_str) {
            tone = code;
        }
        if body.is_empty() {
            return Err(ReflexError::unparseable(Self::DIALECT, text));
        }

        let (initial, rest) = match INVENTORY.initial.spelled_prefix(body, 2) {
            Some((_, spelled)) => body.split_at(spelled.len()),
            None => ("", body),
        };
        let (medial, nucleus, coda) = if rest.is_empty() {
            ("", "", "")
        } else {
            split_final(rest, true, |tail| INVENTORY.coda.ipa(tail).is_some(), &["iu", "ui"])
        };
        let [initial, medial, mut nucleus, coda] = if rest.is_empty() {
            let nasal = INVENTORY
                .initial
                .ipa(initial)
                .ok_or_else(|| ReflexError::unparseable(Self::DIALECT, text))?;
            [nasal, "", "", ""]
        } else {
            INVENTORY.read(Self::DIALECT, text, [initial, medial, nucleus, coda])?
        };
        if nucleus == "i" && medial.is_empty() && APICAL_ONSETS.contains(&initial) {
            nucleus = "ɿ";
        }
        if Self::CHECKED_CODAS.contains(&coda) {
            tone = checked_remap(tone);
        }
        TonedSyllable::new(initial, medial, nucleus, coda, tone)
            .map_err(|err| err.while_parsing(Self::DIALECT, text))
    }
}

impl Gan {
    /// Reads raw IPA with a mandatory trailing tone digit, e.g. `tɕʰjaŋ3`.
    pub fn parse_ipa(text: &str) -> Result<TonedSyllable<Gan>, ReflexError> {
        let (body, tone) = split_ipa_tone(Self::DIALECT, text)?;
        let initial = INVENTORY.initial.ipa_prefix(&body, 3).unwrap_or("");
        let rest = &body[initial.len()..];
        let (medial, nucleus, coda) = split_final(
            rest,
            false,
            |tail| INVENTORY.coda.intern(tail).is_some(),
            &["ju", "wi", "ɥi"],
        );
        TonedSyllable::new(initial, medial, nucleus, coda, tone)
            .map_err(|err| err.while_parsing(Self::DIALECT, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apical_vowel_is_read_from_plain_i() {
        let syllable = Gan::parse("si2").unwrap();
        assert_eq!(syllable.nucleus(), "ɿ");
        assert_eq!(syllable.render(ToneStyle::Numeral), "si2");
        assert_eq!(Gan::parse("xi2").unwrap().nucleus(), "i");
    }

    #[test]
    fn apical_vowel_takes_no_u_coda() {
        let syllable = Gan::parse("liu1").unwrap();
        assert_eq!(
            (syllable.initial(), syllable.medial(), syllable.nucleus(), syllable.coda()),
            ("l", "j", "u", "")
        );
        let err = TonedSyllable::<Gan>::new("l", "", "ɿ", "u", "1").expect_err("ɿu is not spellable");
        match err {
            ReflexError::InvalidSyllable(info) => assert_eq!(info.code, "illegal-final"),
            other => panic!("unexpected error variant: {:?}", other),
        }
    }

    #[test]
    fn syllabic_nasal_carries_the_mark_on_its_first_letter() {
        let syllable = TonedSyllable::<Gan>::new("ŋ", "", "", "", "2").unwrap();
        assert_eq!(syllable.render(ToneStyle::Diacritic), "ńg");
        assert_eq!(Gan::parse("ńg").unwrap(), syllable);
        assert_eq!(Gan::parse("ng2").unwrap(), syllable);
    }
}
