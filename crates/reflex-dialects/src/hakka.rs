//! Meixian Hakka (梅縣話) in Taiwanese-style Hakka pinyin.
//!
//! Both apical vowels ɿ and ə are written `ii`; ə only occurs before a coda
//! and ɿ only without one. Plain `i` with an `i` coda would spell the same
//! `ii`, so that final is excluded. Checked tones
//! are 5 (陰入) and 6 (陽入) on `p`/`t`/`k` codas.

use std::sync::LazyLock;

use reflex_core::diacritic::{digit_str, split_tone_digit};
use reflex_core::ipa::{StrictForm, NONE};
use reflex_core::{
    syllabic_nasal, Dialect, Orthography, Phonology, ReflexError, Slots, Tonal, Tone, ToneClass,
    ToneStyle, ToneTable, TonedSyllable,
};

use crate::spelling::{append_tone, split_final, split_ipa_tone, strict_nasal, Inventory};

/// Marker type for Meixian Hakka.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hakka;

static INVENTORY: LazyLock<Inventory> = LazyLock::new(|| {
    Inventory::new(
        &[
            ("", ""),
            ("p", "b"),
            ("pʰ", "p"),
            ("m", "m"),
            ("f", "f"),
            ("v", "v"),
            ("t", "d"),
            ("tʰ", "t"),
            ("n", "n"),
            ("l", "l"),
            ("k", "g"),
            ("kʰ", "k"),
            ("ŋ", "ng"),
            ("h", "h"),
            ("ts", "z"),
            ("tsʰ", "c"),
            ("s", "s"),
        ],
        &[("", ""), ("j", "i"), ("w", "u")],
        &[
            ("a", "a"),
            ("o", "o"),
            ("e", "e"),
            ("i", "i"),
            ("ɿ", "ii"),
            ("ə", "ii"),
            ("u", "u"),
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
        Tone::open("2", "陽平", None, ToneClass::Level),
        Tone::open("3", "上聲", None, ToneClass::Rising),
        Tone::open("4", "去聲", None, ToneClass::Departing),
        Tone::checked("5", "陰入", None),
        Tone::checked("6", "陽入", None),
    ],
    "0",
);

/// Initials fronted before the `j` glide in strict IPA.
const PALATALIZED: [(&str, &str); 4] = [("k", "c"), ("kʰ", "cʰ"), ("h", "ç"), ("ŋ", "ɲ")];

fn phonotactics(slots: &Slots) -> Result<(), &'static str> {
    match (slots.medial, slots.nucleus, slots.coda) {
        ("j", "i", _) | ("w", "u", _) => Err("glide repeats the nucleus"),
        ("", "i", "u") | ("", "u", "i") => Err("reads back as a glide and a vowel"),
        (_, "i", "i") => Err("reads back as ɿ"),
        (medial, "ɿ", coda) if !medial.is_empty() || !coda.is_empty() => {
            Err("ɿ takes neither a glide nor a coda")
        }
        (medial, "ə", coda) if !medial.is_empty() || coda.is_empty() => {
            Err("ə needs a coda and takes no glide")
        }
        _ => Ok(()),
    }
}

impl Phonology for Hakka {
    const DIALECT: Dialect = Dialect::Hakka;
    const CHECKED_CODAS: &'static [&'static str] = &["p", "t", "k"];

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
        if slots.initial == "v" {
            form.initial = "ʋ".to_owned();
        }
        if slots.medial == "j" {
            if let Some((_, fronted)) = PALATALIZED.iter().find(|(plain, _)| *plain == slots.initial) {
                form.initial = (*fronted).to_owned();
            }
        }
        form.join()
    }
}

impl Tonal for Hakka {
    fn tones() -> &'static ToneTable {
        &TONES
    }
}

impl Orthography for Hakka {
    type Value = TonedSyllable<Hakka>;
    type Style = ToneStyle;

    fn render(value: &TonedSyllable<Hakka>, style: ToneStyle) -> String {
        let [initial, medial, nucleus, coda] = INVENTORY.spell(&value.slots());
        if value.is_syllabic_nasal() {
            return append_tone(initial.to_owned(), value.tone(), style);
        }
        append_tone([initial, medial, nucleus, coda].concat(), value.tone(), style)
    }

    fn parse(text: &str) -> Result<TonedSyllable<Hakka>, ReflexError> {
        let (body, digit) = split_tone_digit(text.trim());
        let tone = digit.and_then(digit_str).unwrap_or(TONES.neutral());
        if body.is_empty() {
            return Err(ReflexError::unparseable(Self::DIALECT, text));
        }
        let (initial, rest) = match INVENTORY.initial.spelled_prefix(body, 2) {
            Some((_, spelled)) => body.split_at(spelled.len()),
            None => ("", body),
        };
        let [initial, medial, mut nucleus, coda] = if rest.is_empty() {
            let nasal = INVENTORY
                .initial
                .ipa(initial)
                .ok_or_else(|| ReflexError::unparseable(Self::DIALECT, text))?;
            [nasal, "", "", ""]
        } else {
            let (medial, nucleus, coda) = match rest.strip_prefix("ii") {
                Some(coda) => ("", "ii", coda),
                None => split_final(rest, true, |tail| INVENTORY.coda.ipa(tail).is_some(), &["iu", "ui"]),
            };
            INVENTORY.read(Self::DIALECT, text, [initial, medial, nucleus, coda])?
        };
        if nucleus == "ɿ" && !coda.is_empty() {
            nucleus = "ə";
        }
        TonedSyllable::new(initial, medial, nucleus, coda, tone)
            .map_err(|err| err.while_parsing(Self::DIALECT, text))
    }
}

impl Hakka {
    /// Reads raw IPA in the traditional eight-tone numbering, e.g. `kʰjuŋ2`
    /// or `kwet7`. Tones 5, 7 and 8 become 4, 5 and 6.
    pub fn parse_ipa(text: &str) -> Result<TonedSyllable<Hakka>, ReflexError> {
        let (body, tone) = split_ipa_tone(Self::DIALECT, text)?;
        let initial = INVENTORY.initial.ipa_prefix(&body, 3).unwrap_or("");
        let rest = &body[initial.len()..];
        let (medial, nucleus, coda) = split_final(
            rest,
            false,
            |tail| INVENTORY.coda.intern(tail).is_some(),
            &["iu", "ui", "ju", "wi"],
        );
        let medial = match medial {
            "i" => "j",
            "u" => "w",
            other => other,
        };
        let tone = match tone {
            "5" => "4",
            "7" => "5",
            "8" => "6",
            other => other,
        };
        TonedSyllable::new(initial, medial, nucleus, coda, tone)
            .map_err(|err| err.while_parsing(Self::DIALECT, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubled_i_reads_by_coda() {
        let sii = Hakka::parse("sii1").unwrap();
        assert_eq!(sii.nucleus(), "ɿ");
        let siim = Hakka::parse("siim1").unwrap();
        assert_eq!(siim.nucleus(), "ə");
        assert_eq!(siim.render(ToneStyle::Numeral), "siim1");
    }

    #[test]
    fn doubled_i_is_never_i_with_an_i_coda() {
        let sii = Hakka::parse("sii1").unwrap();
        assert_eq!(
            (sii.initial(), sii.medial(), sii.nucleus(), sii.coda()),
            ("s", "", "ɿ", "")
        );
        let err = TonedSyllable::<Hakka>::new("s", "", "i", "i", "1")
            .expect_err("i with an i coda is spelled like ɿ");
        match err {
            ReflexError::InvalidSyllable(info) => assert_eq!(info.code, "illegal-final"),
            other => panic!("unexpected error variant: {:?}", other),
        }
    }

    #[test]
    fn raw_ipa_uses_eight_tone_numbering() {
        let kwet = Hakka::parse_ipa("kwet⁷").unwrap();
        assert_eq!((kwet.medial(), kwet.tone()), ("w", "5"));
        assert_eq!(Hakka::parse_ipa("sɿ5").unwrap().tone(), "4");
    }

    #[test]
    fn glide_fronts_velars_in_strict_ipa() {
        let kiang = TonedSyllable::<Hakka>::new("k", "j", "a", "ŋ", "1").unwrap();
        assert_eq!(kiang.strict_ipa(), "cjaŋ");
        let vui = TonedSyllable::<Hakka>::new("v", "", "u", "i", "2")
            .expect_err("u with an i coda reads back as a glide");
        assert_eq!(vui.info().code, "illegal-final");
    }
}
