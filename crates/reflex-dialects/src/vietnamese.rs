//! Sino-Vietnamese readings in quốc ngữ.
//!
//! The six written tones are 1 (ngang) to 6 (nặng). On `p`/`t`/`c`/`ch`
//! codas the sắc and nặng marks write the checked tones 7 and 8, so a parse
//! of `quốc` yields tone 7 while numeral output writes `quôc5`.
//!
//! `qu` always spells initial `k` with the `w` glide. Everything else is read
//! segment by segment; a syllable whose spelling reads back as some other
//! syllable is rejected at construction.

use std::borrow::Cow;
use std::sync::LazyLock;

use reflex_core::diacritic::{
    attach_mark_at, digit_str, split_tone_digit, strip_mark, ACUTE, DOT_BELOW, GRAVE, HOOK, TILDE,
};
use reflex_core::ipa::{Allophones, StrictForm};
use reflex_core::symbols::char_suffix;
use reflex_core::{
    Dialect, Orthography, Phonology, ReflexError, Slots, Tonal, Tone, ToneClass, ToneStyle,
    ToneTable, TonedSyllable,
};

use crate::spelling::{append_tone, Inventory};

/// Marker type for Vietnamese.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vietnamese;

static INVENTORY: LazyLock<Inventory> = LazyLock::new(|| {
    Inventory::new(
        &[
            ("", ""),
            ("b", "b"),
            ("m", "m"),
            ("f", "ph"),
            ("v", "v"),
            ("t", "t"),
            ("tʰ", "th"),
            ("d", "đ"),
            ("ð", "d"),
            ("n", "n"),
            ("ɲ", "nh"),
            ("l", "l"),
            ("tɕ", "ch"),
            ("ɕ", "x"),
            ("ʝ", "gi"),
            ("ʈʂ", "tr"),
            ("ʂ", "s"),
            ("k", "c"),
            ("k", "k"),
            ("ŋ", "ng"),
            ("ŋ", "ngh"),
            ("x", "kh"),
            ("h", "h"),
        ],
        &[("", ""), ("j", "i"), ("w", "u")],
        &[
            ("a", "a"),
            ("ɐ", "ă"),
            ("ɤ", "ơ"),
            ("ʌ", "â"),
            ("ɯ", "ư"),
            ("ɛ", "e"),
            ("e", "ê"),
            ("i", "i"),
            ("i", "y"),
            ("ɔ", "o"),
            ("o", "ô"),
            ("u", "u"),
            ("iə", "iê"),
            ("iə", "ia"),
            ("iə", "yê"),
            ("iə", "ya"),
            ("ɯə", "ươ"),
            ("ɯə", "ưa"),
            ("uə", "uô"),
            ("uə", "ua"),
        ],
        &[
            ("", ""),
            ("i", "i"),
            ("i", "y"),
            ("u", "u"),
            ("u", "o"),
            ("m", "m"),
            ("n", "n"),
            ("ŋ", "ng"),
            ("ɲ", "nh"),
            ("p", "p"),
            ("t", "t"),
            ("k", "c"),
            ("c", "ch"),
        ],
    )
});

static TONES: ToneTable = ToneTable::new(
    &[
        Tone::open("1", "陰平", None, ToneClass::Level),
        Tone::open("2", "陽平", Some(GRAVE), ToneClass::Level),
        Tone::open("3", "陰上", Some(HOOK), ToneClass::Rising),
        Tone::open("4", "陽上", Some(TILDE), ToneClass::Rising),
        Tone::open("5", "陰去", Some(ACUTE), ToneClass::Departing),
        Tone::open("6", "陽去", Some(DOT_BELOW), ToneClass::Departing),
        Tone::checked("7", "陰入", Some(ACUTE)),
        Tone::checked("8", "陽入", Some(DOT_BELOW)),
    ],
    "1",
);

/// Telex tone letters for tones 2 to 6.
const TELEX: [(char, &str); 5] = [('f', "2"), ('r', "3"), ('x', "4"), ('s', "5"), ('j', "6")];

/// Checked tone written with the mark and digit of each open tone.
const CHECKED_DIGITS: [(&str, &str); 2] = [("5", "7"), ("6", "8")];

const ALLOPHONES: Allophones = Allophones {
    initial: &[
        ("b", "ʔɓ"),
        ("d", "ʔɗ"),
        ("ɕ", "s"),
        ("ʂ", "s"),
        ("ð", "z"),
        ("ʝ", "z"),
        ("ʈʂ", "t͡ɕ"),
    ],
    nucleus: &[],
    coda: &[("ɲ", "ŋ̟"), ("c", "k̟̚")],
};

/// A syllable's spelling split where the tone mark placement needs it.
#[derive(Debug)]
struct Spelled {
    onset: String,
    nucleus: String,
    coda: &'static str,
}

impl Spelled {
    fn joined(&self) -> String {
        [self.onset.as_str(), self.nucleus.as_str(), self.coda].concat()
    }

    /// Character index of the vowel carrying the tone mark.
    fn mark_position(&self) -> usize {
        let onset = self.onset.chars().count();
        let nucleus = self.nucleus.chars().count();
        if nucleus == 0 {
            return onset.saturating_sub(1);
        }
        let open_diphthong = self.coda.is_empty() && matches!(self.nucleus.as_str(), "ia" | "ya" | "ưa" | "ua");
        if open_diphthong {
            onset
        } else {
            onset + nucleus - 1
        }
    }
}

fn spell(slots: &Slots) -> Spelled {
    let [mut initial, mut medial, nucleus, mut coda] = INVENTORY.spell(slots);
    let mut nucleus = nucleus.to_owned();
    let front = [medial, nucleus.as_str()]
        .concat()
        .starts_with(['e', 'ê', 'i', 'y']);
    match initial {
        "c" if medial == "u" => initial = "q",
        "c" if front => initial = "k",
        "ng" if front => initial = "ngh",
        _ => {}
    }
    if initial.is_empty() {
        if medial == "i" {
            medial = "y";
        }
        if nucleus.starts_with('i') && nucleus.chars().count() > 1 {
            nucleus.replace_range(..1, "y");
        }
    }
    if medial == "u" && matches!(nucleus.as_str(), "a" | "ă" | "e") && initial != "q" {
        medial = "o";
    }
    if medial == "u" && nucleus.starts_with('i') {
        nucleus.replace_range(..1, "y");
    }
    if coda.is_empty() && nucleus.chars().count() == 2 {
        nucleus.pop();
        nucleus.push('a');
    }
    match (nucleus.as_str(), coda) {
        ("a" | "e", "u") => coda = "o",
        ("â", "i") => coda = "y",
        _ => {}
    }
    if initial.is_empty() && medial.is_empty() && coda.is_empty() && nucleus == "i" {
        nucleus = "y".to_owned();
    }
    if initial == "gi" && nucleus.starts_with('i') {
        nucleus.remove(0);
    }
    Spelled {
        onset: [initial, medial].concat(),
        nucleus,
        coda,
    }
}

/// Whether the `i` of a `gi` initial is also the vowel, as in `gì` or `giêng`.
fn gi_shares_vowel(rest: &str) -> bool {
    rest.is_empty()
        || rest.starts_with('ê')
        || (INVENTORY.coda.ipa(rest).is_some() && !matches!(rest, "i" | "y" | "u" | "o"))
}

fn split_coda(text: &str) -> Option<(&str, &'static str)> {
    for len in [2, 1] {
        let Some(tail) = char_suffix(text, len) else {
            continue;
        };
        let vowel = &text[..text.len() - tail.len()];
        let Some(coda) = INVENTORY.coda.ipa(tail) else {
            continue;
        };
        let fits = match tail {
            "o" => vowel.ends_with(['a', 'e']),
            "y" => vowel.ends_with('â'),
            _ => true,
        };
        if !vowel.is_empty() && fits {
            return Some((vowel, coda));
        }
    }
    Some((text, "")).filter(|(vowel, _)| !vowel.is_empty())
}

fn split_vowel(vowel: &str) -> Option<(&'static str, &'static str)> {
    if let Some(nucleus) = INVENTORY.nucleus.ipa(vowel) {
        return Some(("", nucleus));
    }
    if let Some(rest) = vowel.strip_prefix("uy") {
        return Some(("w", INVENTORY.nucleus.ipa(&format!("i{rest}"))?));
    }
    let mut chars = vowel.chars();
    let medial = match (chars.next()?, chars.as_str()) {
        ('o', rest) if rest.starts_with(['a', 'ă', 'e']) => "w",
        ('u', _) => "w",
        ('i' | 'y', _) => "j",
        _ => return None,
    };
    Some((medial, INVENTORY.nucleus.ipa(chars.as_str())?))
}

/// Reads a toneless spelling into slots.
fn read(body: &str) -> Option<Slots> {
    let (initial, glide, rest) = match body.strip_prefix("qu") {
        Some(rest) => ("k", Some("w"), rest),
        None => {
            let (initial, spelled) = INVENTORY.initial.spelled_prefix(body, 3)?;
            (initial, None, &body[spelled.len()..])
        }
    };
    let rest: Cow<str> = if initial == "ʝ" && gi_shares_vowel(rest) {
        format!("i{rest}").into()
    } else {
        rest.into()
    };
    let (vowel, coda) = split_coda(&rest)?;
    let (medial, nucleus) = split_vowel(vowel)?;
    let medial = match (glide, medial) {
        (Some(glide), "") => glide,
        (None, medial) => medial,
        (Some(_), _) => return None,
    };
    Some(Slots::new(initial, medial, nucleus, coda))
}

impl Phonology for Vietnamese {
    const DIALECT: Dialect = Dialect::Vietnamese;
    const SYLLABIC_NASALS: &'static [&'static str] = &[];
    const CHECKED_CODAS: &'static [&'static str] = &["p", "t", "k", "c"];

    fn check(initial: &str, medial: &str, nucleus: &str, coda: &str) -> Result<Slots, ReflexError> {
        let slots = INVENTORY.intern(Self::DIALECT, initial, medial, nucleus, coda)?;
        let spelled = spell(&slots).joined();
        if read(&spelled) != Some(slots) {
            return Err(ReflexError::illegal_final(
                Self::DIALECT,
                &slots.final_part(),
                &slots.raw(),
                &format!("spelled {spelled:?} like another syllable"),
            ));
        }
        Ok(slots)
    }

    fn candidates() -> Vec<Slots> {
        INVENTORY.candidates::<Self>()
    }

    fn strict_ipa(slots: &Slots) -> String {
        let mut form = StrictForm::substitute(slots, &ALLOPHONES);
        match (slots.nucleus, slots.coda) {
            ("a", "ɲ" | "c") => form.nucleus = "ɐɪ".to_owned(),
            ("e", "ɲ" | "c") => form.nucleus = "ʌɪ".to_owned(),
            ("ɔ", "ŋ" | "k") => form.nucleus = "ɐʊ".to_owned(),
            ("o", "ŋ" | "k") => form.nucleus = "ʌʊ".to_owned(),
            _ => {}
        }
        let mut vowels = slots.nucleus.chars();
        if let (Some(first), Some(_)) = (vowels.next(), vowels.next()) {
            form.nucleus = format!("{first}ə̯");
        }
        if matches!(slots.nucleus, "u" | "o" | "ɔ") {
            match slots.coda {
                "ŋ" => form.coda = "ŋ͡m".to_owned(),
                "k" => form.coda = "k͡p̚".to_owned(),
                _ => {}
            }
        }
        form.join()
    }
}

impl Tonal for Vietnamese {
    fn tones() -> &'static ToneTable {
        &TONES
    }
}

impl Orthography for Vietnamese {
    type Value = TonedSyllable<Vietnamese>;
    type Style = ToneStyle;

    fn render(value: &TonedSyllable<Vietnamese>, style: ToneStyle) -> String {
        let spelled = spell(&value.slots());
        match style {
            ToneStyle::Diacritic => attach_mark_at(
                &spelled.joined(),
                spelled.mark_position(),
                value.tone_info().mark,
            ),
            ToneStyle::Numeral | ToneStyle::Omitted => {
                let written = CHECKED_DIGITS
                    .iter()
                    .find(|(_, checked)| *checked == value.tone())
                    .map_or(value.tone(), |(open, _)| *open);
                append_tone(spelled.joined(), written, style)
            }
        }
    }

    /// Accepts a tone mark, a trailing digit or a trailing Telex letter.
    fn parse(text: &str) -> Result<TonedSyllable<Vietnamese>, ReflexError> {
        let lowered = text.trim().to_lowercase();
        let (body, mark) = strip_mark(&lowered, |ch| TONES.is_mark(ch));
        let mut tone = mark.and_then(|mark| TONES.by_mark(mark)).map(|tone| tone.code);
        let (mut body, digit) = split_tone_digit(&body);
        if let Some(code) = digit.and_then(digit_str) {
            tone = Some(code);
        }
        if tone.is_none() && body.chars().count() > 1 {
            let telex = body
                .chars()
                .last()
                .and_then(|last| TELEX.iter().find(|(letter, _)| *letter == last));
            if let Some((letter, code)) = telex {
                body = &body[..body.len() - letter.len_utf8()];
                tone = Some(*code);
            }
        }
        let slots = read(body).ok_or_else(|| ReflexError::unparseable(Self::DIALECT, text))?;
        let mut tone = tone.unwrap_or(TONES.neutral());
        if Self::is_checked(&slots) {
            if let Some((_, checked)) = CHECKED_DIGITS.iter().find(|(open, _)| *open == tone) {
                tone = *checked;
            }
        }
        TonedSyllable::new(slots.initial, slots.medial, slots.nucleus, slots.coda, tone)
            .map_err(|err| err.while_parsing(Self::DIALECT, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qu_spells_the_labial_glide() {
        let quoc = Vietnamese::parse("quốc").unwrap();
        assert_eq!(quoc.slots(), Slots::new("k", "w", "o", "k"));
        assert_eq!(quoc.tone(), "7");
        assert_eq!(quoc.render(ToneStyle::Diacritic), "quốc");
        assert_eq!(quoc.render(ToneStyle::Numeral), "quôc5");
        assert_eq!(Vietnamese::parse("quôcs").unwrap(), quoc);
    }

    #[test]
    fn velar_and_glide_spellings_follow_the_vowel() {
        let kiem = TonedSyllable::<Vietnamese>::new("k", "", "iə", "m", "5").unwrap();
        assert_eq!(kiem.render(ToneStyle::Diacritic), "kiếm");
        let hoa = TonedSyllable::<Vietnamese>::new("h", "w", "a", "", "1").unwrap();
        assert_eq!(hoa.render(ToneStyle::Diacritic), "hoa");
        let gi = TonedSyllable::<Vietnamese>::new("ʝ", "", "i", "", "2").unwrap();
        assert_eq!(gi.render(ToneStyle::Diacritic), "gì");
        assert_eq!(Vietnamese::parse("gì").unwrap(), gi);
    }

    #[test]
    fn open_diphthongs_end_in_a() {
        let mua = TonedSyllable::<Vietnamese>::new("m", "", "ɯə", "", "1").unwrap();
        assert_eq!(mua.render(ToneStyle::Numeral), "mưa1");
        let cua = TonedSyllable::<Vietnamese>::new("k", "", "uə", "", "3").unwrap();
        assert_eq!(cua.render(ToneStyle::Diacritic), "của");
        assert_eq!(Vietnamese::parse("của").unwrap(), cua);
    }

    #[test]
    fn palatal_codas_front_the_vowel() {
        let anh = TonedSyllable::<Vietnamese>::new("", "", "a", "ɲ", "1").unwrap();
        assert_eq!(anh.strict_ipa(), "ɐɪŋ̟");
        let dong = TonedSyllable::<Vietnamese>::new("d", "", "o", "ŋ", "1").unwrap();
        assert_eq!(dong.strict_ipa(), "ʔɗʌʊŋ͡m");
    }
}
