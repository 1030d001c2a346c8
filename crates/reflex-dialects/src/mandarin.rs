//! Putonghua Mandarin (普通話) in Hanyu Pinyin.
//!
//! Finals are an enumerated table rather than a cross product. A syllable
//! parsed without any tone mark carries the unspecified tone `""`, which is
//! distinct from the neutral tone `0`.

use std::collections::HashMap;
use std::sync::LazyLock;

use reflex_core::diacritic::{
    attach_mark_at, digit_str, nfc, split_tone_digit, strip_mark, ACUTE, CARON, GRAVE, MACRON,
};
use reflex_core::ipa::StrictForm;
use reflex_core::{
    syllabic_nasal, write_tone, Dialect, Orthography, Phonology, ReflexError, Slots, SymbolTable,
    Tonal, Tone, ToneClass, ToneStyle, ToneTable, TonedSyllable,
};
use tracing::debug;

use crate::spelling::strict_nasal;

/// Marker type for Putonghua Mandarin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mandarin;

/// Tone code of a syllable written without any tone mark.
pub const UNSPECIFIED_TONE: &str = "";

static INITIALS: LazyLock<SymbolTable> = LazyLock::new(|| {
    SymbolTable::new(&[
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
        ("h", "h"),
        ("tɕ", "j"),
        ("tɕʰ", "q"),
        ("ɕ", "x"),
        ("ʈʂ", "zh"),
        ("ʈʂʰ", "ch"),
        ("ʂ", "sh"),
        ("ɻ", "r"),
        ("ts", "z"),
        ("tsʰ", "c"),
        ("s", "s"),
    ])
});

type Final = (&'static str, &'static str, &'static str);

/// Spelled finals. Where two spellings share a final the first is canonical;
/// the contracted forms after an initial come from [`contract`].
const FINAL_SPELLINGS: &[(&str, Final)] = &[
    ("a", ("", "a", "")),
    ("ia", ("j", "a", "")),
    ("ua", ("w", "a", "")),
    ("o", ("", "o", "")),
    ("uo", ("w", "o", "")),
    ("e", ("", "ɤ", "")),
    ("ie", ("j", "e", "")),
    ("üe", ("ɥ", "e", "")),
    ("i", ("", "i", "")),
    ("u", ("", "u", "")),
    ("ü", ("", "y", "")),
    ("ai", ("", "a", "i")),
    ("uai", ("w", "a", "i")),
    ("ei", ("", "e", "i")),
    ("uei", ("w", "e", "i")),
    ("ui", ("w", "e", "i")),
    ("ao", ("", "a", "u")),
    ("iao", ("j", "a", "u")),
    ("ou", ("", "o", "u")),
    ("iou", ("j", "o", "u")),
    ("iu", ("j", "o", "u")),
    ("an", ("", "a", "n")),
    ("ian", ("j", "e", "n")),
    ("uan", ("w", "a", "n")),
    ("üan", ("ɥ", "e", "n")),
    ("en", ("", "ə", "n")),
    ("uen", ("w", "ə", "n")),
    ("un", ("w", "ə", "n")),
    ("in", ("", "i", "n")),
    ("ün", ("", "y", "n")),
    ("ang", ("", "a", "ŋ")),
    ("iang", ("j", "a", "ŋ")),
    ("uang", ("w", "a", "ŋ")),
    ("eng", ("", "ə", "ŋ")),
    ("ueng", ("w", "ə", "ŋ")),
    ("ing", ("", "i", "ŋ")),
    ("ong", ("", "ʊ", "ŋ")),
    ("iong", ("j", "ʊ", "ŋ")),
    ("er", ("", "ə", "ɻ")),
];

static SPELLED_FINALS: LazyLock<HashMap<&'static str, Final>> = LazyLock::new(|| {
    let table: HashMap<_, _> = FINAL_SPELLINGS.iter().copied().collect();
    debug!(spellings = table.len(), "built Mandarin final table");
    table
});

/// Canonical spelling and interned slots of a final.
fn find_final(medial: &str, nucleus: &str, coda: &str) -> Option<(&'static str, Final)> {
    FINAL_SPELLINGS
        .iter()
        .find(|(_, (m, n, c))| *m == medial && *n == nucleus && *c == coda)
        .copied()
}

static TONES: ToneTable = ToneTable::new(
    &[
        Tone::neutral(UNSPECIFIED_TONE, "未定"),
        Tone::neutral("0", "輕聲"),
        Tone::open("1", "陰平", Some(MACRON), ToneClass::Level),
        Tone::open("2", "陽平", Some(ACUTE), ToneClass::Level),
        Tone::open("3", "上聲", Some(CARON), ToneClass::Rising),
        Tone::open("4", "去聲", Some(GRAVE), ToneClass::Departing),
    ],
    UNSPECIFIED_TONE,
);

/// Initials before which pinyin `i` is the apical vowel.
const APICAL_INITIALS: [&str; 7] = ["ts", "tsʰ", "s", "ʈʂ", "ʈʂʰ", "ʂ", "ɻ"];
const PALATAL_INITIALS: [&str; 3] = ["tɕ", "tɕʰ", "ɕ"];

fn phonotactics(slots: &Slots, spelling: &str) -> Result<(), &'static str> {
    let apical = APICAL_INITIALS.contains(&slots.initial);
    match slots.nucleus {
        "ɿ" if !apical => Err("ɿ only follows z, c, s, zh, ch, sh or r"),
        "i" if apical && slots.medial.is_empty() => Err("i after z, c, s, zh, ch, sh or r is ɿ"),
        _ if PALATAL_INITIALS.contains(&slots.initial) && spelling.starts_with('u') => {
            Err("j, q and x read a following u as ü")
        }
        _ => Ok(()),
    }
}

/// Applies the written-form rules: y/w for zero initials, u for ü after
/// j/q/x, and the ui/iu/un contractions after an initial.
fn contract(initial: &str, spelling: &str) -> String {
    let mut chars = spelling.chars();
    let first = chars.next();
    let second = chars.next();
    let rest = spelling.get(first.map_or(0, char::len_utf8)..).unwrap_or("");
    let next_is_vowel = second.is_some_and(|ch| "aoeiu".contains(ch));
    if initial.is_empty() {
        return match first {
            Some('i') if next_is_vowel => format!("y{rest}"),
            Some('i') => format!("yi{rest}"),
            Some('u') if next_is_vowel => format!("w{rest}"),
            Some('u') => "wu".to_owned(),
            Some('ü') => format!("yu{rest}"),
            _ => spelling.to_owned(),
        };
    }
    if matches!(initial, "j" | "q" | "x") && first == Some('ü') {
        return format!("u{rest}");
    }
    match spelling {
        "uei" => "ui".to_owned(),
        "iou" => "iu".to_owned(),
        "uen" => "un".to_owned(),
        other => other.to_owned(),
    }
}

/// Reverses [`contract`] on a whole toneless syllable.
fn expand(text: &str) -> String {
    let mut text = text.to_owned();
    if let Some(rest) = text.strip_prefix("yu") {
        text = format!("ü{rest}");
    }
    if let Some(rest) = text.strip_prefix('y') {
        text = match rest.strip_prefix('i') {
            Some(_) => rest.to_owned(),
            None => format!("i{rest}"),
        };
    }
    if let Some(rest) = text.strip_prefix('w') {
        text = match rest.strip_prefix('u') {
            Some(_) => rest.to_owned(),
            None => format!("u{rest}"),
        };
    }
    let mut chars = text.chars();
    if let (Some(head @ ('j' | 'q' | 'x')), Some('u')) = (chars.next(), chars.next()) {
        text = format!("{head}ü{}", &text[2..]);
    }
    text
}

/// Index of the vowel carrying the tone mark.
fn mark_position(spelling: &str) -> usize {
    let chars: Vec<char> = spelling.chars().collect();
    let Some(mut position) = chars.iter().rposition(|ch| "aoeiuü".contains(*ch)) else {
        return chars.len().saturating_sub(1);
    };
    if position > 0 && "iu".contains(chars[position]) && "aoe".contains(chars[position - 1]) {
        position -= 1;
    }
    if spelling.ends_with("ao") {
        position = position.saturating_sub(1);
    }
    position
}

impl Phonology for Mandarin {
    const DIALECT: Dialect = Dialect::Mandarin;
    const SYLLABIC_NASALS: &'static [&'static str] = &["ŋ"];
    const CHECKED_CODAS: &'static [&'static str] = &[];

    fn check(initial: &str, medial: &str, nucleus: &str, coda: &str) -> Result<Slots, ReflexError> {
        if let Some(slots) = syllabic_nasal::<Self>(initial, medial, nucleus, coda) {
            return Ok(slots);
        }
        let raw = [initial, medial, nucleus, coda].concat();
        let initial = INITIALS
            .intern(initial)
            .ok_or_else(|| ReflexError::illegal_slot(Self::DIALECT, "initial", initial, &raw))?;
        let key_nucleus = if nucleus == "ɿ" { "i" } else { nucleus };
        let (spelling, (medial, table_nucleus, coda)) = find_final(medial, key_nucleus, coda)
            .ok_or_else(|| {
                let final_part = [medial, nucleus, coda].concat();
                ReflexError::illegal_slot(Self::DIALECT, "final", &final_part, &raw)
            })?;
        let nucleus = if nucleus == "ɿ" { "ɿ" } else { table_nucleus };
        let slots = Slots::new(initial, medial, nucleus, coda);
        phonotactics(&slots, spelling).map_err(|reason| {
            ReflexError::illegal_final(Self::DIALECT, &slots.final_part(), &raw, reason)
        })?;
        Ok(slots)
    }

    fn candidates() -> Vec<Slots> {
        let mut out = Vec::new();
        for initial in INITIALS.ipa_values() {
            for &(_, (medial, nucleus, coda)) in FINAL_SPELLINGS {
                let slots = Slots::new(initial, medial, nucleus, coda);
                if !out.contains(&slots) {
                    out.push(slots);
                }
                if nucleus == "i" && medial.is_empty() {
                    out.push(Slots::new(initial, medial, "ɿ", coda));
                }
            }
        }
        out.push(Slots::new("ŋ", "", "", ""));
        out
    }

    fn strict_ipa(slots: &Slots) -> String {
        if let Some(nasal) = strict_nasal::<Self>(slots) {
            return nasal;
        }
        let mut form = StrictForm::verbatim(slots);
        if slots.initial == "h" {
            form.initial = "x".to_owned();
        }
        match (slots.medial, slots.nucleus, slots.coda) {
            (_, "ɿ", _) => form.nucleus = "ɨ".to_owned(),
            ("j" | "ɥ", "e", "n") => form.nucleus = "ɛ".to_owned(),
            (_, "u", "ŋ") => form.nucleus = "ʊ".to_owned(),
            _ => {}
        }
        form.join()
    }
}

impl Tonal for Mandarin {
    fn tones() -> &'static ToneTable {
        &TONES
    }
}

impl Orthography for Mandarin {
    type Value = TonedSyllable<Mandarin>;
    type Style = ToneStyle;

    fn render(value: &TonedSyllable<Mandarin>, style: ToneStyle) -> String {
        let tone = value.tone_info();
        if value.is_syllabic_nasal() {
            return write_tone("ng".to_owned(), tone, style, |text, mark| {
                attach_mark_at(&text, 0, mark)
            });
        }
        let initial = INITIALS.spelling(value.initial()).unwrap_or(value.initial());
        let nucleus = if value.nucleus() == "ɿ" { "i" } else { value.nucleus() };
        let spelling = find_final(value.medial(), nucleus, value.coda())
            .map_or("", |(spelling, _)| spelling);
        let written = contract(initial, spelling);
        let position = mark_position(&written);
        let final_part = write_tone(written, tone, style, |text, mark| {
            attach_mark_at(&text, position, mark)
        });
        format!("{initial}{final_part}")
    }

    fn parse(text: &str) -> Result<TonedSyllable<Mandarin>, ReflexError> {
        let trimmed = text.trim();
        let (body, tone) = match split_tone_digit(trimmed) {
            (body, Some(digit)) => (nfc(body), digit_str(digit).unwrap_or(UNSPECIFIED_TONE)),
            (body, None) => {
                let (body, mark) = strip_mark(body, |ch| TONES.is_mark(ch));
                let tone = mark
                    .and_then(|mark| TONES.by_mark(mark))
                    .map_or(UNSPECIFIED_TONE, |tone| tone.code);
                (body, tone)
            }
        };
        if body == "ng" {
            return TonedSyllable::new("ŋ", "", "", "", tone)
                .map_err(|err| err.while_parsing(Self::DIALECT, text));
        }
        let body = expand(&body);
        let (initial, spelled_initial) = INITIALS
            .spelled_prefix(&body, 2)
            .ok_or_else(|| ReflexError::unparseable(Self::DIALECT, text))?;
        let spelled_final = &body[spelled_initial.len()..];
        let &(medial, nucleus, coda) = SPELLED_FINALS
            .get(spelled_final)
            .ok_or_else(|| ReflexError::unparseable(Self::DIALECT, text))?;
        let nucleus = if nucleus == "i" && APICAL_INITIALS.contains(&initial) {
            "ɿ"
        } else {
            nucleus
        };
        TonedSyllable::new(initial, medial, nucleus, coda, tone)
            .map_err(|err| err.while_parsing(Self::DIALECT, text))
    }
}

impl Mandarin {
    /// Whether a parsed syllable matches the parts recorded for the same text.
    ///
    /// Stored readings of 入聲 characters whose modern tone is uncertain keep
    /// tone `0` while their text carries no mark, so an unspecified parsed
    /// tone is accepted against a recorded `0` when the slots agree.
    pub fn agrees_with_record(
        parsed: &TonedSyllable<Mandarin>,
        recorded: &Slots,
        recorded_tone: &str,
    ) -> bool {
        let slots_agree = parsed.slots() == *recorded;
        slots_agree
            && (parsed.tone() == recorded_tone
                || (parsed.tone() == UNSPECIFIED_TONE && recorded_tone == "0"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_initial_spellings() {
        assert_eq!(contract("", "i"), "yi");
        assert_eq!(contract("", "ian"), "yan");
        assert_eq!(contract("", "u"), "wu");
        assert_eq!(contract("", "uei"), "wei");
        assert_eq!(contract("", "üan"), "yuan");
        assert_eq!(contract("q", "üan"), "uan");
        assert_eq!(contract("g", "uei"), "gui");
    }

    #[test]
    fn expansion_reverses_contraction() {
        assert_eq!(expand("yi"), "i");
        assert_eq!(expand("yan"), "ian");
        assert_eq!(expand("wu"), "u");
        assert_eq!(expand("yuan"), "üan");
        assert_eq!(expand("quan"), "qüan");
        assert_eq!(expand("gui"), "gui");
    }

    #[test]
    fn marks_follow_the_pinyin_placement_rule() {
        assert_eq!(mark_position("iu"), 1);
        assert_eq!(mark_position("ui"), 1);
        assert_eq!(mark_position("ao"), 0);
        assert_eq!(mark_position("iao"), 1);
        assert_eq!(mark_position("ou"), 0);
        assert_eq!(mark_position("yi"), 1);
    }
}
