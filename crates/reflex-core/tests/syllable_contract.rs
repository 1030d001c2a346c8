//! Exercises the value types against a toy two-tone dialect.

use reflex_core::ipa::{self, StrictForm};
use reflex_core::{
    syllabic_nasal, Checking, Dialect, Phonology, ReflexError, Slots, Syllable, Tonal,
    Tone, ToneClass, ToneTable, TonedSyllable,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct Toy;

const INITIALS: &[&str] = &["", "p", "ts"];
const NUCLEI: &[&str] = &["a", "ɿ"];
const CODAS: &[&str] = &["", "ŋ", "ʔ"];

static TONES: ToneTable = ToneTable::new(
    &[
        Tone::neutral("0", "輕聲"),
        Tone::open("1", "平", Some('\u{0304}'), ToneClass::Level),
        Tone::checked("7", "入", None),
    ],
    "0",
);

fn member(list: &[&'static str], value: &str) -> Option<&'static str> {
    list.iter().copied().find(|item| *item == value)
}

impl Phonology for Toy {
    const DIALECT: Dialect = Dialect::Gan;

    fn check(initial: &str, medial: &str, nucleus: &str, coda: &str) -> Result<Slots, ReflexError> {
        if let Some(slots) = syllabic_nasal::<Self>(initial, medial, nucleus, coda) {
            return Ok(slots);
        }
        let raw = [initial, medial, nucleus, coda].concat();
        let fail = |slot: &str, value: &str| ReflexError::illegal_slot(Self::DIALECT, slot, value, &raw);
        Ok(Slots::new(
            member(INITIALS, initial).ok_or_else(|| fail("initial", initial))?,
            member(&[""], medial).ok_or_else(|| fail("medial", medial))?,
            member(NUCLEI, nucleus).ok_or_else(|| fail("nucleus", nucleus))?,
            member(CODAS, coda).ok_or_else(|| fail("coda", coda))?,
        ))
    }

    fn candidates() -> Vec<Slots> {
        Vec::new()
    }

    fn strict_ipa(slots: &Slots) -> String {
        StrictForm::substitute(slots, &ipa::NONE).join()
    }
}

impl Tonal for Toy {
    fn tones() -> &'static ToneTable {
        &TONES
    }
}

#[test]
fn derived_values_follow_slots() {
    let syllable = TonedSyllable::<Toy>::new("ts", "", "ɿ", "ŋ", "1").expect("legal");
    assert_eq!(syllable.raw(), "tsɿŋ");
    assert_eq!(syllable.rhyme(), "ɿŋ");
    assert_eq!(syllable.final_part(), "ɿŋ");
    assert_eq!(syllable.toned_final(), "ɿŋ1");
    assert_eq!(syllable.tone_class(), Some(ToneClass::Level));
    assert_eq!(syllable.strict_ipa(), "t͡sɨŋ");
    assert_eq!(syllable.to_string(), "tsɿŋ1");
    assert!(!syllable.is_checked());
}

#[test]
fn syllabic_nasals_bypass_the_final_inventory() {
    let nasal = Syllable::<Toy>::new("ŋ", "", "", "").expect("syllabic nasal");
    assert!(nasal.is_syllabic_nasal());
    let err = Syllable::<Toy>::new("p", "", "", "").expect_err("bare stop");
    match err {
        ReflexError::InvalidSyllable(info) => assert_eq!(info.code, "illegal-nucleus"),
        other => panic!("unexpected error family: {other:?}"),
    }
}

#[test]
fn tone_partition_is_enforced_both_ways() {
    let err = TonedSyllable::<Toy>::new("p", "", "a", "ʔ", "1").expect_err("open tone on checked");
    assert_eq!(err.info().code, "illegal-tone");
    let err = TonedSyllable::<Toy>::new("p", "", "a", "ŋ", "7").expect_err("checked tone on open");
    assert_eq!(err.info().context["checked"], "false");
    for coda in CODAS {
        let neutral = TonedSyllable::<Toy>::new("p", "", "a", coda, "0").expect("neutral anywhere");
        assert_eq!(neutral.tone_info().checking, Checking::Either);
    }
}

#[test]
fn unknown_tones_are_rejected() {
    let err = TonedSyllable::<Toy>::new("p", "", "a", "", "9").expect_err("unknown tone");
    assert_eq!(err.info().context["tone"], "9");
}

#[test]
fn slots_serialize_flat() {
    let syllable = TonedSyllable::<Toy>::new("p", "", "a", "ʔ", "7").expect("legal");
    let json = serde_json::to_value(syllable).expect("serialize");
    assert_eq!(json["initial"], "p");
    assert_eq!(json["coda"], "ʔ");
    assert_eq!(json["tone"], "7");
}
