use std::collections::HashSet;

use reflex_script::kana::{self, KanaForm, CATALOG};

#[test]
fn script_spellings_are_unique() {
    let mut katakana = HashSet::new();
    let mut hiragana = HashSet::new();
    let mut tuples = HashSet::new();
    for unit in CATALOG {
        assert!(katakana.insert(unit.katakana), "duplicate {}", unit.katakana);
        assert!(hiragana.insert(unit.hiragana), "duplicate {}", unit.hiragana);
        assert!(tuples.insert((unit.initial, unit.medial, unit.nucleus)));
    }
}

#[test]
fn every_unit_is_found_by_each_of_its_forms() {
    for unit in CATALOG.iter().filter(|unit| unit.is_mora()) {
        for form in KanaForm::ALL {
            let text = unit.form(form);
            let found = kana::find(&text, form).expect("catalogued form");
            assert_eq!(found, unit, "{form:?} {text}");
        }
    }
}

#[test]
fn moraic_units_have_no_vowel() {
    let nasal = kana::find("ン", KanaForm::Katakana).expect("catalogued");
    assert!(!nasal.is_mora());
    assert_eq!(nasal.strict, "ɴ");
    let geminate = kana::find_any("っ").expect("catalogued");
    assert_eq!(geminate.raw(), "q");
}

#[test]
fn labial_glide_units_keep_their_historical_tuple() {
    let kwa = kana::by_tuple("k", "w", "a").expect("catalogued");
    assert_eq!(kwa.katakana, "クワ");
    assert_eq!(kwa.nippon(), "kwa");
    let wyo = kana::by_tuple("", "wj", "o").expect("catalogued");
    assert_eq!(wyo.hiragana, "ゐょ");
    assert_eq!(wyo.nippon(), "wyo");
}
