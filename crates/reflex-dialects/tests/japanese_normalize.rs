use proptest::prelude::*;
use reflex_core::{Phonology, Syllable};
use reflex_dialects::japanese::{Japanese, CODAS};
use reflex_script::kana::CATALOG;

fn historical() -> impl Strategy<Value = Syllable<Japanese>> {
    let heads: Vec<_> = CATALOG.iter().filter(|unit| unit.is_mora()).collect();
    (prop::sample::select(heads), prop::sample::select(CODAS.to_vec())).prop_filter_map(
        "head and coda form a syllable",
        |(unit, coda)| Syllable::new(unit.initial, unit.medial, unit.nucleus, coda).ok(),
    )
}

proptest! {
    #[test]
    fn normalizing_twice_changes_nothing(syllable in historical()) {
        let once = Japanese::normalize(&syllable).expect("modern form is legal");
        let twice = Japanese::normalize(&once).expect("modern form is legal");
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalizing_keeps_the_strict_reading(syllable in historical()) {
        let modern = Japanese::normalize(&syllable).expect("modern form is legal");
        prop_assert_eq!(modern.strict_ipa(), syllable.strict_ipa());
    }
}

#[test]
fn every_historical_syllable_normalizes_to_a_legal_one() {
    let mut changed = 0;
    for slots in Japanese::candidates() {
        let Ok(syllable) = Syllable::<Japanese>::from_slots(slots) else {
            continue;
        };
        let modern = Japanese::normalize(&syllable)
            .unwrap_or_else(|err| panic!("{}: {err}", slots.raw()));
        assert!(!modern.medial().contains('w') || modern.slots() == slots_of_wa(&modern));
        if modern != syllable {
            changed += 1;
        }
    }
    assert!(changed > 0);
}

fn slots_of_wa(syllable: &Syllable<Japanese>) -> reflex_core::Slots {
    reflex_core::Slots::new("", "w", "a", syllable.coda())
}
