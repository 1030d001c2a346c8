//! Constructed and parsed slots stay inside the inventory, and tones respect
//! the checked/unchecked partition.

use reflex_core::{Checking, Dialect, Phonology, Syllable, Tonal, TonedSyllable};
use reflex_dialects::{Cantonese, Gan, Hakka, Mandarin, Pronunciation, RenderStyle, Vietnamese, Wu};

/// Returns whether any constructible syllable is checked.
fn tone_partition<D: Tonal>() -> bool {
    let mut checked_seen = false;
    for slots in D::candidates() {
        let Ok(syllable) = Syllable::<D>::from_slots(slots) else {
            continue;
        };
        checked_seen |= syllable.is_checked();
        for tone in D::tones().iter() {
            let built = TonedSyllable::with_tone(syllable, tone.code);
            let allowed = match tone.checking {
                Checking::Either => true,
                Checking::Checked => syllable.is_checked(),
                Checking::Open => !syllable.is_checked(),
            };
            assert_eq!(built.is_ok(), allowed, "{:?} {} {}", D::DIALECT, slots.raw(), tone.code);
            if let Err(err) = built {
                assert_eq!(err.info().code, "illegal-tone");
            }
        }
    }
    checked_seen
}

#[test]
fn checked_tones_need_checked_codas() {
    assert!(tone_partition::<Gan>());
    assert!(tone_partition::<Cantonese>());
    assert!(tone_partition::<Wu>());
    assert!(tone_partition::<Hakka>());
    assert!(tone_partition::<Vietnamese>());
    assert!(!tone_partition::<Mandarin>());
}

#[test]
fn enumerated_readings_rebuild_from_their_parts() {
    for dialect in Dialect::ALL {
        for reading in Pronunciation::enumerate(dialect).iter().take(50) {
            let slots = reading.slots();
            let rebuilt = Pronunciation::from_parts(
                dialect,
                [slots.initial, slots.medial, slots.nucleus, slots.coda],
                reading.tone(),
            )
            .expect("enumerated readings rebuild");
            assert_eq!(&rebuilt, reading);
        }
    }
    let err = Syllable::<Gan>::new("", "j", "i", "")
        .expect_err("glide repeating the nucleus");
    assert_eq!(err.info().code, "illegal-final");
}

#[test]
fn parsed_slots_are_members_of_the_inventory() {
    let style = RenderStyle::default();
    for dialect in Dialect::ALL {
        let readings = Pronunciation::enumerate(dialect);
        assert!(!readings.is_empty(), "{dialect:?}");
        for reading in readings.iter().step_by(7) {
            let text = reading.render(&style);
            let parsed = Pronunciation::parse(dialect, &text)
                .unwrap_or_else(|err| panic!("{dialect:?} {text:?}: {err}"));
            let slots = parsed.slots();
            Pronunciation::from_parts(
                dialect,
                [slots.initial, slots.medial, slots.nucleus, slots.coda],
                parsed.tone(),
            )
            .unwrap_or_else(|err| panic!("{dialect:?} {text:?} left the inventory: {err}"));
        }
    }
}
