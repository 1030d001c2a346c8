use proptest::prelude::*;
use reflex_script::hangul::{self, JamoIndices, LEAD_COUNT, SYLLABLE_BASE, SYLLABLE_COUNT, TRAIL_COUNT, VOWEL_COUNT};

#[test]
fn every_precomposed_syllable_round_trips() {
    for offset in 0..SYLLABLE_COUNT {
        let syllable = char::from_u32(SYLLABLE_BASE + offset).expect("hangul block");
        let indices = hangul::decompose(syllable).expect("inside the block");
        assert_eq!(hangul::compose(indices), Some(syllable));
        let (lead, vowel, trail) = hangul::decompose_jamo(syllable).expect("inside the block");
        assert_eq!(hangul::compose_jamo(lead, vowel, trail), Some(syllable));
    }
}

#[test]
fn block_edges() {
    assert_eq!(hangul::decompose('가').map(|i| (i.lead, i.vowel, i.trail)), Some((0, 0, 0)));
    assert_eq!(hangul::decompose('힣').map(|i| (i.lead, i.vowel, i.trail)), Some((18, 20, 27)));
    assert_eq!(hangul::decompose('\u{D7A4}'), None);
    assert_eq!(hangul::decompose('\u{ABFF}'), None);
}

proptest! {
    #[test]
    fn indices_survive_composition(
        lead in 0..LEAD_COUNT,
        vowel in 0..VOWEL_COUNT,
        trail in 0..TRAIL_COUNT,
    ) {
        let indices = JamoIndices { lead, vowel, trail };
        let syllable = hangul::compose(indices).expect("indices in range");
        prop_assert_eq!(hangul::decompose(syllable), Some(indices));
    }
}
