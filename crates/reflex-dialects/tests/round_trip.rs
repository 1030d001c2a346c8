//! `parse(render(s)) == s` over every constructible syllable of every dialect.

use std::fmt::Debug;

use reflex_core::{Orthography, Phonology, Syllable, Tonal, ToneStyle, TonedSyllable};
use reflex_dialects::{
    Cantonese, CantoneseStyle, Gan, Hakka, Japanese, JapaneseStyle, Korean, KoreanScript,
    Mandarin, Vietnamese, Wu,
};
use reflex_script::kana::KanaForm;

fn toned_round_trip<D>(style: D::Style) -> usize
where
    D: Tonal + Orthography<Value = TonedSyllable<D>>,
    D::Style: Debug,
{
    toned_round_trip_except::<D>(style, &[])
}

/// Same as [`toned_round_trip`], leaving out tones the style cannot tell apart.
fn toned_round_trip_except<D>(style: D::Style, skipped: &[&str]) -> usize
where
    D: Tonal + Orthography<Value = TonedSyllable<D>>,
    D::Style: Debug,
{
    let mut seen = 0;
    for slots in D::candidates() {
        let Ok(syllable) = Syllable::<D>::from_slots(slots) else {
            continue;
        };
        for tone in D::tones().iter().filter(|tone| !skipped.contains(&tone.code)) {
            let Ok(toned) = TonedSyllable::with_tone(syllable, tone.code) else {
                continue;
            };
            let text = toned.render(style);
            let parsed = D::parse(&text)
                .unwrap_or_else(|err| panic!("{:?} {style:?} {text:?}: {err}", D::DIALECT));
            assert_eq!(parsed, toned, "{:?} {style:?} {text:?}", D::DIALECT);
            seen += 1;
        }
    }
    seen
}

fn toneless_round_trip<D>(style: D::Style) -> usize
where
    D: Orthography<Value = Syllable<D>>,
    D::Style: Debug,
{
    let mut seen = 0;
    for slots in D::candidates() {
        let Ok(syllable) = Syllable::<D>::from_slots(slots) else {
            continue;
        };
        let text = syllable.render(style);
        let parsed = D::parse(&text)
            .unwrap_or_else(|err| panic!("{:?} {style:?} {text:?}: {err}", D::DIALECT));
        assert_eq!(parsed, syllable, "{:?} {style:?} {text:?}", D::DIALECT);
        seen += 1;
    }
    seen
}

#[test]
fn gan_numeral() {
    assert!(toned_round_trip::<Gan>(ToneStyle::Numeral) > 1000);
}

#[test]
fn mandarin_numeral() {
    assert!(toned_round_trip::<Mandarin>(ToneStyle::Numeral) > 1000);
}

#[test]
fn mandarin_diacritic_marks_the_right_vowel() {
    // The neutral tone and the unspecified tone are both written unmarked.
    let marked = toned_round_trip_except::<Mandarin>(ToneStyle::Diacritic, &["0"]);
    let numbered = toned_round_trip_except::<Mandarin>(ToneStyle::Numeral, &["0"]);
    assert_eq!(marked, numbered);
    assert!(marked > 1000);
}

#[test]
fn cantonese_shared_and_separate_checked_digits() {
    let shared = toned_round_trip::<Cantonese>(CantoneseStyle::default());
    let separate = toned_round_trip::<Cantonese>(CantoneseStyle {
        separate_checked_tone: true,
        ..CantoneseStyle::default()
    });
    assert_eq!(shared, separate);
    assert!(shared > 1000);
}

#[test]
fn wu_numeral() {
    assert!(toned_round_trip::<Wu>(ToneStyle::Numeral) > 500);
}

#[test]
fn hakka_numeral() {
    assert!(toned_round_trip::<Hakka>(ToneStyle::Numeral) > 1000);
}

#[test]
fn vietnamese_diacritic_and_numeral() {
    let marked = toned_round_trip::<Vietnamese>(ToneStyle::Diacritic);
    let numbered = toned_round_trip::<Vietnamese>(ToneStyle::Numeral);
    assert_eq!(marked, numbered);
    assert!(marked > 1000);
}

#[test]
fn japanese_kana_and_nippon_shiki() {
    for script in [KanaForm::Katakana, KanaForm::Hiragana, KanaForm::Nippon] {
        for small_kana in [true, false] {
            let style = JapaneseStyle {
                script,
                small_kana,
                long_vowel: true,
            };
            assert!(toneless_round_trip::<Japanese>(style) > 500);
        }
    }
}

#[test]
fn korean_hangul_and_revised() {
    let hangul = toneless_round_trip::<Korean>(KoreanScript::Hangul);
    let revised = toneless_round_trip::<Korean>(KoreanScript::Revised);
    assert_eq!(hangul, 16 * 20 * 7);
    assert_eq!(hangul, revised);
}
