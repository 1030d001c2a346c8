use reflex_core::{Orthography, Slots, Syllable, ToneStyle};
use reflex_dialects::{Cantonese, CantoneseStyle, Gan, Japanese, Mandarin, Vietnamese};

#[test]
fn gan_diacritic_reading_renders_with_a_numeral() {
    let qiang = Gan::parse("qiāng").expect("valid Gan pinyin");
    assert_eq!(qiang.slots(), Slots::new("tɕʰ", "j", "a", "ŋ"));
    assert_eq!(qiang.tone(), "1");
    assert_eq!(qiang.render(ToneStyle::Numeral), "qiang1");
}

#[test]
fn cantonese_jyutping_keeps_its_spelling() {
    let gwaang = Cantonese::parse("gwaang2").expect("valid Jyutping");
    assert_eq!(gwaang.slots(), Slots::new("k", "w", "a", "ŋ"));
    assert_eq!(gwaang.tone(), "2");
    assert_eq!(gwaang.render(CantoneseStyle::default()), "gwaang2");
}

#[test]
fn mandarin_iu_is_the_contracted_iou() {
    let qiu = Mandarin::parse("qiū").expect("valid pinyin");
    assert_eq!(qiu.slots(), Slots::new("tɕʰ", "j", "o", "u"));
    assert_eq!(qiu.tone(), "1");
    assert_eq!(qiu.strict_ipa(), "tɕʰjou");
}

#[test]
fn vietnamese_checked_syllable_takes_tone_seven() {
    let quoc = Vietnamese::parse("quốc").expect("valid quốc ngữ");
    assert_eq!(quoc.slots(), Slots::new("k", "w", "o", "k"));
    assert_eq!(quoc.tone(), "7");
    assert_eq!(quoc.render(ToneStyle::Diacritic), "quốc");
}

// (k, "", o, u) needs the ふ coda of くわふ; bare くわ only loses its glide.
#[test]
fn japanese_historical_kwahu_modernizes_to_kou_while_kwa_stays_ka() {
    let kwahu = Syllable::<Japanese>::new("k", "w", "a", "hu").expect("catalogued");
    let modern = Japanese::normalize(&kwahu).expect("modern form is legal");
    assert_eq!(modern.slots(), Slots::new("k", "", "o", "u"));
    let kwa = Syllable::<Japanese>::parse("くわ").expect("historical kana");
    assert_eq!(kwa.slots(), Slots::new("k", "w", "a", ""));
    assert_eq!(Japanese::normalize(&kwa).expect("legal").slots(), Slots::new("k", "", "a", ""));
}
