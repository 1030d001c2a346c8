//! Sino-Japanese readings in historical kana orthography.
//!
//! A syllable is one kana unit with a vowel (initial, medial, nucleus) and a
//! coda spelled by one more kana unit. Codas are kept in their historical
//! form (`hu`, `mu`, `tu`, ...); [`Japanese::normalize`] rewrites a syllable
//! to modern kana usage and strict IPA always goes through it.

use reflex_core::{Dialect, Orthography, Phonology, ReflexError, Slots, Syllable};
use reflex_script::kana::{self, Kana, KanaForm};
use serde::{Deserialize, Serialize};

/// Marker type for Japanese.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Japanese;

/// Codas in parse order, each the tuple of one catalog unit.
pub const CODAS: [&str; 11] = ["", "i", "u", "n", "mu", "hu", "tu", "ti", "ku", "ki", "q"];

const LONG_VOWELS: [(&str, &str); 3] = [("uu", "ū"), ("ou", "ō"), ("ei", "ē")];

/// Output options for Japanese.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JapaneseStyle {
    /// Script or romanisation.
    #[serde(default = "default_script")]
    pub script: KanaForm,
    /// Write ゃゅょ small in kana output.
    #[serde(default = "enabled")]
    pub small_kana: bool,
    /// Write `uu`, `ou`, `ei` as ū, ō, ē in romanised output.
    #[serde(default = "enabled")]
    pub long_vowel: bool,
}

fn default_script() -> KanaForm {
    KanaForm::Katakana
}

fn enabled() -> bool {
    true
}

impl Default for JapaneseStyle {
    fn default() -> Self {
        Self {
            script: default_script(),
            small_kana: true,
            long_vowel: true,
        }
    }
}

fn coda_kana(coda: &str) -> Option<&'static Kana> {
    kana::find(coda, KanaForm::Raw)
}

fn head_kana(slots: &Slots) -> Option<&'static Kana> {
    kana::by_tuple(slots.initial, slots.medial, slots.nucleus)
}

fn lengthen(text: &str) -> String {
    LONG_VOWELS
        .iter()
        .find_map(|(pair, long)| text.strip_suffix(pair).map(|head| format!("{head}{long}")))
        .unwrap_or_else(|| text.to_owned())
}

fn shorten(text: &str) -> String {
    LONG_VOWELS
        .iter()
        .find_map(|(pair, long)| text.strip_suffix(long).map(|head| format!("{head}{pair}")))
        .unwrap_or_else(|| text.to_owned())
}

impl Phonology for Japanese {
    const DIALECT: Dialect = Dialect::Japanese;
    const SYLLABIC_NASALS: &'static [&'static str] = &[];
    const CHECKED_CODAS: &'static [&'static str] = &["hu", "tu", "ti", "ku", "ki", "q"];

    fn check(initial: &str, medial: &str, nucleus: &str, coda: &str) -> Result<Slots, ReflexError> {
        let raw = [initial, medial, nucleus, coda].concat();
        let head = kana::by_tuple(initial, medial, nucleus)
            .filter(|unit| unit.is_mora())
            .ok_or_else(|| {
                let onset = [initial, medial, nucleus].concat();
                ReflexError::illegal_slot(Self::DIALECT, "nucleus", &onset, &raw)
            })?;
        let coda = CODAS
            .iter()
            .find(|known| **known == coda)
            .ok_or_else(|| ReflexError::illegal_slot(Self::DIALECT, "coda", coda, &raw))?;
        Ok(Slots::new(head.initial, head.medial, head.nucleus, *coda))
    }

    fn candidates() -> Vec<Slots> {
        kana::CATALOG
            .iter()
            .filter(|unit| unit.is_mora())
            .flat_map(|unit| {
                CODAS
                    .iter()
                    .map(move |coda| Slots::new(unit.initial, unit.medial, unit.nucleus, coda))
            })
            .collect()
    }

    fn strict_ipa(slots: &Slots) -> String {
        let modern = modernize(slots);
        let head = head_kana(&modern).map_or("", |unit| unit.strict);
        let tail = coda_kana(modern.coda).map_or("", |unit| unit.strict);
        let long = LONG_VOWELS
            .iter()
            .any(|(pair, _)| *pair == [modern.nucleus, modern.coda].concat());
        if long {
            format!("{head}ː")
        } else {
            format!("{head}{tail}")
        }
    }
}

/// Historical → modern kana usage on bare slots.
fn modernize(slots: &Slots) -> Slots {
    let Slots {
        mut initial,
        mut medial,
        mut nucleus,
        mut coda,
    } = *slots;
    coda = match coda {
        "hu" => "u",
        "mu" => "n",
        other => other,
    };
    if coda == "u" {
        match nucleus {
            "a" => nucleus = "o",
            "e" => (medial, nucleus) = ("j", "o"),
            "i" => (medial, nucleus) = ("j", "u"),
            _ => {}
        }
    }
    // Checked after contraction so that わふ becomes おう, not をう.
    if medial == "w" && !(initial.is_empty() && nucleus == "a") {
        medial = "";
    }
    if medial == "wj" {
        medial = "j";
    }
    if initial == "d" && (nucleus == "i" || nucleus == "u" || medial == "j") {
        initial = "z";
    }
    Slots::new(initial, medial, nucleus, coda)
}

impl Orthography for Japanese {
    type Value = Syllable<Japanese>;
    type Style = JapaneseStyle;

    fn render(value: &Syllable<Japanese>, style: JapaneseStyle) -> String {
        let slots = value.slots();
        let [head, tail] = [head_kana(&slots), coda_kana(slots.coda)]
            .map(|unit| unit.map(|unit| unit.form(style.script)).unwrap_or_default());
        let text = head + &tail;
        match style.script {
            KanaForm::Katakana | KanaForm::Hiragana if !style.small_kana => {
                kana::small_to_normal(&text)
            }
            KanaForm::Nippon | KanaForm::Hepburn if style.long_vowel => lengthen(&text),
            _ => text,
        }
    }

    fn parse(text: &str) -> Result<Syllable<Japanese>, ReflexError> {
        let normal = shorten(&kana::normal_to_small(text.trim()));
        for form in KanaForm::ALL {
            for coda in CODAS {
                let Some(spelled) = coda_kana(coda).map(|unit| unit.form(form)) else {
                    continue;
                };
                let Some(head) = normal.strip_suffix(spelled.as_str()) else {
                    continue;
                };
                let Some(unit) = kana::find(head, form).filter(|unit| unit.is_mora()) else {
                    continue;
                };
                return Syllable::new(unit.initial, unit.medial, unit.nucleus, coda)
                    .map_err(|err| err.while_parsing(Self::DIALECT, text));
            }
        }
        Err(ReflexError::unparseable(Self::DIALECT, text))
    }
}

impl Japanese {
    /// Rewrites a syllable from historical to modern kana usage.
    ///
    /// Obsolete `w` glides drop except in bare わ, `wj` becomes `j`, the
    /// codas `hu`/`mu` become `u`/`n`, vowel + `u` sequences contract to
    /// long vowels and `d` becomes `z` before `i`, `u` or a `j` glide.
    /// Normalising twice changes nothing.
    pub fn normalize(syllable: &Syllable<Japanese>) -> Result<Syllable<Japanese>, ReflexError> {
        Syllable::from_slots(modernize(&syllable.slots()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn historical_spelling_of_kwau_becomes_kou() {
        let kwahu = Syllable::<Japanese>::parse("くわふ").unwrap();
        assert_eq!(kwahu.slots(), Slots::new("k", "w", "a", "hu"));
        let modern = Japanese::normalize(&kwahu).unwrap();
        assert_eq!(modern.slots(), Slots::new("k", "", "o", "u"));
        assert_eq!(kwahu.strict_ipa(), "koː");
    }

    #[test]
    fn romanisations_mark_long_vowels() {
        let kyou = Syllable::<Japanese>::new("k", "j", "o", "u").unwrap();
        let hepburn = JapaneseStyle {
            script: KanaForm::Hepburn,
            ..JapaneseStyle::default()
        };
        assert_eq!(kyou.render(hepburn), "kyō");
        assert_eq!(Syllable::<Japanese>::parse("kyō").unwrap(), kyou);
        assert_eq!(kyou.render(JapaneseStyle::default()), "キョウ");
    }

    #[test]
    fn full_size_kana_read_back_small() {
        let style = JapaneseStyle {
            small_kana: false,
            ..JapaneseStyle::default()
        };
        let syu = Syllable::<Japanese>::new("s", "j", "u", "").unwrap();
        assert_eq!(syu.render(style), "シユ");
        assert_eq!(Syllable::<Japanese>::parse("シユ").unwrap(), syu);
    }
}
