//! Four-slot spelling tables and final segmentation shared by the
//! cross-product romanisations.

use reflex_core::symbols::{char_prefix, char_suffix, SymbolTable};
use reflex_core::{ipa, Dialect, Phonology, ReflexError, Slots, ToneStyle};

/// One [`SymbolTable`] per slot.
#[derive(Debug)]
pub(crate) struct Inventory {
    pub initial: SymbolTable,
    pub medial: SymbolTable,
    pub nucleus: SymbolTable,
    pub coda: SymbolTable,
}

type Pairs = &'static [(&'static str, &'static str)];

impl Inventory {
    pub fn new(initial: Pairs, medial: Pairs, nucleus: Pairs, coda: Pairs) -> Self {
        Self {
            initial: SymbolTable::new(initial),
            medial: SymbolTable::new(medial),
            nucleus: SymbolTable::new(nucleus),
            coda: SymbolTable::new(coda),
        }
    }

    /// Interns each slot, failing on the first one outside its table.
    pub fn intern(
        &self,
        dialect: Dialect,
        initial: &str,
        medial: &str,
        nucleus: &str,
        coda: &str,
    ) -> Result<Slots, ReflexError> {
        let raw = [initial, medial, nucleus, coda].concat();
        let pick = |table: &SymbolTable, slot: &str, value: &str| {
            table
                .intern(value)
                .ok_or_else(|| ReflexError::illegal_slot(dialect, slot, value, &raw))
        };
        Ok(Slots::new(
            pick(&self.initial, "initial", initial)?,
            pick(&self.medial, "medial", medial)?,
            pick(&self.nucleus, "nucleus", nucleus)?,
            pick(&self.coda, "coda", coda)?,
        ))
    }

    /// Maps spelled slots back to interned IPA, failing on the first unknown spelling.
    pub fn read(
        &self,
        dialect: Dialect,
        text: &str,
        spelled: [&str; 4],
    ) -> Result<[&'static str; 4], ReflexError> {
        let [initial, medial, nucleus, coda] = spelled;
        let pick = |table: &SymbolTable, value: &str| {
            table
                .ipa(value)
                .ok_or_else(|| ReflexError::unparseable(dialect, text))
        };
        Ok([
            pick(&self.initial, initial)?,
            pick(&self.medial, medial)?,
            pick(&self.nucleus, nucleus)?,
            pick(&self.coda, coda)?,
        ])
    }

    /// Canonical spelling of every slot.
    pub fn spell(&self, slots: &Slots) -> [&'static str; 4] {
        [
            self.initial.spelling(slots.initial).unwrap_or(slots.initial),
            self.medial.spelling(slots.medial).unwrap_or(slots.medial),
            self.nucleus.spelling(slots.nucleus).unwrap_or(slots.nucleus),
            self.coda.spelling(slots.coda).unwrap_or(slots.coda),
        ]
    }

    /// Splits a spelled rhyme into interned `(nucleus, coda)`, trying the
    /// longest coda spelling first.
    pub fn split_rhyme(&self, text: &str, max_coda: usize) -> Option<(&'static str, &'static str)> {
        (0..=max_coda).rev().find_map(|len| {
            let coda = char_suffix(text, len)?;
            let nucleus = &text[..text.len() - coda.len()];
            Some((self.nucleus.ipa(nucleus)?, self.coda.ipa(coda)?))
        })
    }

    /// Every slot combination of the four tables, plus the bare syllabic nasals of `D`.
    pub fn candidates<D: Phonology>(&self) -> Vec<Slots> {
        let mut out = Vec::new();
        for initial in self.initial.ipa_values() {
            for medial in self.medial.ipa_values() {
                for nucleus in self.nucleus.ipa_values() {
                    for coda in self.coda.ipa_values() {
                        out.push(Slots::new(initial, medial, nucleus, coda));
                    }
                }
            }
        }
        for nasal in D::SYLLABIC_NASALS {
            let bare = Slots::new(*nasal, "", "", "");
            if !out.contains(&bare) {
                out.push(bare);
            }
        }
        out
    }
}

/// Strict form of a bare syllabic nasal, or `None` for any other syllable.
pub(crate) fn strict_nasal<D: Phonology>(slots: &Slots) -> Option<String> {
    if !D::is_syllabic_nasal(slots) {
        return None;
    }
    Some(ipa::syllabic_nasal(slots.initial).unwrap_or(slots.initial).to_owned())
}

/// Appends the tone code unless the style omits tones. Orthographies
/// without tone diacritics write numerals for [`ToneStyle::Diacritic`] too.
pub(crate) fn append_tone(spelled: String, code: &str, style: ToneStyle) -> String {
    match style {
        ToneStyle::Omitted => spelled,
        ToneStyle::Numeral | ToneStyle::Diacritic => spelled + code,
    }
}

/// Splits a final into `(medial, nucleus, coda)` by its letter count.
///
/// Three letters split one by one (the coda keeps everything after the
/// second). Two letters split as nucleus and coda when the second is a coda
/// and the pair is not listed in `glide_finals`; otherwise as medial and
/// nucleus. Anything else is a bare nucleus. With `ng_digraph`, a trailing
/// `ng` counts as one letter.
pub(crate) fn split_final<'a>(
    text: &'a str,
    ng_digraph: bool,
    is_coda: impl Fn(&str) -> bool,
    glide_finals: &[&str],
) -> (&'a str, &'a str, &'a str) {
    let count = text.chars().count();
    let letters = if ng_digraph && text.ends_with("ng") {
        count - 1
    } else {
        count
    };
    let cut = |n: usize| char_prefix(text, n).map_or(text.len(), str::len);
    match letters {
        3 => (&text[..cut(1)], &text[cut(1)..cut(2)], &text[cut(2)..]),
        2 => {
            let (head, tail) = text.split_at(cut(1));
            if is_coda(tail) && !glide_finals.contains(&text) {
                ("", head, tail)
            } else {
                (head, tail, "")
            }
        }
        _ => ("", text, ""),
    }
}

/// Splits a trailing tone digit (superscript accepted) off raw IPA.
pub(crate) fn split_ipa_tone(dialect: Dialect, text: &str) -> Result<(String, &'static str), ReflexError> {
    let normal = reflex_core::diacritic::superscript_to_digits(text.trim());
    let (body, digit) = reflex_core::diacritic::split_tone_digit(&normal);
    let tone = digit
        .and_then(reflex_core::diacritic::digit_str)
        .ok_or_else(|| ReflexError::unparseable(dialect, text))?;
    Ok((body.to_owned(), tone))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finals_split_by_letter_count() {
        let coda = |tail: &str| matches!(tail, "i" | "u" | "n" | "ng");
        assert_eq!(split_final("iang", true, coda, &[]), ("i", "a", "ng"));
        assert_eq!(split_final("ang", true, coda, &[]), ("", "a", "ng"));
        assert_eq!(split_final("ia", true, coda, &[]), ("i", "a", ""));
        assert_eq!(split_final("iu", true, coda, &["iu"]), ("i", "u", ""));
        assert_eq!(split_final("ai", true, coda, &["iu"]), ("", "a", "i"));
        assert_eq!(split_final("jaŋ", false, coda, &[]), ("j", "a", "ŋ"));
        assert_eq!(split_final("", true, coda, &[]), ("", "", ""));
    }
}
