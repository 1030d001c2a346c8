//! Strict phonetic rendering shared by the dialect codecs.

use crate::syllable::Slots;

/// Per-slot allophone substitutions.
#[derive(Debug, Clone, Copy)]
pub struct Allophones {
    /// Initial substitutions.
    pub initial: &'static [(&'static str, &'static str)],
    /// Nucleus substitutions.
    pub nucleus: &'static [(&'static str, &'static str)],
    /// Coda substitutions.
    pub coda: &'static [(&'static str, &'static str)],
}

/// Substitutions every dialect starts from: affricate tie bars, the apical
/// vowel, non-syllabic glide codas and unreleased stops.
pub const SHARED: Allophones = Allophones {
    initial: &[
        ("ts", "t͡s"),
        ("tsʰ", "t͡sʰ"),
        ("tɕ", "t͡ɕ"),
        ("tɕʰ", "t͡ɕʰ"),
        ("ʈʂ", "ʈ͡ʂ"),
        ("ʈʂʰ", "ʈ͡ʂʰ"),
    ],
    nucleus: &[("ɿ", "ɨ")],
    coda: &[
        ("i", "ɪ"),
        ("u", "ʊ"),
        ("p", "p̚"),
        ("t", "t̚"),
        ("k", "k̚"),
        ("ʔ", "ʔ̚"),
    ],
};

/// No dialect-specific substitutions.
pub const NONE: Allophones = Allophones {
    initial: &[],
    nucleus: &[],
    coda: &[],
};

fn lookup(table: &[(&'static str, &'static str)], value: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(from, _)| *from == value)
        .map(|(_, to)| *to)
}

/// Strict form of a bare syllabic nasal.
pub fn syllabic_nasal(initial: &str) -> Option<&'static str> {
    match initial {
        "m" => Some("m̩"),
        "n" => Some("n̩"),
        "ŋ" => Some("ŋ̍"),
        _ => None,
    }
}

/// Working copy of a syllable's slots during strict rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StrictForm {
    /// Initial.
    pub initial: String,
    /// Medial.
    pub medial: String,
    /// Nucleus.
    pub nucleus: String,
    /// Coda.
    pub coda: String,
}

impl StrictForm {
    /// Copies the slots unchanged.
    pub fn verbatim(slots: &Slots) -> Self {
        Self {
            initial: slots.initial.to_owned(),
            medial: slots.medial.to_owned(),
            nucleus: slots.nucleus.to_owned(),
            coda: slots.coda.to_owned(),
        }
    }

    /// Substitutes each slot through `own`, then through [`SHARED`].
    pub fn substitute(slots: &Slots, own: &Allophones) -> Self {
        let pick = |own: &[(&'static str, &'static str)], shared, value: &'static str| {
            lookup(own, value)
                .or_else(|| lookup(shared, value))
                .unwrap_or(value)
                .to_owned()
        };
        Self {
            initial: pick(own.initial, SHARED.initial, slots.initial),
            medial: slots.medial.to_owned(),
            nucleus: pick(own.nucleus, SHARED.nucleus, slots.nucleus),
            coda: pick(own.coda, SHARED.coda, slots.coda),
        }
    }

    /// Concatenates the four slots.
    pub fn join(&self) -> String {
        [
            self.initial.as_str(),
            self.medial.as_str(),
            self.nucleus.as_str(),
            self.coda.as_str(),
        ]
        .concat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialect_table_wins_over_shared() {
        const OWN: Allophones = Allophones {
            initial: &[("ts", "ts")],
            nucleus: &[],
            coda: &[("k", "k̟̚")],
        };
        let slots = Slots::new("ts", "", "ɿ", "k");
        let form = StrictForm::substitute(&slots, &OWN);
        assert_eq!(form.join(), "tsɨk̟̚");
        assert_eq!(StrictForm::substitute(&slots, &NONE).join(), "t͡sɨk̚");
    }
}
