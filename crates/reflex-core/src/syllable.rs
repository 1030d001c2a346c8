//! Syllable value types and the per-dialect capability traits.

use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use std::marker::PhantomData;
use std::ops::Deref;

use serde::Serialize;

use crate::errors::ReflexError;
use crate::tone::{Checking, Tone, ToneClass, ToneStyle, ToneTable};
use crate::Dialect;

/// The four segmental slots of a syllable, interned in the dialect's tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Slots {
    /// Onset consonant.
    pub initial: &'static str,
    /// Pre-nuclear glide.
    pub medial: &'static str,
    /// Vowel core.
    pub nucleus: &'static str,
    /// Final consonant or glide.
    pub coda: &'static str,
}

impl Slots {
    /// Bundles four slot values.
    pub const fn new(
        initial: &'static str,
        medial: &'static str,
        nucleus: &'static str,
        coda: &'static str,
    ) -> Self {
        Self {
            initial,
            medial,
            nucleus,
            coda,
        }
    }

    /// The slot tuple.
    pub fn as_tuple(&self) -> (&'static str, &'static str, &'static str, &'static str) {
        (self.initial, self.medial, self.nucleus, self.coda)
    }

    /// Plain concatenation of the slots.
    pub fn raw(&self) -> String {
        [self.initial, self.medial, self.nucleus, self.coda].concat()
    }

    /// Nucleus and coda.
    pub fn rhyme(&self) -> String {
        [self.nucleus, self.coda].concat()
    }

    /// Medial, nucleus and coda.
    pub fn final_part(&self) -> String {
        [self.medial, self.nucleus, self.coda].concat()
    }

    /// Whether medial, nucleus and coda are all empty.
    pub fn is_bare(&self) -> bool {
        self.medial.is_empty() && self.nucleus.is_empty() && self.coda.is_empty()
    }
}

/// Segmental inventory and phonetics of one dialect.
///
/// Implemented by a zero-sized marker type per dialect; the marker is the
/// type parameter of [`Syllable`] and [`TonedSyllable`], so syllables of
/// different dialects never compare equal.
pub trait Phonology:
    Debug + Clone + Copy + Default + PartialEq + Eq + PartialOrd + Ord + Hash + Send + Sync + 'static
{
    /// The dialect this marker stands for.
    const DIALECT: Dialect;

    /// Initials that may stand alone as a syllabic nasal.
    const SYLLABIC_NASALS: &'static [&'static str] = &["m", "ŋ"];

    /// Codas that make a syllable checked.
    const CHECKED_CODAS: &'static [&'static str] = &["p", "t", "k", "ʔ", "l"];

    /// Validates slot values, returning the interned copies.
    fn check(initial: &str, medial: &str, nucleus: &str, coda: &str) -> Result<Slots, ReflexError>;

    /// Every slot combination the dialect's tables can spell, before
    /// phonotactic filtering. [`Phonology::check`] accepts a subset of these.
    fn candidates() -> Vec<Slots>;

    /// Tone-independent narrow transcription.
    fn strict_ipa(slots: &Slots) -> String;

    /// Whether the slots form a bare syllabic nasal.
    fn is_syllabic_nasal(slots: &Slots) -> bool {
        slots.is_bare() && Self::SYLLABIC_NASALS.contains(&slots.initial)
    }

    /// Whether the coda closes the syllable with a stop or glottal.
    fn is_checked(slots: &Slots) -> bool {
        Self::CHECKED_CODAS.contains(&slots.coda)
    }
}

/// Returns the interned syllabic-nasal slots when the exemption applies.
pub fn syllabic_nasal<D: Phonology>(
    initial: &str,
    medial: &str,
    nucleus: &str,
    coda: &str,
) -> Option<Slots> {
    if !(medial.is_empty() && nucleus.is_empty() && coda.is_empty()) {
        return None;
    }
    D::SYLLABIC_NASALS
        .iter()
        .find(|nasal| **nasal == initial)
        .map(|nasal| Slots::new(*nasal, "", "", ""))
}

/// A dialect with a tone slot.
pub trait Tonal: Phonology {
    /// The dialect's tone inventory.
    fn tones() -> &'static ToneTable;
}

/// Orthographic rendering and parsing.
pub trait Orthography: Phonology {
    /// What the orthography spells: [`Syllable`] or [`TonedSyllable`].
    type Value;
    /// Output options.
    type Style: Debug + Clone + Copy + Default;

    /// Writes `value` in the dialect's orthography.
    fn render(value: &Self::Value, style: Self::Style) -> String;

    /// Reads orthographic text; the inverse of [`Orthography::render`].
    fn parse(text: &str) -> Result<Self::Value, ReflexError>;
}

/// A validated syllable of dialect `D`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(bound = "")]
pub struct Syllable<D> {
    #[serde(flatten)]
    slots: Slots,
    #[serde(skip)]
    dialect: PhantomData<D>,
}

impl<D: Phonology> Syllable<D> {
    /// Validates and builds a syllable.
    pub fn new(initial: &str, medial: &str, nucleus: &str, coda: &str) -> Result<Self, ReflexError> {
        let slots = D::check(initial, medial, nucleus, coda)?;
        Ok(Self {
            slots,
            dialect: PhantomData,
        })
    }

    /// Validates a slot bundle.
    pub fn from_slots(slots: Slots) -> Result<Self, ReflexError> {
        Self::new(slots.initial, slots.medial, slots.nucleus, slots.coda)
    }

    /// The slot bundle.
    pub fn slots(&self) -> Slots {
        self.slots
    }

    /// Onset consonant.
    pub fn initial(&self) -> &'static str {
        self.slots.initial
    }

    /// Pre-nuclear glide.
    pub fn medial(&self) -> &'static str {
        self.slots.medial
    }

    /// Vowel core.
    pub fn nucleus(&self) -> &'static str {
        self.slots.nucleus
    }

    /// Final consonant or glide.
    pub fn coda(&self) -> &'static str {
        self.slots.coda
    }

    /// Plain concatenation of the slots.
    pub fn raw(&self) -> String {
        self.slots.raw()
    }

    /// Nucleus and coda.
    pub fn rhyme(&self) -> String {
        self.slots.rhyme()
    }

    /// Medial, nucleus and coda.
    pub fn final_part(&self) -> String {
        self.slots.final_part()
    }

    /// Whether this is a bare syllabic nasal.
    pub fn is_syllabic_nasal(&self) -> bool {
        D::is_syllabic_nasal(&self.slots)
    }

    /// Whether the coda is a stop or glottal.
    pub fn is_checked(&self) -> bool {
        D::is_checked(&self.slots)
    }

    /// Tone-independent narrow transcription.
    pub fn strict_ipa(&self) -> String {
        D::strict_ipa(&self.slots)
    }
}

impl<D: Orthography<Value = Syllable<D>>> Syllable<D> {
    /// Writes the syllable in the dialect's orthography.
    pub fn render(&self, style: D::Style) -> String {
        D::render(self, style)
    }

    /// Reads orthographic text.
    pub fn parse(text: &str) -> Result<Self, ReflexError> {
        D::parse(text)
    }
}

impl<D: Phonology> Display for Syllable<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.slots.raw())
    }
}

/// A validated syllable of dialect `D` with its tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(bound = "")]
pub struct TonedSyllable<D> {
    #[serde(flatten)]
    syllable: Syllable<D>,
    tone: &'static str,
}

impl<D: Tonal> TonedSyllable<D> {
    /// Validates and builds a toned syllable.
    pub fn new(
        initial: &str,
        medial: &str,
        nucleus: &str,
        coda: &str,
        tone: &str,
    ) -> Result<Self, ReflexError> {
        Self::with_tone(Syllable::new(initial, medial, nucleus, coda)?, tone)
    }

    /// Attaches a tone to a validated syllable, enforcing the checked-tone partition.
    pub fn with_tone(syllable: Syllable<D>, tone: &str) -> Result<Self, ReflexError> {
        let checked = syllable.is_checked();
        let info = D::tones()
            .get(tone)
            .ok_or_else(|| ReflexError::illegal_tone(D::DIALECT, tone, &syllable.raw(), checked))?;
        match (info.checking, checked) {
            (Checking::Open, true) | (Checking::Checked, false) => Err(ReflexError::illegal_tone(
                D::DIALECT,
                tone,
                &syllable.raw(),
                checked,
            )),
            _ => Ok(Self {
                syllable,
                tone: info.code,
            }),
        }
    }

    /// The toneless syllable.
    pub fn syllable(&self) -> Syllable<D> {
        self.syllable
    }

    /// Tone code.
    pub fn tone(&self) -> &'static str {
        self.tone
    }

    /// The tone table row.
    pub fn tone_info(&self) -> &'static Tone {
        D::tones()
            .get(self.tone)
            .unwrap_or_else(|| unreachable!("tone validated at construction"))
    }

    /// Middle Chinese tone category continued by this tone, if any.
    pub fn tone_class(&self) -> Option<ToneClass> {
        self.tone_info().class
    }

    /// Final followed by the tone code.
    pub fn toned_final(&self) -> String {
        self.syllable.final_part() + self.tone
    }
}

impl<D: Tonal + Orthography<Value = TonedSyllable<D>>> TonedSyllable<D> {
    /// Writes the syllable in the dialect's orthography.
    pub fn render(&self, style: D::Style) -> String {
        D::render(self, style)
    }

    /// Reads orthographic text.
    pub fn parse(text: &str) -> Result<Self, ReflexError> {
        D::parse(text)
    }
}

impl<D> Deref for TonedSyllable<D> {
    type Target = Syllable<D>;

    fn deref(&self) -> &Self::Target {
        &self.syllable
    }
}

impl<D: Phonology> Display for TonedSyllable<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.syllable, self.tone)
    }
}

/// Writes the tone of a numeral-or-diacritic romanisation.
///
/// `spelled` is the toneless spelling; `mark_at` puts the diacritic in place
/// when the style asks for one.
pub fn write_tone(
    spelled: String,
    tone: &Tone,
    style: ToneStyle,
    mark_at: impl FnOnce(String, Option<char>) -> String,
) -> String {
    match style {
        ToneStyle::Numeral => spelled + tone.code,
        ToneStyle::Diacritic => mark_at(spelled, tone.mark),
        ToneStyle::Omitted => spelled,
    }
}
