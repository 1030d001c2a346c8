//! Staged derivation of a modern reflex from a [`RhymeClass`].
//!
//! Every rule set answers five questions in a fixed order: nucleus, coda,
//! medial, initial, tone. Later stages read what earlier ones produced, so
//! the order cannot change. A stage that has no rule for the record's
//! categories fails with `category-not-found`; there is no fallback value.
//! Global patches and per-id overrides run after the stages, and the result
//! must be a legal syllable of the target dialect.

use std::fmt::{self, Display};

use reflex_core::{Phonology, ReflexError, Tonal, TonedSyllable};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::record::RhymeClass;

/// One derived part of a reflex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Part {
    /// 韻腹.
    Nucleus,
    /// 韻尾.
    Coda,
    /// 介音.
    Medial,
    /// 聲母.
    Initial,
    /// 聲調.
    Tone,
}

impl Part {
    /// Derivation order.
    pub const ORDER: [Part; 5] = [Part::Nucleus, Part::Coda, Part::Medial, Part::Initial, Part::Tone];

    /// Lower-case name used in error context.
    pub fn name(self) -> &'static str {
        match self {
            Part::Nucleus => "nucleus",
            Part::Coda => "coda",
            Part::Medial => "medial",
            Part::Initial => "initial",
            Part::Tone => "tone",
        }
    }
}

/// The five derived fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ReflexParts {
    /// Initial.
    pub initial: &'static str,
    /// Medial.
    pub medial: &'static str,
    /// Nucleus.
    pub nucleus: &'static str,
    /// Coda.
    pub coda: &'static str,
    /// Tone code in the dialect's own numbering.
    pub tone: &'static str,
}

impl ReflexParts {
    /// Reads one part.
    pub fn get(&self, part: Part) -> &'static str {
        match part {
            Part::Initial => self.initial,
            Part::Medial => self.medial,
            Part::Nucleus => self.nucleus,
            Part::Coda => self.coda,
            Part::Tone => self.tone,
        }
    }

    /// Replaces one part.
    pub fn set(&mut self, part: Part, value: &'static str) {
        match part {
            Part::Initial => self.initial = value,
            Part::Medial => self.medial = value,
            Part::Nucleus => self.nucleus = value,
            Part::Coda => self.coda = value,
            Part::Tone => self.tone = value,
        }
    }
}

impl Display for ReflexParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.initial, self.medial, self.nucleus, self.coda, self.tone
        )
    }
}

/// Sound-change rules from Middle Chinese categories to one dialect.
///
/// Each stage returns `None` when no rule covers the record.
pub trait RuleSet {
    /// Dialect the rules produce.
    type Dialect: Tonal;

    /// Lexical exceptions: `(rhyme-class id, part, value)`.
    const OVERRIDES: &'static [(u32, Part, &'static str)] = &[];

    /// First stage.
    fn nucleus(record: &RhymeClass) -> Option<&'static str>;

    /// Second stage.
    fn coda(record: &RhymeClass, nucleus: &str) -> Option<&'static str>;

    /// Third stage.
    fn medial(record: &RhymeClass, nucleus: &str, coda: &str) -> Option<&'static str>;

    /// Fourth stage.
    fn initial(record: &RhymeClass, medial: &str, nucleus: &str) -> Option<&'static str>;

    /// Last stage.
    fn tone(record: &RhymeClass) -> Option<&'static str>;

    /// Rewrites applied to every derived reflex regardless of category.
    fn patch(_record: &RhymeClass, _parts: &mut ReflexParts) {}
}

fn settle<R: RuleSet>(
    record: &RhymeClass,
    parts: &mut ReflexParts,
    stage: Part,
    value: Option<&'static str>,
) -> Result<&'static str, ReflexError> {
    let Some(value) = value else {
        let mut err = ReflexError::category_not_found(
            <R::Dialect as Phonology>::DIALECT,
            record.id,
            stage.name(),
            &record.describe(),
        );
        let context = &mut err.info_mut().context;
        for part in Part::ORDER.iter().take_while(|part| **part != stage) {
            context.insert(part.name().to_owned(), parts.get(*part).to_owned());
        }
        return Err(err);
    };
    trace!(id = record.id, stage = stage.name(), value, "derived");
    parts.set(stage, value);
    Ok(value)
}

/// Runs the five stages, the patches and the overrides, without validating.
pub fn derive_parts<R: RuleSet>(record: &RhymeClass) -> Result<ReflexParts, ReflexError> {
    let mut parts = ReflexParts::default();
    let nucleus = settle::<R>(record, &mut parts, Part::Nucleus, R::nucleus(record))?;
    let coda = settle::<R>(record, &mut parts, Part::Coda, R::coda(record, nucleus))?;
    let medial = settle::<R>(record, &mut parts, Part::Medial, R::medial(record, nucleus, coda))?;
    settle::<R>(record, &mut parts, Part::Initial, R::initial(record, medial, nucleus))?;
    settle::<R>(record, &mut parts, Part::Tone, R::tone(record))?;

    let regular = parts;
    R::patch(record, &mut parts);
    if parts != regular {
        debug!(id = record.id, %regular, patched = %parts, "applied patch rules");
    }
    for (_, part, value) in R::OVERRIDES.iter().filter(|(id, _, _)| *id == record.id) {
        debug!(id = record.id, part = part.name(), value, "applied lexical override");
        parts.set(*part, *value);
    }
    Ok(parts)
}

/// Derives and validates the reflex of `record` under `R`.
pub fn derive<R: RuleSet>(record: &RhymeClass) -> Result<TonedSyllable<R::Dialect>, ReflexError> {
    let parts = derive_parts::<R>(record)?;
    TonedSyllable::new(parts.initial, parts.medial, parts.nucleus, parts.coda, parts.tone).map_err(
        |mut err| {
            err.info_mut()
                .context
                .insert("id".to_owned(), record.id.to_string());
            err
        },
    )
}
