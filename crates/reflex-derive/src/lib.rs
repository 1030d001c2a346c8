#![deny(missing_docs)]
#![doc = "Middle Chinese category records and the staged rule sets that predict their modern reflexes."]

pub mod engine;
pub mod gan;
pub mod hakka;
pub mod record;

use reflex_core::{Dialect, ErrorInfo, ReflexError};
use reflex_dialects::Pronunciation;

pub use engine::{derive, derive_parts, Part, ReflexParts, RuleSet};
pub use gan::GanRules;
pub use hakka::HakkaRules;
pub use record::{
    Department, Grade, Initial, InitialGroup, Openness, Register, RhymeClass, RhymeGroup,
};

/// Dialects that have a rule set.
pub const RULE_DIALECTS: [Dialect; 2] = [Dialect::Gan, Dialect::Hakka];

/// Derives the reflex of `record` in `dialect`.
pub fn derive_reflex(dialect: Dialect, record: &RhymeClass) -> Result<Pronunciation, ReflexError> {
    match dialect {
        Dialect::Gan => derive::<GanRules>(record).map(Pronunciation::Gan),
        Dialect::Hakka => derive::<HakkaRules>(record).map(Pronunciation::Hakka),
        other => Err(ReflexError::DerivationNotFound(
            ErrorInfo::new(
                "no-rule-set",
                format!("no derivation rules for {}", other.code()),
            )
            .with_dialect(other)
            .with_hint("rules exist for FG and MH"),
        )),
    }
}
