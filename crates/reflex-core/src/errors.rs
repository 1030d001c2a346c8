//! Structured error types shared across the reflex crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Dialect;

/// Structured payload attached to every [`ReflexError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Dialect whose inventory, orthography or rule set raised the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialect: Option<Dialect>,
    /// Slot, offending value, record id and similar details.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            dialect: None,
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Tags the payload with the dialect at fault.
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = Some(dialect);
        self
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {}", self.message, self.code)?;
        if let Some(dialect) = self.dialect {
            write!(f, ", dialect: {}", dialect.code())?;
        }
        write!(f, ")")?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Canonical error type for syllable construction, parsing and derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum ReflexError {
    /// A slot or tone value lies outside the dialect's inventory or tone partition.
    #[error("invalid syllable: {0}")]
    InvalidSyllable(ErrorInfo),
    /// Orthographic text does not decompose into a legal syllable.
    #[error("parse failure: {0}")]
    ParseFailure(ErrorInfo),
    /// A historical category combination has no matching rule branch.
    #[error("derivation not found: {0}")]
    DerivationNotFound(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl ReflexError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            ReflexError::InvalidSyllable(info)
            | ReflexError::ParseFailure(info)
            | ReflexError::DerivationNotFound(info)
            | ReflexError::Serde(info) => info,
        }
    }

    /// Mutable access to the payload, for callers that add context on the way up.
    pub fn info_mut(&mut self) -> &mut ErrorInfo {
        match self {
            ReflexError::InvalidSyllable(info)
            | ReflexError::ParseFailure(info)
            | ReflexError::DerivationNotFound(info)
            | ReflexError::Serde(info) => info,
        }
    }

    /// Builds an [`ReflexError::InvalidSyllable`] for a slot value outside the inventory.
    pub fn illegal_slot(dialect: Dialect, slot: &str, value: &str, raw: &str) -> Self {
        ReflexError::InvalidSyllable(
            ErrorInfo::new(
                format!("illegal-{slot}"),
                format!("illegal {slot} {value:?} in {} syllable {raw}", dialect.code()),
            )
            .with_dialect(dialect)
            .with_context("slot", slot)
            .with_context("value", value),
        )
    }

    /// Builds an [`ReflexError::InvalidSyllable`] for a final the dialect's
    /// phonotactics exclude even though every slot is in the inventory.
    pub fn illegal_final(dialect: Dialect, final_part: &str, raw: &str, reason: &str) -> Self {
        ReflexError::InvalidSyllable(
            ErrorInfo::new(
                "illegal-final",
                format!("illegal final {final_part:?} in {} syllable {raw}", dialect.code()),
            )
            .with_dialect(dialect)
            .with_context("slot", "final")
            .with_context("value", final_part)
            .with_hint(reason),
        )
    }

    /// Builds an [`ReflexError::InvalidSyllable`] for an unknown or misplaced tone.
    pub fn illegal_tone(dialect: Dialect, tone: &str, raw: &str, checked: bool) -> Self {
        let info = ErrorInfo::new(
            "illegal-tone",
            format!("illegal tone {tone:?} in {} syllable {raw}", dialect.code()),
        )
        .with_dialect(dialect)
        .with_context("tone", tone)
        .with_context("checked", checked.to_string());
        ReflexError::InvalidSyllable(info)
    }

    /// Builds a [`ReflexError::ParseFailure`] carrying the offending text.
    pub fn unparseable(dialect: Dialect, text: &str) -> Self {
        ReflexError::ParseFailure(
            ErrorInfo::new(
                "unparseable",
                format!("cannot read {text:?} as a {} syllable", dialect.code()),
            )
            .with_dialect(dialect)
            .with_context("text", text),
        )
    }

    /// Builds a [`ReflexError::DerivationNotFound`] for a category combination
    /// no rule of `stage` covers.
    pub fn category_not_found(dialect: Dialect, id: u32, stage: &str, record: &str) -> Self {
        ReflexError::DerivationNotFound(
            ErrorInfo::new(
                "category-not-found",
                format!("no {} {stage} rule for rhyme class {id} ({record})", dialect.code()),
            )
            .with_dialect(dialect)
            .with_context("id", id.to_string())
            .with_context("stage", stage)
            .with_context("record", record),
        )
    }

    /// Re-labels a construction failure met while parsing `text` as a parse failure.
    ///
    /// Other families pass through untouched.
    pub fn while_parsing(self, dialect: Dialect, text: &str) -> Self {
        match self {
            ReflexError::InvalidSyllable(cause) => {
                let mut failure = Self::unparseable(dialect, text);
                if let ReflexError::ParseFailure(info) = &mut failure {
                    info.context.insert("cause".into(), cause.code);
                    for (key, value) in cause.context {
                        info.context.entry(key).or_insert(value);
                    }
                }
                failure
            }
            other => other,
        }
    }
}
