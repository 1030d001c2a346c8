#![deny(missing_docs)]
#![doc = "Syllable value types, capability traits and shared tables for the reflex dialect codecs."]

mod dialect;
pub mod diacritic;
pub mod errors;
pub mod ipa;
pub mod symbols;
pub mod syllable;
pub mod tone;

pub use dialect::Dialect;
pub use errors::{ErrorInfo, ReflexError};
pub use symbols::SymbolTable;
pub use syllable::{
    syllabic_nasal, write_tone, Orthography, Phonology, Slots, Syllable, Tonal, TonedSyllable,
};
pub use tone::{Checking, Tone, ToneClass, ToneStyle, ToneTable};
