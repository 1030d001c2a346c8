#![deny(missing_docs)]
#![doc = "Segmental script tables: the kana catalog with historical spellings and arithmetic Hangul composition."]

pub mod hangul;
pub mod kana;

pub use hangul::{compose, compose_jamo, decompose, decompose_jamo, JamoIndices};
pub use kana::{Kana, KanaForm, CATALOG};
