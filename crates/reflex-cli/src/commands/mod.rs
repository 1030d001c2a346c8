//! One module per subcommand; each exposes its clap arguments and a `run`.

pub mod convert;
pub mod derive;
pub mod normalize;
pub mod parse;
pub mod verify;

use std::error::Error;
use std::io::Write;

use serde::de::{value, DeserializeOwned, IntoDeserializer};
use serde::Serialize;

/// Reads a kebab-case enum value from a flag.
pub fn kebab<T: DeserializeOwned>(text: &str) -> Result<T, String> {
    T::deserialize(text.into_deserializer()).map_err(|err: value::Error| err.to_string())
}

pub(crate) fn write_json_line<T: Serialize>(out: &mut dyn Write, value: &T) -> Result<(), Box<dyn Error>> {
    writeln!(out, "{}", serde_json::to_string(value)?)?;
    Ok(())
}
