//! TOML configuration loading.
//!
//! Settings types across the workspace derive `serde::Deserialize`; these
//! helpers turn a TOML document into any of them, mapping I/O and parse
//! failures to [`Error::Config`].

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::errors::{Error, Result};

/// Parse a TOML document into `T`.
pub fn from_toml_str<T: DeserializeOwned>(content: &str) -> Result<T> {
    toml::from_str(content).map_err(|e| Error::Config(format!("failed to parse TOML: {e}")))
}

/// Read and parse a TOML file into `T`.
pub fn from_toml_file<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("failed to read `{}`: {e}", path.display()))
    })?;
    from_toml_str(&content)
}
