//! Environment variable helpers shared by the config loaders.

use std::env;
use std::str::FromStr;

use crate::error::{RapportError, Result};

/// Parses `key` from the environment, or returns `default` when unset.
///
/// A set but unparsable value is a [`RapportError::Config`].
pub fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| RapportError::Config(format!("{key}={raw:?}: {e}"))),
        Err(_) => Ok(default),
    }
}
