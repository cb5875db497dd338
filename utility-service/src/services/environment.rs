//! Process environment lookups with caller-supplied fallbacks.

use std::env::{self, VarError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvError {
    #[error("environment variable {0} is not valid unicode")]
    NotUnicode(String),
}

/// Read `name` from the process environment, falling back to `default`.
///
/// A variable that is set always wins over the default, even when its value
/// is empty or `"0"`.
pub fn get_env_var(name: &str, default: Option<&str>) -> Result<Option<String>, EnvError> {
    resolve(name, default, |key| env::var(key))
}

/// Fallback rules of [`get_env_var`] over an arbitrary lookup function.
pub fn resolve<F>(name: &str, default: Option<&str>, lookup: F) -> Result<Option<String>, EnvError>
where
    F: FnOnce(&str) -> Result<String, VarError>,
{
    match lookup(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(default.map(str::to_string)),
        Err(VarError::NotUnicode(_)) => Err(EnvError::NotUnicode(name.to_string())),
    }
}
