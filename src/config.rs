//! Environment-sourced configuration.
//!
//! The bootstrap procedure never touches the process environment itself; it
//! receives a [`Config`] built here, once, by the caller.

use figment::{Figment, providers::Env};
use serde::Deserialize;

use crate::error::InitError;

/// The entire external configuration surface, read from `MONGODB_*` variables.
///
/// `user`, `password` and `database` default to the empty string when unset.
/// No placeholder is substituted for them: the server is expected to reject a
/// `createUser` call with an empty principal name or an empty role grant.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub database: String,
    #[serde(default = "default_uri")]
    pub uri: String,
    #[serde(default = "default_loglevel")]
    pub loglevel: String,
}

fn default_uri() -> String {
    "mongodb://localhost:27017".to_string()
}

fn default_loglevel() -> String {
    "info".to_string()
}

impl Config {
    /// Read `MONGODB_USER`, `MONGODB_PASSWORD`, `MONGODB_DATABASE`,
    /// `MONGODB_URI` and `MONGODB_LOGLEVEL` from the environment.
    pub fn from_env() -> Result<Self, InitError> {
        let cfg = Figment::new()
            .merge(Env::prefixed("MONGODB_"))
            .extract()?;
        Ok(cfg)
    }
}
