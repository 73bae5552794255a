//! Load cookie option overrides from configuration sources.
//!
//! [`OverridesLoader`] is the key type in this module.
use std::path::PathBuf;

use anyhow::Context;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use tracing_log_error::log_error;

use crate::CookieOptions;
use crate::errors::OverridesLoadError;

/// The prefix used by [`OverridesLoader`] unless told otherwise.
pub const DEFAULT_ENV_PREFIX: &str = "COOKIE_OPTIONS_";

#[derive(Clone, Debug)]
/// Load a set of cookie option overrides from a YAML file and from
/// environment variables.
///
/// The result is an *overrides* set: combine it with the defaults using
/// [`cookie_options`](crate::cookie_options).
///
/// # Example
///
/// ```rust,no_run
/// use cookie_options::{config::OverridesLoader, cookie_options};
///
/// # fn main() -> Result<(), cookie_options::errors::OverridesLoadError> {
/// let overrides = OverridesLoader::new()
///     .file("configuration/cookies.yml")
///     .load()?;
/// let options = cookie_options(Some(overrides));
/// # Ok(())
/// # }
/// ```
pub struct OverridesLoader {
    file: Option<PathBuf>,
    env_prefix: String,
}

impl Default for OverridesLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl OverridesLoader {
    /// A loader that only looks at environment variables prefixed with
    /// [`DEFAULT_ENV_PREFIX`].
    pub fn new() -> Self {
        Self {
            file: None,
            env_prefix: DEFAULT_ENV_PREFIX.to_owned(),
        }
    }

    /// Also read overrides from a YAML file.
    ///
    /// A missing file is treated as an empty one.
    pub fn file<P>(mut self, path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        self.file = Some(path.into());
        self
    }

    /// Change the prefix of the environment variables to look at.
    pub fn env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load the overrides by merging together, in increasing order of precedence:
    ///
    /// 1. The YAML file, if one was specified
    /// 2. Environment variables starting with the configured prefix
    ///
    /// Keys in the YAML file use the same names as the serialized form of
    /// [`CookieOptions`] (e.g. `maxAge`).
    /// Environment variables use the snake_case form, e.g.
    /// `COOKIE_OPTIONS_MAX_AGE=60` sets `maxAge`.
    pub fn load(&self) -> Result<CookieOptions, OverridesLoadError> {
        let span = tracing::info_span!(
            "Loading cookie option overrides",
            configuration.file = ?self.file,
            configuration.env_prefix = %self.env_prefix,
        );
        let _guard = span.enter();

        let mut figment = Figment::new();
        if let Some(file) = &self.file {
            figment = figment.merge(Yaml::file(file));
        }
        let figment = figment.merge(Env::prefixed(&self.env_prefix));

        let overrides: CookieOptions = figment
            .extract()
            .context("Failed to extract cookie options out of the configuration sources")
            .map_err(OverridesLoadError)?;
        tracing::debug!(n_overrides = overrides.len(), "Loaded cookie option overrides");
        Ok(overrides)
    }

    /// Like [`OverridesLoader::load`], but failures are logged and an empty
    /// set of overrides is returned instead.
    pub fn load_or_default(&self) -> CookieOptions {
        match self.load() {
            Ok(overrides) => overrides,
            Err(e) => {
                log_error!(
                    e,
                    level: tracing::Level::WARN,
                    "Invalid cookie option overrides, falling back to the defaults"
                );
                CookieOptions::new()
            }
        }
    }
}
