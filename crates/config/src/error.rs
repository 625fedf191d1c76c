//! Configuration errors.

use crate::Config;
use figment::{
    Profile, Source,
    providers::{Format, Toml},
};
use std::{collections::HashSet, error::Error, fmt};

/// The message shown above every error that prevented the config from being extracted.
pub const FAILED_TO_EXTRACT_CONFIG_MSG: &str = "failed to extract solpack config:";

/// Represents a failed attempt to extract `Config` from a `Figment`
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractConfigError {
    /// error thrown when extracting the `Config`
    pub(crate) error: figment::Error,
}

impl ExtractConfigError {
    /// Wraps the figment error
    pub fn new(error: figment::Error) -> Self {
        Self { error }
    }

    /// Returns the underlying figment error.
    pub fn inner(&self) -> &figment::Error {
        &self.error
    }

    /// Returns every distinct setting that failed, in the order figment reported them.
    pub fn errors(&self) -> Vec<SolpackConfigError> {
        let mut seen = HashSet::with_capacity(self.error.count());
        self.error
            .clone()
            .into_iter()
            .map(SolpackConfigError::new)
            .filter(|err| seen.insert(err.to_string()))
            .collect()
    }
}

impl fmt::Display for ExtractConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{FAILED_TO_EXTRACT_CONFIG_MSG}")?;
        for err in self.errors() {
            writeln!(f, "{err}")?;
        }
        Ok(())
    }
}

impl Error for ExtractConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Error::source(&self.error)
    }
}

/// A single setting that could not be extracted, classified by where its value came from.
#[derive(Clone, Debug, PartialEq)]
pub enum SolpackConfigError {
    /// A value of a profile in `solpack.toml`.
    Toml(figment::Error),
    /// A `SOLPACK_` environment variable.
    Env(figment::Error),
    /// Any other error thrown when constructing the config's figment
    Other(figment::Error),
}

impl SolpackConfigError {
    /// Classifies `err` by the provider of the offending value.
    pub fn new(err: figment::Error) -> Self {
        let name = err.metadata.as_ref().map(|meta| &*meta.name).unwrap_or_default();
        if name.contains(Toml::NAME) {
            Self::Toml(err)
        } else if name.contains("environment") {
            Self::Env(err)
        } else {
            Self::Other(err)
        }
    }

    /// Returns the underlying figment error.
    pub fn inner(&self) -> &figment::Error {
        match self {
            Self::Toml(err) | Self::Env(err) | Self::Other(err) => err,
        }
    }

    /// Returns the dotted name of the offending setting, e.g. `hash`.
    pub fn key(&self) -> Option<String> {
        let path = &self.inner().path;
        (!path.is_empty()).then(|| path.join("."))
    }

    /// Returns the profile that was being extracted.
    pub fn profile(&self) -> Option<&Profile> {
        self.inner().profile.as_ref()
    }

    /// Returns the environment variable that holds the offending value.
    pub fn env_var(&self) -> Option<String> {
        let Self::Env(err) = self else { return None };
        let meta = err.metadata.as_ref()?;
        let profile = err.profile.clone().unwrap_or(Config::DEFAULT_PROFILE);
        let key = meta.interpolate(&profile, err.path.as_slice());
        Some(format!("{}{key}", Config::ENV_PREFIX))
    }
}

impl fmt::Display for SolpackConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Toml(err) => {
                match err.metadata.as_ref().and_then(|meta| meta.source.as_ref()) {
                    Some(Source::File(path)) => write!(f, "{}", path.display())?,
                    _ => f.write_str(Config::FILE_NAME)?,
                }
                if let Some(profile) = self.profile() {
                    write!(f, " [{}.{profile}]", Config::PROFILE_SECTION)?;
                }
                if let Some(key) = self.key() {
                    write!(f, " `{key}`")?;
                }
                write!(f, ": {}", err.kind)
            }
            Self::Env(err) => match self.env_var().filter(|_| !err.path.is_empty()) {
                Some(var) => write!(f, "environment variable `{var}`: {}", err.kind),
                None => write!(f, "environment: {}", err.kind),
            },
            Self::Other(err) => {
                write!(f, "solpack config error: {err}")?;
                if let Some(key) = self.key() {
                    write!(f, " for setting `{key}`")?;
                }
                Ok(())
            }
        }
    }
}

impl Error for SolpackConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Error::source(self.inner())
    }
}
