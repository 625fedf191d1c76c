//! # solpack-config
//!
//! Configuration for the `solpack` command line tool.
//!
//! Values are layered, from lowest to highest priority: the defaults, the selected profile of
//! `solpack.toml` and `SOLPACK_`-prefixed environment variables.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

use figment::{
    Figment, Metadata, Profile, Provider,
    providers::{Env, Format, Serialized, Toml},
    value::{Dict, Map},
};
use serde::{Deserialize, Serialize};
use solpack::HashKind;
use std::path::Path;

mod error;
pub use error::{ExtractConfigError, SolpackConfigError};

mod providers;
use providers::UnwrapProfileProvider;

/// Solpack configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The selected profile. **(default: _default_ `default`)**
    ///
    /// **Note:** This field is never serialized nor deserialized. When a `Config` is merged into
    /// a `Figment` as a provider, this profile is selected on the `Figment`.
    #[serde(skip)]
    pub profile: Profile,
    /// The digest used by `solpack hash` when `--hash` is not given.
    pub hash: HashKind,
    /// Whether hex output is `0x` prefixed.
    pub hex_prefix: bool,
}

impl Config {
    /// The default profile: "default"
    pub const DEFAULT_PROFILE: Profile = Profile::const_new("default");

    /// The table in `solpack.toml` that holds the profiles.
    pub const PROFILE_SECTION: &'static str = "profile";

    /// File name of config toml file
    pub const FILE_NAME: &'static str = "solpack.toml";

    /// Prefix of the environment variables that override the config file.
    pub const ENV_PREFIX: &'static str = "SOLPACK_";

    /// Environment variable that selects the profile.
    pub const PROFILE_ENV: &'static str = "SOLPACK_PROFILE";

    /// Loads the config of the current working directory.
    pub fn load() -> Result<Self, ExtractConfigError> {
        Self::load_with_root(".")
    }

    /// Loads the config with `solpack.toml` looked up in `root`.
    pub fn load_with_root(root: impl AsRef<Path>) -> Result<Self, ExtractConfigError> {
        Self::from_provider(Self::figment_with_root(root))
    }

    /// Returns the profile selected by `SOLPACK_PROFILE`, falling back to
    /// [`DEFAULT_PROFILE`](Self::DEFAULT_PROFILE).
    pub fn selected_profile() -> Profile {
        Profile::from_env_or(Self::PROFILE_ENV, Self::DEFAULT_PROFILE)
    }

    /// Returns the layered figment for the current working directory.
    pub fn figment() -> Figment {
        Self::figment_with_root(".")
    }

    /// Returns the layered figment with `solpack.toml` looked up in `root`.
    pub fn figment_with_root(root: impl AsRef<Path>) -> Figment {
        let profile = Self::selected_profile();
        let toml = Toml::file(root.as_ref().join(Self::FILE_NAME)).nested();

        let mut figment = Figment::from(Self { profile: profile.clone(), ..Self::default() })
            .merge(UnwrapProfileProvider::new(&toml, Self::PROFILE_SECTION, Self::DEFAULT_PROFILE));
        if profile != Self::DEFAULT_PROFILE {
            figment = figment.merge(UnwrapProfileProvider::new(
                &toml,
                Self::PROFILE_SECTION,
                profile.clone(),
            ));
        }
        figment
            .merge(Env::prefixed(Self::ENV_PREFIX).ignore(&["PROFILE", "DEBUG"]).global())
            .select(profile)
    }

    /// Extracts a `Config` from `provider`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use figment::providers::{Format, Toml};
    /// use solpack_config::Config;
    ///
    /// let figment = Config::figment().merge(Toml::string("hex_prefix = false"));
    /// let config = Config::from_provider(figment)?;
    /// assert!(!config.hex_prefix);
    /// # Ok::<_, solpack_config::ExtractConfigError>(())
    /// ```
    pub fn from_provider<T: Provider>(provider: T) -> Result<Self, ExtractConfigError> {
        trace!(target: "solpack::config", "load config with provider: {:?}", provider.metadata());
        let figment = Figment::from(provider);
        let mut config: Self = figment.extract().map_err(ExtractConfigError::new)?;
        config.profile = figment.profile().clone();
        debug!(
            target: "solpack::config",
            profile = %config.profile,
            hash = %config.hash,
            "loaded config"
        );
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { profile: Self::DEFAULT_PROFILE, hash: HashKind::default(), hex_prefix: true }
    }
}

impl Provider for Config {
    fn metadata(&self) -> Metadata {
        Metadata::named("Solpack Config")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        Serialized::defaults(self).data()
    }

    fn profile(&self) -> Option<Profile> {
        Some(self.profile.clone())
    }
}
