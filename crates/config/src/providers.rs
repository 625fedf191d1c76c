use figment::{
    Error, Metadata, Profile, Provider,
    value::{Dict, Map, Value},
};

/// Extracts the profile from a `profile` table of a nested provider.
///
/// For example given:
///
/// ```toml
/// [profile.ci]
/// key = "value"
/// ```
///
/// UnwrapProfileProvider for `ci` will output:
///
/// ```toml
/// [ci]
/// key = "value"
/// ```
pub(crate) struct UnwrapProfileProvider<P> {
    provider: P,
    wrapping_key: Profile,
    profile: Profile,
}

impl<P> UnwrapProfileProvider<P> {
    pub(crate) fn new(
        provider: P,
        wrapping_key: impl Into<Profile>,
        profile: impl Into<Profile>,
    ) -> Self {
        Self { provider, wrapping_key: wrapping_key.into(), profile: profile.into() }
    }
}

impl<P: Provider> Provider for UnwrapProfileProvider<P> {
    fn metadata(&self) -> Metadata {
        self.provider.metadata()
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut data = self.provider.data()?;
        let Some(profiles) = data.remove(&self.wrapping_key) else { return Ok(Map::new()) };
        for (name, value) in profiles {
            if Profile::new(&name) != self.profile {
                continue;
            }
            return match value {
                Value::Dict(_, dict) => Ok(Map::from([(self.profile.clone(), dict)])),
                bad_val => {
                    let mut err = Error::from(figment::error::Kind::InvalidType(
                        bad_val.to_actual(),
                        "table".into(),
                    ));
                    err.metadata = Some(self.provider.metadata());
                    err.profile = Some(self.profile.clone());
                    Err(err)
                }
            };
        }
        Ok(Map::new())
    }

    fn profile(&self) -> Option<Profile> {
        Some(self.profile.clone())
    }
}
