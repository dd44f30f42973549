//! Provider selection.
//!
//! Pick the provider once at startup and pass it into the services that allocate identifiers.
//! Nothing here reads environment variables; the embedding application decides where the
//! setting comes from (a config file, a CLI flag, a test harness).

use crate::provider::{
    FakeUuidProvider, ProvidedUuid, RandomUuidProvider, SharedUuidProvider, UuidProvider,
};
use crate::{UuidError, UuidResult};
use std::sync::Arc;
use std::{fmt, str::FromStr};

/// Which [`UuidProvider`] to construct.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ProviderKind {
    /// Secure random version 4 identifiers.
    #[default]
    Random,
    /// The fixed test sentinel.
    Fake,
}

impl ProviderKind {
    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Fake => "fake",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = UuidError;

    /// Parses `random` or `fake`, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidInput`] for any other value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("random") {
            Ok(Self::Random)
        } else if trimmed.eq_ignore_ascii_case("fake") {
            Ok(Self::Fake)
        } else {
            Err(UuidError::InvalidInput(format!(
                "UUID provider must be 'random' or 'fake', got: '{}'",
                s
            )))
        }
    }
}

/// UUID provider configuration resolved at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProviderConfig {
    kind: ProviderKind,
}

impl ProviderConfig {
    /// Create a new `ProviderConfig`.
    pub fn new(kind: ProviderKind) -> Self {
        Self { kind }
    }

    /// Create a `ProviderConfig` from a textual provider name.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidInput`] if `name` is not a known provider.
    pub fn from_name(name: &str) -> UuidResult<Self> {
        Ok(Self::new(name.parse()?))
    }

    pub fn kind(&self) -> ProviderKind {
        self.kind
    }

    /// Builds the configured provider.
    pub fn build(&self) -> AnyUuidProvider {
        tracing::debug!(kind = %self.kind, "building uuid provider");
        match self.kind {
            ProviderKind::Random => AnyUuidProvider::Random(RandomUuidProvider),
            ProviderKind::Fake => AnyUuidProvider::Fake(FakeUuidProvider),
        }
    }
}

/// Either provider, chosen at runtime without boxing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnyUuidProvider {
    Random(RandomUuidProvider),
    Fake(FakeUuidProvider),
}

impl AnyUuidProvider {
    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::Random(_) => ProviderKind::Random,
            Self::Fake(_) => ProviderKind::Fake,
        }
    }

    /// Converts into a [`SharedUuidProvider`] for handing to several owners.
    pub fn into_shared(self) -> SharedUuidProvider {
        Arc::new(self)
    }
}

impl Default for AnyUuidProvider {
    fn default() -> Self {
        ProviderConfig::default().build()
    }
}

impl UuidProvider for AnyUuidProvider {
    fn uuid(&self) -> ProvidedUuid {
        match self {
            Self::Random(provider) => provider.uuid(),
            Self::Fake(provider) => provider.uuid(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FAKE_UUID_LITERAL;

    #[test]
    fn test_default_kind_is_random() {
        assert_eq!(ProviderKind::default(), ProviderKind::Random);
        assert_eq!(ProviderConfig::default().kind(), ProviderKind::Random);
        assert_eq!(AnyUuidProvider::default().kind(), ProviderKind::Random);
    }

    #[test]
    fn test_parse_kind_valid() {
        assert_eq!("random".parse::<ProviderKind>().unwrap(), ProviderKind::Random);
        assert_eq!("fake".parse::<ProviderKind>().unwrap(), ProviderKind::Fake);
        assert_eq!(" FAKE ".parse::<ProviderKind>().unwrap(), ProviderKind::Fake);
        assert_eq!("Random".parse::<ProviderKind>().unwrap(), ProviderKind::Random);
    }

    #[test]
    fn test_parse_kind_rejects_unknown() {
        let result = "v7".parse::<ProviderKind>();

        match result {
            Err(UuidError::InvalidInput(msg)) => {
                assert!(msg.contains("'random' or 'fake'"));
                assert!(msg.contains("v7"));
            }
            _ => panic!("Expected InvalidInput error"),
        }

        assert!("".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_kind_display_round_trips_through_parse() {
        for kind in [ProviderKind::Random, ProviderKind::Fake] {
            assert_eq!(kind.to_string().parse::<ProviderKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_from_name() {
        let config = ProviderConfig::from_name("fake").unwrap();
        assert_eq!(config, ProviderConfig::new(ProviderKind::Fake));

        assert!(ProviderConfig::from_name("nil").is_err());
    }

    #[test]
    fn test_build_fake_provider() {
        let provider = ProviderConfig::new(ProviderKind::Fake).build();

        assert_eq!(provider, AnyUuidProvider::Fake(FakeUuidProvider));
        assert_eq!(provider.kind(), ProviderKind::Fake);
        assert_eq!(provider.uuid().to_string(), FAKE_UUID_LITERAL);
    }

    #[test]
    fn test_build_random_provider() {
        let provider = ProviderConfig::new(ProviderKind::Random).build();

        assert_eq!(provider.kind(), ProviderKind::Random);
        let first = provider.uuid();
        let second = provider.uuid();
        assert!(!first.is_fake());
        assert_eq!(first.as_uuid().get_version_num(), 4);
        assert_ne!(first, second);
    }

    #[test]
    fn test_into_shared() {
        let shared = ProviderConfig::new(ProviderKind::Fake).build().into_shared();
        let clone = Arc::clone(&shared);

        assert_eq!(shared.uuid(), clone.uuid());
        assert!(clone.uuid().is_fake());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_deserialize() {
        let config: ProviderConfig = serde_json::from_str(r#"{"kind":"fake"}"#).unwrap();
        assert_eq!(config.kind(), ProviderKind::Fake);

        let config: ProviderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.kind(), ProviderKind::Random);

        assert!(serde_json::from_str::<ProviderConfig>(r#"{"kind":"nil"}"#).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serialize() {
        let json = serde_json::to_string(&ProviderConfig::new(ProviderKind::Fake)).unwrap();
        assert_eq!(json, r#"{"kind":"fake"}"#);
    }
}
