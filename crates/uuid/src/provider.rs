//! UUID providers and the value they return.

use std::fmt;
use std::sync::Arc;

/// Re-exported for convenience.
pub use ::uuid::Uuid;

/// The identifier returned by [`FakeUuidProvider`], verbatim.
///
/// Grouped 4-2-2-2-6 rather than 8-4-4-4-12, so it can never be mistaken for a generated value.
pub const FAKE_UUID_LITERAL: &str = "0000-00-00-00-000000";

/// An identifier produced by a [`UuidProvider`].
///
/// # Display format
/// - `Random` values display in hyphenated lowercase form (`xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx`).
/// - `Fake` always displays as [`FAKE_UUID_LITERAL`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProvidedUuid {
    /// A value from the secure random generator.
    Random(Uuid),
    /// The fixed test sentinel.
    Fake,
}

impl ProvidedUuid {
    /// Returns the 128-bit value.
    ///
    /// For [`ProvidedUuid::Fake`] this is the nil UUID: every group of the sentinel literal is
    /// zero.
    pub fn as_uuid(&self) -> Uuid {
        match self {
            Self::Random(uuid) => *uuid,
            Self::Fake => Uuid::nil(),
        }
    }

    /// Returns true for the test sentinel.
    pub fn is_fake(&self) -> bool {
        matches!(self, Self::Fake)
    }
}

impl From<Uuid> for ProvidedUuid {
    fn from(uuid: Uuid) -> Self {
        Self::Random(uuid)
    }
}

impl fmt::Display for ProvidedUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random(uuid) => write!(f, "{}", uuid.hyphenated()),
            Self::Fake => f.write_str(FAKE_UUID_LITERAL),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ProvidedUuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Source of fresh identifiers.
///
/// Take this as a constructor parameter (or a `&dyn UuidProvider` argument) wherever an
/// identifier is allocated, rather than calling the random generator directly. Production wires
/// in [`RandomUuidProvider`]; tests wire in [`FakeUuidProvider`].
pub trait UuidProvider {
    /// Returns an identifier. Never fails; see [`RandomUuidProvider`] for the one fatal case.
    fn uuid(&self) -> ProvidedUuid;
}

/// A provider shared across owners and threads.
pub type SharedUuidProvider = Arc<dyn UuidProvider + Send + Sync>;

impl<T: UuidProvider + ?Sized> UuidProvider for &T {
    fn uuid(&self) -> ProvidedUuid {
        (**self).uuid()
    }
}

impl<T: UuidProvider + ?Sized> UuidProvider for Box<T> {
    fn uuid(&self) -> ProvidedUuid {
        (**self).uuid()
    }
}

impl<T: UuidProvider + ?Sized> UuidProvider for Arc<T> {
    fn uuid(&self) -> ProvidedUuid {
        (**self).uuid()
    }
}

/// Generates RFC 4122 version 4 identifiers from the operating system's secure random source.
///
/// # Panics
///
/// Panics if the secure random source is unavailable. This is not retried and there is no
/// weaker fallback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RandomUuidProvider;

impl UuidProvider for RandomUuidProvider {
    fn uuid(&self) -> ProvidedUuid {
        let uuid = Uuid::new_v4();
        tracing::trace!(%uuid, "generated random uuid");
        ProvidedUuid::Random(uuid)
    }
}

/// Always returns [`ProvidedUuid::Fake`], for deterministic tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FakeUuidProvider;

impl UuidProvider for FakeUuidProvider {
    fn uuid(&self) -> ProvidedUuid {
        ProvidedUuid::Fake
    }
}
