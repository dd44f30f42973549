//! Injectable UUID generation.
//!
//! Code that needs a fresh identifier should not call the random generator directly. It takes a
//! [`UuidProvider`] instead, so tests can swap in a deterministic value.
//!
//! This crate provides:
//! - The [`UuidProvider`] capability and the [`ProvidedUuid`] value it returns.
//! - [`RandomUuidProvider`], backed by the operating system's secure random source (RFC 4122
//!   version 4).
//! - [`FakeUuidProvider`], which always returns the sentinel [`FAKE_UUID_LITERAL`].
//! - [`ProviderConfig`] for picking a provider once at startup.
//!
//! ## Random identifiers
//! - Format: 36 characters, hyphenated 8-4-4-4-12, lowercase hex
//! - Example: `550e8400-e29b-41d4-a716-446655440000`
//!
//! ## Fake identifier
//! The fake provider returns `0000-00-00-00-000000`. This is **not** a valid UUID string (the
//! grouping is 4-2-2-2-6) and is kept that way on purpose: assertions elsewhere match on it.
//! Its 128-bit value, via [`ProvidedUuid::as_uuid`], is the nil UUID.
//!
//! ## Failure
//! Random generation has no recoverable error. If the secure random source is unavailable, the
//! underlying generator panics. There is no fallback to a weaker source.
//!
//! ## Example
//! ```
//! use uuid_provider::{FakeUuidProvider, RandomUuidProvider, UuidProvider};
//!
//! fn label(provider: &dyn UuidProvider) -> String {
//!     format!("note-{}", provider.uuid())
//! }
//!
//! assert_eq!(label(&FakeUuidProvider), "note-0000-00-00-00-000000");
//! assert_eq!(label(&RandomUuidProvider).len(), 41);
//! ```

mod config;
mod provider;

// Re-export public types
pub use config::{AnyUuidProvider, ProviderConfig, ProviderKind};
pub use provider::{
    FakeUuidProvider, ProvidedUuid, RandomUuidProvider, SharedUuidProvider, Uuid, UuidProvider,
    FAKE_UUID_LITERAL,
};

/// Error type for UUID provider operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for UUID provider operations.
pub type UuidResult<T> = Result<T, UuidError>;
