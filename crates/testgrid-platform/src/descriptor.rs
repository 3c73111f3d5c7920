// crates/testgrid-platform/src/descriptor.rs
// ============================================================================
// Module: Platform Descriptor Interface
// Description: Host facts record and the descriptor contract consumed by harnesses.
// Purpose: Define the seam between platform detection and its consumers.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! A [`PlatformDescriptor`] resolves the three host facts a test harness keys
//! expectations on. The contract is all-or-nothing: implementations return
//! the full [`PlatformFacts`] triple or a [`PlatformError`], never a partial
//! record. [`StaticPlatform`] pins the triple for tests and frozen
//! environments.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Platform Facts
// ============================================================================

/// Host facts consumed by test-run configuration.
///
/// # Invariants
/// - All three fields are non-empty when produced by a descriptor.
/// - Values are plain lowercase tokens (`linux`, `jammy`, `x86_64`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlatformFacts {
    /// Coarse OS family: `linux`, `macos`, or `windows`.
    pub os_family: String,
    /// Finest-grained platform identifier available: a distribution codename
    /// (`jammy`), a version-pinned identifier (`rocky9`), or a macOS release
    /// nickname (`sonoma`). Falls back to the family name itself.
    pub os_nickname: String,
    /// Normalized CPU architecture: `x86_64`, `arm64`, `arm32`, or `x86`.
    pub arch: String,
}

impl PlatformFacts {
    /// Creates a facts record from the three tokens.
    #[must_use]
    pub fn new(
        os_family: impl Into<String>,
        os_nickname: impl Into<String>,
        arch: impl Into<String>,
    ) -> Self {
        Self {
            os_family: os_family.into(),
            os_nickname: os_nickname.into(),
            arch: arch.into(),
        }
    }
}

impl fmt::Display for PlatformFacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.os_family, self.os_nickname, self.arch)
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while resolving host facts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    /// The OS family has no recognized mapping.
    #[error("unsupported os family: {0}")]
    UnsupportedOs(String),
    /// The CPU architecture has no recognized normalization.
    #[error("unsupported cpu architecture: {0}")]
    UnsupportedArch(String),
    /// A platform source could not be consulted.
    #[error("platform probe failed: {0}")]
    Probe(String),
}

// ============================================================================
// SECTION: Descriptor Contract
// ============================================================================

/// Resolves host facts for test-run configuration.
///
/// Implementations must be deterministic for the lifetime of the process:
/// repeated calls on the same descriptor return the same facts or the same
/// error class.
pub trait PlatformDescriptor {
    /// Resolves the full facts triple.
    ///
    /// # Errors
    ///
    /// Returns a [`PlatformError`] when any of the three facts cannot be
    /// determined. Partial facts are never returned.
    fn facts(&self) -> Result<PlatformFacts, PlatformError>;
}

// ============================================================================
// SECTION: Static Descriptor
// ============================================================================

/// Descriptor returning pinned facts.
///
/// Harness tests use this to exercise configuration loading against a known
/// platform without probing the machine the tests run on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPlatform {
    /// The pinned facts returned by every call.
    facts: PlatformFacts,
}

impl StaticPlatform {
    /// Creates a descriptor that always reports `facts`.
    #[must_use]
    pub const fn new(facts: PlatformFacts) -> Self {
        Self {
            facts,
        }
    }
}

impl PlatformDescriptor for StaticPlatform {
    fn facts(&self) -> Result<PlatformFacts, PlatformError> {
        Ok(self.facts.clone())
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
