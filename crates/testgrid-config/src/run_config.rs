// crates/testgrid-config/src/run_config.rs
// ============================================================================
// Module: Run Configuration
// Description: Immutable snapshot of run modes and host platform facts.
// Purpose: Give test suites one explicit record to key expectations on.
// Dependencies: serde, testgrid-platform, thiserror
// ============================================================================

//! ## Overview
//! [`RunConfig`] is the record a test suite consults to decide what to run
//! and what to expect: five run-mode fields read from the environment plus
//! three platform facts resolved through an injected
//! [`PlatformDescriptor`]. It is built explicitly and never mutated; the
//! environment is read once at load time and observing later changes
//! requires another load.
//!
//! A descriptor failure aborts the load. Platform fields have no safe
//! default, and a record with guessed facts would steer suites into wrong
//! expectations, so the error surfaces immediately instead.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use testgrid_platform::HostPlatform;
use testgrid_platform::PlatformDescriptor;
use testgrid_platform::PlatformError;
use thiserror::Error;

use crate::env::RunEnv;
use crate::env::flag_from_env;
use crate::env::string_from_env;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while loading a run configuration.
#[derive(Debug, Error)]
pub enum RunConfigError {
    /// The platform descriptor could not resolve host facts.
    #[error("platform descriptor unavailable: {0}")]
    Platform(#[from] PlatformError),
}

// ============================================================================
// SECTION: Run Configuration
// ============================================================================

/// Immutable test-run configuration.
///
/// # Invariants
/// - Snapshot semantics: environment changes after construction are not
///   observed; call [`RunConfig::load`] again to observe them.
/// - Platform fields are always populated; a failed descriptor aborts the
///   load instead of leaving them defaulted.
#[allow(
    clippy::struct_excessive_bools,
    reason = "The four flags mirror four independent run-mode variables."
)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Restrict selection to stable-marked cases (`ONLY_STABLE=1`).
    pub only_stable: bool,
    /// Sanitizer build variant, verbatim from `SANITIZER`; empty when none.
    pub sanitizer: String,
    /// The run executes under valgrind (`VALGRIND=1`).
    pub valgrind: bool,
    /// Coverage instrumentation is active (`CODE_COVERAGE=1`).
    pub code_coverage: bool,
    /// Optional library extensions are disabled (`NO_LIBEXT=1`).
    pub no_libext: bool,
    /// Fine-grained platform identifier from the descriptor (e.g. `jammy`).
    pub os_nickname: String,
    /// OS family from the descriptor: `linux`, `macos`, or `windows`.
    pub os_family: String,
    /// Normalized CPU architecture from the descriptor (e.g. `x86_64`).
    pub arch: String,
}

impl RunConfig {
    /// Loads a configuration from the process environment and `descriptor`.
    ///
    /// The five run-mode variables are read once with the exact-match flag
    /// rule; the environment itself never causes an error. Platform facts
    /// are resolved once through the descriptor before any field is
    /// published, so a failed load leaves no partial record behind.
    ///
    /// # Errors
    ///
    /// Returns [`RunConfigError::Platform`] when the descriptor cannot
    /// resolve the host facts.
    pub fn load(descriptor: &dyn PlatformDescriptor) -> Result<Self, RunConfigError> {
        let facts = descriptor.facts()?;
        Ok(Self {
            only_stable: flag_from_env(RunEnv::OnlyStable),
            sanitizer: string_from_env(RunEnv::Sanitizer),
            valgrind: flag_from_env(RunEnv::Valgrind),
            code_coverage: flag_from_env(RunEnv::CodeCoverage),
            no_libext: flag_from_env(RunEnv::NoLibext),
            os_nickname: facts.os_nickname,
            os_family: facts.os_family,
            arch: facts.arch,
        })
    }

    /// Loads a configuration probing the machine the process runs on.
    ///
    /// # Errors
    ///
    /// Returns [`RunConfigError::Platform`] when the host probe fails.
    pub fn from_host() -> Result<Self, RunConfigError> {
        Self::load(&HostPlatform::new())
    }

    /// Returns whether a sanitizer build variant is active.
    #[must_use]
    pub fn has_sanitizer(&self) -> bool {
        !self.sanitizer.is_empty()
    }

    /// Returns stable labels for the active run modes, in field order.
    ///
    /// Inactive modes contribute nothing; a default environment yields an
    /// empty list. The sanitizer label embeds the verbatim variant, e.g.
    /// `sanitizer:address`.
    #[must_use]
    pub fn mode_labels(&self) -> Vec<String> {
        let mut labels = Vec::new();
        if self.only_stable {
            labels.push("only-stable".to_string());
        }
        if self.has_sanitizer() {
            labels.push(format!("sanitizer:{}", self.sanitizer));
        }
        if self.valgrind {
            labels.push("valgrind".to_string());
        }
        if self.code_coverage {
            labels.push("coverage".to_string());
        }
        if self.no_libext {
            labels.push("no-libext".to_string());
        }
        labels
    }
}

impl fmt::Display for RunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = self.mode_labels();
        let modes = if labels.is_empty() { "none".to_string() } else { labels.join(",") };
        write!(
            f,
            "modes: {modes} | platform: {}/{}/{}",
            self.os_family, self.os_nickname, self.arch
        )
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
