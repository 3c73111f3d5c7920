// crates/testgrid-config/src/env.rs
// ============================================================================
// Module: Run Environment Keys
// Description: Canonical run-mode variable names and flag semantics.
// Purpose: Keep the environment contract in one place with exact-match flags.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The five run-mode variables are declared once, with their canonical names,
//! as [`RunEnv`]. Flag semantics are the suite's long-standing contract: a
//! flag is active only when its variable holds exactly the literal `1`.
//! Every other value, including `0`, `true`, and the empty string, reads as
//! inactive, as does an unset variable. The sanitizer variable passes
//! through verbatim.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;

// ============================================================================
// SECTION: Environment Keys
// ============================================================================

/// Environment variables controlling a test run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunEnv {
    /// Restrict selection to stable-marked cases (`ONLY_STABLE`).
    OnlyStable,
    /// Sanitizer build variant under test (`SANITIZER`).
    Sanitizer,
    /// Run executes under valgrind (`VALGRIND`).
    Valgrind,
    /// Coverage instrumentation is active (`CODE_COVERAGE`).
    CodeCoverage,
    /// Optional library extensions are disabled (`NO_LIBEXT`).
    NoLibext,
}

impl RunEnv {
    /// Every run-mode key, in declaration order.
    ///
    /// Test helpers iterate this to snapshot and restore the full contract
    /// surface; adding a variable here is the only step needed to cover it.
    pub const ALL: [Self; 5] = [
        Self::OnlyStable,
        Self::Sanitizer,
        Self::Valgrind,
        Self::CodeCoverage,
        Self::NoLibext,
    ];

    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnlyStable => "ONLY_STABLE",
            Self::Sanitizer => "SANITIZER",
            Self::Valgrind => "VALGRIND",
            Self::CodeCoverage => "CODE_COVERAGE",
            Self::NoLibext => "NO_LIBEXT",
        }
    }
}

// ============================================================================
// SECTION: Flag Semantics
// ============================================================================

/// Returns whether a raw variable value activates a flag.
///
/// The rule is exact string equality with the literal `1`, not a truthy
/// coercion: `0`, `true`, `yes`, `11`, and the empty string all read as
/// inactive. Case matters and surrounding whitespace is not trimmed.
#[must_use]
pub fn is_flag_set(raw: &str) -> bool {
    raw == "1"
}

/// Reads a flag variable from the process environment.
///
/// Unset variables read as inactive. Values that are not valid UTF-8 also
/// read as inactive; they cannot equal the literal `1`.
#[must_use]
pub fn flag_from_env(key: RunEnv) -> bool {
    env::var(key.as_str()).is_ok_and(|raw| is_flag_set(&raw))
}

/// Reads a pass-through string variable from the process environment.
///
/// Unset and non-UTF-8 values read as the empty string. The value is not
/// trimmed, case-folded, or validated against a known set.
#[must_use]
pub fn string_from_env(key: RunEnv) -> String {
    env::var(key.as_str()).unwrap_or_default()
}

// ============================================================================
// SECTION: Tests
// ============================================================================
