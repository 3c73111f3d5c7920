// crates/testgrid-config/src/lib.rs
// ============================================================================
// Module: Testgrid Config Library
// Description: Run-mode environment contract and the immutable run record.
// Purpose: Let test suites read run modes and platform facts from one place.
// Dependencies: serde, testgrid-platform, thiserror
// ============================================================================

//! ## Overview
//! `testgrid-config` turns the run-mode environment variables and the host
//! platform facts into one immutable [`RunConfig`] record. Suites consult
//! the record instead of the environment, which keeps a run's behavior
//! stable even when variables change mid-process.
//!
//! The environment contract is deliberately narrow: flags follow the
//! exact-match rule of [`is_flag_set`] and the sanitizer variable passes
//! through verbatim. Platform facts arrive through an injected
//! [`PlatformDescriptor`](testgrid_platform::PlatformDescriptor); a
//! descriptor failure fails the load rather than defaulting the fields.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod env;
pub mod run_config;

// ============================================================================
// SECTION: Test Support
// ============================================================================

#[cfg(test)]
mod test_support;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use env::RunEnv;
pub use env::flag_from_env;
pub use env::is_flag_set;
pub use env::string_from_env;
pub use run_config::RunConfig;
pub use run_config::RunConfigError;
