// system-tests/src/lib.rs
// ============================================================================
// Module: Testgrid System Tests Library
// Description: Shared helpers for end-to-end run-configuration scenarios.
// Purpose: Provide common utilities for Testgrid system-test binaries.
// Dependencies: testgrid-config
// ============================================================================

//! ## Overview
//! This crate hosts shared helper utilities used by the Testgrid system-test
//! binaries in `system-tests/tests`. Scenario tests drive the public crate
//! APIs end to end against a real process environment, so the helpers here
//! focus on mutating that environment safely and restoring it afterwards.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod env_scope;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use env_scope::EnvScope;
