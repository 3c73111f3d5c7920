// system-tests/src/env_scope/tests.rs
// ============================================================================
// Module: Environment Scope Unit Tests
// Description: Unit coverage for scoped run-mode variable mutation.
// Purpose: Ensure scopes shape the environment and restore it on drop.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Walks one scope through its full lifecycle. This is the only test in the
//! crate's unit binary, so the unlocked reads before and after the scope
//! cannot race another test's mutation.

use testgrid_config::RunEnv;

use super::EnvScope;

#[test]
fn scope_shapes_and_restores_the_environment() {
    let name = RunEnv::Sanitizer.as_str();
    let before = std::env::var(name).ok();

    let scope = EnvScope::clean();
    assert!(std::env::var(name).is_err(), "clean scope must remove the variable");

    scope.set(RunEnv::Sanitizer, "address");
    assert_eq!(std::env::var(name).ok().as_deref(), Some("address"));

    scope.remove(RunEnv::Sanitizer);
    assert!(std::env::var(name).is_err(), "remove must unset the variable");

    drop(scope);
    assert_eq!(std::env::var(name).ok(), before, "drop must restore the captured value");
}
