// system-tests/src/env_scope.rs
// ============================================================================
// Module: Environment Scope
// Description: Serialized, self-restoring mutation of run-mode variables.
// Purpose: Let scenario tests shape the process environment without leaks.
// Dependencies: testgrid-config
// ============================================================================

//! ## Overview
//! The process environment is global state shared by every test thread in a
//! binary. [`EnvScope`] takes a process-wide lock for its lifetime, mutates
//! only the run-mode variables, and restores the captured values on drop,
//! whether the scenario passes or fails. Scenarios create exactly one scope
//! each; the lock is not reentrant.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::OnceLock;
use std::sync::PoisonError;

use testgrid_config::RunEnv;

// ============================================================================
// SECTION: Environment Mutation
// ============================================================================

/// Wrappers confining the unsafe environment mutation surface.
mod env_mut {
    #![allow(unsafe_code, reason = "Tests mutate process env vars in a controlled scope.")]

    /// Sets an environment variable for the current process.
    pub(super) fn set_var(key: &str, value: &str) {
        // SAFETY: Scenarios serialize environment mutation via a global lock.
        unsafe {
            std::env::set_var(key, value);
        }
    }

    /// Removes an environment variable from the current process.
    pub(super) fn remove_var(key: &str) {
        // SAFETY: Scenarios serialize environment mutation via a global lock.
        unsafe {
            std::env::remove_var(key);
        }
    }
}

/// Returns the process-wide lock guarding run-mode variable mutation.
fn env_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(())).lock().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================================
// SECTION: Environment Scope
// ============================================================================

/// Exclusive scope over the run-mode environment variables.
///
/// Creating a scope locks environment mutation for the whole process and
/// snapshots the five run-mode variables. Dropping it restores the snapshot
/// and releases the lock.
#[must_use]
pub struct EnvScope {
    /// Held for the scope's lifetime to serialize environment mutation.
    _lock: MutexGuard<'static, ()>,
    /// Captured values, restored in order on drop.
    saved: Vec<(&'static str, Option<String>)>,
}

impl EnvScope {
    /// Captures the five run-mode variables without modifying them.
    pub fn capture() -> Self {
        let lock = env_lock();
        let saved = RunEnv::ALL
            .iter()
            .map(|key| (key.as_str(), std::env::var(key.as_str()).ok()))
            .collect();
        Self {
            _lock: lock,
            saved,
        }
    }

    /// Captures the five run-mode variables and removes them all.
    ///
    /// Scenarios start from this blank slate so ambient CI variables cannot
    /// leak into their expectations.
    pub fn clean() -> Self {
        let scope = Self::capture();
        for key in RunEnv::ALL {
            env_mut::remove_var(key.as_str());
        }
        scope
    }

    /// Sets `key` for the remainder of the scope.
    pub fn set(&self, key: RunEnv, value: &str) {
        env_mut::set_var(key.as_str(), value);
    }

    /// Removes `key` for the remainder of the scope.
    pub fn remove(&self, key: RunEnv) {
        env_mut::remove_var(key.as_str());
    }
}

impl Drop for EnvScope {
    fn drop(&mut self) {
        for (name, value) in self.saved.drain(..) {
            match value {
                Some(value) => env_mut::set_var(name, &value),
                None => env_mut::remove_var(name),
            }
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
