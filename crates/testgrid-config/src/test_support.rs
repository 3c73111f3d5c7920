// crates/testgrid-config/src/test_support.rs
// ============================================================================
// Module: Config Test Support
// Description: Environment locking and restoration shared by unit tests.
// Purpose: Keep env-mutating tests serialized and side-effect free.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The process environment is global state, so every test that touches the
//! run-mode variables takes [`env_lock`] and holds an [`EnvGuard`] for its
//! full scope. The guard snapshots the five variables on creation and
//! restores them on drop, whether the test passes or panics.

#![allow(
    clippy::expect_used,
    reason = "Test support favors a direct expect over threading lock errors."
)]

use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::OnceLock;

use crate::env::RunEnv;

/// Wrappers confining the unsafe environment mutation surface.
pub(crate) mod env_mut {
    #![allow(unsafe_code, reason = "Tests mutate process env vars in a controlled scope.")]

    /// Sets an environment variable for the current process.
    pub(crate) fn set_var(key: &str, value: &str) {
        // SAFETY: Tests serialize environment mutation via a global lock.
        unsafe {
            std::env::set_var(key, value);
        }
    }

    /// Sets an environment variable to a raw, possibly non-UTF-8 value.
    #[cfg(unix)]
    pub(crate) fn set_var_os(key: &str, value: &std::ffi::OsStr) {
        // SAFETY: Tests serialize environment mutation via a global lock.
        unsafe {
            std::env::set_var(key, value);
        }
    }

    /// Removes an environment variable from the current process.
    pub(crate) fn remove_var(key: &str) {
        // SAFETY: Tests serialize environment mutation via a global lock.
        unsafe {
            std::env::remove_var(key);
        }
    }
}

/// Serializes run-mode environment mutation across the crate's tests.
pub(crate) fn env_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(())).lock().expect("env lock poisoned")
}

/// Restores the run-mode variables captured at construction when dropped.
pub(crate) struct EnvGuard {
    /// Captured values, restored in order on drop.
    entries: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    /// Captures the five run-mode variables without modifying them.
    pub(crate) fn capture() -> Self {
        let entries = RunEnv::ALL
            .iter()
            .map(|key| (key.as_str(), std::env::var(key.as_str()).ok()))
            .collect();
        Self {
            entries,
        }
    }

    /// Captures the five run-mode variables and removes them all.
    pub(crate) fn clean_slate() -> Self {
        let guard = Self::capture();
        for key in RunEnv::ALL {
            env_mut::remove_var(key.as_str());
        }
        guard
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (name, value) in self.entries.drain(..) {
            match value {
                Some(value) => env_mut::set_var(name, &value),
                None => env_mut::remove_var(name),
            }
        }
    }
}
