// crates/testgrid-platform/src/lib.rs
// ============================================================================
// Module: Testgrid Platform Library
// Description: Host platform facts behind an explicit descriptor seam.
// Purpose: Let test harnesses resolve or inject OS family, nickname, and arch.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! `testgrid-platform` answers three questions about the machine a test run
//! executes on: the coarse OS family, the finer-grained OS nickname, and the
//! normalized CPU architecture. Detection sits behind the
//! [`PlatformDescriptor`] trait so harness configuration can probe the real
//! host in production and inject pinned facts in tests.
//!
//! Descriptors are all-or-nothing: a probe either yields the full
//! [`PlatformFacts`] triple or fails with [`PlatformError`]. Partial facts
//! are never produced.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod descriptor;
pub mod host;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use descriptor::PlatformDescriptor;
pub use descriptor::PlatformError;
pub use descriptor::PlatformFacts;
pub use descriptor::StaticPlatform;
pub use host::HostPlatform;
pub use host::detect;
