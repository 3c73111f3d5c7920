// crates/testgrid-platform/src/descriptor/tests.rs
// ============================================================================
// Module: Platform Descriptor Tests
// Description: Unit tests for the facts record and the static descriptor.
// Purpose: Validate display formatting, pinning, and wire field names.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Validates that [`PlatformFacts`] formats and serializes with stable field
//! names and that [`StaticPlatform`] echoes its pinned triple on every call.

#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    reason = "Test-only assertions favor direct unwrap/expect for clarity."
)]

use super::PlatformDescriptor;
use super::PlatformError;
use super::PlatformFacts;
use super::StaticPlatform;

fn sample_facts() -> PlatformFacts {
    PlatformFacts::new("linux", "jammy", "x86_64")
}

#[test]
fn display_joins_triple_with_slashes() {
    assert_eq!(sample_facts().to_string(), "linux/jammy/x86_64");
}

#[test]
fn static_platform_echoes_pinned_facts() {
    let descriptor = StaticPlatform::new(sample_facts());
    let facts = descriptor.facts().expect("static descriptor never fails");
    assert_eq!(facts, sample_facts());
}

#[test]
fn static_platform_is_deterministic_across_calls() {
    let descriptor = StaticPlatform::new(sample_facts());
    let first = descriptor.facts().expect("first call");
    let second = descriptor.facts().expect("second call");
    assert_eq!(first, second);
}

#[test]
fn facts_serialize_with_stable_field_names() {
    let value = serde_json::to_value(sample_facts()).expect("facts serialize");
    assert_eq!(value["os_family"], "linux");
    assert_eq!(value["os_nickname"], "jammy");
    assert_eq!(value["arch"], "x86_64");
}

#[test]
fn facts_round_trip_through_json() {
    let encoded = serde_json::to_string(&sample_facts()).expect("facts encode");
    let decoded: PlatformFacts = serde_json::from_str(&encoded).expect("facts decode");
    assert_eq!(decoded, sample_facts());
}

#[test]
fn errors_carry_the_offending_token() {
    let error = PlatformError::UnsupportedOs("plan9".to_string());
    assert_eq!(error.to_string(), "unsupported os family: plan9");

    let error = PlatformError::UnsupportedArch("riscv64".to_string());
    assert_eq!(error.to_string(), "unsupported cpu architecture: riscv64");

    let error = PlatformError::Probe("sw_vers missing".to_string());
    assert_eq!(error.to_string(), "platform probe failed: sw_vers missing");
}
