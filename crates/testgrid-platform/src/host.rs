// crates/testgrid-platform/src/host.rs
// ============================================================================
// Module: Host Platform Probe
// Description: Resolves facts for the machine the current process runs on.
// Purpose: Provide the production PlatformDescriptor backed by OS sources.
// Dependencies: std
// ============================================================================

//! ## Overview
//! [`HostPlatform`] probes the running host. Family and architecture come
//! from compile-time constants and fail closed on unrecognized tokens. The
//! nickname is resolved from `/etc/os-release` (with classic release-file
//! fallbacks) on Linux and from `sw_vers` on macOS; when no finer identifier
//! is available the nickname degrades to the family name instead of failing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

use crate::descriptor::PlatformDescriptor;
use crate::descriptor::PlatformError;
use crate::descriptor::PlatformFacts;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// macOS release nicknames by major product version.
///
/// Unlisted majors report `macos<major>`; pre-Big Sur versions share the
/// major `10` and are not distinguished further.
const DARWIN_NICKNAMES: &[(u32, &str)] = &[
    (11, "bigsur"),
    (12, "monterey"),
    (13, "ventura"),
    (14, "sonoma"),
    (15, "sequoia"),
    (26, "tahoe"),
];

// ============================================================================
// SECTION: Host Probe
// ============================================================================

/// Descriptor probing the machine the current process runs on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostPlatform;

impl HostPlatform {
    /// Creates a host probe.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PlatformDescriptor for HostPlatform {
    fn facts(&self) -> Result<PlatformFacts, PlatformError> {
        detect()
    }
}

/// Probes the running host for its full facts triple.
///
/// # Errors
///
/// Returns [`PlatformError::UnsupportedOs`] or
/// [`PlatformError::UnsupportedArch`] when the compile-time OS or CPU token
/// has no recognized mapping. Nickname resolution does not fail; it degrades
/// to the family name.
pub fn detect() -> Result<PlatformFacts, PlatformError> {
    let os_family = normalize_family(env::consts::OS)?;
    let arch = normalize_arch(env::consts::ARCH)?;
    let os_nickname = detect_nickname(&os_family);
    Ok(PlatformFacts {
        os_family,
        os_nickname,
        arch,
    })
}

// ============================================================================
// SECTION: Token Normalization
// ============================================================================

/// Validates an OS family token.
///
/// # Errors
///
/// Returns [`PlatformError::UnsupportedOs`] for families without a detection
/// strategy.
fn normalize_family(os: &str) -> Result<String, PlatformError> {
    match os {
        "linux" | "macos" | "windows" => Ok(os.to_string()),
        other => Err(PlatformError::UnsupportedOs(other.to_string())),
    }
}

/// Normalizes a CPU architecture token.
///
/// `aarch64` maps to `arm64` and bare `arm` to `arm32` so downstream
/// expectation tables key on a single spelling per architecture.
///
/// # Errors
///
/// Returns [`PlatformError::UnsupportedArch`] for architectures the suite
/// has no expectation tables for.
fn normalize_arch(arch: &str) -> Result<String, PlatformError> {
    match arch {
        "x86_64" => Ok("x86_64".to_string()),
        "aarch64" => Ok("arm64".to_string()),
        "arm" => Ok("arm32".to_string()),
        "x86" => Ok("x86".to_string()),
        other => Err(PlatformError::UnsupportedArch(other.to_string())),
    }
}

// ============================================================================
// SECTION: Nickname Resolution
// ============================================================================

/// Resolves the finest-grained nickname available for `family`.
///
/// Resolution never fails; hosts without a finer identifier report the
/// family name itself.
fn detect_nickname(family: &str) -> String {
    match family {
        "linux" => linux_nickname(),
        "macos" => macos_nickname(),
        _ => family.to_string(),
    }
}

/// Linux nickname sources, consulted in precedence order.
struct LinuxSources<'a> {
    /// os-release database candidates; the first derivable nickname wins.
    os_release_paths: &'a [&'a str],
    /// Alpine release file, pinned to `alpine<major>`.
    alpine_release: &'a str,
    /// Arch Linux marker file.
    arch_release: &'a str,
    /// Debian version file, pinned to `debian<major>`.
    debian_version: &'a str,
}

/// The fixed paths the host probe consults.
const HOST_SOURCES: LinuxSources<'static> = LinuxSources {
    os_release_paths: &["/etc/os-release", "/usr/lib/os-release"],
    alpine_release: "/etc/alpine-release",
    arch_release: "/etc/arch-release",
    debian_version: "/etc/debian_version",
};

/// Resolves the Linux nickname from os-release data or release files.
fn linux_nickname() -> String {
    nickname_from_sources(&HOST_SOURCES)
}

/// Resolves a Linux nickname from `sources` in precedence order.
fn nickname_from_sources(sources: &LinuxSources<'_>) -> String {
    for path in sources.os_release_paths {
        if let Some(release) = read_os_release(Path::new(path))
            && let Some(nickname) = nickname_from_os_release(&release)
        {
            return nickname;
        }
    }
    release_file_fallback(sources)
}

/// Resolves the macOS release nickname, degrading to `macos`.
fn macos_nickname() -> String {
    match product_version() {
        Some(version) => darwin_nickname(&version),
        None => "macos".to_string(),
    }
}

/// Maps a macOS product version to its release nickname.
///
/// Unknown majors report `macos<major>` so new releases stay identifiable
/// without a table update; unparseable versions degrade to `macos`.
fn darwin_nickname(version: &str) -> String {
    let major = version.split('.').next().unwrap_or(version);
    let Ok(major_number) = major.parse::<u32>() else {
        return "macos".to_string();
    };
    for (candidate, nickname) in DARWIN_NICKNAMES {
        if *candidate == major_number {
            return (*nickname).to_string();
        }
    }
    format!("macos{major_number}")
}

/// Reads the product version reported by `sw_vers`.
fn product_version() -> Option<String> {
    let output = Command::new("sw_vers").arg("-productVersion").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8(output.stdout).ok()?;
    let version = stdout.trim();
    if version.is_empty() {
        return None;
    }
    Some(version.to_string())
}

// ============================================================================
// SECTION: OS-Release Parsing
// ============================================================================

/// Fields extracted from an os-release database.
#[derive(Debug, Default, PartialEq, Eq)]
struct OsRelease {
    /// Distribution identifier (`ID=`), lowercased.
    id: Option<String>,
    /// Release version (`VERSION_ID=`), unquoted.
    version_id: Option<String>,
    /// Release codename (`VERSION_CODENAME=`), lowercased.
    codename: Option<String>,
}

/// Reads and parses the os-release database at `path`.
fn read_os_release(path: &Path) -> Option<OsRelease> {
    let contents = fs::read_to_string(path).ok()?;
    Some(parse_os_release(&contents))
}

/// Parses `KEY=value` lines from an os-release database.
///
/// Values may be single- or double-quoted. Unknown keys and malformed lines
/// are skipped; absent fields stay `None`. Parsing itself never fails.
fn parse_os_release(contents: &str) -> OsRelease {
    let mut release = OsRelease::default();
    for line in contents.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let cleaned = value.trim().trim_matches('"').trim_matches('\'');
        match key.trim() {
            "ID" => release.id = Some(cleaned.to_ascii_lowercase()),
            "VERSION_ID" => release.version_id = Some(cleaned.to_string()),
            "VERSION_CODENAME" => release.codename = Some(cleaned.to_ascii_lowercase()),
            _ => {}
        }
    }
    release
}

/// Derives a nickname from parsed os-release fields.
///
/// A release codename wins when present (`jammy`, `bookworm`). Otherwise the
/// distribution identifier is pinned to the major version (`rocky9`,
/// `alpine3`); rolling releases without a version report the bare identifier
/// (`arch`).
fn nickname_from_os_release(release: &OsRelease) -> Option<String> {
    if let Some(codename) = release.codename.as_deref()
        && !codename.is_empty()
    {
        return Some(codename.to_string());
    }
    let id = release.id.as_deref().filter(|id| !id.is_empty())?;
    match release.version_id.as_deref().filter(|version| !version.is_empty()) {
        Some(version) => {
            let major = version.split('.').next().unwrap_or(version);
            Some(format!("{id}{major}"))
        }
        None => Some(id.to_string()),
    }
}

// ============================================================================
// SECTION: Release-File Fallbacks
// ============================================================================

/// Nickname fallback for Linux hosts without an os-release database.
fn release_file_fallback(sources: &LinuxSources<'_>) -> String {
    if let Some(nickname) = versioned_release_file(Path::new(sources.alpine_release), "alpine") {
        return nickname;
    }
    if Path::new(sources.arch_release).exists() {
        return "arch".to_string();
    }
    if let Some(nickname) = versioned_release_file(Path::new(sources.debian_version), "debian") {
        return nickname;
    }
    "linux".to_string()
}

/// Reads a one-line release file and pins `prefix` to its major version.
///
/// Returns `None` when the file is absent or its first dotted component is
/// not purely numeric.
fn versioned_release_file(path: &Path, prefix: &str) -> Option<String> {
    let contents = fs::read_to_string(path).ok()?;
    let major = contents.trim().split('.').next()?;
    if major.is_empty() || !major.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    Some(format!("{prefix}{major}"))
}

// ============================================================================
// SECTION: Tests
// ============================================================================
