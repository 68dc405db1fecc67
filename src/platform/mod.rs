//! Platform description and normalization
//!
//! The host reports its OS kind and architecture kind as a [`RawPlatform`].
//! [`normalize`] turns that into the labels the D2XX artifacts are named
//! with, a [`NormalizedPlatform`].

mod detection;

use std::fmt;

pub use detection::{HostPlatformDetector, PlatformDetector, arch_kind, os_kind};

#[cfg(test)]
pub use detection::MockPlatformDetector;

/// OS kind reported by hosts running the Windows NT kernel family
pub const WINDOWS_NT: &str = "Windows_NT";

/// OS label used in artifact names for Windows builds
pub const WINDOWS: &str = "Windows";

/// Generic 64-bit x86 architecture kind
pub const X64: &str = "x64";

/// Architecture label Windows builds use for 64-bit x86
pub const AMD64: &str = "AMD64";

/// OS kind and architecture kind as reported by the host
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawPlatform {
    pub os: String,
    pub arch: String,
}

impl RawPlatform {
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }
}

impl fmt::Display for RawPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}

/// Labels interpolated into the artifact file name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPlatform {
    pub os_label: String,
    pub arch_label: String,
}

impl fmt::Display for NormalizedPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.os_label, self.arch_label)
    }
}

/// Map an OS kind to its artifact label.
///
/// `Windows_NT` becomes `Windows`; every other kind passes through.
pub fn os_label(os: &str) -> &str {
    if os == WINDOWS_NT { WINDOWS } else { os }
}

/// Map an architecture kind to its artifact label, given the already
/// normalized OS label.
///
/// Only `x64` on `Windows` is renamed (to `AMD64`).
pub fn arch_label<'a>(os_label: &str, arch: &'a str) -> &'a str {
    if os_label == WINDOWS && arch == X64 {
        AMD64
    } else {
        arch
    }
}

/// Apply both normalization rules, OS first.
pub fn normalize(raw: &RawPlatform) -> NormalizedPlatform {
    let os_label = os_label(&raw.os);
    let arch_label = arch_label(os_label, &raw.arch);

    NormalizedPlatform {
        os_label: os_label.to_string(),
        arch_label: arch_label.to_string(),
    }
}
