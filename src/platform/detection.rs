use super::RawPlatform;

impl RawPlatform {
    /// Read the OS kind and architecture kind of the running host
    pub fn detect() -> Self {
        Self {
            os: os_kind(std::env::consts::OS),
            arch: arch_kind(std::env::consts::ARCH, cfg!(target_endian = "little")),
        }
    }
}

/// Translate a Rust `target_os` name into the OS kind the host reports
/// (`Linux`, `Darwin`, `Windows_NT`, ...). Unknown names pass through.
pub fn os_kind(target_os: &str) -> String {
    match target_os {
        "windows" => "Windows_NT",
        "linux" | "android" => "Linux",
        "macos" | "ios" => "Darwin",
        "freebsd" => "FreeBSD",
        "openbsd" => "OpenBSD",
        "netbsd" => "NetBSD",
        "solaris" | "illumos" => "SunOS",
        "aix" => "AIX",
        other => other,
    }
    .to_string()
}

/// Translate a Rust `target_arch` name into the architecture kind the host
/// reports (`x64`, `arm64`, `ia32`, ...). Little-endian MIPS gets the `el`
/// suffix. Unknown names pass through.
pub fn arch_kind(target_arch: &str, little_endian: bool) -> String {
    match (target_arch, little_endian) {
        ("x86_64", _) => "x64",
        ("x86", _) => "ia32",
        ("aarch64", _) => "arm64",
        ("powerpc64", _) => "ppc64",
        ("powerpc", _) => "ppc",
        ("loongarch64", _) => "loong64",
        ("mips", true) => "mipsel",
        ("mips64", true) => "mips64el",
        (other, _) => other,
    }
    .to_string()
}

/// Trait for platform detection (useful for testing)
#[cfg_attr(test, mockall::automock)]
pub trait PlatformDetector: Send + Sync {
    fn detect(&self) -> RawPlatform;
}

/// Detector backed by the compile-time target of the running binary
#[derive(Debug, Default, Clone, Copy)]
pub struct HostPlatformDetector;

impl PlatformDetector for HostPlatformDetector {
    #[tracing::instrument(skip(self))]
    fn detect(&self) -> RawPlatform {
        RawPlatform::detect()
    }
}
