//! Host platform detection.
//!
//! Upstream publishes x86_64 builds for Linux and macOS only, so the
//! platform decides the target triple baked into every artifact name.

use std::fmt;

use crate::error::FetchError;

/// Platform information for artifact selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Darwin,
}

impl Platform {
    /// Detect the current platform
    pub fn detect() -> Result<Self, FetchError> {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Resolve an OS identifier, either as printed by `uname -s`
    /// ("Linux", "Darwin") or as reported by `std::env::consts::OS`
    /// ("linux", "macos").
    pub fn from_os_name(name: &str) -> Result<Self, FetchError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "linux" => Ok(Platform::Linux),
            "darwin" | "macos" => Ok(Platform::Darwin),
            _ => Err(FetchError::UnsupportedPlatform(name.to_string())),
        }
    }

    pub fn target_triple(&self) -> &'static str {
        match self {
            Platform::Linux => "x86_64-unknown-linux-gnu",
            Platform::Darwin => "x86_64-apple-darwin",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Linux => write!(f, "Linux"),
            Platform::Darwin => write!(f, "Darwin"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uname_names() {
        assert_eq!(Platform::from_os_name("Linux").unwrap(), Platform::Linux);
        assert_eq!(Platform::from_os_name("Darwin").unwrap(), Platform::Darwin);
    }

    #[test]
    fn test_rust_os_names() {
        assert_eq!(Platform::from_os_name("linux").unwrap(), Platform::Linux);
        assert_eq!(Platform::from_os_name("macos").unwrap(), Platform::Darwin);
    }

    #[test]
    fn test_target_triples() {
        assert_eq!(
            Platform::Linux.target_triple(),
            "x86_64-unknown-linux-gnu"
        );
        assert_eq!(Platform::Darwin.target_triple(), "x86_64-apple-darwin");
    }

    #[test]
    fn test_unsupported_names() {
        for name in ["FreeBSD", "windows", "MINGW64_NT-10.0", "", "SunOS"] {
            match Platform::from_os_name(name) {
                Err(FetchError::UnsupportedPlatform(n)) => assert_eq!(n, name),
                other => panic!("expected UnsupportedPlatform for {name:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_display_uses_uname_spelling() {
        assert_eq!(Platform::Linux.to_string(), "Linux");
        assert_eq!(Platform::Darwin.to_string(), "Darwin");
    }

    #[test]
    fn test_platform_detect() {
        let detected = Platform::detect();

        #[cfg(target_os = "linux")]
        assert_eq!(detected.unwrap(), Platform::Linux);

        #[cfg(target_os = "macos")]
        assert_eq!(detected.unwrap(), Platform::Darwin);

        #[cfg(not(any(target_os = "linux", target_os = "macos")))]
        assert!(detected.is_err());
    }
}
