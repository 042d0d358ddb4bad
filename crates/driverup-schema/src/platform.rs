//! Platform resolution.
//!
//! The manifest publishes one driver archive per platform identifier. The
//! running system is described by an [`Os`] name and an architecture width
//! ([`Bits`]); a static table maps the pair onto an identifier, or onto
//! nothing when no build exists for it.
//!
//! # Example
//!
//! ```
//! use driverup_schema::{Bits, LinkStrategy, Os, Platform};
//!
//! let platform = Platform::new(Os::Linux, Bits::X64).unwrap();
//! assert_eq!(platform.id.as_str(), "linux64");
//! assert_eq!(platform.link, LinkStrategy::Symlink);
//! ```

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::DRIVER_ARTIFACT;

/// Operating system family, named the way the platform table names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
    /// Linux
    Linux,
    /// macOS
    Darwin,
    /// JVM-hosted runtimes
    Java,
    /// Windows
    Windows,
}

/// Pointer width of the running build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bits {
    /// 64-bit
    X64,
    /// 32-bit
    X32,
}

/// Platform identifier as used in the manifest's download lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlatformId(&'static str);

/// How the active binary is published at its fixed path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkStrategy {
    /// Symbolic link to the installed binary.
    Symlink,
    /// Plain copy of the installed binary, for hosts where creating
    /// symlinks needs elevated privileges.
    Copy,
}

/// No driver build exists for this OS/architecture pair.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Platform not supported: {os} {bits}")]
pub struct UnsupportedPlatform {
    /// OS name as detected or given.
    pub os: String,
    /// Architecture width as detected or given.
    pub bits: String,
}

/// Everything the installer needs to know about the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    /// Manifest platform identifier.
    pub id: PlatformId,
    /// Host OS.
    pub os: Os,
    /// Name of the driver executable inside the archive and at the link path.
    pub executable: &'static str,
    /// Publishing strategy for the active binary.
    pub link: LinkStrategy,
}

impl Os {
    /// The OS this binary was built for, if it has a name in the table.
    pub fn current() -> Option<Self> {
        match std::env::consts::OS {
            "linux" => Some(Self::Linux),
            "macos" => Some(Self::Darwin),
            "windows" => Some(Self::Windows),
            _ => None,
        }
    }

    /// Table name of this OS.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linux => "Linux",
            Self::Darwin => "Darwin",
            Self::Java => "Java",
            Self::Windows => "Windows",
        }
    }

    /// File name of the driver executable on this OS.
    pub fn executable_name(&self) -> &'static str {
        match self {
            Self::Windows => "chromedriver.exe",
            _ => DRIVER_ARTIFACT,
        }
    }
}

impl Bits {
    /// Pointer width of the running build.
    pub fn current() -> Self {
        #[cfg(target_pointer_width = "64")]
        {
            Self::X64
        }
        #[cfg(not(target_pointer_width = "64"))]
        {
            Self::X32
        }
    }

    /// Table name of this width.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::X64 => "64bit",
            Self::X32 => "32bit",
        }
    }
}

impl PlatformId {
    /// 64-bit Linux.
    pub const LINUX64: Self = Self("linux64");
    /// 64-bit Windows.
    pub const WIN64: Self = Self("win64");
    /// 32-bit Windows.
    pub const WIN32: Self = Self("win32");

    /// Manifest string for this platform.
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Windows builds are published by copy, everything else by symlink.
    pub fn link_strategy(&self) -> LinkStrategy {
        if self.0.contains("win") {
            LinkStrategy::Copy
        } else {
            LinkStrategy::Symlink
        }
    }
}

/// Looks up the platform identifier for an OS/architecture pair.
///
/// macOS and JVM hosts have no entry, whatever their width.
pub fn resolve(os: Os, bits: Bits) -> Option<PlatformId> {
    match (bits, os) {
        (Bits::X64, Os::Linux) => Some(PlatformId::LINUX64),
        (Bits::X64, Os::Windows) => Some(PlatformId::WIN64),
        (Bits::X32, Os::Windows) => Some(PlatformId::WIN32),
        (_, Os::Darwin | Os::Java) | (Bits::X32, Os::Linux) => None,
    }
}

impl Platform {
    /// Resolve a known OS/architecture pair.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedPlatform`] when the table has no build for the pair.
    pub fn new(os: Os, bits: Bits) -> Result<Self, UnsupportedPlatform> {
        let id = resolve(os, bits).ok_or_else(|| UnsupportedPlatform {
            os: os.as_str().to_string(),
            bits: bits.as_str().to_string(),
        })?;

        Ok(Self {
            id,
            os,
            executable: os.executable_name(),
            link: id.link_strategy(),
        })
    }

    /// Resolve from table names such as `("Linux", "64bit")`.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedPlatform`] for unknown names as well as for known
    /// pairs without a build.
    pub fn from_names(os: &str, bits: &str) -> Result<Self, UnsupportedPlatform> {
        let unsupported = || UnsupportedPlatform {
            os: os.to_string(),
            bits: bits.to_string(),
        };
        let os = os.parse::<Os>().map_err(|_| unsupported())?;
        let bits = bits.parse::<Bits>().map_err(|_| unsupported())?;
        Self::new(os, bits)
    }

    /// Resolve the platform of the running binary.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedPlatform`] when the host has no driver build.
    pub fn detect() -> Result<Self, UnsupportedPlatform> {
        let bits = Bits::current();
        match Os::current() {
            Some(os) => Self::new(os, bits),
            None => Err(UnsupportedPlatform {
                os: std::env::consts::OS.to_string(),
                bits: bits.as_str().to_string(),
            }),
        }
    }

    /// Location of the executable inside an extracted archive, relative to
    /// the extraction directory (e.g. `chromedriver-linux64/chromedriver`).
    pub fn extracted_executable(&self) -> PathBuf {
        PathBuf::from(format!("{DRIVER_ARTIFACT}-{}", self.id)).join(self.executable)
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl FromStr for Os {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Linux" => Ok(Self::Linux),
            "Darwin" => Ok(Self::Darwin),
            "Java" => Ok(Self::Java),
            "Windows" => Ok(Self::Windows),
            _ => Err(format!("Unknown OS: {s}")),
        }
    }
}

impl FromStr for Bits {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "64bit" => Ok(Self::X64),
            "32bit" => Ok(Self::X32),
            _ => Err(format!("Unknown architecture: {s}")),
        }
    }
}
