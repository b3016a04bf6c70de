use std::fmt;

/// Host operating systems with a known toolchain profile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostOs {
    /// `linux` / `Linux`
    Linux,
    /// `macos` / `Darwin`
    MacOs,
    /// `windows` / `Windows`
    Windows,
    /// Anything else, with the identifier as given.
    Unsupported(String),
}

impl HostOs {
    /// Detect the OS this binary was built for.
    pub fn detect() -> Self {
        Self::from_identifier(std::env::consts::OS)
    }

    /// Accepts both Rust target names (`linux`, `macos`, `windows`) and
    /// uname-style names (`Linux`, `Darwin`, `Windows`), case-insensitively.
    pub fn from_identifier(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "linux" => Self::Linux,
            "macos" | "darwin" | "mac" => Self::MacOs,
            "windows" | "win32" => Self::Windows,
            _ => Self::Unsupported(id.to_string()),
        }
    }
}

impl fmt::Display for HostOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linux => f.write_str("Linux"),
            Self::MacOs => f.write_str("Darwin"),
            Self::Windows => f.write_str("Windows"),
            Self::Unsupported(id) => write!(f, "{id}"),
        }
    }
}
