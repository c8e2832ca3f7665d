use strum_macros::{Display, EnumString};

/// Operating system names as written into generated headers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum Platform {
    Linux,
    Darwin,
    Windows,
    #[strum(serialize = "FreeBSD")]
    FreeBsd,
    #[strum(serialize = "OpenBSD")]
    OpenBsd,
    #[strum(serialize = "NetBSD")]
    NetBsd,
}

impl Platform {
    /// The platform this binary was built for, if it is a known one
    pub fn host() -> Option<Self> {
        match std::env::consts::OS {
            "linux" => Some(Platform::Linux),
            "macos" => Some(Platform::Darwin),
            "windows" => Some(Platform::Windows),
            "freebsd" => Some(Platform::FreeBsd),
            "openbsd" => Some(Platform::OpenBsd),
            "netbsd" => Some(Platform::NetBsd),
            _ => None,
        }
    }

    /// Display name of the host platform, falling back to the raw OS name
    pub fn host_name() -> String {
        Self::host()
            .map(|platform| platform.to_string())
            .unwrap_or_else(|| std::env::consts::OS.to_string())
    }
}
