/// Errors that can occur while splitting a URL string into components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Scheme is empty or contains characters outside `ALPHA *(ALPHA / DIGIT / "+" / "-" / ".")`
    InvalidScheme,
    /// Host is empty where one is required, or contains a forbidden byte
    InvalidHost,
    /// Port is not a decimal number in `0..=65535`
    InvalidPort,
    /// Bracketed IPv6 host is not closed
    InvalidIpv6,
    /// Input contains control characters
    InvalidUrl,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidScheme => "Invalid scheme",
            Self::InvalidHost => "Invalid host",
            Self::InvalidPort => "Invalid port",
            Self::InvalidIpv6 => "Invalid IPv6 address",
            Self::InvalidUrl => "Invalid URL",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for URL parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
