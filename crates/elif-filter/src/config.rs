//! Process-wide filter configuration
//!
//! The encoding mode is resolved once, either installed explicitly at startup
//! or read from the environment on first use, and never changes afterwards.

use crate::error::ConfigError;
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

/// Environment variable selecting the encoding mode
pub const ENCODING_ENV_VAR: &str = "ELIF_FILTER_ENCODING";

/// How string lengths are measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodingMode {
    /// Count Unicode code points
    Multibyte,
    /// Count raw UTF-8 bytes
    Byte,
}

impl EncodingMode {
    /// Detect multibyte support on the platform.
    ///
    /// Rust strings are guaranteed UTF-8, so code point counting is always
    /// available and detection settles on [`EncodingMode::Multibyte`].
    pub fn detect() -> Self {
        EncodingMode::Multibyte
    }

    /// Check if lengths are counted in code points
    pub fn is_multibyte(&self) -> bool {
        matches!(self, EncodingMode::Multibyte)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EncodingMode::Multibyte => "multibyte",
            EncodingMode::Byte => "byte",
        }
    }
}

impl Default for EncodingMode {
    fn default() -> Self {
        Self::detect()
    }
}

impl FromStr for EncodingMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "multibyte" | "mb" | "utf8" | "utf-8" | "chars" => Ok(EncodingMode::Multibyte),
            "byte" | "bytes" | "ascii" | "binary" => Ok(EncodingMode::Byte),
            _ => Err(ConfigError::InvalidValue {
                field: ENCODING_ENV_VAR.to_string(),
                value: s.to_string(),
                expected: "multibyte or byte".to_string(),
            }),
        }
    }
}

impl std::fmt::Display for EncodingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Filter configuration shared by every rule in the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterConfig {
    pub encoding: EncodingMode,
}

static GLOBAL_CONFIG: OnceLock<FilterConfig> = OnceLock::new();

impl FilterConfig {
    pub fn new(encoding: EncodingMode) -> Self {
        Self { encoding }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(ENCODING_ENV_VAR) {
            Ok(raw) => Self::from_raw(Some(&raw)),
            Err(env::VarError::NotPresent) => Self::from_raw(None),
            Err(env::VarError::NotUnicode(raw)) => Err(ConfigError::InvalidValue {
                field: ENCODING_ENV_VAR.to_string(),
                value: raw.to_string_lossy().into_owned(),
                expected: "multibyte or byte".to_string(),
            }),
        }
    }

    fn from_raw(raw: Option<&str>) -> Result<Self, ConfigError> {
        let encoding = match raw {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => EncodingMode::detect(),
        };
        Ok(Self { encoding })
    }

    /// Install the process-wide configuration. Only the first call wins.
    pub fn install(self) -> Result<(), ConfigError> {
        GLOBAL_CONFIG
            .set(self)
            .map_err(|_| ConfigError::AlreadyInitialized)
    }

    /// Get the process-wide configuration, resolving it from the environment
    /// on first access when nothing was installed.
    pub fn global() -> &'static FilterConfig {
        GLOBAL_CONFIG.get_or_init(|| match Self::from_env() {
            Ok(config) => config,
            Err(e) => {
                let fallback = EncodingMode::detect();
                tracing::warn!("{}; falling back to {} encoding", e, fallback);
                Self::new(fallback)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_mode_from_str() {
        assert_eq!("multibyte".parse::<EncodingMode>().unwrap(), EncodingMode::Multibyte);
        assert_eq!("UTF-8".parse::<EncodingMode>().unwrap(), EncodingMode::Multibyte);
        assert_eq!(" bytes ".parse::<EncodingMode>().unwrap(), EncodingMode::Byte);
        assert_eq!("Binary".parse::<EncodingMode>().unwrap(), EncodingMode::Byte);

        let error = "ebcdic".parse::<EncodingMode>().unwrap_err();
        assert!(matches!(error, ConfigError::InvalidValue { ref value, .. } if value == "ebcdic"));
    }

    #[test]
    fn test_encoding_mode_display_round_trips() {
        for mode in [EncodingMode::Multibyte, EncodingMode::Byte] {
            assert_eq!(mode.to_string().parse::<EncodingMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_detect_prefers_multibyte() {
        assert!(EncodingMode::detect().is_multibyte());
        assert_eq!(FilterConfig::default().encoding, EncodingMode::Multibyte);
    }

    #[test]
    fn test_from_raw() {
        assert_eq!(FilterConfig::from_raw(None).unwrap().encoding, EncodingMode::Multibyte);
        assert_eq!(FilterConfig::from_raw(Some("")).unwrap().encoding, EncodingMode::Multibyte);
        assert_eq!(FilterConfig::from_raw(Some("byte")).unwrap().encoding, EncodingMode::Byte);
        assert!(FilterConfig::from_raw(Some("latin1")).is_err());
    }

    #[test]
    fn test_global_is_stable() {
        let first = FilterConfig::global();
        let second = FilterConfig::global();
        assert!(std::ptr::eq(first, second));
        assert_eq!(
            FilterConfig::new(EncodingMode::Byte).install(),
            Err(ConfigError::AlreadyInitialized)
        );
    }
}
