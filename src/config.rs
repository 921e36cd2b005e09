//! Bridge configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`), falling back to the platform's
//! published limits when unset.

/// Default byte limit for a workshop item title.
pub const DEFAULT_MAX_TITLE_CHARS: usize = 128;

/// Default byte limit for a workshop item description.
pub const DEFAULT_MAX_DESCRIPTION_CHARS: usize = 8000;

/// Default byte limit for a workshop item metadata blob.
pub const DEFAULT_MAX_METADATA_CHARS: usize = 5000;

/// Top-level bridge configuration.
///
/// Loaded once at startup via [`BridgeConfig::from_env`] and handed to
/// [`crate::bridge::Bridge`] at construction.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Maximum accepted byte length for an item title.
    pub max_title_len: usize,

    /// Maximum accepted byte length for an item description.
    pub max_description_len: usize,

    /// Maximum accepted byte length for an item metadata blob.
    pub max_metadata_len: usize,
}

impl BridgeConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to the platform defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            max_title_len: parse_env("BRIDGE_MAX_TITLE_CHARS", DEFAULT_MAX_TITLE_CHARS),
            max_description_len: parse_env(
                "BRIDGE_MAX_DESCRIPTION_CHARS",
                DEFAULT_MAX_DESCRIPTION_CHARS,
            ),
            max_metadata_len: parse_env("BRIDGE_MAX_METADATA_CHARS", DEFAULT_MAX_METADATA_CHARS),
        }
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            max_title_len: DEFAULT_MAX_TITLE_CHARS,
            max_description_len: DEFAULT_MAX_DESCRIPTION_CHARS,
            max_metadata_len: DEFAULT_MAX_METADATA_CHARS,
        }
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_platform_limits() {
        let config = BridgeConfig::default();
        assert_eq!(config.max_title_len, 128);
        assert_eq!(config.max_description_len, 8000);
        assert_eq!(config.max_metadata_len, 5000);
    }

    #[test]
    fn parse_env_falls_back_on_missing_key() {
        let value: usize = parse_env("BRIDGE_TEST_KEY_THAT_IS_NEVER_SET", 42);
        assert_eq!(value, 42);
    }
}
