use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini: GeminiConfig,
    pub port: u16,
    pub rust_log: String,
}

/// Connection settings for the generation backend.
/// URL and key are opaque: the key is sent as the `key` query parameter.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key → value source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let require = |key: &str| {
            lookup(key).with_context(|| format!("Required environment variable '{key}' is not set"))
        };

        let timeout_secs = match lookup("GEMINI_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("GEMINI_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config {
            gemini: GeminiConfig {
                api_url: require("GEMINI_API_URL")?,
                api_key: require("GEMINI_API_KEY")?,
                timeout: Duration::from_secs(timeout_secs),
            },
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    const REQUIRED: [(&str, &str); 2] = [
        ("GEMINI_API_URL", "https://example.test/generate"),
        ("GEMINI_API_KEY", "k"),
    ];

    #[test]
    fn test_defaults_apply_when_optional_vars_are_missing() {
        let config = config_from(&REQUIRED).unwrap();
        assert_eq!(config.gemini.api_url, "https://example.test/generate");
        assert_eq!(config.gemini.api_key, "k");
        assert_eq!(config.gemini.timeout, Duration::from_secs(120));
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_optional_vars_override_defaults() {
        let mut vars = REQUIRED.to_vec();
        vars.extend([
            ("GEMINI_TIMEOUT_SECS", "15"),
            ("PORT", "9000"),
            ("RUST_LOG", "debug"),
        ]);
        let config = config_from(&vars).unwrap();
        assert_eq!(config.gemini.timeout, Duration::from_secs(15));
        assert_eq!(config.port, 9000);
        assert_eq!(config.rust_log, "debug");
    }

    #[test]
    fn test_missing_required_var_names_the_key() {
        let err = config_from(&[("GEMINI_API_URL", "https://example.test")]).unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"), "got {err}");
    }

    #[test]
    fn test_bad_numbers_are_rejected() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("GEMINI_TIMEOUT_SECS", "soon"));
        let err = config_from(&vars).unwrap_err();
        assert!(err.to_string().contains("GEMINI_TIMEOUT_SECS"), "got {err}");

        let mut vars = REQUIRED.to_vec();
        vars.push(("PORT", "70000"));
        let err = config_from(&vars).unwrap_err();
        assert!(err.to_string().contains("PORT"), "got {err}");
    }

    #[test]
    fn test_gemini_config_debug_redacts_key() {
        let config = GeminiConfig {
            api_url: "https://example.test/v1beta/models/gemini:generateContent".to_string(),
            api_key: "super-secret".to_string(),
            timeout: Duration::from_secs(5),
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("[REDACTED]"));
        assert!(rendered.contains("generateContent"));
    }
}
