//! Runtime configuration from environment variables.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;
use crate::matching::Matcher;

pub const THRESHOLD_VAR: &str = "SITEKIT_PALETTE_THRESHOLD";
pub const CATALOG_VAR: &str = "SITEKIT_PALETTE_CATALOG";
pub const LOG_VAR: &str = "SITEKIT_PALETTE_LOG";
pub const LOG_FILTER_VAR: &str = "RUST_LOG";
pub const DEFAULT_LOG_FILTER: &str = "sitekit_palette=info";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    pub matcher: Matcher,
    /// JSON catalog replacing the built-in commands.
    pub catalog_path: Option<PathBuf>,
    /// Where tracing output goes; discarded when unset.
    pub log_path: Option<PathBuf>,
    /// `RUST_LOG` directives; replace [`DEFAULT_LOG_FILTER`] entirely when set.
    pub log_filter: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let matcher = match get(THRESHOLD_VAR) {
            Some(raw) => {
                let threshold: f64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidThreshold(raw.clone()))?;
                Matcher::new(threshold)?
            }
            None => Matcher::default(),
        };

        Ok(Self {
            matcher,
            catalog_path: get(CATALOG_VAR).map(PathBuf::from),
            log_path: get(LOG_VAR).map(PathBuf::from),
            log_filter: get(LOG_FILTER_VAR),
        })
    }

    /// Filter for the subscriber. Unparseable `RUST_LOG` falls back to the default.
    pub fn env_filter(&self) -> EnvFilter {
        self.log_filter
            .as_deref()
            .and_then(|raw| EnvFilter::try_new(raw).ok())
            .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::DEFAULT_THRESHOLD;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.matcher.threshold(), DEFAULT_THRESHOLD);
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn reads_all_vars() {
        let config = Config::from_lookup(lookup(&[
            (THRESHOLD_VAR, " 0.8 "),
            (CATALOG_VAR, "/etc/sitekit/commands.json"),
            (LOG_VAR, "/tmp/palette.log"),
        ]))
        .unwrap();
        assert_eq!(config.matcher.threshold(), 0.8);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/etc/sitekit/commands.json")));
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/palette.log")));
    }

    #[test]
    fn blank_values_are_unset() {
        let config = Config::from_lookup(lookup(&[(THRESHOLD_VAR, ""), (CATALOG_VAR, "  ")])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn default_log_filter() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.env_filter().to_string(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn rust_log_overrides_default_filter() {
        let config =
            Config::from_lookup(lookup(&[(LOG_FILTER_VAR, "sitekit_palette=debug")])).unwrap();
        assert_eq!(config.log_filter.as_deref(), Some("sitekit_palette=debug"));
        let filter = config.env_filter().to_string();
        assert!(filter.contains("sitekit_palette=debug"), "{filter}");
        assert!(!filter.contains("info"), "{filter}");
    }

    #[test]
    fn bad_threshold_is_an_error() {
        for raw in ["abc", "0", "1.5", "-1"] {
            let err = Config::from_lookup(lookup(&[(THRESHOLD_VAR, raw)])).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidThreshold(_)), "{raw}");
        }
    }
}
