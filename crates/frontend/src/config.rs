//! Catalog configuration, read from the page query string.
//!
//! `?log=info&story=tag&intent=danger&small=true`

use contracts::ui::Intent;
use serde::Deserialize;
use web_sys::window;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Console log level
    pub log: String,
    /// Story shown on load
    pub story: String,
    /// Render the story picker in its compact size
    pub small: bool,
    /// Limit the tag story to one intent
    pub intent: Option<Intent>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            log: "debug".to_string(),
            story: "tag".to_string(),
            small: false,
            intent: None,
        }
    }
}

impl CatalogConfig {
    pub fn from_query(query: &str) -> Self {
        match serde_qs::from_str(query.trim_start_matches('?')) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Ignoring malformed catalog query {query:?}: {err}");
                Self::default()
            }
        }
    }

    pub fn from_location() -> Self {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }

    /// Falls back to `Debug` for unknown names.
    pub fn log_level(&self) -> log::Level {
        self.log.parse().unwrap_or(log::Level::Debug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_default() {
        assert_eq!(CatalogConfig::from_query(""), CatalogConfig::default());
        assert_eq!(CatalogConfig::from_query("?"), CatalogConfig::default());
    }

    #[test]
    fn test_full_query() {
        let config = CatalogConfig::from_query("?log=warn&story=tabs&small=true");
        assert_eq!(config.log_level(), log::Level::Warn);
        assert_eq!(config.story, "tabs");
        assert!(config.small);
        assert_eq!(config.intent, None);
    }

    #[test]
    fn test_intent_query() {
        let config = CatalogConfig::from_query("story=tag&intent=danger");
        assert_eq!(config.intent, Some(Intent::Danger));
    }

    #[test]
    fn test_unknown_intent_falls_back() {
        assert_eq!(CatalogConfig::from_query("intent=critical"), CatalogConfig::default());
    }

    #[test]
    fn test_partial_query_keeps_defaults() {
        let config = CatalogConfig::from_query("story=tabs");
        assert_eq!(config.story, "tabs");
        assert_eq!(config.log, "debug");
        assert!(!config.small);
    }

    #[test]
    fn test_malformed_query_falls_back() {
        assert_eq!(CatalogConfig::from_query("small=maybe"), CatalogConfig::default());
    }

    #[test]
    fn test_unknown_log_level() {
        let config = CatalogConfig::from_query("log=loud");
        assert_eq!(config.log_level(), log::Level::Debug);
    }
}
