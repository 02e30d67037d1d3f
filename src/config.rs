// ⚙️ Application Configuration
//
// Built once at process start and passed by reference to every view.
// Nothing here is mutated after construction.

use crate::entities::{CategoryRegistry, ConditionRegistry};
use anyhow::{Context, Result};
use serde::Serialize;
use std::net::SocketAddr;

pub const API_URL_VAR: &str = "CARD_COLLECTOR_API_URL";
pub const BIND_VAR: &str = "CARD_COLLECTOR_BIND";

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_BIND: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    pub app_name: String,
    pub description: String,
    /// Base URL of the collection API. Shown to the user, never called.
    pub api_base_url: String,
    pub categories: CategoryRegistry,
    pub conditions: ConditionRegistry,
}

impl AppConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        AppConfig {
            app_name: "Card Collector".to_string(),
            description: "Track and analyze your trading card collection".to_string(),
            api_base_url: api_base_url.into(),
            categories: CategoryRegistry::with_defaults(),
            conditions: ConditionRegistry::with_defaults(),
        }
    }

    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    ///
    /// Empty values fall back to the default, same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup(API_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self::new(api_base_url)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// Settings that only the web server needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerSettings {
    pub bind_addr: SocketAddr,
}

impl ServerSettings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(BIND_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND.to_string());

        let bind_addr = raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {} value: {:?}", BIND_VAR, raw))?;

        Ok(ServerSettings { bind_addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_api_url_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[]));

        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.app_name, "Card Collector");
    }

    #[test]
    fn test_api_url_from_env() {
        let config = AppConfig::from_lookup(lookup_from(&[(
            API_URL_VAR,
            "https://cards.example.com/api",
        )]));

        assert_eq!(config.api_base_url, "https://cards.example.com/api");
    }

    #[test]
    fn test_blank_api_url_falls_back() {
        let config = AppConfig::from_lookup(lookup_from(&[(API_URL_VAR, "   ")]));

        assert_eq!(config.api_base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_config_carries_static_data() {
        let config = AppConfig::default();

        assert_eq!(config.categories.count(), 3);
        assert_eq!(config.conditions.count(), 6);
    }

    #[test]
    fn test_server_settings_default_bind() {
        let settings = ServerSettings::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(settings.bind_addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_server_settings_custom_bind() {
        let settings =
            ServerSettings::from_lookup(lookup_from(&[(BIND_VAR, "127.0.0.1:8080")])).unwrap();

        assert_eq!(settings.bind_addr.port(), 8080);
    }

    #[test]
    fn test_server_settings_invalid_bind() {
        let result = ServerSettings::from_lookup(lookup_from(&[(BIND_VAR, "not-an-address")]));

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains(BIND_VAR));
    }
}
