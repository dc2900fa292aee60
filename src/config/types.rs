use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Product endpoint used when nothing else is configured.
pub const DEFAULT_PRODUCT_URL: &str = "https://marketfake.fly.dev/product";

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the product is fetched from and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Full URL of the product resource.
    #[serde(default = "default_url")]
    pub url: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Screen settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw interval for the loading spinner in milliseconds (default: 100).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Show the build version in the footer (default: true).
    #[serde(default = "default_show_version")]
    pub show_version: bool,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for the interactive screen. Defaults to the cache directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_url() -> String {
    DEFAULT_PRODUCT_URL.to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_show_version() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl EndpointConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            show_version: default_show_version(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_product_endpoint() {
        let config = Config::default();
        assert_eq!(config.endpoint.url, DEFAULT_PRODUCT_URL);
        assert_eq!(config.endpoint.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.endpoint.connect_timeout(), Duration::from_secs(5));
        assert_eq!(config.ui.tick_rate(), Duration::from_millis(100));
        assert!(config.ui.show_version);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let config: Config = toml::from_str(
            r#"
[endpoint]
timeout_seconds = 3
"#,
        )
        .unwrap();
        assert_eq!(config.endpoint.url, DEFAULT_PRODUCT_URL);
        assert_eq!(config.endpoint.timeout_seconds, 3);
        assert_eq!(config.endpoint.connect_timeout_seconds, 5);
        assert_eq!(config.ui, UiConfig::default());
    }
}
