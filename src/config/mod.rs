//! Application configuration.
//!
//! Settings live in a TOML file under the platform config directory.
//! A missing file means defaults; command-line flags override file values.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, EndpointConfig, LoggingConfig, UiConfig, DEFAULT_PRODUCT_URL};
