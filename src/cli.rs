use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

/// Fetch a product from the remote endpoint and show it.
#[derive(Debug, Parser)]
#[command(name = "product-view", version, about)]
pub struct Cli {
    /// Override the product endpoint URL
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Config file to read instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Fetch once, print each state to stdout and exit (no screen)
    #[arg(long)]
    pub once: bool,

    /// Do not fetch on startup; wait for `r`
    #[arg(long)]
    pub no_autofetch: bool,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Load the config file and apply command-line overrides on top.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::parse_from(&path)?;
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.url {
            config.endpoint.url = url.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
    }
}
