pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Fully resolved application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub output_path: String,
    pub timeout_seconds: u64,
    pub format: OutputFormat,
    pub log_level: Option<String>,
    pub log_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            format: OutputFormat::default(),
            log_level: None,
            log_json: false,
        }
    }
}

impl AppConfig {
    /// Defaults, overridden by whatever the file sets.
    pub fn from_toml(file: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: file
                .service
                .base_url
                .clone()
                .unwrap_or(defaults.api_base_url),
            output_path: file.output.path.clone().unwrap_or(defaults.output_path),
            timeout_seconds: file
                .service
                .timeout_seconds
                .unwrap_or(defaults.timeout_seconds),
            format: file.output.format.unwrap_or(defaults.format),
            log_level: file.logging.level.clone(),
            log_json: file.logging.json.unwrap_or(defaults.log_json),
        }
    }
}

impl ConfigProvider for AppConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base_url", &self.api_base_url)?;
        validate_path("output_path", &self.output_path)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "webservices-consumer")]
#[command(about = "Browse movies served by the movie Webservices API")]
pub struct CliConfig {
    /// Pages to open, in order, e.g. "/movies/popular?amount=5"
    #[arg(default_value = "/")]
    pub paths: Vec<String>,

    #[arg(long, help = "Base URL of the Webservices API [default: http://localhost:5000/api]")]
    pub api_base_url: Option<String>,

    #[arg(long, help = "Directory where plots are saved [default: ./output]")]
    pub output_path: Option<String>,

    #[arg(long, value_enum, help = "Rendering of movie listings [default: text]")]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "HTTP request timeout [default: 30]")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<std::path::PathBuf>,

    #[arg(long, help = "List the available pages and exit")]
    pub list_routes: bool,

    #[arg(long, help = "Log as JSON lines")]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the config file if one was given, then applies the flags that
    /// were set explicitly on the command line.
    pub fn resolve(&self) -> Result<AppConfig> {
        let file = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };

        let mut config = AppConfig::from_toml(&file);
        if let Some(url) = &self.api_base_url {
            config.api_base_url = url.clone();
        }
        if let Some(path) = &self.output_path {
            config.output_path = path.clone();
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(timeout) = self.timeout_seconds {
            config.timeout_seconds = timeout;
        }
        if self.log_json {
            config.log_json = true;
        }

        config.validate()?;
        Ok(config)
    }
}
