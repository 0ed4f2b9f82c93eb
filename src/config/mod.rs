#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const DEFAULT_ENDPOINT: &str =
    "https://raw.githubusercontent.com/oclus/oclus.github.io/master/search/entries.json";
pub const DEFAULT_OUTPUT_PATH: &str = "result";

/// Fully resolved settings: built-in defaults, then the config file, then flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub endpoint: String,
    pub output_path: String,
    pub wait_for_ack: bool,
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            wait_for_ack: false,
            log_level: None,
        }
    }
}

impl Settings {
    pub fn apply_toml(&mut self, file: &TomlConfig) {
        if let Some(endpoint) = file.endpoint() {
            self.endpoint = endpoint.to_string();
        }
        if let Some(path) = file.output_path() {
            self.output_path = path.to_string();
        }
        if let Some(wait) = file.wait_for_ack() {
            self.wait_for_ack = wait;
        }
        if let Some(level) = file.log_level() {
            self.log_level = Some(level.to_string());
        }
    }
}

impl ConfigProvider for Settings {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn wait_for_ack(&self) -> bool {
        self.wait_for_ack
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("endpoint", &self.endpoint)?;
        validation::validate_path("output", &self.output_path)?;
        if let Some(level) = &self.log_level {
            validation::validate_non_empty_string("logging.level", level)?;
        }
        Ok(())
    }
}
