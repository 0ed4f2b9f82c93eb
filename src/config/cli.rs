use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "fetch-display")]
#[command(about = "Fetch a JSON document and display its `result` field")]
pub struct CliConfig {
    /// URL of the JSON document
    #[arg(long)]
    pub endpoint: Option<String>,

    /// File that receives the result text (`-` for stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Wait for Enter after each notification
    #[arg(long)]
    pub wait: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Builds the effective settings. Flags given on the command line win
    /// over the config file.
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            settings.apply_toml(&file);
        }

        if let Some(endpoint) = &self.endpoint {
            settings.endpoint = endpoint.clone();
        }
        if let Some(output) = &self.output {
            settings.output_path = output.clone();
        }
        if self.wait {
            settings.wait_for_ack = true;
        }

        Ok(settings)
    }
}
