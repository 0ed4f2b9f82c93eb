use crate::utils::error::{FetchError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional config file. Every section and key may be left out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: Option<SourceConfig>,
    pub output: Option<OutputConfig>,
    pub notify: Option<NotifyConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotifyConfig {
    pub wait_for_ack: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FetchError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FetchError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the value of the environment variable. Unset
    /// variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FetchError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.source.as_ref()?.endpoint.as_deref()
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref()?.path.as_deref()
    }

    pub fn wait_for_ack(&self) -> Option<bool> {
        self.notify.as_ref()?.wait_for_ack
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref()?.level.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = self.endpoint() {
            validation::validate_url("source.endpoint", endpoint)?;
        }

        if let Some(path) = self.output_path() {
            validation::validate_path("output.path", path)?;
        }

        // An empty [logging] section is a mistake, not a default.
        if let Some(logging) = &self.logging {
            let level = validation::validate_required_field("logging.level", &logging.level)?;
            validation::validate_non_empty_string("logging.level", level)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[source]
endpoint = "https://example.com/entries.json"

[output]
path = "./out/result"

[notify]
wait_for_ack = true

[logging]
level = "fetch_display=debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.endpoint(), Some("https://example.com/entries.json"));
        assert_eq!(config.output_path(), Some("./out/result"));
        assert_eq!(config.wait_for_ack(), Some(true));
        assert_eq!(config.log_level(), Some("fetch_display=debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.endpoint().is_none());
        assert!(config.output_path().is_none());
        assert!(config.wait_for_ack().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FETCH_DISPLAY_TEST_ENDPOINT", "https://test.api.com/doc.json");

        let toml_content = r#"
[source]
endpoint = "${FETCH_DISPLAY_TEST_ENDPOINT}"

[output]
path = "${FETCH_DISPLAY_SURELY_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.endpoint(), Some("https://test.api.com/doc.json"));
        assert_eq!(config.output_path(), Some("${FETCH_DISPLAY_SURELY_UNSET_VAR}"));

        std::env::remove_var("FETCH_DISPLAY_TEST_ENDPOINT");
    }

    #[test]
    fn test_config_validation() {
        let bad_url = TomlConfig::from_toml_str("[source]\nendpoint = \"invalid-url\"\n").unwrap();
        assert!(bad_url.validate().is_err());

        let empty_logging = TomlConfig::from_toml_str("[logging]\n").unwrap();
        assert!(matches!(
            empty_logging.validate(),
            Err(FetchError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[source\nendpoint = 1").unwrap_err();
        assert!(matches!(err, FetchError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\npath = \"result.txt\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output_path(), Some("result.txt"));
    }
}
