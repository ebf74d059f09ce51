use crate::core::ConfigProvider;
use crate::domain::model::{EkmanParameters, Language, ParameterRanges};
use crate::utils::error::{EkmanError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_range,
    validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BIND: &str = "0.0.0.0:5001";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5001";
pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub defaults: EkmanParameters,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default)]
    pub json_logs: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
    #[serde(default)]
    pub bundle: bool,
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            json_logs: false,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            bundle: false,
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EkmanError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EkmanError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("server.bind", &self.server.bind)?;
        validate_url("client.endpoint", &self.client.endpoint)?;
        validate_positive_number("client.timeout_seconds", self.client.timeout_seconds, 1)?;
        validate_path("output.path", &self.output.path)?;

        let ranges = ParameterRanges::default();
        let checks = [
            ("defaults.wind_speed", self.defaults.wind_speed, ranges.wind_speed_range),
            (
                "defaults.wind_direction",
                self.defaults.wind_direction,
                ranges.wind_direction_range,
            ),
            ("defaults.latitude", self.defaults.latitude, ranges.latitude_range),
            ("defaults.depth", self.defaults.depth, ranges.depth_range),
        ];
        for (field, value, [min, max]) in checks {
            validate_range(field, value, min, max)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn endpoint(&self) -> &str {
        &self.client.endpoint
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn language(&self) -> Language {
        self.language
    }

    fn timeout_seconds(&self) -> u64 {
        self.client.timeout_seconds
    }

    fn bundle_enabled(&self) -> bool {
        self.output.bundle
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
