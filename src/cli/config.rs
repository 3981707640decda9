// ABOUTME: Configuration management for confgen
// ABOUTME: Handles loading configuration from YAML files and environment variables

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::build::{DEFAULT_OUTPUT_NAME, DEFAULT_TEMPLATE_NAME};
use crate::template::DEFAULT_DELIMITER;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_template")]
    pub template: String,

    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default)]
    pub template_vars: HashMap<String, String>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

fn default_template() -> String {
    DEFAULT_TEMPLATE_NAME.to_string()
}

fn default_output() -> String {
    DEFAULT_OUTPUT_NAME.to_string()
}

fn default_delimiter() -> char {
    DEFAULT_DELIMITER
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template: default_template(),
            output: default_output(),
            delimiter: default_delimiter(),
            author: None,
            template_vars: HashMap::new(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file path or default locations
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => {
                return Err(anyhow::anyhow!(
                    "Configuration file not found: {}",
                    p.display()
                ));
            }
            Some(p) => p,
            None => Self::find_config_file(),
        };

        let mut config = if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            Self::from_yaml(&contents).map_err(|e| {
                anyhow::anyhow!("Invalid configuration {}: {}", config_path.display(), e)
            })?
        } else {
            Config::default()
        };

        config.merge_env();
        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(contents: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.delimiter.is_whitespace() || self.delimiter.is_alphanumeric() {
            return Err(anyhow::anyhow!(
                "Delimiter '{}' must be a punctuation character",
                self.delimiter
            ));
        }
        if self.template.is_empty() || self.output.is_empty() {
            return Err(anyhow::anyhow!("Template and output names cannot be empty"));
        }
        Ok(())
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> PathBuf {
        let possible_paths = vec![
            PathBuf::from("confgen.yaml"),
            PathBuf::from("confgen.yml"),
            PathBuf::from(".confgen.yaml"),
            PathBuf::from(".confgen.yml"),
        ];

        // Check home directory
        if let Some(home_dir) = dirs::home_dir() {
            let home_config = home_dir.join(".confgen").join("config.yaml");
            if home_config.exists() {
                return home_config;
            }
        }

        // Check current directory
        for path in possible_paths {
            if path.exists() {
                return path;
            }
        }

        // Return default path (may not exist)
        PathBuf::from("confgen.yaml")
    }

    /// Merge environment variables into configuration
    fn merge_env(&mut self) {
        if let Ok(level) = std::env::var("CONFGEN_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("CONFGEN_LOG_FORMAT") {
            self.logging.format = format;
        }
        if let Ok(author) = std::env::var("CONFGEN_AUTHOR") {
            self.author = Some(author);
        }
    }

    /// Merge additional variables into template variables
    pub fn merge_variables(&mut self, vars: HashMap<String, String>) {
        self.template_vars.extend(vars);
    }
}
