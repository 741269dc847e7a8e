use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::Error;
use crate::render::OutputFormat;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub model: ModelConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub base_url: String,
    pub model: String,
    pub api_key_env: String,
    pub temperature: Option<f32>,
    pub timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openrouter.ai/api/v1".to_string(),
            model: "google/gemini-2.0-flash-001".to_string(),
            api_key_env: "REELGENIUS_API_KEY".to_string(),
            temperature: Some(0.8),
            timeout_secs: 60,
        }
    }
}

impl ModelConfig {
    /// Read the API key from the configured environment variable.
    /// Returns None when it is unset or blank.
    pub fn api_key(&self) -> Option<String> {
        let key = std::env::var(&self.api_key_env).ok()?;
        let key = key.trim();
        if key.is_empty() {
            None
        } else {
            Some(key.to_string())
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub bullet: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            bullet: "•".to_string(),
        }
    }
}

impl Config {
    /// The configuration bundled with the binary.
    pub fn compiled_default() -> Self {
        // build.rs has already checked this parses as TOML
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file on top of the compiled defaults.
    /// A missing file yields the defaults, a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self, Error> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content).map_err(|source| Error::Config {
                path: path.to_path_buf(),
                source,
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::compiled_default())
            }
            Err(source) => Err(Error::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Parse a user config, filling unset keys from the compiled defaults.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let mut merged: toml::Table = DEFAULT_CONFIG.parse().unwrap_or_default();
        let overrides: toml::Table = content.parse()?;
        merge_tables(&mut merged, overrides);
        toml::Value::Table(merged).try_into()
    }
}

fn merge_tables(base: &mut toml::Table, overrides: toml::Table) {
    for (key, value) in overrides {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(base_table)), toml::Value::Table(table)) => {
                merge_tables(base_table, table);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_default_matches_file() {
        let config = Config::compiled_default();
        assert_eq!(config.model.api_key_env, "REELGENIUS_API_KEY");
        assert_eq!(config.model.temperature, Some(0.8));
        assert_eq!(config.model.timeout_secs, 60);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.output.bullet, "•");
    }

    #[test]
    fn default_impl_matches_compiled_default() {
        let compiled = Config::compiled_default();
        let default = Config::default();
        assert_eq!(default.model.base_url, compiled.model.base_url);
        assert_eq!(default.model.model, compiled.model.model);
        assert_eq!(default.model.api_key_env, compiled.model.api_key_env);
        assert_eq!(default.model.temperature, compiled.model.temperature);
        assert_eq!(default.model.timeout_secs, compiled.model.timeout_secs);
        assert_eq!(default.output.format, compiled.output.format);
        assert_eq!(default.output.bullet, compiled.output.bullet);
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let config = Config::from_toml("[model]\nmodel = \"local-llm\"\n[output]\nformat = \"html\"\n")
            .unwrap();
        assert_eq!(config.model.model, "local-llm");
        assert_eq!(config.model.base_url, "https://openrouter.ai/api/v1");
        assert_eq!(config.output.format, OutputFormat::Html);
        assert_eq!(config.output.bullet, "•");
    }

    #[test]
    fn invalid_format_is_rejected() {
        assert!(Config::from_toml("[output]\nformat = \"pdf\"\n").is_err());
        assert!(Config::from_toml("not toml [").is_err());
    }

    #[test]
    fn missing_file_uses_defaults() {
        let config = Config::load(Path::new("/nonexistent/reelgenius.toml")).unwrap();
        assert_eq!(config.model.timeout_secs, 60);
    }
}
