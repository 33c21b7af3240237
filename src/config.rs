use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

use crate::models::ReportSchema;

/// Root configuration structure, deserialized from `.repo-licensr/config.toml`.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Where repository references are resolved against.
    #[serde(default)]
    pub source: SourceConfig,
    /// Report defaults.
    #[serde(default)]
    pub report: ReportConfig,
}

/// The hosting service queried for license metadata.
#[derive(Debug, Deserialize)]
pub struct SourceConfig {
    /// Host literal a reference's first segment must match.
    #[serde(default = "default_host")]
    pub host: String,
    /// REST API root; override for GitHub Enterprise installations.
    #[serde(default = "default_api_root")]
    pub api_root: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReportConfig {
    /// Schema used when `--schema` is not passed on the command line.
    #[serde(default)]
    pub schema: ReportSchema,
}

fn default_host() -> String {
    "github.com".to_string()
}

fn default_api_root() -> String {
    "https://api.github.com".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            host: default_host(),
            api_root: default_api_root(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: SourceConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `./.repo-licensr/config.toml`
/// 3. `~/.config/repo-licensr/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let local_config = Path::new(".repo-licensr").join("config.toml");
    if local_config.exists() {
        let content = std::fs::read_to_string(&local_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("repo-licensr")
            .join("config.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.source.host, "github.com");
        assert_eq!(config.source.api_root, "https://api.github.com");
        assert_eq!(config.report.schema, ReportSchema::Full);
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
[source]
host = "github.example.com"
api_root = "https://github.example.com/api/v3"

[report]
schema = "processed"
"#,
        )
        .unwrap();
        assert_eq!(config.source.host, "github.example.com");
        assert_eq!(config.source.api_root, "https://github.example.com/api/v3");
        assert_eq!(config.report.schema, ReportSchema::Processed);
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
[source]
api_root = "http://127.0.0.1:9"
"#,
        )
        .unwrap();
        assert_eq!(config.source.host, "github.com");
        assert_eq!(config.source.api_root, "http://127.0.0.1:9");
        assert_eq!(config.report.schema, ReportSchema::Full);
    }

    #[test]
    fn test_load_from_override_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[report]\nschema = \"processed\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.report.schema, ReportSchema::Processed);
        assert_eq!(config.source.host, "github.com");
    }
}
