use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Optional TOML configuration.
///
/// Everything here can also be supplied on the command line; positional
/// arguments win over the config file, which wins over built-in defaults.
#[derive(Debug, Default, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub export: ExportSection,
}

#[derive(Debug, Default, Deserialize)]
pub struct ServerSection {
    pub url: Option<String>,
    pub uuid: Option<String>,
    pub password: Option<String>,
    /// Variant wire name (legacy | aes-128-cbc-fixed)
    pub crypto_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExportSection {
    pub env_file: Option<String>,
    /// Extra domain -> variable entries merged over the built-in mapping.
    #[serde(default)]
    pub mapping: BTreeMap<String, String>,
}

/// Load the explicit config, or the default one when it exists.
pub fn load(explicit: Option<&Path>) -> anyhow::Result<CliConfig> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    match default_config_path() {
        Some(path) if path.exists() => read_config(&path),
        _ => Ok(CliConfig::default()),
    }
}

pub fn read_config(path: &Path) -> anyhow::Result<CliConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn default_config_path() -> Option<PathBuf> {
    Some(xdg_config_dir()?.join("config.toml"))
}

fn xdg_config_dir() -> Option<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Some(PathBuf::from(value).join("cookiesync"));
        }
    }
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config").join("cookiesync"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: CliConfig = toml::from_str(
            r#"
            [server]
            url = "http://sync.internal:8088"
            uuid = "my-uuid"
            password = "my-password"
            crypto_type = "aes-128-cbc-fixed"

            [export]
            env_file = "/var/lib/rsshub/rsshub.env"

            [export.mapping]
            "weibo.com" = "WEIBO_COOKIES"
            "#,
        )
        .expect("parse should succeed");

        assert_eq!(config.server.url.as_deref(), Some("http://sync.internal:8088"));
        assert_eq!(config.server.crypto_type.as_deref(), Some("aes-128-cbc-fixed"));
        assert_eq!(config.export.mapping["weibo.com"], "WEIBO_COOKIES");
    }

    #[test]
    fn test_empty_config_defaults() {
        let config: CliConfig = toml::from_str("").expect("parse should succeed");
        assert!(config.server.url.is_none());
        assert!(config.export.mapping.is_empty());
    }

    #[test]
    fn test_missing_default_config_is_not_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::env::set_var("XDG_CONFIG_HOME", dir.path());
        let config = load(None).expect("load should succeed");
        assert!(config.server.url.is_none());
        std::env::remove_var("XDG_CONFIG_HOME");
    }
}
