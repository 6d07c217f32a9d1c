//! CLI configuration

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use starpath_core::CatalogLayout;

use crate::output::OutputFormat;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "STARPATH_CONFIG";

/// Get the config file path
pub fn config_file_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("starpath")
        .join("config.toml")
}

/// Configuration for the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalogue used when `--catalog` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Default output format
    pub format: String,

    /// Column layout of the catalogue
    pub layout: CatalogLayout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            format: "table".to_string(),
            layout: CatalogLayout::default(),
        }
    }
}

impl Config {
    /// Load the config file for catalogue commands, falling back to defaults
    ///
    /// `config` subcommands use [`Config::load_from`] instead so a broken
    /// file is reported rather than overwritten.
    pub fn load() -> Self {
        let path = config_file_path();
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config at {}: {:#}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load from an explicit path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)
            .with_context(|| format!("invalid TOML in {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// All keys understood by `get` and `set`
    pub fn keys() -> &'static [&'static str] {
        &[
            "catalog",
            "format",
            "layout.has_header",
            "layout.name",
            "layout.distance",
            "layout.mass",
            "layout.radius",
        ]
    }

    /// Read a key. `Ok(None)` means the key exists but is unset.
    pub fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let value = match key {
            "catalog" => self.catalog.as_ref().map(|p| p.display().to_string()),
            "format" => Some(self.format.clone()),
            "layout.has_header" => Some(self.layout.has_header.to_string()),
            "layout.name" => Some(self.layout.name.to_string()),
            "layout.distance" => Some(self.layout.distance.to_string()),
            "layout.mass" => Some(self.layout.mass.to_string()),
            "layout.radius" => Some(self.layout.radius.to_string()),
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }

    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "catalog" => self.catalog = Some(PathBuf::from(value)),
            "format" => {
                OutputFormat::parse(value)?;
                self.format = value.to_lowercase();
            }
            "layout.has_header" => self.layout.has_header = parse_value(key, value)?,
            "layout.name" => self.layout.name = parse_value(key, value)?,
            "layout.distance" => self.layout.distance = parse_value(key, value)?,
            "layout.mass" => self.layout.mass = parse_value(key, value)?,
            "layout.radius" => self.layout.radius = parse_value(key, value)?,
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// Put one key back to its default value
    pub fn unset(&mut self, key: &str) -> anyhow::Result<()> {
        let defaults = Self::default();
        match key {
            "catalog" => self.catalog = None,
            "format" => self.format = defaults.format,
            "layout.has_header" => self.layout.has_header = defaults.layout.has_header,
            "layout.name" => self.layout.name = defaults.layout.name,
            "layout.distance" => self.layout.distance = defaults.layout.distance,
            "layout.mass" => self.layout.mass = defaults.layout.mass,
            "layout.radius" => self.layout.radius = defaults.layout.radius,
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Unknown config key: {}. Available keys: {}",
        key,
        Config::keys().join(", ")
    )
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> anyhow::Result<T> {
    value
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid value for {}: {}", key, value))
}
