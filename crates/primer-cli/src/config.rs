//! Configuration file management for primer.
//!
//! Provides a TOML-based config file at `~/.config/primer/config.toml` and
//! a resolution chain: CLI flag > env var > config file > default. The
//! completion credential is optional; without one primer runs offline,
//! which is a normal operating mode rather than an error.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use primer_core::completion::OpenAiClient;
use primer_core::summary::SummaryService;

/// Default model requested from the completion provider.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default completion API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigFile {
    pub completion: CompletionSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CompletionSection {
    pub model: String,
    pub base_url: String,
    /// API credential. Optional: absence means offline mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the primer config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/primer` or `~/.config/primer`.
/// We intentionally ignore the platform-specific `dirs::config_dir()`
/// (which returns `~/Library/Application Support` on macOS).
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("primer");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("primer")
}

/// Return the path to the primer config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file. Returns an error if it does not exist.
pub fn load_config() -> Result<ConfigFile> {
    let path = config_path();
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents).context("failed to parse config file")?;
    Ok(config)
}

/// Serialize and write the config file, creating parent dirs as needed.
/// Sets file permissions to 0600 on Unix since it may hold a credential.
pub fn save_config(config: &ConfigFile) -> Result<()> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(&path, perms)
            .with_context(|| format!("failed to set permissions on {}", path.display()))?;
    }

    Ok(())
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Fully resolved configuration, ready for use.
#[derive(Debug, Clone)]
pub struct PrimerConfig {
    pub model: String,
    pub base_url: String,
    pub api_key: Option<String>,
}

impl PrimerConfig {
    /// Resolve configuration using the chain: CLI flag > env var > config
    /// file > default.
    ///
    /// - Model: `cli_model` > `PRIMER_MODEL` env > `completion.model` > [`DEFAULT_MODEL`]
    /// - Base URL: `PRIMER_BASE_URL` env > `completion.base_url` > [`DEFAULT_BASE_URL`]
    /// - API key: `PRIMER_API_KEY` env > `completion.api_key` > none (offline mode)
    ///
    /// Empty env values are treated as unset.
    pub fn resolve(cli_model: Option<&str>) -> Result<Self> {
        let file_config = load_config().ok();

        let model = if let Some(model) = cli_model {
            model.to_string()
        } else if let Some(model) = non_empty_env("PRIMER_MODEL") {
            model
        } else if let Some(ref cfg) = file_config {
            cfg.completion.model.clone()
        } else {
            DEFAULT_MODEL.to_string()
        };

        let base_url = if let Some(url) = non_empty_env("PRIMER_BASE_URL") {
            url
        } else if let Some(ref cfg) = file_config {
            cfg.completion.base_url.clone()
        } else {
            DEFAULT_BASE_URL.to_string()
        };

        let api_key = non_empty_env("PRIMER_API_KEY")
            .or_else(|| file_config.as_ref().and_then(|cfg| cfg.completion.api_key.clone()));

        Ok(Self {
            model,
            base_url,
            api_key,
        })
    }

    /// Build the summary service this configuration describes.
    ///
    /// The credential is injected here, at startup; request handlers never
    /// read the environment.
    pub fn summary_service(&self) -> SummaryService {
        match &self.api_key {
            Some(key) => SummaryService::with_client(Arc::new(OpenAiClient::new(
                key,
                &self.model,
                &self.base_url,
            ))),
            None => SummaryService::offline(),
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
