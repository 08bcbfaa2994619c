//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. User config: `~/.config/fprgraph/config.toml` (XDG) or platform config dir
//! 2. Project config: `.fprgraph.toml`
//! 3. Environment variables: `FPRGRAPH_*`
//!
//! Every key is optional; a run with no config files present uses the
//! defaults below. The CLI `--strict` flag overrides
//! `conversion.strict_references` for one run.
//!
//! ```toml
//! [conversion]
//! strict-references = true
//! agreement-language = "nl"
//! ```

use std::ops::Deref;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub conversion: ConversionConfig,
}

/// Knobs for one conversion run.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConversionConfig {
    /// Fail on references to record ids never declared in the document,
    /// and on duplicate record ids. Off by default: documents are
    /// assumed externally validated.
    #[serde(default)]
    pub strict_references: bool,

    /// Language tag attached to appropriate-use agreement texts.
    #[serde(default = "default_agreement_language")]
    pub agreement_language: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        ConversionConfig {
            strict_references: false,
            agreement_language: default_agreement_language(),
        }
    }
}

fn default_agreement_language() -> String {
    "nl".to_string()
}

impl Config {
    /// Load config with layered resolution (user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        let user_config = Self::user_config_path();

        Figment::new()
            // Layer 1: User config (lowest priority)
            .merge(Toml::file(user_config))
            // Layer 2: Project config
            .merge(Toml::file(".fprgraph.toml"))
            // Layer 3: Environment variables (highest priority)
            .merge(Env::prefixed("FPRGRAPH_").split("_"))
            .extract()
            .map_err(ConfigError::from)
    }

    /// User config path: ~/.config/fprgraph/config.toml (XDG) or platform config dir.
    fn user_config_path() -> std::path::PathBuf {
        // Prefer XDG config location (~/.config) on all platforms
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("fprgraph").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        // Fall back to platform-specific config dir
        dirs::config_dir()
            .map(|p| p.join("fprgraph").join("config.toml"))
            .unwrap_or_default()
    }
}
