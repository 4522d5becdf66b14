//! Validation limits and workspace configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Maximum question title length, in characters.
pub const DEFAULT_MAX_TITLE_LEN: usize = 200;
/// Maximum choice text length, in characters.
pub const DEFAULT_MAX_CHOICE_TEXT_LEN: usize = 100;

/// Length bounds applied when questions and choices are constructed.
///
/// Lengths are counted in `char`s, so multi-byte text is not penalised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Inclusive upper bound for `Question::title`.
    #[serde(default = "default_max_title_len")]
    pub max_title_len: usize,
    /// Inclusive upper bound for `Choice::text`.
    #[serde(default = "default_max_choice_text_len")]
    pub max_choice_text_len: usize,
}

fn default_max_title_len() -> usize {
    DEFAULT_MAX_TITLE_LEN
}

fn default_max_choice_text_len() -> usize {
    DEFAULT_MAX_CHOICE_TEXT_LEN
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_title_len: DEFAULT_MAX_TITLE_LEN,
            max_choice_text_len: DEFAULT_MAX_CHOICE_TEXT_LEN,
        }
    }
}

/// Top-level quizkit configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizkitConfig {
    /// Length bounds for titles and choice text.
    #[serde(default)]
    pub limits: Limits,
    /// Points given to questions that don't specify any.
    #[serde(default = "default_points")]
    pub default_points: u32,
}

fn default_points() -> u32 {
    1
}

impl Default for QuizkitConfig {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            default_points: default_points(),
        }
    }
}

impl QuizkitConfig {
    /// Reject settings under which no question could ever be built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_title_len == 0 {
            return Err(ConfigError::ZeroLimit("max_title_len"));
        }
        if self.limits.max_choice_text_len == 0 {
            return Err(ConfigError::ZeroLimit("max_choice_text_len"));
        }
        if self.default_points == 0 {
            return Err(ConfigError::ZeroDefaultPoints);
        }
        Ok(())
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `quizkit.toml` in the current directory
/// 2. `~/.config/quizkit/config.toml`
///
/// Environment variable override: `QUIZKIT_DEFAULT_POINTS`.
pub fn load_config() -> Result<QuizkitConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizkitConfig> {
    let config_path = locate_config(path, Path::new("."), dirs_path())?;

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizkitConfig::default(),
    };

    if let Ok(points) = std::env::var("QUIZKIT_DEFAULT_POINTS") {
        config.default_points = points
            .trim()
            .parse()
            .with_context(|| format!("invalid QUIZKIT_DEFAULT_POINTS: {points}"))?;
    }

    config.validate()?;
    Ok(config)
}

/// Pick the config file to read: the explicit path, then `quizkit.toml` in
/// `local_dir`, then `config.toml` in `global_dir`.
fn locate_config(
    path: Option<&Path>,
    local_dir: &Path,
    global_dir: Option<PathBuf>,
) -> Result<Option<PathBuf>> {
    if let Some(p) = path {
        if p.exists() {
            return Ok(Some(p.to_path_buf()));
        }
        anyhow::bail!("config file not found: {}", p.display());
    }

    let local = local_dir.join("quizkit.toml");
    if local.exists() {
        return Ok(Some(local));
    }

    Ok(global_dir
        .map(|dir| dir.join("config.toml"))
        .filter(|global| global.exists()))
}

/// Parse a TOML string into a `QuizkitConfig` (useful for testing).
pub fn parse_config_str(content: &str) -> Result<QuizkitConfig> {
    let config: QuizkitConfig = toml::from_str(content)?;
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizkit"))
}
