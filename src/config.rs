// src/config.rs
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::delay::{DelayRange, DelaySampling};
use crate::error::{AnimatorError, Result};

pub const TITLE_SWITCH_INTERVAL_MS: u64 = 6000;
pub const TITLE_DELETE_PAUSE_MS: u64 = 500;
pub const CURSOR_FLICKER_RATE_MS: u64 = 600;

pub const TITLE_ELEMENT_ID: &str = "devTitle";
pub const CURSOR_ELEMENT_ID: &str = "devTitleCursor";

/// Environment variable naming an optional YAML config file.
pub const CONFIG_ENV_VAR: &str = "TITLE_ANIMATOR_CONFIG";

pub const DEFAULT_TITLES: [&str; 4] = [
    "Software Developer",
    "DevOps Engineer",
    "Systems Engineer",
    "UI Designer",
];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimatorConfig {
    pub titles: Vec<String>,
    pub title_switch_interval_ms: u64,
    pub delete_pause_ms: u64,
    pub type_delay: DelayRange,
    pub delete_delay: DelayRange,
    pub cursor_flicker_ms: u64,
    pub sampling: DelaySampling,
    /// Skip a title cycle while the previous one is still animating.
    pub overlap_guard: bool,
    pub title_element_id: String,
    pub cursor_element_id: String,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            titles: DEFAULT_TITLES.iter().map(|t| t.to_string()).collect(),
            title_switch_interval_ms: TITLE_SWITCH_INTERVAL_MS,
            delete_pause_ms: TITLE_DELETE_PAUSE_MS,
            type_delay: DelayRange::typing(),
            delete_delay: DelayRange::deleting(),
            cursor_flicker_ms: CURSOR_FLICKER_RATE_MS,
            sampling: DelaySampling::Uniform,
            overlap_guard: true,
            title_element_id: TITLE_ELEMENT_ID.to_string(),
            cursor_element_id: CURSOR_ELEMENT_ID.to_string(),
        }
    }
}

impl AnimatorConfig {
    pub fn from_yaml(source: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a map
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        tracing::info!("Loaded animator config from {}", path.as_ref().display());
        Self::from_yaml(&source)
    }

    /// Load from the file named by `TITLE_ANIMATOR_CONFIG`, or fall back to defaults.
    pub fn from_env() -> Result<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.trim().is_empty() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.titles.is_empty() {
            return Err("title list must contain at least one title".into());
        }
        if self.title_switch_interval_ms == 0 {
            return Err("title_switch_interval_ms must be greater than zero".into());
        }
        if self.cursor_flicker_ms == 0 {
            return Err(AnimatorError::InvalidConfig(
                "cursor_flicker_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn title_switch_interval(&self) -> Duration {
        Duration::from_millis(self.title_switch_interval_ms)
    }

    pub fn delete_pause(&self) -> Duration {
        Duration::from_millis(self.delete_pause_ms)
    }

    pub fn cursor_flicker_period(&self) -> Duration {
        Duration::from_millis(self.cursor_flicker_ms)
    }
}
