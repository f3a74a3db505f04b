use std::{fs, path::Path, time::Duration};

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

/// File read by `load_settings` from the working directory
pub const SETTINGS_FILE: &str = "life.toml";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid must have at least one row and one column, got {rows}x{columns}")]
    EmptyGrid { rows: usize, columns: usize },
    #[error("tick interval must be positive")]
    ZeroTick,
}

/// Construction-time parameters for the grid and the demo window
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub rows: usize,
    pub columns: usize,
    pub tick_ms: u64,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: 30,
            columns: 30,
            tick_ms: 300,
            window_width: 600,
            window_height: 660,
        }
    }
}

impl Settings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::EmptyGrid { rows: self.rows, columns: self.columns });
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        Ok(())
    }

    /// Overlay values from TOML text. Unparseable input is logged and ignored.
    fn merge_toml(&mut self, raw: &str) {
        match toml::from_str::<Settings>(raw) {
            Ok(file_cfg) => *self = file_cfg,
            Err(err) => warn!("ignoring malformed settings file: {err}"),
        }
    }

    /// Overlay values from `LIFE__*` variables supplied by `lookup`
    fn merge_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        override_from(&lookup, "LIFE__ROWS", &mut self.rows);
        override_from(&lookup, "LIFE__COLUMNS", &mut self.columns);
        override_from(&lookup, "LIFE__TICK_MS", &mut self.tick_ms);
    }
}

fn override_from<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    target: &mut T,
) {
    let Some(raw) = lookup(key) else {
        return;
    };
    match raw.trim().parse() {
        Ok(value) => *target = value,
        Err(_) => warn!(key, value = %raw, "ignoring unparseable setting"),
    }
}

/// Defaults, then `life.toml` if present, then `LIFE__*` environment variables
pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

pub fn load_settings_from(path: &Path, lookup: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        info!(path = %path.display(), "loading settings");
        settings.merge_toml(&raw);
    }
    settings.merge_env(lookup);

    settings
}
