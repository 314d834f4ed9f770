//! Dashboard configuration, read from a TOML file.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::context::{Theme, TimezonePolicy};
use crate::error::{DashError, DashResult};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "TDASH_CONFIG";

/// Configuration file name under the user config directory.
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct DashConfig {
    pub theme: Theme,
    pub sidebar_collapsed: bool,
    pub timezone: TimezonePolicy,
    /// Pins the clock used for relative times and the "today" highlight.
    pub now: Option<DateTime<Utc>>,
    /// Initial filter per view name, e.g. `notifications = "unread"`.
    pub default_filters: BTreeMap<String, String>,
}

impl DashConfig {
    pub fn from_toml(source: &str) -> DashResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load configuration from `path`. A missing file yields defaults.
    pub fn load(path: &Path) -> DashResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file; using defaults");
            return Ok(Self::default());
        }
        if !path.is_file() {
            return Err(DashError::config(format!("{} is not a file", path.display())));
        }
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&source)?;
        debug!(path = %path.display(), "Config loaded");
        Ok(config)
    }

    pub fn default_filter(&self, view: &str) -> Option<&str> {
        self.default_filters.get(view).map(String::as_str)
    }
}
