// Configuration file handling

use crate::allure::Label;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub labels: LabelsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Tracing filter directive used when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Raise the crate's own events to debug
    #[serde(default)]
    pub verbose: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            verbose: false,
        }
    }
}

/// Labels stamped on every test result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelsConfig {
    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default = "default_framework")]
    pub framework: String,

    /// Extra labels as name/value pairs
    #[serde(default)]
    pub extra: Vec<Label>,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            framework: default_framework(),
            extra: Vec::new(),
        }
    }
}

// Default values
pub const CONFIG_FILE_NAMES: [&str; 2] = [".allurerc", ".allurerc.toml"];

const CRATE_TARGET: &str = "allure_lifecycle";
const VERBOSE_DIRECTIVE: &str = "allure_lifecycle=debug";

/// Whether a filter directive names this crate or one of its modules
fn targets_crate(directive: &str) -> bool {
    let target = directive
        .split(['=', '['])
        .next()
        .unwrap_or_default()
        .trim();
    target == CRATE_TARGET
        || target
            .strip_prefix(CRATE_TARGET)
            .is_some_and(|rest| rest.starts_with("::"))
}

pub fn default_log_filter() -> String {
    String::from("allure_lifecycle=warn")
}

fn default_language() -> String {
    String::from("rust")
}

fn default_framework() -> String {
    String::from("allure-lifecycle")
}

impl Config {
    /// Load configuration from default locations
    pub fn load() -> Option<Self> {
        // Check locations in order:
        // 1. .allurerc (current directory)
        // 2. ~/.allurerc (home directory)
        // 3. .allurerc.toml (current directory)
        // 4. ~/.allurerc.toml (home directory)

        let cwd = std::env::current_dir().ok()?;
        let home = dirs::home_dir();

        let mut paths = Vec::new();
        for name in CONFIG_FILE_NAMES {
            paths.push(cwd.join(name));
            if let Some(home) = &home {
                paths.push(home.join(name));
            }
        }

        let path = paths.iter().find(|p| p.exists())?;
        match Self::load_from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("Ignoring config {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Render configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Filter directive for the tracing subscriber
    ///
    /// With `verbose`, any directive aimed at this crate is replaced by a
    /// single debug directive; directives for other targets are kept.
    pub fn log_filter(&self) -> String {
        if !self.general.verbose {
            return self.general.log_filter.clone();
        }

        let mut directives: Vec<&str> = self
            .general
            .log_filter
            .split(',')
            .map(str::trim)
            .filter(|d| !d.is_empty() && !targets_crate(d))
            .collect();
        directives.push(VERBOSE_DIRECTIVE);
        directives.join(",")
    }

    /// Labels every result starts with
    pub fn default_labels(&self) -> Vec<Label> {
        let mut labels = vec![
            Label::new("language", &self.labels.language),
            Label::new("framework", &self.labels.framework),
        ];
        labels.extend(self.labels.extra.iter().cloned());
        labels
    }
}
