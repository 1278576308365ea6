use std::env;

use anyhow::{anyhow, Result};

static ENV_CONFIRM_DELETE: &str = "TODO_CONFIRM_DELETE";
static ENV_LOG_FILTER: &str = "TODO_LOG";
static DEFAULT_LOG_FILTER: &str = "warn";

/// Values supplied explicitly on the command line. They win over the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub confirm_delete: bool,
    pub log_filter: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    confirm_delete: bool,
    log_filter: String,
    // Set when the filter came from --log or TODO_LOG rather than the default.
    log_filter_explicit: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            confirm_delete: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_filter_explicit: false,
        }
    }
}

impl AppConfig {
    /// Construct [`AppConfig`] from the provided overrides, environment variables,
    /// and defaults, in that order of precedence.
    pub fn discover(overrides: ConfigOverrides) -> Result<Self> {
        Self::discover_with(overrides, |key| env::var(key).ok())
    }

    /// Same as [`AppConfig::discover`] but reads variables through `lookup`.
    pub fn discover_with<F>(overrides: ConfigOverrides, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let confirm_delete = if overrides.confirm_delete {
            true
        } else {
            match lookup(ENV_CONFIRM_DELETE) {
                Some(raw) => parse_flag(ENV_CONFIRM_DELETE, &raw)?,
                None => false,
            }
        };

        let explicit_filter = overrides
            .log_filter
            .or_else(|| lookup(ENV_LOG_FILTER))
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        let log_filter_explicit = explicit_filter.is_some();
        let log_filter = explicit_filter.unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            confirm_delete,
            log_filter,
            log_filter_explicit,
        })
    }

    pub fn with_confirm_delete(mut self, confirm_delete: bool) -> Self {
        self.confirm_delete = confirm_delete;
        self
    }

    pub fn confirm_delete(&self) -> bool {
        self.confirm_delete
    }

    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// True when the filter was given on the command line or in `TODO_LOG`.
    /// An explicit filter takes precedence over `RUST_LOG`.
    pub fn log_filter_is_explicit(&self) -> bool {
        self.log_filter_explicit
    }
}

fn parse_flag(name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow!(
            "Invalid value '{}' for {}: expected 1|0|true|false|yes|no|on|off",
            other,
            name
        )),
    }
}
