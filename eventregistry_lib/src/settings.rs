//! Session settings: defaults, then an optional settings file, then
//! `EVENTREGISTRY_*` environment overrides.

use std::path::{Path, PathBuf};
use std::time::Duration;

use eventregistry_api::{Credentials, DEFAULT_HOST};
use serde::Deserialize;

use crate::error::EventRegistryError;
use crate::rate_limiter::DEFAULT_MIN_DELAY;
use crate::retry::{Attempts, RetryPolicy};

/// Files looked up in the working directory when no path is given.
const DEFAULT_FILES: &[&str] = &["settings.json", "settings.toml"];

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub host: String,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Minimum time between two requests.
    pub min_delay: Duration,
    pub retry: RetryPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            username: None,
            password: None,
            min_delay: DEFAULT_MIN_DELAY,
            retry: RetryPolicy::default(),
        }
    }
}

/// On-disk form. Every field is optional and overrides the default.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    host: Option<String>,
    username: Option<String>,
    password: Option<String>,
    min_delay_ms: Option<u64>,
    /// Total attempts per request, -1 for unlimited.
    retry_max: Option<i64>,
    retry_delay_ms: Option<u64>,
}

impl Settings {
    /// Loads defaults, then `path` (or the first of `settings.json` /
    /// `settings.toml` found in the working directory), then the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, EventRegistryError> {
        let mut settings = Settings::default();
        let file = match path {
            Some(p) => Some(p.to_path_buf()),
            None => DEFAULT_FILES
                .iter()
                .map(PathBuf::from)
                .find(|p| p.is_file()),
        };
        if let Some(file) = file {
            tracing::debug!("Loading settings from {}", file.display());
            settings.apply_file(&file)?;
        }
        settings.apply_env();
        Ok(settings)
    }

    /// Overrides fields with those present in a JSON or TOML settings file.
    pub fn apply_file(&mut self, path: &Path) -> Result<(), EventRegistryError> {
        let content = std::fs::read_to_string(path)?;
        let file: SettingsFile = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str(&content).map_err(|e| {
                EventRegistryError::Settings(format!("{}: {}", path.display(), e))
            })?,
            _ => serde_json::from_str(&content)?,
        };
        self.apply(file);
        Ok(())
    }

    fn apply(&mut self, file: SettingsFile) {
        if let Some(host) = file.host {
            self.host = host;
        }
        if file.username.is_some() {
            self.username = file.username;
        }
        if file.password.is_some() {
            self.password = file.password;
        }
        if let Some(ms) = file.min_delay_ms {
            self.min_delay = Duration::from_millis(ms);
        }
        if let Some(max) = file.retry_max {
            self.retry.attempts = Attempts::from_count(max);
        }
        if let Some(ms) = file.retry_delay_ms {
            self.retry.delay = Duration::from_millis(ms);
        }
    }

    /// Applies `EVENTREGISTRY_*` overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Applies overrides read through `lookup`. Unparseable values are ignored.
    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("EVENTREGISTRY_HOST") {
            self.host = host;
        }
        if let Some(username) = lookup("EVENTREGISTRY_USERNAME") {
            self.username = Some(username);
        }
        if let Some(password) = lookup("EVENTREGISTRY_PASSWORD") {
            self.password = Some(password);
        }
        self.min_delay = Duration::from_millis(env_u64(
            &lookup,
            "EVENTREGISTRY_MIN_DELAY_MS",
            self.min_delay.as_millis() as u64,
        ));
        if let Some(max) = lookup("EVENTREGISTRY_RETRY_MAX").and_then(|v| v.parse::<i64>().ok()) {
            self.retry.attempts = Attempts::from_count(max);
        }
        self.retry.delay = Duration::from_millis(env_u64(
            &lookup,
            "EVENTREGISTRY_RETRY_DELAY_MS",
            self.retry.delay.as_millis() as u64,
        ));
    }

    /// Credentials for login, when both username and password are set.
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) if !user.is_empty() => {
                Some(Credentials::new(user.as_str(), pass.as_str()))
            }
            _ => None,
        }
    }
}

fn env_u64(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> u64 {
    lookup(key)
        .and_then(|val| val.parse::<u64>().ok())
        .unwrap_or(default)
}
