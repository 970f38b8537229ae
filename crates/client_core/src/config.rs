use std::{fs, path::Path};

use serde::Deserialize;
use tracing::warn;

pub const SETTINGS_FILE: &str = "playtime.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3333".into(),
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    api_base_url: Option<String>,
    log_filter: Option<String>,
}

/// Defaults, then `playtime.toml` from the working directory, then environment.
pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |name| std::env::var(name).ok())
}

pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();
    if let Ok(raw) = fs::read_to_string(path) {
        apply_file(&mut settings, &raw);
    }
    apply_env(&mut settings, env);
    settings
}

fn apply_file(settings: &mut Settings, raw: &str) {
    let file_cfg = match toml::from_str::<FileSettings>(raw) {
        Ok(file_cfg) => file_cfg,
        Err(err) => {
            warn!("ignoring malformed {SETTINGS_FILE}: {err}");
            return;
        }
    };
    if let Some(v) = non_empty(file_cfg.api_base_url) {
        settings.api_base_url = v;
    }
    if let Some(v) = non_empty(file_cfg.log_filter) {
        settings.log_filter = v;
    }
}

fn apply_env(settings: &mut Settings, env: impl Fn(&str) -> Option<String>) {
    if let Some(v) = non_empty(env("PLAYTIME_API_URL")) {
        settings.api_base_url = v;
    }
    if let Some(v) = non_empty(env("APP__API_BASE_URL")) {
        settings.api_base_url = v;
    }

    if let Some(v) = non_empty(env("PLAYTIME_LOG")) {
        settings.log_filter = v;
    }
    if let Some(v) = non_empty(env("APP__LOG_FILTER")) {
        settings.log_filter = v;
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
