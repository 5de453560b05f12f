// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const APP_NAME: &str = "citylog";
const CONFIG_VERSION: i64 = 1;
const DEFAULT_TICK_MS: u64 = 120;
const MIN_TICK_MS: u64 = 10;
const MAX_TICK_MS: u64 = 1_000;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub ui: Ui,
    #[serde(default)]
    pub log: Log,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            ui: Ui::default(),
            log: Log::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub sort_on_start: Option<bool>,
    pub tick_ms: Option<u64>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            sort_on_start: Some(false),
            tick_ms: Some(DEFAULT_TICK_MS),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Log {
    pub level: Option<String>,
    pub file: Option<String>,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: Some(DEFAULT_LOG_LEVEL.to_owned()),
            file: None,
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("CITYLOG_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set CITYLOG_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} has no version; add `version = 1` at the top",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.version != CONFIG_VERSION {
            bail!(
                "config {} has version {}; expected 1",
                path.display(),
                self.version
            );
        }

        if let Some(tick_ms) = self.ui.tick_ms
            && !(MIN_TICK_MS..=MAX_TICK_MS).contains(&tick_ms)
        {
            bail!(
                "ui.tick_ms in {} must be between {MIN_TICK_MS} and {MAX_TICK_MS}, got {}",
                path.display(),
                tick_ms
            );
        }

        if let Some(level) = &self.log.level
            && level.parse::<tracing::Level>().is_err()
        {
            bail!(
                "log.level in {} must be one of trace, debug, info, warn, error; got {:?}",
                path.display(),
                level
            );
        }

        if let Some(file) = &self.log.file
            && file.trim().is_empty()
        {
            bail!(
                "log.file in {} is empty; remove it to disable logging",
                path.display()
            );
        }

        Ok(())
    }

    pub fn sort_on_start(&self) -> bool {
        self.ui.sort_on_start.unwrap_or(false)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.ui.tick_ms.unwrap_or(DEFAULT_TICK_MS))
    }

    pub fn log_level(&self) -> &str {
        self.log.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn log_file(&self) -> Option<PathBuf> {
        self.log.file.as_deref().map(PathBuf::from)
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# citylog config\n# Place this file at: {}\n\nversion = 1\n\n[ui]\n# Start with the list sorted A-Z\nsort_on_start = false\n# Input poll interval in milliseconds ({MIN_TICK_MS}-{MAX_TICK_MS})\ntick_ms = {DEFAULT_TICK_MS}\n\n[log]\n# trace, debug, info, warn or error; RUST_LOG overrides\nlevel = \"{DEFAULT_LOG_LEVEL}\"\n# Optional. Logging is off unless a file is set\n# file = \"/absolute/path/to/citylog.log\"\n",
            path.display(),
        )
    }
}
