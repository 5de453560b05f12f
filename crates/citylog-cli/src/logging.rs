// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs the global subscriber when `[log].file` is set. The terminal
/// belongs to the UI, so nothing is ever written to stdout or stderr.
pub fn init(config: &Config) -> Result<Option<PathBuf>> {
    let Some(path) = config.log_file() else {
        return Ok(None);
    };

    let file = open_log_file(&path)?;
    let subscriber = file_subscriber(env_filter(config.log_level()), file);
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|error| anyhow!("install log subscriber: {error}"))?;
    Ok(Some(path))
}

/// Plain-text fmt subscriber writing every event to `file`.
fn file_subscriber(filter: EnvFilter, file: File) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish()
}

/// `RUST_LOG` wins over the configured level when it parses.
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| {
            format!(
                "open log file {}; fix [log].file or remove it",
                path.display()
            )
        })
}
