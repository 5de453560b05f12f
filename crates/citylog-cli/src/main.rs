// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod logging;
#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use citylog_app::{City, ScreenState};
use config::Config;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1))?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    let config_path = options.resolve_config_path()?;
    if options.print_config_path {
        println!("{}", config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&config_path));
        return Ok(());
    }

    match startup(&options, &config_path)? {
        Some(mut session) => citylog_tui::run_app(&mut session.state, session.tick),
        None => Ok(()),
    }
}

struct Session {
    state: ScreenState,
    tick: Duration,
}

/// Loads config, installs logging and builds the screen. Returns `None`
/// when `--check` asks to stop before the terminal is touched.
fn startup(options: &CliOptions, config_path: &Path) -> Result<Option<Session>> {
    let config = Config::load(config_path).with_context(|| {
        format!(
            "load config {}; run `citylog --print-example-config` to generate a template",
            config_path.display()
        )
    })?;

    let log_path = logging::init(&config)?;
    tracing::info!(
        config = %config_path.display(),
        log = ?log_path,
        demo = options.demo,
        "starting citylog"
    );

    let mut state = ScreenState::with_sort(config.sort_on_start());
    if options.demo {
        seed_demo(&mut state);
    }
    if options.check_only {
        return Ok(None);
    }

    Ok(Some(Session {
        state,
        tick: config.tick(),
    }))
}

fn seed_demo(state: &mut ScreenState) {
    state.store.extend(
        citylog_testkit::demo_cities()
            .into_iter()
            .map(|seed| City::new(seed.name, seed.country)),
    );
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CliOptions {
    config_path: Option<PathBuf>,
    print_config_path: bool,
    demo: bool,
    print_example: bool,
    check_only: bool,
    show_help: bool,
}

impl CliOptions {
    /// `--config` wins; the platform default is only looked up (and its
    /// directory created) when no path was given.
    fn resolve_config_path(&self) -> Result<PathBuf> {
        match &self.config_path {
            Some(path) => Ok(path.clone()),
            None => Config::default_path(),
        }
    }
}

fn parse_cli_args<I, S>(args: I) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions::default();

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a file path"))?;
                options.config_path = Some(PathBuf::from(value.as_ref()));
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--demo" => {
                options.demo = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow::anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn print_help() {
    println!("citylog - keep a list of cities you have visited");
    println!("  --config <path>          Use a specific config path");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a config template");
    println!("  --demo                   Start with a sample list of cities");
    println!("  --check                  Validate config + logging and exit");
    println!("  --help                   Show this help");
}
