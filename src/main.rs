//! Entry point for the book catalog browser.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Load user configuration from `conf/config.toml`.
//! - Load the book catalog JSON.
//! - Probe the host color-scheme preference.
//! - Launch the GUI application.

mod app;
mod catalog;
mod config;
mod filter;
mod pagination;
mod theme;

use crate::app::run_app;
use crate::catalog::Catalog;
use crate::config::load_config;
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let catalog_override = parse_args()?;
    let config = load_config(Path::new("conf/config.toml"));
    set_log_level(reload_handle, config.log_level.as_filter_str());

    let catalog_path =
        catalog_override.unwrap_or_else(|| PathBuf::from(&config.catalog_path));
    info!(
        path = %catalog_path.display(),
        books_per_page = config.books_per_page,
        theme = %config.theme,
        "Starting catalog browser"
    );
    let catalog = Catalog::load(&catalog_path)?;

    let prefers_dark = matches!(dark_light::detect(), dark_light::Mode::Dark);
    info!(prefers_dark, "Probed host color-scheme preference");

    run_app(catalog, config, prefers_dark).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args() -> Result<Option<PathBuf>> {
    let mut args = env::args().skip(1);
    let Some(raw) = args.next() else {
        return Ok(None);
    };
    if args.next().is_some() {
        return Err(anyhow!("Usage: bookrack [path-to-catalog.json]"));
    }

    let path = PathBuf::from(raw);
    if !path.exists() {
        return Err(anyhow!("File not found: {}", path.display()));
    }
    Ok(Some(path))
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
