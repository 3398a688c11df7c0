//! Runtime configuration.
//!
//! Values come from, in order of precedence: the process environment, a `.env`
//! file (desktop development), and the config bundled into the binary.

use crate::types::ThemeMode;
use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Bundled config for mobile and web builds
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1500);
pub const DEFAULT_PARTICLE_COUNT: usize = 1000;
pub const MAX_PARTICLE_COUNT: usize = 20_000;

static INSTALLED: OnceCell<AppConfig> = OnceCell::new();

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Simulated "thinking" time before a canned reply lands.
    pub reply_delay: Duration,
    pub particle_count: usize,
    /// Used when neither a stored preference nor an OS preference exists.
    pub default_theme: ThemeMode,
    pub log_level: tracing::Level,
    pub storage_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reply_delay: DEFAULT_REPLY_DELAY,
            particle_count: DEFAULT_PARTICLE_COUNT,
            default_theme: ThemeMode::Dark,
            log_level: tracing::Level::INFO,
            storage_dir: None,
        }
    }
}

impl AppConfig {
    /// Read the `NEURA_*` variables from the process environment.
    pub fn from_env() -> Result<Self> {
        let vars: HashMap<String, String> = env::vars()
            .filter(|(key, _)| key.starts_with("NEURA_"))
            .collect();
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup("NEURA_REPLY_DELAY_MS") {
            let millis: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("NEURA_REPLY_DELAY_MS is not a number: {raw:?}"))?;
            config.reply_delay = Duration::from_millis(millis);
        }

        if let Some(raw) = lookup("NEURA_PARTICLE_COUNT") {
            let count: usize = raw
                .trim()
                .parse()
                .with_context(|| format!("NEURA_PARTICLE_COUNT is not a number: {raw:?}"))?;
            anyhow::ensure!(
                count <= MAX_PARTICLE_COUNT,
                "NEURA_PARTICLE_COUNT must be at most {MAX_PARTICLE_COUNT}, got {count}"
            );
            config.particle_count = count;
        }

        if let Some(raw) = lookup("NEURA_DEFAULT_THEME") {
            config.default_theme = raw
                .parse()
                .context("NEURA_DEFAULT_THEME must be \"light\" or \"dark\"")?;
        }

        if let Some(raw) = lookup("NEURA_LOG") {
            config.log_level = raw
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("NEURA_LOG is not a tracing level: {raw:?}"))?;
        }

        if let Some(raw) = lookup("NEURA_STORAGE_DIR") {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                config.storage_dir = Some(PathBuf::from(trimmed));
            }
        }

        Ok(config)
    }
}

/// Make `config` the one returned by [`current`]. Returns false if a config was
/// already installed.
pub fn install(config: AppConfig) -> bool {
    INSTALLED.set(config).is_ok()
}

/// The installed config, or defaults when `main` never installed one.
pub fn current() -> AppConfig {
    INSTALLED.get().cloned().unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() {
    // First try to load from .env file (desktop dev)
    if dotenvy::dotenv().is_ok() {
        return;
    }

    load_bundled_config();
}

#[cfg(target_arch = "wasm32")]
pub fn load_dotenv() {
    load_bundled_config();
}

fn load_bundled_config() {
    for (key, value) in parse_env_lines(BUNDLED_CONFIG) {
        // Only set if not already set (allow env override)
        if env::var(key).is_err() {
            // SAFETY: called from main before the renderer or any runtime threads start
            unsafe {
                env::set_var(key, value);
            }
        }
    }
}

fn parse_env_lines(source: &str) -> impl Iterator<Item = (&str, &str)> {
    source.lines().filter_map(|line| {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        let (key, value) = line.split_once('=')?;
        Some((key.trim(), value.trim()))
    })
}
