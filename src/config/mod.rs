//! Configuration module for exa-research
//!
//! Handles loading and validating settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

/// Environment variable naming an explicit settings file
pub const SETTINGS_PATH_ENV: &str = "EXA_RESEARCH_SETTINGS_PATH";

/// Load settings from the first settings file found, or defaults.
///
/// Environment overrides are applied last in every case.
pub fn load() -> Result<Settings> {
    load_with(|key| std::env::var(key).ok())
}

/// [`load`] with an arbitrary variable lookup in place of the process environment
pub(crate) fn load_with<F>(lookup: F) -> Result<Settings>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = match find_settings_file(&lookup) {
        Some(path) => {
            info!("Loading settings from: {}", path.display());
            Settings::from_file(&path)?
        }
        None => {
            info!("No settings file found, using defaults");
            Settings::default()
        }
    };
    settings.merge_vars(lookup);
    Ok(settings)
}

fn find_settings_file<F>(lookup: &F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = lookup(SETTINGS_PATH_ENV) {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
    }

    default_paths().into_iter().find(|p| p.exists())
}

/// Fallback locations, in search order
fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("exa-research/settings.yml"));
    }
    paths
}
