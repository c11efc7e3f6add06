use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::RecoverIqConfig;
use super::scoring::ScoringWeights;
use crate::core::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".recoveriq.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate config from a TOML string.
///
/// Invalid scoring weights are replaced by the defaults with a warning.
/// Invalid benchmarks or grade cut-offs are rejected outright.
pub fn parse_and_validate_config(contents: &str) -> Result<RecoverIqConfig> {
    let mut config = toml::from_str::<RecoverIqConfig>(contents)?;

    if let Err(e) = config.scoring.weights.validate() {
        log::warn!("Invalid scoring weights: {}. Using defaults.", e);
        config.scoring.weights = ScoringWeights::default();
    } else {
        config.scoring.weights.normalize();
    }

    config.validate().map_err(Error::Configuration)?;
    Ok(config)
}

/// Load an explicitly requested config file; any failure is fatal.
pub fn load_config_from_path(path: &Path) -> Result<RecoverIqConfig> {
    let contents = read_config_file(path)?;
    let config = parse_and_validate_config(&contents)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try loading a discovered config file; failures fall back to defaults.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<RecoverIqConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!(
                "Ignoring {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Discover `.recoveriq.toml` from `start` upwards; defaults when none is usable.
pub fn discover_config(start: PathBuf) -> RecoverIqConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            RecoverIqConfig::default()
        })
}

/// Discover a config from the current working directory
pub fn load_config() -> RecoverIqConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            RecoverIqConfig::default()
        }
    }
}
