use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::AsterismConfig;
use crate::errors::{Error, Result};

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".asterism.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<AsterismConfig> {
    let config = toml::from_str::<AsterismConfig>(contents).map_err(|e| {
        Error::configuration(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
    })?;
    config.validate()?;
    Ok(config)
}

/// Load an explicitly named config file; every failure is an error.
pub fn load_config_file(path: &Path) -> Result<AsterismConfig> {
    let contents = read_config_file(path).map_err(|e| {
        Error::configuration_at(format!("Failed to read config file: {}", e), path)
    })?;
    parse_and_validate_config(&contents).map_err(|e| match e {
        Error::Configuration { message, .. } => Error::configuration_at(message, path),
        other => other,
    })
}

/// Try loading a discovered config file; problems are logged and skipped.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<AsterismConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            tracing::debug!(path = %config_path.display(), "Loaded config");
            Some(config)
        }
        Err(e) => {
            tracing::warn!(
                path = %config_path.display(),
                error = %e,
                "Ignoring invalid config file, using defaults"
            );
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            path = %config_path.display(),
            error = %error,
            "Failed to read config file"
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

/// Search `start` and its ancestors for a config file.
pub fn load_config_from_dir(start: &Path) -> AsterismConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                depth = MAX_TRAVERSAL_DEPTH,
                "No config found, using default config"
            );
            AsterismConfig::default()
        })
}

/// Discover configuration from the current directory upwards.
pub fn load_config() -> AsterismConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from_dir(&dir),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to get current directory, using default config");
            AsterismConfig::default()
        }
    }
}
