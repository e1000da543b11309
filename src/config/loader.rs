use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::GrowthmapConfig;
use super::scoring::category_warnings;
use super::validation::validate_config;
use crate::errors::{MetricsError, Result};

pub const CONFIG_FILE_NAME: &str = ".growthmap.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<GrowthmapConfig, String> {
    let config = toml::from_str::<GrowthmapConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?
        .with_default_metrics();

    let errors = validate_config(&config);
    if !errors.is_empty() {
        return Err(errors.join("; "));
    }

    for warning in category_warnings(&config.categories) {
        log::warn!("{}", warning);
    }

    Ok(config)
}

/// Load an explicitly requested config file; any problem is an error
pub fn load_config_from(path: &Path) -> Result<GrowthmapConfig> {
    let contents = read_config_file(path)?;
    let config = toml::from_str::<GrowthmapConfig>(&contents)
        .map_err(|source| MetricsError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?
        .with_default_metrics();

    let errors = validate_config(&config);
    if !errors.is_empty() {
        return Err(MetricsError::configuration(errors.join("; ")));
    }
    for warning in category_warnings(&config.categories) {
        log::warn!("{}", warning);
    }

    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try loading config from a discovered path, warning instead of failing
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<GrowthmapConfig> {
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
            log::warn!("{} ({}). Using defaults.", e, config_path.display());
            None
        }
    }
}

/// Only log actual errors, not "file not found"
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Directory ancestors up to a depth limit, starting with `start` itself
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

/// Search `start` and its ancestors for a config file
pub fn discover_config(start: PathBuf) -> GrowthmapConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using built-in figures.",
                MAX_TRAVERSAL_DEPTH
            );
            GrowthmapConfig::default()
        })
}

pub fn load_config() -> GrowthmapConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            GrowthmapConfig::default()
        }
    }
}
