use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use home::home_dir;
use tracing::{debug, warn};

use crate::{errors::ScoreError, report::Strategy};

/// Values read from `~/.pit-score/config`.
///
/// The file consists of simple key-value pairs separated by equals signs,
/// `#` starts a comment:
///
/// ```text
/// # summary | loose
/// strategy = summary
/// tolerance = 0.000001
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub strategy: Option<Strategy>,
    pub tolerance: Option<f64>,
}

impl Settings {
    pub fn from_map(config: &HashMap<String, String>) -> Result<Self, ScoreError> {
        let mut settings = Settings::default();
        for (key, value) in config {
            match key.as_str() {
                "strategy" => settings.strategy = Some(value.parse()?),
                "tolerance" => {
                    settings.tolerance = Some(value.parse::<f64>().map_err(|_| {
                        ScoreError::InvalidArgument(format!(
                            "Invalid tolerance '{}' in settings",
                            value
                        ))
                    })?)
                }
                _ => warn!("Ignoring unknown setting '{}'", key),
            }
        }
        Ok(settings)
    }

    pub fn from_file(config_path: &Path) -> Result<Self, ScoreError> {
        Self::from_map(&parse_config(config_path)?)
    }
}

fn settings_location() -> Option<PathBuf> {
    let mut settings_location = home_dir()?;
    settings_location.push(".pit-score");
    settings_location.push("config");
    Some(settings_location)
}

/// Parse the config file and return a HashMap of key-value pairs
fn parse_config(config_path: &Path) -> Result<HashMap<String, String>, ScoreError> {
    let file = File::open(config_path)?;
    let reader = BufReader::new(file);
    let mut config = HashMap::new();

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = trimmed.split_once('=') {
            let key = key.trim();
            if !key.is_empty() {
                config.insert(key.to_string(), value.trim().to_string());
            }
        }
    }

    Ok(config)
}

/// Load settings from the default location
pub fn load_settings() -> Result<Settings, ScoreError> {
    match settings_location() {
        Some(location) if location.exists() => {
            debug!("Loading settings from {}", location.display());
            Settings::from_file(&location)
        }
        _ => Ok(Settings::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "# This is a comment").unwrap();
        writeln!(temp_file, "strategy=loose").unwrap();
        writeln!(temp_file, "tolerance = 0.5").unwrap();
        writeln!(temp_file, "  key = value  ").unwrap();
        writeln!(temp_file, "").unwrap();
        writeln!(temp_file, "= orphan").unwrap();

        let config = parse_config(temp_file.path()).unwrap();

        assert_eq!(config.get("strategy"), Some(&"loose".to_string()));
        assert_eq!(config.get("tolerance"), Some(&"0.5".to_string()));
        assert_eq!(config.get("key"), Some(&"value".to_string()));
        assert_eq!(config.len(), 3);
    }

    #[test]
    fn test_settings_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "strategy = loose").unwrap();
        writeln!(temp_file, "tolerance = 0.5").unwrap();
        writeln!(temp_file, "colour = red").unwrap();

        let settings = Settings::from_file(temp_file.path()).unwrap();
        assert_eq!(
            settings,
            Settings {
                strategy: Some(Strategy::Loose),
                tolerance: Some(0.5),
            }
        );
    }

    #[test]
    fn test_empty_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "# Only comments").unwrap();

        let settings = Settings::from_file(temp_file.path()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_invalid_values() {
        let config = HashMap::from([("tolerance".to_string(), "tiny".to_string())]);
        assert!(Settings::from_map(&config).is_err());

        let config = HashMap::from([("strategy".to_string(), "first".to_string())]);
        assert!(Settings::from_map(&config).is_err());
    }
}
