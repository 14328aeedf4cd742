//! Configuration management module.
//!
//! This module handles loading and saving the dashboard configuration,
//! including the appearance preference, the low-stock threshold and hotkeys.

mod error;
pub mod hotkeys;

pub use error::ConfigError;
pub use hotkeys::{HotkeyAction, HotkeyOverrides, InputMode, ViewHotkeys};

use crate::error::AppError;
use crate::inventory::DEFAULT_LOW_STOCK_THRESHOLD;
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/stock-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub dark_mode: bool,
    pub low_stock_threshold: f64,
    pub seed_demo_items: bool,
    pub hotkeys: ViewHotkeys,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default = "default_threshold")]
    pub low_stock_threshold: f64,
    #[serde(default = "default_seed_demo_items")]
    pub seed_demo_items: bool,
    #[serde(default)]
    pub hotkeys: HotkeyOverrides,
}

fn default_threshold() -> f64 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

fn default_seed_demo_items() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding default values.
    ///
    pub fn new() -> Config {
        Config {
            dark_mode: false,
            low_stock_threshold: default_threshold(),
            seed_demo_items: default_seed_demo_items(),
            hotkeys: ViewHotkeys::default(),
            file_path: None,
        }
    }

    /// Load the configuration file from the custom directory if provided,
    /// otherwise from the default directory. A missing file leaves the
    /// defaults in place.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        let dir_path = match custom_path {
            Some(path) => Path::new(path).to_path_buf(),
            None => Config::default_path()?,
        };
        let file_path = dir_path.join(Path::new(FILE_NAME));
        self.file_path = Some(file_path.clone());

        if !file_path.exists() {
            debug!("No configuration file at {}, using defaults", file_path.display());
            return Ok(());
        }

        let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::ReadFailed {
            path: file_path.clone(),
            source: e,
        })?;
        self.apply_yaml(&contents)?;
        info!("Loaded configuration from {}", file_path.display());
        Ok(())
    }

    /// Overwrite settings with the values in the given YAML document.
    ///
    fn apply_yaml(&mut self, contents: &str) -> Result<(), AppError> {
        let data: FileSpec = serde_yaml::from_str(contents)
            .map_err(ConfigError::Malformed)?;
        self.set_low_stock_threshold(data.low_stock_threshold)?;
        self.dark_mode = data.dark_mode;
        self.seed_demo_items = data.seed_demo_items;
        self.hotkeys = ViewHotkeys::default().merged(data.hotkeys);
        Ok(())
    }

    /// Set the low-stock threshold, rejecting values that are not positive
    /// finite numbers.
    ///
    pub fn set_low_stock_threshold(&mut self, threshold: f64) -> Result<(), AppError> {
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ConfigError::InvalidThreshold(threshold).into());
        }
        self.low_stock_threshold = threshold;
        Ok(())
    }

    /// Serialize the configuration and write it to the disk, creating the
    /// parent directory when needed.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            dark_mode: self.dark_mode,
            low_stock_threshold: self.low_stock_threshold,
            seed_demo_items: self.seed_demo_items,
            hotkeys: HotkeyOverrides::from(&self.hotkeys),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(ConfigError::Encode)?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::WriteFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::WriteFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::WriteFailed {
            path: file_path.clone(),
            source: e,
        })?;
        info!("Saved configuration to {}", file_path.display());
        Ok(())
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::hotkeys::Hotkey;

    #[test]
    fn load_missing_file_keeps_defaults() {
        let scratch = tempfile::tempdir().unwrap();
        let dir = scratch.path().join("stock-tui");
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();

        assert!(!config.dark_mode);
        assert_eq!(config.low_stock_threshold, 20.0);
        assert!(config.seed_demo_items);
        assert_eq!(config.hotkeys, ViewHotkeys::default());
        assert_eq!(config.file_path(), Some(dir.join(FILE_NAME).as_path()));
        assert!(!dir.exists());
    }

    #[test]
    fn apply_yaml_reads_fields() {
        let mut config = Config::new();
        config
            .apply_yaml(
                "dark_mode: true\nlow_stock_threshold: 12.5\nseed_demo_items: false\n\
                 hotkeys:\n  item_list:\n    delete_item:\n      code: Char\n      char: x\n",
            )
            .unwrap();

        assert!(config.dark_mode);
        assert_eq!(config.low_stock_threshold, 12.5);
        assert!(!config.seed_demo_items);
        assert_eq!(
            config.hotkeys.item_list[&HotkeyAction::DeleteItem],
            Hotkey::char('x')
        );
        assert_eq!(
            config.hotkeys.item_list[&HotkeyAction::Quit],
            Hotkey::char('q')
        );
    }

    #[test]
    fn apply_yaml_rejects_bad_threshold() {
        let mut config = Config::new();
        let result = config.apply_yaml("low_stock_threshold: -4\n");
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::InvalidThreshold(_)))
        ));
        assert_eq!(config.low_stock_threshold, 20.0);
    }

    #[test]
    fn apply_yaml_rejects_malformed_document() {
        let mut config = Config::new();
        let result = config.apply_yaml("dark_mode: [not, a, bool]\n");
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::Malformed(_)))
        ));
    }

    #[test]
    fn save_without_path_fails() {
        let config = Config::new();
        assert!(matches!(
            config.save(),
            Err(AppError::Config(ConfigError::FilePathNotSet))
        ));
    }

    #[test]
    fn save_then_load() {
        let scratch = tempfile::tempdir().unwrap();
        let dir = scratch.path().join("nested").join("stock-tui");
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        config.dark_mode = true;
        config.set_low_stock_threshold(8.0).unwrap();
        config.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(dir.to_str()).unwrap();
        assert!(reloaded.dark_mode);
        assert_eq!(reloaded.low_stock_threshold, 8.0);
        assert_eq!(reloaded.hotkeys, config.hotkeys);
    }
}
