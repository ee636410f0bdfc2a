//! Configuration management for devdays.
//!
//! The configuration is a small JSON document stored as `config.json` in the
//! platform data directory resolved by [`DataStorage`]. Every section is
//! optional; a missing file behaves exactly like an empty one.
//!
//! ## Sections
//!
//! - **`extra_lessons_dir`**: directory of additional hand-authored lesson
//!   files (`*.json`, one record per file) appended after the built-in ones
//! - **`export`**: default export format and output directory
//!
//! ## Usage
//!
//! ```rust,no_run
//! use devdays::libs::config::Config;
//!
//! let config = Config::read()?;
//! if let Some(dir) = &config.extra_lessons_dir {
//!     println!("Extra lessons from {}", dir.display());
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::export::ExportFormat;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Defaults applied by `devdays export` when flags are omitted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExportConfig {
    pub default_format: ExportFormat,

    /// Directory for generated export file names. Ignored when `--output` is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            default_format: ExportFormat::Csv,
            output_dir: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_lessons_dir: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportConfig>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    pub fn read() -> Result<Config> {
        let config_file_path = Self::path()?;

        // Running without a config file is the normal case
        if !config_file_path.exists() {
            debug!(path = %config_file_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        debug!(path = %config_file_path.display(), "config loaded");
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = Self::path()?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the saved config file. Returns `false` if there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = Self::path()?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Interactive setup wizard. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "lessons".to_string(),
                name: "Extra lessons".to_string(),
            },
            ConfigModule {
                key: "export".to_string(),
                name: "Export".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "lessons" => {
                    msg_print!(Message::ConfigModuleLessons);
                    let default = config
                        .extra_lessons_dir
                        .as_ref()
                        .map(|dir| dir.display().to_string())
                        .unwrap_or_default();
                    let dir: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptExtraLessonsDir.to_string())
                        .default(default)
                        .allow_empty(true)
                        .interact_text()?;
                    config.extra_lessons_dir = Some(dir.trim()).filter(|dir| !dir.is_empty()).map(PathBuf::from);
                }
                "export" => {
                    msg_print!(Message::ConfigModuleExport);
                    let default = config.export.clone().unwrap_or_default();
                    let formats = [ExportFormat::Csv, ExportFormat::Json, ExportFormat::Excel];
                    let format_index = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptExportFormat.to_string())
                        .items(&formats.iter().map(|f| f.to_string()).collect::<Vec<_>>())
                        .default(formats.iter().position(|f| *f == default.default_format).unwrap_or(0))
                        .interact()?;
                    let output_dir: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptExportOutputDir.to_string())
                        .default(default.output_dir.map(|dir| dir.display().to_string()).unwrap_or_default())
                        .allow_empty(true)
                        .interact_text()?;
                    config.export = Some(ExportConfig {
                        default_format: formats[format_index],
                        output_dir: Some(output_dir.trim()).filter(|dir| !dir.is_empty()).map(PathBuf::from),
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
