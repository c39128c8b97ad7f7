//! Runtime configuration.
//!
//! Values come from an optional TOML file and may be overridden on the command line.
//! The default file lives at `<config_dir>/rowfilter/config.toml`.

use crate::error::{Result, RowFilterError};
use crate::filter::FilterField;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Message drawn in place of the rows when nothing matches.
pub const DEFAULT_PLACEHOLDER: &str = "Aucun résultat";

/// Column header labels.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ColumnLabels {
    pub name: String,
    pub age: String,
    pub email: String,
}

impl Default for ColumnLabels {
    fn default() -> Self {
        Self {
            name: "Name".to_string(),
            age: "Age".to_string(),
            email: "Email".to_string(),
        }
    }
}

impl ColumnLabels {
    /// Labels in table column order.
    pub fn as_array(&self) -> [&str; 3] {
        [self.name.as_str(), self.age.as_str(), self.email.as_str()]
    }
}

/// Hint text drawn inside each empty filter input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InputHints {
    pub name: String,
    pub age: String,
    pub email: String,
    pub global: String,
}

impl Default for InputHints {
    fn default() -> Self {
        Self {
            name: "Filtrer Nom".to_string(),
            age: "Filtrer Âge (ex: 30 ou 20-40)".to_string(),
            email: "Filtrer Email".to_string(),
            global: "Rechercher dans toutes les colonnes".to_string(),
        }
    }
}

impl InputHints {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Name => &self.name,
            FilterField::Age => &self.age,
            FilterField::Email => &self.email,
            FilterField::Global => &self.global,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Empty-result message
    pub placeholder: String,
    /// Theme name: `default`, `monochrome` or `high-contrast`
    pub theme: String,
    /// Record file; the built-in sample set is used when absent
    pub records: Option<PathBuf>,
    pub labels: ColumnLabels,
    pub hints: InputHints,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            theme: "default".to_string(),
            records: None,
            labels: ColumnLabels::default(),
            hints: InputHints::default(),
        }
    }
}

impl Config {
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| RowFilterError::config(e.message().to_string()))
    }

    /// Read a config file that must exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RowFilterError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let source = std::fs::read_to_string(path)
            .map_err(|e| RowFilterError::file_error(format!("reading {}", path.display()), e))?;
        let mut config = Self::from_toml(&source)?;

        // Relative record paths are resolved against the config file's directory.
        if let (Some(records), Some(dir)) = (config.records.as_mut(), path.parent()) {
            if records.is_relative() {
                *records = dir.join(&*records);
            }
        }
        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rowfilter").join("config.toml"))
    }

    /// Load `explicit` if given; otherwise try the default location and fall back
    /// to built-in defaults when it is missing or unreadable.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => match Self::load(&path) {
                Ok(config) => {
                    log::info!("using configuration from {}", path.display());
                    Ok(config)
                }
                Err(err) => {
                    log::warn!("ignoring {}: {}", path.display(), err);
                    Ok(Self::default())
                }
            },
            _ => Ok(Self::default()),
        }
    }
}
