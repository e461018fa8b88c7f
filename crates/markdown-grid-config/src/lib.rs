use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_MERGE_COLS: usize = 40;
pub const DEFAULT_FONT_NAME: &str = "Yu Gothic";
pub const DEFAULT_H1_SIZE: u16 = 16;
pub const DEFAULT_H2_SIZE: u16 = 14;
pub const DEFAULT_H3_SIZE: u16 = 12;
pub const DEFAULT_NORMAL_SIZE: u16 = 10;
/// Point sizes accepted from a config file; anything else falls back to the default.
pub const FONT_SIZE_RANGE: RangeInclusive<u16> = 5..=72;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub layout: LayoutConfig,
    pub font: FontConfig,
    pub cell: CellConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Columns that make up one visual line.
    pub merge_cols: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            merge_cols: DEFAULT_MERGE_COLS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub name: String,
    pub h1_size: u16,
    pub h2_size: u16,
    pub h3_size: u16,
    pub normal_size: u16,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_FONT_NAME.to_string(),
            h1_size: DEFAULT_H1_SIZE,
            h2_size: DEFAULT_H2_SIZE,
            h3_size: DEFAULT_H3_SIZE,
            normal_size: DEFAULT_NORMAL_SIZE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellConfig {
    pub vertical_align: VerticalAlign,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config.validate().map(Some)
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-grid");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Rejects a zero merge width and puts out-of-range fonts back to their defaults.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        if self.layout.merge_cols == 0 {
            return Err(ConfigError::InvalidValue {
                field: "layout.merge_cols",
                reason: "must be at least 1".to_string(),
            });
        }

        let font = &mut self.font;
        if font.name.trim().is_empty() {
            font.name = DEFAULT_FONT_NAME.to_string();
        } else {
            font.name = font.name.trim().to_string();
        }
        font.h1_size = size_or_default(font.h1_size, DEFAULT_H1_SIZE);
        font.h2_size = size_or_default(font.h2_size, DEFAULT_H2_SIZE);
        font.h3_size = size_or_default(font.h3_size, DEFAULT_H3_SIZE);
        font.normal_size = size_or_default(font.normal_size, DEFAULT_NORMAL_SIZE);

        Ok(self)
    }
}

fn size_or_default(size: u16, default: u16) -> u16 {
    if FONT_SIZE_RANGE.contains(&size) {
        size
    } else {
        default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/markdown-grid/config.toml"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.layout.merge_cols, 40);
        assert_eq!(config.font.name, "Yu Gothic");
        assert_eq!(config.font.h1_size, 16);
        assert_eq!(config.cell.vertical_align, VerticalAlign::Center);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/config.toml");
        let mut test_config = Config::default();
        test_config.layout.merge_cols = 24;
        test_config.font.name = "Meiryo".to_string();
        test_config.cell.vertical_align = VerticalAlign::Top;

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[font]\nh2_size = 18\n").unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(config.font.h2_size, 18);
        assert_eq!(config.font.h1_size, DEFAULT_H1_SIZE);
        assert_eq!(config.layout.merge_cols, DEFAULT_MERGE_COLS);
    }

    #[rstest]
    #[case(4, DEFAULT_NORMAL_SIZE)]
    #[case(5, 5)]
    #[case(72, 72)]
    #[case(73, DEFAULT_NORMAL_SIZE)]
    fn test_font_size_range(#[case] size: u16, #[case] expected: u16) {
        let mut config = Config::default();
        config.font.normal_size = size;
        assert_eq!(config.validate().unwrap().font.normal_size, expected);
    }

    #[test]
    fn test_blank_font_name_falls_back() {
        let mut config = Config::default();
        config.font.name = "   ".to_string();
        assert_eq!(config.validate().unwrap().font.name, DEFAULT_FONT_NAME);
    }

    #[test]
    fn test_zero_merge_cols_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[layout]\nmerge_cols = 0\n").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidValue { field: "layout.merge_cols", .. }));
    }

    #[test]
    fn test_invalid_toml_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[layout\nmerge_cols = 3").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_vertical_align_is_lowercase_in_toml() {
        let config: Config = toml::from_str("[cell]\nvertical_align = \"bottom\"\n").unwrap();
        assert_eq!(config.cell.vertical_align, VerticalAlign::Bottom);
    }
}
