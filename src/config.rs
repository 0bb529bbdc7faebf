use crate::error::{Error, Result};
use crate::parser::DuplicatePolicy;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sort: SortConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SortConfig {
    /// Sort the lines inside each section after sorting headings
    #[serde(default = "default_sort_sections")]
    pub sections: bool,

    /// "keep" every duplicate sibling heading, or "merge" them (last wins)
    #[serde(default)]
    pub duplicates: DuplicatePolicy,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            sections: default_sort_sections(),
            duplicates: DuplicatePolicy::default(),
        }
    }
}

fn default_sort_sections() -> bool {
    false
}

impl Config {
    /// Get the XDG-style config file path (~/.config/mdsort/config.toml)
    /// This is preferred on macOS for CLI tools and cross-platform dotfiles
    #[cfg(target_os = "macos")]
    fn xdg_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("mdsort").join("config.toml"))
    }

    /// Get the platform-specific config file path
    /// - macOS: ~/Library/Application Support/mdsort/config.toml
    /// - Linux: ~/.config/mdsort/config.toml
    /// - Windows: %APPDATA%/mdsort/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mdsort").join("config.toml"))
    }

    /// Load config from the default location, or defaults if there is none.
    /// On macOS, checks ~/.config/mdsort first, then falls back to ~/Library/Application Support
    pub fn load() -> Result<Self> {
        #[cfg(target_os = "macos")]
        {
            // Prefer XDG-style path on macOS for CLI tools
            if let Some(xdg_path) = Self::xdg_config_path()
                && xdg_path.exists()
            {
                return Self::load_from_path(&xdg_path);
            }
        }

        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            _ => {
                log::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load config from an explicit path. The file must exist.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&contents, path)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    fn from_toml(contents: &str, path: &Path) -> Result<Self> {
        toml::from_str(contents).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("", Path::new("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert!(!config.sort.sections);
        assert_eq!(config.sort.duplicates, DuplicatePolicy::Keep);
    }

    #[test]
    fn test_parse_sort_section() {
        let config = Config::from_toml(
            "[sort]\nsections = true\nduplicates = \"merge\"\n",
            Path::new("config.toml"),
        )
        .unwrap();
        assert!(config.sort.sections);
        assert_eq!(config.sort.duplicates, DuplicatePolicy::Merge);
    }

    #[test]
    fn test_partial_sort_section() {
        let config =
            Config::from_toml("[sort]\nduplicates = \"keep\"\n", Path::new("config.toml")).unwrap();
        assert!(!config.sort.sections);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let err = Config::from_toml("[sort]\nduplicates = \"sometimes\"\n", Path::new("c.toml"))
            .unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_load_from_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from_path(&dir.path().join("config.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[sort]\nsections = true\n").unwrap();
        let config = Config::load_from_path(&path).unwrap();
        assert!(config.sort.sections);
    }
}
