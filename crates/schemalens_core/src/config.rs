use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{IconResolver, SchemaTreeError, ThemeKind};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeViewConfig {
    #[serde(default)]
    pub theme: ThemeKind,

    /// Directory containing the `light/` and `dark/` icon sets.
    /// Defaults to `images/` next to the executable.
    #[serde(default)]
    pub icon_root: Option<PathBuf>,

    /// Fail icon resolution when an SVG file is missing.
    #[serde(default)]
    pub verify_icon_assets: bool,

    /// Append the presence percentage to labels of partially present fields.
    #[serde(default)]
    pub show_probability: bool,
}

impl TreeViewConfig {
    pub fn icon_root(&self) -> PathBuf {
        if let Some(root) = &self.icon_root {
            return root.clone();
        }

        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("images")))
            .unwrap_or_else(|| PathBuf::from("images"))
    }

    pub fn icon_resolver(&self) -> IconResolver {
        IconResolver::new(self.icon_root()).with_verification(self.verify_icon_assets)
    }
}

pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new() -> Result<Self, SchemaTreeError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            SchemaTreeError::IoError(std::io::Error::other("Could not find config directory"))
        })?;

        Ok(Self {
            path: config_dir.join("schemalens").join("config.json"),
        })
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<TreeViewConfig, SchemaTreeError> {
        if !self.path.exists() {
            log::debug!("No config at {}, using defaults", self.path.display());
            return Ok(TreeViewConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let config: TreeViewConfig = serde_json::from_str(&content)
            .map_err(|e| SchemaTreeError::InvalidConfig(e.to_string()))?;

        Ok(config)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::at(dir.path().join("config.json"));

        let config = store.load().unwrap();
        assert_eq!(config, TreeViewConfig::default());
        assert_eq!(config.theme, ThemeKind::Dark);
    }

    #[test]
    fn test_load_partial_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "theme": "light", "show_probability": true }"#).unwrap();

        let config = ConfigStore::at(&path).load().unwrap();
        assert_eq!(config.theme, ThemeKind::Light);
        assert!(config.show_probability);
        assert!(!config.verify_icon_assets);
        assert_eq!(config.icon_root, None);
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "theme": "sepia" }"#).unwrap();

        let err = ConfigStore::at(&path).load().unwrap_err();
        assert!(matches!(err, SchemaTreeError::InvalidConfig(_)));
    }

    #[test]
    fn test_explicit_icon_root() {
        let config = TreeViewConfig {
            icon_root: Some(PathBuf::from("/srv/icons")),
            ..Default::default()
        };
        assert_eq!(config.icon_resolver().root(), Path::new("/srv/icons"));
    }
}
