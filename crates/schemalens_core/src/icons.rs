use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{IconCategory, SchemaTreeError};

/// Visual theme of the host editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    Light,
    #[default]
    Dark,
}

impl ThemeKind {
    /// Directory holding this theme's icon set under the icon root.
    pub fn dir_name(self) -> &'static str {
        match self {
            ThemeKind::Light => "light",
            ThemeKind::Dark => "dark",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "light" => Some(ThemeKind::Light),
            "dark" => Some(ThemeKind::Dark),
            _ => None,
        }
    }
}

/// Icon asset paths for both theme variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemedIconPath {
    pub light: PathBuf,
    pub dark: PathBuf,
}

impl ThemedIconPath {
    pub fn for_theme(&self, theme: ThemeKind) -> &Path {
        match theme {
            ThemeKind::Light => &self.light,
            ThemeKind::Dark => &self.dark,
        }
    }
}

/// Maps icon categories to SVG files laid out as
/// `<root>/<theme>/schema/<category>.svg`.
#[derive(Debug, Clone)]
pub struct IconResolver {
    root: PathBuf,
    verify_assets: bool,
}

impl IconResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            verify_assets: false,
        }
    }

    /// When enabled, [`IconResolver::resolve`] fails if an SVG file is missing.
    pub fn with_verification(mut self, verify_assets: bool) -> Self {
        self.verify_assets = verify_assets;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn icon_file(&self, theme: ThemeKind, category: IconCategory) -> PathBuf {
        self.root
            .join(theme.dir_name())
            .join("schema")
            .join(format!("{}.svg", category.file_stem()))
    }

    /// `Ok(None)` means no icon; an error means the icon exists but its
    /// asset could not be found.
    pub fn resolve(
        &self,
        category: Option<IconCategory>,
    ) -> Result<Option<ThemedIconPath>, SchemaTreeError> {
        let Some(category) = category else {
            return Ok(None);
        };

        let paths = ThemedIconPath {
            light: self.icon_file(ThemeKind::Light, category),
            dark: self.icon_file(ThemeKind::Dark, category),
        };

        if self.verify_assets {
            for path in [&paths.light, &paths.dark] {
                if !path.is_file() {
                    return Err(SchemaTreeError::IconNotFound {
                        category,
                        path: path.clone(),
                    });
                }
            }
        }

        Ok(Some(paths))
    }
}
