use std::path::PathBuf;

use thiserror::Error;

use crate::IconCategory;

#[derive(Debug, Error)]
pub enum SchemaTreeError {
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    #[error("Icon '{category}' not found at {}", .path.display())]
    IconNotFound {
        category: IconCategory,
        path: PathBuf,
    },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
