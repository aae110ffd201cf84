//! Manifest input

use crate::core::errors::{IconFontError, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where the manifest document is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    Stdin,
    File(PathBuf),
}

impl ManifestSource {
    /// A missing path or `-` selects standard input
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(path) if path != Path::new("-") => Self::File(path.to_path_buf()),
            _ => Self::Stdin,
        }
    }

    pub fn read_to_string(&self) -> Result<String> {
        match self {
            Self::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|err| IconFontError::io("<stdin>", err))?;
                Ok(text)
            }
            Self::File(path) => {
                std::fs::read_to_string(path).map_err(|err| IconFontError::io(path, err))
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}
