//! Loading and validation of the module registry.
//!
//! The registry is a JSON object mapping module names to git repository
//! URLs. Keys become directory names under the root; entries are
//! processed in the file's own key order.

use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A single registry entry: a module name and the URL it is cloned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleEntry {
    pub name: String,
    pub url: String,
}

/// Errors raised while loading the registry.
///
/// All of these are fatal: no git work starts on a broken registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("{} not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{} must contain a dictionary of module names to repository URLs", .path.display())]
    Shape { path: PathBuf },

    #[error("module '{name}' must map to a repository URL string")]
    EntryValue { name: String },
}

/// Loads the registry file at `path` and returns its entries in file order.
pub fn load(path: &Path) -> Result<Vec<ModuleEntry>, RegistryError> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            RegistryError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            RegistryError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let document: Value =
        serde_json::from_str(&text).map_err(|source| RegistryError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let Value::Object(mapping) = document else {
        return Err(RegistryError::Shape {
            path: path.to_path_buf(),
        });
    };

    mapping
        .into_iter()
        .map(|(name, value)| match value {
            Value::String(url) => Ok(ModuleEntry { name, url }),
            _ => Err(RegistryError::EntryValue { name }),
        })
        .collect()
}
