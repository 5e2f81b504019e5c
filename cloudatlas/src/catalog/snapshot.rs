//! JSON snapshot persistence for [`Catalog`].
//!
//! The snapshot file mirrors the upstream data service payload: a
//! `providers` array and a `regions` array refreshed together, stamped
//! with the collection time. Loading is the only I/O the library
//! performs; everything downstream of a loaded catalog is pure.

use super::types::Catalog;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors raised while loading or saving a catalog snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot file could not be read.
    #[error("failed to read snapshot {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot file is not valid snapshot JSON.
    #[error("failed to parse snapshot {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The snapshot file could not be written.
    #[error("failed to write snapshot {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Catalog {
    /// Loads a catalog snapshot from a JSON file.
    ///
    /// Unknown providers appearing in the file are kept: they group and
    /// count like known ones, they simply have no palette entry and no
    /// slot in the fixed list display order.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Read`] when the file cannot be read and
    /// [`SnapshotError::Parse`] when its contents are not a valid
    /// snapshot document.
    pub fn load_from(path: &Path) -> Result<Self, SnapshotError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SnapshotError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog: Catalog =
            serde_json::from_str(&contents).map_err(|source| SnapshotError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        info!(
            path = %path.display(),
            providers = catalog.providers.len(),
            regions = catalog.regions.len(),
            generated_at = %catalog.generated_at,
            "Loaded catalog snapshot"
        );

        Ok(catalog)
    }

    /// Saves this catalog as pretty-printed JSON, creating parent
    /// directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), SnapshotError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| SnapshotError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }

        let contents =
            serde_json::to_string_pretty(self).map_err(|source| SnapshotError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        std::fs::write(path, contents).map_err(|source| SnapshotError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
