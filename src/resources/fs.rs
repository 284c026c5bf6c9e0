//! Resources read from a filesystem directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use super::ResourceProvider;
use crate::error::{LoaderError, Result};

/// Provider serving files from a directory on disk, laid out as
/// `<root>/<library>/<file>`.
#[derive(Debug, Clone)]
pub struct DirResources {
    root: PathBuf,
}

impl DirResources {
    /// Create a provider rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory resources are served from.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Reject path segments that could escape the provider root.
fn check_segment(value: &str, what: &str) -> Result<()> {
    let path = Path::new(value);
    let plain = path
        .components()
        .all(|c| matches!(c, Component::Normal(_)));
    if value.is_empty() || !plain {
        return Err(LoaderError::invalid_argument(format!(
            "{what} must be a relative path without '..' segments: {value:?}"
        )));
    }
    Ok(())
}

impl ResourceProvider for DirResources {
    fn read(&self, library: &str, file: &str) -> Result<Vec<u8>> {
        check_segment(library, "library")?;
        check_segment(file, "file")?;

        let path = self.root.join(library).join(file);
        fs::read(&path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                LoaderError::ResourceNotFound {
                    library: library.to_string(),
                    file: file.to_string(),
                }
            } else {
                LoaderError::ResourceReadFailure {
                    library: library.to_string(),
                    file: file.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }
}
