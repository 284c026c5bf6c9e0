//! Resources embedded in the host binary.

use include_dir::Dir;

use super::ResourceProvider;
use crate::error::{LoaderError, Result};

/// Provider serving files embedded at compile time with `include_dir!`.
///
/// The embedded directory is expected to contain one subdirectory per
/// library, e.g. `resources/mylib/mylib.js`.
///
/// # Example
///
/// ```ignore
/// use include_dir::{include_dir, Dir};
/// use jsloader::resources::EmbeddedResources;
///
/// static RESOURCES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/resources");
///
/// let provider = EmbeddedResources::new(&RESOURCES);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedResources {
    root: &'static Dir<'static>,
}

impl EmbeddedResources {
    /// Create a provider over an embedded directory.
    pub fn new(root: &'static Dir<'static>) -> Self {
        Self { root }
    }
}

impl ResourceProvider for EmbeddedResources {
    fn read(&self, library: &str, file: &str) -> Result<Vec<u8>> {
        let path = format!("{library}/{file}");
        let entry = self
            .root
            .get_file(&path)
            .ok_or_else(|| LoaderError::ResourceNotFound {
                library: library.to_string(),
                file: file.to_string(),
            })?;
        Ok(entry.contents().to_vec())
    }
}
