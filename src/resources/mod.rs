//! Packaged resource serving.
//!
//! Libraries can be bundled with the server application instead of fetched
//! from a public CDN. This module provides the serving side: a
//! [`ResourceProvider`] yields resource bytes for a (library, file) pair, and
//! a [`ResourceHandler`] maps request paths under the fixed
//! [`RESOURCE_PREFIX`] to HTTP-style responses.
//!
//! Wiring the handler into the host framework's request pipeline — and
//! attaching/detaching it in lockstep with the session lifecycle — is the
//! host's job; this crate only builds URLs and responses.

mod embedded;
mod fs;
mod handler;

pub use embedded::EmbeddedResources;
pub use fs::DirResources;
pub use handler::{ResourceHandler, ResourceResponse};

use crate::error::Result;

/// Public path segment under which packaged resources are served.
pub const RESOURCE_PREFIX: &str = "jsloader";

/// URL pattern for packaged resources, usable with
/// [`Loader::load_files`](crate::loader::Loader::load_files).
pub const URL_PATTERN_PACKAGED: &str = "/jsloader/{library}/{file}";

/// Build the serving URL for one packaged resource file.
pub fn resource_url(library: &str, file: &str) -> String {
    format!("/{RESOURCE_PREFIX}/{library}/{file}")
}

/// Map a file name to a response content type.
///
/// `.js` and `.mjs` map to the script mime type, `.css` to the stylesheet
/// mime type, everything else to plain text.
pub fn content_type_for(file: &str) -> &'static str {
    let lower = file.to_ascii_lowercase();
    if lower.ends_with(".js") || lower.ends_with(".mjs") {
        "text/javascript"
    } else if lower.ends_with(".css") {
        "text/css"
    } else {
        "text/plain"
    }
}

/// Source of packaged resource bytes.
///
/// Implementations should return [`LoaderError::ResourceNotFound`] for
/// unknown resources and [`LoaderError::ResourceReadFailure`] when a known
/// resource cannot be read.
///
/// [`LoaderError::ResourceNotFound`]: crate::error::LoaderError::ResourceNotFound
/// [`LoaderError::ResourceReadFailure`]: crate::error::LoaderError::ResourceReadFailure
pub trait ResourceProvider {
    /// Read the bytes of one resource file of a library.
    fn read(&self, library: &str, file: &str) -> Result<Vec<u8>>;
}
