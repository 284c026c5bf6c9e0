//! Load dispatching.
//!
//! [`Loader`] decides what to inject and records that it was requested.
//! Loading is idempotent per (session, library): the first request resolves
//! the URL pattern and issues injection instructions, every later request
//! for the same pair is a no-op — even when it names a different version.
//!
//! All guarantees are at-least-requested, not at-least-loaded: the registry
//! is updated the moment injection instructions are issued, without waiting
//! for the browser.
//!
//! # Example
//!
//! ```
//! use jsloader::host::{HostUi, MockUi};
//! use jsloader::loader::Loader;
//!
//! let mut loader = Loader::new();
//! let mut ui = MockUi::new("ui-1");
//!
//! loader
//!     .load_files(
//!         &mut ui,
//!         "https://cdn.example.com/{library}/{version}/{file}",
//!         "jquery",
//!         Some("3.7.1"),
//!         &["jquery.min.js"],
//!     )
//!     .unwrap();
//!
//! assert_eq!(ui.scripts(), ["https://cdn.example.com/jquery/3.7.1/jquery.min.js"]);
//! assert!(loader.is_loaded(ui.session_id(), "jquery"));
//! ```

mod classify;
pub mod client;
mod presets;

pub use classify::FileKind;
pub use presets::{CDNJS, UNPKG, UNPKG_FILES};

use serde::{Deserialize, Serialize};

use crate::error::{LoaderError, Result};
use crate::host::{HostComponent, HostUi};
use crate::pattern::{resolve, Bindings};
use crate::registry::{LoadKey, LoadRecord, LoadRegistry};
use crate::session::SessionId;

/// Version recorded when the caller does not name one.
pub const DEFAULT_VERSION: &str = "latest";

/// What a dispatch call did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadOutcome {
    /// Injection was requested for these URLs and the load was recorded.
    ///
    /// "Requested" is deliberate: the browser has not necessarily fetched
    /// anything yet, and never reports back.
    Requested { version: String, urls: Vec<String> },

    /// The library was already recorded for this session; nothing was
    /// injected. Carries the *recorded* version, which may differ from the
    /// one requested.
    AlreadyLoaded { version: String },
}

/// Load dispatcher owning the per-session load registry.
#[derive(Debug, Default)]
pub struct Loader {
    registry: LoadRegistry,
}

impl Loader {
    /// Create a loader with an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the underlying registry.
    pub fn registry(&self) -> &LoadRegistry {
        &self.registry
    }

    /// Load files for a library, once per session.
    ///
    /// The pattern may contain `{library}`, `{version}` and `{file}`
    /// placeholders. Each file is resolved against the pattern and routed by
    /// extension: `.css` to stylesheet injection, `.mjs` to module injection
    /// (with its exports copied into `window[library]`), anything else to
    /// plain script injection. With no files, the pattern itself is resolved
    /// once and injected as a script.
    ///
    /// A missing or empty version is normalized to
    /// [`DEFAULT_VERSION`](crate::loader::DEFAULT_VERSION).
    ///
    /// # Errors
    ///
    /// [`LoaderError::InvalidArgument`] if the library name or pattern is
    /// empty, or the component is not attached to a UI. Validation happens
    /// before any injection.
    pub fn load_files(
        &mut self,
        component: &mut dyn HostComponent,
        pattern: &str,
        library: &str,
        version: Option<&str>,
        files: &[&str],
    ) -> Result<LoadOutcome> {
        if library.is_empty() {
            return Err(LoaderError::invalid_argument("library name cannot be empty"));
        }
        if pattern.is_empty() {
            return Err(LoaderError::invalid_argument("URL pattern cannot be empty"));
        }
        let ui = component.ui().ok_or_else(|| {
            LoaderError::invalid_argument("component is not attached to a UI")
        })?;

        let version = match version {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => DEFAULT_VERSION.to_string(),
        };

        let key = LoadKey::new(ui.session_id().clone(), library);
        if let Some(record) = self.registry.get(&key) {
            tracing::debug!(
                library,
                recorded = record.version(),
                "library already loaded for this session, skipping"
            );
            return Ok(LoadOutcome::AlreadyLoaded {
                version: record.version().to_string(),
            });
        }

        let mut bindings = Bindings::new();
        bindings.set("library", library);
        bindings.set("version", version.as_str());

        let mut urls = Vec::new();
        if files.is_empty() {
            let url = resolve(pattern, &bindings);
            tracing::debug!(library, %url, "injecting script");
            ui.add_script(&url);
            urls.push(url);
        } else {
            for file in files {
                bindings.set("file", *file);
                let url = resolve(pattern, &bindings);
                match FileKind::classify(file) {
                    FileKind::Stylesheet => {
                        tracing::debug!(library, %url, "injecting stylesheet");
                        ui.add_stylesheet(&url);
                    }
                    FileKind::Module => {
                        tracing::debug!(library, %url, "injecting module");
                        ui.add_module(&url);
                        ui.eval(&client::module_namespace_snippet(library, &url));
                    }
                    FileKind::Script => {
                        tracing::debug!(library, %url, "injecting script");
                        ui.add_script(&url);
                    }
                }
                urls.push(url);
            }
        }

        // Best-effort client-side mirror; never read back by this crate
        ui.eval(&client::mirror_snippet(library, &version));

        self.registry.record(key, LoadRecord::new(version.clone()));
        Ok(LoadOutcome::Requested { version, urls })
    }

    /// Load a library's minified bundle (`{library}.min.js`) from cdnjs.
    pub fn load_cdnjs(
        &mut self,
        component: &mut dyn HostComponent,
        library: &str,
        version: Option<&str>,
    ) -> Result<LoadOutcome> {
        let file = format!("{library}.min.js");
        self.load_files(component, CDNJS, library, version, &[file.as_str()])
    }

    /// Load specific files of a library from cdnjs.
    pub fn load_cdnjs_files(
        &mut self,
        component: &mut dyn HostComponent,
        library: &str,
        version: Option<&str>,
        files: &[&str],
    ) -> Result<LoadOutcome> {
        self.load_files(component, CDNJS, library, version, files)
    }

    /// Load a library from unpkg.
    ///
    /// With files, each is resolved against the `{library}@{version}/{file}`
    /// pattern; without files, the bare `{library}@{version}` package URL is
    /// injected as a script.
    pub fn load_unpkg(
        &mut self,
        component: &mut dyn HostComponent,
        library: &str,
        version: Option<&str>,
        files: &[&str],
    ) -> Result<LoadOutcome> {
        let pattern = if files.is_empty() { UNPKG } else { UNPKG_FILES };
        self.load_files(component, pattern, library, version, files)
    }

    /// Load files bundled as packaged resources of the host application,
    /// served under [`crate::resources::URL_PATTERN_PACKAGED`].
    ///
    /// The host must route requests below
    /// [`crate::resources::RESOURCE_PREFIX`] to a
    /// [`crate::resources::ResourceHandler`] for these URLs to resolve.
    pub fn load_packaged(
        &mut self,
        component: &mut dyn HostComponent,
        library: &str,
        version: Option<&str>,
        files: &[&str],
    ) -> Result<LoadOutcome> {
        self.load_files(
            component,
            crate::resources::URL_PATTERN_PACKAGED,
            library,
            version,
            files,
        )
    }

    /// Whether any version of the library has been loaded for the session.
    pub fn is_loaded(&self, session: &SessionId, library: &str) -> bool {
        self.registry.is_loaded(session, library)
    }

    /// Whether exactly this version of the library has been loaded for the
    /// session.
    pub fn is_loaded_version(&self, session: &SessionId, library: &str, version: &str) -> bool {
        self.registry.is_loaded_version(session, library, version)
    }

    /// The version loaded for a library in a session, if any.
    pub fn loaded_version(&self, session: &SessionId, library: &str) -> Option<&str> {
        self.registry.loaded_version(session, library)
    }

    /// Drop all load records for a session. Call on session teardown.
    pub fn forget_session(&mut self, session: &SessionId) {
        self.registry.forget_session(session);
    }
}
