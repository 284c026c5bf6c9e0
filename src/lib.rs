//! jsloader - dynamic JavaScript and CSS loading for server-side UI frameworks.
//!
//! Lets application code request that a named script or stylesheet — from a
//! public CDN, a local path, or a resource packaged with the application —
//! be injected into the browser page exactly once per UI session.
//!
//! # Modules
//!
//! - [`pattern`] - URL template resolution with `{name}` placeholders
//! - [`session`] - opaque session identifiers
//! - [`host`] - the seam into the host framework's page-injection primitives
//! - [`registry`] - per-session load tracking
//! - [`loader`] - the load dispatcher and CDN presets
//! - [`resources`] - serving libraries packaged with the application
//! - [`error`] - error types and result aliases
//!
//! # Example
//!
//! ```
//! use jsloader::host::{HostUi, MockUi};
//! use jsloader::Loader;
//!
//! let mut loader = Loader::new();
//! let mut ui = MockUi::new("ui-1");
//!
//! // First request injects; the second is a per-session no-op.
//! loader.load_cdnjs(&mut ui, "jquery", Some("3.7.1")).unwrap();
//! loader.load_cdnjs(&mut ui, "jquery", Some("3.7.1")).unwrap();
//!
//! assert_eq!(ui.scripts().len(), 1);
//! assert!(loader.is_loaded_version(ui.session_id(), "jquery", "3.7.1"));
//! ```
//!
//! A "load" is complete the instant the injection instruction is issued; the
//! browser never reports back. See [`loader::LoadOutcome`].

pub mod error;
pub mod host;
pub mod loader;
pub mod pattern;
pub mod registry;
pub mod resources;
pub mod session;

pub use error::{LoaderError, Result};
pub use loader::{LoadOutcome, Loader};
pub use session::SessionId;
