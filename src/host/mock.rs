//! Mock UI implementation for testing.
//!
//! `MockUi` implements the [`HostUi`] trait and captures every injection
//! instruction for later assertion. Host applications can use it to test
//! their own loading code without a browser.
//!
//! # Example
//!
//! ```
//! use jsloader::host::{HostUi, MockUi};
//!
//! let mut ui = MockUi::new("ui-1");
//! ui.add_script("https://example.com/a.js");
//! ui.add_stylesheet("https://example.com/a.css");
//!
//! assert_eq!(ui.scripts(), ["https://example.com/a.js"]);
//! assert_eq!(ui.stylesheets(), ["https://example.com/a.css"]);
//! ```

use super::{HostComponent, HostUi};
use crate::session::SessionId;

/// Mock UI implementation for testing.
///
/// Captures injected script/stylesheet/module URLs and evaluated JS
/// expressions in the order they were issued.
#[derive(Debug, Default)]
pub struct MockUi {
    session: SessionId,
    scripts: Vec<String>,
    stylesheets: Vec<String>,
    modules: Vec<String>,
    evals: Vec<String>,
}

impl MockUi {
    /// Create a new mock UI for the given session.
    pub fn new(session: impl Into<SessionId>) -> Self {
        Self {
            session: session.into(),
            ..Default::default()
        }
    }

    /// All captured plain-script URLs.
    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }

    /// All captured stylesheet URLs.
    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }

    /// All captured module URLs.
    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    /// All captured evaluated JS expressions.
    pub fn evals(&self) -> &[String] {
        &self.evals
    }

    /// Total number of injected tags (scripts + stylesheets + modules).
    pub fn injection_count(&self) -> usize {
        self.scripts.len() + self.stylesheets.len() + self.modules.len()
    }
}

impl HostUi for MockUi {
    fn session_id(&self) -> &SessionId {
        &self.session
    }

    fn add_script(&mut self, url: &str) {
        self.scripts.push(url.to_string());
    }

    fn add_stylesheet(&mut self, url: &str) {
        self.stylesheets.push(url.to_string());
    }

    fn add_module(&mut self, url: &str) {
        self.modules.push(url.to_string());
    }

    fn eval(&mut self, expression: &str) {
        self.evals.push(expression.to_string());
    }
}

/// A component that is not attached to any UI.
///
/// Useful for testing the dispatcher's absent-session handling.
#[derive(Debug, Default)]
pub struct Detached;

impl HostComponent for Detached {
    fn ui(&mut self) -> Option<&mut dyn HostUi> {
        None
    }
}
