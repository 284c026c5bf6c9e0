//! Host framework seam.
//!
//! The loader never talks to a browser itself; it issues fire-and-forget
//! injection instructions through [`HostUi`], which the host framework
//! implements on its UI/page handle. None of the primitives report whether
//! the browser actually fetched the resource, so "loaded" always means
//! "injection requested".
//!
//! [`HostComponent`] models the fact that application components may be
//! detached from a UI; the dispatcher treats a detached component as an
//! invalid-argument condition.

mod mock;

pub use mock::{Detached, MockUi};

use crate::session::SessionId;

/// What the loader needs from the host framework's UI object.
///
/// All injection primitives are fire-and-forget: they enqueue an instruction
/// for the page and return immediately.
pub trait HostUi {
    /// The session this UI belongs to.
    fn session_id(&self) -> &SessionId;

    /// Inject a plain `<script src=...>` tag.
    fn add_script(&mut self, url: &str);

    /// Inject a `<link rel="stylesheet" href=...>` tag.
    fn add_stylesheet(&mut self, url: &str);

    /// Inject a `<script type="module" src=...>` tag.
    fn add_module(&mut self, url: &str);

    /// Evaluate a JavaScript expression on the page.
    fn eval(&mut self, expression: &str);
}

/// Anything that may, or may not, currently be attached to a UI.
///
/// Host frameworks typically implement this on their component base type;
/// a component that has not been attached yet returns `None`.
pub trait HostComponent {
    /// The UI this component is attached to, if any.
    fn ui(&mut self) -> Option<&mut dyn HostUi>;
}

/// Every UI handle is trivially a component attached to itself.
impl<T: HostUi> HostComponent for T {
    fn ui(&mut self) -> Option<&mut dyn HostUi> {
        Some(self)
    }
}
