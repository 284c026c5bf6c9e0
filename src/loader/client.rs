//! Browser-side JavaScript snippet builders.
//!
//! Two pieces of page state are maintained from the server side:
//!
//! - a global map of loaded libraries, `window.__loadedLibraries`, mirroring
//!   the server registry so page code can introspect what was requested.
//!   Best-effort only; the server never reads it back.
//! - for ES modules, a namespace object `window[library]` holding the
//!   module's named exports, so non-module page code can call
//!   `libraryName.exportedSymbol`.
//!
//! All embedded values go through JSON escaping so library names, versions
//! and URLs cannot break out of their string literals.

/// Global property on `window` that mirrors the server-side load registry.
pub const CLIENT_REGISTRY_GLOBAL: &str = "__loadedLibraries";

/// Quote a string as a JavaScript string literal.
fn js_string(value: &str) -> String {
    // JSON string escaping is valid JS string escaping
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Snippet recording a loaded library version in the client-side map.
pub fn mirror_snippet(library: &str, version: &str) -> String {
    format!(
        "window.{g} = window.{g} || {{}}; window.{g}[{lib}] = {ver};",
        g = CLIENT_REGISTRY_GLOBAL,
        lib = js_string(library),
        ver = js_string(version),
    )
}

/// Snippet copying the named exports of a loaded ES module into a global
/// namespace object keyed by the library name.
pub fn module_namespace_snippet(library: &str, url: &str) -> String {
    format!(
        "import({url}).then((m) => {{ \
         const ns = window[{lib}] = window[{lib}] || {{}}; \
         for (const k of Object.keys(m)) {{ ns[k] = m[k]; }} \
         }});",
        url = js_string(url),
        lib = js_string(library),
    )
}
