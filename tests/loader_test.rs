//! Loader integration tests over the public API.

use jsloader::host::{HostUi, MockUi};
use jsloader::{LoadOutcome, Loader, LoaderError, SessionId};

const PATTERN: &str = "https://cdn.example.com/{library}/{version}/{file}";

#[test]
fn loading_twice_injects_once() {
    let mut loader = Loader::new();
    let mut ui = MockUi::new("ui-1");

    let first = loader
        .load_files(&mut ui, PATTERN, "jquery", Some("3.7.1"), &["jquery.min.js"])
        .unwrap();
    let second = loader
        .load_files(&mut ui, PATTERN, "jquery", Some("4.0.0"), &["jquery.min.js"])
        .unwrap();

    assert!(matches!(first, LoadOutcome::Requested { .. }));
    assert_eq!(
        second,
        LoadOutcome::AlreadyLoaded {
            version: "3.7.1".into()
        }
    );
    assert_eq!(ui.injection_count(), 1);
}

#[test]
fn version_queries_match_recorded_version() {
    let mut loader = Loader::new();
    let mut ui = MockUi::new("ui-1");
    let session = SessionId::new("ui-1");

    loader
        .load_files(&mut ui, PATTERN, "bar", Some("1.0"), &["bar.js"])
        .unwrap();

    assert!(loader.is_loaded(&session, "bar"));
    assert!(loader.is_loaded_version(&session, "bar", "1.0"));
    assert!(!loader.is_loaded_version(&session, "bar", "2.0"));
}

#[test]
fn omitted_version_records_latest() {
    let mut loader = Loader::new();
    let mut ui = MockUi::new("ui-1");

    loader
        .load_files(&mut ui, PATTERN, "foo", None, &["foo.js"])
        .unwrap();

    assert!(loader.is_loaded_version(&SessionId::new("ui-1"), "foo", "latest"));
}

#[test]
fn independent_sessions_do_not_interfere() {
    let mut loader = Loader::new();
    let mut ui_a = MockUi::new("session-a");

    loader
        .load_files(&mut ui_a, PATTERN, "baz", Some("1.0"), &["baz.js"])
        .unwrap();

    assert!(loader.is_loaded(&SessionId::new("session-a"), "baz"));
    assert!(!loader.is_loaded(&SessionId::new("session-b"), "baz"));
}

#[test]
fn files_route_by_extension() {
    let mut loader = Loader::new();
    let mut ui = MockUi::new("ui-1");

    loader
        .load_files(
            &mut ui,
            PATTERN,
            "widgets",
            Some("2.0"),
            &["widgets.js", "theme.CSS", "extras.mjs", "data"],
        )
        .unwrap();

    assert_eq!(ui.scripts().len(), 2); // widgets.js and the extension-less "data"
    assert_eq!(ui.stylesheets().len(), 1);
    assert_eq!(ui.modules().len(), 1);
}

#[test]
fn module_load_exposes_namespace_and_mirror() {
    let mut loader = Loader::new();
    let mut ui = MockUi::new("ui-1");

    loader
        .load_files(&mut ui, PATTERN, "leaflet", Some("1.9.4"), &["leaflet.mjs"])
        .unwrap();

    let evals = ui.evals();
    assert_eq!(evals.len(), 2);
    assert!(evals[0].contains("import("));
    assert!(evals[0].contains("window[\"leaflet\"]"));
    assert!(evals[1].contains("__loadedLibraries"));
}

#[test]
fn validation_errors_are_invalid_argument() {
    let mut loader = Loader::new();
    let mut ui = MockUi::new("ui-1");

    for result in [
        loader.load_files(&mut ui, PATTERN, "", None, &["a.js"]),
        loader.load_files(&mut ui, "", "lib", None, &["a.js"]),
    ] {
        assert!(matches!(
            result.unwrap_err(),
            LoaderError::InvalidArgument { .. }
        ));
    }
    assert_eq!(ui.injection_count(), 0);
}

#[test]
fn error_types_are_public() {
    let err = LoaderError::invalid_argument("boom");
    assert!(err.to_string().contains("boom"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> jsloader::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn session_teardown_clears_records() {
    let mut loader = Loader::new();
    let mut ui = MockUi::new("ui-1");
    let session = SessionId::new("ui-1");

    loader
        .load_unpkg(&mut ui, "htmx.org", Some("1.9.12"), &[])
        .unwrap();
    assert!(loader.is_loaded(&session, "htmx.org"));

    loader.forget_session(&session);
    assert!(!loader.is_loaded(&session, "htmx.org"));
    assert!(loader.registry().is_empty());
}

#[test]
fn unbound_placeholder_survives_in_injected_url() {
    let mut loader = Loader::new();
    let mut ui = MockUi::new("ui-1");

    // Pattern uses a placeholder the dispatcher never binds.
    loader
        .load_files(
            &mut ui,
            "https://cdn.example.com/{channel}/{library}.js",
            "chart",
            None,
            &[],
        )
        .unwrap();

    assert_eq!(ui.scripts(), ["https://cdn.example.com/{channel}/chart.js"]);
}
