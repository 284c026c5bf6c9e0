//! Request handling for packaged resources.

use super::{content_type_for, ResourceProvider, RESOURCE_PREFIX};
use crate::error::LoaderError;

/// An HTTP-style response for a packaged resource request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceResponse {
    /// HTTP status code: 200, 404 or 500.
    pub status: u16,
    /// Response content type.
    pub content_type: &'static str,
    /// Response body.
    pub body: Vec<u8>,
}

impl ResourceResponse {
    fn ok(content_type: &'static str, body: Vec<u8>) -> Self {
        Self {
            status: 200,
            content_type,
            body,
        }
    }

    fn error(status: u16, message: String) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: message.into_bytes(),
        }
    }
}

/// Maps request paths below [`RESOURCE_PREFIX`] to resource responses.
///
/// These requests come from the browser, asynchronously from any application
/// call, so failures surface as error responses rather than as Rust errors.
#[derive(Debug)]
pub struct ResourceHandler<P> {
    provider: P,
}

impl<P: ResourceProvider> ResourceHandler<P> {
    /// Create a handler over a resource provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Handle a request path of the form `/jsloader/{library}/{file}`.
    ///
    /// Unknown prefixes, malformed paths and unknown resources yield 404;
    /// a resource that exists but cannot be read yields 500.
    pub fn handle(&self, path: &str) -> ResourceResponse {
        let Some((library, file)) = parse_path(path) else {
            return ResourceResponse::error(404, format!("No such resource: {path}"));
        };

        match self.provider.read(library, file) {
            Ok(body) => ResourceResponse::ok(content_type_for(file), body),
            Err(e @ (LoaderError::ResourceNotFound { .. } | LoaderError::InvalidArgument { .. })) => {
                ResourceResponse::error(404, e.to_string())
            }
            Err(e) => {
                tracing::warn!("Failed to serve packaged resource {path}: {e}");
                ResourceResponse::error(500, e.to_string())
            }
        }
    }
}

/// Split `/jsloader/{library}/{file...}` into library and file.
fn parse_path(path: &str) -> Option<(&str, &str)> {
    let rest = path.strip_prefix('/')?.strip_prefix(RESOURCE_PREFIX)?;
    let rest = rest.strip_prefix('/')?;
    let (library, file) = rest.split_once('/')?;
    if library.is_empty() || file.is_empty() {
        return None;
    }
    Some((library, file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use std::collections::HashMap;

    struct MapProvider(HashMap<(&'static str, &'static str), Vec<u8>>);

    impl ResourceProvider for MapProvider {
        fn read(&self, library: &str, file: &str) -> Result<Vec<u8>> {
            self.0
                .iter()
                .find(|((l, f), _)| *l == library && *f == file)
                .map(|(_, bytes)| bytes.clone())
                .ok_or_else(|| LoaderError::ResourceNotFound {
                    library: library.to_string(),
                    file: file.to_string(),
                })
        }
    }

    struct FailingProvider;

    impl ResourceProvider for FailingProvider {
        fn read(&self, library: &str, file: &str) -> Result<Vec<u8>> {
            Err(LoaderError::ResourceReadFailure {
                library: library.to_string(),
                file: file.to_string(),
                message: "disk on fire".to_string(),
            })
        }
    }

    fn handler() -> ResourceHandler<MapProvider> {
        let mut map = HashMap::new();
        map.insert(("mylib", "mylib.js"), b"console.log('x')".to_vec());
        map.insert(("mylib", "mylib.css"), b"body{}".to_vec());
        ResourceHandler::new(MapProvider(map))
    }

    #[test]
    fn serves_script_with_script_mime() {
        let response = handler().handle("/jsloader/mylib/mylib.js");
        assert_eq!(response.status, 200);
        assert_eq!(response.content_type, "text/javascript");
        assert_eq!(response.body, b"console.log('x')");
    }

    #[test]
    fn serves_stylesheet_with_css_mime() {
        let response = handler().handle("/jsloader/mylib/mylib.css");
        assert_eq!(response.status, 200);
        assert_eq!(response.content_type, "text/css");
    }

    #[test]
    fn unknown_resource_is_404() {
        let response = handler().handle("/jsloader/mylib/missing.js");
        assert_eq!(response.status, 404);
    }

    #[test]
    fn wrong_prefix_is_404() {
        let response = handler().handle("/static/mylib/mylib.js");
        assert_eq!(response.status, 404);
    }

    #[test]
    fn malformed_paths_are_404() {
        let h = handler();
        assert_eq!(h.handle("/jsloader").status, 404);
        assert_eq!(h.handle("/jsloader/").status, 404);
        assert_eq!(h.handle("/jsloader/mylib").status, 404);
        assert_eq!(h.handle("/jsloader//mylib.js").status, 404);
        assert_eq!(h.handle("jsloader/mylib/mylib.js").status, 404);
    }

    #[test]
    fn read_failure_is_500() {
        let h = ResourceHandler::new(FailingProvider);
        let response = h.handle("/jsloader/mylib/mylib.js");
        assert_eq!(response.status, 500);
        assert!(String::from_utf8(response.body).unwrap().contains("disk on fire"));
    }

    #[test]
    fn parse_path_keeps_nested_file_segments() {
        assert_eq!(
            parse_path("/jsloader/mylib/dist/extra.css"),
            Some(("mylib", "dist/extra.css"))
        );
    }
}
