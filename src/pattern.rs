//! URL pattern resolution.
//!
//! URL patterns contain named placeholders using `{name}` syntax. The loader
//! binds `library`, `version` and `file`, but the resolver is generic over
//! whatever names are supplied.
//!
//! # Syntax
//!
//! - `{name}` - replaced with the bound value, every occurrence
//! - an unbound `{name}` survives literally in the output
//! - a `{` without a closing `}` is plain text
//!
//! # Example
//!
//! ```
//! use jsloader::pattern::{resolve, Bindings};
//!
//! let mut bindings = Bindings::new();
//! bindings.set("library", "jquery");
//! bindings.set("version", "3.7.1");
//! bindings.set("file", "jquery.min.js");
//!
//! let url = resolve("{library}/{version}/{file}", &bindings);
//! assert_eq!(url, "jquery/3.7.1/jquery.min.js");
//! ```

use std::collections::{HashMap, HashSet};

/// A segment of a parsed URL pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text
    Literal(String),
    /// Placeholder reference: {name}
    Placeholder(String),
}

/// Parse a pattern string into literal and placeholder segments.
///
/// Replacement is literal text substitution, not regex-aware. A `{` that is
/// never closed is treated as literal text.
pub fn parse_pattern(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current_literal = String::new();
    let mut rest = input;

    while let Some(open) = rest.find('{') {
        match rest[open..].find('}') {
            Some(close) => {
                current_literal.push_str(&rest[..open]);
                if !current_literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut current_literal)));
                }
                let name = &rest[open + 1..open + close];
                segments.push(Segment::Placeholder(name.to_string()));
                rest = &rest[open + close + 1..];
            }
            None => {
                // No closing brace anywhere after this point
                break;
            }
        }
    }

    current_literal.push_str(rest);
    if !current_literal.is_empty() {
        segments.push(Segment::Literal(current_literal));
    }

    segments
}

/// Extract all placeholder names from a pattern.
///
/// Returns unique names found in the pattern.
pub fn placeholders(input: &str) -> HashSet<String> {
    parse_pattern(input)
        .into_iter()
        .filter_map(|seg| match seg {
            Segment::Placeholder(name) => Some(name),
            _ => None,
        })
        .collect()
}

/// Named values to substitute into a pattern.
///
/// Bound names that never occur in the pattern are silently unused.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    values: HashMap<String, String>,
}

impl Bindings {
    /// Create an empty set of bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a placeholder name to a value, replacing any previous binding.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Look up the value bound to a name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

/// Resolve all placeholders in a pattern against the given bindings.
///
/// Every occurrence of each bound `{name}` is replaced. Unbound placeholders
/// are left untouched in the output so the caller can see exactly what was
/// missing. Pure function, never fails.
pub fn resolve(pattern: &str, bindings: &Bindings) -> String {
    let mut result = String::with_capacity(pattern.len());

    for segment in parse_pattern(pattern) {
        match segment {
            Segment::Literal(text) => result.push_str(&text),
            Segment::Placeholder(name) => match bindings.get(&name) {
                Some(value) => result.push_str(value),
                None => {
                    result.push('{');
                    result.push_str(&name);
                    result.push('}');
                }
            },
        }
    }

    result
}
