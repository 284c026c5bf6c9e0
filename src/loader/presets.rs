//! URL patterns for well-known public CDNs.

/// cdnjs path style: `https://cdnjs.cloudflare.com/ajax/libs/{library}/{version}/{file}`.
pub const CDNJS: &str = "https://cdnjs.cloudflare.com/ajax/libs/{library}/{version}/{file}";

/// unpkg package style, no file: `https://unpkg.com/{library}@{version}`.
pub const UNPKG: &str = "https://unpkg.com/{library}@{version}";

/// unpkg package style with a file path: `https://unpkg.com/{library}@{version}/{file}`.
pub const UNPKG_FILES: &str = "https://unpkg.com/{library}@{version}/{file}";
