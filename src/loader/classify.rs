//! File classification by extension.

/// How a resolved URL is injected into the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Plain `<script>` injection. The default for unknown extensions.
    Script,
    /// `<link rel="stylesheet">` injection.
    Stylesheet,
    /// ES-module injection plus an export-namespace copy step.
    Module,
}

impl FileKind {
    /// Classify a file name by its extension, case-insensitively.
    ///
    /// `.css` routes to stylesheet injection, `.mjs` to module injection,
    /// and everything else (including no extension at all) to plain script
    /// injection.
    pub fn classify(file: &str) -> Self {
        let lower = file.to_ascii_lowercase();
        if lower.ends_with(".css") {
            FileKind::Stylesheet
        } else if lower.ends_with(".mjs") {
            FileKind::Module
        } else {
            FileKind::Script
        }
    }
}
