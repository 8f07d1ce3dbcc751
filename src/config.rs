use crate::discovery::DEFAULT_EXTENSION;

/// How to render a function parameter that has no type annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingTypePolicy {
    /// Render [`INFERRED_TYPE_PLACEHOLDER`](crate::renderer::INFERRED_TYPE_PLACEHOLDER) in place of the type
    #[default]
    Placeholder,
    /// Fail with [`Error::MissingTypeAnnotation`](crate::Error::MissingTypeAnnotation)
    Strict,
}

/// Output format configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Indented signature listing
    #[default]
    Text,
    /// One JSON object per public top-level declaration
    Json,
}

/// Settings for one scan of a source tree.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Extension of source files to pick up, without the dot
    pub extension: String,
    pub missing_types: MissingTypePolicy,
    pub format: OutputFormat,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            missing_types: MissingTypePolicy::default(),
            format: OutputFormat::default(),
        }
    }
}
