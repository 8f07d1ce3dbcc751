use crate::config::MissingTypePolicy;
use crate::error::Result;

/// One level of indentation
pub const INDENT_UNIT: &str = "    ";

/// Configuration context for rendering operations
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    pub depth: usize,
    pub missing_types: MissingTypePolicy,
}

impl RenderContext {
    pub fn new() -> Self {
        Self {
            depth: 0,
            missing_types: MissingTypePolicy::default(),
        }
    }

    pub fn with_depth(&self, depth: usize) -> Self {
        Self {
            depth,
            missing_types: self.missing_types,
        }
    }

    pub fn with_missing_types(&self, missing_types: MissingTypePolicy) -> Self {
        Self {
            depth: self.depth,
            missing_types,
        }
    }

    /// Context for the members of a body rendered at this depth.
    pub fn nested(&self) -> Self {
        self.with_depth(self.depth + 1)
    }

    pub fn indent(&self) -> String {
        INDENT_UNIT.repeat(self.depth)
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Core rendering trait for all parsed declarations.
///
/// Returns `Ok(None)` when the declaration is not part of the public surface.
pub trait Render {
    fn render(&self, context: &RenderContext) -> Result<Option<String>>;
}
