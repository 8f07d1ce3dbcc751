use crate::classifier::public_surface;
use crate::config::MissingTypePolicy;
use crate::error::{Error, Result};
use crate::parser::*;
use crate::renderer::traits::*;

/// Renders a stream of top-level declarations into one block per public
/// declaration.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceRenderer {
    context: RenderContext,
}

impl SurfaceRenderer {
    pub fn new(missing_types: MissingTypePolicy) -> Self {
        Self {
            context: RenderContext::new().with_missing_types(missing_types),
        }
    }

    /// Lazily render each public declaration as a text block.
    ///
    /// Errors from the input stream are passed through unchanged.
    pub fn render_all<I>(&self, declarations: I) -> impl Iterator<Item = Result<String>>
    where
        I: IntoIterator<Item = Result<Declaration>>,
    {
        let context = self.context;
        declarations
            .into_iter()
            .filter_map(move |declaration| match declaration {
                Ok(declaration) => declaration.render(&context).transpose(),
                Err(err) => Some(Err(err)),
            })
    }

    /// Lazily serialize each public declaration, pruned to its public
    /// members, as one line of JSON.
    pub fn render_json<I>(&self, declarations: I) -> impl Iterator<Item = Result<String>>
    where
        I: IntoIterator<Item = Result<Declaration>>,
    {
        declarations
            .into_iter()
            .filter_map(|declaration| match declaration {
                Ok(declaration) => public_surface(&declaration)
                    .map(|surface| serde_json::to_string(&surface).map_err(Error::from)),
                Err(err) => Some(Err(err)),
            })
    }
}
