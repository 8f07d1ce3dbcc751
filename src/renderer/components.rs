use tracing::warn;

use crate::config::MissingTypePolicy;
use crate::error::{Error, Result};
use crate::parser::*;
use crate::renderer::traits::*;

/// Name rendered for declarations without an identifiable name
pub const UNNAMED: &str = "unnamed";

/// Type rendered for parameters without a type annotation
pub const INFERRED_TYPE_PLACEHOLDER: &str = "<inferred>";

pub fn display_name(name: Option<&str>) -> &str {
    name.unwrap_or(UNNAMED)
}

/// Helper for rendering signature fragments
pub struct SignatureRenderer;

impl SignatureRenderer {
    pub fn render_mutability(&self, mutable: bool) -> &'static str {
        if mutable {
            "var"
        } else {
            "val"
        }
    }

    /// `: T`, or nothing when no type is declared.
    pub fn render_type_suffix(&self, ty: Option<&str>) -> String {
        ty.map(|t| format!(": {}", t)).unwrap_or_default()
    }

    pub fn render_receiver(&self, receiver: Option<&str>) -> String {
        match receiver {
            Some(r) if !r.trim().is_empty() => format!("{}.", r),
            _ => String::new(),
        }
    }

    pub fn render_type_parameters(&self, params: &[String]) -> String {
        if params.is_empty() {
            return String::new();
        }
        format!("<{}>", params.join(", "))
    }

    pub fn render_parameters(
        &self,
        function: &ParsedFunction,
        context: &RenderContext,
    ) -> Result<String> {
        let params = function
            .parameters
            .iter()
            .map(|p| {
                let name = display_name(p.name.as_deref());
                let ty = match (&p.ty, context.missing_types) {
                    (Some(ty), _) => ty.as_str(),
                    (None, MissingTypePolicy::Placeholder) => {
                        warn!(
                            function = display_name(function.name.as_deref()),
                            parameter = name,
                            "parameter has no type annotation"
                        );
                        INFERRED_TYPE_PLACEHOLDER
                    }
                    (None, MissingTypePolicy::Strict) => {
                        return Err(Error::MissingTypeAnnotation {
                            function: display_name(function.name.as_deref()).to_string(),
                            parameter: name.to_string(),
                        });
                    }
                };
                Ok(format!("{}: {}", name, ty))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(format!("({})", params.join(", ")))
    }

    /// `: A, B`, or nothing without supertypes.
    pub fn render_supertypes(&self, supertypes: &[String]) -> String {
        if supertypes.is_empty() {
            return String::new();
        }
        format!(": {}", supertypes.join(", "))
    }

    pub fn type_keyword(&self, kind: TypeKind) -> &'static str {
        match kind {
            TypeKind::Enum => "enum class",
            TypeKind::Interface => "interface",
            TypeKind::Companion => "companion object",
            TypeKind::Object => "object",
            TypeKind::Class => "class",
        }
    }

    /// Companion scopes are anonymous relative to their owner.
    pub fn type_name<'t>(&self, ty: &'t ParsedType) -> &'t str {
        match ty.kind {
            TypeKind::Companion => "",
            _ => display_name(ty.name.as_deref()),
        }
    }
}
