use crate::classifier::is_public;
use crate::error::Result;
use crate::parser::*;
use crate::renderer::components::*;
use crate::renderer::traits::*;

impl Render for ParsedProperty {
    fn render(&self, context: &RenderContext) -> Result<Option<String>> {
        let sig = SignatureRenderer;

        Ok(Some(format!(
            "{}{} {}{}",
            context.indent(),
            sig.render_mutability(self.mutable),
            display_name(self.name.as_deref()),
            sig.render_type_suffix(self.ty.as_deref())
        )))
    }
}

impl Render for ParsedFunction {
    fn render(&self, context: &RenderContext) -> Result<Option<String>> {
        let sig = SignatureRenderer;

        let mut signature = String::from("fun ");
        signature.push_str(&sig.render_receiver(self.receiver.as_deref()));
        signature.push_str(&sig.render_type_parameters(&self.type_parameters));
        signature.push_str(display_name(self.name.as_deref()));
        signature.push_str(&sig.render_parameters(self, context)?);
        signature.push_str(&sig.render_type_suffix(self.return_type.as_deref()));

        Ok(Some(format!("{}{}", context.indent(), signature.trim())))
    }
}

impl Render for ParsedEnumEntry {
    fn render(&self, context: &RenderContext) -> Result<Option<String>> {
        Ok(Some(format!(
            "{}{},",
            context.indent(),
            display_name(self.name.as_deref())
        )))
    }
}

/// Render every public declaration of `members` at `context`, joined by newlines.
fn render_block<'d>(
    members: impl Iterator<Item = &'d Declaration>,
    context: &RenderContext,
) -> Result<String> {
    let mut lines = Vec::new();
    for member in members {
        if let Some(text) = member.render(context)? {
            lines.push(text);
        }
    }
    Ok(lines.join("\n"))
}

impl Render for ParsedType {
    fn render(&self, context: &RenderContext) -> Result<Option<String>> {
        let sig = SignatureRenderer;
        let indent = context.indent();
        let member_context = context.nested();

        let header = format!(
            "{}{} {}{} {{",
            indent,
            sig.type_keyword(self.kind),
            sig.type_name(self),
            sig.render_supertypes(&self.supertypes)
        );

        // Enum entries come first, ahead of every other member
        if self.is_enum() {
            let is_entry = |d: &&Declaration| matches!(d, Declaration::EnumEntry(_));
            let entries = render_block(self.members.iter().filter(is_entry), &member_context)?;
            let others = render_block(
                self.members.iter().filter(|d| !is_entry(d)),
                &member_context,
            )?;
            return Ok(Some(format!(
                "{}\n{}\n{}\n{}}}",
                header, entries, others, indent
            )));
        }

        let body = render_block(self.members.iter(), &member_context)?;
        Ok(Some(format!("{}\n{}\n{}}}", header, body, indent)))
    }
}

/// Non-public declarations render to `None`; this is the only visibility gate.
impl Render for Declaration {
    fn render(&self, context: &RenderContext) -> Result<Option<String>> {
        if !is_public(self) {
            return Ok(None);
        }
        match self {
            Declaration::Property(p) => p.render(context),
            Declaration::Function(f) => f.render(context),
            Declaration::Type(t) => t.render(context),
            Declaration::EnumEntry(e) => e.render(context),
        }
    }
}
