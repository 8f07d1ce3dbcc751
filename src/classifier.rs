//! Declaration classification and the public/non-public filter.

use crate::parser::{Declaration, ParsedType, Visibility};

/// Syntactic kind of a declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Property,
    Function,
    CompositeType,
    EnumEntry,
}

pub fn classify(declaration: &Declaration) -> DeclarationKind {
    match declaration {
        Declaration::Property(_) => DeclarationKind::Property,
        Declaration::Function(_) => DeclarationKind::Function,
        Declaration::Type(_) => DeclarationKind::CompositeType,
        Declaration::EnumEntry(_) => DeclarationKind::EnumEntry,
    }
}

/// Whether a declaration belongs to the public surface.
///
/// Any restrictive modifier (`private`, `protected`, `internal`) excludes it.
/// Enum entries have no visibility of their own and always belong to their
/// enumeration's surface.
pub fn is_public(declaration: &Declaration) -> bool {
    match declaration.visibility() {
        Some(visibility) => visibility == Visibility::Public,
        None => true,
    }
}

/// Prune a declaration tree down to its public surface.
///
/// Returns `None` for non-public declarations; composite types keep only
/// their public members, recursively.
pub fn public_surface(declaration: &Declaration) -> Option<Declaration> {
    if !is_public(declaration) {
        return None;
    }
    match declaration {
        Declaration::Type(ty) => Some(Declaration::Type(ParsedType {
            name: ty.name.clone(),
            visibility: ty.visibility,
            kind: ty.kind,
            supertypes: ty.supertypes.clone(),
            members: ty.members.iter().filter_map(public_surface).collect(),
        })),
        other => Some(other.clone()),
    }
}
