use serde::Serialize;

/// Declared visibility of a declaration.
///
/// Only [`Visibility::Public`] is part of the API surface. A declaration
/// without a visibility modifier is public.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Private,
    Protected,
    Internal,
}

impl Visibility {
    pub fn from_modifier(word: &str) -> Option<Self> {
        match word {
            "public" => Some(Visibility::Public),
            "private" => Some(Visibility::Private),
            "protected" => Some(Visibility::Protected),
            "internal" => Some(Visibility::Internal),
            _ => None,
        }
    }
}

// Parsed data structures - a read-only view of one file's declarations

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedProperty {
    pub name: Option<String>,
    pub visibility: Visibility,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
    pub mutable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedParameter {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ty: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedFunction {
    pub name: Option<String>,
    pub visibility: Visibility,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub type_parameters: Vec<String>,
    pub parameters: Vec<ParsedParameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
}

/// Kind tag of a declaration that owns a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Object,
    Companion,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedType {
    pub name: Option<String>,
    pub visibility: Visibility,
    #[serde(rename = "type_kind")]
    pub kind: TypeKind,
    pub supertypes: Vec<String>,
    pub members: Vec<Declaration>,
}

impl ParsedType {
    pub fn is_enum(&self) -> bool {
        self.kind == TypeKind::Enum
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedEnumEntry {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Declaration {
    Property(ParsedProperty),
    Function(ParsedFunction),
    Type(ParsedType),
    EnumEntry(ParsedEnumEntry),
}

impl Declaration {
    pub fn name(&self) -> Option<&str> {
        match self {
            Declaration::Property(p) => p.name.as_deref(),
            Declaration::Function(f) => f.name.as_deref(),
            Declaration::Type(t) => t.name.as_deref(),
            Declaration::EnumEntry(e) => e.name.as_deref(),
        }
    }

    /// Declared visibility; enum entries carry none.
    pub fn visibility(&self) -> Option<Visibility> {
        match self {
            Declaration::Property(p) => Some(p.visibility),
            Declaration::Function(f) => Some(f.visibility),
            Declaration::Type(t) => Some(t.visibility),
            Declaration::EnumEntry(_) => None,
        }
    }
}
