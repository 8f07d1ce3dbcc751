use tracing::trace;
use tree_sitter::{Language, Node, Parser};

use super::types::*;
use super::FrontEnd;
use crate::error::SyntaxError;

/// Node kinds that group declarations without being one themselves.
const CONTAINER_KINDS: &[&str] = &[
    "statements",
    "statement",
    "declaration",
    "class_member_declarations",
    "class_member_declaration",
    "enum_entries",
];

const NAME_KINDS: &[&str] = &["simple_identifier", "identifier", "type_identifier"];

/// Kotlin front-end over the tree-sitter Kotlin grammar.
///
/// Recognizes properties, functions, classes, interfaces, objects, companion
/// objects and enum classes with their nested members. Any `ERROR` or
/// `MISSING` node in the syntax tree fails the whole file.
#[derive(Clone)]
pub struct KotlinParser {
    language: Language,
}

impl KotlinParser {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_kotlin_ng::LANGUAGE.into(),
        }
    }
}

impl Default for KotlinParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FrontEnd for KotlinParser {
    fn parse(&self, text: &str) -> Result<Vec<Declaration>, SyntaxError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| SyntaxError::new(format!("cannot load Kotlin grammar: {}", e), 1, 1))?;
        let tree = parser
            .parse(text, None)
            .ok_or_else(|| SyntaxError::new("failed to parse source", 1, 1))?;

        let root = tree.root_node();
        if let Some(node) = first_error(root) {
            return Err(syntax_error(text, node));
        }

        let mut declarations = Vec::new();
        DeclarationMapper { src: text }.collect(root, &mut declarations);
        Ok(declarations)
    }
}

fn children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).collect()
}

fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

fn child_of_kind<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    named_children(node).into_iter().find(|c| c.kind() == kind)
}

/// First `ERROR` or `MISSING` node in document order.
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    children(node).into_iter().find_map(first_error)
}

fn syntax_error(src: &str, node: Node<'_>) -> SyntaxError {
    let point = node.start_position();
    let start = node.start_byte();
    // tree-sitter columns count bytes
    let column = src
        .get(start.saturating_sub(point.column)..start)
        .map_or(point.column, |prefix| prefix.chars().count())
        + 1;

    let message = if node.is_missing() {
        format!("missing `{}`", node.kind())
    } else {
        let snippet = src
            .get(node.byte_range())
            .and_then(|text| text.lines().next())
            .unwrap_or("")
            .trim();
        if snippet.is_empty() {
            "unexpected end of input".to_string()
        } else {
            format!("unexpected `{}`", snippet.chars().take(24).collect::<String>())
        }
    };
    SyntaxError::new(message, point.row + 1, column)
}

/// Whether a node is (part of) a type reference in a `: <type>` position.
fn is_type_part(node: &Node<'_>) -> bool {
    let kind = node.kind();
    kind == "type_modifiers"
        || kind == "type"
        || kind == "dynamic"
        || (kind.ends_with("_type") && kind != "receiver_type")
}

/// Maps syntax tree nodes of one file onto the declaration model.
struct DeclarationMapper<'s> {
    src: &'s str,
}

impl<'s> DeclarationMapper<'s> {
    fn text(&self, node: Node<'_>) -> &'s str {
        &self.src[node.byte_range()]
    }

    fn collect(&self, node: Node<'_>, out: &mut Vec<Declaration>) {
        for child in named_children(node) {
            match self.declaration(child) {
                Some(declaration) => out.push(declaration),
                None if CONTAINER_KINDS.contains(&child.kind()) => self.collect(child, out),
                None => trace!(
                    kind = child.kind(),
                    line = child.start_position().row + 1,
                    "skipping node"
                ),
            }
        }
    }

    fn declaration(&self, node: Node<'_>) -> Option<Declaration> {
        let declaration = match node.kind() {
            "property_declaration" => Declaration::Property(self.property(node)),
            "function_declaration" => Declaration::Function(self.function(node)),
            "class_declaration" => Declaration::Type(self.composite(node, self.class_kind(node))),
            "interface_declaration" => {
                Declaration::Type(self.composite(node, TypeKind::Interface))
            }
            "object_declaration" => Declaration::Type(self.composite(node, TypeKind::Object)),
            "companion_object" => Declaration::Type(self.composite(node, TypeKind::Companion)),
            "enum_entry" => Declaration::EnumEntry(ParsedEnumEntry {
                name: self.name(node),
            }),
            _ => return None,
        };
        Some(declaration)
    }

    fn name(&self, node: Node<'_>) -> Option<String> {
        node.child_by_field_name("name")
            .or_else(|| {
                named_children(node)
                    .into_iter()
                    .find(|c| NAME_KINDS.contains(&c.kind()))
            })
            .map(|n| self.text(n).to_string())
    }

    /// Leaf words of the `modifiers` node, annotations excluded.
    fn modifier_words(&self, node: Node<'_>) -> Vec<&'s str> {
        let Some(modifiers) = child_of_kind(node, "modifiers") else {
            return Vec::new();
        };
        let mut words = Vec::new();
        let mut stack = vec![modifiers];
        while let Some(n) = stack.pop() {
            if n.kind() == "annotation" {
                continue;
            }
            if n.child_count() == 0 {
                words.push(self.text(n));
            } else {
                stack.extend(children(n));
            }
        }
        words
    }

    fn visibility(&self, node: Node<'_>) -> Visibility {
        self.modifier_words(node)
            .into_iter()
            .find_map(Visibility::from_modifier)
            .unwrap_or_default()
    }

    fn has_keyword(&self, node: Node<'_>, word: &str) -> bool {
        children(node)
            .iter()
            .any(|c| !c.is_named() && c.kind() == word)
    }

    fn class_kind(&self, node: Node<'_>) -> TypeKind {
        if self.modifier_words(node).contains(&"enum")
            || self.has_keyword(node, "enum")
            || child_of_kind(node, "enum_class_body").is_some()
        {
            TypeKind::Enum
        } else if self.has_keyword(node, "interface") {
            TypeKind::Interface
        } else {
            TypeKind::Class
        }
    }

    /// Verbatim text of the type following the first direct `:` child.
    fn type_after_colon(&self, node: Node<'_>) -> Option<String> {
        let kids = children(node);
        let colon = kids.iter().position(|c| c.kind() == ":")?;
        let parts: Vec<Node<'_>> = kids[colon + 1..]
            .iter()
            .copied()
            .take_while(is_type_part)
            .collect();
        let (first, last) = (parts.first()?, parts.last()?);
        Some(self.src[first.start_byte()..last.end_byte()].to_string())
    }

    fn property(&self, node: Node<'_>) -> ParsedProperty {
        let mutable = children(node).iter().any(|c| self.text(*c) == "var");
        let (name, ty) = if let Some(variable) = child_of_kind(node, "variable_declaration") {
            (self.name(variable), self.type_after_colon(variable))
        } else if child_of_kind(node, "multi_variable_declaration").is_some() {
            (None, None)
        } else {
            (self.name(node), self.type_after_colon(node))
        };

        ParsedProperty {
            name,
            visibility: self.visibility(node),
            ty,
            mutable,
        }
    }

    fn function(&self, node: Node<'_>) -> ParsedFunction {
        let receiver = child_of_kind(node, "receiver_type")
            .or_else(|| node.child_by_field_name("receiver"))
            .map(|r| self.text(r).trim_end_matches('.').trim().to_string())
            .filter(|r| !r.is_empty());
        let type_parameters = child_of_kind(node, "type_parameters")
            .map(|params| {
                named_children(params)
                    .into_iter()
                    .filter(|p| p.kind() == "type_parameter")
                    .map(|p| self.text(p).to_string())
                    .collect()
            })
            .unwrap_or_default();
        let parameters = child_of_kind(node, "function_value_parameters")
            .map(|params| self.parameters(params))
            .unwrap_or_default();

        ParsedFunction {
            name: self.name(node),
            visibility: self.visibility(node),
            receiver,
            type_parameters,
            parameters,
            return_type: self.type_after_colon(node),
        }
    }

    fn parameters(&self, node: Node<'_>) -> Vec<ParsedParameter> {
        named_children(node)
            .into_iter()
            .filter_map(|child| match child.kind() {
                "parameter" => Some(child),
                "function_value_parameter" => child_of_kind(child, "parameter").or(Some(child)),
                _ => None,
            })
            .map(|param| ParsedParameter {
                name: self.name(param),
                ty: self.type_after_colon(param),
            })
            .collect()
    }

    fn composite(&self, node: Node<'_>, kind: TypeKind) -> ParsedType {
        let body = node
            .child_by_field_name("body")
            .or_else(|| child_of_kind(node, "class_body"))
            .or_else(|| child_of_kind(node, "enum_class_body"));
        let mut members = Vec::new();
        if let Some(body) = body {
            self.collect(body, &mut members);
        }

        ParsedType {
            name: self.name(node),
            visibility: self.visibility(node),
            kind,
            supertypes: self.supertypes(node),
            members,
        }
    }

    fn supertypes(&self, node: Node<'_>) -> Vec<String> {
        let mut supertypes = Vec::new();
        let mut after_colon = false;
        for child in children(node) {
            match child.kind() {
                ":" => after_colon = true,
                "class_body" | "enum_class_body" | "type_constraints" => break,
                "delegation_specifiers" => supertypes.extend(
                    named_children(child)
                        .into_iter()
                        .filter(|c| !c.kind().contains("comment"))
                        .map(|c| self.supertype(c)),
                ),
                kind if after_colon && child.is_named() && !kind.contains("comment") => {
                    supertypes.push(self.supertype(child))
                }
                _ => {}
            }
        }
        supertypes
    }

    /// Type of a supertype entry, without constructor arguments or delegate.
    fn supertype(&self, node: Node<'_>) -> String {
        match node.kind() {
            "delegation_specifier"
            | "annotated_delegation_specifier"
            | "constructor_invocation"
            | "explicit_delegation" => named_children(node)
                .into_iter()
                .find(|c| c.kind() != "annotation")
                .map(|c| self.supertype(c))
                .unwrap_or_else(|| self.text(node).to_string()),
            _ => self.text(node).to_string(),
        }
    }
}
