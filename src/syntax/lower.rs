//! Lowering from a tree-sitter parse tree into the declaration model.
//!
//! Node kinds follow the tree-sitter-kotlin-ng grammar. A declaration whose
//! name cannot be resolved is skipped rather than failing the file.

use tree_sitter::Node;

use crate::extractor::parser::ParsedFile;
use crate::syntax::{ClassKind, ClassOrObject, Declaration, NamedFunction, SourceFile, SupertypeEntry};

pub fn lower_file(parsed: &ParsedFile) -> SourceFile {
    let root = parsed.root_node();
    let mut package = None;
    let mut declarations = Vec::new();

    let mut cursor = root.walk();
    for child in root.children(&mut cursor) {
        match child.kind() {
            "package_header" => {
                if let Some(path) = package_path(parsed, &child) {
                    package = Some(path.clone());
                    declarations.push(Declaration::Package(path));
                }
            }
            "class_declaration" | "interface_declaration" | "object_declaration"
            | "enum_declaration" => {
                if let Some(class) = lower_class(parsed, &child) {
                    declarations.push(Declaration::Class(class));
                }
            }
            "function_declaration" => {
                if let Some(function) = lower_function(parsed, &child) {
                    declarations.push(Declaration::Function(function));
                }
            }
            _ => {}
        }
    }

    SourceFile {
        package,
        declarations,
    }
}

fn package_path(parsed: &ParsedFile, node: &Node) -> Option<String> {
    let path = find_child(node, "qualified_identifier")
        .or_else(|| find_child(node, "identifier"))
        .map(|n| parsed.node_text(&n).to_string())?;
    if path.is_empty() {
        None
    } else {
        Some(path)
    }
}

fn lower_class(parsed: &ParsedFile, node: &Node) -> Option<ClassOrObject> {
    let name = declaration_name(parsed, node).or_else(|| {
        // Unnamed companion objects are addressable as `Companion`.
        (node.kind() == "companion_object").then(|| "Companion".to_string())
    })?;

    let mut class = ClassOrObject::new(name, class_kind(node));
    class.supertypes = supertypes(parsed, node);
    class.primary_parameters = primary_parameters(parsed, node);

    let body = find_child(node, "class_body").or_else(|| find_child(node, "enum_class_body"));
    if let Some(body) = body {
        let mut cursor = body.walk();
        for member in body.children(&mut cursor) {
            match member.kind() {
                "property_declaration" => {
                    if let Some(name) = property_name(parsed, &member) {
                        class.properties.push(name);
                    }
                }
                "function_declaration" => {
                    if let Some(function) = lower_function(parsed, &member) {
                        class.functions.push(function);
                    }
                }
                "companion_object" => {
                    if let Some(companion) = lower_class(parsed, &member) {
                        class.companions.push(companion);
                    }
                }
                "class_declaration" | "interface_declaration" | "object_declaration"
                | "enum_declaration" => {
                    if let Some(nested) = lower_class(parsed, &member) {
                        class.nested.push(nested);
                    }
                }
                _ => {}
            }
        }
    }

    Some(class)
}

fn lower_function(parsed: &ParsedFile, node: &Node) -> Option<NamedFunction> {
    let name = declaration_name(parsed, node)?;
    let parameter_count = find_child(node, "function_value_parameters")
        .map(|params| count_parameters(&params))
        .unwrap_or(0);
    Some(NamedFunction::new(name, parameter_count))
}

fn class_kind(node: &Node) -> ClassKind {
    match node.kind() {
        "object_declaration" | "companion_object" => ClassKind::Object,
        "interface_declaration" => ClassKind::Interface,
        _ => {
            // `interface Foo` parses as a class_declaration with an
            // `interface` keyword child in some grammar versions.
            if find_child(node, "interface").is_some() {
                ClassKind::Interface
            } else {
                ClassKind::Class
            }
        }
    }
}

fn supertypes(parsed: &ParsedFile, node: &Node) -> Vec<SupertypeEntry> {
    let mut entries = Vec::new();

    let specifiers: Vec<Node> = match find_child(node, "delegation_specifiers") {
        Some(container) => {
            let mut cursor = container.walk();
            container
                .children(&mut cursor)
                .filter(|n| n.kind() == "delegation_specifier")
                .collect()
        }
        None => {
            let mut cursor = node.walk();
            node.children(&mut cursor)
                .filter(|n| n.kind() == "delegation_specifier")
                .collect()
        }
    };

    for specifier in specifiers {
        if let Some(invocation) = find_child(&specifier, "constructor_invocation") {
            let text = supertype_text(parsed, &invocation)
                .unwrap_or_else(|| parsed.node_text(&invocation).to_string());
            entries.push(SupertypeEntry::Call(text));
        } else if let Some(text) = supertype_text(parsed, &specifier) {
            entries.push(SupertypeEntry::Plain(text));
        }
    }

    entries
}

/// Raw text of the type reference inside a delegation specifier or
/// constructor invocation, without any argument list.
fn supertype_text(parsed: &ParsedFile, node: &Node) -> Option<String> {
    let type_node = find_child(node, "type")
        .or_else(|| find_child(node, "user_type"))
        .or_else(|| find_child(node, "identifier"))?;
    Some(parsed.node_text(&type_node).to_string())
}

fn primary_parameters(parsed: &ParsedFile, node: &Node) -> Vec<String> {
    let mut names = Vec::new();
    let Some(constructor) = find_child(node, "primary_constructor") else {
        return names;
    };

    let container = find_child(&constructor, "class_parameters").unwrap_or(constructor);
    let mut cursor = container.walk();
    for child in container.children(&mut cursor) {
        if child.kind() == "class_parameter" {
            if let Some(name) = identifier_text(parsed, &child) {
                names.push(name);
            }
        }
    }
    names
}

fn property_name(parsed: &ParsedFile, node: &Node) -> Option<String> {
    // Property names live inside a variable_declaration; interface property
    // signatures may carry the identifier directly.
    find_child(node, "variable_declaration")
        .and_then(|decl| identifier_text(parsed, &decl))
        .or_else(|| identifier_text(parsed, node))
}

fn declaration_name(parsed: &ParsedFile, node: &Node) -> Option<String> {
    node.child_by_field_name("name")
        .map(|n| parsed.node_text(&n).to_string())
        .filter(|n| !n.is_empty())
        .or_else(|| identifier_text(parsed, node))
}

fn identifier_text(parsed: &ParsedFile, node: &Node) -> Option<String> {
    find_child(node, "identifier")
        .map(|n| parsed.node_text(&n).to_string())
        .filter(|n| !n.is_empty())
}

fn find_child<'t>(node: &Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|n| n.kind() == kind);
    found
}

fn count_parameters(node: &Node) -> usize {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .filter(|n| n.kind().ends_with("parameter"))
        .count()
}
