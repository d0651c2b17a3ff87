use tree_sitter::Node;

use super::{named_children, Collector};
use crate::scanner::types::SymbolKind;

pub(super) fn collect(node: Node<'_>, out: &mut Collector<'_>) {
    match unwrap_decorators(node) {
        Some(def) if def.kind() == "function_definition" => {
            out.named(def, SymbolKind::Function)
        }
        Some(def) if def.kind() == "class_definition" => {
            out.named(def, SymbolKind::Class);
            collect_methods(def, out);
        }
        _ => {}
    }
}

/// Methods defined directly in a top-level class body
fn collect_methods(class: Node<'_>, out: &mut Collector<'_>) {
    let Some(body) = class.child_by_field_name("body") else {
        return;
    };
    for stmt in named_children(body) {
        if let Some(def) = unwrap_decorators(stmt) {
            if def.kind() == "function_definition" {
                out.named(def, SymbolKind::Method);
            }
        }
    }
}

/// `@decorator` wraps the real definition one level down
fn unwrap_decorators(node: Node<'_>) -> Option<Node<'_>> {
    match node.kind() {
        "decorated_definition" => node.child_by_field_name("definition"),
        "function_definition" | "class_definition" => Some(node),
        _ => None,
    }
}
