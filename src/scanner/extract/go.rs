use tree_sitter::Node;

use super::{named_children, Collector};
use crate::scanner::types::SymbolKind;

pub(super) fn collect(node: Node<'_>, out: &mut Collector<'_>) {
    match node.kind() {
        "function_declaration" => out.named(node, SymbolKind::Function),
        "method_declaration" => out.named(node, SymbolKind::Method),
        // `type ( A struct{}; B = int )` groups several specs
        "type_declaration" => {
            for spec in named_children(node) {
                match spec.kind() {
                    "type_spec" => out.named(spec, type_spec_kind(spec)),
                    "type_alias" => out.named(spec, SymbolKind::Type),
                    _ => {}
                }
            }
        }
        _ => {}
    }
}

fn type_spec_kind(spec: Node<'_>) -> SymbolKind {
    match spec.child_by_field_name("type").map(|t| t.kind()) {
        Some("struct_type") => SymbolKind::Struct,
        Some("interface_type") => SymbolKind::Interface,
        _ => SymbolKind::Type,
    }
}
