use tree_sitter::Node;

use super::{named_children, Collector};
use crate::scanner::types::SymbolKind;

pub(super) fn collect(node: Node<'_>, out: &mut Collector<'_>) {
    match node.kind() {
        "function_item" => out.named(node, SymbolKind::Function),
        "struct_item" | "union_item" => out.named(node, SymbolKind::Struct),
        "enum_item" => out.named(node, SymbolKind::Enum),
        "type_item" => out.named(node, SymbolKind::Type),
        "mod_item" => out.named(node, SymbolKind::Module),
        "trait_item" => {
            out.named(node, SymbolKind::Trait);
            collect_methods(node, out);
        }
        "impl_item" => {
            if let Some(name) = node.child_by_field_name("type").map(impl_target) {
                out.push(name, node, SymbolKind::Impl);
            }
            collect_methods(node, out);
        }
        _ => {}
    }
}

/// The bare type name of `impl<T> path::Name<T>` or `impl Trait for &'a Name`
fn impl_target(ty: Node<'_>) -> Node<'_> {
    match ty.kind() {
        "generic_type" | "reference_type" => {
            ty.child_by_field_name("type").map_or(ty, impl_target)
        }
        "scoped_type_identifier" => ty.child_by_field_name("name").unwrap_or(ty),
        _ => ty,
    }
}

fn collect_methods(container: Node<'_>, out: &mut Collector<'_>) {
    let Some(body) = container.child_by_field_name("body") else {
        return;
    };
    for item in named_children(body) {
        if matches!(item.kind(), "function_item" | "function_signature_item") {
            out.named(item, SymbolKind::Method);
        }
    }
}
