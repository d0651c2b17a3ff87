use tree_sitter::Node;

use super::{named_children, Collector};
use crate::scanner::types::SymbolKind;

pub(super) fn collect(node: Node<'_>, out: &mut Collector<'_>) {
    let kind = match node.kind() {
        "class_declaration" | "record_declaration" => SymbolKind::Class,
        "interface_declaration" | "annotation_type_declaration" => SymbolKind::Interface,
        "enum_declaration" => SymbolKind::Enum,
        _ => return,
    };
    out.named(node, kind);

    if let Some(body) = node.child_by_field_name("body") {
        collect_members(body, out);
    }
}

fn collect_members(body: Node<'_>, out: &mut Collector<'_>) {
    for member in named_children(body) {
        match member.kind() {
            "method_declaration" | "constructor_declaration" => {
                out.named(member, SymbolKind::Method)
            }
            // Methods of an enum follow its constants
            "enum_body_declarations" => collect_members(member, out),
            _ => {}
        }
    }
}
