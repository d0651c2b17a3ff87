//! JavaScript, TypeScript and TSX declarations.

use tree_sitter::Node;

use super::{named_children, Collector};
use crate::scanner::types::SymbolKind;

pub(super) fn collect(node: Node<'_>, out: &mut Collector<'_>) {
    match node.kind() {
        "export_statement" => {
            if let Some(decl) = node.child_by_field_name("declaration") {
                collect(decl, out);
            } else if let Some(value) = node.child_by_field_name("value") {
                // `export default function name() {}` read as an expression
                match value.kind() {
                    "function_expression" | "function" | "generator_function" => {
                        out.named(value, SymbolKind::Function)
                    }
                    "class" => out.named(value, SymbolKind::Class),
                    _ => {}
                }
            }
        }
        // `declare function ...`, `declare class ...`
        "ambient_declaration" => {
            for child in named_children(node) {
                collect(child, out);
            }
        }
        // `namespace Foo {}` parses as an expression statement
        "expression_statement" => {
            for child in named_children(node) {
                if child.kind() == "internal_module" {
                    out.named(child, SymbolKind::Module);
                }
            }
        }
        "function_declaration" | "generator_function_declaration" | "function_signature" => {
            out.named(node, SymbolKind::Function)
        }
        "class_declaration" | "abstract_class_declaration" => {
            out.named(node, SymbolKind::Class);
            collect_methods(node, out);
        }
        "interface_declaration" => out.named(node, SymbolKind::Interface),
        "type_alias_declaration" => out.named(node, SymbolKind::Type),
        "enum_declaration" => out.named(node, SymbolKind::Enum),
        "module" | "internal_module" => out.named(node, SymbolKind::Module),
        "lexical_declaration" | "variable_declaration" => collect_bindings(node, out),
        _ => {}
    }
}

/// `const name = () => ...`, `let name = function () ...`, `var Name = class ...`
fn collect_bindings(node: Node<'_>, out: &mut Collector<'_>) {
    for declarator in named_children(node) {
        if declarator.kind() != "variable_declarator" {
            continue;
        }
        let (Some(name), Some(value)) = (
            declarator.child_by_field_name("name"),
            declarator.child_by_field_name("value"),
        ) else {
            continue;
        };
        // Destructuring patterns bind no single name
        if name.kind() != "identifier" {
            continue;
        }

        match value.kind() {
            "arrow_function" | "function_expression" | "function" | "generator_function" => {
                out.push(name, declarator, SymbolKind::Function)
            }
            "class" => out.push(name, declarator, SymbolKind::Class),
            _ => {}
        }
    }
}

fn collect_methods(class: Node<'_>, out: &mut Collector<'_>) {
    let Some(body) = class.child_by_field_name("body") else {
        return;
    };
    for member in named_children(body) {
        if matches!(
            member.kind(),
            "method_definition" | "method_signature" | "abstract_method_signature"
        ) {
            out.named(member, SymbolKind::Method);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::scanner::extract::test_support::names_and_kinds;
    use crate::scanner::language::Language;
    use crate::scanner::types::SymbolKind::{self, *};
    use pretty_assertions::assert_eq;

    fn pairs(items: &[(&str, SymbolKind)]) -> Vec<(String, SymbolKind)> {
        items.iter().map(|(n, k)| (n.to_string(), *k)).collect()
    }

    #[test]
    fn test_typescript_calculator() {
        let source = r#"
export class Calculator {
    private total: number = 0;

    add(value: number): Calculator {
        this.total += value;
        return this;
    }
}

export function sqrt(x: number): number {
    return Math.sqrt(x);
}
"#;
        assert_eq!(
            names_and_kinds(Language::TypeScript, source),
            pairs(&[("Calculator", Class), ("add", Method), ("sqrt", Function)])
        );
    }

    #[test]
    fn test_typescript_type_declarations() {
        let source = r#"
interface Shape {
    area(): number;
}

type Point = { x: number; y: number };

enum Color { Red, Green }
"#;
        assert_eq!(
            names_and_kinds(Language::TypeScript, source),
            pairs(&[("Shape", Interface), ("Point", Type), ("Color", Enum)])
        );
    }

    #[test]
    fn test_arrow_functions_bound_at_top_level() {
        let source = r#"
export const double = (n: number) => n * 2;
const greet = async (name: string) => {
    const inner = () => name;
    return inner();
};
const LIMIT = 10;
"#;
        assert_eq!(
            names_and_kinds(Language::TypeScript, source),
            pairs(&[("double", Function), ("greet", Function)])
        );
    }

    #[test]
    fn test_javascript_declarations() {
        let source = r#"
import fs from 'fs';

class Reader {
    constructor(path) { this.path = path; }
    read() { return fs.readFileSync(this.path); }
}

function* ids() { yield 1; }

var legacy = function () {};

module.exports = { Reader };
"#;
        assert_eq!(
            names_and_kinds(Language::JavaScript, source),
            pairs(&[
                ("Reader", Class),
                ("constructor", Method),
                ("read", Method),
                ("ids", Function),
                ("legacy", Function),
            ])
        );
    }

    #[test]
    fn test_nested_functions_are_skipped() {
        let source = r#"
function outer() {
    function inner() {}
    return inner;
}
"#;
        assert_eq!(
            names_and_kinds(Language::JavaScript, source),
            pairs(&[("outer", Function)])
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let source = "function twice() {}\nfunction twice() {}\n";
        assert_eq!(
            names_and_kinds(Language::JavaScript, source),
            pairs(&[("twice", Function), ("twice", Function)])
        );
    }

    #[test]
    fn test_tsx_component() {
        let source = r#"
export default function App() {
    return <div className="app">hello</div>;
}
"#;
        assert_eq!(
            names_and_kinds(Language::Tsx, source),
            pairs(&[("App", Function)])
        );
    }

    #[test]
    fn test_malformed_source_keeps_recognizable_symbols() {
        let source = "class Good {}\n\nfunction ok() { return 1; }\n\nconst broken = (((;\n";
        let found = names_and_kinds(Language::JavaScript, source);
        assert!(found.contains(&("Good".to_string(), Class)));
        assert!(found.contains(&("ok".to_string(), Function)));
    }

    #[test]
    fn test_ambient_module_name_is_unquoted() {
        let source = "declare module \"fs-extra\" {\n    export function copy(a: string): void;\n}\ndeclare module 'path' {}\n";
        assert_eq!(
            names_and_kinds(Language::TypeScript, source),
            pairs(&[("fs-extra", Module), ("path", Module)])
        );
    }
}
