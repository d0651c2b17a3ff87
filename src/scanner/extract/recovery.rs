//! Line-anchored declaration scan for sources the parser could not fully
//! recover.
//!
//! Tree-sitter's error recovery sometimes folds the declarations that follow
//! a syntax error into expression nodes. Only lines that start at column 0
//! are considered, so everything reported here is top-level by construction.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Collector;
use crate::scanner::language::Language;
use crate::scanner::types::SymbolKind;

/// A declaration pattern; the `name` group captures the symbol name
struct Rule {
    regex: Regex,
    kind: SymbolKind,
}

fn rules(patterns: &[(&str, SymbolKind)]) -> Vec<Rule> {
    patterns
        .iter()
        .filter_map(|(pattern, kind)| {
            Regex::new(pattern).ok().map(|regex| Rule { regex, kind: *kind })
        })
        .collect()
}

const RUST_VIS: &str = r"(?:pub(?:\([^)]*\))?\s+)?";

static RUST_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    let fn_rule = format!(
        r#"^{RUST_VIS}(?:(?:const|async|unsafe|extern(?:\s+"[^"]*")?)\s+)*fn\s+(?P<name>[A-Za-z_]\w*)"#
    );
    let struct_rule = format!(r"^{RUST_VIS}(?:struct|union)\s+(?P<name>[A-Za-z_]\w*)");
    let enum_rule = format!(r"^{RUST_VIS}enum\s+(?P<name>[A-Za-z_]\w*)");
    let trait_rule = format!(r"^{RUST_VIS}(?:unsafe\s+)?(?:auto\s+)?trait\s+(?P<name>[A-Za-z_]\w*)");
    let type_rule = format!(r"^{RUST_VIS}type\s+(?P<name>[A-Za-z_]\w*)");
    let mod_rule = format!(r"^{RUST_VIS}mod\s+(?P<name>[A-Za-z_]\w*)");
    rules(&[
        (fn_rule.as_str(), SymbolKind::Function),
        (struct_rule.as_str(), SymbolKind::Struct),
        (enum_rule.as_str(), SymbolKind::Enum),
        (trait_rule.as_str(), SymbolKind::Trait),
        (type_rule.as_str(), SymbolKind::Type),
        (mod_rule.as_str(), SymbolKind::Module),
        (
            r"^(?:unsafe\s+)?impl(?:<[^>]*>)?\s+(?:[\w:<>,&' ]+?\s+for\s+)?&?(?:'\w+\s+)?(?:mut\s+)?(?:\w+::)*(?P<name>[A-Za-z_]\w*)",
            SymbolKind::Impl,
        ),
    ])
});

static PYTHON_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    rules(&[
        (r"^(?:async\s+)?def\s+(?P<name>[A-Za-z_]\w*)", SymbolKind::Function),
        (r"^class\s+(?P<name>[A-Za-z_]\w*)", SymbolKind::Class),
    ])
});

const JS_PREFIX: &str = r"^(?:export\s+)?(?:default\s+)?(?:declare\s+)?";
const JS_IDENT: &str = r"[A-Za-z_$][\w$]*";

static ECMASCRIPT_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    let function = format!(r"{JS_PREFIX}(?:async\s+)?function\s*\*?\s*(?P<name>{JS_IDENT})");
    let class = format!(r"{JS_PREFIX}(?:abstract\s+)?class\s+(?P<name>{JS_IDENT})");
    let binding = format!(
        r"{JS_PREFIX}(?:const|let|var)\s+(?P<name>{JS_IDENT})\s*(?::[^=]+)?=\s*(?:async\s+)?(?:function\b|\([^)]*\)\s*(?::[^=]+)?=>|{JS_IDENT}\s*=>)"
    );
    rules(&[
        (function.as_str(), SymbolKind::Function),
        (class.as_str(), SymbolKind::Class),
        (binding.as_str(), SymbolKind::Function),
    ])
});

static TYPESCRIPT_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    let interface = format!(r"{JS_PREFIX}interface\s+(?P<name>{JS_IDENT})");
    let alias = format!(r"{JS_PREFIX}type\s+(?P<name>{JS_IDENT})\s*(?:<[^=]*>)?\s*=");
    let enumeration = format!(r"{JS_PREFIX}(?:const\s+)?enum\s+(?P<name>{JS_IDENT})");
    let module = format!(r"{JS_PREFIX}(?:namespace|module)\s+(?P<name>{JS_IDENT}(?:\.{JS_IDENT})*)");
    rules(&[
        (interface.as_str(), SymbolKind::Interface),
        (alias.as_str(), SymbolKind::Type),
        (enumeration.as_str(), SymbolKind::Enum),
        (module.as_str(), SymbolKind::Module),
    ])
});

static GO_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    rules(&[
        (r"^func\s*\([^)]*\)\s*(?P<name>[A-Za-z_]\w*)", SymbolKind::Method),
        (r"^func\s+(?P<name>[A-Za-z_]\w*)", SymbolKind::Function),
        (r"^type\s+(?P<name>[A-Za-z_]\w*)(?:\[[^\]]*\])?\s+struct\b", SymbolKind::Struct),
        (r"^type\s+(?P<name>[A-Za-z_]\w*)(?:\[[^\]]*\])?\s+interface\b", SymbolKind::Interface),
        (r"^type\s+(?P<name>[A-Za-z_]\w*)", SymbolKind::Type),
    ])
});

const JAVA_MODIFIERS: &str =
    r"^(?:@\w+(?:\([^)]*\))?\s+)*(?:(?:public|protected|private|abstract|final|static|sealed|non-sealed|strictfp)\s+)*";

static JAVA_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    let class = format!(r"{JAVA_MODIFIERS}(?:class|record)\s+(?P<name>[A-Za-z_$][\w$]*)");
    let interface = format!(r"{JAVA_MODIFIERS}(?:interface|@interface)\s+(?P<name>[A-Za-z_$][\w$]*)");
    let enumeration = format!(r"{JAVA_MODIFIERS}enum\s+(?P<name>[A-Za-z_$][\w$]*)");
    rules(&[
        (class.as_str(), SymbolKind::Class),
        (interface.as_str(), SymbolKind::Interface),
        (enumeration.as_str(), SymbolKind::Enum),
    ])
});

fn rule_sets(language: Language) -> Vec<&'static [Rule]> {
    match language {
        Language::Rust => vec![RUST_RULES.as_slice()],
        Language::Python => vec![PYTHON_RULES.as_slice()],
        Language::JavaScript => vec![ECMASCRIPT_RULES.as_slice()],
        Language::TypeScript | Language::Tsx => {
            vec![ECMASCRIPT_RULES.as_slice(), TYPESCRIPT_RULES.as_slice()]
        }
        Language::Go => vec![GO_RULES.as_slice()],
        Language::Java => vec![JAVA_RULES.as_slice()],
        Language::Unsupported => Vec::new(),
    }
}

/// Add column-0 declarations the syntax tree did not yield
///
/// The first matching rule wins for each line.
pub(super) fn recover(language: Language, source: &str, out: &mut Collector<'_>) {
    let sets = rule_sets(language);
    if sets.is_empty() {
        return;
    }

    for (idx, line) in source.lines().enumerate() {
        if line.starts_with(char::is_whitespace) || line.is_empty() {
            continue;
        }

        let found = sets.iter().flat_map(|set| set.iter()).find_map(|rule| {
            let name = rule.regex.captures(line)?.name("name")?;
            Some((name, rule.kind))
        });
        if let Some((name, kind)) = found {
            out.push_line(idx + 1, name.start(), name.as_str(), line, kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_rule_compiles() {
        assert_eq!(RUST_RULES.len(), 7);
        assert_eq!(PYTHON_RULES.len(), 2);
        assert_eq!(ECMASCRIPT_RULES.len(), 3);
        assert_eq!(TYPESCRIPT_RULES.len(), 4);
        assert_eq!(GO_RULES.len(), 5);
        assert_eq!(JAVA_RULES.len(), 3);
    }

    #[test]
    fn test_rust_impl_rule_names_the_self_type() {
        for (line, expected) in [
            ("impl Engine {", "Engine"),
            ("impl<T> Display for Wrapper<T> {", "Wrapper"),
            ("impl<'a> From<&'a str> for &'a mut Buffer {", "Buffer"),
            ("impl fmt::Debug for crate::io::Reader {", "Reader"),
        ] {
            let name = RUST_RULES
                .iter()
                .find_map(|rule| rule.regex.captures(line)?.name("name"))
                .map(|m| m.as_str());
            assert_eq!(name, Some(expected), "{}", line);
        }
    }

    #[test]
    fn test_go_method_wins_over_function() {
        let line = "func (s *Server) Start() error {";
        let kind = GO_RULES
            .iter()
            .find(|rule| rule.regex.is_match(line))
            .map(|rule| rule.kind);
        assert_eq!(kind, Some(SymbolKind::Method));
    }
}
