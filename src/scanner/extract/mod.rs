//! Per-language symbol extraction.
//!
//! Each supported language has a `collect` function that inspects one
//! top-level syntax node and records the declarations it recognizes.
//! Dispatch is a `match` on [`Language`]; there is no extractor trait.
//! When the tree contains syntax errors, a line scan adds any column-0
//! declarations the tree lost.

mod ecmascript;
mod go;
mod java;
mod python;
mod recovery;
mod rust;

use tracing::warn;
use tree_sitter::{Node, Parser};

use super::language::Language;
use super::types::{Symbol, SymbolKind};
use crate::constants::MAX_SIGNATURE_CHARS;

/// Tree-sitter backed symbol extractor
///
/// Holds one parser that is re-targeted per call, so a single instance can
/// serve every file a thread processes.
pub struct Extractor {
    parser: Parser,
}

impl Extractor {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
        }
    }

    /// Extract top-level symbols from raw file bytes
    ///
    /// Content that is not valid UTF-8 yields no symbols.
    pub fn extract_bytes(&mut self, language: Language, content: &[u8]) -> Vec<Symbol> {
        match std::str::from_utf8(content) {
            Ok(source) => self.extract(language, source),
            Err(_) => Vec::new(),
        }
    }

    /// Extract top-level symbols from source text, in source order
    pub fn extract(&mut self, language: Language, source: &str) -> Vec<Symbol> {
        let Some(grammar) = language.grammar() else {
            return Vec::new();
        };

        if let Err(e) = self.parser.set_language(&grammar) {
            warn!("Failed to load {} grammar: {}", language, e);
            return Vec::new();
        }

        let Some(tree) = self.parser.parse(source, None) else {
            warn!("Parser gave up on {} source", language);
            return Vec::new();
        };

        let root = tree.root_node();
        let mut collector = Collector::new(source);
        visit_top_level(root, language, &mut collector);
        if root.has_error() {
            recovery::recover(language, source, &mut collector);
        }
        collector.finish()
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract symbols with a throwaway [`Extractor`]
pub fn extract(language: Language, source: &str) -> Vec<Symbol> {
    Extractor::new().extract(language, source)
}

/// Walk the root's children, descending into error-recovery nodes so that
/// declarations surrounding a syntax error are still found
fn visit_top_level(node: Node<'_>, language: Language, out: &mut Collector<'_>) {
    for child in named_children(node) {
        if child.is_error() {
            visit_top_level(child, language, out);
            continue;
        }

        match language {
            Language::TypeScript | Language::Tsx | Language::JavaScript => {
                ecmascript::collect(child, out)
            }
            Language::Python => python::collect(child, out),
            Language::Rust => rust::collect(child, out),
            Language::Go => go::collect(child, out),
            Language::Java => java::collect(child, out),
            Language::Unsupported => {}
        }
    }
}

/// Owned list of a node's named children
pub(crate) fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

/// Accumulates symbols for one file
pub(crate) struct Collector<'s> {
    source: &'s str,
    symbols: Vec<Symbol>,
}

impl<'s> Collector<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            source,
            symbols: Vec::new(),
        }
    }

    /// Record `decl` under the text of its `name` field
    pub(crate) fn named(&mut self, decl: Node<'_>, kind: SymbolKind) {
        if let Some(name) = decl.child_by_field_name("name") {
            self.push(name, decl, kind);
        }
    }

    /// Record a symbol whose name is `name_node` and whose extent is `decl`
    pub(crate) fn push(&mut self, name_node: Node<'_>, decl: Node<'_>, kind: SymbolKind) {
        let Some(mut name) = self.text(name_node).map(str::trim) else {
            return;
        };
        // `declare module "fs" {}`
        if name_node.kind() == "string" {
            name = name.trim_matches(|c| matches!(c, '"' | '\'' | '`'));
        }
        if name.is_empty() {
            return;
        }

        let start = name_node.start_position();
        let signature = self.text(decl).and_then(signature);
        self.symbols.push(Symbol {
            name: name.to_string(),
            kind,
            line: start.row + 1,
            column: start.column,
            end_line: decl.end_position().row + 1,
            signature,
        });
    }

    pub(crate) fn text(&self, node: Node<'_>) -> Option<&'s str> {
        node.utf8_text(self.source.as_bytes()).ok()
    }

    /// Record a declaration found on a source line rather than in the tree
    ///
    /// Skipped when the tree already produced a symbol on that line with the
    /// same name or kind.
    pub(crate) fn push_line(
        &mut self,
        line: usize,
        column: usize,
        name: &str,
        text: &str,
        kind: SymbolKind,
    ) {
        let known = self
            .symbols
            .iter()
            .any(|s| s.line == line && (s.name == name || s.kind == kind));
        if known {
            return;
        }

        self.symbols.push(Symbol {
            name: name.to_string(),
            kind,
            line,
            column,
            end_line: line,
            signature: signature(text),
        });
    }

    fn finish(mut self) -> Vec<Symbol> {
        // Stable sort keeps discovery order for symbols sharing a position
        self.symbols.sort_by_key(|s| (s.line, s.column));
        self.symbols
    }
}

/// First line of a declaration, without a trailing opening brace
fn signature(decl_text: &str) -> Option<String> {
    let first_line = decl_text.lines().next()?;
    let trimmed = first_line.trim().trim_end_matches('{').trim_end();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.chars().count() > MAX_SIGNATURE_CHARS {
        let mut cut: String = trimmed.chars().take(MAX_SIGNATURE_CHARS).collect();
        cut.push_str("...");
        Some(cut)
    } else {
        Some(trimmed.to_string())
    }
}
