use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbol types we extract from code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Function,
    Method,
    Class,
    Struct,
    Enum,
    Interface,
    Trait,
    Impl,
    Type,
    Module,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Function => "function",
            Self::Method => "method",
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Enum => "enum",
            Self::Interface => "interface",
            Self::Trait => "trait",
            Self::Impl => "impl",
            Self::Type => "type",
            Self::Module => "module",
        };
        f.write_str(label)
    }
}

/// A top-level declaration found in a source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    /// 1-based line of the declaration's name
    pub line: usize,
    /// 0-based column of the declaration's name
    pub column: usize,
    /// 1-based last line of the whole declaration
    pub end_line: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

/// Symbols for one scanned file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    /// Path relative to the scan root, `/`-separated
    pub path: String,
    pub language: String,
    pub size_bytes: u64,
    pub symbols: Vec<Symbol>,
}

/// Result of a whole-project scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub root_dir: String,
    pub files_scanned: usize,
    pub duration_ms: f64,
    pub files: Vec<FileReport>,
}

impl ScanReport {
    /// An empty report for `root_dir`
    pub fn empty(root_dir: impl Into<String>, duration_ms: f64) -> Self {
        Self {
            root_dir: root_dir.into(),
            files_scanned: 0,
            duration_ms,
            files: Vec::new(),
        }
    }

    /// Total number of symbols across all files
    pub fn total_symbols(&self) -> usize {
        self.files.iter().map(|f| f.symbols.len()).sum()
    }

    /// Look up a file report by its relative path
    pub fn file(&self, path: &str) -> Option<&FileReport> {
        self.files.iter().find(|f| f.path == path)
    }
}
