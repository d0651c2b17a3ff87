// Gateway module for scanner - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod config;
mod extract;
mod language;
mod orchestrator;
mod types;
mod walker;

// Public re-exports - the ONLY way to access scanner functionality
pub use config::ScanConfig;
pub use extract::{extract, Extractor};
pub use language::Language;
pub use orchestrator::{ast_of_file, scan_project, Scanner};
pub use types::{FileReport, ScanReport, Symbol, SymbolKind};
pub use walker::{relative_path, SourceFile, Walker};
