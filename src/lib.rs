pub mod app;
pub mod cli;
pub mod constants;
pub mod scanner;
pub mod utils;

pub use app::{load_config, Config};
pub use scanner::{
    ast_of_file, scan_project, FileReport, Language, ScanConfig, ScanReport, Scanner, Symbol,
    SymbolKind,
};
pub use utils::ScanError;
