/// Constants module to avoid magic numbers in the codebase

// Scanning limits
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024; // 1MB
pub const MAX_SIGNATURE_CHARS: usize = 160;

// Configuration
pub const APP_NAME: &str = "symscan";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOCAL_CONFIG_DIR: &str = ".symscan";
pub const ENV_PREFIX: &str = "SYMSCAN_";

// Directories that never hold first-party source
pub const DEFAULT_SKIP_DIRS: &[&str] = &[
    "node_modules",
    "target",
    "dist",
    "build",
    ".git",
    ".svn",
    ".hg",
    "venv",
    ".venv",
    "__pycache__",
    ".pytest_cache",
    ".mypy_cache",
    ".ruff_cache",
    ".tox",
    "vendor",
    "bower_components",
    ".idea",
    ".vscode",
    "coverage",
    ".gradle",
    ".cargo",
];
