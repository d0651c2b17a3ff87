use rayon::prelude::*;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::config::ScanConfig;
use super::extract::Extractor;
use super::language::Language;
use super::types::{FileReport, ScanReport, Symbol};
use super::walker::{SourceFile, Walker};
use crate::utils::ScanError;

/// Drives the walker and extractors to build scan reports
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    /// Create a scanner with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan every supported file under `root`
    ///
    /// Never fails: a missing root gives an empty report and unreadable
    /// files are left out.
    pub fn scan_project(&self, root: impl AsRef<Path>) -> ScanReport {
        let root = root.as_ref();
        let start = Instant::now();

        let walker = Walker::new(self.config.clone());
        let files = if self.config.parallel {
            self.scan_parallel(&walker, root)
        } else {
            scan_sequential(&walker, root)
        };

        let duration_ms = start.elapsed().as_secs_f64() * 1000.0;
        info!(
            "Scanned {} files under {} in {:.2}ms",
            files.len(),
            root.display(),
            duration_ms
        );

        ScanReport {
            root_dir: root.to_string_lossy().to_string(),
            files_scanned: files.len(),
            duration_ms,
            files,
        }
    }

    /// Symbols of a single file
    ///
    /// Unlike [`Scanner::scan_project`] this reports a missing or unreadable
    /// path. Files in an unsupported language give an empty list.
    pub fn ast_of_file(&self, path: impl AsRef<Path>) -> Result<Vec<Symbol>, ScanError> {
        let path = path.as_ref();
        let content = fs::read(path).map_err(|e| ScanError::from_io(path, e))?;

        let language = Language::from_path(path);
        if !language.is_supported() {
            debug!("No extractor for {}", path.display());
            return Ok(Vec::new());
        }

        Ok(Extractor::new().extract_bytes(language, &content))
    }

    fn scan_parallel(&self, walker: &Walker, root: &Path) -> Vec<FileReport> {
        let paths = walker.candidates(root);

        // One extractor per rayon job; the indexed collect keeps walk order
        let run = || -> Vec<FileReport> {
            let reports: Vec<Option<FileReport>> = paths
                .par_iter()
                .map_init(Extractor::new, |extractor, path| {
                    walker
                        .read(root, path)
                        .map(|file| file_report(extractor, file))
                })
                .collect();
            reports.into_iter().flatten().collect()
        };

        match self.config.threads {
            Some(threads) => match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
                Ok(pool) => pool.install(run),
                Err(e) => {
                    warn!("Failed to build {}-thread pool, using global pool: {}", threads, e);
                    run()
                }
            },
            None => run(),
        }
    }
}

fn scan_sequential(walker: &Walker, root: &Path) -> Vec<FileReport> {
    let mut extractor = Extractor::new();
    walker
        .walk(root)
        .map(|file| file_report(&mut extractor, file))
        .collect()
}

fn file_report(extractor: &mut Extractor, file: SourceFile) -> FileReport {
    let symbols = extractor.extract_bytes(file.language, &file.content);
    FileReport {
        path: file.relative,
        language: file.language.name().to_string(),
        size_bytes: file.content.len() as u64,
        symbols,
    }
}

/// Scan `root` with the default configuration
pub fn scan_project(root: impl AsRef<Path>) -> ScanReport {
    Scanner::new().scan_project(root)
}

/// Extract the symbols of one file with the default configuration
pub fn ast_of_file(path: impl AsRef<Path>) -> Result<Vec<Symbol>, ScanError> {
    Scanner::new().ast_of_file(path)
}
