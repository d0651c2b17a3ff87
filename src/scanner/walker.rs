use ignore::overrides::{Override, OverrideBuilder};
use ignore::{DirEntry, WalkBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::config::ScanConfig;
use super::language::Language;

/// A supported source file read from disk
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Path relative to the walk root, `/`-separated
    pub relative: String,
    pub language: Language,
    pub content: Vec<u8>,
}

/// Enumerates supported source files under a root directory
pub struct Walker {
    config: ScanConfig,
}

impl Walker {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Lazily yield every readable, supported file under `root`
    ///
    /// A root that is missing or not a directory yields nothing.
    pub fn walk<'a>(&'a self, root: &'a Path) -> impl Iterator<Item = SourceFile> + 'a {
        self.candidate_paths(root)
            .filter_map(move |path| self.read(root, &path))
    }

    /// Paths of supported files under `root`, in walk order
    pub fn candidates(&self, root: &Path) -> Vec<PathBuf> {
        self.candidate_paths(root).collect()
    }

    /// Read one candidate, or `None` if it is unsupported or unreadable
    pub fn read(&self, root: &Path, path: &Path) -> Option<SourceFile> {
        let language = Language::from_path(path);
        if !language.is_supported() {
            return None;
        }

        match fs::read(path) {
            Ok(content) => Some(SourceFile {
                path: path.to_path_buf(),
                relative: relative_path(root, path),
                language,
                content,
            }),
            Err(e) => {
                debug!("Skipping unreadable file {}: {}", path.display(), e);
                None
            }
        }
    }

    fn candidate_paths<'a>(&'a self, root: &'a Path) -> impl Iterator<Item = PathBuf> + 'a {
        let walk = if root.is_dir() {
            Some(self.builder(root).build())
        } else {
            debug!("Scan root {} is not a directory", root.display());
            None
        };

        walk.into_iter()
            .flatten()
            .filter_map(|result| match result {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!("Skipping entry: {}", e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
            .map(DirEntry::into_path)
            .filter(|path| Language::from_path(path).is_supported())
    }

    fn builder(&self, root: &Path) -> WalkBuilder {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(true)
            .hidden(!self.config.include_hidden)
            .parents(false)
            .ignore(self.config.respect_gitignore)
            .git_ignore(self.config.respect_gitignore)
            .git_global(self.config.respect_gitignore)
            .git_exclude(self.config.respect_gitignore)
            .require_git(false)
            .follow_links(self.config.follow_links)
            .max_depth(self.config.max_depth)
            .max_filesize(Some(self.config.max_file_size))
            .sort_by_file_name(|a, b| a.cmp(b));

        if let Some(overrides) = self.excludes(root) {
            builder.overrides(overrides);
        }

        let skip_dirs = self.config.skip_dirs.clone();
        builder.filter_entry(move |entry| {
            if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_dir()) {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            !skip_dirs.iter().any(|skip| skip.as_str() == name.as_ref())
        });

        builder
    }

    /// Negated override globs for the configured exclude patterns
    fn excludes(&self, root: &Path) -> Option<Override> {
        if self.config.exclude_patterns.is_empty() {
            return None;
        }

        let mut overrides = OverrideBuilder::new(root);
        for pattern in &self.config.exclude_patterns {
            if let Err(e) = overrides.add(&format!("!{}", pattern)) {
                warn!("Ignoring invalid exclude pattern {:?}: {}", pattern, e);
            }
        }

        match overrides.build() {
            Ok(built) => Some(built),
            Err(e) => {
                warn!("Failed to build exclude patterns: {}", e);
                None
            }
        }
    }
}

/// Render `path` relative to `root` with `/` separators
pub fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn relative_candidates(config: &ScanConfig, root: &Path) -> Vec<String> {
        Walker::new(config.clone())
            .candidates(root)
            .iter()
            .map(|p| relative_path(root, p))
            .collect()
    }

    #[test]
    fn test_walk_filters_unsupported_and_recurses() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "README.md", "# readme");
        write(root, "src/lib.rs", "fn a() {}");
        write(root, "src/nested/deep/util.py", "def b(): pass");
        write(root, "web/app.ts", "class C {}");
        write(root, "image.png", "not really");

        let walker = Walker::new(ScanConfig::default());
        let files: Vec<SourceFile> = walker.walk(root).collect();

        let mut relative: Vec<&str> = files.iter().map(|f| f.relative.as_str()).collect();
        relative.sort();
        assert_eq!(relative, vec!["src/lib.rs", "src/nested/deep/util.py", "web/app.ts"]);

        let lib = files.iter().find(|f| f.relative == "src/lib.rs").unwrap();
        assert_eq!(lib.language, Language::Rust);
        assert_eq!(lib.content, b"fn a() {}");
    }

    #[test]
    fn test_missing_root_yields_nothing() {
        let walker = Walker::new(ScanConfig::default());
        assert_eq!(walker.walk(Path::new("./imaginary/folder")).count(), 0);
    }

    #[test]
    fn test_file_root_yields_nothing() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "main.rs", "fn main() {}");

        let walker = Walker::new(ScanConfig::default());
        assert_eq!(walker.walk(&temp_dir.path().join("main.rs")).count(), 0);
    }

    #[test]
    fn test_skip_dirs_and_gitignore() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "node_modules/pkg/index.js", "function dep() {}");
        write(root, "target/debug/build.rs", "fn gen() {}");
        write(root, "generated/out.ts", "class Gen {}");
        write(root, ".gitignore", "generated/\n");
        write(root, "src/main.rs", "fn main() {}");

        let config = ScanConfig::default();
        assert_eq!(relative_candidates(&config, root), vec!["src/main.rs"]);

        let config = ScanConfig {
            respect_gitignore: false,
            skip_dirs: vec![],
            ..ScanConfig::default()
        };
        assert_eq!(relative_candidates(&config, root).len(), 4);
    }

    #[test]
    fn test_exclude_patterns_and_limits() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "keep.py", "def keep(): pass");
        write(root, "test_skip.py", "def skip(): pass");
        write(root, "a/b/c/deep.rs", "fn deep() {}");
        write(root, "big.js", &"x".repeat(64));

        let config = ScanConfig {
            exclude_patterns: vec!["test_*.py".to_string()],
            max_depth: Some(2),
            max_file_size: 32,
            ..ScanConfig::default()
        };
        assert_eq!(relative_candidates(&config, root), vec!["keep.py"]);
    }

    #[test]
    fn test_hidden_files_included_by_default() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, ".dot.py", "def dot(): pass");
        write(root, ".hidden/x.ts", "class X {}");
        write(root, ".git/hooks/pre.py", "def hook(): pass");
        write(root, "main.rs", "fn main() {}");

        let config = ScanConfig::default();
        assert!(config.include_hidden);
        assert_eq!(
            relative_candidates(&config, root),
            vec![".dot.py", ".hidden/x.ts", "main.rs"]
        );

        let config = ScanConfig {
            include_hidden: false,
            ..ScanConfig::default()
        };
        assert_eq!(relative_candidates(&config, root), vec!["main.rs"]);
    }

    #[test]
    fn test_walk_order_is_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "b.rs", "");
        write(root, "a.rs", "");
        write(root, "c.rs", "");

        let config = ScanConfig::default();
        assert_eq!(relative_candidates(&config, root), vec!["a.rs", "b.rs", "c.rs"]);
    }

    #[test]
    fn test_relative_path() {
        assert_eq!(
            relative_path(Path::new("/repo"), Path::new("/repo/src/lib.rs")),
            "src/lib.rs"
        );
        assert_eq!(
            relative_path(Path::new("/elsewhere"), Path::new("src/lib.rs")),
            "src/lib.rs"
        );
    }
}
