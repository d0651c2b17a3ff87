use std::path::PathBuf;
use thiserror::Error;

/// Main error type for symscan
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Map an I/O failure on `path` to the matching variant
    pub fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path),
            _ => Self::Unreadable { path, source: err },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_from_io_not_found() {
        let err = ScanError::from_io("missing.rs", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, ScanError::NotFound(ref p) if p == &PathBuf::from("missing.rs")));
        assert_eq!(err.to_string(), "File not found: missing.rs");
    }

    #[test]
    fn test_from_io_other_is_unreadable() {
        let err = ScanError::from_io(
            "locked.py",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, ScanError::Unreadable { .. }));
        assert!(err.to_string().starts_with("Failed to read locked.py"));
    }
}
