use std::path::Path;

/// Outcome of loading one candidate file. Never panics, never returns an
/// open-ended error type.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(String),
    /// The file exceeds the configured limit; no content bytes were read.
    TooLarge {
        size: u64,
        limit: u64,
    },
    /// Any I/O failure, reduced to its display string.
    Unreadable(String),
}

/// Read the source text for one candidate file, enforcing a maximum size.
///
/// The size check uses metadata only, so an oversized file is rejected
/// without reading its content.
pub fn read_source(path: &Path, max_bytes: u64) -> LoadOutcome {
    let size = match std::fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "stat failed");
            return LoadOutcome::Unreadable(e.to_string());
        }
    };

    if size > max_bytes {
        tracing::warn!(path = %path.display(), size, limit = max_bytes, "file too large");
        return LoadOutcome::TooLarge {
            size,
            limit: max_bytes,
        };
    }

    match std::fs::read_to_string(path) {
        Ok(content) => LoadOutcome::Loaded(content),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "read failed");
            LoadOutcome::Unreadable(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_source_ok() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("Card.tsx");
        std::fs::write(&path, "export const x = 1;").unwrap();

        match read_source(&path, 1024) {
            LoadOutcome::Loaded(content) => assert_eq!(content, "export const x = 1;"),
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[test]
    fn test_read_source_too_large() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("big.tsx");
        std::fs::write(&path, "x".repeat(100)).unwrap();

        match read_source(&path, 10) {
            LoadOutcome::TooLarge { size, limit } => {
                assert_eq!(size, 100);
                assert_eq!(limit, 10);
            }
            other => panic!("expected TooLarge, got {other:?}"),
        }
    }

    #[test]
    fn test_read_source_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nope.tsx");

        match read_source(&path, 1024) {
            LoadOutcome::Unreadable(msg) => assert!(!msg.is_empty()),
            other => panic!("expected Unreadable, got {other:?}"),
        }
    }

    #[test]
    fn test_exact_limit_is_loaded() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("edge.tsx");
        std::fs::write(&path, "x".repeat(10)).unwrap();

        assert!(matches!(read_source(&path, 10), LoadOutcome::Loaded(_)));
    }
}
