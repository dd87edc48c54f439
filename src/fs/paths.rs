//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Directory a board's threads are saved under.
pub fn board_dir(base: &Path, board: &str) -> PathBuf {
    base.join(board)
}

/// Directory a thread's files are saved under.
pub fn thread_dir(base: &Path, board: &str, thread_id: u64) -> PathBuf {
    board_dir(base, board).join(thread_id.to_string())
}

/// Ensure a directory exists, creating it if necessary.
///
/// Returns whether the directory was created by this call.
pub fn ensure_dir(path: &Path) -> Result<bool> {
    if path.is_dir() {
        tracing::debug!("Directory {} already exists", path.display());
        return Ok(false);
    }
    std::fs::create_dir_all(path)?;
    tracing::debug!("Created directory {}", path.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_dir_layout() {
        let path = thread_dir(Path::new("/downloads"), "b", 123);
        assert_eq!(path, PathBuf::from("/downloads/b/123"));
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let temp = tempfile::tempdir().unwrap();
        let path = thread_dir(temp.path(), "b", 1);

        assert!(ensure_dir(&path).unwrap());
        assert!(!ensure_dir(&path).unwrap());
        assert!(path.is_dir());
    }

    #[test]
    fn test_ensure_dir_over_file_fails() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("b");
        std::fs::write(&path, b"not a dir").unwrap();

        assert!(ensure_dir(&path).is_err());
    }
}
