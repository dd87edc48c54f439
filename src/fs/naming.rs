//! Filename generation and manipulation.

use crate::api::FileDescriptor;
use crate::error::{Error, Result};

/// Replace characters that cannot appear in a single path component.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// Name a file is saved under: `<content_hash> <preferred name>`.
///
/// The hash comes first so files with equal names do not collide.
pub fn file_name_for(file: &FileDescriptor) -> Result<String> {
    let hash = file.content_hash.trim();
    if hash.is_empty() {
        return Err(Error::InvalidFilename(format!(
            "No content hash for {}",
            file.remote_path
        )));
    }

    Ok(format!(
        "{} {}",
        sanitize_filename(hash),
        sanitize_filename(file.preferred_name())
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(name: &str, full_name: Option<&str>, hash: &str) -> FileDescriptor {
        FileDescriptor {
            remote_path: "/b/src/1/1.png".into(),
            display_name: name.into(),
            full_name: full_name.map(str::to_string),
            content_hash: hash.into(),
            type_code: 1,
        }
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("normal.png"), "normal.png");
        assert_eq!(sanitize_filename("a/b\\c.png"), "a_b_c.png");
        assert_eq!(sanitize_filename("tab\there"), "tab_here");
        assert_eq!(sanitize_filename("кот: 1.jpg"), "кот: 1.jpg");
    }

    #[test]
    fn test_file_name_prefers_full_name() {
        let file = descriptor("1.png", Some("cat.png"), "d41d8cd9");
        assert_eq!(file_name_for(&file).unwrap(), "d41d8cd9 cat.png");
    }

    #[test]
    fn test_file_name_falls_back_to_name() {
        let file = descriptor("1.png", None, "d41d8cd9");
        assert_eq!(file_name_for(&file).unwrap(), "d41d8cd9 1.png");

        let file = descriptor("1.png", Some(""), "d41d8cd9");
        assert_eq!(file_name_for(&file).unwrap(), "d41d8cd9 1.png");
    }

    #[test]
    fn test_traversal_stays_in_directory() {
        let file = descriptor("x", Some("../../etc/passwd"), "abc");
        let name = file_name_for(&file).unwrap();
        assert_eq!(name, "abc .._.._etc_passwd");
        assert!(!name.contains('/'));
    }

    #[test]
    fn test_empty_hash_rejected() {
        let file = descriptor("1.png", None, " ");
        assert!(file_name_for(&file).is_err());
    }
}
