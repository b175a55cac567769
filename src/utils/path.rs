//! Target directory validation

use std::ffi::OsStr;
use std::path::{is_separator, PathBuf};

use crate::error::{Error, Result};

/// Remove exactly one trailing path separator.
///
/// A lone separator is the filesystem root and is returned as is.
pub fn strip_trailing_separator(path: &OsStr) -> &OsStr {
    match path.as_encoded_bytes().split_last() {
        Some((&last, rest)) if !rest.is_empty() && is_separator(char::from(last)) => {
            // SAFETY: `rest` ends right before an ASCII separator, a valid split point
            unsafe { OsStr::from_encoded_bytes_unchecked(rest) }
        }
        _ => path,
    }
}

/// Normalize the user supplied directory and make sure it is an existing directory.
pub fn validate_target_dir(arg: &OsStr) -> Result<PathBuf> {
    let path = PathBuf::from(strip_trailing_separator(arg));

    let metadata = std::fs::metadata(&path).map_err(|e| Error::InvalidPath {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    if !metadata.is_dir() {
        return Err(Error::InvalidPath {
            path,
            reason: "no such directory".to_string(),
        });
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn strip(path: &str) -> &OsStr {
        strip_trailing_separator(OsStr::new(path))
    }

    #[test]
    fn test_strip_single_trailing_separator() {
        assert_eq!(strip("/home/u/go/"), "/home/u/go");
        assert_eq!(strip("/home/u/go//"), "/home/u/go/");
        assert_eq!(strip("/home/u/go"), "/home/u/go");
        assert_eq!(strip("go/"), "go");
    }

    #[test]
    fn test_strip_keeps_root() {
        assert_eq!(strip("/"), "/");
        assert_eq!(strip(""), "");
    }

    #[cfg(unix)]
    #[test]
    fn test_strip_non_utf8() {
        use std::os::unix::ffi::OsStrExt;

        let path = OsStr::from_bytes(b"/tmp/caf\xe9/");
        assert_eq!(
            strip_trailing_separator(path),
            OsStr::from_bytes(b"/tmp/caf\xe9")
        );
    }

    #[test]
    fn test_both_forms_validate_to_same_path() {
        let dir = tempdir().unwrap();
        let plain = dir.path().to_str().unwrap().to_string();
        let slashed = format!("{}/", plain);

        let a = validate_target_dir(OsStr::new(&plain)).unwrap();
        let b = validate_target_dir(OsStr::new(&slashed)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, PathBuf::from(&plain));
    }

    #[test]
    fn test_missing_path_rejected() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = validate_target_dir(missing.as_os_str()).unwrap_err();
        assert!(matches!(err, Error::InvalidPath { .. }));
    }

    #[test]
    fn test_regular_file_rejected() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("file.txt");
        std::fs::write(&file, "x").unwrap();

        let err = validate_target_dir(file.as_os_str()).unwrap_err();
        match err {
            Error::InvalidPath { reason, .. } => assert_eq!(reason, "no such directory"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_argument_rejected() {
        assert!(matches!(
            validate_target_dir(OsStr::new("")),
            Err(Error::InvalidPath { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_permission_denied_rejected() {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let sub = dir.path().join("sub");
        std::fs::create_dir_all(sub.join("x")).unwrap();
        std::fs::set_permissions(&sub, Permissions::from_mode(0o000)).unwrap();

        // root ignores directory permissions
        let locked = std::fs::read_dir(&sub).is_err();
        let result = validate_target_dir(sub.join("x").as_os_str());
        std::fs::set_permissions(&sub, Permissions::from_mode(0o755)).unwrap();

        if locked {
            match result {
                Err(Error::InvalidPath { reason, .. }) => {
                    assert!(reason.contains("ermission denied"), "{reason}")
                }
                other => panic!("unexpected result: {other:?}"),
            }
        }
    }
}
