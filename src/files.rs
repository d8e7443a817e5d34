// Reading input papers and writing the result file.
//
// Only UTF-8 `.txt` files are accepted on either side. Each failure mode is
// its own variant so the CLI can report exactly what went wrong.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::output::format_rate;

#[derive(Debug, Error)]
pub enum FileError {
    #[error("only .txt files are supported: {0}")]
    NotTxt(PathBuf),

    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("file must be UTF-8 encoded: {0}")]
    NotUtf8(PathBuf),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Whether `path` has a `.txt` extension (any case).
pub fn is_txt(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
}

/// Read a UTF-8 `.txt` file into a string.
pub fn read_txt_file(path: &Path) -> Result<String, FileError> {
    if !is_txt(path) {
        return Err(FileError::NotTxt(path.to_path_buf()));
    }

    let bytes = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => FileError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => FileError::PermissionDenied(path.to_path_buf()),
        _ => FileError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    String::from_utf8(bytes).map_err(|_| FileError::NotUtf8(path.to_path_buf()))
}

/// Write `rate` to `path` as a 2-decimal fixed-point number.
///
/// Missing parent directories are created.
pub fn write_result_file(path: &Path, rate: f64) -> Result<(), FileError> {
    if !is_txt(path) {
        return Err(FileError::NotTxt(path.to_path_buf()));
    }

    let write_err = |source: std::io::Error| match source.kind() {
        ErrorKind::PermissionDenied => FileError::PermissionDenied(path.to_path_buf()),
        _ => FileError::Write {
            path: path.to_path_buf(),
            source,
        },
    };

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(write_err)?;
    }

    fs::write(path, format_rate(rate)).map_err(write_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_txt() {
        assert!(is_txt(Path::new("orig.txt")));
        assert!(is_txt(Path::new("/tmp/ORIG.TXT")));
        assert!(!is_txt(Path::new("orig.docx")));
        assert!(!is_txt(Path::new("txt")));
        assert!(!is_txt(Path::new("orig.txt.bak")));
    }

    #[test]
    fn test_wrong_extension_checked_before_existence() {
        let err = read_txt_file(Path::new("/definitely/missing.md")).unwrap_err();
        assert!(matches!(err, FileError::NotTxt(_)));
    }
}
