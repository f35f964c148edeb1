use exports_fs::{DEFAULT_FILE_MODE, Error, MissingFile, read_exports, write_exports};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_read_existing_file_returns_raw_bytes() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("exports");
    fs::write(&file_path, b"/Users 192.168.64.1\r\n\xff").unwrap();

    let content = read_exports(&file_path, MissingFile::Error).unwrap();
    assert_eq!(content, b"/Users 192.168.64.1\r\n\xff".to_vec());
}

#[test]
fn test_read_missing_file_as_empty() {
    let temp = TempDir::new().unwrap();
    let content = read_exports(temp.path().join("exports"), MissingFile::Empty).unwrap();
    assert!(content.is_empty());
}

#[test]
fn test_read_missing_file_as_error() {
    let temp = TempDir::new().unwrap();
    let result = read_exports(temp.path().join("exports"), MissingFile::Error);
    assert!(matches!(result, Err(Error::NotFound { .. })));
}

#[test]
fn test_read_directory_is_io_error_even_when_missing_is_empty() {
    let temp = TempDir::new().unwrap();
    let result = read_exports(temp.path(), MissingFile::Empty);
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn test_write_creates_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("exports");

    write_exports(&file_path, b"hello\n", DEFAULT_FILE_MODE).unwrap();

    assert_eq!(fs::read_to_string(&file_path).unwrap(), "hello\n");
}

#[test]
fn test_write_truncates_existing() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("exports");
    fs::write(&file_path, "a much longer original content\n").unwrap();

    write_exports(&file_path, b"short\n", DEFAULT_FILE_MODE).unwrap();

    assert_eq!(fs::read_to_string(&file_path).unwrap(), "short\n");
}

#[test]
fn test_write_into_missing_directory_fails() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("missing").join("exports");

    let result = write_exports(&file_path, b"x\n", DEFAULT_FILE_MODE);
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[cfg(unix)]
mod unix_tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::os::unix::fs::PermissionsExt;

    #[test]
    fn test_write_applies_mode_to_new_file() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("exports");

        write_exports(&file_path, b"x\n", 0o644).unwrap();

        let mode = fs::metadata(&file_path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[test]
    fn test_write_reapplies_mode_to_existing_file() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("exports");
        fs::write(&file_path, "x\n").unwrap();
        fs::set_permissions(&file_path, fs::Permissions::from_mode(0o600)).unwrap();

        write_exports(&file_path, b"y\n", 0o644).unwrap();

        let mode = fs::metadata(&file_path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }
}
