use std::fs;
use tempfile::TempDir;
use wordfreq_engine::{ensure_output_dir, AtomicFileWriter, PersistError};

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("out");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("counts.json");
    let writer = AtomicFileWriter::new(target.clone());

    let first = writer.write(b"{\"a\":1,\"b\":2}").unwrap();
    assert_eq!(first, target);
    assert_eq!(fs::read_to_string(&first).unwrap(), "{\"a\":1,\"b\":2}");

    // Shorter content must not leave a tail of the old file behind.
    let second = writer.write(b"{}").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "{}");
}

#[test]
fn write_creates_parent_directories() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("nested").join("deeper").join("counts.json");
    AtomicFileWriter::new(target.clone()).write(b"{}").unwrap();
    assert!(target.is_file());
}

#[test]
fn no_temp_files_left_after_write() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("counts.json");
    AtomicFileWriter::new(target).write(b"{}").unwrap();

    let names: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(names, vec!["counts.json"]);
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let target = file_path.join("counts.json");
    let result = AtomicFileWriter::new(target.clone()).write(b"{}");
    assert!(matches!(result, Err(PersistError::OutputDir(_))));
    assert!(!target.exists());
    assert_eq!(fs::read_to_string(&file_path).unwrap(), "x");
}

#[cfg(unix)]
#[test]
fn rewrite_keeps_existing_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let target = temp.path().join("counts.json");
    fs::write(&target, "{}").unwrap();
    fs::set_permissions(&target, fs::Permissions::from_mode(0o640)).unwrap();

    AtomicFileWriter::new(target.clone()).write(b"{\"a\":1}").unwrap();

    let mode = fs::metadata(&target).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o640);
    assert_eq!(fs::read_to_string(&target).unwrap(), "{\"a\":1}");
}

#[cfg(unix)]
#[test]
fn new_file_is_not_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let target = temp.path().join("counts.json");

    AtomicFileWriter::new(target.clone()).write(b"{}").unwrap();

    // Same mode a plain create gets under the current umask.
    let reference = temp.path().join("reference.json");
    fs::write(&reference, "{}").unwrap();
    let expected = fs::metadata(&reference).unwrap().permissions().mode() & 0o777;
    let mode = fs::metadata(&target).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, expected);
}
