//! Drives the writer the way a file sink does

use std::fs;
use std::thread;
use std::time::Duration;

use bytes::Bytes;
use proven_logger_file::*;
use tempfile::tempdir;

/// A record already rendered by some formatter
struct FormattedLine {
    rendered: String,
}

impl FormattedLine {
    fn new(level: &str, message: &str) -> Self {
        Self {
            rendered: format!("[{level}] {message}\n"),
        }
    }
}

impl FormattedRecord for FormattedLine {
    fn payload(&self) -> &[u8] {
        self.rendered.as_bytes()
    }
}

#[test]
fn test_custom_records() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("app.log");

    let mut writer = FileWriter::new(true);
    writer.open(&path).unwrap();
    writer.write(&FormattedLine::new("INFO", "starting")).unwrap();
    writer.write(&FormattedLine::new("WARN", "low disk")).unwrap();
    writer.write(&Bytes::from_static(b"[INFO] raw bytes\n")).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "[INFO] starting\n[WARN] low disk\n[INFO] raw bytes\n"
    );
}

#[test]
fn test_rotate_by_rename_and_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("node.log");

    let mut writer = FileWriter::new(false);
    writer.open(&path).unwrap();
    writer.write("generation 1\n").unwrap();

    // A rotating sink derives the archive name from the current one.
    let current = writer.filename().to_str().unwrap().to_owned();
    let (base, ext) = FileWriter::split_by_extension(&current);
    let archived = format!("{base}.1{ext}");

    writer.close();
    fs::rename(&path, &archived).unwrap();
    writer.reopen().unwrap();
    writer.write("generation 2\n").unwrap();
    writer.close();

    assert!(archived.ends_with("node.1.log"));
    assert_eq!(fs::read_to_string(&archived).unwrap(), "generation 1\n");
    assert_eq!(fs::read_to_string(&path).unwrap(), "generation 2\n");
}

#[test]
fn test_writer_moves_to_worker_thread() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("worker.log");

    let mut writer = FileWriter::new(false);
    writer.open(&path).unwrap();

    let handle = thread::spawn(move || {
        for i in 0..3 {
            writer.write(&format!("line {i}\n")).unwrap();
        }
        writer.size().unwrap()
    });

    assert_eq!(handle.join().unwrap(), 21);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "line 0\nline 1\nline 2\n"
    );
}

#[test]
fn test_custom_retry_policy() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("app.log");

    let config = FileWriterConfig::builder()
        .open_tries(2)
        .open_interval(Duration::from_millis(1))
        .build();
    let mut writer = FileWriter::with_config(config);

    match writer.open(&path) {
        Err(Error::FileOpen { attempts, .. }) => assert_eq!(attempts, 2),
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(writer.filename(), path);
    assert!(!FileWriter::file_exists(&path));
}
