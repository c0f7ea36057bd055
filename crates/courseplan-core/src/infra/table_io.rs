//! Table file I/O operations
//!
//! This module provides functions for loading tables from files or raw text
//! and writing file-backed tables back to disk.

use crate::domain::table::{Table, TableError, TableSource};
use memmap2::Mmap;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

/// How the `source` argument of [`load_table`] is interpreted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SourceKind {
    /// `source` is a file path
    #[default]
    File,
    /// `source` is the raw content itself
    Pure,
}

/// Load a table from a file path or raw content
pub fn load_table(source: &str, kind: SourceKind, separator: char) -> Result<Table, TableError> {
    match kind {
        SourceKind::File => open_table(source, separator),
        SourceKind::Pure => Table::from_content(source, separator),
    }
}

/// Load a table from a file
///
/// # Errors
///
/// [`TableError::OpenFailure`] if the file cannot be opened,
/// [`TableError::ReadFailure`] if it is not valid UTF-8 text, and
/// [`TableError::EmptySource`] if it has no non-blank line.
pub fn open_table(path: impl AsRef<Path>, separator: char) -> Result<Table, TableError> {
    let path = path.as_ref();
    let content = read_source(path)?;
    Table::parse(&content, TableSource::File(path.to_path_buf()), separator)
}

/// Read a whole source file as text
///
/// Memory-maps the file when the `mmap` feature is enabled.
fn read_source(path: &Path) -> Result<String, TableError> {
    if cfg!(feature = "mmap") {
        read_source_mapped(path)
    } else {
        read_source_buffered(path)
    }
}

fn read_source_buffered(path: &Path) -> Result<String, TableError> {
    let mut file = File::open(path).map_err(|source| TableError::OpenFailure {
        path: path.to_path_buf(),
        source,
    })?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|source| TableError::ReadFailure {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(content)
}

fn read_source_mapped(path: &Path) -> Result<String, TableError> {
    let file = File::open(path).map_err(|source| TableError::OpenFailure {
        path: path.to_path_buf(),
        source,
    })?;
    let read_failure = |source: io::Error| TableError::ReadFailure {
        path: path.to_path_buf(),
        source,
    };

    // Mapping a zero-length file fails on some platforms
    let metadata = file.metadata().map_err(read_failure)?;
    if metadata.len() == 0 {
        return Ok(String::new());
    }

    // The map is dropped before returning; only the copied text outlives it
    let mmap = unsafe { Mmap::map(&file) }.map_err(read_failure)?;
    let text = std::str::from_utf8(&mmap)
        .map_err(|e| read_failure(io::Error::new(io::ErrorKind::InvalidData, e)))?;

    Ok(text.to_owned())
}

/// Write a file-backed table back to its file
///
/// The file is truncated and rewritten with [`Table::write_to`]. Tables built
/// from raw content have nothing to write back and are left untouched.
pub fn sync_table(table: &Table) -> Result<(), TableError> {
    let Some(path) = table.file_name() else {
        return Ok(());
    };

    let write_failure = |source: io::Error| TableError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_failure)?;
    let mut writer = BufWriter::new(file);
    table.write_to(&mut writer).map_err(write_failure)?;
    writer.flush().map_err(write_failure)?;

    tracing::info!(path = %path.display(), rows = table.row_count(), "synced table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn create_temp_file(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(name)
    }

    #[test]
    fn test_open_table() {
        let path = create_temp_file("courseplan_test_open.csv");
        fs::write(&path, "id,title\nCS100,Intro\n\n").unwrap();

        let table = open_table(&path, ',').unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.file_name(), Some(path.as_path()));

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_open_nonexistent_file() {
        let result = open_table("/nonexistent/path/courses.csv", ',');
        assert!(matches!(result, Err(TableError::OpenFailure { .. })));
    }

    #[test]
    fn test_open_empty_file() {
        let path = create_temp_file("courseplan_test_empty.csv");
        fs::write(&path, "\n\n").unwrap();

        let result = open_table(&path, ',');
        assert!(matches!(result, Err(TableError::EmptySource { .. })));

        fs::write(&path, "").unwrap();
        let result = open_table(&path, ',');
        assert!(matches!(result, Err(TableError::EmptySource { .. })));

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_open_invalid_utf8() {
        let path = create_temp_file("courseplan_test_binary.csv");
        fs::write(&path, [0xff, 0xfe, b',', b'a']).unwrap();

        let result = open_table(&path, ',');
        assert!(matches!(result, Err(TableError::ReadFailure { .. })));

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_table_pure() {
        let table = load_table("a,b\n1,2", SourceKind::Pure, ',').unwrap();
        assert_eq!(table.source(), &TableSource::Pure);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_sync_table_rewrites_file() {
        let path = create_temp_file("courseplan_test_sync.csv");
        fs::write(&path, "id,title\r\nCS100,Intro\r\n").unwrap();

        let mut table = open_table(&path, ',').unwrap();
        assert!(table.insert_row(table.row_count(), ["CS200", "Data"]));
        sync_table(&table).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "id,title\nCS100,Intro\nCS200,Data\n");

        fs::remove_file(path).ok();
    }

    // =========================================================================
    // Read paths
    // =========================================================================

    #[test]
    fn test_read_paths_agree() {
        let path = create_temp_file("courseplan_test_read_paths.csv");
        fs::write(&path, "id,title\r\nCS100,\"Intro, Part 1\"\n").unwrap();

        let buffered = read_source_buffered(&path).unwrap();
        let mapped = read_source_mapped(&path).unwrap();
        assert_eq!(buffered, "id,title\r\nCS100,\"Intro, Part 1\"\n");
        assert_eq!(mapped, buffered);

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_read_paths_empty_file() {
        let path = create_temp_file("courseplan_test_read_empty.csv");
        fs::write(&path, "").unwrap();

        assert_eq!(read_source_buffered(&path).unwrap(), "");
        assert_eq!(read_source_mapped(&path).unwrap(), "");

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_read_paths_invalid_utf8() {
        let path = create_temp_file("courseplan_test_read_binary.csv");
        fs::write(&path, [b'a', b',', 0xff, 0xfe]).unwrap();

        for result in [read_source_buffered(&path), read_source_mapped(&path)] {
            match result {
                Err(TableError::ReadFailure { source, .. }) => {
                    assert_eq!(source.kind(), io::ErrorKind::InvalidData);
                }
                other => panic!("expected read failure, got {:?}", other),
            }
        }

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_read_paths_missing_file() {
        let path = std::env::temp_dir().join("courseplan_test_read_missing.csv");
        fs::remove_file(&path).ok();

        assert!(matches!(
            read_source_buffered(&path),
            Err(TableError::OpenFailure { .. })
        ));
        assert!(matches!(
            read_source_mapped(&path),
            Err(TableError::OpenFailure { .. })
        ));
    }

    #[test]
    fn test_sync_pure_table_is_noop() {
        let table = Table::from_content("a,b", ',').unwrap();
        assert!(sync_table(&table).is_ok());
    }
}
