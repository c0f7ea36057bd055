//! Delimited table model
//!
//! A [`Table`] holds a header (ordered field names) and the rows parsed from a
//! delimited source. The header line is tokenized twice: once into the header
//! and once as data row 0.
//!
//! Rows are not validated against the header width. Positional access raises
//! [`TableError::IndexOutOfRange`], while name-based access on a short row
//! returns `Ok(None)`.
//!
//! While row 0 still equals the header, serialization writes it once as the
//! header line, so writing and re-parsing reproduces the same table.

use crate::domain::tokenizer::tokenize_line;
use rayon::prelude::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Table errors
#[derive(Debug, Error)]
pub enum TableError {
    /// Source file could not be opened for read
    #[error("Failed to open {}: {source}", .path.display())]
    OpenFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Source file was opened but could not be read as text
    #[error("Failed to read {}: {source}", .path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Backing file could not be rewritten
    #[error("Failed to write {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// No non-blank line in the source
    #[error("No data in {origin}")]
    EmptySource { origin: String },
    /// Positional access beyond bounds
    #[error("Index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
    /// Name-based access with no matching header entry
    #[error("Field '{name}' not found in header")]
    FieldNotFound { name: String },
}

/// Where a table was loaded from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableSource {
    /// Backed by a file; `sync` rewrites it
    File(PathBuf),
    /// Raw text content; nothing to write back
    Pure,
}

impl TableSource {
    /// Describe the source for error messages
    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Pure => "pure content".to_string(),
        }
    }
}

/// One parsed line of values
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    values: Vec<String>,
}

impl Row {
    /// Create a row from already tokenized values
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    /// Number of values in this row
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the row has no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the value at `pos`
    pub fn get(&self, pos: usize) -> Result<&str, TableError> {
        self.values
            .get(pos)
            .map(String::as_str)
            .ok_or(TableError::IndexOutOfRange {
                index: pos,
                len: self.values.len(),
            })
    }

    /// All values in field order
    pub fn values(&self) -> &[String] {
        &self.values
    }

    fn write_joined<W: Write>(&self, writer: &mut W, separator: char) -> io::Result<()> {
        write_joined(writer, &self.values, separator)
    }
}

/// Header-addressed table of rows
#[derive(Clone, Debug)]
pub struct Table {
    source: TableSource,
    separator: char,
    header: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Build a table from whole-text content that has no backing file
    ///
    /// # Errors
    ///
    /// Returns [`TableError::EmptySource`] when the content has no non-blank line.
    pub fn from_content(content: &str, separator: char) -> Result<Self, TableError> {
        Self::parse(content, TableSource::Pure, separator)
    }

    /// Build a table from whole-text content read from `source`
    ///
    /// Lines are split on `\n` (a trailing `\r` is dropped) and empty lines are
    /// discarded. The first remaining line becomes the header and every line,
    /// the first included, becomes a row.
    pub fn parse(content: &str, source: TableSource, separator: char) -> Result<Self, TableError> {
        let lines: Vec<&str> = content.lines().filter(|line| !line.is_empty()).collect();

        let Some(first) = lines.first() else {
            return Err(TableError::EmptySource {
                origin: source.describe(),
            });
        };

        let header = tokenize_line(first, separator);
        let rows: Vec<Row> = lines
            .par_iter()
            .map(|line| Row::new(tokenize_line(line, separator)))
            .collect();

        tracing::debug!(
            source = %source.describe(),
            columns = header.len(),
            rows = rows.len(),
            "parsed table"
        );

        Ok(Self {
            source,
            separator,
            header,
            rows,
        })
    }

    /// Number of rows (header line included as row 0)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of header fields
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Get the header name at `pos`
    pub fn header_element(&self, pos: usize) -> Result<&str, TableError> {
        self.header
            .get(pos)
            .map(String::as_str)
            .ok_or(TableError::IndexOutOfRange {
                index: pos,
                len: self.header.len(),
            })
    }

    /// Position of the first header entry equal to `name`
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|field| field == name)
    }

    pub fn source(&self) -> &TableSource {
        &self.source
    }

    /// Backing file path, if any
    pub fn file_name(&self) -> Option<&Path> {
        match &self.source {
            TableSource::File(path) => Some(path),
            TableSource::Pure => None,
        }
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Get the row at `index`
    pub fn row(&self, index: usize) -> Result<&Row, TableError> {
        self.rows.get(index).ok_or(TableError::IndexOutOfRange {
            index,
            len: self.rows.len(),
        })
    }

    /// Iterate over all rows in order
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Get the value at column `pos` of row `row`
    pub fn field(&self, row: usize, pos: usize) -> Result<&str, TableError> {
        self.row(row)?.get(pos)
    }

    /// Get the value of the column named `name` in row `row`
    ///
    /// Returns `Ok(None)` when the header has the name but the row is too
    /// short to hold a value for it.
    ///
    /// # Errors
    ///
    /// [`TableError::FieldNotFound`] if no header entry matches, or
    /// [`TableError::IndexOutOfRange`] if the row does not exist.
    pub fn field_by_name(&self, row: usize, name: &str) -> Result<Option<&str>, TableError> {
        let row = self.row(row)?;
        let pos = self.column_index(name).ok_or_else(|| TableError::FieldNotFound {
            name: name.to_string(),
        })?;
        Ok(row.values.get(pos).map(String::as_str))
    }

    /// Overwrite the value of the column named `name` in row `row`
    ///
    /// Returns `false` when the name is not in the header or the row has no
    /// value at that position. The row is never grown.
    pub fn set_field(
        &mut self,
        row: usize,
        name: &str,
        value: impl Into<String>,
    ) -> Result<bool, TableError> {
        let len = self.rows.len();
        let pos = self.column_index(name);
        let row = self
            .rows
            .get_mut(row)
            .ok_or(TableError::IndexOutOfRange { index: row, len })?;

        match pos.and_then(|pos| row.values.get_mut(pos)) {
            Some(slot) => {
                *slot = value.into();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the row at `index`; `false` if out of range
    pub fn delete_row(&mut self, index: usize) -> bool {
        if index < self.rows.len() {
            self.rows.remove(index);
            true
        } else {
            false
        }
    }

    /// Insert a row at `index` (`index == row_count()` appends); `false` if out of range
    pub fn insert_row<I, S>(&mut self, index: usize, values: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if index > self.rows.len() {
            return false;
        }
        let row = Row::new(values.into_iter().map(Into::into).collect());
        self.rows.insert(index, row);
        true
    }

    /// Serialize header and rows in original field order
    ///
    /// Every line, the header included, is terminated by `\n`. When row 0
    /// equals the header it is written as the header line; otherwise the
    /// header is written ahead of all rows.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        if !self.header_row_leads() {
            write_joined(writer, &self.header, self.separator)?;
        }
        for row in &self.rows {
            row.write_joined(writer, self.separator)?;
        }
        Ok(())
    }

    /// Row 0 holds exactly the header values
    fn header_row_leads(&self) -> bool {
        self.rows
            .first()
            .is_some_and(|row| row.values == self.header)
    }

    /// Serialize into a string
    pub fn to_delimited_string(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.write_to(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

fn write_joined<W: Write>(writer: &mut W, values: &[String], separator: char) -> io::Result<()> {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            write!(writer, "{}", separator)?;
        }
        writer.write_all(value.as_bytes())?;
    }
    writeln!(writer)
}
