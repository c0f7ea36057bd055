//! Course records
//!
//! Maps table rows to [`Course`] values: column 0 is the id, column 1 the
//! title and every following column a prerequisite id. Empty prerequisite
//! cells are skipped.

use crate::constants::{COURSE_ID_COLUMN, FIRST_PREREQ_COLUMN, PREREQ_LIST_SEPARATOR, TITLE_COLUMN};
use crate::domain::table::{Row, Table};
use rayon::prelude::*;
use std::fmt;

/// A course with its prerequisite ids
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Course {
    /// Course id as stored in the source (not case-normalized)
    pub id: String,
    pub title: String,
    /// Prerequisite ids in column order, never empty strings
    pub prereqs: Vec<String>,
}

impl Course {
    /// Create a new course
    pub fn new(id: impl Into<String>, title: impl Into<String>, prereqs: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            prereqs: prereqs.into_iter().filter(|p| !p.is_empty()).collect(),
        }
    }

    /// Build a course from one table row
    ///
    /// A row missing the id or title column yields an empty string for it.
    pub fn from_row(row: &Row) -> Self {
        let values = row.values();
        let cell = |pos: usize| values.get(pos).cloned().unwrap_or_default();

        Self {
            id: cell(COURSE_ID_COLUMN),
            title: cell(TITLE_COLUMN),
            prereqs: values
                .iter()
                .skip(FIRST_PREREQ_COLUMN)
                .filter(|value| !value.is_empty())
                .cloned()
                .collect(),
        }
    }

    /// Prerequisites joined by `", "`, without a trailing separator
    pub fn prereq_list(&self) -> String {
        self.prereqs.join(PREREQ_LIST_SEPARATOR)
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.id, self.title)
    }
}

/// Whether row 0 (the header line) is mapped to a course
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderRow {
    /// Map every row; the header line shows up as a course
    #[default]
    Include,
    /// Skip row 0
    Skip,
}

/// Map every row of `table` to a course, preserving row order
pub fn courses_from_table(table: &Table, header_row: HeaderRow) -> Vec<Course> {
    let skip = match header_row {
        HeaderRow::Include => 0,
        HeaderRow::Skip => 1,
    };

    let rows: Vec<&Row> = table.rows().skip(skip).collect();
    rows.par_iter().map(|row| Course::from_row(row)).collect()
}
