//! Course loading workflow
//!
//! Loading is the single boundary where table errors are caught: they are
//! logged once and turned into an empty collection.

use crate::domain::course::{Course, HeaderRow, courses_from_table};
use crate::domain::table::TableError;
use crate::infra::table_io::open_table;
use std::path::Path;

/// Load courses from a file, propagating table errors
pub fn try_load_courses(
    path: impl AsRef<Path>,
    separator: char,
    header_row: HeaderRow,
) -> Result<Vec<Course>, TableError> {
    let table = open_table(path, separator)?;
    Ok(courses_from_table(&table, header_row))
}

/// Load courses from a file
///
/// Any table error is logged and an empty collection is returned instead.
pub fn load_courses(path: impl AsRef<Path>, separator: char, header_row: HeaderRow) -> Vec<Course> {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "loading courses");

    match try_load_courses(path, separator, header_row) {
        Ok(courses) => {
            tracing::info!(count = courses.len(), "courses loaded");
            courses
        }
        Err(e) => {
            tracing::error!("{}", e);
            Vec::new()
        }
    }
}
