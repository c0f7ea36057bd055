//! courseplan-core - Course catalog parsing, ordering and lookup
//!
//! This crate provides functionality to:
//! - Tokenize delimited text lines with simple quote handling
//! - Load a delimited source into a tolerant, header-addressed table
//! - Map table rows to courses with prerequisite lists
//! - Order courses (title partition, selection sort by id) and look them up by id
//! - Dispatch planner menu commands without touching the console

pub mod constants;
pub mod domain;
pub mod infra;
pub mod app;

// Re-export commonly used types
pub use app::loader::{load_courses, try_load_courses};
pub use app::planner::{Command, CoursePlanner, Outcome, PlannerOptions};
pub use constants::*;
pub use domain::course::{Course, HeaderRow, courses_from_table};
pub use domain::lookup::{find_all_by_id, find_by_id};
pub use domain::ordering::{partition, selection_sort_by_id};
pub use domain::table::{Row, Table, TableError, TableSource};
pub use domain::tokenizer::tokenize_line;
pub use infra::table_io::{SourceKind, load_table, open_table, sync_table};

#[cfg(feature = "hashmap-search")]
pub use domain::lookup::CourseIndex;
