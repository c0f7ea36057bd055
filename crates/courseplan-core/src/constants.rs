//! Course catalog constants
//!
//! Column layout of the course source file and the menu choices understood by
//! the planner.

// =============================================================================
// Source format
// =============================================================================

/// Default field separator
pub const DEFAULT_SEPARATOR: char = ',';

/// Character that toggles the quoted state while tokenizing
pub const QUOTE: char = '"';

// =============================================================================
// Course columns
// =============================================================================

/// Column holding the course id
pub const COURSE_ID_COLUMN: usize = 0;

/// Column holding the course title
pub const TITLE_COLUMN: usize = 1;

/// First column holding a prerequisite id (all following columns are prerequisites)
pub const FIRST_PREREQ_COLUMN: usize = 2;

/// Separator used when rendering a prerequisite list
pub const PREREQ_LIST_SEPARATOR: &str = ", ";

// =============================================================================
// Menu choices
// =============================================================================

pub const CHOICE_LOAD: i32 = 1;
pub const CHOICE_PRINT: i32 = 2;
pub const CHOICE_SEARCH: i32 = 3;
pub const CHOICE_EXIT: i32 = 9;
