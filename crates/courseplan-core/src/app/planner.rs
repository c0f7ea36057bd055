//! Planner command dispatch
//!
//! [`CoursePlanner`] owns the loaded collection and turns menu commands into
//! [`Outcome`] values. It never reads from or writes to the console; the
//! shell renders outcomes.

use crate::app::loader::load_courses;
use crate::constants::{CHOICE_EXIT, CHOICE_LOAD, CHOICE_PRINT, CHOICE_SEARCH, DEFAULT_SEPARATOR};
use crate::domain::course::{Course, HeaderRow};
#[cfg(feature = "hashmap-search")]
use crate::domain::lookup::CourseIndex;
#[cfg(not(feature = "hashmap-search"))]
use crate::domain::lookup::find_all_by_id;
use crate::domain::ordering::selection_sort_by_id;
use std::path::PathBuf;

/// Options applied to every load
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlannerOptions {
    /// Field separator of the source file
    pub separator: char,
    /// Whether the first line is mapped to a course
    pub header_row: HeaderRow,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            header_row: HeaderRow::Include,
        }
    }
}

impl PlannerOptions {
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_header_row(mut self, header_row: HeaderRow) -> Self {
        self.header_row = header_row;
        self
    }
}

/// A planner menu command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Replace the collection with the courses in `path`
    Load { path: PathBuf },
    /// Sort by id and list every course
    PrintCourseList,
    /// Look up courses by id
    Search { query: String },
    Exit,
    /// Unrecognized menu choice
    Invalid(i32),
}

impl Command {
    /// Map a menu choice and its argument to a command
    ///
    /// `argument` is the file path for a load and the course id for a search;
    /// it is ignored by the other choices.
    pub fn from_choice(choice: i32, argument: &str) -> Self {
        match choice {
            CHOICE_LOAD => Self::Load {
                path: PathBuf::from(argument),
            },
            CHOICE_PRINT => Self::PrintCourseList,
            CHOICE_SEARCH => Self::Search {
                query: argument.to_string(),
            },
            CHOICE_EXIT => Self::Exit,
            other => Self::Invalid(other),
        }
    }

    /// Check if the choice needs an argument before dispatch
    pub fn needs_argument(choice: i32) -> bool {
        matches!(choice, CHOICE_LOAD | CHOICE_SEARCH)
    }
}

/// Result of dispatching a command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Number of courses read (0 when the load failed)
    Loaded { count: usize },
    /// Courses in id order
    CourseList(Vec<Course>),
    /// Every course whose id matches the query, in collection order
    Found(Vec<Course>),
    NotFound { query: String },
    Exit,
    Invalid(i32),
}

/// Planner session state
#[derive(Clone, Debug, Default)]
pub struct CoursePlanner {
    options: PlannerOptions,
    courses: Vec<Course>,
    #[cfg(feature = "hashmap-search")]
    index: CourseIndex,
}

impl CoursePlanner {
    pub fn new(options: PlannerOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &PlannerOptions {
        &self.options
    }

    /// Currently loaded courses, in their current order
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Dispatch one command
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        tracing::debug!(?command, "dispatch");

        match command {
            Command::Load { path } => {
                self.courses = load_courses(&path, self.options.separator, self.options.header_row);
                self.reindex();
                Outcome::Loaded {
                    count: self.courses.len(),
                }
            }
            Command::PrintCourseList => {
                if !self.courses.is_empty() {
                    selection_sort_by_id(&mut self.courses);
                    self.reindex();
                }
                Outcome::CourseList(self.courses.clone())
            }
            Command::Search { query } => {
                let matches = self.search(&query);
                if matches.is_empty() {
                    Outcome::NotFound { query }
                } else {
                    Outcome::Found(matches)
                }
            }
            Command::Exit => Outcome::Exit,
            Command::Invalid(choice) => Outcome::Invalid(choice),
        }
    }

    #[cfg(feature = "hashmap-search")]
    fn reindex(&mut self) {
        self.index = CourseIndex::new(&self.courses);
    }

    #[cfg(not(feature = "hashmap-search"))]
    fn reindex(&mut self) {}

    #[cfg(feature = "hashmap-search")]
    fn search(&self, query: &str) -> Vec<Course> {
        self.index
            .find_all(&self.courses, query)
            .into_iter()
            .cloned()
            .collect()
    }

    #[cfg(not(feature = "hashmap-search"))]
    fn search(&self, query: &str) -> Vec<Course> {
        find_all_by_id(&self.courses, query).cloned().collect()
    }
}
