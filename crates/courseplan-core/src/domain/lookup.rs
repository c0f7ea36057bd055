//! Course lookup by id
//!
//! The query is ASCII-uppercased before comparison but stored ids are
//! compared verbatim, so a course stored as `cs101` is never found.

use crate::domain::course::Course;

#[cfg(feature = "hashmap-search")]
use rustc_hash::FxHashMap;

/// Normalize a lookup query
pub fn normalize_query(query: &str) -> String {
    query.to_ascii_uppercase()
}

/// Find the first course whose id equals the uppercased `query`
pub fn find_by_id<'a>(courses: &'a [Course], query: &str) -> Option<&'a Course> {
    find_all_by_id(courses, query).next()
}

/// Iterate over every course whose id equals the uppercased `query`
pub fn find_all_by_id<'a>(
    courses: &'a [Course],
    query: &str,
) -> impl Iterator<Item = &'a Course> + use<'a> {
    let query = normalize_query(query);
    courses.iter().filter(move |course| course.id == query)
}

// =============================================================================
// Hash index (hashmap-search feature)
// =============================================================================

/// Id index over a course collection
///
/// Maps each stored id to the positions of its courses in ascending order,
/// so lookups return exactly what [`find_by_id`] and [`find_all_by_id`]
/// return for the slice the index was built from. The index holds positions
/// only; rebuild it whenever that slice is reloaded or reordered.
#[cfg(feature = "hashmap-search")]
#[derive(Clone, Debug, Default)]
pub struct CourseIndex {
    positions: FxHashMap<String, Vec<usize>>,
}

#[cfg(feature = "hashmap-search")]
impl CourseIndex {
    /// Build an index over `courses`
    pub fn new(courses: &[Course]) -> Self {
        let mut positions: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        positions.reserve(courses.len());
        for (i, course) in courses.iter().enumerate() {
            positions.entry(course.id.clone()).or_default().push(i);
        }
        Self { positions }
    }

    /// Positions of every course whose id equals the uppercased `query`
    pub fn positions(&self, query: &str) -> &[usize] {
        self.positions
            .get(normalize_query(query).as_str())
            .map_or(&[], Vec::as_slice)
    }

    /// Find the first course in `courses` whose id equals the uppercased `query`
    pub fn find<'a>(&self, courses: &'a [Course], query: &str) -> Option<&'a Course> {
        self.positions(query).first().map(|&i| &courses[i])
    }

    /// Every course in `courses` whose id equals the uppercased `query`, in order
    pub fn find_all<'a>(&self, courses: &'a [Course], query: &str) -> Vec<&'a Course> {
        self.positions(query).iter().map(|&i| &courses[i]).collect()
    }

    /// Number of distinct ids
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
