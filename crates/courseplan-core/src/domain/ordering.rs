//! Course ordering
//!
//! Two independent primitives over a course slice:
//! - [`partition`]: Hoare-style partition by title around the midpoint pivot
//! - [`selection_sort_by_id`]: in-place selection sort by id
//!
//! `partition` exchanges titles only. Ids and prerequisites stay in their
//! slots, so the partitioned titles are no longer attached to their original
//! courses.

use crate::domain::course::Course;
use std::mem;

/// Partition `courses[low..=high]` by title and return the split index
///
/// The pivot is the title at `low + (high - low) / 2`. The `low` cursor
/// advances while its title is less than the pivot and the `high` cursor
/// retreats while the pivot is less than its title. When the cursors meet or
/// cross, `high` is returned; otherwise the two titles are exchanged and both
/// cursors step inward.
///
/// After the call every title in `low..=split` is `<=` the pivot and every
/// title in `split + 1..=high` is `>=` the pivot.
///
/// # Panics
///
/// Panics if `high >= courses.len()`.
pub fn partition(courses: &mut [Course], low: usize, high: usize) -> usize {
    assert!(
        high < courses.len(),
        "partition range {}..={} out of bounds for {} courses",
        low,
        high,
        courses.len()
    );
    if low >= high {
        return high;
    }

    let mid = low + (high - low) / 2;
    let pivot = courses[mid].title.clone();

    let mut low = low;
    let mut high = high;

    loop {
        while courses[low].title < pivot {
            low += 1;
        }

        while pivot < courses[high].title {
            high -= 1;
        }

        if low >= high {
            return high;
        }

        swap_titles(courses, low, high);
        low += 1;
        high -= 1;
    }
}

fn swap_titles(courses: &mut [Course], a: usize, b: usize) {
    let title = mem::take(&mut courses[a].title);
    courses[a].title = mem::replace(&mut courses[b].title, title);
}

/// Sort courses by id (ascending) using selection sort
///
/// For each position the leftmost minimum of the unsorted suffix is swapped
/// into place, whole course included.
pub fn selection_sort_by_id(courses: &mut [Course]) {
    let len = courses.len();
    if len < 2 {
        return;
    }

    for i in 0..len - 1 {
        let mut smallest = i;
        for j in i + 1..len {
            if courses[j].id < courses[smallest].id {
                smallest = j;
            }
        }
        courses.swap(i, smallest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_titles(titles: &[&str]) -> Vec<Course> {
        titles
            .iter()
            .enumerate()
            .map(|(i, title)| Course::new(format!("ID{}", i), *title, vec![]))
            .collect()
    }

    fn by_ids(ids: &[&str]) -> Vec<Course> {
        ids.iter()
            .enumerate()
            .map(|(i, id)| Course::new(*id, format!("T{}", i), vec![]))
            .collect()
    }

    fn titles(courses: &[Course]) -> Vec<&str> {
        courses.iter().map(|c| c.title.as_str()).collect()
    }

    fn ids(courses: &[Course]) -> Vec<&str> {
        courses.iter().map(|c| c.id.as_str()).collect()
    }

    // =========================================================================
    // partition tests
    // =========================================================================

    #[test]
    fn test_partition_three_titles() {
        let mut courses = by_titles(&["c", "a", "b"]);
        let split = partition(&mut courses, 0, 2);

        assert_eq!(split, 0);
        assert_eq!(titles(&courses), ["a", "c", "b"]);
        assert!(courses[..=split].iter().all(|c| c.title.as_str() <= "a"));
        assert!(courses[split + 1..].iter().all(|c| c.title.as_str() >= "a"));
    }

    #[test]
    fn test_partition_swaps_titles_only() {
        let mut courses = by_titles(&["c", "a", "b"]);
        courses[0].prereqs = vec!["P0".to_string()];
        partition(&mut courses, 0, 2);

        // Ids and prereqs stay in place while the titles move
        assert_eq!(ids(&courses), ["ID0", "ID1", "ID2"]);
        assert_eq!(courses[0].prereqs, ["P0"]);
        assert_eq!(courses[0].title, "a");
    }

    #[test]
    fn test_partition_single_element() {
        let mut courses = by_titles(&["x", "y"]);
        assert_eq!(partition(&mut courses, 1, 1), 1);
        assert_eq!(titles(&courses), ["x", "y"]);
    }

    #[test]
    fn test_partition_odd_span_midpoint() {
        // Midpoint of 0..=3 is 1, pivot "b"
        let mut courses = by_titles(&["d", "b", "a", "c"]);
        let split = partition(&mut courses, 0, 3);

        assert_eq!(split, 1);
        assert_eq!(titles(&courses), ["a", "b", "d", "c"]);
    }

    #[test]
    fn test_partition_sub_range() {
        let mut courses = by_titles(&["z", "c", "a", "b", "y"]);
        let split = partition(&mut courses, 1, 3);

        assert!((1..=3).contains(&split));
        assert_eq!(courses[0].title, "z");
        assert_eq!(courses[4].title, "y");
        assert!(courses[1..=split].iter().all(|c| c.title.as_str() <= "a"));
        assert!(courses[split + 1..=3].iter().all(|c| c.title.as_str() >= "a"));
    }

    #[test]
    fn test_partition_all_equal() {
        let mut courses = by_titles(&["m", "m", "m", "m"]);
        let split = partition(&mut courses, 0, 3);
        assert!(split <= 3);
        assert_eq!(titles(&courses), ["m", "m", "m", "m"]);
    }

    #[test]
    #[should_panic]
    fn test_partition_out_of_bounds() {
        let mut courses = by_titles(&["a"]);
        partition(&mut courses, 0, 1);
    }

    // =========================================================================
    // selection_sort_by_id tests
    // =========================================================================

    #[test]
    fn test_selection_sort_empty_and_single() {
        let mut empty: Vec<Course> = vec![];
        selection_sort_by_id(&mut empty);
        assert!(empty.is_empty());

        let mut single = by_ids(&["CS1"]);
        selection_sort_by_id(&mut single);
        assert_eq!(ids(&single), ["CS1"]);
    }

    #[test]
    fn test_selection_sort_ordering() {
        let mut courses = by_ids(&["MATH201", "CSCI300", "CSCI100", "CSCI200"]);
        selection_sort_by_id(&mut courses);
        assert_eq!(ids(&courses), ["CSCI100", "CSCI200", "CSCI300", "MATH201"]);
    }

    #[test]
    fn test_selection_sort_moves_whole_course() {
        let mut courses = by_ids(&["B", "A"]);
        selection_sort_by_id(&mut courses);
        assert_eq!(courses[0].id, "A");
        assert_eq!(courses[0].title, "T1");
    }

    #[test]
    fn test_selection_sort_duplicates_keep_order() {
        let mut courses = by_ids(&["CS200", "CS100", "CS100"]);
        selection_sort_by_id(&mut courses);

        assert_eq!(ids(&courses), ["CS100", "CS100", "CS200"]);
        assert_eq!(titles(&courses), ["T1", "T2", "T0"]);
    }

    #[test]
    fn test_selection_sort_idempotent() {
        let mut courses = by_ids(&["D", "A", "C", "B"]);
        selection_sort_by_id(&mut courses);
        let sorted = courses.clone();

        selection_sort_by_id(&mut courses);
        assert_eq!(courses, sorted);
    }

    #[test]
    fn test_selection_sort_is_case_sensitive() {
        let mut courses = by_ids(&["b", "A", "a", "B"]);
        selection_sort_by_id(&mut courses);
        assert_eq!(ids(&courses), ["A", "B", "a", "b"]);
    }
}
