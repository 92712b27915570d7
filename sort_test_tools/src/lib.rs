//! Reusable test suite for in-place sort functions.
//!
//! Implement [`Sort`] for a marker type and expand [`instantiate_sort_tests!`] with it to get one
//! `#[test]` per input pattern, each checking the result against `slice::sort`.

/// Entry points of the sort under test.
pub trait Sort {
    /// Printed next to the pattern seed at the start of a test run.
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
