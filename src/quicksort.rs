//! In-place quicksort with a first-element pivot and a single-scan partition.

use core::cmp::Ordering;

use crate::compare;

/// Sorts the slice in increasing order, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not
/// allocate), *O*(*n* \* log(*n*)) on average and *O*(*n*^2) worst-case.
///
/// # Current implementation
///
/// Classic quicksort. The first element of every sub-slice is the pivot, which makes
/// already sorted and all-equal inputs hit the quadratic worst-case. Only the smaller side
/// of each partition is handled recursively, so stack depth stays logarithmic even then.
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// richseq::quicksort::sort(&mut v);
/// assert!(v == [-5, -3, 1, 2, 4]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v, &mut |a: &T, b: &T| a.gt(b));
}

/// Sorts the slice in decreasing order, but might not preserve the order of equal elements.
#[inline]
pub fn sort_desc<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v, &mut |a: &T, b: &T| a.lt(b));
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
///
/// The comparator function should define a total ordering for the elements in the slice. If
/// the ordering is not total, or `compare` panics, the order of the elements is unspecified,
/// but every original element is still present in `v`. Elements are only ever swapped.
///
/// ```
/// let mut v = [5, 4, 1, 3, 2];
/// richseq::quicksort::sort_by(&mut v, |a, b| a.cmp(b));
/// assert!(v == [1, 2, 3, 4, 5]);
///
/// // reverse sorting
/// richseq::quicksort::sort_by(&mut v, |a, b| b.cmp(a));
/// assert!(v == [5, 4, 3, 2, 1]);
/// ```
#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_by_less(v, compare::less_than(compare));
}

/// Sorts the slice with a `less` predicate.
///
/// `is_less(a, b)` must return true iff `a` goes before `b`. Only one call per comparison is
/// made, `x > pivot` is evaluated as `is_less(pivot, x)`.
#[inline]
pub fn sort_by_less<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    quicksort(v, &mut |a: &T, b: &T| is_less(b, a));
}

/// Returns true if every adjacent pair satisfies `compare(a, b) != Greater`.
pub fn is_sorted_by<T, F>(v: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    v.windows(2)
        .all(|w| compare(&w[0], &w[1]) != Ordering::Greater)
}

// --- IMPL ---

/// Sorts `v` recursively. `is_greater(x, pivot)` decides which side `x` goes to.
fn quicksort<T, F>(mut v: &mut [T], is_greater: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        if v.len() <= 1 {
            return;
        }

        let mid = partition(v, is_greater);

        // Split the slice into `left`, `pivot`, and `right`. The pivot is in its final place.
        let (left, right) = v.split_at_mut(mid);
        let right = &mut right[1..];

        // Recurse into the shorter side and continue with the longer one.
        if left.len() < right.len() {
            quicksort(left, is_greater);
            v = right;
        } else {
            quicksort(right, is_greater);
            v = left;
        }
    }
}

/// Partitions `v` around its first element and returns the pivot's final position.
///
/// A single left-to-right scan. The pivot travels with the head: every element not greater
/// than the pivot is swapped behind it, every greater element is swapped to the tail, which
/// then shrinks. When the scan meets the tail, `v[..head]` is not greater than the pivot,
/// `v[head]` is the pivot and `v[head + 1..]` is greater.
fn partition<T, F>(v: &mut [T], is_greater: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(len >= 2);

    let mut head = 0;
    let mut tail = len - 1;

    while head < tail {
        let next = head + 1;

        if is_greater(&v[next], &v[head]) {
            v.swap(next, tail);
            tail -= 1;
        } else {
            v.swap(next, head);
            head += 1;
        }
    }

    head
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_zones() {
        let mut v = [4, 7, 1, 4, 9, 0, 3];
        let mid = partition(&mut v, &mut |a: &i32, b: &i32| a > b);

        assert_eq!(v[mid], 4);
        assert!(v[..mid].iter().all(|x| *x <= 4));
        assert!(v[mid + 1..].iter().all(|x| *x > 4));
    }

    #[test]
    fn partition_pivot_is_max() {
        let mut v = [9, 1, 2, 3];
        let mid = partition(&mut v, &mut |a: &i32, b: &i32| a > b);

        assert_eq!(mid, 3);
        assert_eq!(v[3], 9);
    }

    #[test]
    fn sorts_descending_and_by_less() {
        let mut v = vec![3, 1, 4, 1, 5, 9, 2, 6];
        sort_desc(&mut v);
        assert_eq!(v, [9, 6, 5, 4, 3, 2, 1, 1]);

        sort_by_less(&mut v, |a, b| a < b);
        assert_eq!(v, [1, 1, 2, 3, 4, 5, 6, 9]);
        assert!(is_sorted_by(&v, |a, b| a.cmp(b)));
        assert!(!is_sorted_by(&v, |a, b| b.cmp(a)));
    }
}
