//! Total-order comparison functions shared by sorting, binary search and sorted insertion.

use std::cmp::Ordering;
use std::fmt::Display;
use std::sync::Arc;

use paste::paste;

/// Three-way comparison function as stored by [`SortedSeq`](crate::SortedSeq).
///
/// `Send + Sync` so the sorted variant stays shareable in `Shared` mode.
pub type Comparator<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Wraps a closure into a [`Comparator`].
pub fn comparator<T, F>(compare: F) -> Comparator<T>
where
    T: 'static,
    F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
{
    Arc::new(compare)
}

/// Increasing order as defined by `Ord`.
pub fn natural<T: Ord + 'static>() -> Comparator<T> {
    Arc::new(|a: &T, b: &T| a.cmp(b))
}

/// Decreasing order as defined by `Ord`.
pub fn reverse<T: Ord + 'static>() -> Comparator<T> {
    Arc::new(|a: &T, b: &T| b.cmp(a))
}

/// Compares the `Display` forms of both values byte-wise.
///
/// Usable for element types without a meaningful `Ord`, `10` sorts before `9`.
pub fn by_string<T: Display + 'static>() -> Comparator<T> {
    Arc::new(|a: &T, b: &T| a.to_string().cmp(&b.to_string()))
}

/// Adapts a three-way comparison into the `is_less` predicate form.
#[inline]
pub fn less_than<T, F>(mut compare: F) -> impl FnMut(&T, &T) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    move |a: &T, b: &T| compare(a, b) == Ordering::Less
}

macro_rules! ord_comparators {
    ($($t:ident),*) => {
        paste! {
            $(
                #[doc = "Increasing order for `" $t "`."]
                #[inline]
                pub fn [<compare_ $t>](a: &$t, b: &$t) -> Ordering {
                    a.cmp(b)
                }
            )*
        }
    };
}

ord_comparators!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char);

macro_rules! float_comparators {
    ($($t:ident),*) => {
        paste! {
            $(
                #[doc = "Total order for `" $t "`, as defined by `" $t "::total_cmp`."]
                ///
                /// Negative zero sorts before positive zero, NaNs sort to the ends.
                #[inline]
                pub fn [<compare_ $t>](a: &$t, b: &$t) -> Ordering {
                    a.total_cmp(b)
                }
            )*
        }
    };
}

float_comparators!(f32, f64);

/// Byte-wise order for strings.
#[inline]
pub fn compare_str(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

/// Byte-wise order for owned strings.
#[inline]
pub fn compare_string(a: &String, b: &String) -> Ordering {
    a.as_str().cmp(b.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_comparators() {
        assert_eq!(compare_i64(&-3, &2), Ordering::Less);
        assert_eq!(compare_u8(&7, &7), Ordering::Equal);
        assert_eq!(compare_f64(&f64::NAN, &1.0), Ordering::Greater);
        assert_eq!(compare_f32(&-0.0, &0.0), Ordering::Less);
        assert_eq!(compare_str("a", "b"), Ordering::Less);
        assert_eq!(
            compare_string(&"b".to_string(), &"a".to_string()),
            Ordering::Greater
        );
    }

    #[test]
    fn less_than_adapter() {
        let mut is_less = less_than(|a: &i32, b: &i32| a.cmp(b));
        assert!(is_less(&1, &2));
        assert!(!is_less(&2, &2));
        assert!(!is_less(&3, &2));

        let mut by_len = less_than(|a: &String, b: &String| a.len().cmp(&b.len()));
        assert!(by_len(&"z".to_string(), &"aa".to_string()));
    }

    #[test]
    fn by_string_is_lexicographic() {
        let cmp = by_string::<i32>();
        assert_eq!(cmp(&10, &9), Ordering::Less);
        assert_eq!(reverse::<i32>()(&10, &9), Ordering::Less);
        assert_eq!(natural::<i32>()(&10, &9), Ordering::Greater);
    }
}
