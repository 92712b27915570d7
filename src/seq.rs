//! The generic dynamic array.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::iter;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{check_index, Result, SeqError};
use crate::mode::{AccessMode, Exclusive};
use crate::quicksort;
use crate::random;
use crate::typed::Step;

/// An ordered, index addressable sequence with PHP-array style helpers.
///
/// The access mode `M` is fixed by the type: `Seq<T>` (alias `Seq<T, Exclusive>`) has no
/// locking and can't be shared between threads, `Seq<T, Shared>` guards every operation with a
/// reader-writer lock and can be put behind an `Arc`.
///
/// All operations take `&self`. Lookups that can miss return `Option`, `bool` or an empty
/// `Vec`, misconfigured calls return [`SeqError`].
///
/// ```
/// use richseq::Seq;
///
/// let seq = Seq::<i32>::from_vec(vec![0, 1, 2, 3, 4, 5, 6]);
/// assert_eq!(seq.sub_slice(-2, Some(2)), [5, 6]);
/// assert_eq!(seq.chunk(3), [vec![0, 1, 2], vec![3, 4, 5], vec![6]]);
/// ```
pub struct Seq<T, M: AccessMode = Exclusive> {
    cell: M::Cell<Vec<T>>,
}

impl<T, M: AccessMode> Seq<T, M> {
    // --- Construction ---

    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Creates an empty sequence with at least `capacity` slots allocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_vec(Vec::with_capacity(capacity))
    }

    /// Creates a sequence of `size` default values with at least `capacity` slots allocated.
    pub fn with_size(size: usize, capacity: usize) -> Self
    where
        T: Default,
    {
        let mut values = Vec::with_capacity(capacity.max(size));
        values.resize_with(size, T::default);
        Self::from_vec(values)
    }

    /// Takes ownership of `values` without copying.
    pub fn from_vec(values: Vec<T>) -> Self {
        Self {
            cell: M::new_cell(values),
        }
    }

    /// Creates an independent sequence from a copy of `values`.
    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_vec(values.to_vec())
    }

    /// Creates a sequence counting from `start` to `end` inclusive by `step`.
    ///
    /// A negative step counts down. A step of zero is rejected with
    /// [`SeqError::InvalidStep`].
    ///
    /// ```
    /// use richseq::Seq;
    ///
    /// let seq = Seq::<i64>::from_range(1, 10, 3)?;
    /// assert_eq!(seq.to_vec(), [1, 4, 7, 10]);
    /// # Ok::<(), richseq::SeqError>(())
    /// ```
    pub fn from_range(start: T, end: T, step: T) -> Result<Self>
    where
        T: Step,
    {
        Ok(Self::from_vec(range_values(start, end, step)?))
    }

    // --- Access helpers ---

    #[inline]
    pub(crate) fn read<R>(&self, f: impl FnOnce(&Vec<T>) -> R) -> R {
        M::read(&self.cell, f)
    }

    #[inline]
    pub(crate) fn write<R>(&self, f: impl FnOnce(&mut Vec<T>) -> R) -> R {
        M::write(&self.cell, f)
    }

    /// Whether this instance is guarded by a lock.
    pub fn is_shared(&self) -> bool {
        M::SHARED
    }

    // --- Reading ---

    /// Returns the value at `index`, or `None` if `index` is out of range.
    pub fn get(&self, index: isize) -> Option<T>
    where
        T: Clone,
    {
        self.read(|v| valid_index(index, v.len()).map(|i| v[i].clone()))
    }

    /// Returns the value at `index`, or the zero value if `index` is out of range.
    pub fn at(&self, index: isize) -> T
    where
        T: Clone + Default,
    {
        self.get(index).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.read(|v| v.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.read(|v| v.capacity())
    }

    /// Returns a copy of the underlying values.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.read(|v| v.clone())
    }

    pub fn into_vec(self) -> Vec<T> {
        M::into_inner(self.cell)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.search(value).is_some()
    }

    /// Returns the index of the first element equal to `value`.
    pub fn search(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.read(|v| v.iter().position(|x| x == value))
    }

    /// Picks `[start, end)`, like `values[start..end]` with clamping.
    ///
    /// `end = None` means to the end of the sequence, a negative `end` counts from the end. A
    /// negative `start` is treated as `0`. Whenever `start` lies beyond the resulting end the
    /// result is empty.
    pub fn range(&self, start: isize, end: Option<isize>) -> Vec<T>
    where
        T: Clone,
    {
        self.read(|v| match range_bounds(v.len(), start, end) {
            Some((from, to)) => v[from..to].to_vec(),
            None => Vec::new(),
        })
    }

    /// Returns the elements selected by `offset` and `length`, `array_slice` style.
    ///
    /// A negative `offset` starts that far from the end. A positive `length` caps the result,
    /// a negative one moves the start back by `abs(length)` and takes `abs(length)` elements.
    /// `length = None` takes everything from `offset` to the end. Any selection crossing the
    /// left border of the sequence yields an empty result.
    ///
    /// ```
    /// use richseq::Seq;
    ///
    /// let seq = Seq::<i32>::from_vec(vec![0, 1, 2, 3, 4, 5, 6]);
    /// assert_eq!(seq.sub_slice(-1, Some(-3)), [3, 4, 5]);
    /// assert!(seq.sub_slice(-9, Some(2)).is_empty());
    /// ```
    pub fn sub_slice(&self, offset: isize, length: Option<isize>) -> Vec<T>
    where
        T: Clone,
    {
        self.read(|v| match sub_slice_bounds(v.len(), offset, length) {
            Some((from, to)) => v[from..to].to_vec(),
            None => Vec::new(),
        })
    }

    /// Splits the values into groups of `size`, the last group may be smaller.
    ///
    /// Returns an empty result for `size < 1`.
    pub fn chunk(&self, size: isize) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        if size < 1 {
            return Vec::new();
        }

        self.read(|v| v.chunks(size as usize).map(<[T]>::to_vec).collect())
    }

    /// Returns a random element without removing it.
    pub fn rand(&self) -> Option<T>
    where
        T: Clone,
    {
        self.rand_with(&mut random::rng())
    }

    pub fn rand_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<T>
    where
        T: Clone,
    {
        self.read(|v| v.choose(rng).cloned())
    }

    /// Returns `size` random elements, with replacement, without removing them.
    pub fn rands(&self, size: usize) -> Vec<T>
    where
        T: Clone,
    {
        self.rands_with(size, &mut random::rng())
    }

    pub fn rands_with<R: Rng + ?Sized>(&self, size: usize, rng: &mut R) -> Vec<T>
    where
        T: Clone,
    {
        self.read(|v| {
            if v.is_empty() {
                return Vec::new();
            }

            (0..size)
                .map(|_| v[rng.gen_range(0..v.len())].clone())
                .collect()
        })
    }

    /// Joins the `Display` form of every element with `glue`.
    pub fn join(&self, glue: &str) -> String
    where
        T: fmt::Display,
    {
        self.read(|v| join_values(v, glue))
    }

    /// Counts the occurrences of every value.
    pub fn count_values(&self) -> HashMap<T, usize>
    where
        T: Eq + Hash + Clone,
    {
        self.read(|v| count_values(v))
    }

    pub fn sum(&self) -> T
    where
        T: Clone + iter::Sum<T>,
    {
        self.read(|v| v.iter().cloned().sum())
    }

    /// Alias of [`Seq::iterator_asc`].
    pub fn iterator(&self, f: impl FnMut(usize, &T) -> bool) {
        self.iterator_asc(f);
    }

    /// Calls `f` with every index and value in ascending order until it returns `false`.
    ///
    /// The shared lock is held for the whole iteration.
    pub fn iterator_asc(&self, mut f: impl FnMut(usize, &T) -> bool) {
        self.read(|v| {
            for (i, item) in v.iter().enumerate() {
                if !f(i, item) {
                    break;
                }
            }
        });
    }

    /// Calls `f` with every index and value in descending order until it returns `false`.
    pub fn iterator_desc(&self, mut f: impl FnMut(usize, &T) -> bool) {
        self.read(|v| {
            for (i, item) in v.iter().enumerate().rev() {
                if !f(i, item) {
                    break;
                }
            }
        });
    }

    /// Runs `f` on the raw values while holding the shared lock.
    pub fn r_lock_func<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        self.read(|v| f(v))
    }

    // --- Writing ---

    /// Writes `value` at `index`. Never grows the sequence.
    pub fn set(&self, index: isize, value: T) -> Result<()> {
        self.write(|v| {
            let i = check_index(index, v.len())?;
            v[i] = value;
            Ok(())
        })
    }

    /// Replaces the underlying values.
    pub fn set_vec(&self, values: Vec<T>) -> &Self {
        self.write(|v| *v = values);
        self
    }

    /// Overwrites the values from the beginning with `values`. Never grows the sequence.
    pub fn replace(&self, values: &[T]) -> &Self
    where
        T: Clone,
    {
        self.write(|v| {
            let n = v.len().min(values.len());
            v[..n].clone_from_slice(&values[..n]);
        });
        self
    }

    /// Inserts `values` in front of `index`.
    pub fn insert_before(&self, index: isize, values: impl IntoIterator<Item = T>) -> Result<()> {
        self.write(|v| {
            let i = check_index(index, v.len())?;
            v.splice(i..i, values);
            Ok(())
        })
    }

    /// Inserts `values` behind `index`.
    pub fn insert_after(&self, index: isize, values: impl IntoIterator<Item = T>) -> Result<()> {
        self.write(|v| {
            let i = check_index(index, v.len())? + 1;
            v.splice(i..i, values);
            Ok(())
        })
    }

    /// Removes and returns the value at `index`, or `None` if `index` is out of range.
    pub fn remove(&self, index: isize) -> Option<T> {
        self.write(|v| valid_index(index, v.len()).map(|i| v.remove(i)))
    }

    /// Removes the first element equal to `value`. Returns whether one was found.
    pub fn remove_value(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.write(|v| remove_first(v, value))
    }

    /// Removes the first element equal to each of `values`.
    pub fn remove_values(&self, values: &[T])
    where
        T: PartialEq,
    {
        self.write(|v| {
            for value in values {
                remove_first(v, value);
            }
        });
    }

    /// Pushes `values` to the beginning, keeping their order.
    pub fn push_left(&self, values: impl IntoIterator<Item = T>) -> &Self {
        self.write(|v| {
            v.splice(0..0, values);
        });
        self
    }

    /// Pushes `values` to the end.
    pub fn push_right(&self, values: impl IntoIterator<Item = T>) -> &Self {
        self.write(|v| v.extend(values));
        self
    }

    /// Alias of [`Seq::push_right`].
    pub fn append(&self, values: impl IntoIterator<Item = T>) -> &Self {
        self.push_right(values)
    }

    pub fn pop_left(&self) -> Option<T> {
        self.write(|v| (!v.is_empty()).then(|| v.remove(0)))
    }

    pub fn pop_right(&self) -> Option<T> {
        self.write(|v| v.pop())
    }

    /// Removes and returns up to `size` values from the beginning.
    pub fn pop_lefts(&self, size: usize) -> Vec<T> {
        self.write(|v| pop_lefts(v, size))
    }

    /// Removes and returns up to `size` values from the end, in sequence order.
    pub fn pop_rights(&self, size: usize) -> Vec<T> {
        self.write(|v| pop_rights(v, size))
    }

    /// Removes and returns a random element.
    pub fn pop_rand(&self) -> Option<T> {
        self.pop_rand_with(&mut random::rng())
    }

    pub fn pop_rand_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<T> {
        self.write(|v| pop_rand(v, rng))
    }

    /// Removes and returns up to `size` random elements, without replacement.
    ///
    /// When `size` covers the whole sequence, every element is returned in random order and
    /// the sequence is left empty.
    pub fn pop_rands(&self, size: usize) -> Vec<T> {
        self.pop_rands_with(size, &mut random::rng())
    }

    pub fn pop_rands_with<R: Rng + ?Sized>(&self, size: usize, rng: &mut R) -> Vec<T> {
        self.write(|v| pop_rands(v, size, rng))
    }

    /// Removes all values. The allocated capacity is kept.
    pub fn clear(&self) -> &Self {
        self.write(|v| v.clear());
        self
    }

    /// Sorts in increasing order with the quicksort engine.
    pub fn sort(&self) -> &Self
    where
        T: Ord,
    {
        self.write(|v| quicksort::sort(v));
        self
    }

    /// Sorts in decreasing order with the quicksort engine.
    pub fn sort_desc(&self) -> &Self
    where
        T: Ord,
    {
        self.write(|v| quicksort::sort_desc(v));
        self
    }

    /// Sorts with a three-way comparator.
    pub fn sort_by(&self, compare: impl FnMut(&T, &T) -> Ordering) -> &Self {
        self.write(|v| quicksort::sort_by(v, compare));
        self
    }

    /// Sorts with a `less` predicate.
    pub fn sort_func(&self, less: impl FnMut(&T, &T) -> bool) -> &Self {
        self.write(|v| quicksort::sort_by_less(v, less));
        self
    }

    /// Removes repeated values in place, keeping first occurrences in order.
    ///
    /// Only `PartialEq` is required, which makes this *O*(*n*^2).
    pub fn unique(&self) -> &Self
    where
        T: PartialEq,
    {
        self.write(|v| unique_in_place(v));
        self
    }

    /// Fills `count` slots starting at `start` with `value`, growing the sequence as needed.
    ///
    /// `start` must lie in `[0, len]`.
    pub fn fill(&self, start: isize, count: usize, value: T) -> Result<()>
    where
        T: Clone,
    {
        self.write(|v| {
            if start < 0 || start as usize > v.len() {
                return Err(SeqError::index_out_of_range(start, v.len()));
            }

            let start = start as usize;
            let end = start
                .checked_add(count)
                .ok_or_else(|| SeqError::index_out_of_range(start as isize, v.len()))?;
            let overlap_end = end.min(v.len());

            v[start..overlap_end].fill(value.clone());
            if end > v.len() {
                v.resize(end, value);
            }

            Ok(())
        })
    }

    /// Pads to `abs(size)` elements with `value`, on the right if `size` is positive, on the
    /// left if negative. No-op if `abs(size)` doesn't exceed the current length.
    pub fn pad(&self, size: isize, value: T) -> &Self
    where
        T: Clone,
    {
        self.write(|v| pad(v, size, value));
        self
    }

    pub fn shuffle(&self) -> &Self {
        self.shuffle_with(&mut random::rng())
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &Self {
        self.write(|v| v.shuffle(rng));
        self
    }

    pub fn reverse(&self) -> &Self {
        self.write(|v| v.reverse());
        self
    }

    /// Removes every element for which `predicate(index, value)` returns true.
    ///
    /// A single compacting pass, kept elements retain their relative order. `index` is the
    /// position the element currently occupies, i.e. the number of elements kept before it.
    pub fn filter(&self, predicate: impl FnMut(usize, &T) -> bool) -> &Self {
        self.write(|v| filter_in_place(v, predicate));
        self
    }

    /// Removes every element equal to `T::default()`.
    pub fn filter_empty(&self) -> &Self
    where
        T: Default + PartialEq,
    {
        self.write(|v| filter_empty(v));
        self
    }

    /// Replaces every element `v` with `f(&v)`, in index order.
    pub fn walk(&self, mut f: impl FnMut(&T) -> T) -> &Self {
        self.write(|v| {
            for item in v.iter_mut() {
                *item = f(item);
            }
        });
        self
    }

    /// Runs `f` on the raw values while holding the exclusive lock.
    ///
    /// Nothing else can access the sequence until `f` returns or unwinds. A slow `f` stalls
    /// every other caller.
    pub fn lock_func<R>(&self, f: impl FnOnce(&mut Vec<T>) -> R) -> R {
        self.write(f)
    }

    /// Appends all values of `other`: another sequence, a sorted sequence, a `Vec`, an array or
    /// a slice.
    ///
    /// `other` is copied under its own lock first, so merging a sequence into itself is fine.
    pub fn merge<S>(&self, other: &S) -> &Self
    where
        S: MergeSource<T> + ?Sized,
    {
        let values = other.to_merge_vec();
        self.write(|v| v.extend(values));
        self
    }

    /// Appends a copy of `values`.
    pub fn merge_slice(&self, values: &[T]) -> &Self
    where
        T: Clone,
    {
        self.merge(values)
    }
}

/// Anything whose values can be appended by [`Seq::merge`] and
/// [`SortedSeq::merge`](crate::SortedSeq::merge).
pub trait MergeSource<T> {
    /// Copies out the values to merge.
    fn to_merge_vec(&self) -> Vec<T>;
}

impl<T: Clone> MergeSource<T> for [T] {
    fn to_merge_vec(&self) -> Vec<T> {
        self.to_vec()
    }
}

impl<T: Clone, const N: usize> MergeSource<T> for [T; N] {
    fn to_merge_vec(&self) -> Vec<T> {
        self.to_vec()
    }
}

impl<T: Clone> MergeSource<T> for Vec<T> {
    fn to_merge_vec(&self) -> Vec<T> {
        self.clone()
    }
}

impl<T: Clone, M: AccessMode> MergeSource<T> for Seq<T, M> {
    fn to_merge_vec(&self) -> Vec<T> {
        self.to_vec()
    }
}

impl<T, M: AccessMode> Default for Seq<T, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, M: AccessMode> Clone for Seq<T, M> {
    fn clone(&self) -> Self {
        Self::from_vec(self.to_vec())
    }
}

impl<T: fmt::Debug, M: AccessMode> fmt::Debug for Seq<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.read(|v| {
            f.debug_struct("Seq")
                .field("mode", &M::NAME)
                .field("values", v)
                .finish()
        })
    }
}

/// Renders like a JSON array: numeric-looking elements bare, everything else quoted.
impl<T: fmt::Display, M: AccessMode> fmt::Display for Seq<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.read(|v| write_json_like(f, v))
    }
}

impl<T: PartialEq, M: AccessMode, M2: AccessMode> PartialEq<Seq<T, M2>> for Seq<T, M> {
    fn eq(&self, other: &Seq<T, M2>) -> bool {
        let this = (self as *const Self).cast::<()>();
        let that = (other as *const Seq<T, M2>).cast::<()>();

        // Both read locks are held at once. Taking them in address order keeps `a == b` and
        // `b == a` from waiting on each other behind queued writers.
        match this.cmp(&that) {
            Ordering::Equal => true,
            Ordering::Less => self.read(|a| other.read(|b| a == b)),
            Ordering::Greater => other.read(|b| self.read(|a| a == b)),
        }
    }
}

impl<T, M: AccessMode> From<Vec<T>> for Seq<T, M> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T, M: AccessMode> FromIterator<T> for Seq<T, M> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T, M: AccessMode> Extend<T> for Seq<T, M> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        M::get_mut(&mut self.cell).extend(iter);
    }
}

impl<T, M: AccessMode> IntoIterator for Seq<T, M> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

// --- Buffer algorithms shared with the sorted variant ---

pub(crate) fn valid_index(index: isize, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&i| i < len)
}

pub(crate) fn range_values<T: Step>(start: T, end: T, step: T) -> Result<Vec<T>> {
    if step.is_zero() {
        return Err(SeqError::invalid_step(step));
    }

    let descending = step.is_negative();
    let mut values = Vec::new();
    let mut current = start;

    while (!descending && current <= end) || (descending && current >= end) {
        values.push(current);

        match current.checked_step(step) {
            Some(next) => current = next,
            None => break,
        }
    }

    log::debug!(
        "generated {} values from range {start}..={end} step {step}",
        values.len()
    );

    Ok(values)
}

pub(crate) fn range_bounds(
    len: usize,
    start: isize,
    end: Option<isize>,
) -> Option<(usize, usize)> {
    let len = len as isize;

    let mut end = end.unwrap_or(len);
    if end < 0 {
        end += len;
    }
    let end = end.min(len);
    let start = start.max(0);

    if start >= end {
        return None;
    }

    Some((start as usize, end as usize))
}

pub(crate) fn sub_slice_bounds(
    len: usize,
    offset: isize,
    length: Option<isize>,
) -> Option<(usize, usize)> {
    let len = len as isize;
    let mut size = length.unwrap_or(len);
    let mut offset = offset;

    if offset > len {
        return None;
    }

    if offset < 0 {
        offset += len;
        if offset < 0 {
            return None;
        }
    }

    if size < 0 {
        offset = offset.saturating_add(size);
        size = size.saturating_neg();
        if offset < 0 {
            return None;
        }
    }

    let end = offset.saturating_add(size).min(len);
    if offset >= end {
        return None;
    }

    Some((offset as usize, end as usize))
}

pub(crate) fn remove_first<T: PartialEq>(v: &mut Vec<T>, value: &T) -> bool {
    match v.iter().position(|x| x == value) {
        Some(i) => {
            v.remove(i);
            true
        }
        None => false,
    }
}

pub(crate) fn pop_lefts<T>(v: &mut Vec<T>, size: usize) -> Vec<T> {
    let n = size.min(v.len());
    v.drain(..n).collect()
}

pub(crate) fn pop_rights<T>(v: &mut Vec<T>, size: usize) -> Vec<T> {
    let at = v.len() - size.min(v.len());
    v.split_off(at)
}

pub(crate) fn pop_rand<T, R: Rng + ?Sized>(v: &mut Vec<T>, rng: &mut R) -> Option<T> {
    if v.is_empty() {
        return None;
    }

    let i = rng.gen_range(0..v.len());
    Some(v.remove(i))
}

pub(crate) fn pop_rands<T, R: Rng + ?Sized>(v: &mut Vec<T>, size: usize, rng: &mut R) -> Vec<T> {
    if size >= v.len() {
        let capacity = v.capacity();
        let mut all = std::mem::replace(v, Vec::with_capacity(capacity));
        all.shuffle(rng);
        return all;
    }

    // Removing keeps the remaining values in order, which the sorted variant relies on.
    (0..size)
        .map(|_| {
            let i = rng.gen_range(0..v.len());
            v.remove(i)
        })
        .collect()
}

pub(crate) fn unique_in_place<T: PartialEq>(v: &mut Vec<T>) {
    let mut kept = 0;

    for i in 0..v.len() {
        if !v[..kept].contains(&v[i]) {
            v.swap(kept, i);
            kept += 1;
        }
    }

    v.truncate(kept);
}

pub(crate) fn filter_in_place<T>(v: &mut Vec<T>, mut predicate: impl FnMut(usize, &T) -> bool) {
    let mut kept = 0;

    v.retain(|item| {
        let remove = predicate(kept, item);
        if !remove {
            kept += 1;
        }
        !remove
    });
}

pub(crate) fn filter_empty<T: Default + PartialEq>(v: &mut Vec<T>) {
    let empty = T::default();
    v.retain(|item| *item != empty);
}

fn pad<T: Clone>(v: &mut Vec<T>, size: isize, value: T) {
    let target = size.unsigned_abs();
    if target <= v.len() {
        return;
    }

    if size > 0 {
        v.resize(target, value);
    } else {
        let n = target - v.len();
        v.splice(0..0, iter::repeat(value).take(n));
    }
}

pub(crate) fn join_values<T: fmt::Display>(v: &[T], glue: &str) -> String {
    v.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(glue)
}

pub(crate) fn count_values<T: Eq + Hash + Clone>(v: &[T]) -> HashMap<T, usize> {
    let mut counts = HashMap::new();
    for item in v {
        *counts.entry(item.clone()).or_insert(0) += 1;
    }
    counts
}

pub(crate) fn write_json_like<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    v: &[T],
) -> fmt::Result {
    f.write_str("[")?;

    for (i, item) in v.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }

        let s = item.to_string();
        if is_numeric(&s) {
            f.write_str(&s)?;
        } else {
            f.write_str("\"")?;
            for c in s.chars() {
                if c == '"' || c == '\\' {
                    f.write_str("\\")?;
                }
                write!(f, "{c}")?;
            }
            f.write_str("\"")?;
        }
    }

    f.write_str("]")
}

/// Optional leading sign, digits, at most one dot that sits between two digits.
fn is_numeric(s: &str) -> bool {
    let digits = s.strip_prefix(&['-', '+'][..]).unwrap_or(s);
    let bytes = digits.as_bytes();

    if bytes.is_empty() {
        return false;
    }

    let mut dots = 0;
    for (i, b) in bytes.iter().enumerate() {
        match b {
            b'0'..=b'9' => {}
            b'.' => {
                dots += 1;
                let between_digits = i > 0
                    && i + 1 < bytes.len()
                    && bytes[i - 1].is_ascii_digit()
                    && bytes[i + 1].is_ascii_digit();
                if dots > 1 || !between_digits {
                    return false;
                }
            }
            _ => return false,
        }
    }

    true
}
