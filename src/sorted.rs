//! Sequence variant that keeps its elements ordered by a comparator.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::iter;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::compare::{self, Comparator};
use crate::error::Result;
use crate::mode::{AccessMode, Exclusive};
use crate::quicksort;
use crate::random;
use crate::seq::{self, MergeSource};
use crate::typed::Step;

pub(crate) struct SortedState<T> {
    pub(crate) buf: Vec<T>,
    comparator: Comparator<T>,
    unique: bool,
}

impl<T> SortedState<T> {
    fn new(buf: Vec<T>, comparator: Comparator<T>) -> Self {
        let mut state = Self {
            buf,
            comparator,
            unique: false,
        };
        state.resort();
        state
    }

    fn resort(&mut self) {
        let cmp = &self.comparator;

        // The engine is quadratic on ordered input, which is the common case here.
        if !quicksort::is_sorted_by(&self.buf, |a, b| cmp(a, b)) {
            quicksort::sort_by(&mut self.buf, |a, b| cmp(a, b));
        }
    }

    /// First position whose element doesn't compare `Less` than `value`.
    fn lower_bound(&self, value: &T) -> usize {
        let cmp = &self.comparator;
        let mut is_less = compare::less_than(|a: &T, b: &T| cmp(a, b));
        self.buf.partition_point(|x| is_less(x, value))
    }

    fn search(&self, value: &T) -> Option<usize> {
        let pos = self.lower_bound(value);
        let found =
            pos < self.buf.len() && (self.comparator)(&self.buf[pos], value) == Ordering::Equal;
        found.then_some(pos)
    }

    fn insert(&mut self, value: T) -> bool {
        let pos = self.lower_bound(&value);

        if self.unique
            && pos < self.buf.len()
            && (self.comparator)(&self.buf[pos], &value) == Ordering::Equal
        {
            return false;
        }

        self.buf.insert(pos, value);
        true
    }

    fn remove_value(&mut self, value: &T) -> bool {
        match self.search(value) {
            Some(i) => {
                self.buf.remove(i);
                true
            }
            None => false,
        }
    }
}

/// Restores the order when dropped, so a closure that unwinds can't leave the buffer unsorted.
struct ResortOnDrop<'a, T> {
    state: &'a mut SortedState<T>,
}

impl<T> Drop for ResortOnDrop<'_, T> {
    fn drop(&mut self) {
        self.state.resort();
    }
}

/// A sequence whose elements are always ordered by its comparator.
///
/// Insertion is a binary search followed by a splice. With [`set_unique`](Self::set_unique)
/// enabled, values comparing `Equal` to an existing element are skipped.
///
/// Only order-preserving mutations are offered. [`walk`](Self::walk) and
/// [`lock_func`](Self::lock_func) hand out the raw buffer and re-sort afterwards.
///
/// ```
/// use richseq::{compare, SortedSeq};
///
/// let seq = SortedSeq::<i32>::new(compare::reverse());
/// seq.add([3, 9, 1]);
/// assert_eq!(seq.to_vec(), [9, 3, 1]);
/// ```
pub struct SortedSeq<T, M: AccessMode = Exclusive> {
    cell: M::Cell<SortedState<T>>,
}

impl<T, M: AccessMode> SortedSeq<T, M> {
    // --- Construction ---

    /// Creates an empty sorted sequence ordered by `comparator`.
    pub fn new(comparator: Comparator<T>) -> Self {
        Self::from_vec(Vec::new(), comparator)
    }

    pub fn with_capacity(capacity: usize, comparator: Comparator<T>) -> Self {
        Self::from_vec(Vec::with_capacity(capacity), comparator)
    }

    /// Takes ownership of `values` and sorts them once.
    pub fn from_vec(values: Vec<T>, comparator: Comparator<T>) -> Self {
        Self {
            cell: M::new_cell(SortedState::new(values, comparator)),
        }
    }

    pub fn from_slice(values: &[T], comparator: Comparator<T>) -> Self
    where
        T: Clone,
    {
        Self::from_vec(values.to_vec(), comparator)
    }

    /// Creates a sequence counting from `start` to `end` inclusive by `step`, in natural order.
    pub fn from_range(start: T, end: T, step: T) -> Result<Self>
    where
        T: Step + Ord + 'static,
    {
        Ok(Self::from_vec(
            seq::range_values(start, end, step)?,
            compare::natural(),
        ))
    }

    #[inline]
    fn read<R>(&self, f: impl FnOnce(&SortedState<T>) -> R) -> R {
        M::read(&self.cell, f)
    }

    #[inline]
    fn write<R>(&self, f: impl FnOnce(&mut SortedState<T>) -> R) -> R {
        M::write(&self.cell, f)
    }

    #[inline]
    pub(crate) fn read_buf<R>(&self, f: impl FnOnce(&Vec<T>) -> R) -> R {
        self.read(|state| f(&state.buf))
    }

    pub fn is_shared(&self) -> bool {
        M::SHARED
    }

    // --- Configuration ---

    /// Enables or disables duplicate rejection for future insertions.
    ///
    /// Existing duplicates are kept, call [`unique`](Self::unique) to drop them.
    pub fn set_unique(&self, unique: bool) -> &Self {
        self.write(|state| state.unique = unique);
        self
    }

    pub fn is_unique(&self) -> bool {
        self.read(|state| state.unique)
    }

    /// Replaces the comparator and re-sorts the elements.
    pub fn set_comparator(&self, comparator: Comparator<T>) -> &Self {
        self.write(|state| {
            state.comparator = comparator;
            state.resort();
            log::debug!("comparator replaced, re-sorted {} values", state.buf.len());
        });
        self
    }

    pub fn comparator(&self) -> Comparator<T> {
        self.read(|state| state.comparator.clone())
    }

    // --- Reading ---

    pub fn get(&self, index: isize) -> Option<T>
    where
        T: Clone,
    {
        self.read_buf(|v| seq::valid_index(index, v.len()).map(|i| v[i].clone()))
    }

    pub fn at(&self, index: isize) -> T
    where
        T: Clone + Default,
    {
        self.get(index).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.read_buf(|v| v.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.read_buf(|v| v.capacity())
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.read_buf(|v| v.clone())
    }

    pub fn into_vec(self) -> Vec<T> {
        M::into_inner(self.cell).buf
    }

    /// Binary searches for the first element comparing `Equal` to `value`.
    pub fn search(&self, value: &T) -> Option<usize> {
        self.read(|state| state.search(value))
    }

    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    /// See [`Seq::range`](crate::Seq::range).
    pub fn range(&self, start: isize, end: Option<isize>) -> Vec<T>
    where
        T: Clone,
    {
        self.read_buf(|v| match seq::range_bounds(v.len(), start, end) {
            Some((from, to)) => v[from..to].to_vec(),
            None => Vec::new(),
        })
    }

    /// See [`Seq::sub_slice`](crate::Seq::sub_slice).
    pub fn sub_slice(&self, offset: isize, length: Option<isize>) -> Vec<T>
    where
        T: Clone,
    {
        self.read_buf(|v| match seq::sub_slice_bounds(v.len(), offset, length) {
            Some((from, to)) => v[from..to].to_vec(),
            None => Vec::new(),
        })
    }

    pub fn chunk(&self, size: isize) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        if size < 1 {
            return Vec::new();
        }

        self.read_buf(|v| v.chunks(size as usize).map(<[T]>::to_vec).collect())
    }

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
        self.read_buf(|v| v.choose(rng).cloned())
    }

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
        self.read_buf(|v| {
            if v.is_empty() {
                return Vec::new();
            }

            (0..size)
                .map(|_| v[rng.gen_range(0..v.len())].clone())
                .collect()
        })
    }

    pub fn join(&self, glue: &str) -> String
    where
        T: fmt::Display,
    {
        self.read_buf(|v| seq::join_values(v, glue))
    }

    pub fn count_values(&self) -> HashMap<T, usize>
    where
        T: Eq + Hash + Clone,
    {
        self.read_buf(|v| seq::count_values(v))
    }

    pub fn sum(&self) -> T
    where
        T: Clone + iter::Sum<T>,
    {
        self.read_buf(|v| v.iter().cloned().sum())
    }

    pub fn iterator(&self, f: impl FnMut(usize, &T) -> bool) {
        self.iterator_asc(f);
    }

    pub fn iterator_asc(&self, mut f: impl FnMut(usize, &T) -> bool) {
        self.read_buf(|v| {
            for (i, item) in v.iter().enumerate() {
                if !f(i, item) {
                    break;
                }
            }
        });
    }

    pub fn iterator_desc(&self, mut f: impl FnMut(usize, &T) -> bool) {
        self.read_buf(|v| {
            for (i, item) in v.iter().enumerate().rev() {
                if !f(i, item) {
                    break;
                }
            }
        });
    }

    pub fn r_lock_func<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        self.read_buf(|v| f(v))
    }

    // --- Writing ---

    /// Inserts every value at its ordered position.
    pub fn add(&self, values: impl IntoIterator<Item = T>) -> &Self {
        self.write(|state| {
            for value in values {
                state.insert(value);
            }
        });
        self
    }

    /// Alias of [`SortedSeq::add`].
    pub fn append(&self, values: impl IntoIterator<Item = T>) -> &Self {
        self.add(values)
    }

    /// Replaces the elements and sorts them once.
    pub fn set_vec(&self, values: Vec<T>) -> &Self {
        self.write(|state| {
            state.buf = values;
            state.resort();
        });
        self
    }

    /// Re-applies the comparator order.
    pub fn sort(&self) -> &Self {
        self.write(|state| state.resort());
        self
    }

    pub fn remove(&self, index: isize) -> Option<T> {
        self.write(|state| {
            seq::valid_index(index, state.buf.len()).map(|i| state.buf.remove(i))
        })
    }

    /// Removes the first element comparing `Equal` to `value`.
    pub fn remove_value(&self, value: &T) -> bool {
        self.write(|state| state.remove_value(value))
    }

    pub fn remove_values(&self, values: &[T]) {
        self.write(|state| {
            for value in values {
                state.remove_value(value);
            }
        });
    }

    pub fn pop_left(&self) -> Option<T> {
        self.write(|state| (!state.buf.is_empty()).then(|| state.buf.remove(0)))
    }

    pub fn pop_right(&self) -> Option<T> {
        self.write(|state| state.buf.pop())
    }

    pub fn pop_lefts(&self, size: usize) -> Vec<T> {
        self.write(|state| seq::pop_lefts(&mut state.buf, size))
    }

    pub fn pop_rights(&self, size: usize) -> Vec<T> {
        self.write(|state| seq::pop_rights(&mut state.buf, size))
    }

    pub fn pop_rand(&self) -> Option<T> {
        self.pop_rand_with(&mut random::rng())
    }

    pub fn pop_rand_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<T> {
        self.write(|state| seq::pop_rand(&mut state.buf, rng))
    }

    pub fn pop_rands(&self, size: usize) -> Vec<T> {
        self.pop_rands_with(size, &mut random::rng())
    }

    pub fn pop_rands_with<R: Rng + ?Sized>(&self, size: usize, rng: &mut R) -> Vec<T> {
        self.write(|state| seq::pop_rands(&mut state.buf, size, rng))
    }

    pub fn clear(&self) -> &Self {
        self.write(|state| state.buf.clear());
        self
    }

    /// Removes adjacent elements comparing `Equal`, which on an ordered buffer drops every
    /// duplicate.
    pub fn unique(&self) -> &Self {
        self.write(|state| {
            let cmp = &state.comparator;
            state.buf.dedup_by(|a, b| cmp(&*a, &*b) == Ordering::Equal);
        });
        self
    }

    /// See [`Seq::filter`](crate::Seq::filter).
    pub fn filter(&self, predicate: impl FnMut(usize, &T) -> bool) -> &Self {
        self.write(|state| seq::filter_in_place(&mut state.buf, predicate));
        self
    }

    pub fn filter_empty(&self) -> &Self
    where
        T: Default + PartialEq,
    {
        self.write(|state| seq::filter_empty(&mut state.buf));
        self
    }

    /// Replaces every element `v` with `f(&v)` and re-sorts.
    pub fn walk(&self, mut f: impl FnMut(&T) -> T) -> &Self {
        self.write(|state| {
            let guard = ResortOnDrop { state };
            for item in guard.state.buf.iter_mut() {
                *item = f(item);
            }
        });
        self
    }

    /// Runs `f` on the raw buffer while holding the exclusive lock, then re-sorts.
    ///
    /// The order is restored even if `f` panics.
    pub fn lock_func<R>(&self, f: impl FnOnce(&mut Vec<T>) -> R) -> R {
        self.write(|state| {
            let guard = ResortOnDrop { state };
            f(&mut guard.state.buf)
        })
    }

    /// Inserts every value of `other` at its ordered position.
    pub fn merge<S>(&self, other: &S) -> &Self
    where
        S: MergeSource<T> + ?Sized,
    {
        let values = other.to_merge_vec();
        self.add(values)
    }

    pub fn merge_slice(&self, values: &[T]) -> &Self
    where
        T: Clone,
    {
        self.merge(values)
    }
}

impl<T: Clone, M: AccessMode> MergeSource<T> for SortedSeq<T, M> {
    fn to_merge_vec(&self) -> Vec<T> {
        self.to_vec()
    }
}

impl<T: Ord + 'static, M: AccessMode> Default for SortedSeq<T, M> {
    fn default() -> Self {
        Self::new(compare::natural())
    }
}

impl<T: Clone, M: AccessMode> Clone for SortedSeq<T, M> {
    fn clone(&self) -> Self {
        self.read(|state| Self {
            cell: M::new_cell(SortedState {
                buf: state.buf.clone(),
                comparator: state.comparator.clone(),
                unique: state.unique,
            }),
        })
    }
}

impl<T: fmt::Debug, M: AccessMode> fmt::Debug for SortedSeq<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.read(|state| {
            f.debug_struct("SortedSeq")
                .field("mode", &M::NAME)
                .field("unique", &state.unique)
                .field("values", &state.buf)
                .finish()
        })
    }
}

impl<T: fmt::Display, M: AccessMode> fmt::Display for SortedSeq<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.read_buf(|v| seq::write_json_like(f, v))
    }
}

impl<T: PartialEq, M: AccessMode, M2: AccessMode> PartialEq<SortedSeq<T, M2>>
    for SortedSeq<T, M>
{
    fn eq(&self, other: &SortedSeq<T, M2>) -> bool {
        let this = (self as *const Self).cast::<()>();
        let that = (other as *const SortedSeq<T, M2>).cast::<()>();

        // Lock in address order, see `Seq`'s `PartialEq`.
        match this.cmp(&that) {
            Ordering::Equal => true,
            Ordering::Less => self.read_buf(|a| other.read_buf(|b| a == b)),
            Ordering::Greater => other.read_buf(|b| self.read_buf(|a| a == b)),
        }
    }
}

impl<T: Ord + 'static, M: AccessMode> From<Vec<T>> for SortedSeq<T, M> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values, compare::natural())
    }
}

impl<T: Ord + 'static, M: AccessMode> FromIterator<T> for SortedSeq<T, M> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T, M: AccessMode> Extend<T> for SortedSeq<T, M> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let state = M::get_mut(&mut self.cell);
        for value in iter {
            state.insert(value);
        }
    }
}

impl<T, M: AccessMode> IntoIterator for SortedSeq<T, M> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}
