//! Access modes, chosen once per instance through a type parameter.
//!
//! [`Exclusive`] keeps the buffer in a `RefCell`. There is no locking, and the sequence is
//! `!Sync`, so the compiler rejects sharing it between threads. [`Shared`] keeps the buffer in
//! a `parking_lot::RwLock`: read-only operations take the shared lock, mutating operations
//! the exclusive one.
//!
//! Both modes release their guard on every exit path, including a panicking closure. Calling
//! back into the same instance while one of its guards is held is outside the contract: it
//! panics in `Exclusive` mode when a write is involved and deadlocks in `Shared` mode.

use std::cell::RefCell;

use parking_lot::RwLock;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Exclusive {}
    impl Sealed for super::Shared {}
}

/// Synchronization strategy of a sequence.
pub trait AccessMode: sealed::Sealed + Send + Sync + 'static {
    /// Interior-mutable holder of the sequence state.
    type Cell<X>;

    /// Whether operations are guarded by a lock.
    const SHARED: bool;

    /// Name used in `Debug` output.
    const NAME: &'static str;

    #[doc(hidden)]
    fn new_cell<X>(value: X) -> Self::Cell<X>;

    #[doc(hidden)]
    fn read<X, R>(cell: &Self::Cell<X>, f: impl FnOnce(&X) -> R) -> R;

    #[doc(hidden)]
    fn write<X, R>(cell: &Self::Cell<X>, f: impl FnOnce(&mut X) -> R) -> R;

    #[doc(hidden)]
    fn get_mut<X>(cell: &mut Self::Cell<X>) -> &mut X;

    #[doc(hidden)]
    fn into_inner<X>(cell: Self::Cell<X>) -> X;
}

/// Single-owner mode without synchronization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exclusive;

/// Concurrency-safe mode guarded by a reader-writer lock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Shared;

impl AccessMode for Exclusive {
    type Cell<X> = RefCell<X>;

    const SHARED: bool = false;
    const NAME: &'static str = "exclusive";

    #[inline]
    fn new_cell<X>(value: X) -> Self::Cell<X> {
        RefCell::new(value)
    }

    #[inline]
    fn read<X, R>(cell: &Self::Cell<X>, f: impl FnOnce(&X) -> R) -> R {
        f(&cell.borrow())
    }

    #[inline]
    fn write<X, R>(cell: &Self::Cell<X>, f: impl FnOnce(&mut X) -> R) -> R {
        f(&mut cell.borrow_mut())
    }

    #[inline]
    fn get_mut<X>(cell: &mut Self::Cell<X>) -> &mut X {
        cell.get_mut()
    }

    #[inline]
    fn into_inner<X>(cell: Self::Cell<X>) -> X {
        cell.into_inner()
    }
}

impl AccessMode for Shared {
    type Cell<X> = RwLock<X>;

    const SHARED: bool = true;
    const NAME: &'static str = "shared";

    #[inline]
    fn new_cell<X>(value: X) -> Self::Cell<X> {
        RwLock::new(value)
    }

    #[inline]
    fn read<X, R>(cell: &Self::Cell<X>, f: impl FnOnce(&X) -> R) -> R {
        f(&cell.read())
    }

    #[inline]
    fn write<X, R>(cell: &Self::Cell<X>, f: impl FnOnce(&mut X) -> R) -> R {
        f(&mut cell.write())
    }

    #[inline]
    fn get_mut<X>(cell: &mut Self::Cell<X>) -> &mut X {
        cell.get_mut()
    }

    #[inline]
    fn into_inner<X>(cell: Self::Cell<X>) -> X {
        cell.into_inner()
    }
}
