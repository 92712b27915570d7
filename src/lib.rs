//! Generic dynamic arrays with PHP-array style helpers.
//!
//! [`Seq`] is an ordered, index addressable sequence offering slicing, padding, chunking,
//! random sampling, deduplication and in-place sorting. [`SortedSeq`] keeps its elements
//! ordered by a [`Comparator`] at all times. Both come in two access modes chosen by a type
//! parameter: [`Exclusive`] for single-owner use without locking and [`Shared`] for use across
//! threads behind a reader-writer lock.
//!
//! Sorting is done by the in-place [`quicksort`] engine.
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//!
//! use richseq::{Seq, Shared};
//!
//! let seq = Arc::new(Seq::<i64, Shared>::new());
//! let handles: Vec<_> = (0..4)
//!     .map(|i| {
//!         let seq = Arc::clone(&seq);
//!         thread::spawn(move || {
//!             seq.push_right([i]);
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(seq.sort().to_vec(), [0, 1, 2, 3]);
//! ```

pub mod compare;
pub mod error;
pub mod mode;
pub mod quicksort;
pub mod random;
pub mod seq;
#[cfg(feature = "serde")]
pub mod serial;
pub mod sorted;
pub mod typed;

pub use compare::Comparator;
pub use error::{Result, SeqError};
pub use mode::{AccessMode, Exclusive, Shared};
pub use seq::{MergeSource, Seq};
#[cfg(feature = "serde")]
pub use serial::FromValue;
pub use sorted::SortedSeq;
#[cfg(feature = "serde")]
pub use typed::AnySeq;
pub use typed::{IntSeq, SortedIntSeq, SortedStrSeq, Step, StrSeq, StrSeqExt};
