//! Element-type specific aliases and helpers.

use std::fmt;

use paste::paste;

use crate::mode::{AccessMode, Exclusive};
use crate::seq::Seq;
use crate::sorted::SortedSeq;

/// Integer types usable with `from_range`.
pub trait Step: Copy + PartialOrd + fmt::Display {
    fn is_zero(&self) -> bool;

    fn is_negative(&self) -> bool;

    /// `self + step`, or `None` on overflow.
    fn checked_step(self, step: Self) -> Option<Self>;
}

macro_rules! signed_step {
    ($($t:ty),*) => {
        $(
            impl Step for $t {
                #[inline]
                fn is_zero(&self) -> bool {
                    *self == 0
                }

                #[inline]
                fn is_negative(&self) -> bool {
                    *self < 0
                }

                #[inline]
                fn checked_step(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }
            }
        )*
    };
}

macro_rules! unsigned_step {
    ($($t:ty),*) => {
        $(
            impl Step for $t {
                #[inline]
                fn is_zero(&self) -> bool {
                    *self == 0
                }

                #[inline]
                fn is_negative(&self) -> bool {
                    false
                }

                #[inline]
                fn checked_step(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }
            }
        )*
    };
}

signed_step!(i8, i16, i32, i64, i128, isize);
unsigned_step!(u8, u16, u32, u64, u128, usize);

macro_rules! typed_aliases {
    ($($name:ident => $t:ident),*) => {
        paste! {
            $(
                #[doc = "Sequence of `" $t "`."]
                pub type [<$name Seq>]<M = Exclusive> = Seq<$t, M>;

                #[doc = "Sorted sequence of `" $t "`."]
                pub type [<Sorted $name Seq>]<M = Exclusive> = SortedSeq<$t, M>;
            )*
        }
    };
}

typed_aliases!(Int => i64, Str => String);

/// Sequence of dynamically typed JSON values.
#[cfg(feature = "serde")]
pub type AnySeq<M = Exclusive> = Seq<serde_json::Value, M>;

/// Case-insensitive lookups for string sequences.
pub trait StrSeqExt {
    /// Whether any element equals `value` ignoring case.
    fn contains_i(&self, value: &str) -> bool;
}

impl<M: AccessMode> StrSeqExt for Seq<String, M> {
    fn contains_i(&self, value: &str) -> bool {
        self.r_lock_func(|v| v.iter().any(|s| eq_fold(s, value)))
    }
}

impl<M: AccessMode> StrSeqExt for SortedSeq<String, M> {
    fn contains_i(&self, value: &str) -> bool {
        self.r_lock_func(|v| v.iter().any(|s| eq_fold(s, value)))
    }
}

fn eq_fold(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
