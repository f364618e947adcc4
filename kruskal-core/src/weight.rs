//! Numeric weight abstraction for graph edges.
//!
//! Kruskal only needs three things from a weight: a total order for the edge
//! sort, an additive identity, and a way to accumulate the running cost. The
//! [`Weight`] trait captures exactly that for the primitive integer and float
//! types.

use std::{cmp::Ordering, fmt};

/// A totally ordered, summable edge weight.
///
/// Integers order with [`Ord`] and accumulate with `checked_add`. Floats order
/// with `total_cmp` and are only admissible when finite, which keeps the sort
/// meaningful and the total cost well defined.
pub trait Weight: Copy + fmt::Debug + fmt::Display + PartialEq {
    /// Additive identity used as the initial total cost.
    const ZERO: Self;

    /// Compares two weights under a total order.
    fn weight_cmp(&self, other: &Self) -> Ordering;

    /// Adds `other` to `self`, returning `None` when the result cannot be
    /// represented.
    fn accumulate(self, other: Self) -> Option<Self>;

    /// Returns `true` when the weight may take part in an MST computation.
    fn is_admissible(&self) -> bool;
}

macro_rules! impl_integer_weight {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Weight for $ty {
                const ZERO: Self = 0;

                #[inline]
                fn weight_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }

                #[inline]
                fn accumulate(self, other: Self) -> Option<Self> {
                    self.checked_add(other)
                }

                #[inline]
                fn is_admissible(&self) -> bool {
                    true
                }
            }
        )+
    };
}

macro_rules! impl_float_weight {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Weight for $ty {
                const ZERO: Self = 0.0;

                #[inline]
                fn weight_cmp(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }

                #[inline]
                fn accumulate(self, other: Self) -> Option<Self> {
                    let sum = self + other;
                    sum.is_finite().then_some(sum)
                }

                #[inline]
                fn is_admissible(&self) -> bool {
                    self.is_finite()
                }
            }
        )+
    };
}

impl_integer_weight!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_float_weight!(f32, f64);
