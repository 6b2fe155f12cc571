use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use approx::abs_diff_eq;
use ordered_float::OrderedFloat;

/// Weight of a directed edge, or cumulative weight of a path.
/// Totally ordered so it can be used as the key of the solver priority queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Weight(OrderedFloat<f64>);

impl Weight {
    pub const ZERO: Self = Self(OrderedFloat(0.0));
    pub const MAX: Self = Self(OrderedFloat(f64::MAX));

    pub const fn value(&self) -> f64 {
        self.0.0
    }

    /// Returns true only if the weight is finite and not negative.
    pub fn is_valid(&self) -> bool {
        self.value().is_finite() && self.value() >= 0.0
    }

    pub fn is_zero(&self) -> bool {
        abs_diff_eq!(self.value(), 0.0)
    }
}

impl From<f64> for Weight {
    fn from(value: f64) -> Self {
        Self(OrderedFloat(value))
    }
}

impl From<Weight> for f64 {
    fn from(weight: Weight) -> Self {
        weight.value()
    }
}

impl Add for Weight {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Weight {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Weight {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |total, weight| total + weight)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
