use std::{
    fmt::Display,
    ops::{Add, Sub},
};

use serde::Deserialize;

use crate::gym_error::WeightError;

/// A non-negative weight (or band tension) stored in thousandths of a unit.
///
/// Keeping weights as integers makes sums exact, so deduplicating and comparing
/// enumerated totals never depends on floating point rounding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "f64")]
pub struct Weight(u32);

impl Weight {
    pub const ZERO: Weight = Weight(0);
    pub const MAX_UNITS: f64 = 1_000_000.0;

    #[must_use]
    pub const fn from_milli(milli: u32) -> Self {
        Weight(milli)
    }

    ///
    /// # Errors
    /// If the value is negative, not finite or larger than [`Weight::MAX_UNITS`].
    ///
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_units(units: f64) -> Result<Self, WeightError> {
        if !units.is_finite() {
            return Err(WeightError::NotFinite);
        }
        if units < 0.0 {
            return Err(WeightError::Negative(units));
        }
        if units > Self::MAX_UNITS {
            return Err(WeightError::TooLarge(units));
        }
        Ok(Weight((units * 1000.0).round() as u32))
    }

    #[must_use]
    pub fn milli(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn units(self) -> f64 {
        f64::from(self.0) / 1000.0
    }

    #[must_use]
    pub fn times(self, n: usize) -> Self {
        Weight(self.0.saturating_mul(u32::try_from(n).unwrap_or(u32::MAX)))
    }

    /// Number of whole `step`s that fit into `self`.
    #[must_use]
    pub fn fits(self, step: Weight) -> usize {
        match step.0 {
            0 => 0,
            step => (self.0 / step) as usize,
        }
    }

    #[must_use]
    pub fn saturating_sub(self, rhs: Weight) -> Self {
        Weight(self.0.saturating_sub(rhs.0))
    }

    #[must_use]
    pub fn abs_diff(self, rhs: Weight) -> Self {
        Weight(self.0.abs_diff(rhs.0))
    }
}

impl TryFrom<f64> for Weight {
    type Error = WeightError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Weight::from_units(value)
    }
}

impl Add for Weight {
    type Output = Weight;

    fn add(self, rhs: Self) -> Self::Output {
        Weight(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Weight {
    type Output = Weight;

    fn sub(self, rhs: Self) -> Self::Output {
        self.saturating_sub(rhs)
    }
}

impl std::iter::Sum for Weight {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Weight::ZERO, |acc, weight| acc + weight)
    }
}

impl Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.units())
    }
}
