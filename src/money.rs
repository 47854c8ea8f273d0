//! Exact-decimal money type for settlement arithmetic.
//!
//! Uses `rust_decimal` internally. Sums and the share division stay exact;
//! rounding to 2 decimal places happens only when an adjustment is rendered
//! for output, using round-half-to-even (banker's rounding).

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;

/// A monetary value carried at full precision.
///
/// Receipt amounts are non-negative by validation, but derived adjustments
/// (share minus total paid) are signed.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use settlement_engine::Money;
///
/// let owed = Money::from_str("5.00").unwrap() - Money::from_str("10.00").unwrap();
/// assert_eq!(owed.to_adjustment_string(), "($5.00)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(Decimal);

impl Money {
    /// The number of decimal places in rendered output.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Money(Decimal::ZERO);

    /// Creates a new `Money` from a `Decimal` without rounding.
    pub fn new(value: Decimal) -> Self {
        Money(value)
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Divides this value evenly across `count` parties, exactly.
    ///
    /// The quotient keeps full precision; `count` must be positive.
    pub fn split_between(self, count: usize) -> Self {
        debug_assert!(count > 0);
        Money(self.0 / Decimal::from(count))
    }

    /// Rounds to 2 decimal places using round-half-to-even.
    ///
    /// The result always carries scale 2 and is never negative zero.
    pub fn rounded(&self) -> Decimal {
        let mut rounded = self
            .0
            .round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointNearestEven);
        if rounded.is_zero() {
            rounded = Decimal::ZERO;
        }
        rounded.rescale(Self::SCALE);
        rounded
    }

    /// Renders this value as a settlement adjustment.
    ///
    /// Non-negative values format as `$X.XX`; negative values as `($X.XX)`
    /// with the absolute value and no minus sign. Pure formatting; the
    /// rounding in [`Money::rounded`] applies.
    pub fn to_adjustment_string(&self) -> String {
        let rounded = self.rounded();
        if rounded < Decimal::ZERO {
            format!("(${})", -rounded)
        } else {
            format!("${}", rounded)
        }
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s.trim())?;
        Ok(Money(decimal))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Money(self.0 - rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, value| acc + value)
    }
}
