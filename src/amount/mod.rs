//! Fixed-point bitcoin amounts.
//!
//! An [`Amount`] is a signed count of satoshis. It behaves like a machine
//! integer: arithmetic wraps on overflow and is never checked.

use std::iter::Sum;
use std::ops;

mod error;
mod format;
mod parse;

pub use error::{FormatError, ParseError};
pub use parse::parse;

/// Integer amount in satoshis. `0.1` BTC is stored as `10_000_000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);
    pub const SATOSHI: Amount = Amount(1);
    pub const MICRO_BTC: Amount = Amount(100 * Self::SATOSHI.0);
    pub const MILLI_BTC: Amount = Amount(1000 * Self::MICRO_BTC.0);
    pub const BTC: Amount = Amount(1000 * Self::MILLI_BTC.0);

    /// All the bitcoin that will ever be mined. Reference value only,
    /// nothing checks amounts against it.
    pub const ALL_BTC: Amount = Amount(20_999_999 * Self::BTC.0 + 97_690_000 * Self::SATOSHI.0);

    pub const fn from_sat(sats: i64) -> Self {
        Amount(sats)
    }

    pub const fn to_sat(self) -> i64 {
        self.0
    }

    /// Absolute value. `i64::MIN` satoshis stays negative.
    pub const fn abs(self) -> Self {
        Amount(self.0.wrapping_abs())
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// The amount expressed as a float number of `unit`, so `to_float(MILLI_BTC)`
    /// on 1.5 BTC gives `1500.0`. Loses precision: display only.
    pub fn to_float(self, unit: Amount) -> f64 {
        if unit.0 == 0 {
            return f64::INFINITY;
        }
        self.0 as f64 / unit.0 as f64
    }
}

impl From<i64> for Amount {
    fn from(sats: i64) -> Self {
        Amount(sats)
    }
}

impl From<Amount> for i64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl ops::Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0.wrapping_add(rhs.0))
    }
}

impl ops::Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Amount(self.0.wrapping_sub(rhs.0))
    }
}

impl ops::Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Amount(self.0.wrapping_neg())
    }
}

impl ops::Mul<i64> for Amount {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        Amount(self.0.wrapping_mul(rhs))
    }
}

impl ops::Mul<Amount> for i64 {
    type Output = Amount;

    fn mul(self, rhs: Amount) -> Self::Output {
        rhs * self
    }
}

impl ops::AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl ops::SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, |acc, x| acc + x)
    }
}
