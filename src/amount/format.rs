//! Fixed-point splitting and unit-suffixed display.

use std::fmt;

use super::{Amount, FormatError};
use crate::Denomination;

impl Amount {
    /// Split into the whole number of `unit` and the magnitude of the remainder.
    ///
    /// The quotient truncates toward zero. A zero amount splits as `(0, 0)` for
    /// any unit, and a zero unit yields the sentinel `(0, -1)`.
    pub fn split(self, unit: Amount) -> (i64, i64) {
        if self.0 == 0 {
            return (0, 0);
        }
        if unit.0 == 0 {
            return (0, -1);
        }

        let right = self.0.wrapping_rem(unit.0);
        let left = self.0.wrapping_sub(right).wrapping_div(unit.0);

        (left, right.wrapping_abs())
    }

    /// Split into display strings at `unit`, which must be a power of ten.
    ///
    /// `split_string(BTC)` on 1.055 BTC gives `("1", "055")`. The right part is
    /// padded to the number of digits below `unit` and stripped of trailing
    /// zeros, keeping at least one digit.
    pub fn split_string(self, unit: Amount) -> Result<(String, String), FormatError> {
        let digits = decimal_places(unit).ok_or(FormatError::InvalidUnit(unit))?;
        Ok(self.split_digits(unit, digits))
    }

    /// Format at `unit` as `left.right`, leaving out a zero fractional part.
    pub fn format(self, unit: Amount) -> Result<String, FormatError> {
        let (left, right) = self.split_string(unit)?;
        Ok(join(&left, &right))
    }

    /// Format in a named denomination with its suffix, e.g. `"1.5 BTC"`.
    pub fn format_in(self, denomination: Denomination) -> String {
        let (left, right) = self.split_digits(denomination.unit(), denomination.decimal_places());
        format!("{} {denomination}", join(&left, &right))
    }

    pub fn btc_string(self) -> String {
        self.format_in(Denomination::Btc)
    }

    pub fn milli_btc_string(self) -> String {
        self.format_in(Denomination::MilliBtc)
    }

    pub fn satoshi_string(self) -> String {
        self.format_in(Denomination::Satoshi)
    }

    /// The denomination [`Display`](fmt::Display) picks for this amount.
    ///
    /// Thresholds are strict: exactly one BTC is shown in mBTC and exactly one
    /// mBTC in sats. Zero is shown in BTC.
    pub fn display_denomination(self) -> Denomination {
        let abs = self.abs();
        if abs > Amount::BTC || self.0 == 0 {
            Denomination::Btc
        } else if abs > Amount::MILLI_BTC {
            Denomination::MilliBtc
        } else {
            Denomination::Satoshi
        }
    }

    pub(crate) fn split_digits(self, unit: Amount, digits: usize) -> (String, String) {
        let (left, right) = self.split(unit);

        // keep the sign when the whole part truncates to zero
        let left = if left == 0 && self.0 < 0 {
            "-0".to_string()
        } else {
            left.to_string()
        };

        let mut right = format!("{right:0digits$}");
        let len = right.trim_end_matches('0').len().max(1);
        right.truncate(len);

        (left, right)
    }
}

/// Number of decimal digits below `unit`, if `unit` is `10^k` satoshis.
fn decimal_places(unit: Amount) -> Option<usize> {
    if unit.0 <= 0 {
        return None;
    }

    let mut rest = unit.0;
    let mut places = 0;
    while rest % 10 == 0 {
        rest /= 10;
        places += 1;
    }

    (rest == 1).then_some(places)
}

fn join(left: &str, right: &str) -> String {
    if right == "0" {
        left.to_string()
    } else {
        format!("{left}.{right}")
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_in(self.display_denomination()))
    }
}
