//! Decimal string parsing.

use std::str::FromStr;

use super::{Amount, ParseError};

/// Parse a decimal or integer string denominated in BTC.
///
/// `"1.4"` parses as 1.4 BTC, `"1"` as 1 BTC. Either `.` or `,` marks the
/// decimal point. A single leading `+` or `-` is allowed. The empty string
/// parses as zero. Digits past the eighth decimal place are ignored and
/// overflow wraps.
pub fn parse(input: &str) -> Result<Amount, ParseError> {
    let mut value: i64 = 0;
    let mut decimals = false;
    let mut negative = false;
    let mut mul = 100 * Amount::MILLI_BTC.0;

    for (position, c) in input.char_indices() {
        match c {
            '+' if position == 0 => {}
            '+' => return Err(ParseError::StrayPlus { position }),
            '-' if position == 0 => negative = true,
            '-' => return Err(ParseError::StrayMinus { position }),
            '0'..='9' => {
                let digit = i64::from(c as u8 - b'0');
                if decimals {
                    value = value.wrapping_add(digit.wrapping_mul(mul));
                    mul /= 10;
                } else {
                    value = value
                        .wrapping_mul(10)
                        .wrapping_add(digit.wrapping_mul(Amount::BTC.0));
                }
            }
            '.' | ',' => {
                if decimals {
                    return Err(ParseError::TooManyDecimalPoints { position });
                }
                decimals = true;
            }
            character => {
                return Err(ParseError::UnknownCharacter {
                    character,
                    position,
                    input: input.to_string(),
                });
            }
        }
    }

    if negative {
        value = value.wrapping_neg();
    }

    Ok(Amount(value))
}

impl FromStr for Amount {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
