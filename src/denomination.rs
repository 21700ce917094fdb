//! Named display units.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::Amount;

/// A unit an [`Amount`] can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Denomination {
    /// BTC
    Btc,
    /// mBTC
    MilliBtc,
    /// uBTC
    MicroBtc,
    /// sats
    Satoshi,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown denomination '{0}'")]
pub struct UnknownDenomination(pub String);

impl Denomination {
    pub const fn unit(self) -> Amount {
        match self {
            Denomination::Btc => Amount::BTC,
            Denomination::MilliBtc => Amount::MILLI_BTC,
            Denomination::MicroBtc => Amount::MICRO_BTC,
            Denomination::Satoshi => Amount::SATOSHI,
        }
    }

    /// Digits between this unit and one satoshi.
    pub const fn decimal_places(self) -> usize {
        match self {
            Denomination::Btc => 8,
            Denomination::MilliBtc => 5,
            Denomination::MicroBtc => 2,
            Denomination::Satoshi => 0,
        }
    }

    pub const fn suffix(self) -> &'static str {
        match self {
            Denomination::Btc => "BTC",
            Denomination::MilliBtc => "mBTC",
            Denomination::MicroBtc => "uBTC",
            Denomination::Satoshi => "sats",
        }
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for Denomination {
    type Err = UnknownDenomination;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BTC" | "btc" => Ok(Denomination::Btc),
            "mBTC" | "mbtc" => Ok(Denomination::MilliBtc),
            "uBTC" | "ubtc" => Ok(Denomination::MicroBtc),
            "sats" | "sat" | "satoshi" => Ok(Denomination::Satoshi),
            other => Err(UnknownDenomination(other.to_string())),
        }
    }
}
