pub mod amount;
pub mod csv;
pub mod denomination;
pub mod marshal;

pub use amount::{Amount, FormatError, ParseError, parse};
pub use denomination::{Denomination, UnknownDenomination};
