//! Text and JSON encodings of [`Amount`].
//!
//! Amounts are encoded as a decimal BTC string that always carries a decimal
//! point, e.g. `"1.5"` or `"0.0"`. Decoding goes through [`parse`]. JSON
//! decoding also accepts bare numbers through a lossy `f64` fallback, which
//! can not represent every satoshi amount exactly.

use std::fmt;

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::{Amount, Denomination, ParseError, parse};

impl Amount {
    /// Encode as `left.right` in BTC, always including the decimal point.
    pub fn marshal_text(self) -> String {
        let (left, right) = self.split_digits(Amount::BTC, Denomination::Btc.decimal_places());
        format!("{left}.{right}")
    }

    /// Decode text produced by [`marshal_text`](Self::marshal_text) or typed by
    /// a user. Invalid UTF-8 is replaced and then rejected by the parser.
    pub fn unmarshal_text(text: &[u8]) -> Result<Amount, ParseError> {
        parse(&String::from_utf8_lossy(text))
    }

    /// Encode as a quoted JSON string.
    pub fn marshal_json(self) -> String {
        format!("\"{}\"", self.marshal_text())
    }

    /// Decode a JSON value, quoted or bare.
    ///
    /// One pair of surrounding quotes is stripped, then the payload is decoded
    /// as text. If that fails and the payload reads as a JSON float, the float
    /// is rendered with eight decimals and parsed instead. When both fail the
    /// text error is returned.
    pub fn unmarshal_json(input: &[u8]) -> Result<Amount, ParseError> {
        let payload = match input {
            [b'"', inner @ .., b'"'] if input.len() > 2 => inner,
            _ => input,
        };

        decode(payload)
    }
}

fn decode(payload: &[u8]) -> Result<Amount, ParseError> {
    Amount::unmarshal_text(payload).or_else(|err| {
        serde_json::from_slice::<f64>(payload)
            .ok()
            .and_then(from_float)
            .ok_or(err)
    })
}

fn from_float(float: f64) -> Option<Amount> {
    let amount = parse(&format!("{float:.8}")).ok()?;
    debug!(float, %amount, "decoded amount through float fallback");
    Some(amount)
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.marshal_text())
        } else {
            serializer.serialize_i64(self.to_sat())
        }
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(AmountVisitor)
        } else {
            i64::deserialize(deserializer).map(Amount::from_sat)
        }
    }
}

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a decimal BTC amount as a string or number")
    }

    fn visit_str<E>(self, v: &str) -> Result<Amount, E>
    where
        E: de::Error,
    {
        decode(v.as_bytes()).map_err(E::custom)
    }

    // whole numbers are BTC, wrapping like the parser does
    fn visit_i64<E>(self, v: i64) -> Result<Amount, E>
    where
        E: de::Error,
    {
        Ok(Amount::BTC * v)
    }

    fn visit_u64<E>(self, v: u64) -> Result<Amount, E>
    where
        E: de::Error,
    {
        Ok(Amount::BTC * v as i64)
    }

    fn visit_f64<E>(self, v: f64) -> Result<Amount, E>
    where
        E: de::Error,
    {
        from_float(v).ok_or_else(|| E::invalid_value(Unexpected::Float(v), &self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    struct Payment {
        amount: Amount,
    }

    #[test]
    fn marshal_text_always_has_decimal_point() {
        assert_eq!(Amount::ZERO.marshal_text(), "0.0");
        assert_eq!(Amount::BTC.marshal_text(), "1.0");
        assert_eq!((Amount::BTC + 50 * Amount::MILLI_BTC).marshal_text(), "1.05");
        assert_eq!(Amount::SATOSHI.marshal_text(), "0.00000001");
        assert_eq!((-Amount::MILLI_BTC).marshal_text(), "-0.001");
    }

    #[test]
    fn text_round_trip() {
        for sats in [0, 1, -1, 12_345_678_901, -100_000_000, 2_099_999_997_690_000] {
            let amount = Amount::from_sat(sats);
            let text = amount.marshal_text();
            assert_eq!(Amount::unmarshal_text(text.as_bytes()), Ok(amount), "{text}");
        }
    }

    #[test]
    fn unmarshal_text_propagates_parse_errors() {
        assert_eq!(
            Amount::unmarshal_text(b"1..0"),
            Err(ParseError::TooManyDecimalPoints { position: 2 })
        );
        assert!(matches!(
            Amount::unmarshal_text(b"\xff1"),
            Err(ParseError::UnknownCharacter { character: '\u{fffd}', .. })
        ));
    }

    #[test]
    fn unmarshal_json_quoted() {
        assert_eq!(Amount::unmarshal_json(b"\"0.1\""), Ok(100 * Amount::MILLI_BTC));
        assert_eq!(Amount::unmarshal_json(b"\"-20.1\""), parse("-20.1"));
    }

    #[test]
    fn unmarshal_json_bare_number_matches_text() {
        let text = Amount::unmarshal_text(b"1.50000000").unwrap();
        assert_eq!(Amount::unmarshal_json(b"1.5"), Ok(text));
        assert_eq!(text, Amount::from_sat(150_000_000));
    }

    #[test]
    fn unmarshal_json_float_fallback() {
        assert_eq!(Amount::unmarshal_json(b"1e-3"), Ok(Amount::MILLI_BTC));
        assert_eq!(Amount::unmarshal_json(b"\"1e-3\""), Ok(Amount::MILLI_BTC));
        assert_eq!(Amount::unmarshal_json(b"-2.5E1"), Ok(-25 * Amount::BTC));
    }

    #[test]
    fn unmarshal_json_returns_text_error_when_both_fail() {
        assert_eq!(
            Amount::unmarshal_json(b"\"1.0 BTC\""),
            Err(ParseError::UnknownCharacter {
                character: ' ',
                position: 3,
                input: "1.0 BTC".to_string(),
            })
        );
        assert!(Amount::unmarshal_json(b"\"\"").is_err());
        assert!(Amount::unmarshal_json(b"null").is_err());
    }

    #[test]
    fn marshal_json_is_quoted_text() {
        let amount = parse("0.1").unwrap();
        assert_eq!(amount.marshal_json(), "\"0.1\"");
        assert_eq!(Amount::unmarshal_json(amount.marshal_json().as_bytes()), Ok(amount));
    }

    #[test]
    fn serde_json_serializes_as_string() {
        let payment = Payment {
            amount: parse("20.1").unwrap(),
        };
        assert_eq!(
            serde_json::to_string(&payment).unwrap(),
            r#"{"amount":"20.1"}"#
        );
    }

    #[test]
    fn serde_json_accepts_strings_and_numbers() {
        let expected = parse("0.1").unwrap();
        for json in [
            r#"{"amount":"0.1"}"#,
            r#"{"amount":"0,1"}"#,
            r#"{"amount":0.1}"#,
            r#"{"amount":"1e-1"}"#,
        ] {
            let payment: Payment = serde_json::from_str(json).unwrap();
            assert_eq!(payment.amount, expected, "{json}");
        }

        let payment: Payment = serde_json::from_str(r#"{"amount":2}"#).unwrap();
        assert_eq!(payment.amount, 2 * Amount::BTC);
        let payment: Payment = serde_json::from_str(r#"{"amount":-3}"#).unwrap();
        assert_eq!(payment.amount, -3 * Amount::BTC);
    }

    #[test]
    fn serde_json_rejects_garbage() {
        let err = serde_json::from_str::<Payment>(r#"{"amount":"ten"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown character: t"));
        assert!(serde_json::from_str::<Payment>(r#"{"amount":true}"#).is_err());
    }
}
