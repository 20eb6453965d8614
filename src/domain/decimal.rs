use bigdecimal::BigDecimal;
use num::{Signed, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A decimal string outside the accepted `-?digits(.digits)?` form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid decimal string: {0:?}")]
pub struct ParseDecError(String);

/// Arbitrary-precision decimal that can be explicitly unset.
///
/// A nil `Dec` is what a decoder produces for a field that was declared but
/// never given a value. It is distinct from zero: every bound check rejects
/// nil, including checks for which zero is a legal value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dec(Option<BigDecimal>);

impl Dec {
    pub fn nil() -> Self {
        Self(None)
    }

    pub fn zero() -> Self {
        Self(Some(BigDecimal::zero()))
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_none()
    }

    /// The value, or `None` when nil.
    pub fn value(&self) -> Option<&BigDecimal> {
        self.0.as_ref()
    }

    pub fn is_positive(&self) -> bool {
        self.0.as_ref().is_some_and(|v| v.is_positive())
    }
}

impl From<BigDecimal> for Dec {
    fn from(value: BigDecimal) -> Self {
        Self(Some(value))
    }
}

impl From<i64> for Dec {
    fn from(value: i64) -> Self {
        Self(Some(BigDecimal::from(value)))
    }
}

/// Plain decimal notation only: an optional leading minus, integer digits,
/// and an optional fraction with at least one digit.
fn is_plain_decimal(s: &str) -> bool {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    all_digits(int_part) && frac_part.map_or(true, all_digits)
}

impl FromStr for Dec {
    type Err = ParseDecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_plain_decimal(s) {
            return Err(ParseDecError(s.to_string()));
        }
        BigDecimal::from_str(s)
            .map(|v| Self(Some(v)))
            .map_err(|_| ParseDecError(s.to_string()))
    }
}

impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(v) => write!(f, "{}", v),
            None => write!(f, "<nil>"),
        }
    }
}

impl Serialize for Dec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.0 {
            Some(v) => serializer.serialize_str(&v.to_string()),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Dec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => Dec::from_str(&s).map_err(serde::de::Error::custom),
            None => Ok(Dec::nil()),
        }
    }
}

/// Deserializer for optional decimals that keeps "absent" and "null" apart.
///
/// Use together with `#[serde(default)]`: a missing field stays `None`,
/// while an explicit `null` becomes `Some(Dec::nil())`.
pub fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Dec>, D::Error>
where
    D: Deserializer<'de>,
{
    Dec::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default)]
        price: Dec,
        #[serde(default, deserialize_with = "deserialize_present")]
        trigger: Option<Dec>,
    }

    #[test]
    fn test_nil_is_not_zero() {
        assert!(Dec::nil().is_nil());
        assert!(!Dec::zero().is_nil());
        assert_ne!(Dec::nil(), Dec::zero());
        assert!(!Dec::nil().is_positive());
        assert_eq!(Dec::nil().value(), None);
    }

    #[test]
    fn test_parse_and_sign() {
        let d: Dec = "0.001".parse().unwrap();
        assert!(d.is_positive());
        let d: Dec = "-5".parse().unwrap();
        assert!(!d.is_positive());
        assert_eq!(d, Dec::from(-5));
        assert!("abc".parse::<Dec>().is_err());
    }

    #[test]
    fn test_parse_accepts_plain_notation_only() {
        assert_eq!("100".parse::<Dec>().unwrap(), Dec::from(100));
        assert!("-0.25".parse::<Dec>().is_ok());
        assert!("007.50".parse::<Dec>().is_ok());

        for input in ["", "-", "1e5", "1E5", "+3", " 1", "1 ", "1.", ".5", "-.5", "1.2.3", "0x10", "1_000"] {
            assert_eq!(
                input.parse::<Dec>(),
                Err(ParseDecError(input.to_string())),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_deserialize_rejects_exponent() {
        let err = serde_json::from_str::<Holder>(r#"{"price": "1e5"}"#).unwrap_err();
        assert!(err.to_string().contains("invalid decimal string"));
    }

    #[test]
    fn test_absent_and_null_stay_distinct() {
        let h: Holder = serde_json::from_str(r#"{"price": "1.5"}"#).unwrap();
        assert_eq!(h.price, "1.5".parse().unwrap());
        assert!(h.trigger.is_none());

        let h: Holder = serde_json::from_str(r#"{"trigger": null}"#).unwrap();
        assert!(h.price.is_nil());
        assert_eq!(h.trigger, Some(Dec::nil()));

        let h: Holder = serde_json::from_str(r#"{"trigger": "0"}"#).unwrap();
        assert_eq!(h.trigger, Some(Dec::zero()));
    }

    #[test]
    fn test_serialize_nil_as_null() {
        assert_eq!(serde_json::to_string(&Dec::nil()).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Dec::from(7)).unwrap(), "\"7\"");
    }
}
