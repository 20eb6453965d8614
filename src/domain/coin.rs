use num::{BigInt, Signed};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A token amount of a single denomination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    #[serde(with = "amount_string")]
    pub amount: BigInt,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: impl Into<BigInt>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }

    /// Well-formed denom and a non-negative amount.
    pub fn is_valid(&self) -> bool {
        is_valid_denom(&self.denom) && !self.amount.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.amount.is_positive()
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Denoms are 3 to 128 characters: a letter, then letters, digits or `/:._-`.
pub fn is_valid_denom(denom: &str) -> bool {
    let mut chars = denom.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_alphabetic() || !(3..=128).contains(&denom.len()) {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '.' | '_' | '-'))
}

mod amount_string {
    use super::*;
    use std::str::FromStr;

    pub fn serialize<S>(amount: &BigInt, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&amount.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BigInt::from_str(s.trim()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denoms() {
        assert!(is_valid_denom("inj"));
        assert!(is_valid_denom("peggy0xdAC17F958D2ee523a2206206994597C13D831ec7"));
        assert!(is_valid_denom("ibc/C4CFF46FD6DE35CA4CF4CE031E643C8FDC9BA4B99AE598E9B0ED98FE3A2319F9"));
        assert!(is_valid_denom("factory/inj1abc/sub.token_x-1:a"));

        assert!(!is_valid_denom(""));
        assert!(!is_valid_denom("ab"));
        assert!(!is_valid_denom("1inj"));
        assert!(!is_valid_denom("in j"));
        assert!(!is_valid_denom(&format!("a{}", "b".repeat(128))));
    }

    #[test]
    fn test_validity_and_sign() {
        assert!(Coin::new("inj", 100).is_valid());
        assert!(Coin::new("inj", 100).is_positive());
        assert!(Coin::new("inj", 0).is_valid());
        assert!(!Coin::new("inj", 0).is_positive());
        assert!(!Coin::new("inj", -1).is_valid());
        assert!(!Coin::new("!nj", 1).is_valid());
    }

    #[test]
    fn test_amount_is_a_json_string() {
        let coin: Coin =
            serde_json::from_str(r#"{"denom": "inj", "amount": "1000000000000000000000000000000000000"}"#)
                .unwrap();
        assert!(coin.is_positive());
        assert_eq!(coin.to_string(), "1000000000000000000000000000000000000inj");
        assert!(serde_json::from_str::<Coin>(r#"{"denom": "inj", "amount": "1.5"}"#).is_err());
    }
}
