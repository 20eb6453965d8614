use bech32::{FromBase32, ToBase32, Variant};
use std::fmt;
use thiserror::Error;

/// Byte length of an externally owned account address.
pub const ADDRESS_LENGTH: usize = 20;
/// Longest address the chain accepts (module and contract accounts are longer than 20).
pub const MAX_ADDRESS_LENGTH: usize = 255;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("empty address string is not allowed")]
    Empty,

    #[error("decoding bech32 failed: {0}")]
    Bech32(String),

    #[error("invalid bech32 variant, expected bech32")]
    Variant,

    #[error("invalid Bech32 prefix; expected {expected}, got {actual}")]
    Prefix { expected: String, actual: String },

    #[error("address length must be between 1 and 255 bytes, got {len}")]
    Length { len: usize },
}

impl From<bech32::Error> for AddressError {
    fn from(err: bech32::Error) -> Self {
        AddressError::Bech32(err.to_string())
    }
}

/// Account address; equality is byte-wise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccAddress(Vec<u8>);

impl AccAddress {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self, AddressError> {
        let bytes = bytes.into();
        if bytes.is_empty() || bytes.len() > MAX_ADDRESS_LENGTH {
            return Err(AddressError::Length { len: bytes.len() });
        }
        Ok(Self(bytes))
    }

    /// Parse a bech32 address carrying the given human-readable prefix.
    pub fn from_bech32(address: &str, prefix: &str) -> Result<Self, AddressError> {
        if address.trim().is_empty() {
            return Err(AddressError::Empty);
        }

        let (hrp, data, variant) = bech32::decode(address)?;
        if variant != Variant::Bech32 {
            return Err(AddressError::Variant);
        }
        if hrp != prefix {
            return Err(AddressError::Prefix {
                expected: prefix.to_string(),
                actual: hrp,
            });
        }

        let bytes = Vec::<u8>::from_base32(&data)?;
        Self::from_bytes(bytes)
    }

    pub fn to_bech32(&self, prefix: &str) -> Result<String, AddressError> {
        Ok(bech32::encode(prefix, self.0.to_base32(), Variant::Bech32)?)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; ADDRESS_LENGTH]> for AccAddress {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes.to_vec())
    }
}

impl fmt::Display for AccAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AccAddress {
        AccAddress::from_bytes(vec![0xab; ADDRESS_LENGTH]).unwrap()
    }

    #[test]
    fn test_bech32_round_trip() {
        let addr = sample();
        let encoded = addr.to_bech32("inj").unwrap();
        assert!(encoded.starts_with("inj1"));
        assert_eq!(AccAddress::from_bech32(&encoded, "inj").unwrap(), addr);
    }

    #[test]
    fn test_rejects_foreign_prefix() {
        let encoded = sample().to_bech32("cosmos").unwrap();
        let err = AccAddress::from_bech32(&encoded, "inj").unwrap_err();
        assert!(matches!(err, AddressError::Prefix { .. }));
    }

    #[test]
    fn test_rejects_empty_and_garbage() {
        assert_eq!(AccAddress::from_bech32("", "inj"), Err(AddressError::Empty));
        assert_eq!(AccAddress::from_bech32("   ", "inj"), Err(AddressError::Empty));
        assert!(AccAddress::from_bech32("inj1notanaddress", "inj").is_err());
        assert!(AccAddress::from_bech32("0xabababababababababababababababababababab", "inj").is_err());
    }

    #[test]
    fn test_rejects_bad_checksum() {
        let mut encoded = sample().to_bech32("inj").unwrap();
        let last = encoded.pop().unwrap();
        encoded.push(if last == 'q' { 'p' } else { 'q' });
        assert!(AccAddress::from_bech32(&encoded, "inj").is_err());
    }

    #[test]
    fn test_rejects_bech32m() {
        let encoded = bech32::encode("inj", sample().as_bytes().to_base32(), Variant::Bech32m).unwrap();
        assert_eq!(AccAddress::from_bech32(&encoded, "inj"), Err(AddressError::Variant));
    }

    #[test]
    fn test_length_bounds() {
        assert!(AccAddress::from_bytes(Vec::new()).is_err());
        assert!(AccAddress::from_bytes(vec![1u8; 32]).is_ok());
        assert!(AccAddress::from_bytes(vec![1u8; 256]).is_err());
    }
}
