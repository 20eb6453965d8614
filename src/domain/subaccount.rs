//! Subaccount identifiers.
//!
//! A subaccount id is the owning account's 20-byte address followed by a
//! 12-byte nonce, written as `0x` plus 64 hex characters. The owner is
//! recovered by decoding alone, with no lookup.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::address::{AccAddress, ADDRESS_LENGTH};

pub const NONCE_LENGTH: usize = 12;
/// `0x` + hex of address and nonce.
pub const SUBACCOUNT_ID_LENGTH: usize = 2 + 2 * (ADDRESS_LENGTH + NONCE_LENGTH);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubaccountError {
    #[error("subaccount id must be {expected} characters, got {actual}")]
    Length { expected: usize, actual: usize },

    #[error("subaccount id must start with 0x")]
    Prefix,

    #[error("subaccount id is not valid hex")]
    Hex,

    #[error("subaccount owner must be a {expected}-byte address, got {actual} bytes")]
    OwnerLength { expected: usize, actual: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubaccountId {
    owner: [u8; ADDRESS_LENGTH],
    nonce: [u8; NONCE_LENGTH],
}

impl SubaccountId {
    pub fn new(owner: &AccAddress, nonce: [u8; NONCE_LENGTH]) -> Result<Self, SubaccountError> {
        let bytes = owner.as_bytes();
        let owner: [u8; ADDRESS_LENGTH] =
            bytes.try_into().map_err(|_| SubaccountError::OwnerLength {
                expected: ADDRESS_LENGTH,
                actual: bytes.len(),
            })?;
        Ok(Self { owner, nonce })
    }

    /// Subaccount number `index` of `owner`; the index fills the last four nonce bytes.
    pub fn with_index(owner: &AccAddress, index: u32) -> Result<Self, SubaccountError> {
        let mut nonce = [0u8; NONCE_LENGTH];
        nonce[NONCE_LENGTH - 4..].copy_from_slice(&index.to_be_bytes());
        Self::new(owner, nonce)
    }

    pub fn default_for(owner: &AccAddress) -> Result<Self, SubaccountError> {
        Self::with_index(owner, 0)
    }

    pub fn owner(&self) -> AccAddress {
        AccAddress::from(self.owner)
    }

    pub fn nonce(&self) -> [u8; NONCE_LENGTH] {
        self.nonce
    }
}

impl FromStr for SubaccountId {
    type Err = SubaccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != SUBACCOUNT_ID_LENGTH {
            return Err(SubaccountError::Length {
                expected: SUBACCOUNT_ID_LENGTH,
                actual: s.len(),
            });
        }
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or(SubaccountError::Prefix)?;

        let mut bytes = [0u8; ADDRESS_LENGTH + NONCE_LENGTH];
        hex::decode_to_slice(digits, &mut bytes).map_err(|_| SubaccountError::Hex)?;

        let mut owner = [0u8; ADDRESS_LENGTH];
        let mut nonce = [0u8; NONCE_LENGTH];
        owner.copy_from_slice(&bytes[..ADDRESS_LENGTH]);
        nonce.copy_from_slice(&bytes[ADDRESS_LENGTH..]);
        Ok(Self { owner, nonce })
    }
}

impl fmt::Display for SubaccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}{}", hex::encode(self.owner), hex::encode(self.nonce))
    }
}

/// Owning account of a subaccount id, or `None` if the id is malformed.
pub fn decode_subaccount(id: &str) -> Option<AccAddress> {
    id.parse::<SubaccountId>().ok().map(|s| s.owner())
}

/// Whether `id` is well-formed and belongs to `signer`.
pub fn is_owned_by(id: &str, signer: &AccAddress) -> bool {
    decode_subaccount(id).is_some_and(|owner| owner == *signer)
}
