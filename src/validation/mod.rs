//! Stateless admission checks shared by every message validator.

pub mod bounds;
pub mod orders;

pub use bounds::*;

use crate::domain::{decode_subaccount, AccAddress};
use crate::error::ValidationError;
use crate::params::ProtocolParams;

/// Parse a bech32 account address with the protocol prefix.
pub fn parse_address(address: &str, params: &ProtocolParams) -> Result<AccAddress, ValidationError> {
    AccAddress::from_bech32(address, &params.bech32_prefix)
        .map_err(|_| ValidationError::InvalidAddress(address.to_string()))
}

/// Owner of a well-formed subaccount id.
pub fn subaccount_owner(subaccount_id: &str) -> Result<AccAddress, ValidationError> {
    decode_subaccount(subaccount_id)
        .ok_or_else(|| ValidationError::BadSubaccountId(subaccount_id.to_string()))
}

/// The ownership relation: `subaccount_id` is well-formed and belongs to `signer`.
///
/// A malformed id and a foreign owner are reported as different errors. A
/// foreign owner is reported against the signer's bech32 address.
pub fn ensure_owned(
    subaccount_id: &str,
    signer: &AccAddress,
    params: &ProtocolParams,
) -> Result<(), ValidationError> {
    let owner = subaccount_owner(subaccount_id)?;
    if owner != *signer {
        let sender = signer
            .to_bech32(&params.bech32_prefix)
            .unwrap_or_else(|_| signer.to_string());
        return Err(ValidationError::SubaccountOwnership(sender));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SubaccountId;

    #[test]
    fn test_parse_address() {
        let params = ProtocolParams::default();
        let addr = AccAddress::from([0x01; 20]);
        let encoded = addr.to_bech32("inj").unwrap();
        assert_eq!(parse_address(&encoded, &params), Ok(addr));
        assert_eq!(
            parse_address("", &params),
            Err(ValidationError::InvalidAddress(String::new()))
        );
    }

    #[test]
    fn test_ensure_owned() {
        let params = ProtocolParams::default();
        let owner = AccAddress::from([0x01; 20]);
        let other = AccAddress::from([0x02; 20]);
        let id = SubaccountId::with_index(&owner, 5).unwrap().to_string();

        assert!(ensure_owned(&id, &owner, &params).is_ok());
        // A foreign owner is reported against the signer, not the subaccount.
        assert_eq!(
            ensure_owned(&id, &other, &params),
            Err(ValidationError::SubaccountOwnership(
                other.to_bech32("inj").unwrap()
            ))
        );
        assert_eq!(
            ensure_owned("", &owner, &params),
            Err(ValidationError::BadSubaccountId(String::new()))
        );
    }
}
