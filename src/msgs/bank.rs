//! Deposits, withdrawals and transfers between subaccounts

use serde::{Deserialize, Serialize};

use crate::domain::Coin;
use crate::error::ValidationError;
use crate::params::ProtocolParams;
use crate::validation::{ensure_owned, parse_address, subaccount_owner};

fn validate_amount(amount: &Coin) -> Result<(), ValidationError> {
    if !amount.is_valid() || !amount.is_positive() {
        return Err(ValidationError::InvalidCoins(amount.to_string()));
    }
    Ok(())
}

/// Move funds from the sender's bank balance into a subaccount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgDeposit {
    pub sender: String,
    /// Empty means the sender's default subaccount
    #[serde(default)]
    pub subaccount_id: String,
    pub amount: Coin,
}

impl MsgDeposit {
    pub fn validate_basic(&self, params: &ProtocolParams) -> Result<(), ValidationError> {
        parse_address(&self.sender, params)?;
        validate_amount(&self.amount)?;

        // Anyone may fund any subaccount; only the id's shape is checked.
        if self.subaccount_id.is_empty() {
            return Ok(());
        }
        subaccount_owner(&self.subaccount_id).map(|_| ())
    }
}

/// Move funds from a subaccount back to the sender's bank balance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgWithdraw {
    pub sender: String,
    #[serde(default)]
    pub subaccount_id: String,
    pub amount: Coin,
}

impl MsgWithdraw {
    pub fn validate_basic(&self, params: &ProtocolParams) -> Result<(), ValidationError> {
        let sender = parse_address(&self.sender, params)?;
        validate_amount(&self.amount)?;
        ensure_owned(&self.subaccount_id, &sender, params)
    }
}

/// Transfer between two subaccounts of the same account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgSubaccountTransfer {
    pub sender: String,
    #[serde(default)]
    pub source_subaccount_id: String,
    #[serde(default)]
    pub destination_subaccount_id: String,
    pub amount: Coin,
}

impl MsgSubaccountTransfer {
    pub fn validate_basic(&self, params: &ProtocolParams) -> Result<(), ValidationError> {
        let sender = parse_address(&self.sender, params)?;
        validate_amount(&self.amount)?;

        let source_owner = subaccount_owner(&self.source_subaccount_id)?;
        let destination_owner = subaccount_owner(&self.destination_subaccount_id)?;
        if source_owner != destination_owner {
            return Err(ValidationError::SubaccountOwnership(
                self.destination_subaccount_id.clone(),
            ));
        }
        if source_owner != sender {
            return Err(ValidationError::SubaccountOwnership(self.sender.clone()));
        }
        Ok(())
    }
}

/// Transfer from one of the sender's subaccounts to any other subaccount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgExternalTransfer {
    pub sender: String,
    #[serde(default)]
    pub source_subaccount_id: String,
    #[serde(default)]
    pub destination_subaccount_id: String,
    pub amount: Coin,
}

impl MsgExternalTransfer {
    pub fn validate_basic(&self, params: &ProtocolParams) -> Result<(), ValidationError> {
        let sender = parse_address(&self.sender, params)?;
        validate_amount(&self.amount)?;

        let source_owner = subaccount_owner(&self.source_subaccount_id)?;
        subaccount_owner(&self.destination_subaccount_id)?;
        if source_owner != sender {
            return Err(ValidationError::SubaccountOwnership(self.sender.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccAddress, SubaccountId};

    fn alice() -> AccAddress {
        AccAddress::from([0xa1; 20])
    }

    fn bob() -> AccAddress {
        AccAddress::from([0xb0; 20])
    }

    fn bech32(addr: &AccAddress) -> String {
        addr.to_bech32("inj").unwrap()
    }

    fn sub(addr: &AccAddress, index: u32) -> String {
        SubaccountId::with_index(addr, index).unwrap().to_string()
    }

    #[test]
    fn test_deposit() {
        let params = ProtocolParams::default();
        let mut msg = MsgDeposit {
            sender: bech32(&alice()),
            subaccount_id: String::new(),
            amount: Coin::new("inj", 100),
        };
        assert!(msg.validate_basic(&params).is_ok());

        msg.subaccount_id = sub(&alice(), 3);
        assert!(msg.validate_basic(&params).is_ok());

        // Funding someone else's subaccount is allowed.
        msg.subaccount_id = sub(&bob(), 0);
        assert!(msg.validate_basic(&params).is_ok());

        msg.subaccount_id = "0xnothex".to_string();
        assert!(matches!(
            msg.validate_basic(&params),
            Err(ValidationError::BadSubaccountId(_))
        ));
    }

    #[test]
    fn test_deposit_amount_and_sender() {
        let params = ProtocolParams::default();
        let mut msg = MsgDeposit {
            sender: bech32(&alice()),
            subaccount_id: String::new(),
            amount: Coin::new("inj", 0),
        };
        assert_eq!(
            msg.validate_basic(&params),
            Err(ValidationError::InvalidCoins("0inj".to_string()))
        );

        msg.amount = Coin::new("x", 10);
        assert!(matches!(
            msg.validate_basic(&params),
            Err(ValidationError::InvalidCoins(_))
        ));

        msg.sender = "inj1".to_string();
        assert!(matches!(
            msg.validate_basic(&params),
            Err(ValidationError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_withdraw_requires_owned_subaccount() {
        let params = ProtocolParams::default();
        let mut msg = MsgWithdraw {
            sender: bech32(&alice()),
            subaccount_id: sub(&alice(), 0),
            amount: Coin::new("peggy0xdAC17F958D2ee523a2206206994597C13D831ec7", 5_000_000),
        };
        assert!(msg.validate_basic(&params).is_ok());

        msg.subaccount_id = String::new();
        assert!(matches!(
            msg.validate_basic(&params),
            Err(ValidationError::BadSubaccountId(_))
        ));

        msg.subaccount_id = sub(&bob(), 0);
        assert_eq!(
            msg.validate_basic(&params),
            Err(ValidationError::SubaccountOwnership(bech32(&alice())))
        );
    }

    #[test]
    fn test_subaccount_transfer_same_owner_only() {
        let params = ProtocolParams::default();
        let mut msg = MsgSubaccountTransfer {
            sender: bech32(&alice()),
            source_subaccount_id: sub(&alice(), 0),
            destination_subaccount_id: sub(&alice(), 1),
            amount: Coin::new("inj", 1),
        };
        assert!(msg.validate_basic(&params).is_ok());

        msg.destination_subaccount_id = sub(&bob(), 0);
        assert_eq!(
            msg.validate_basic(&params),
            Err(ValidationError::SubaccountOwnership(sub(&bob(), 0)))
        );

        // Both subaccounts are bob's, but alice signs.
        msg.source_subaccount_id = sub(&bob(), 1);
        assert_eq!(
            msg.validate_basic(&params),
            Err(ValidationError::SubaccountOwnership(bech32(&alice())))
        );
    }

    #[test]
    fn test_external_transfer_allows_foreign_destination() {
        let params = ProtocolParams::default();
        let mut msg = MsgExternalTransfer {
            sender: bech32(&alice()),
            source_subaccount_id: sub(&alice(), 0),
            destination_subaccount_id: sub(&bob(), 0),
            amount: Coin::new("inj", 1),
        };
        assert!(msg.validate_basic(&params).is_ok());

        msg.destination_subaccount_id = "bob".to_string();
        assert_eq!(
            msg.validate_basic(&params),
            Err(ValidationError::BadSubaccountId("bob".to_string()))
        );

        msg.destination_subaccount_id = sub(&bob(), 0);
        msg.source_subaccount_id = sub(&bob(), 1);
        assert!(matches!(
            msg.validate_basic(&params),
            Err(ValidationError::SubaccountOwnership(_))
        ));
    }
}
