use serde::{Deserialize, Serialize};

use crate::domain::{Dec, DerivativeOrder};
use crate::error::ValidationError;
use crate::params::ProtocolParams;
use crate::validation::{ensure_owned, parse_address, subaccount_owner};

/// Add margin from one of the sender's subaccounts to a position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgIncreasePositionMargin {
    pub sender: String,
    #[serde(default)]
    pub source_subaccount_id: String,
    /// Subaccount holding the position; may belong to anyone
    #[serde(default)]
    pub destination_subaccount_id: String,
    #[serde(default)]
    pub market_id: String,
    #[serde(default)]
    pub amount: Dec,
}

impl MsgIncreasePositionMargin {
    pub fn validate_basic(&self, params: &ProtocolParams) -> Result<(), ValidationError> {
        let sender = parse_address(&self.sender, params)?;

        if self.market_id.is_empty() {
            return Err(ValidationError::InvalidMarket(self.market_id.clone()));
        }
        if !self.amount.is_positive() {
            return Err(ValidationError::InvalidCoins(self.amount.to_string()));
        }

        ensure_owned(&self.source_subaccount_id, &sender, params)?;
        subaccount_owner(&self.destination_subaccount_id)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgLiquidatePosition {
    pub sender: String,
    #[serde(default)]
    pub subaccount_id: String,
    #[serde(default)]
    pub market_id: String,
    /// Order the liquidator places to absorb the position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<DerivativeOrder>,
}

impl MsgLiquidatePosition {
    pub fn validate_basic(&self, params: &ProtocolParams) -> Result<(), ValidationError> {
        let sender = parse_address(&self.sender, params)?;

        if self.market_id.is_empty() {
            return Err(ValidationError::InvalidMarket(self.market_id.clone()));
        }
        ensure_owned(&self.subaccount_id, &sender, params)?;

        if let Some(order) = &self.order {
            order.validate_basic(&sender, params)?;
        }
        Ok(())
    }
}
