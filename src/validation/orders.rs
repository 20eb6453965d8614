//! Order validators
//!
//! Check order is part of the contract: clients branch on which error a
//! malformed order produces, so each validator fails on the first rule it
//! breaks, in the documented sequence.

use crate::domain::{
    is_valid_order_hash, AccAddress, DerivativeOrder, OrderData, OrderInfo, OrderType, SpotOrder,
};
use crate::error::ValidationError;
use crate::params::ProtocolParams;

use super::bounds::{
    validate_margin, validate_price, validate_quantity, validate_trigger_price,
};
use super::{ensure_owned, parse_address};

impl OrderInfo {
    /// Ownership, then quantity, then price.
    pub fn validate_basic(
        &self,
        signer: &AccAddress,
        params: &ProtocolParams,
    ) -> Result<(), ValidationError> {
        ensure_owned(&self.subaccount_id, signer, params)?;
        validate_quantity(&self.quantity, params)?;
        validate_price(&self.price, params)?;
        Ok(())
    }
}

fn validate_market_id(market_id: &str) -> Result<(), ValidationError> {
    if market_id.is_empty() {
        return Err(ValidationError::InvalidMarket(market_id.to_string()));
    }
    Ok(())
}

fn validate_order_type(order_type: OrderType) -> Result<(), ValidationError> {
    if !order_type.is_tradable() {
        return Err(ValidationError::UnrecognizedOrderType(
            order_type.to_string(),
        ));
    }
    Ok(())
}

fn validate_fee_recipient(fee_recipient: &str, params: &ProtocolParams) -> Result<(), ValidationError> {
    parse_address(fee_recipient, params).map(|_| ())
}

impl SpotOrder {
    /// Market, order type, trigger price, fee recipient, then the order info.
    pub fn validate_basic(
        &self,
        signer: &AccAddress,
        params: &ProtocolParams,
    ) -> Result<(), ValidationError> {
        validate_market_id(&self.market_id)?;
        validate_order_type(self.order_type)?;
        validate_trigger_price(self.trigger_price.as_ref(), params)?;
        validate_fee_recipient(&self.order_info.fee_recipient, params)?;
        self.order_info.validate_basic(signer, params)
    }
}

impl DerivativeOrder {
    /// Same sequence as a spot order, with margin checked right after the order type.
    pub fn validate_basic(
        &self,
        signer: &AccAddress,
        params: &ProtocolParams,
    ) -> Result<(), ValidationError> {
        validate_market_id(&self.market_id)?;
        validate_order_type(self.order_type)?;
        validate_margin(&self.margin, params)?;
        validate_trigger_price(self.trigger_price.as_ref(), params)?;
        validate_fee_recipient(&self.order_info.fee_recipient, params)?;
        self.order_info.validate_basic(signer, params)
    }
}

impl OrderData {
    pub fn validate_basic(
        &self,
        signer: &AccAddress,
        params: &ProtocolParams,
    ) -> Result<(), ValidationError> {
        validate_market_id(&self.market_id)?;
        ensure_owned(&self.subaccount_id, signer, params)?;
        if !is_valid_order_hash(&self.order_hash) {
            return Err(ValidationError::InvalidOrderHash(self.order_hash.clone()));
        }
        Ok(())
    }
}
