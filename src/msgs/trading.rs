//! Order placement and cancellation messages, single and batched.
//!
//! Batches are all-or-nothing: the first element that fails rejects the
//! whole message with that element's own error.

use serde::{Deserialize, Serialize};

use crate::domain::{DerivativeOrder, OrderData, SpotOrder};
use crate::error::ValidationError;
use crate::params::ProtocolParams;
use crate::validation::parse_address;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCreateSpotLimitOrder {
    pub sender: String,
    pub order: SpotOrder,
}

impl MsgCreateSpotLimitOrder {
    pub fn validate_basic(&self, params: &ProtocolParams) -> Result<(), ValidationError> {
        let sender = parse_address(&self.sender, params)?;
        self.order.validate_basic(&sender, params)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCreateSpotMarketOrder {
    pub sender: String,
    pub order: SpotOrder,
}

impl MsgCreateSpotMarketOrder {
    pub fn validate_basic(&self, params: &ProtocolParams) -> Result<(), ValidationError> {
        let sender = parse_address(&self.sender, params)?;
        self.order.validate_basic(&sender, params)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgBatchCreateSpotLimitOrders {
    pub sender: String,
    #[serde(default)]
    pub orders: Vec<SpotOrder>,
}

impl MsgBatchCreateSpotLimitOrders {
    pub fn validate_basic(&self, params: &ProtocolParams) -> Result<(), ValidationError> {
        let sender = parse_address(&self.sender, params)?;
        self.orders
            .iter()
            .try_for_each(|order| order.validate_basic(&sender, params))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCancelSpotOrder {
    pub sender: String,
    #[serde(default)]
    pub market_id: String,
    #[serde(default)]
    pub subaccount_id: String,
    #[serde(default)]
    pub order_hash: String,
}

impl MsgCancelSpotOrder {
    pub fn order_data(&self) -> OrderData {
        OrderData {
            market_id: self.market_id.clone(),
            subaccount_id: self.subaccount_id.clone(),
            order_hash: self.order_hash.clone(),
        }
    }

    pub fn validate_basic(&self, params: &ProtocolParams) -> Result<(), ValidationError> {
        let sender = parse_address(&self.sender, params)?;
        self.order_data().validate_basic(&sender, params)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgBatchCancelSpotOrders {
    pub sender: String,
    #[serde(default)]
    pub data: Vec<OrderData>,
}

impl MsgBatchCancelSpotOrders {
    pub fn validate_basic(&self, params: &ProtocolParams) -> Result<(), ValidationError> {
        let sender = parse_address(&self.sender, params)?;
        self.data
            .iter()
            .try_for_each(|data| data.validate_basic(&sender, params))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCreateDerivativeLimitOrder {
    pub sender: String,
    pub order: DerivativeOrder,
}

impl MsgCreateDerivativeLimitOrder {
    pub fn validate_basic(&self, params: &ProtocolParams) -> Result<(), ValidationError> {
        let sender = parse_address(&self.sender, params)?;
        self.order.validate_basic(&sender, params)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCreateDerivativeMarketOrder {
    pub sender: String,
    pub order: DerivativeOrder,
}

impl MsgCreateDerivativeMarketOrder {
    pub fn validate_basic(&self, params: &ProtocolParams) -> Result<(), ValidationError> {
        let sender = parse_address(&self.sender, params)?;
        self.order.validate_basic(&sender, params)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgBatchCreateDerivativeLimitOrders {
    pub sender: String,
    #[serde(default)]
    pub orders: Vec<DerivativeOrder>,
}

impl MsgBatchCreateDerivativeLimitOrders {
    pub fn validate_basic(&self, params: &ProtocolParams) -> Result<(), ValidationError> {
        let sender = parse_address(&self.sender, params)?;
        self.orders
            .iter()
            .try_for_each(|order| order.validate_basic(&sender, params))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCancelDerivativeOrder {
    pub sender: String,
    #[serde(default)]
    pub market_id: String,
    #[serde(default)]
    pub subaccount_id: String,
    #[serde(default)]
    pub order_hash: String,
}

impl MsgCancelDerivativeOrder {
    pub fn order_data(&self) -> OrderData {
        OrderData {
            market_id: self.market_id.clone(),
            subaccount_id: self.subaccount_id.clone(),
            order_hash: self.order_hash.clone(),
        }
    }

    pub fn validate_basic(&self, params: &ProtocolParams) -> Result<(), ValidationError> {
        let sender = parse_address(&self.sender, params)?;
        self.order_data().validate_basic(&sender, params)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgBatchCancelDerivativeOrders {
    pub sender: String,
    #[serde(default)]
    pub data: Vec<OrderData>,
}

impl MsgBatchCancelDerivativeOrders {
    pub fn validate_basic(&self, params: &ProtocolParams) -> Result<(), ValidationError> {
        let sender = parse_address(&self.sender, params)?;
        self.data
            .iter()
            .try_for_each(|data| data.validate_basic(&sender, params))
    }
}
