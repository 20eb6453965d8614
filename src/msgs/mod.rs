//! Exchange transaction messages.
//!
//! [`Msg`] is the closed set of message kinds this module accepts. It
//! decodes from JSON tagged by the message action (`{"type": "msgDeposit", ...}`)
//! and dispatches to each kind's `validate_basic`.

pub mod bank;
pub mod markets;
pub mod positions;
pub mod trading;

pub use bank::*;
pub use markets::*;
pub use positions::*;
pub use trading::*;

use serde::{Deserialize, Serialize};

use crate::domain::AccAddress;
use crate::error::{Result, ValidationError};
use crate::params::ProtocolParams;
use crate::validation::parse_address;

/// Route every exchange message is delivered to.
pub const ROUTER_KEY: &str = "exchange";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Msg {
    #[serde(rename = "msgDeposit")]
    Deposit(MsgDeposit),
    #[serde(rename = "msgWithdraw")]
    Withdraw(MsgWithdraw),
    #[serde(rename = "subaccountTransfer")]
    SubaccountTransfer(MsgSubaccountTransfer),
    #[serde(rename = "externalTransfer")]
    ExternalTransfer(MsgExternalTransfer),
    #[serde(rename = "increasePositionMargin")]
    IncreasePositionMargin(MsgIncreasePositionMargin),
    #[serde(rename = "liquidatePosition")]
    LiquidatePosition(MsgLiquidatePosition),
    #[serde(rename = "createSpotLimitOrder")]
    CreateSpotLimitOrder(MsgCreateSpotLimitOrder),
    #[serde(rename = "batchCreateSpotLimitOrders")]
    BatchCreateSpotLimitOrders(MsgBatchCreateSpotLimitOrders),
    #[serde(rename = "createSpotMarketOrder")]
    CreateSpotMarketOrder(MsgCreateSpotMarketOrder),
    #[serde(rename = "cancelSpotOrder")]
    CancelSpotOrder(MsgCancelSpotOrder),
    #[serde(rename = "batchCancelSpotOrders")]
    BatchCancelSpotOrders(MsgBatchCancelSpotOrders),
    #[serde(rename = "createDerivativeLimitOrder")]
    CreateDerivativeLimitOrder(MsgCreateDerivativeLimitOrder),
    #[serde(rename = "batchCreateDerivativeLimitOrder")]
    BatchCreateDerivativeLimitOrders(MsgBatchCreateDerivativeLimitOrders),
    #[serde(rename = "createDerivativeMarketOrder")]
    CreateDerivativeMarketOrder(MsgCreateDerivativeMarketOrder),
    #[serde(rename = "cancelDerivativeOrder")]
    CancelDerivativeOrder(MsgCancelDerivativeOrder),
    #[serde(rename = "batchCancelDerivativeOrder")]
    BatchCancelDerivativeOrders(MsgBatchCancelDerivativeOrders),
    #[serde(rename = "instantSpotMarketLaunch")]
    InstantSpotMarketLaunch(MsgInstantSpotMarketLaunch),
    #[serde(rename = "instantPerpetualMarketLaunch")]
    InstantPerpetualMarketLaunch(MsgInstantPerpetualMarketLaunch),
    #[serde(rename = "instantExpiryFuturesMarketLaunch")]
    InstantExpiryFuturesMarketLaunch(MsgInstantExpiryFuturesMarketLaunch),
}

impl Msg {
    /// Stateless admission check. Returns the first rule the message breaks.
    pub fn validate_basic(&self, params: &ProtocolParams) -> std::result::Result<(), ValidationError> {
        match self {
            Msg::Deposit(m) => m.validate_basic(params),
            Msg::Withdraw(m) => m.validate_basic(params),
            Msg::SubaccountTransfer(m) => m.validate_basic(params),
            Msg::ExternalTransfer(m) => m.validate_basic(params),
            Msg::IncreasePositionMargin(m) => m.validate_basic(params),
            Msg::LiquidatePosition(m) => m.validate_basic(params),
            Msg::CreateSpotLimitOrder(m) => m.validate_basic(params),
            Msg::BatchCreateSpotLimitOrders(m) => m.validate_basic(params),
            Msg::CreateSpotMarketOrder(m) => m.validate_basic(params),
            Msg::CancelSpotOrder(m) => m.validate_basic(params),
            Msg::BatchCancelSpotOrders(m) => m.validate_basic(params),
            Msg::CreateDerivativeLimitOrder(m) => m.validate_basic(params),
            Msg::BatchCreateDerivativeLimitOrders(m) => m.validate_basic(params),
            Msg::CreateDerivativeMarketOrder(m) => m.validate_basic(params),
            Msg::CancelDerivativeOrder(m) => m.validate_basic(params),
            Msg::BatchCancelDerivativeOrders(m) => m.validate_basic(params),
            Msg::InstantSpotMarketLaunch(m) => m.validate_basic(params),
            Msg::InstantPerpetualMarketLaunch(m) => m.validate_basic(params),
            Msg::InstantExpiryFuturesMarketLaunch(m) => m.validate_basic(params),
        }
    }

    pub fn route(&self) -> &'static str {
        ROUTER_KEY
    }

    /// Action name, identical to the JSON `type` tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            Msg::Deposit(_) => "msgDeposit",
            Msg::Withdraw(_) => "msgWithdraw",
            Msg::SubaccountTransfer(_) => "subaccountTransfer",
            Msg::ExternalTransfer(_) => "externalTransfer",
            Msg::IncreasePositionMargin(_) => "increasePositionMargin",
            Msg::LiquidatePosition(_) => "liquidatePosition",
            Msg::CreateSpotLimitOrder(_) => "createSpotLimitOrder",
            Msg::BatchCreateSpotLimitOrders(_) => "batchCreateSpotLimitOrders",
            Msg::CreateSpotMarketOrder(_) => "createSpotMarketOrder",
            Msg::CancelSpotOrder(_) => "cancelSpotOrder",
            Msg::BatchCancelSpotOrders(_) => "batchCancelSpotOrders",
            Msg::CreateDerivativeLimitOrder(_) => "createDerivativeLimitOrder",
            Msg::BatchCreateDerivativeLimitOrders(_) => "batchCreateDerivativeLimitOrder",
            Msg::CreateDerivativeMarketOrder(_) => "createDerivativeMarketOrder",
            Msg::CancelDerivativeOrder(_) => "cancelDerivativeOrder",
            Msg::BatchCancelDerivativeOrders(_) => "batchCancelDerivativeOrder",
            Msg::InstantSpotMarketLaunch(_) => "instantSpotMarketLaunch",
            Msg::InstantPerpetualMarketLaunch(_) => "instantPerpetualMarketLaunch",
            Msg::InstantExpiryFuturesMarketLaunch(_) => "instantExpiryFuturesMarketLaunch",
        }
    }

    /// Bech32 sender as written in the message.
    pub fn sender(&self) -> &str {
        match self {
            Msg::Deposit(m) => &m.sender,
            Msg::Withdraw(m) => &m.sender,
            Msg::SubaccountTransfer(m) => &m.sender,
            Msg::ExternalTransfer(m) => &m.sender,
            Msg::IncreasePositionMargin(m) => &m.sender,
            Msg::LiquidatePosition(m) => &m.sender,
            Msg::CreateSpotLimitOrder(m) => &m.sender,
            Msg::BatchCreateSpotLimitOrders(m) => &m.sender,
            Msg::CreateSpotMarketOrder(m) => &m.sender,
            Msg::CancelSpotOrder(m) => &m.sender,
            Msg::BatchCancelSpotOrders(m) => &m.sender,
            Msg::CreateDerivativeLimitOrder(m) => &m.sender,
            Msg::BatchCreateDerivativeLimitOrders(m) => &m.sender,
            Msg::CreateDerivativeMarketOrder(m) => &m.sender,
            Msg::CancelDerivativeOrder(m) => &m.sender,
            Msg::BatchCancelDerivativeOrders(m) => &m.sender,
            Msg::InstantSpotMarketLaunch(m) => &m.sender,
            Msg::InstantPerpetualMarketLaunch(m) => &m.sender,
            Msg::InstantExpiryFuturesMarketLaunch(m) => &m.sender,
        }
    }

    /// Accounts whose signatures the message needs. Only the sender signs.
    pub fn signers(&self, params: &ProtocolParams) -> Result<Vec<AccAddress>> {
        let sender = parse_address(self.sender(), params)?;
        Ok(vec![sender])
    }

    /// Canonical JSON encoding with object keys sorted.
    pub fn sign_bytes(&self) -> Result<Vec<u8>> {
        // serde_json's Map is ordered by key unless `preserve_order` is on.
        let value = serde_json::to_value(self)?;
        Ok(serde_json::to_vec(&value)?)
    }
}
