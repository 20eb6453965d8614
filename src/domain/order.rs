use serde::{Deserialize, Serialize};

use super::decimal::{deserialize_present, Dec};

/// Order direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    #[default]
    Unspecified,
    Buy,
    Sell,
    /// Any wire value this build does not know about
    #[serde(other)]
    Unrecognized,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Unspecified => "UNSPECIFIED",
            OrderType::Buy => "BUY",
            OrderType::Sell => "SELL",
            OrderType::Unrecognized => "UNRECOGNIZED",
        }
    }

    /// Only buys and sells can be placed.
    pub fn is_tradable(&self) -> bool {
        matches!(self, OrderType::Buy | OrderType::Sell)
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fields shared by every order: who places it, at what price and size
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderInfo {
    /// Subaccount placing the order
    #[serde(default)]
    pub subaccount_id: String,
    /// Bech32 address receiving the relayer share of fees
    #[serde(default)]
    pub fee_recipient: String,
    #[serde(default)]
    pub price: Dec,
    #[serde(default)]
    pub quantity: Dec,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpotOrder {
    #[serde(default)]
    pub market_id: String,
    #[serde(default)]
    pub order_info: OrderInfo,
    #[serde(default)]
    pub order_type: OrderType,
    /// Absent for plain orders; set for conditional orders
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub trigger_price: Option<Dec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DerivativeOrder {
    #[serde(default)]
    pub market_id: String,
    #[serde(default)]
    pub order_info: OrderInfo,
    #[serde(default)]
    pub order_type: OrderType,
    /// Collateral posted with the order
    #[serde(default)]
    pub margin: Dec,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub trigger_price: Option<Dec>,
}

/// Reference to a resting order, used for cancellation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderData {
    #[serde(default)]
    pub market_id: String,
    #[serde(default)]
    pub subaccount_id: String,
    #[serde(default)]
    pub order_hash: String,
}

/// Order hashes are `0x` followed by 64 hex characters.
pub fn is_valid_order_hash(order_hash: &str) -> bool {
    match order_hash.strip_prefix("0x") {
        Some(digits) => digits.len() == 64 && digits.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
