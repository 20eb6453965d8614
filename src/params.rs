use bigdecimal::BigDecimal;
use num::BigInt;
use serde::{Deserialize, Serialize};

/// Human-readable part of account addresses on the exchange chain.
pub const DEFAULT_BECH32_PREFIX: &str = "inj";
/// Largest oracle scale factor a derivative market may declare.
pub const MAX_ORACLE_SCALE_FACTOR: u32 = 18;
/// Decimal places carried by on-chain decimals.
pub const MAX_DECIMAL_PLACES: i64 = 18;

/// 10^32, the ceiling for order prices, quantities and margins.
pub fn max_order_value() -> BigDecimal {
    BigDecimal::new(BigInt::from(1), -32)
}

/// Protocol-wide limits every admission check is measured against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtocolParams {
    /// Bech32 prefix of account addresses (e.g., "inj")
    #[serde(default = "default_bech32_prefix")]
    pub bech32_prefix: String,
    /// Upper bound for order price, margin, trigger price and tick sizes
    #[serde(default = "max_order_value")]
    pub max_order_price: BigDecimal,
    /// Upper bound for order quantity
    #[serde(default = "max_order_value")]
    pub max_order_quantity: BigDecimal,
    /// Upper bound for a market's oracle scale factor
    #[serde(default = "default_max_oracle_scale_factor")]
    pub max_oracle_scale_factor: u32,
    /// Maximum number of decimal places a tick size may carry
    #[serde(default = "default_max_decimal_places")]
    pub max_decimal_places: i64,
}

fn default_bech32_prefix() -> String {
    DEFAULT_BECH32_PREFIX.to_string()
}

fn default_max_oracle_scale_factor() -> u32 {
    MAX_ORACLE_SCALE_FACTOR
}

fn default_max_decimal_places() -> i64 {
    MAX_DECIMAL_PLACES
}

impl Default for ProtocolParams {
    fn default() -> Self {
        Self {
            bech32_prefix: default_bech32_prefix(),
            max_order_price: max_order_value(),
            max_order_quantity: max_order_value(),
            max_oracle_scale_factor: MAX_ORACLE_SCALE_FACTOR,
            max_decimal_places: MAX_DECIMAL_PLACES,
        }
    }
}
