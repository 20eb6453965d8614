use thiserror::Error;

use crate::domain::{AddressError, SubaccountError};

/// Codespace of errors raised by the base account and bank layer.
pub const SDK_CODESPACE: &str = "sdk";
/// Codespace of errors raised by the exchange module.
pub const EXCHANGE_CODESPACE: &str = "exchange";

/// Why a message was refused admission.
///
/// Each variant carries the offending value (or a short explanation) as its
/// detail. Codes are stable and match the exchange module's error registry,
/// so clients can branch on `(codespace, code)` rather than on text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    // Account and bank errors
    #[error("{0}: invalid address")]
    InvalidAddress(String),

    #[error("{0}: invalid coins")]
    InvalidCoins(String),

    // Identity errors
    #[error("{0}: subaccount id is not valid")]
    BadSubaccountId(String),

    #[error("{0}: subaccount id is not owned by signer")]
    SubaccountOwnership(String),

    // Order errors
    #[error("{0}: failed to validate market")]
    InvalidMarket(String),

    #[error("{0}: unrecognized order type")]
    UnrecognizedOrderType(String),

    #[error("{0}: order hash is not valid")]
    InvalidOrderHash(String),

    #[error("{0}: invalid price")]
    InvalidPrice(String),

    #[error("{0}: invalid quantity")]
    InvalidQuantity(String),

    #[error("{0}: invalid order margin")]
    InvalidMargin(String),

    #[error("{0}: invalid trigger price")]
    InvalidTriggerPrice(String),

    // Market launch errors
    #[error("{0}: invalid ticker")]
    InvalidTicker(String),

    #[error("{0}: invalid base denom")]
    InvalidBaseDenom(String),

    #[error("{0}: invalid quote denom")]
    InvalidQuoteDenom(String),

    #[error("{0}: invalid oracle")]
    InvalidOracle(String),

    #[error("{0}: invalid oracle type")]
    InvalidOracleType(String),

    #[error("{0}: invalid expiry")]
    InvalidExpiry(String),

    #[error("{0}: invalid minimum price tick size")]
    InvalidPriceTickSize(String),

    #[error("{0}: invalid minimum quantity tick size")]
    InvalidQuantityTickSize(String),

    #[error("{0}: invalid fee rate")]
    InvalidFeeRate(String),

    #[error("{0}: invalid margin ratio")]
    InvalidMarginRatio(String),

    #[error("base denom cannot be same with quote denom")]
    SameDenoms,

    #[error("oracle base cannot be same with oracle quote")]
    SameOracles,

    #[error("MakerFeeRate cannot be greater than TakerFeeRate")]
    FeeRatesRelation,

    #[error("MaintenanceMarginRatio cannot be greater than InitialMarginRatio")]
    MarginsRelation,

    #[error("OracleScaleFactor cannot be greater than MaxOracleScaleFactor")]
    ExceedsMaxOracleScaleFactor,
}

impl ValidationError {
    /// Codespace the error code belongs to.
    pub fn codespace(&self) -> &'static str {
        match self {
            ValidationError::InvalidAddress(_) | ValidationError::InvalidCoins(_) => SDK_CODESPACE,
            _ => EXCHANGE_CODESPACE,
        }
    }

    /// Stable numeric code within [`Self::codespace`].
    pub fn code(&self) -> u32 {
        match self {
            ValidationError::InvalidAddress(_) => 7,
            ValidationError::InvalidCoins(_) => 10,
            ValidationError::InvalidFeeRate(_) | ValidationError::InvalidMarginRatio(_) => 4,
            ValidationError::InvalidMarket(_) => 5,
            ValidationError::UnrecognizedOrderType(_) => 7,
            ValidationError::InvalidOrderHash(_) => 9,
            ValidationError::BadSubaccountId(_) | ValidationError::SubaccountOwnership(_) => 10,
            ValidationError::InvalidTicker(_) => 11,
            ValidationError::InvalidBaseDenom(_) => 12,
            ValidationError::InvalidQuoteDenom(_) => 13,
            ValidationError::InvalidOracle(_) => 14,
            ValidationError::InvalidExpiry(_) => 15,
            ValidationError::InvalidPrice(_) => 16,
            ValidationError::InvalidQuantity(_) => 17,
            ValidationError::InvalidMargin(_) => 26,
            ValidationError::InvalidTriggerPrice(_) => 32,
            ValidationError::InvalidOracleType(_) => 33,
            ValidationError::InvalidPriceTickSize(_) => 34,
            ValidationError::InvalidQuantityTickSize(_) => 35,
            ValidationError::SameDenoms => 42,
            ValidationError::SameOracles => 43,
            ValidationError::FeeRatesRelation => 44,
            ValidationError::MarginsRelation => 45,
            ValidationError::ExceedsMaxOracleScaleFactor => 46,
        }
    }
}

/// Main error type for everything around validation: config, decoding, IO
#[derive(Error, Debug)]
pub enum DexGateError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    // Serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // Validation errors
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    // Identity codec errors
    #[error("Address error: {0}")]
    Address(#[from] AddressError),

    #[error("Subaccount error: {0}")]
    Subaccount(#[from] SubaccountError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for DexGateError
pub type Result<T> = std::result::Result<T, DexGateError>;
