//! Permissionless market launches.
//!
//! Derivative launches share one sequence of checks; the expiry futures
//! launch only adds the expiry right after the oracle scale factor.

use serde::{Deserialize, Serialize};

use crate::domain::{Dec, OracleType};
use crate::error::ValidationError;
use crate::params::ProtocolParams;
use crate::validation::{
    parse_address, validate_fee_rate, validate_margin_ratio, validate_oracle_scale_factor,
    validate_price_tick_size, validate_quantity_tick_size,
};

fn require(value: &str, err: impl FnOnce() -> ValidationError) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(err());
    }
    Ok(())
}

fn validate_tick_sizes(
    min_price_tick_size: &Dec,
    min_quantity_tick_size: &Dec,
    params: &ProtocolParams,
) -> Result<(), ValidationError> {
    validate_price_tick_size(min_price_tick_size, params)?;
    validate_quantity_tick_size(min_quantity_tick_size, params)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgInstantSpotMarketLaunch {
    pub sender: String,
    #[serde(default)]
    pub ticker: String,
    #[serde(default)]
    pub base_denom: String,
    #[serde(default)]
    pub quote_denom: String,
    #[serde(default)]
    pub min_price_tick_size: Dec,
    #[serde(default)]
    pub min_quantity_tick_size: Dec,
}

impl MsgInstantSpotMarketLaunch {
    pub fn validate_basic(&self, params: &ProtocolParams) -> Result<(), ValidationError> {
        parse_address(&self.sender, params)?;
        require(&self.ticker, || {
            ValidationError::InvalidTicker("ticker should not be empty".to_string())
        })?;
        require(&self.base_denom, || {
            ValidationError::InvalidBaseDenom("base denom should not be empty".to_string())
        })?;
        require(&self.quote_denom, || {
            ValidationError::InvalidQuoteDenom("quote denom should not be empty".to_string())
        })?;
        if self.base_denom == self.quote_denom {
            return Err(ValidationError::SameDenoms);
        }
        validate_tick_sizes(&self.min_price_tick_size, &self.min_quantity_tick_size, params)
    }
}

/// Oracle wiring of a derivative market
struct OracleTerms<'a> {
    base: &'a str,
    quote: &'a str,
    oracle_type: OracleType,
    scale_factor: u32,
}

impl OracleTerms<'_> {
    /// Base, quote, distinct feeds, supported provider, then scale factor.
    fn validate(&self, params: &ProtocolParams) -> Result<(), ValidationError> {
        require(self.base, || {
            ValidationError::InvalidOracle("oracle base should not be empty".to_string())
        })?;
        require(self.quote, || {
            ValidationError::InvalidOracle("oracle quote should not be empty".to_string())
        })?;
        if self.base == self.quote {
            return Err(ValidationError::SameOracles);
        }
        if !self.oracle_type.is_supported() {
            return Err(ValidationError::InvalidOracleType(
                self.oracle_type.to_string(),
            ));
        }
        validate_oracle_scale_factor(self.scale_factor, params)
    }
}

/// Fee and margin parameters of a derivative market
struct RiskTerms<'a> {
    maker_fee_rate: &'a Dec,
    taker_fee_rate: &'a Dec,
    initial_margin_ratio: &'a Dec,
    maintenance_margin_ratio: &'a Dec,
}

impl RiskTerms<'_> {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_fee_rate(self.maker_fee_rate)?;
        validate_fee_rate(self.taker_fee_rate)?;
        validate_margin_ratio(self.initial_margin_ratio)?;
        validate_margin_ratio(self.maintenance_margin_ratio)?;

        // All four are set past this point.
        if self.maker_fee_rate.value() > self.taker_fee_rate.value() {
            return Err(ValidationError::FeeRatesRelation);
        }
        if self.initial_margin_ratio.value() < self.maintenance_margin_ratio.value() {
            return Err(ValidationError::MarginsRelation);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgInstantPerpetualMarketLaunch {
    pub sender: String,
    #[serde(default)]
    pub ticker: String,
    #[serde(default)]
    pub quote_denom: String,
    #[serde(default)]
    pub oracle_base: String,
    #[serde(default)]
    pub oracle_quote: String,
    #[serde(default)]
    pub oracle_type: OracleType,
    #[serde(default)]
    pub oracle_scale_factor: u32,
    #[serde(default)]
    pub maker_fee_rate: Dec,
    #[serde(default)]
    pub taker_fee_rate: Dec,
    #[serde(default)]
    pub initial_margin_ratio: Dec,
    #[serde(default)]
    pub maintenance_margin_ratio: Dec,
    #[serde(default)]
    pub min_price_tick_size: Dec,
    #[serde(default)]
    pub min_quantity_tick_size: Dec,
}

impl MsgInstantPerpetualMarketLaunch {
    fn oracle(&self) -> OracleTerms<'_> {
        OracleTerms {
            base: &self.oracle_base,
            quote: &self.oracle_quote,
            oracle_type: self.oracle_type,
            scale_factor: self.oracle_scale_factor,
        }
    }

    fn risk(&self) -> RiskTerms<'_> {
        RiskTerms {
            maker_fee_rate: &self.maker_fee_rate,
            taker_fee_rate: &self.taker_fee_rate,
            initial_margin_ratio: &self.initial_margin_ratio,
            maintenance_margin_ratio: &self.maintenance_margin_ratio,
        }
    }

    pub fn validate_basic(&self, params: &ProtocolParams) -> Result<(), ValidationError> {
        parse_address(&self.sender, params)?;
        require(&self.ticker, || {
            ValidationError::InvalidTicker("ticker should not be empty".to_string())
        })?;
        require(&self.quote_denom, || {
            ValidationError::InvalidQuoteDenom("quote denom should not be empty".to_string())
        })?;
        self.oracle().validate(params)?;
        self.risk().validate()?;
        validate_tick_sizes(&self.min_price_tick_size, &self.min_quantity_tick_size, params)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgInstantExpiryFuturesMarketLaunch {
    pub sender: String,
    #[serde(default)]
    pub ticker: String,
    #[serde(default)]
    pub quote_denom: String,
    #[serde(default)]
    pub oracle_base: String,
    #[serde(default)]
    pub oracle_quote: String,
    #[serde(default)]
    pub oracle_type: OracleType,
    #[serde(default)]
    pub oracle_scale_factor: u32,
    /// Unix seconds at which the market settles
    #[serde(default)]
    pub expiry: i64,
    #[serde(default)]
    pub maker_fee_rate: Dec,
    #[serde(default)]
    pub taker_fee_rate: Dec,
    #[serde(default)]
    pub initial_margin_ratio: Dec,
    #[serde(default)]
    pub maintenance_margin_ratio: Dec,
    #[serde(default)]
    pub min_price_tick_size: Dec,
    #[serde(default)]
    pub min_quantity_tick_size: Dec,
}

impl MsgInstantExpiryFuturesMarketLaunch {
    fn oracle(&self) -> OracleTerms<'_> {
        OracleTerms {
            base: &self.oracle_base,
            quote: &self.oracle_quote,
            oracle_type: self.oracle_type,
            scale_factor: self.oracle_scale_factor,
        }
    }

    fn risk(&self) -> RiskTerms<'_> {
        RiskTerms {
            maker_fee_rate: &self.maker_fee_rate,
            taker_fee_rate: &self.taker_fee_rate,
            initial_margin_ratio: &self.initial_margin_ratio,
            maintenance_margin_ratio: &self.maintenance_margin_ratio,
        }
    }

    pub fn validate_basic(&self, params: &ProtocolParams) -> Result<(), ValidationError> {
        parse_address(&self.sender, params)?;
        require(&self.ticker, || {
            ValidationError::InvalidTicker("ticker should not be empty".to_string())
        })?;
        require(&self.quote_denom, || {
            ValidationError::InvalidQuoteDenom("quote denom should not be empty".to_string())
        })?;
        self.oracle().validate(params)?;
        if self.expiry <= 0 {
            return Err(ValidationError::InvalidExpiry(
                "expiry should not be empty".to_string(),
            ));
        }
        self.risk().validate()?;
        validate_tick_sizes(&self.min_price_tick_size, &self.min_quantity_tick_size, params)
    }
}
