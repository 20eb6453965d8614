//! Numeric bound checks
//!
//! Every check rejects a nil decimal, even where zero would be accepted.

use bigdecimal::BigDecimal;
use num::{One, Zero};
use thiserror::Error;

use crate::domain::Dec;
use crate::error::ValidationError;
use crate::params::ProtocolParams;

/// Why a tick size was refused; the caller decides whether it was the price
/// or the quantity tick.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TickSizeError {
    #[error("tick size cannot be nil")]
    Nil,

    #[error("tick size cannot be negative: {0}")]
    Negative(String),

    #[error("tick size cannot be zero")]
    Zero,

    #[error("tick size cannot exceed {max}: {value}")]
    TooLarge { value: String, max: String },

    #[error("tick size cannot have more than {max} decimal places: {value}")]
    TooPrecise { value: String, max: i64 },
}

/// Lower end of an accepted range; the upper end is always inclusive.
#[derive(Debug, Clone, Copy)]
enum Floor {
    /// `value > 0`
    AboveZero,
    /// `value >= 0`
    Zero,
}

fn in_range(value: &Dec, floor: Floor, max: &BigDecimal) -> bool {
    let Some(v) = value.value() else {
        return false;
    };
    let zero = BigDecimal::zero();
    let above_floor = match floor {
        Floor::AboveZero => *v > zero,
        Floor::Zero => *v >= zero,
    };
    above_floor && v <= max
}

/// Quantity must be set, positive, and at most the protocol maximum.
pub fn validate_quantity(quantity: &Dec, params: &ProtocolParams) -> Result<(), ValidationError> {
    if !in_range(quantity, Floor::AboveZero, &params.max_order_quantity) {
        return Err(ValidationError::InvalidQuantity(quantity.to_string()));
    }
    Ok(())
}

/// Price must be set, positive, and at most the protocol maximum.
pub fn validate_price(price: &Dec, params: &ProtocolParams) -> Result<(), ValidationError> {
    if !in_range(price, Floor::AboveZero, &params.max_order_price) {
        return Err(ValidationError::InvalidPrice(price.to_string()));
    }
    Ok(())
}

/// Margin shares the price ceiling; zero margin is allowed.
pub fn validate_margin(margin: &Dec, params: &ProtocolParams) -> Result<(), ValidationError> {
    if !in_range(margin, Floor::Zero, &params.max_order_price) {
        return Err(ValidationError::InvalidMargin(margin.to_string()));
    }
    Ok(())
}

/// An absent trigger price passes; a present one must be set and in `[0, max price]`.
pub fn validate_trigger_price(
    trigger_price: Option<&Dec>,
    params: &ProtocolParams,
) -> Result<(), ValidationError> {
    match trigger_price {
        Some(trigger) if !in_range(trigger, Floor::Zero, &params.max_order_price) => {
            Err(ValidationError::InvalidTriggerPrice(trigger.to_string()))
        }
        _ => Ok(()),
    }
}

/// Fee rates lie in `[0, 1]`.
pub fn validate_fee_rate(fee_rate: &Dec) -> Result<(), ValidationError> {
    let Some(v) = fee_rate.value() else {
        return Err(ValidationError::InvalidFeeRate(
            "exchange fee cannot be nil".to_string(),
        ));
    };
    if *v < BigDecimal::zero() {
        return Err(ValidationError::InvalidFeeRate(format!(
            "exchange fee cannot be negative: {}",
            v
        )));
    }
    if *v > BigDecimal::one() {
        return Err(ValidationError::InvalidFeeRate(format!(
            "exchange fee cannot be greater than 1: {}",
            v
        )));
    }
    Ok(())
}

/// Margin ratios lie in `[0, 1)`.
pub fn validate_margin_ratio(ratio: &Dec) -> Result<(), ValidationError> {
    let Some(v) = ratio.value() else {
        return Err(ValidationError::InvalidMarginRatio(
            "margin ratio cannot be nil".to_string(),
        ));
    };
    if *v < BigDecimal::zero() {
        return Err(ValidationError::InvalidMarginRatio(format!(
            "margin ratio cannot be negative: {}",
            v
        )));
    }
    if *v >= BigDecimal::one() {
        return Err(ValidationError::InvalidMarginRatio(format!(
            "margin ratio cannot be greater than or equal to 1: {}",
            v
        )));
    }
    Ok(())
}

/// Tick sizes must be set, positive, no larger than the price ceiling, and
/// representable with the chain's decimal precision.
pub fn check_tick_size(tick_size: &Dec, params: &ProtocolParams) -> Result<(), TickSizeError> {
    let Some(v) = tick_size.value() else {
        return Err(TickSizeError::Nil);
    };
    let zero = BigDecimal::zero();
    if *v < zero {
        return Err(TickSizeError::Negative(v.to_string()));
    }
    if *v == zero {
        return Err(TickSizeError::Zero);
    }
    if *v > params.max_order_price {
        return Err(TickSizeError::TooLarge {
            value: v.to_string(),
            max: params.max_order_price.to_string(),
        });
    }

    let (_, scale) = v.normalized().as_bigint_and_exponent();
    if scale > params.max_decimal_places {
        return Err(TickSizeError::TooPrecise {
            value: v.to_string(),
            max: params.max_decimal_places,
        });
    }
    Ok(())
}

pub fn validate_price_tick_size(
    tick_size: &Dec,
    params: &ProtocolParams,
) -> Result<(), ValidationError> {
    check_tick_size(tick_size, params)
        .map_err(|e| ValidationError::InvalidPriceTickSize(e.to_string()))
}

pub fn validate_quantity_tick_size(
    tick_size: &Dec,
    params: &ProtocolParams,
) -> Result<(), ValidationError> {
    check_tick_size(tick_size, params)
        .map_err(|e| ValidationError::InvalidQuantityTickSize(e.to_string()))
}

pub fn validate_oracle_scale_factor(
    scale_factor: u32,
    params: &ProtocolParams,
) -> Result<(), ValidationError> {
    if scale_factor > params.max_oracle_scale_factor {
        return Err(ValidationError::ExceedsMaxOracleScaleFactor);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Dec {
        s.parse().unwrap()
    }

    #[test]
    fn test_price_and_quantity_bounds() {
        let params = ProtocolParams::default();
        let max = "100000000000000000000000000000000";

        assert!(validate_price(&dec("0.000001"), &params).is_ok());
        assert!(validate_price(&dec(max), &params).is_ok());
        assert!(validate_quantity(&dec(max), &params).is_ok());

        assert_eq!(
            validate_price(&dec("0"), &params),
            Err(ValidationError::InvalidPrice("0".to_string()))
        );
        assert!(validate_price(&dec("-1"), &params).is_err());
        assert!(validate_price(&dec("100000000000000000000000000000000.1"), &params).is_err());
        assert!(validate_price(&Dec::nil(), &params).is_err());

        assert!(matches!(
            validate_quantity(&dec("0"), &params),
            Err(ValidationError::InvalidQuantity(_))
        ));
        assert!(validate_quantity(&Dec::nil(), &params).is_err());
        assert_eq!(
            validate_quantity(&dec("100000000000000000000000000000000.1"), &params),
            Err(ValidationError::InvalidQuantity(
                "100000000000000000000000000000000.1".to_string()
            ))
        );
    }

    #[test]
    fn test_each_bound_uses_its_own_ceiling() {
        let mut params = ProtocolParams::default();
        params.max_order_quantity = BigDecimal::from(10);

        assert!(validate_quantity(&dec("10"), &params).is_ok());
        assert!(validate_quantity(&dec("10.5"), &params).is_err());
        assert!(validate_price(&dec("10.5"), &params).is_ok());
        assert!(validate_margin(&dec("10.5"), &params).is_ok());
        assert!(validate_trigger_price(Some(&dec("10.5")), &params).is_ok());

        let mut params = ProtocolParams::default();
        params.max_order_price = BigDecimal::from(10);
        assert!(validate_quantity(&dec("10.5"), &params).is_ok());
        assert!(validate_price(&dec("10.5"), &params).is_err());
        assert!(validate_margin(&dec("10.5"), &params).is_err());
        assert!(validate_trigger_price(Some(&dec("10.5")), &params).is_err());
    }

    #[test]
    fn test_margin_allows_zero_but_not_nil() {
        let params = ProtocolParams::default();
        assert!(validate_margin(&dec("0"), &params).is_ok());
        assert!(validate_margin(&dec("1500.25"), &params).is_ok());
        assert!(matches!(
            validate_margin(&dec("-0.1"), &params),
            Err(ValidationError::InvalidMargin(_))
        ));
        assert!(validate_margin(&Dec::nil(), &params).is_err());
        assert!(validate_margin(&dec("100000000000000000000000000000000"), &params).is_ok());
        assert!(matches!(
            validate_margin(&dec("100000000000000000000000000000000.1"), &params),
            Err(ValidationError::InvalidMargin(_))
        ));
    }

    #[test]
    fn test_trigger_price() {
        let params = ProtocolParams::default();
        assert!(validate_trigger_price(None, &params).is_ok());
        assert!(validate_trigger_price(Some(&dec("0")), &params).is_ok());
        assert_eq!(
            validate_trigger_price(Some(&Dec::nil()), &params),
            Err(ValidationError::InvalidTriggerPrice("<nil>".to_string()))
        );
        assert!(validate_trigger_price(Some(&dec("-3")), &params).is_err());
        assert!(validate_trigger_price(Some(&dec("100000000000000000000000000000000")), &params).is_ok());
        assert!(matches!(
            validate_trigger_price(Some(&dec("100000000000000000000000000000000.1")), &params),
            Err(ValidationError::InvalidTriggerPrice(_))
        ));
    }

    #[test]
    fn test_fee_rate_bounds() {
        assert!(validate_fee_rate(&dec("0")).is_ok());
        assert!(validate_fee_rate(&dec("0.001")).is_ok());
        assert!(validate_fee_rate(&dec("1")).is_ok());
        assert!(validate_fee_rate(&dec("1.0001")).is_err());
        assert!(validate_fee_rate(&dec("-0.0001")).is_err());
        assert!(matches!(
            validate_fee_rate(&Dec::nil()),
            Err(ValidationError::InvalidFeeRate(_))
        ));
    }

    #[test]
    fn test_margin_ratio_bounds() {
        assert!(validate_margin_ratio(&dec("0")).is_ok());
        assert!(validate_margin_ratio(&dec("0.05")).is_ok());
        assert!(validate_margin_ratio(&dec("0.999")).is_ok());
        assert!(validate_margin_ratio(&dec("1")).is_err());
        assert!(validate_margin_ratio(&dec("-0.5")).is_err());
        assert!(matches!(
            validate_margin_ratio(&Dec::nil()),
            Err(ValidationError::InvalidMarginRatio(_))
        ));
    }

    #[test]
    fn test_tick_size() {
        let params = ProtocolParams::default();
        assert!(check_tick_size(&dec("0.001"), &params).is_ok());
        assert!(check_tick_size(&dec("1000"), &params).is_ok());
        assert!(check_tick_size(&dec("0.000000000000000001"), &params).is_ok());
        assert!(check_tick_size(&dec("0.10000000000000000000"), &params).is_ok());

        assert_eq!(check_tick_size(&Dec::nil(), &params), Err(TickSizeError::Nil));
        assert_eq!(check_tick_size(&dec("0"), &params), Err(TickSizeError::Zero));
        assert!(matches!(
            check_tick_size(&dec("-0.01"), &params),
            Err(TickSizeError::Negative(_))
        ));
        assert!(matches!(
            check_tick_size(&dec("0.0000000000000000001"), &params),
            Err(TickSizeError::TooPrecise { .. })
        ));
        assert!(matches!(
            check_tick_size(&dec("1000000000000000000000000000000000"), &params),
            Err(TickSizeError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_tick_size_error_kind_follows_field() {
        let params = ProtocolParams::default();
        assert!(matches!(
            validate_price_tick_size(&dec("0"), &params),
            Err(ValidationError::InvalidPriceTickSize(_))
        ));
        assert!(matches!(
            validate_quantity_tick_size(&dec("0"), &params),
            Err(ValidationError::InvalidQuantityTickSize(_))
        ));
    }

    #[test]
    fn test_oracle_scale_factor() {
        let params = ProtocolParams::default();
        assert!(validate_oracle_scale_factor(0, &params).is_ok());
        assert!(validate_oracle_scale_factor(18, &params).is_ok());
        assert_eq!(
            validate_oracle_scale_factor(19, &params),
            Err(ValidationError::ExceedsMaxOracleScaleFactor)
        );
    }
}
