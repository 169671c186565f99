use crate::utils::error::Result;
use crate::utils::validation::{validate_price, validate_range, Validate};
use serde::{Deserialize, Serialize};

pub const WEEKDAY_BASE_PRICE: f64 = 40.0;
pub const WEEKEND_BASE_PRICE: f64 = 50.0;
pub const DAY_DISCOUNT_RATE: f64 = 0.25;
pub const CHILD_DISCOUNT_RATE: f64 = 0.5;
pub const MAX_CHILD_AGE: u32 = 10;

/// Constants the pricing rule is evaluated with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tariff {
    pub weekday_base_price: f64,
    pub weekend_base_price: f64,
    pub day_discount_rate: f64,
    pub child_discount_rate: f64,
    /// Patrons strictly younger than this are children.
    pub max_child_age: u32,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            weekday_base_price: WEEKDAY_BASE_PRICE,
            weekend_base_price: WEEKEND_BASE_PRICE,
            day_discount_rate: DAY_DISCOUNT_RATE,
            child_discount_rate: CHILD_DISCOUNT_RATE,
            max_child_age: MAX_CHILD_AGE,
        }
    }
}

impl Validate for Tariff {
    fn validate(&self) -> Result<()> {
        validate_price("tariff.weekday_base_price", self.weekday_base_price)?;
        validate_price("tariff.weekend_base_price", self.weekend_base_price)?;
        validate_range("tariff.day_discount_rate", self.day_discount_rate, 0.0, 1.0)?;
        validate_range("tariff.child_discount_rate", self.child_discount_rate, 0.0, 1.0)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::PricingError;

    #[test]
    fn test_default_tariff_is_valid() {
        let tariff = Tariff::default();
        assert!(tariff.validate().is_ok());
        assert_eq!(tariff.weekday_base_price, 40.0);
        assert_eq!(tariff.weekend_base_price, 50.0);
        assert_eq!(tariff.day_discount_rate, 0.25);
        assert_eq!(tariff.child_discount_rate, 0.5);
        assert_eq!(tariff.max_child_age, 10);
    }

    #[test]
    fn test_rejects_rate_above_one() {
        let tariff = Tariff {
            child_discount_rate: 1.2,
            ..Tariff::default()
        };
        match tariff.validate() {
            Err(PricingError::InvalidConfigValue { field, .. }) => {
                assert_eq!(field, "tariff.child_discount_rate")
            }
            other => panic!("expected InvalidConfigValue, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_negative_price() {
        let tariff = Tariff {
            weekend_base_price: -1.0,
            ..Tariff::default()
        };
        assert!(tariff.validate().is_err());
    }
}
