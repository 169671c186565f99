use crate::utils::error::{PricingError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_negative_age(field_name: &str, age: i64) -> Result<u32> {
    if age < 0 {
        return Err(PricingError::invalid_argument(
            field_name,
            format!("age must not be negative (got {})", age),
        ));
    }
    u32::try_from(age).map_err(|_| {
        PricingError::invalid_argument(field_name, format!("age {} is out of range", age))
    })
}

pub fn validate_price(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(PricingError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Price must be a finite number >= 0".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN fails both comparisons, so check containment instead of exclusion.
    if !(value >= min && value <= max) {
        return Err(PricingError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PricingError::invalid_argument(
            field_name,
            "value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_negative_age() {
        assert_eq!(validate_non_negative_age("age", 0).unwrap(), 0);
        assert_eq!(validate_non_negative_age("age", 42).unwrap(), 42);
        assert!(matches!(
            validate_non_negative_age("age", -1),
            Err(PricingError::InvalidArgument { .. })
        ));
        assert!(validate_non_negative_age("age", i64::MAX).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("tariff.weekday_base_price", 40.0).is_ok());
        assert!(validate_price("tariff.weekday_base_price", 0.0).is_ok());
        assert!(validate_price("tariff.weekday_base_price", -0.5).is_err());
        assert!(validate_price("tariff.weekday_base_price", f64::NAN).is_err());
        assert!(validate_price("tariff.weekday_base_price", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("tariff.day_discount_rate", 0.25, 0.0, 1.0).is_ok());
        assert!(validate_range("tariff.day_discount_rate", 1.0, 0.0, 1.0).is_ok());
        assert!(validate_range("tariff.day_discount_rate", 1.5, 0.0, 1.0).is_err());
        assert!(validate_range("tariff.day_discount_rate", f64::NAN, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("day", "monday").is_ok());
        assert!(validate_non_empty_string("day", "   ").is_err());
    }
}
