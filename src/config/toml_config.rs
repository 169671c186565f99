use crate::config::OutputFormat;
use crate::core::tariff::Tariff;
use crate::utils::error::{PricingError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TariffConfig {
    #[serde(default)]
    pub tariff: TariffSection,
    pub output: Option<OutputSection>,
}

/// Every key falls back to the standard tariff when omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TariffSection {
    pub weekday_base_price: Option<f64>,
    pub weekend_base_price: Option<f64>,
    pub day_discount_rate: Option<f64>,
    pub child_discount_rate: Option<f64>,
    pub max_child_age: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub format: Option<OutputFormat>,
}

impl TariffConfig {
    /// Loads a tariff file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| PricingError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses tariff TOML after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PricingError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Unset variables are left as written, so TOML parsing reports them.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PricingError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn tariff(&self) -> Tariff {
        let defaults = Tariff::default();
        let section = &self.tariff;
        Tariff {
            weekday_base_price: section
                .weekday_base_price
                .unwrap_or(defaults.weekday_base_price),
            weekend_base_price: section
                .weekend_base_price
                .unwrap_or(defaults.weekend_base_price),
            day_discount_rate: section
                .day_discount_rate
                .unwrap_or(defaults.day_discount_rate),
            child_discount_rate: section
                .child_discount_rate
                .unwrap_or(defaults.child_discount_rate),
            max_child_age: section.max_child_age.unwrap_or(defaults.max_child_age),
        }
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }
}

impl Validate for TariffConfig {
    fn validate(&self) -> Result<()> {
        self.tariff().validate()
    }
}
