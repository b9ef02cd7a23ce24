//! # Order Configuration
//!
//! Options recognized when an `OrderState` is constructed. Loading them from
//! the environment is the app's job; this module only holds the values and
//! checks them.

use serde::{Deserialize, Serialize};

use crate::types::TaxRate;
use crate::validation::{validate_tax_rate_bps, ValidationResult};

/// Construction-time settings for an order.
///
/// Fixed for the lifetime of the `OrderState` built from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfig {
    /// Rate applied to the subtotal to produce tax. Default 8%.
    #[serde(default)]
    pub tax_rate: TaxRate,
}

impl OrderConfig {
    pub fn with_tax_rate(tax_rate: TaxRate) -> Self {
        OrderConfig { tax_rate }
    }

    pub fn validate(&self) -> ValidationResult<()> {
        validate_tax_rate_bps(self.tax_rate.bps())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OrderConfig::default();
        assert_eq!(config.tax_rate.bps(), 800);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_tax_rate_deserializes_to_default() {
        let config: OrderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, OrderConfig::default());

        let config: OrderConfig = serde_json::from_str(r#"{"taxRate": 725}"#).unwrap();
        assert_eq!(config.tax_rate.bps(), 725);
    }

    #[test]
    fn test_rate_above_one_hundred_percent_is_rejected() {
        let config = OrderConfig::with_tax_rate(TaxRate::from_bps(10_001));
        assert!(config.validate().is_err());
    }
}
