//! CLI configuration.
//!
//! Loaded from environment variables with fallback to defaults:
//!
//! | Variable                     | Default | Meaning                          |
//! |------------------------------|---------|----------------------------------|
//! | `LUNCHTRAY_TAX_RATE_BPS`     | `800`   | tax rate in basis points (8%)    |
//! | `LUNCHTRAY_CURRENCY_SYMBOL`  | `$`     | symbol used when printing money  |
//! | `LUNCHTRAY_LOG`              | `info`  | tracing filter directive         |

use std::env;

use lunchtray_core::{OrderConfig, TaxRate, DEFAULT_TAX_RATE_BPS};

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Tax rate handed to every order.
    pub tax_rate_bps: u32,

    /// Currency symbol for display
    pub currency_symbol: String,

    /// `EnvFilter` directive for the tracing subscriber
    pub log_filter: String,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let tax_rate_bps = match lookup("LUNCHTRAY_TAX_RATE_BPS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("LUNCHTRAY_TAX_RATE_BPS".to_string()))?,
            None => DEFAULT_TAX_RATE_BPS,
        };

        let config = AppConfig {
            tax_rate_bps,
            currency_symbol: lookup("LUNCHTRAY_CURRENCY_SYMBOL").unwrap_or_else(|| "$".to_string()),
            log_filter: lookup("LUNCHTRAY_LOG").unwrap_or_else(|| "info".to_string()),
        };

        config
            .order_config()
            .validate()
            .map_err(ConfigError::Rejected)?;

        Ok(config)
    }

    /// Applies a command-line override of the tax rate.
    pub fn with_tax_rate_bps(mut self, bps: Option<u32>) -> Result<Self, ConfigError> {
        if let Some(bps) = bps {
            self.tax_rate_bps = bps;
            self.order_config()
                .validate()
                .map_err(ConfigError::Rejected)?;
        }
        Ok(self)
    }

    pub fn order_config(&self) -> OrderConfig {
        OrderConfig::with_tax_rate(TaxRate::from_bps(self.tax_rate_bps))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Configuration rejected: {0}")]
    Rejected(lunchtray_core::ValidationError),
}
