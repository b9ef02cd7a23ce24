//! # Validation Module
//!
//! Checks applied when a menu catalog is assembled and when configuration
//! is accepted.
//!
//! The order itself never validates free-form text: it only accepts keys
//! that resolve in the catalog, so every item it can hold has already
//! passed through here.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  InMemoryCatalog::insert(key, item)                                     │
//! │       │                                                                 │
//! │       ├── validate_item_key(key)      empty / too long / whitespace     │
//! │       ├── validate_item_name(name)    empty / too long                  │
//! │       ├── validate_price(price)       negative / above MAX_PRICE_CENTS  │
//! │       └── duplicate key?              Duplicate                         │
//! │                                                                         │
//! │  OrderConfig::validate()                                                │
//! │       └── validate_tax_rate_bps(bps)  above 100%                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted item key or display name.
pub const MAX_NAME_LEN: usize = 100;

/// Longest accepted item description.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Highest accepted menu price: $1,000,000.00.
///
/// Three selections at this price plus 100% tax stay far inside `i64`, so
/// order totals built from catalog items cannot overflow.
pub const MAX_PRICE_CENTS: i64 = 100_000_000;

/// 10000 bps = 100%.
pub const MAX_TAX_RATE_BPS: u32 = 10_000;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a catalog lookup key.
///
/// ## Rules
/// - Must not be empty
/// - At most `MAX_NAME_LEN` characters
/// - No whitespace (keys are identifiers like `cauliflower`, not labels)
///
/// ```rust
/// use lunchtray_core::validation::validate_item_key;
///
/// assert!(validate_item_key("cauliflower").is_ok());
/// assert!(validate_item_key("").is_err());
/// assert!(validate_item_key("mac and cheese").is_err());
/// ```
pub fn validate_item_key(key: &str) -> ValidationResult<()> {
    if key.is_empty() {
        return Err(ValidationError::Required {
            field: "key".to_string(),
        });
    }

    if key.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "key".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    if key.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidFormat {
            field: "key".to_string(),
            reason: "must not contain whitespace".to_string(),
        });
    }

    Ok(())
}

/// Validates an item display name.
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Descriptions may be empty.
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a menu price.
///
/// ## Rules
/// - Zero is allowed (free items)
/// - Negative is not
/// - At most `MAX_PRICE_CENTS`
///
/// ```rust
/// use lunchtray_core::money::Money;
/// use lunchtray_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(700)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-1)).is_err());
/// assert!(validate_price(Money::from_cents(i64::MAX)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    if price.cents() > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates a tax rate in basis points (0% to 100%).
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > MAX_TAX_RATE_BPS {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: MAX_TAX_RATE_BPS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
