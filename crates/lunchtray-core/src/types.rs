//! # Domain Types
//!
//! Value types shared by the catalog, the order and the presentation layer.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    MenuItem     │   │    Category     │   │    OrderSummary     │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  name           │   │  Entree         │   │  entree / side /    │   │
//! │  │  description    │   │  Side           │   │  accompaniment      │   │
//! │  │  price (Money)  │   │  Accompaniment  │   │  subtotal/tax/total │   │
//! │  │  category       │   └─────────────────┘   └─────────────────────┘   │
//! │  └─────────────────┘                                                    │
//! │  ┌─────────────────┐                                                    │
//! │  │    TaxRate      │   800 bps = 8%                                     │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate in basis points (1 bps = 0.01%).
///
/// 800 bps is the 8% lunch tray rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::from_bps(crate::DEFAULT_TAX_RATE_BPS)
    }
}

// =============================================================================
// Category
// =============================================================================

/// One of the three purchasable slots of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Entree,
    Side,
    Accompaniment,
}

impl Category {
    /// All categories, in the order a tray is filled.
    pub const ALL: [Category; 3] = [Category::Entree, Category::Side, Category::Accompaniment];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Entree => "entree",
            Category::Side => "side",
            Category::Accompaniment => "accompaniment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: Category::ALL.iter().map(|c| c.as_str().to_string()).collect(),
            })
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// An item on the menu.
///
/// Owned by the catalog. Orders hold clones and never mutate them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MenuItem {
    /// Display name, e.g. "Cauliflower".
    pub name: String,

    /// Short description shown next to the name.
    pub description: String,

    /// Price in cents. Never negative for catalog items.
    pub price: Money,

    /// The menu section this item is listed under.
    pub category: Category,
}

impl MenuItem {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        category: Category,
    ) -> Self {
        MenuItem {
            name: name.into(),
            description: description.into(),
            price,
            category,
        }
    }
}

// =============================================================================
// Order Summary
// =============================================================================

/// Point-in-time view of an order, handed to observers and the presentation
/// layer.
///
/// Amounts are raw `Money`; currency formatting is the consumer's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub entree: Option<MenuItem>,
    pub side: Option<MenuItem>,
    pub accompaniment: Option<MenuItem>,
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

impl OrderSummary {
    /// Returns the selection held in `category`, if any.
    pub fn selection(&self, category: Category) -> Option<&MenuItem> {
        match category {
            Category::Entree => self.entree.as_ref(),
            Category::Side => self.side.as_ref(),
            Category::Accompaniment => self.accompaniment.as_ref(),
        }
    }

    /// True when no category holds a selection.
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.selection(*c).is_none())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_default_is_eight_percent() {
        let rate = TaxRate::default();
        assert_eq!(rate.bps(), 800);
        assert_eq!(rate.percentage(), 8.0);
        assert!(!rate.is_zero());
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("entree".parse::<Category>().unwrap(), Category::Entree);
        assert_eq!(" Side ".parse::<Category>().unwrap(), Category::Side);
        assert_eq!(
            "ACCOMPANIMENT".parse::<Category>().unwrap(),
            Category::Accompaniment
        );
        assert!(matches!(
            "dessert".parse::<Category>(),
            Err(ValidationError::NotAllowed { .. })
        ));
    }

    #[test]
    fn test_category_display_matches_serde() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category));
        }
    }

    #[test]
    fn test_empty_summary() {
        let summary = OrderSummary::default();
        assert!(summary.is_empty());
        assert!(summary.total.is_zero());
    }
}
