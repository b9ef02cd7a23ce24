//! # lunchtray-core: Order Logic for the Lunch Tray
//!
//! A diner fills a tray with one entree, one side and one accompaniment.
//! This crate keeps track of those selections and of the subtotal, tax and
//! total that follow from them. It does no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Presentation (apps/lunchtray-cli, or any UI)         │   │
//! │  │       picks items, formats Money as currency, shows totals      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ set_* / reset / OrderObserver         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ lunchtray-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   order   │  │  catalog  │  │   money   │  │ validation│   │   │
//! │  │   │OrderState │  │MenuCatalog│  │   Money   │  │   rules   │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`order`] - `OrderState` and the `OrderObserver` hook
//! - [`catalog`] - `MenuCatalog` trait and the in-memory lunch tray menu
//! - [`money`] - integer-cent `Money`
//! - [`types`] - `MenuItem`, `Category`, `TaxRate`, `OrderSummary`
//! - [`config`] - construction-time `OrderConfig`
//! - [`validation`] - catalog and config checks
//! - [`error`] - error types
//!
//! ## Example Usage
//!
//! ```rust
//! use lunchtray_core::{InMemoryCatalog, OrderConfig, OrderState};
//!
//! let menu = InMemoryCatalog::lunch_tray();
//! let mut order = OrderState::new(&menu, OrderConfig::default());
//!
//! order.set_entree("cauliflower").unwrap(); // $7.00
//! order.set_side("soup").unwrap();          // $3.00
//!
//! assert_eq!(order.subtotal().cents(), 1000);
//! assert_eq!(order.tax().cents(), 80);      // 8%
//! assert_eq!(order.total().cents(), 1080);
//!
//! order.reset();
//! assert!(order.total().is_zero());
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod money;
pub mod order;
pub mod types;
pub mod validation;

pub use catalog::{InMemoryCatalog, MenuCatalog};
pub use config::OrderConfig;
pub use error::{OrderError, OrderResult, ValidationError};
pub use money::Money;
pub use order::{OrderObserver, OrderState};
pub use types::*;

/// Default tax rate in basis points (8%).
pub const DEFAULT_TAX_RATE_BPS: u32 = 800;
