//! # Order State
//!
//! The running lunch tray order: one optional selection per category and
//! the subtotal, tax and total derived from them.
//!
//! ## Mutation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  set_side("soup")                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  catalog.lookup("soup") ── None ──► Err(UnknownItem), state untouched   │
//! │       │ Some(item)                                                      │
//! │       ▼                                                                 │
//! │  side = Some(item)                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  recalculate()                                                          │
//! │    subtotal = Σ price of current selections                             │
//! │    tax      = subtotal × tax_rate  (half-up to the cent)                │
//! │    total    = subtotal + tax                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  notify observers with the new OrderSummary                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! After every call returns:
//! - `subtotal == Σ price(selection)` over the non-empty categories
//! - `tax == subtotal.calculate_tax(tax_rate)`
//! - `total == subtotal + tax`
//!
//! The subtotal is summed from the selections on each write instead of
//! adjusted by the replaced item's price, so repeated replacement cannot
//! drift.
//!
//! ## Concurrency
//! An `OrderState` assumes a single writer. Callers that share one across
//! threads wrap it in a `Mutex`.

use std::fmt;

use tracing::{debug, warn};

use crate::catalog::MenuCatalog;
use crate::config::OrderConfig;
use crate::error::{OrderError, OrderResult};
use crate::money::Money;
use crate::types::{Category, MenuItem, OrderSummary, TaxRate};

// =============================================================================
// Observer
// =============================================================================

/// Receives the order's new state after every successful mutation.
///
/// Called synchronously, before the mutating method returns.
pub trait OrderObserver {
    fn on_change(&mut self, summary: &OrderSummary);
}

impl<F> OrderObserver for F
where
    F: FnMut(&OrderSummary),
{
    fn on_change(&mut self, summary: &OrderSummary) {
        self(summary)
    }
}

// =============================================================================
// Order State
// =============================================================================

/// Current selections and totals for one order.
pub struct OrderState<C: MenuCatalog> {
    catalog: C,
    tax_rate: TaxRate,

    entree: Option<MenuItem>,
    side: Option<MenuItem>,
    accompaniment: Option<MenuItem>,

    subtotal: Money,
    tax: Money,
    total: Money,

    observers: Vec<Box<dyn OrderObserver>>,
}

impl<C: MenuCatalog> OrderState<C> {
    /// Creates an empty order: nothing selected, every amount zero.
    pub fn new(catalog: C, config: OrderConfig) -> Self {
        OrderState {
            catalog,
            tax_rate: config.tax_rate,
            entree: None,
            side: None,
            accompaniment: None,
            subtotal: Money::zero(),
            tax: Money::zero(),
            total: Money::zero(),
            observers: Vec::new(),
        }
    }

    /// Registers an observer. It first hears about the next mutation.
    pub fn subscribe(&mut self, observer: impl OrderObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Selects the item stored under `key` for `category`, replacing any
    /// previous selection in that category.
    ///
    /// ## Errors
    /// `OrderError::UnknownItem` if `key` is not in the catalog. Nothing is
    /// changed and observers are not called.
    ///
    /// ```rust
    /// use lunchtray_core::{Category, InMemoryCatalog, OrderConfig, OrderState};
    ///
    /// let menu = InMemoryCatalog::lunch_tray();
    /// let mut order = OrderState::new(&menu, OrderConfig::default());
    ///
    /// order.set_category(Category::Entree, "cauliflower").unwrap();
    /// assert_eq!(order.total().to_string(), "$7.56");
    ///
    /// assert!(order.set_category(Category::Side, "tacos").is_err());
    /// assert_eq!(order.total().to_string(), "$7.56");
    /// ```
    pub fn set_category(&mut self, category: Category, key: &str) -> OrderResult<()> {
        let item = match self.catalog.lookup(key) {
            Some(item) => item.clone(),
            None => {
                warn!(%category, key, "rejected unknown menu item");
                return Err(OrderError::UnknownItem(key.to_string()));
            }
        };

        let replaced = self.slot_mut(category).replace(item);
        self.recalculate();

        debug!(
            %category,
            key,
            replaced = replaced.as_ref().map(|i| i.name.as_str()),
            subtotal_cents = self.subtotal.cents(),
            total_cents = self.total.cents(),
            "selection changed"
        );

        self.notify();
        Ok(())
    }

    pub fn set_entree(&mut self, key: &str) -> OrderResult<()> {
        self.set_category(Category::Entree, key)
    }

    pub fn set_side(&mut self, key: &str) -> OrderResult<()> {
        self.set_category(Category::Side, key)
    }

    pub fn set_accompaniment(&mut self, key: &str) -> OrderResult<()> {
        self.set_category(Category::Accompaniment, key)
    }

    /// Clears every selection and zeroes the totals. Idempotent.
    pub fn reset(&mut self) {
        self.entree = None;
        self.side = None;
        self.accompaniment = None;
        self.subtotal = Money::zero();
        self.tax = Money::zero();
        self.total = Money::zero();

        debug!("order reset");
        self.notify();
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    pub fn tax(&self) -> Money {
        self.tax
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    pub fn entree(&self) -> Option<&MenuItem> {
        self.entree.as_ref()
    }

    pub fn side(&self) -> Option<&MenuItem> {
        self.side.as_ref()
    }

    pub fn accompaniment(&self) -> Option<&MenuItem> {
        self.accompaniment.as_ref()
    }

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

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Owned copy of the current selections and totals.
    pub fn snapshot(&self) -> OrderSummary {
        OrderSummary {
            entree: self.entree.clone(),
            side: self.side.clone(),
            accompaniment: self.accompaniment.clone(),
            subtotal: self.subtotal,
            tax: self.tax,
            total: self.total,
        }
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn slot_mut(&mut self, category: Category) -> &mut Option<MenuItem> {
        match category {
            Category::Entree => &mut self.entree,
            Category::Side => &mut self.side,
            Category::Accompaniment => &mut self.accompaniment,
        }
    }

    fn recalculate(&mut self) {
        self.subtotal = Category::ALL
            .iter()
            .filter_map(|c| self.selection(*c))
            .map(|item| item.price)
            .sum();
        self.tax = self.subtotal.calculate_tax(self.tax_rate);
        self.total = self.subtotal + self.tax;
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let summary = self.snapshot();
        for observer in &mut self.observers {
            observer.on_change(&summary);
        }
    }
}

impl<C: MenuCatalog> fmt::Debug for OrderState<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderState")
            .field("tax_rate", &self.tax_rate)
            .field("entree", &self.entree)
            .field("side", &self.side)
            .field("accompaniment", &self.accompaniment)
            .field("subtotal", &self.subtotal)
            .field("tax", &self.tax)
            .field("total", &self.total)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
