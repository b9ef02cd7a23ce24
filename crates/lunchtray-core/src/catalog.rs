//! # Menu Catalog
//!
//! Read-only lookup from item key to [`MenuItem`].
//!
//! ## Collaborator Boundary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   OrderState ──── lookup("pasta") ────► MenuCatalog                     │
//! │        ▲                                    │                           │
//! │        └──────── Some(&MenuItem) / None ◄───┘                           │
//! │                                                                         │
//! │   The catalog is never mutated once an order is built on top of it.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `InMemoryCatalog` is the provided implementation; `lunch_tray()` builds
//! the reference menu.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Category, MenuItem};
use crate::validation::{
    validate_description, validate_item_key, validate_item_name, validate_price,
    ValidationResult,
};

// =============================================================================
// Catalog Trait
// =============================================================================

/// A read-only menu.
///
/// Implementations only hand out items whose price lies in
/// `0..=MAX_PRICE_CENTS`; `InMemoryCatalog::insert` enforces this.
pub trait MenuCatalog {
    /// Resolves an item key. `None` means the key is not on the menu.
    fn lookup(&self, key: &str) -> Option<&MenuItem>;

    /// Every `(key, item)` pair, in menu order.
    fn entries(&self) -> Vec<(&str, &MenuItem)>;

    /// The `(key, item)` pairs listed under `category`, in menu order.
    fn items_in(&self, category: Category) -> Vec<(&str, &MenuItem)> {
        self.entries()
            .into_iter()
            .filter(|(_, item)| item.category == category)
            .collect()
    }
}

impl<C: MenuCatalog + ?Sized> MenuCatalog for &C {
    fn lookup(&self, key: &str) -> Option<&MenuItem> {
        (**self).lookup(key)
    }

    fn entries(&self) -> Vec<(&str, &MenuItem)> {
        (**self).entries()
    }
}

impl<C: MenuCatalog + ?Sized> MenuCatalog for Arc<C> {
    fn lookup(&self, key: &str) -> Option<&MenuItem> {
        (**self).lookup(key)
    }

    fn entries(&self) -> Vec<(&str, &MenuItem)> {
        (**self).entries()
    }
}

// =============================================================================
// In-Memory Catalog
// =============================================================================

/// Insertion-ordered catalog backed by a `Vec` plus a key index.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    items: Vec<(String, MenuItem)>,
    index: HashMap<String, usize>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item under `key`.
    ///
    /// ## Errors
    /// - `Required` / `TooLong` / `InvalidFormat` for a bad key or name
    /// - `MustBeNonNegative` for a negative price
    /// - `OutOfRange` for a price above `MAX_PRICE_CENTS`
    /// - `Duplicate` if `key` is already on the menu
    pub fn insert(&mut self, key: impl Into<String>, item: MenuItem) -> ValidationResult<()> {
        let key = key.into();
        validate_item_key(&key)?;
        validate_item_name(&item.name)?;
        validate_description(&item.description)?;
        validate_price(item.price)?;

        if self.index.contains_key(&key) {
            return Err(ValidationError::Duplicate {
                field: "key".to_string(),
                value: key,
            });
        }

        self.push(key, item);
        Ok(())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_item(mut self, key: impl Into<String>, item: MenuItem) -> ValidationResult<Self> {
        self.insert(key, item)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn push(&mut self, key: String, item: MenuItem) {
        self.index.insert(key.clone(), self.items.len());
        self.items.push((key, item));
    }

    /// The reference lunch tray menu: four entrees, four sides, three
    /// accompaniments.
    pub fn lunch_tray() -> Self {
        let mut catalog = InMemoryCatalog::new();
        for (key, name, description, cents, category) in LUNCH_TRAY_MENU {
            catalog.push(
                key.to_string(),
                MenuItem::new(*name, *description, Money::from_cents(*cents), *category),
            );
        }
        catalog
    }
}

impl MenuCatalog for InMemoryCatalog {
    fn lookup(&self, key: &str) -> Option<&MenuItem> {
        self.index.get(key).map(|&i| &self.items[i].1)
    }

    fn entries(&self) -> Vec<(&str, &MenuItem)> {
        self.items
            .iter()
            .map(|(key, item)| (key.as_str(), item))
            .collect()
    }
}

type MenuRow = (&'static str, &'static str, &'static str, i64, Category);

const LUNCH_TRAY_MENU: &[MenuRow] = &[
    (
        "cauliflower",
        "Cauliflower",
        "Whole cauliflower, brined, roasted, and deep fried",
        700,
        Category::Entree,
    ),
    (
        "chili",
        "Three Bean Chili",
        "Black beans, red beans, kidney beans, slow cooked, topped with onion",
        400,
        Category::Entree,
    ),
    (
        "pasta",
        "Mushroom Pasta",
        "Penne pasta, mushrooms, basil, with plum tomatoes cooked in garlic and olive oil",
        550,
        Category::Entree,
    ),
    (
        "skillet",
        "Spicy Black Bean Skillet",
        "Seasonal vegetables, black beans, house spice blend, served with avocado and quick pickled onions",
        550,
        Category::Entree,
    ),
    (
        "salad",
        "Summer Salad",
        "Heirloom tomatoes, butter lettuce, peaches, avocado, balsamic dressing",
        250,
        Category::Side,
    ),
    (
        "soup",
        "Butternut Squash Soup",
        "Roasted butternut squash, roasted peppers, chili oil",
        300,
        Category::Side,
    ),
    (
        "potatoes",
        "Spicy Potatoes",
        "Marble potatoes, roasted, and fried in house spice blend",
        200,
        Category::Side,
    ),
    (
        "rice",
        "Coconut Rice",
        "Rice, coconut milk, lime, and sugar",
        150,
        Category::Side,
    ),
    (
        "bread",
        "Lunch Roll",
        "Fresh baked roll made in house",
        50,
        Category::Accompaniment,
    ),
    (
        "berries",
        "Mixed Berries",
        "Strawberries, blueberries, raspberries, and huckleberries",
        100,
        Category::Accompaniment,
    ),
    (
        "pickles",
        "Pickled Veggies",
        "Pickled cucumbers and carrots, made in house",
        50,
        Category::Accompaniment,
    ),
];

// =============================================================================
// Unit Tests
// =============================================================================
