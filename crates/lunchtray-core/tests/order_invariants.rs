//! Property tests: the derived amounts always agree with the selections,
//! whatever sequence of operations produced them.

use lunchtray_core::{Category, InMemoryCatalog, MenuCatalog, Money, OrderConfig, OrderState, TaxRate};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Set(Category, String),
    Reset,
}

const KEYS: &[&str] = &[
    "cauliflower", "chili", "pasta", "skillet", "salad", "soup", "potatoes", "rice", "bread",
    "berries", "pickles", "tacos", "",
];

fn category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (category(), prop::sample::select(KEYS.to_vec()))
            .prop_map(|(c, k)| Op::Set(c, k.to_string())),
        1 => Just(Op::Reset),
    ]
}

fn expected_subtotal<C: MenuCatalog>(order: &OrderState<C>) -> Money {
    Category::ALL
        .iter()
        .filter_map(|c| order.selection(*c))
        .map(|item| item.price)
        .sum()
}

proptest! {
    #[test]
    fn amounts_match_selections(ops in prop::collection::vec(op(), 0..64), bps in 0u32..=2_500) {
        let menu = InMemoryCatalog::lunch_tray();
        let rate = TaxRate::from_bps(bps);
        let mut order = OrderState::new(&menu, OrderConfig::with_tax_rate(rate));

        for op in ops {
            match op {
                Op::Set(category, key) => {
                    let before = order.snapshot();
                    match order.set_category(category, &key) {
                        Ok(()) => {
                            let selected = order.selection(category).unwrap();
                            prop_assert_eq!(Some(selected), menu.lookup(&key));
                        }
                        Err(_) => {
                            prop_assert!(menu.lookup(&key).is_none());
                            prop_assert_eq!(order.snapshot(), before);
                        }
                    }
                }
                Op::Reset => {
                    order.reset();
                    prop_assert!(order.is_empty());
                    prop_assert!(order.total().is_zero());
                }
            }

            prop_assert_eq!(order.subtotal(), expected_subtotal(&order));
            prop_assert_eq!(order.tax(), order.subtotal().calculate_tax(rate));
            prop_assert_eq!(order.total(), order.subtotal() + order.tax());

            // Half-up rounding keeps tax within half a cent of the exact product.
            let exact_tenthousandths = order.subtotal().cents() as i128 * bps as i128;
            let rounded_tenthousandths = order.tax().cents() as i128 * 10_000;
            prop_assert!((exact_tenthousandths - rounded_tenthousandths).abs() <= 5_000);
        }
    }

    #[test]
    fn replacement_leaves_no_residue(first in 0usize..4, second in 0usize..4) {
        let menu = InMemoryCatalog::lunch_tray();
        let entrees = menu.items_in(Category::Entree);
        let mut order = OrderState::new(&menu, OrderConfig::default());

        order.set_entree(entrees[first].0).unwrap();
        order.set_entree(entrees[second].0).unwrap();

        prop_assert_eq!(order.subtotal(), entrees[second].1.price);
    }

    #[test]
    fn reset_twice_equals_reset_once(keys in prop::collection::vec(prop::sample::select(KEYS.to_vec()), 0..6)) {
        let menu = InMemoryCatalog::lunch_tray();
        let mut order = OrderState::new(&menu, OrderConfig::default());
        for (key, category) in keys.iter().zip(Category::ALL.iter().cycle()) {
            let _ = order.set_category(*category, key);
        }

        order.reset();
        let once = order.snapshot();
        order.reset();

        prop_assert_eq!(order.snapshot(), once);
    }
}
