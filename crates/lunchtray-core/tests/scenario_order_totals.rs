//! Walks an order through selection, replacement and reset at the default
//! 8% rate and checks every amount along the way.

use lunchtray_core::{
    Category, InMemoryCatalog, MenuItem, Money, OrderConfig, OrderError, OrderState,
};

fn menu() -> InMemoryCatalog {
    InMemoryCatalog::new()
        .with_item(
            "roast",
            MenuItem::new("Roast", "", Money::from_major_minor(7, 0), Category::Entree),
        )
        .unwrap()
        .with_item(
            "stew",
            MenuItem::new("Stew", "", Money::from_major_minor(5, 0), Category::Entree),
        )
        .unwrap()
        .with_item(
            "fries",
            MenuItem::new("Fries", "", Money::from_major_minor(3, 0), Category::Side),
        )
        .unwrap()
}

fn assert_amounts<C: lunchtray_core::MenuCatalog>(
    order: &OrderState<C>,
    subtotal: i64,
    tax: i64,
    total: i64,
) {
    assert_eq!(order.subtotal().cents(), subtotal, "subtotal");
    assert_eq!(order.tax().cents(), tax, "tax");
    assert_eq!(order.total().cents(), total, "total");
}

#[test]
fn scenario_select_replace_reset() {
    let menu = menu();
    let mut order = OrderState::new(&menu, OrderConfig::default());

    order.set_entree("roast").unwrap();
    assert_amounts(&order, 700, 56, 756);

    order.set_side("fries").unwrap();
    assert_amounts(&order, 1000, 80, 1080);

    order.set_entree("stew").unwrap();
    assert_amounts(&order, 800, 64, 864);
    assert_eq!(order.entree().unwrap().name, "Stew");
    assert_eq!(order.side().unwrap().name, "Fries");

    order.reset();
    assert_amounts(&order, 0, 0, 0);
    for category in Category::ALL {
        assert!(order.selection(category).is_none());
    }
}

#[test]
fn scenario_full_lunch_tray() {
    let menu = InMemoryCatalog::lunch_tray();
    let mut order = OrderState::new(&menu, OrderConfig::default());

    order.set_entree("pasta").unwrap(); // 5.50
    order.set_side("salad").unwrap(); // 2.50
    order.set_accompaniment("berries").unwrap(); // 1.00

    assert_amounts(&order, 900, 72, 972);
    assert_eq!(order.total().to_string(), "$9.72");

    let summary = order.snapshot();
    assert_eq!(summary.entree.as_ref().unwrap().name, "Mushroom Pasta");
    assert_eq!(summary.side.as_ref().unwrap().name, "Summer Salad");
    assert_eq!(summary.accompaniment.as_ref().unwrap().name, "Mixed Berries");
}

#[test]
fn scenario_unknown_item_mid_order() {
    let menu = InMemoryCatalog::lunch_tray();
    let mut order = OrderState::new(&menu, OrderConfig::default());
    order.set_entree("skillet").unwrap();
    order.set_accompaniment("bread").unwrap();

    let result = order.set_accompaniment("Lunch Roll");

    assert_eq!(result, Err(OrderError::UnknownItem("Lunch Roll".to_string())));
    assert_eq!(order.accompaniment().unwrap().name, "Lunch Roll");
    assert_amounts(&order, 600, 48, 648);
}

#[test]
fn scenario_summary_serializes_for_presentation() {
    let menu = InMemoryCatalog::lunch_tray();
    let mut order = OrderState::new(&menu, OrderConfig::default());
    order.set_entree("chili").unwrap();

    let json = serde_json::to_value(order.snapshot()).unwrap();

    assert_eq!(json["entree"]["name"], "Three Bean Chili");
    assert_eq!(json["entree"]["category"], "entree");
    assert!(json["side"].is_null());
    assert_eq!(json["subtotal"], 400);
    assert_eq!(json["tax"], 32);
    assert_eq!(json["total"], 432);
}
