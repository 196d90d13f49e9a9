//! End-to-end use of the public inventory API, the way a front end drives it.

use stockroom_inventory::{
    DomainError, END_SENTINEL, Inventory, InventoryConfig, ListingStyle, Price,
};

fn price(s: &str) -> Price {
    s.parse().expect("valid price")
}

#[test]
fn stock_room_session() {
    stockroom_observability::init_for_tests();

    let mut inv = Inventory::with_config(InventoryConfig {
        currency_symbol: "$".to_string(),
        listing_style: ListingStyle::Framed,
    });

    inv.add("Coffee Beans", price("12.90"), 20);
    inv.add("Filter Paper", price("3.10"), 100);
    inv.add_one("coffee beans", price("99.99"));

    inv.remove("FILTER PAPER", 40).unwrap();
    inv.update_price("Filter Paper", price("3.25")).unwrap();
    inv.rename_item("Coffee Beans", "Espresso Beans").unwrap();

    assert!(inv.get_item("coffee beans").is_none());
    let beans = inv.get_item("espresso beans").unwrap();
    assert_eq!(beans.quantity(), 21);
    assert_eq!(beans.unit_price(), price("12.90"));

    let lines: Vec<String> = inv.list().collect();
    assert_eq!(
        lines,
        vec![
            "• Filter Paper - $3.25 (qty: 60)".to_string(),
            "• Espresso Beans - $12.90 (qty: 21)".to_string(),
            END_SENTINEL.to_string(),
        ]
    );

    assert_eq!(inv.total_value(), price("465.90"));
}

#[test]
fn rejected_operations_leave_inventory_untouched() {
    stockroom_observability::init_for_tests();

    let mut inv = Inventory::new();
    inv.add("Tea", price("4.00"), 5);
    inv.add("Sugar", price("2.00"), 1);
    let before: Vec<String> = inv.list().collect();

    assert!(matches!(inv.remove("tea", 6), Err(DomainError::InsufficientStock { .. })));
    assert!(matches!(inv.remove("milk", 1), Err(DomainError::NotFound(_))));
    assert!(matches!(inv.update_price("milk", price("1.00")), Err(DomainError::NotFound(_))));
    assert!(matches!(inv.rename_item("Tea", "SUGAR"), Err(DomainError::NameConflict(_))));
    assert!(matches!(inv.rename_item("milk", "Cream"), Err(DomainError::NotFound(_))));

    let after: Vec<String> = inv.list().collect();
    assert_eq!(before, after);
}

#[test]
fn negative_prices_never_reach_the_inventory() {
    let mut inv = Inventory::new();
    inv.add("Tea", price("4.00"), 5);

    let err = "-1.00".parse::<Price>().unwrap_err();
    assert_eq!(err, DomainError::validation("price cannot be negative"));
    assert!(Price::from_decimal(-3.5).is_err());

    assert_eq!(inv.get_item("tea").unwrap().unit_price(), price("4.00"));
}
