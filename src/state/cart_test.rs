use super::*;

fn cart() -> CartState {
    CartState::from_items([
        CartItem::new("A", "$10.00").with_quantity(2),
        CartItem::new("B", "$5.50"),
    ])
}

// =============================================================
// CartItem
// =============================================================

#[test]
fn cart_item_deserializes_with_optional_fields_missing() {
    let item: CartItem = serde_json::from_str(r#"{"name":"Fern","cost":"$12"}"#).unwrap();
    assert_eq!(item.name, "Fern");
    assert_eq!(item.quantity, 1);
    assert!(item.image.is_none());
    assert!(item.id.is_none());
}

#[test]
fn cart_item_builders_set_fields() {
    let item = CartItem::new("Fern", "$12").with_quantity(3).with_image("/fern.png").with_id("p-1");
    assert_eq!(item.quantity, 3);
    assert_eq!(item.image.as_deref(), Some("/fern.png"));
    assert_eq!(item.id.as_deref(), Some("p-1"));
}

// =============================================================
// CartAction
// =============================================================

#[test]
fn cart_action_serializes_with_type_tag() {
    let action = CartAction::UpdateQuantity { name: "A".into(), quantity: 3 };
    let json = serde_json::to_value(&action).unwrap();
    assert_eq!(json, serde_json::json!({ "type": "updateQuantity", "name": "A", "quantity": 3 }));

    let action = CartAction::RemoveItem { name: "A".into() };
    let json = serde_json::to_value(&action).unwrap();
    assert_eq!(json, serde_json::json!({ "type": "removeItem", "name": "A" }));
}

#[test]
fn cart_action_display_uses_slice_names() {
    let action = CartAction::RemoveItem { name: "A".into() };
    assert_eq!(action.to_string(), "cart/removeItem name=A");
    assert_eq!(action.target(), "A");
}

// =============================================================
// apply
// =============================================================

#[test]
fn from_items_drops_zero_quantity_lines() {
    let state = CartState::from_items([CartItem::new("A", "$1").with_quantity(0), CartItem::new("B", "$1")]);
    assert!(!state.contains("A"));
    assert!(state.contains("B"));
}

#[test]
fn update_quantity_sets_new_value() {
    let mut state = cart();
    state.apply(CartAction::UpdateQuantity { name: "A".into(), quantity: 5 }).unwrap();
    assert_eq!(state.find("A").map(|i| i.quantity), Some(5));
    assert_eq!(state.find("B").map(|i| i.quantity), Some(1));
}

#[test]
fn update_quantity_rejects_zero() {
    let mut state = cart();
    let before = state.clone();
    let err = state.apply(CartAction::UpdateQuantity { name: "A".into(), quantity: 0 }).unwrap_err();
    assert_eq!(err, CartError::InvalidQuantity { name: "A".into(), quantity: 0 });
    assert_eq!(state, before);
}

#[test]
fn update_quantity_unknown_item_is_not_found() {
    let mut state = cart();
    let err = state.apply(CartAction::UpdateQuantity { name: "Z".into(), quantity: 2 }).unwrap_err();
    assert_eq!(err, CartError::ItemNotFound("Z".into()));
}

#[test]
fn remove_item_drops_line_and_keeps_order() {
    let mut state = CartState::from_items([
        CartItem::new("A", "$1"),
        CartItem::new("B", "$1"),
        CartItem::new("C", "$1"),
    ]);
    state.apply(CartAction::RemoveItem { name: "B".into() }).unwrap();
    let names: Vec<&str> = state.items().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["A", "C"]);
}

#[test]
fn remove_item_unknown_item_is_not_found() {
    let mut state = cart();
    assert!(matches!(
        state.apply(CartAction::RemoveItem { name: "Z".into() }),
        Err(CartError::ItemNotFound(_))
    ));
}

#[test]
fn add_item_appends_with_quantity_one() {
    let mut state = CartState::default();
    state.apply(CartAction::AddItem { item: CartItem::new("A", "$1").with_quantity(9) }).unwrap();
    assert_eq!(state.find("A").map(|i| i.quantity), Some(1));
}

#[test]
fn add_item_existing_bumps_quantity() {
    let mut state = cart();
    state.apply(CartAction::AddItem { item: CartItem::new("A", "$10.00") }).unwrap();
    assert_eq!(state.find("A").map(|i| i.quantity), Some(3));
    assert_eq!(state.items().len(), 2);
}

#[test]
fn apply_leaves_previous_snapshot_untouched() {
    let mut state = cart();
    let snapshot = Arc::clone(state.items());
    state.apply(CartAction::UpdateQuantity { name: "A".into(), quantity: 7 }).unwrap();
    assert_eq!(snapshot[0].quantity, 2);
    assert_eq!(state.items()[0].quantity, 7);
    assert!(!Arc::ptr_eq(&snapshot, state.items()));
}

#[test]
fn item_count_sums_quantities() {
    assert_eq!(cart().item_count(), 3);
    assert_eq!(CartState::default().item_count(), 0);
}
