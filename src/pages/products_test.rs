use super::*;

#[test]
fn add_button_label_reflects_cart_membership() {
    assert_eq!(add_button_label(false), "Add to Cart");
    assert_eq!(add_button_label(true), "Added to Cart");
}
