use super::*;

#[test]
fn defaults_match_fallback_constants() {
    let config = CartViewConfig::default();
    assert_eq!(config.placeholder_image, "/default-placeholder.png");
    assert_eq!(config.image_alt_fallback, "Product Image");
    assert_eq!(config.empty_message, "Your cart is empty!");
    assert_eq!(config.checkout_message, "Checkout functionality will be implemented soon!");
    assert_eq!(config.currency_symbol, "$");
}

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(CartViewConfig::from_json("{}").unwrap(), CartViewConfig::default());
}

#[test]
fn from_json_overrides_only_given_fields() {
    let config = CartViewConfig::from_json(r#"{"currency_symbol":"€","placeholder_image":"/img/none.png"}"#).unwrap();
    assert_eq!(config.currency_symbol, "€");
    assert_eq!(config.placeholder_image, "/img/none.png");
    assert_eq!(config.empty_message, DEFAULT_EMPTY_MESSAGE);
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = CartViewConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("invalid cart view config:"));
}
