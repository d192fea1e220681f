//! Price parsing and cart total math.
//!
//! Costs arrive as display strings such as `"$19.99"`. The numeric value of a
//! cost is its *stripped digits*: every non-digit character is removed and
//! what remains is read as a plain number, so `"$19.99"` is worth 1999, not
//! 19.99. Totals built from these values keep that unit.
//!
//! TRADE-OFFS
//! ==========
//! The cart total is shown with two decimals while each line total is shown
//! as a bare number (`3998`, not `3998.00`). Both behaviors are kept as-is so
//! displayed amounts match what existing carts have always shown.

#[cfg(test)]
#[path = "price_test.rs"]
mod price_test;

use crate::config::CartViewConfig;
use crate::state::cart::CartItem;

/// Keep only the ASCII digits of `cost`.
pub fn stripped_digits(cost: &str) -> String {
    cost.chars().filter(char::is_ascii_digit).collect()
}

/// Numeric value of a cost string. Costs without any digits are worth 0.
pub fn parse_price(cost: &str) -> f64 {
    stripped_digits(cost).parse::<f64>().unwrap_or(0.0)
}

/// Unit value times quantity.
pub fn line_total(item: &CartItem) -> f64 {
    parse_price(&item.cost) * f64::from(item.quantity)
}

/// Sum of all line totals.
pub fn cart_total(items: &[CartItem]) -> f64 {
    items.iter().map(line_total).sum()
}

/// Cart total with exactly two decimals.
pub fn format_total(items: &[CartItem]) -> String {
    fixed_two(cart_total(items))
}

/// Line total as a bare number, with no fixed decimals.
pub fn format_line_total(item: &CartItem) -> String {
    plain_number(line_total(item))
}

/// Browsers stop padding decimals at 1e21 and print the plain number form.
fn fixed_two(value: f64) -> String {
    if value.is_finite() && value.abs() < 1e21 { format!("{value:.2}") } else { plain_number(value) }
}

/// Browser number formatting for the values a cart can produce: integers,
/// exponent notation from 1e21, and `Infinity`.
fn plain_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if value.abs() >= 1e21 {
        let exp = format!("{value:e}");
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        };
    }
    format!("{value}")
}

pub fn total_label(items: &[CartItem], config: &CartViewConfig) -> String {
    format!("Total Cart Amount: {}{}", config.currency_symbol, format_total(items))
}

pub fn unit_price_label(item: &CartItem, config: &CartViewConfig) -> String {
    format!("{}{}", config.currency_symbol, stripped_digits(&item.cost))
}

pub fn line_total_label(item: &CartItem, config: &CartViewConfig) -> String {
    format!("Total: {}{}", config.currency_symbol, format_line_total(item))
}

/// Image URL for a row, falling back to the configured placeholder when the
/// item has no image or an empty one.
pub fn image_src<'a>(item: &'a CartItem, config: &'a CartViewConfig) -> &'a str {
    item.image
        .as_deref()
        .filter(|src| !src.is_empty())
        .unwrap_or(config.placeholder_image.as_str())
}

pub fn image_alt<'a>(item: &'a CartItem, config: &'a CartViewConfig) -> &'a str {
    if item.name.is_empty() { &config.image_alt_fallback } else { &item.name }
}

/// Stable row key: the item id when present, otherwise its name.
pub fn item_key(item: &CartItem) -> String {
    item.id
        .as_deref()
        .filter(|id| !id.is_empty())
        .unwrap_or(item.name.as_str())
        .to_owned()
}
