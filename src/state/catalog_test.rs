use super::*;

#[test]
fn bundled_catalog_parses() {
    let products = load_catalog().unwrap();
    assert!(!products.is_empty());
    assert!(products.iter().all(|p| !p.name.is_empty() && !p.cost.is_empty()));
}

#[test]
fn bundled_catalog_names_are_unique() {
    let products = load_catalog().unwrap();
    let mut names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), products.len());
}

#[test]
fn to_cart_item_carries_identity_and_single_unit() {
    let product = Product {
        id: "fern".into(),
        name: "Fern".into(),
        category: "Shade".into(),
        cost: "$9".into(),
        image: None,
        description: String::new(),
    };
    let item = product.to_cart_item();
    assert_eq!(item.name, "Fern");
    assert_eq!(item.cost, "$9");
    assert_eq!(item.quantity, 1);
    assert_eq!(item.id.as_deref(), Some("fern"));
    assert!(item.image.is_none());
}

#[test]
fn by_category_keeps_first_seen_order() {
    let products = load_catalog().unwrap();
    let groups = by_category(&products);
    let categories: Vec<&str> = groups.iter().map(|(c, _)| c.as_str()).collect();
    assert_eq!(categories, ["Air Purifying", "Aromatic", "Medicinal"]);
    assert_eq!(groups[0].1.len(), 3);
}
