//! Product list route with add-to-cart buttons.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route. Products come from the bundled catalog; adding one
//! dispatches `CartAction::AddItem` to the same store the cart view reads.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use leptos::prelude::*;

use crate::config::CartViewConfig;
use crate::state::cart::{CartAction, CartState};
use crate::state::catalog::{Product, by_category, load_catalog};
use crate::state::store::CartStore;

fn add_button_label(in_cart: bool) -> &'static str {
    if in_cart { "Added to Cart" } else { "Add to Cart" }
}

#[component]
pub fn ProductListPage() -> impl IntoView {
    let groups = match load_catalog() {
        Ok(products) => by_category(&products),
        Err(err) => {
            leptos::logging::error!("catalog load failed: {err}");
            Vec::new()
        }
    };

    view! {
        <div class="product-grid">
            {groups
                .into_iter()
                .map(|(category, products)| {
                    view! {
                        <section class="product-category">
                            <h2 class="product-category__title">{category}</h2>
                            <div class="product-list">
                                {products
                                    .into_iter()
                                    .map(|product| view! { <ProductCard product=product/> })
                                    .collect_view()}
                            </div>
                        </section>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let store = expect_context::<RwSignal<CartState>>();
    let name = product.name.clone();
    let in_cart = Memo::new(move |_| store.with(|state| state.contains(&name)));
    let image = product
        .image
        .clone()
        .filter(|src| !src.is_empty())
        .unwrap_or_else(|| use_context::<CartViewConfig>().unwrap_or_default().placeholder_image);
    let alt = product.name.clone();

    let item = product.to_cart_item();
    let on_add = move |_| store.dispatch(CartAction::AddItem { item: item.clone() });

    view! {
        <div class="product-card">
            <img class="product-card__image" src=image alt=alt/>
            <div class="product-card__name">{product.name}</div>
            <div class="product-card__description">{product.description}</div>
            <div class="product-card__cost">{product.cost}</div>
            <button
                class="product-card__button"
                class:product-card__button--added=move || in_cart.get()
                disabled=move || in_cart.get()
                on:click=on_add
            >
                {move || add_button_label(in_cart.get())}
            </button>
        </div>
    }
}
