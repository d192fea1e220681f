//! One row of the cart: image, name, unit price, quantity controls, line
//! total, and delete.

use leptos::prelude::*;

use crate::config::CartViewConfig;
use crate::state::cart::CartItem;
use crate::util::cart_actions::CartCommand;
use crate::util::price::{image_alt, image_src, line_total_label, unit_price_label};

#[component]
pub fn CartLine(item: CartItem, on_command: Callback<CartCommand>) -> impl IntoView {
    let config = use_context::<CartViewConfig>().unwrap_or_default();

    let src = image_src(&item, &config).to_owned();
    let alt = image_alt(&item, &config).to_owned();
    let unit_price = unit_price_label(&item, &config);
    let line_total = line_total_label(&item, &config);
    let name = item.name.clone();
    let quantity = item.quantity;

    let on_decrement = {
        let item = item.clone();
        move |_| on_command.run(CartCommand::Decrement(item.clone()))
    };
    let on_increment = {
        let item = item.clone();
        move |_| on_command.run(CartCommand::Increment(item.clone()))
    };
    let on_delete = move |_| on_command.run(CartCommand::Remove(item.clone()));

    view! {
        <div class="cart-item">
            <img class="cart-item-image" src=src alt=alt/>
            <div class="cart-item-details">
                <div class="cart-item-name">{name}</div>
                <div class="cart-item-cost">{unit_price}</div>
                <div class="cart-item-quantity">
                    <button class="cart-item-button cart-item-button-dec" on:click=on_decrement>"-"</button>
                    <span class="cart-item-quantity-value">{quantity}</span>
                    <button class="cart-item-button cart-item-button-inc" on:click=on_increment>"+"</button>
                </div>
                <div class="cart-item-total">{line_total}</div>
                <button class="cart-item-delete" on:click=on_delete>"Delete"</button>
            </div>
        </div>
    }
}
