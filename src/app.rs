//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav::Nav;
use crate::config::CartViewConfig;
use crate::pages::{cart::CartPage, products::ProductListPage};
use crate::state::cart::CartState;
use crate::state::store::provide_cart_store;

/// Root application component.
///
/// Provides the cart store and display config to every route.
#[component]
pub fn App(#[prop(optional)] config: CartViewConfig) -> impl IntoView {
    provide_meta_context();

    provide_cart_store(CartState::default());
    provide_context(config);

    view! {
        <Title text="Cart"/>

        <Router>
            <Nav/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=ProductListPage/>
                    <Route path=StaticSegment("cart") view=CartPage/>
                </Routes>
            </main>
        </Router>
    }
}
