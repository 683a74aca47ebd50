//! Restaurant Board App
//!
//! Wires the GraphQL gateway, reactive store and sync controller
//! together and lays out the page.

use leptos::prelude::*;
use restaurant_sync::{BackendConfig, Credentials, GraphQlGateway, Intent, SyncController};

use crate::components::{Footer, Header, RestaurantForm, RestaurantList};
use crate::context::AppContext;
use crate::store::StoreHandle;

#[component]
pub fn App(
    config: BackendConfig,
    credentials: Credentials,
    #[prop(into)] sign_out: Callback<()>,
) -> impl IntoView {
    let store = StoreHandle::new();
    let gateway = GraphQlGateway::new(&config, credentials);
    let ctx = AppContext::new(store, SyncController::new(gateway, store, store));

    // Provide context to all children
    provide_context(ctx);

    // Load restaurants on mount
    Effect::new(move |_| {
        log::debug!("[APP] Loading restaurants");
        ctx.dispatch(Intent::Refresh);
    });

    view! {
        <Header />
        <main class="app-content">
            <RestaurantForm />
            <RestaurantList />
        </main>
        <Footer sign_out=sign_out />
    }
}
