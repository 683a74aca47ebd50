//! Restaurant List Component
//!
//! Table of restaurants, or a hint when there are none.

use leptos::prelude::*;
use restaurant_sync::Restaurant;

use crate::components::RestaurantRow;
use crate::context::use_app_context;

/// Restaurant table with count heading
#[component]
pub fn RestaurantList() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <section class="restaurant-list-section">
            <h4 class="section-heading">
                {move || format!("List of Restaurants ({})", store.restaurant_count())}
            </h4>
            <Show
                when=move || { store.restaurant_count() > 0 }
                fallback=|| view! { <p>"No restaurants available. Please add one!"</p> }
            >
                <table class="restaurant-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Description"</th>
                            <th>"City"</th>
                            <th>"Action"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || store.restaurants()
                            key=|restaurant| restaurant.id.clone()
                            children=move |restaurant: Restaurant| view! { <RestaurantRow restaurant=restaurant /> }
                        />
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
