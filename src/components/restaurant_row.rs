//! Restaurant Row Component

use leptos::prelude::*;
use restaurant_sync::{Intent, Restaurant};

use crate::context::use_app_context;

/// One table row with a delete action
#[component]
pub fn RestaurantRow(restaurant: Restaurant) -> impl IntoView {
    let ctx = use_app_context();
    let id = restaurant.id.clone();

    view! {
        <tr>
            <td>{restaurant.name}</td>
            <td>{restaurant.description}</td>
            <td>{restaurant.city}</td>
            <td>
                <button
                    class="delete-button"
                    on:click=move |_| ctx.dispatch(Intent::Delete(id.clone()))
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
