//! Restaurant Form Component
//!
//! Three required inputs bound to the draft plus a submit button.

use leptos::prelude::*;
use restaurant_sync::{DraftField, Intent};

use crate::context::use_app_context;

/// Form for adding a restaurant
#[component]
pub fn RestaurantForm() -> impl IntoView {
    let ctx = use_app_context();

    let create_restaurant = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !ctx.store.draft_is_complete() {
            return;
        }
        ctx.dispatch(Intent::Submit);
    };

    view! {
        <section class="add-restaurant-section">
            <h4 class="section-heading">"Add a Restaurant"</h4>
            <form class="restaurant-form" on:submit=create_restaurant>
                {DraftField::ALL.iter().map(|&field| view! {
                    <input
                        placeholder=field.placeholder()
                        prop:value=move || ctx.store.field(field)
                        on:input=move |ev| {
                            ctx.dispatch(Intent::EditField(field, event_target_value(&ev)));
                        }
                        class="input-field"
                        required=true
                    />
                }).collect_view()}
                <button type="submit" class="create-button">"Create Restaurant"</button>
            </form>
        </section>
    }
}
