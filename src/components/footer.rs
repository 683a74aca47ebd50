//! Footer Component

use leptos::prelude::*;

/// Footer with the sign-out action
#[component]
pub fn Footer(#[prop(into)] sign_out: Callback<()>) -> impl IntoView {
    view! {
        <footer class="app-footer">
            <button class="signout-button" on:click=move |_| sign_out.run(())>
                "Sign Out"
            </button>
        </footer>
    }
}
