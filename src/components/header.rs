//! Header Component
//!
//! Logo and page title.

use leptos::prelude::*;

/// Page header
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <img src="/logo.png" alt="Restaurant Board Logo" class="app-logo" />
            <h1 class="app-title">"Restaurant Board"</h1>
        </header>
    }
}
