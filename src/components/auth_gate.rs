//! Auth Gate Component
//!
//! Mounts the board only while credentials are available and supplies
//! the sign-out callback. "Sign In" sends the browser to the user pool's
//! hosted UI; its redirect comes back with `#id_token=..`, which is moved
//! into session storage on load.

use leptos::prelude::*;
use restaurant_sync::{id_token_from_fragment, BackendConfig, Credentials};

use crate::app::App;

/// Session storage key holding the signed-in user's id-token
const SESSION_TOKEN_KEY: &str = "restaurant-board:id-token";

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

/// Store the id-token from a hosted-UI redirect and strip it from the URL
fn capture_redirect_token() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let Some(token) = location.hash().ok().and_then(|hash| id_token_from_fragment(&hash)) else {
        return;
    };
    if let Some(storage) = session_storage() {
        let _ = storage.set_item(SESSION_TOKEN_KEY, &token);
    }
    let _ = location.set_hash("");
    log::info!("[AUTH] Signed in via hosted UI");
}

fn resolve_credentials(config: &BackendConfig) -> Option<Credentials> {
    config.static_credentials().or_else(|| {
        session_storage()?
            .get_item(SESSION_TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
            .map(Credentials::SessionToken)
    })
}

/// Authentication boundary around the board
#[component]
pub fn AuthGate(config: BackendConfig) -> impl IntoView {
    capture_redirect_token();
    let (credentials, set_credentials) = signal(resolve_credentials(&config));

    let sign_out = Callback::new(move |_: ()| {
        if let Some(storage) = session_storage() {
            let _ = storage.remove_item(SESSION_TOKEN_KEY);
        }
        log::info!("[AUTH] Signed out");
        set_credentials.set(None);
    });

    let retry_config = config.clone();
    let sign_in = move |_: web_sys::MouseEvent| match retry_config.hosted_sign_in_url() {
        Some(url) => {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&url);
            }
        }
        None => set_credentials.set(resolve_credentials(&retry_config)),
    };

    view! {
        {move || match credentials.get() {
            Some(credentials) => view! {
                <App config=config.clone() credentials=credentials sign_out=sign_out />
            }.into_any(),
            None => view! {
                <section class="signed-out">
                    <p>"You are signed out."</p>
                    <button class="signin-button" on:click=sign_in.clone()>"Sign In"</button>
                </section>
            }.into_any(),
        }}
    }
}
