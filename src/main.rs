//! Restaurant Board Frontend Entry Point

mod app;
mod components;
mod context;
mod store;

use components::AuthGate;
use leptos::prelude::*;
use restaurant_sync::BackendConfig;

/// Backend settings generated by the managed backend's tooling
const BACKEND_CONFIG: &str = include_str!("../backend-config.json");

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let config = match BackendConfig::from_json(BACKEND_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("[APP] {}", e);
            return;
        }
    };

    mount_to_body(move || view! { <AuthGate config=config /> });
}
