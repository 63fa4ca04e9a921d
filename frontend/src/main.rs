//! Entry point for the WASM application

use leptos::*;
use pulling_frontend::App;

pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Pulling Program Generator - Starting Leptos App");
    log::info!("Backend: {}", pulling_frontend::api_base_url());

    mount_to_body(|| view! { <App/> })
}
