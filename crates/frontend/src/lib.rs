pub mod app;
pub mod config;
pub mod shared;
pub mod stories;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::app::App;
use crate::config::CatalogConfig;

#[wasm_bindgen]
pub fn hydrate() {
    let config = CatalogConfig::from_location();
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level());
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
