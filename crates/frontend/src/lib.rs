pub mod app;
pub mod enhancers;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    // Toasts pushed by page scripts before the DOM is ready need the styles too
    if let Some(document) = shared::dom::document() {
        shared::styles::inject(&document);
    }

    app::run_when_ready();
}
