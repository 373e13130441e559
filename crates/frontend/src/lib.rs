pub mod app;
pub mod categories;
pub mod menu;
pub mod packages;
pub mod shared;
pub mod subtabs;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn enhance() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    app::boot();
}

#[wasm_bindgen(start)]
pub fn start() {
    enhance();
}
