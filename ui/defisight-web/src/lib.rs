//! DefiSight WASM frontend.
//!
//! A single page: the account affordance from the identity provider and the
//! wallet registration form. Each concern lives in its own module.

pub mod api;
pub mod dom;
pub mod events;
pub mod form_view;
pub mod page;
pub mod state;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    init()
}

fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;

    page::render_shell(&els)?;

    form_view::render_options(&els)?;
    form_view::render_form(&els);

    events::bind_events(&els)?;

    gloo_console::log!(format!("api base: {}", api::base_url()));
    Ok(())
}
