//! Wallet form rendering and handlers.

use crate::api::FetchWalletApi;
use crate::dom::{self, Elements};
use crate::state;
use ds_wallet_form::{FieldUpdate, Highlight, SUPPORTED_CHAINS, SubmitOutcome, submit_form};
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;

const STATUS_CLEAR_MS: u32 = 4_000;

/// Fill the chain and highlight selects. Call once at start.
pub fn render_options(els: &Elements) -> Result<(), JsValue> {
    let (chain_id, highlight) =
        state::with_form(|f| (f.info().chain_id, f.info().highlight.clone()));

    dom::clear_children(&els.chain_select);
    for chain in SUPPORTED_CHAINS {
        let opt = dom::create_option(&chain.id.to_string(), chain.name, chain.id == chain_id)?;
        els.chain_select.append_child(&opt)?;
    }

    dom::clear_children(&els.highlight_select);
    for h in Highlight::ALL {
        let opt = dom::create_option(h.as_str(), h.label(), h.as_str() == highlight)?;
        els.highlight_select.append_child(&opt)?;
    }

    Ok(())
}

/// Push form state into the controls and error labels.
pub fn render_form(els: &Elements) {
    let (info, errors) = state::with_form(|f| (f.info().clone(), f.errors().clone()));

    dom::set_input_value(&els.address_input, &info.address);
    dom::set_select_value(&els.chain_select, &info.chain_id.to_string());
    dom::set_input_value(&els.tag_input, &info.tag);
    dom::set_select_value(&els.highlight_select, &info.highlight);

    render_error(&els.address_error, &errors.address);
    render_error(&els.tag_error, &errors.tag);
}

fn render_error(el: &web_sys::Element, message: &str) {
    dom::set_text(el, message);
    dom::toggle_class(el, "hidden", message.is_empty());
}

/// `input` / `change` handler shared by all four controls.
pub fn on_field_change(els: &Elements, name: &str, value: &str) {
    match FieldUpdate::from_raw(name, value) {
        Ok(update) => state::with_form_mut(|f| f.apply(update)),
        Err(err) => gloo_console::warn!(format!("ignored form edit: {err}")),
    }
    render_form(els);
}

/// Submit button handler.
pub async fn on_submit(els: &Elements) {
    let attempt = state::with_form_mut(|f| f.submit());
    render_form(els);

    match &attempt {
        Ok(_) => set_status(els, "Submitting…", false),
        Err(err) => gloo_console::debug!(err.to_string()),
    }

    match submit_form(attempt, &FetchWalletApi).await {
        SubmitOutcome::Invalid => {}
        SubmitOutcome::Sent(Ok(resp)) => {
            gloo_console::log!(format!(
                "wallet {} registered on {} ({})",
                resp.wallet_address, resp.chain_name, resp.registration_id
            ));
            set_status(els, &format!("Wallet added on {}", resp.chain_name), false);
        }
        SubmitOutcome::Sent(Err(err)) => {
            gloo_console::error!(format!("add wallet failed: {err}"));
            set_status(els, &err.to_string(), true);
        }
    }
}

fn set_status(els: &Elements, text: &str, is_error: bool) {
    dom::set_text(&els.submit_status, text);
    dom::toggle_class(&els.submit_status, "error", is_error);

    let status = els.submit_status.clone();
    let shown = text.to_string();
    Timeout::new(STATUS_CLEAR_MS, move || {
        if status.text_content().as_deref() == Some(shown.as_str()) {
            status.set_text_content(None);
        }
    })
    .forget();
}
