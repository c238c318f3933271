//! Event binding.
//!
//! Wires the wallet form controls. Async handlers are spawned via
//! `wasm_bindgen_futures::spawn_local`.

use crate::dom::Elements;
use crate::form_view;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement};

/// Helper: attach async click handler to an HtmlElement.
macro_rules! on_click_async {
    ($el:expr, $els:expr, $handler:expr) => {{
        let els = $els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            let els2 = els.clone();
            wasm_bindgen_futures::spawn_local(async move {
                $handler(&els2).await;
            });
        }) as Box<dyn FnMut(_)>);
        $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }};
}

/// Forward `event` on a named control into the form as (name, value).
fn on_field_event(els: &Elements, el: &HtmlElement, event: &str) -> Result<(), JsValue> {
    let els2 = els.clone();
    let cb = Closure::wrap(Box::new(move |ev: web_sys::Event| {
        let Some(target) = ev.target() else {
            return;
        };
        let (name, value) = if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
            (input.name(), input.value())
        } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
            (select.name(), select.value())
        } else {
            return;
        };
        form_view::on_field_change(&els2, &name, &value);
    }) as Box<dyn FnMut(_)>);
    el.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Bind all UI event listeners. Call once after init.
pub fn bind_events(els: &Elements) -> Result<(), JsValue> {
    on_field_event(els, &els.address_input, "input")?;
    on_field_event(els, &els.chain_select, "change")?;
    on_field_event(els, &els.tag_input, "input")?;
    on_field_event(els, &els.highlight_select, "change")?;

    on_click_async!(els.submit_btn, els, form_view::on_submit);

    Ok(())
}
