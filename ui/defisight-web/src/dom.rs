//! DOM element bindings.
//!
//! All fields are resolved once at startup. To add new UI elements, add a
//! field here and bind it in `Elements::bind()`.

use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, HtmlOptionElement, HtmlSelectElement,
};

// ── Helpers ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

/// Read `<meta name="..." content="...">`, ignoring blank values.
pub fn meta_content(name: &str) -> Option<String> {
    let el = document()
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()??;
    let content = el.get_attribute("content")?.trim().to_string();
    (!content.is_empty()).then_some(content)
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn clear_children(el: &Element) {
    el.set_inner_html("");
}

/// Only writes when the value differs, so typing does not move the caret.
pub fn set_input_value(el: &HtmlInputElement, val: &str) {
    if el.value() != val {
        el.set_value(val);
    }
}

pub fn set_select_value(el: &HtmlSelectElement, val: &str) {
    if el.value() != val {
        el.set_value(val);
    }
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document().create_element(tag)
}

pub fn create_option(
    value: &str,
    text: &str,
    selected: bool,
) -> Result<HtmlOptionElement, JsValue> {
    let opt: HtmlOptionElement = create_element("option")?.dyn_into()?;
    opt.set_value(value);
    opt.set_text_content(Some(text));
    opt.set_selected(selected);
    Ok(opt)
}

// ── Elements struct ──

/// All DOM element references used by the page.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    // Shell
    pub title: Element,
    pub account_slot: Element,
    pub wallet_form: Element,

    // Wallet form
    pub address_input: HtmlInputElement,
    pub address_error: Element,
    pub chain_select: HtmlSelectElement,
    pub tag_input: HtmlInputElement,
    pub tag_error: Element,
    pub highlight_select: HtmlSelectElement,
    pub submit_btn: HtmlElement,
    pub submit_status: Element,
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_typed {
    ($ty:ty, $id:expr) => {
        by_id_typed::<$ty>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing {} #{}", stringify!($ty), $id)))?
    };
}

impl Elements {
    /// Resolve all DOM references. Call once at start.
    pub fn bind() -> Result<Elements, JsValue> {
        Ok(Elements {
            title: get_el!("pageTitle"),
            account_slot: get_el!("accountSlot"),
            wallet_form: get_el!("walletForm"),

            address_input: get_typed!(HtmlInputElement, "walletAddress"),
            address_error: get_el!("walletAddressError"),
            chain_select: get_typed!(HtmlSelectElement, "walletChain"),
            tag_input: get_typed!(HtmlInputElement, "walletTag"),
            tag_error: get_el!("walletTagError"),
            highlight_select: get_typed!(HtmlSelectElement, "walletHighlight"),
            submit_btn: get_typed!(HtmlElement, "walletSubmitBtn"),
            submit_status: get_el!("walletSubmitStatus"),
        })
    }
}
