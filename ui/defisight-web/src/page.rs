//! Page shell: title, account affordance and the always-mounted wallet form.

use crate::dom::{self, Elements};
use crate::state;
use ds_auth_adapter::{AccountAffordance, DEFAULT_SIGN_IN_URL, shell_plan};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

fn sign_in_url() -> String {
    dom::meta_content("ds-sign-in-url").unwrap_or_else(|| DEFAULT_SIGN_IN_URL.to_string())
}

pub fn render_shell(els: &Elements) -> Result<(), JsValue> {
    let user = state::session_user();
    let plan = shell_plan(user.as_ref(), &sign_in_url());

    dom::set_text(&els.title, plan.title);
    dom::document().set_title(plan.title);
    dom::toggle_class(&els.wallet_form, "hidden", !plan.mount_wallet_form);

    dom::clear_children(&els.account_slot);
    match plan.account {
        AccountAffordance::SignIn { url } => {
            let link = dom::create_element("a")?;
            link.set_class_name("sign-in-btn");
            link.set_attribute("href", &url)?;
            dom::set_text(&link, "Sign in");
            els.account_slot.append_child(&link)?;
        }
        AccountAffordance::Account {
            label,
            image_url,
            theme,
        } => {
            let chip = dom::create_element("div")?;
            chip.set_class_name(&format!("user-btn {}", theme.css_class()));

            if let Some(src) = image_url {
                let img: web_sys::HtmlImageElement = dom::create_element("img")?.dyn_into()?;
                img.set_src(&src);
                img.set_alt(&label);
                chip.append_child(&img)?;
            }

            let name = dom::create_element("span")?;
            dom::set_text(&name, &label);
            chip.append_child(&name)?;

            let sign_out = dom::create_element("button")?;
            dom::set_text(&sign_out, "Sign out");
            let els2 = els.clone();
            let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
                state::clear_session();
                if let Err(e) = render_shell(&els2) {
                    gloo_console::error!(e);
                }
            }) as Box<dyn FnMut(_)>);
            sign_out.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
            cb.forget();
            chip.append_child(&sign_out)?;

            els.account_slot.append_child(&chip)?;
        }
    }

    Ok(())
}
