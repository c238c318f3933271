//! HTTP API client.
//!
//! Wraps `fetch` for JSON requests to the wallet-service backend.
//! `base_url()` honours `<meta name="ds-api-base">`, else the page origin.

use crate::dom;
use async_trait::async_trait;
use ds_api_types::{ADD_WALLET_PATH, AddWalletRequest, AddWalletResponse, ErrorResponse};
use ds_wallet_form::{ApiError, WalletApi};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

pub fn base_url() -> String {
    if let Some(base) = dom::meta_content("ds-api-base") {
        return base.trim_end_matches('/').to_string();
    }
    dom::window().location().origin().unwrap_or_default()
}

struct Fetched {
    status: u16,
    ok: bool,
    text: String,
}

async fn request(path: &str, method: &str, body: Option<String>) -> Result<Fetched, String> {
    let url = format!("{}{}", base_url(), path);

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);

    let headers = Headers::new().map_err(|e| format!("{:?}", e))?;
    if let Some(ref b) = body {
        headers
            .set("Content-Type", "application/json")
            .map_err(|e| format!("{:?}", e))?;
        opts.set_body(&JsValue::from_str(b));
    }
    opts.set_headers(&headers);

    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{:?}", e))?;

    let resp_value = JsFuture::from(dom::window().fetch_with_request(&request))
        .await
        .map_err(|e| format!("fetch error: {:?}", e))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "response is not a Response".to_string())?;

    let text = JsFuture::from(resp.text().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("text error: {:?}", e))?;

    Ok(Fetched {
        status: resp.status(),
        ok: resp.ok(),
        text: text.as_string().unwrap_or_default(),
    })
}

/// `WalletApi` backed by the browser `fetch`.
pub struct FetchWalletApi;

#[async_trait(?Send)]
impl WalletApi for FetchWalletApi {
    async fn add_wallet(&self, req: &AddWalletRequest) -> Result<AddWalletResponse, ApiError> {
        let body = serde_json::to_string(req).map_err(|e| ApiError::Encode(e.to_string()))?;
        let fetched = request(ADD_WALLET_PATH, "POST", Some(body))
            .await
            .map_err(ApiError::Transport)?;

        if !fetched.ok {
            let message = serde_json::from_str::<ErrorResponse>(&fetched.text)
                .map(|e| e.error)
                .unwrap_or(fetched.text);
            return Err(ApiError::Rejected {
                status: fetched.status,
                message,
            });
        }

        serde_json::from_str(&fetched.text)
            .map_err(|e| ApiError::Decode(format!("{} (raw: {})", e, fetched.text)))
    }
}
