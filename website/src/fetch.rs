//! Inquiry transport over `window.fetch`
//!
//! The request goes out in `no-cors` mode with a `text/plain` body so the
//! browser skips the preflight. The response is opaque: a resolved fetch is
//! all we learn.

use gather_app::{LocalInquiryTransport, TransportOutcome};
use gather_core::{Error, InquiryPayload, Result};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode};

#[derive(Debug, Default, Clone, Copy)]
pub struct FetchTransport;

impl LocalInquiryTransport for FetchTransport {
    async fn send(&self, endpoint: &str, payload: &InquiryPayload) -> TransportOutcome {
        match post(endpoint, payload).await {
            Ok(()) => TransportOutcome::Delivered,
            Err(e) => TransportOutcome::failed(e.to_string()),
        }
    }
}

async fn post(endpoint: &str, payload: &InquiryPayload) -> Result<()> {
    let body = payload.to_json()?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_mode(RequestMode::NoCors);
    init.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(endpoint, &init).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "text/plain")
        .map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| Error::transport("no window"))?;
    JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    Ok(())
}

fn js_error(error: JsValue) -> Error {
    Error::transport(describe(&error))
}

fn describe(error: &JsValue) -> String {
    error
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(error, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{error:?}"))
}
