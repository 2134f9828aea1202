//! Server Command Layer
//!
//! Typed bindings for the board server's operations, organized by domain.
//! Every operation funnels through [`call`]: a JSON request to
//! `{base}/call/{Operation}`, answered by a JSON body mirroring the entity
//! plus whatever contextual fields the client needs for re-insertion.

mod attachment;
mod board;
mod card;
mod label;
mod list;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::config::ApiConfig;
use crate::errors::UiError;

// Re-export all public items
pub use attachment::*;
pub use board::*;
pub use card::*;
pub use label::*;
pub use list::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// Offline is detected before a request goes out, not via a failed fetch.
pub fn is_online() -> bool {
    web_sys::window().map(|w| w.navigator().on_line()).unwrap_or(true)
}

/// Issue one server operation and return the raw JSON response.
pub(crate) async fn call<P: Serialize + ?Sized>(
    api: ApiConfig,
    op: &str,
    params: &P,
    method: Method,
) -> Result<JsValue, UiError> {
    if !is_online() {
        return Err(UiError::Offline);
    }
    let window = web_sys::window().ok_or_else(|| UiError::call(op, "no window"))?;

    let init = web_sys::RequestInit::new();
    init.set_method(method.as_str());
    let url = match method {
        Method::Get => {
            let query = query_string(params).map_err(|e| UiError::call(op, e))?;
            if query.is_empty() {
                api.call_url(op)
            } else {
                format!("{}?{}", api.call_url(op), query)
            }
        }
        Method::Post => {
            let body = serde_json::to_string(params).map_err(|e| UiError::call(op, e.to_string()))?;
            init.set_body(&JsValue::from_str(&body));
            api.call_url(op)
        }
    };

    let request = web_sys::Request::new_with_str_and_init(&url, &init)
        .map_err(|e| UiError::call(op, js_message(&e)))?;
    if method == Method::Post {
        let _ = request.headers().set("Content-Type", "application/json");
    }

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| UiError::call(op, js_message(&e)))?;
    let resp: web_sys::Response =
        resp_value.dyn_into().map_err(|_| UiError::call(op, "not a response"))?;

    if !resp.ok() {
        let status = resp.status();
        let body = match resp.text() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };
        let message =
            if body.is_empty() { format!("HTTP {status}") } else { format!("HTTP {status}: {body}") };
        return Err(UiError::Call { op: op.to_string(), message });
    }

    let json = resp.json().map_err(|e| UiError::call(op, js_message(&e)))?;
    JsFuture::from(json).await.map_err(|e| UiError::call(op, js_message(&e)))
}

/// Decode a JSON response into its typed result shape.
pub(crate) fn decode<R: DeserializeOwned>(value: JsValue) -> Result<R, UiError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| UiError::Decode(e.to_string()))
}

/// Flatten a params struct into a query string (GET operations only carry
/// scalar parameters).
fn query_string<P: Serialize + ?Sized>(params: &P) -> Result<String, String> {
    let value = serde_json::to_value(params).map_err(|e| e.to_string())?;
    let map = match value {
        serde_json::Value::Null => return Ok(String::new()),
        serde_json::Value::Object(map) => map,
        other => return Err(format!("cannot encode {other} as query")),
    };
    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        let raw = match value {
            serde_json::Value::String(s) => s,
            serde_json::Value::Null => continue,
            other => other.to_string(),
        };
        let encoded = utf8_percent_encode(&raw, NON_ALPHANUMERIC).to_string();
        pairs.push(format!("{key}={encoded}"));
    }
    Ok(pairs.join("&"))
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
