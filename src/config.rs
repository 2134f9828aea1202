//! API endpoint configuration
//!
//! The server base URL is resolved once per page session (same origin the
//! page was served from) and threaded through the session context.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ApiConfig {
    base: StoredValue<String>,
}

impl ApiConfig {
    /// Same-origin default: `https://host` taken from the page location.
    pub fn from_location() -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        Self::with_base(origin)
    }

    pub fn with_base(base: String) -> Self {
        Self { base: StoredValue::new(base) }
    }

    /// URL for a named server operation.
    pub fn call_url(&self, op: &str) -> String {
        self.base.with_value(|base| format!("{base}/call/{op}"))
    }
}
