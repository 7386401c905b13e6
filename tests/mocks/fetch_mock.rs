use serde::Deserialize;
use wasm_bindgen::prelude::*;

// Replaces `window.fetch` with a recorder so components that talk to the
// server can be tested without one.

/// One request seen by the mock.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FetchCall {
    pub url: String,
    pub method: String,
    pub content_type: Option<String>,
    pub has_body: bool,
    pub body: String,
}

#[wasm_bindgen(inline_js = r#"
export function install_fetch_mock(status, body, reject) {
    window.__fetchCalls = [];
    window.__originalFetch = window.__originalFetch || window.fetch;
    window.fetch = async function(input, init) {
        const request = input instanceof Request ? input : new Request(input, init);
        let text = "";
        if (request.method !== "GET" && request.method !== "HEAD") {
            text = await request.clone().text();
        }
        window.__fetchCalls.push({
            url: new URL(request.url, window.location.href).pathname,
            method: request.method,
            contentType: request.headers.get("Content-Type"),
            hasBody: text.length > 0,
            body: text,
        });
        console.log("[MOCK FETCH]", request.method, request.url);
        if (reject) {
            throw new TypeError("Failed to fetch");
        }
        return new Response(body, {
            status: status,
            headers: { "Content-Type": "application/json" },
        });
    };
    return true;
}

export function fetch_calls_json() {
    return JSON.stringify(window.__fetchCalls || []);
}

export function restore_fetch() {
    if (window.__originalFetch) {
        window.fetch = window.__originalFetch;
    }
    window.__fetchCalls = [];
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = install_fetch_mock)]
    fn _install_fetch_mock(status: u16, body: &str, reject: bool) -> bool;

    #[wasm_bindgen(js_name = fetch_calls_json)]
    fn _fetch_calls_json() -> String;

    #[wasm_bindgen(js_name = restore_fetch)]
    fn _restore_fetch();
}

/// Every request answers with `status` and `body`.
pub fn respond_with(status: u16, body: &str) -> bool {
    _install_fetch_mock(status, body, false)
}

/// Every request fails the way a dropped connection does.
pub fn reject_all() -> bool {
    _install_fetch_mock(0, "", true)
}

pub fn recorded_calls() -> Vec<FetchCall> {
    serde_json::from_str(&_fetch_calls_json()).unwrap_or_default()
}

pub fn restore() {
    _restore_fetch()
}
