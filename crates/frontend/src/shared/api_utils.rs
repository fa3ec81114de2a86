//! Fetch helpers for static documents and remote assets.
//!
//! Errors are plain strings; callers log them and degrade.

use gloo_net::http::{Request, RequestBuilder, Response};
use web_sys::RequestCache;

async fn send(request: RequestBuilder) -> Result<Response, String> {
    let response = request
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(response)
}

/// GET `url` and return the body as text. Non-OK statuses are errors.
pub async fn fetch_text(url: &str) -> Result<String, String> {
    send(Request::get(url))
        .await?
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}

/// Same as [`fetch_text`] but bypasses the HTTP cache.
pub async fn fetch_text_no_store(url: &str) -> Result<String, String> {
    send(Request::get(url).cache(RequestCache::NoStore))
        .await?
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}
