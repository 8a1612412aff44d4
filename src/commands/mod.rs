//! Backend Command Wrappers
//!
//! Frontend bindings to the REST API, organized by dashboard section.

mod access;
mod finance;
mod pipeline;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use superclient_core::{api, ApiError};
use web_sys::RequestCredentials;

use crate::browser;
use crate::context::AppContext;

// Re-export all public items
pub use access::*;
pub use finance::*;
pub use pipeline::*;

/// `GET` a JSON envelope, authenticated with the session token when present.
///
/// A 401 clears the session before returning `ApiError::Unauthorized`.
async fn get_json<T: DeserializeOwned>(ctx: AppContext, path: &str) -> Result<T, ApiError> {
    let Some((url, authorization)) =
        ctx.with_services(|s| (s.api.url(path), s.session.authorization()))
    else {
        return Err(ApiError::Network("application unmounted".to_string()));
    };

    let mut request = Request::get(&url).credentials(RequestCredentials::Include);
    if let Some(value) = authorization {
        request = request.header("Authorization", &value);
    }

    let result = fetch(request).await;
    match &result {
        Err(ApiError::Unauthorized) => {
            ctx.with_services(|s| s.session.handle_unauthorized(browser::clock()));
        }
        Err(err) => log::warn!("[API] GET {} failed: {}", path, err),
        Ok(_) => log::debug!("[API] GET {} ok", path),
    }
    result
}

async fn fetch<T: DeserializeOwned>(request: gloo_net::http::RequestBuilder) -> Result<T, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if let Some(err) = ApiError::from_status(response.status()) {
        return Err(err);
    }
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    api::decode(&body)
}
