//! REST helpers for the risk-dashboard backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning transport errors since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`. A non-2xx status with a
//! JSON `{error}` body becomes `ApiError::Server` so the UI can show the
//! backend's own message; anything else (network failure, malformed body)
//! becomes `ApiError::Transport` and the UI shows a generic fallback.

#![allow(clippy::unused_async)]

use super::types::{ApiError, ProcessResponse, TailsResponse, TrendPlotResponse};

#[cfg(feature = "hydrate")]
use super::types::extract_error_message;

/// Kick off backend processing of the configured workbook via
/// `POST /process_data`.
pub async fn process_data() -> Result<ProcessResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/process_data")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(not_available())
    }
}

/// Upload one Excel workbook for processing via `POST /process_excel`.
/// The response shape matches [`process_data`].
#[cfg(feature = "hydrate")]
pub async fn process_excel(file: &web_sys::File) -> Result<ProcessResponse, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Transport("could not build form data".to_owned()))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| ApiError::Transport("could not attach file".to_owned()))?;

    let resp = gloo_net::http::Request::post("/process_excel")
        .body(form)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    decode(resp).await
}

/// Fetch the positive/negative tail grids via `GET /get_top_bottom_tails`.
pub async fn fetch_top_bottom_tails() -> Result<TailsResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/get_top_bottom_tails").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(not_available())
    }
}

/// Fetch the DVaR trend chart payload via `GET /get_dvar_trends_plot`.
pub async fn fetch_dvar_trends_plot() -> Result<TrendPlotResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/get_dvar_trends_plot").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(not_available())
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    decode(resp).await
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if resp.ok() {
        return resp
            .json::<T>()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()));
    }

    let status = resp.status();
    match resp.json::<serde_json::Value>().await {
        Ok(body) => match extract_error_message(&body) {
            Some(msg) => Err(ApiError::Server(msg)),
            None => Err(ApiError::Transport(format!("request failed with status {status}"))),
        },
        Err(_) => Err(ApiError::Transport(format!("request failed with status {status}"))),
    }
}

#[cfg(not(feature = "hydrate"))]
fn not_available() -> ApiError {
    ApiError::Transport("not available on server".to_owned())
}
