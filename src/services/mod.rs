pub mod directions;
pub mod image_search;
pub mod place_search;
pub mod static_map;
pub mod video_search;
pub mod weather;

use crate::error::{AppError, Result, Upstream};
use reqwest::{RequestBuilder, Response};

/// Send one request and hand back the response only if it is a 2xx.
///
/// Non-success statuses become `UpstreamRejected` carrying the body text;
/// anything that fails before a status arrives becomes `Transport`.
pub(crate) async fn send_checked(request: RequestBuilder, upstream: Upstream) -> Result<Response> {
    let response = request
        .send()
        .await
        .map_err(|e| AppError::transport(upstream, e))?;

    let status = response.status();
    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        tracing::warn!(
            upstream = %upstream,
            status = %status,
            "{} API HTTP error {}: {}",
            upstream, status, error_text
        );
        return Err(AppError::rejected(upstream, error_text));
    }

    Ok(response)
}

/// Decode a JSON body; decode errors count as transport failures.
pub(crate) async fn read_json<T: serde::de::DeserializeOwned>(
    response: Response,
    upstream: Upstream,
) -> Result<T> {
    response
        .json()
        .await
        .map_err(|e| AppError::transport(upstream, format!("Failed to parse response: {}", e)))
}
