// src/infrastructure/http.rs
use crate::domain::DomainError;
use anyhow::{bail, Context, Result};
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;

/// Parse a backend origin such as `http://localhost:8080`.
pub fn parse_origin(origin: &str) -> Result<Url> {
    let url = Url::parse(origin.trim())
        .with_context(|| format!("Invalid backend origin: {origin}"))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        bail!("Backend origin must be an http(s) URL: {origin}");
    }
    Ok(url)
}

/// Append path segments to the origin; each segment is percent-encoded.
pub fn endpoint(origin: &Url, segments: &[&str]) -> Url {
    let mut url = origin.clone();
    url.set_query(None);
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

/// Send a request and decode the JSON body; any failure becomes
/// `RequestFailed` for `operation`.
pub async fn fetch_json<T: DeserializeOwned>(
    operation: &'static str,
    request: RequestBuilder,
) -> Result<T, DomainError> {
    send(operation, request)
        .await?
        .json::<T>()
        .await
        .map_err(|e| DomainError::request_failed(operation, e))
}

/// Send a request and discard the body.
pub async fn fetch_empty(operation: &'static str, request: RequestBuilder) -> Result<(), DomainError> {
    send(operation, request).await.map(|_| ())
}

async fn send(operation: &'static str, request: RequestBuilder) -> Result<reqwest::Response, DomainError> {
    request
        .send()
        .await
        .map_err(|e| DomainError::request_failed(operation, e))?
        .error_for_status()
        .map_err(|e| DomainError::request_failed(operation, e))
}
