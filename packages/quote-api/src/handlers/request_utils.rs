//! Request utilities for HTTP endpoints.

use http_body_util::BodyExt;
use hyper::body::{Body, Bytes};
use hyper::{Request, Response};
use quote_store::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::router::RouterError;

/// Type alias for matchit parameters with explicit lifetimes
pub type MatchitParams<'a, 'b> = matchit::Params<'a, 'b>;

/// Reads the whole request body.
pub async fn read_request_body<B>(req: Request<B>) -> Result<Bytes, RouterError>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let body = req
        .into_body()
        .collect()
        .await
        .map_err(|e| RouterError::InternalError(format!("Failed to read request body: {}", e)))?;
    Ok(body.to_bytes())
}

/// Parses the `id` path parameter.
pub fn parse_quote_id(params: &MatchitParams<'_, '_>) -> Result<i64, RouterError> {
    let raw = params.get("id").unwrap_or_default();
    raw.parse().map_err(|e| {
        tracing::debug!("Rejecting quote id '{}': {}", raw, e);
        RouterError::BadRequest("Invalid ID".to_string())
    })
}

/// Parses a create/update body.
///
/// An empty body is malformed JSON. A literal `null` decodes to
/// `T::default()`, i.e. an object with no fields.
pub fn parse_json_body<T>(body: &[u8]) -> Result<T, RouterError>
where
    T: DeserializeOwned + Default,
{
    serde_json::from_slice::<Option<T>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| RouterError::BadRequest(format!("Invalid request body: {}", e)))
}

/// Map StoreError to appropriate RouterError
pub fn map_store_error_to_router_error(e: StoreError) -> RouterError {
    match e {
        StoreError::QuoteNotFound { .. } | StoreError::NoQuotes => {
            RouterError::NotFound(e.to_string())
        }
    }
}

impl From<StoreError> for RouterError {
    fn from(e: StoreError) -> Self {
        map_store_error_to_router_error(e)
    }
}

/// Helper to build HTTP response with proper error handling
pub fn build_response(status: u16, json: Vec<u8>) -> Result<Response<Bytes>, RouterError> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Bytes::from(json))
        .map_err(|e| RouterError::InternalError(format!("Failed to build response: {}", e)))
}

/// Serializes `data` and wraps it in a JSON response.
pub fn json_response<T: Serialize>(status: u16, data: &T) -> Result<Response<Bytes>, RouterError> {
    let json = serde_json::to_vec(data)
        .map_err(|e| RouterError::InternalError(format!("Failed to serialize response: {}", e)))?;
    build_response(status, json)
}
