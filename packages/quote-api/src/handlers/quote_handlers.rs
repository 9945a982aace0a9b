//! Quote CRUD and random selection handlers.

use hyper::body::{Body, Bytes};
use hyper::{Request, Response};
use quote_store::{QuoteInput, QuoteUpdate};

use crate::router::{AppState, RouterError};

use super::request_utils::{
    json_response, map_store_error_to_router_error, parse_json_body, parse_quote_id,
    read_request_body, MatchitParams,
};
use super::response::message_response;

const WELCOME_MESSAGE: &str = "Welcome to the Quotes API 🚀";

/// Greets the caller.
///
/// # Endpoint
/// `GET /`
pub async fn welcome<B>(
    _req: Request<B>,
    _params: MatchitParams<'_, '_>,
    _state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    json_response(200, &message_response(WELCOME_MESSAGE))
}

/// Lists every quote in store order.
///
/// # Endpoint
/// `GET /quotes`
///
/// # Response
/// - **200 OK**: JSON array of quotes
/// ```json
/// [
///   {"id": 1, "text": "...", "author": "Walt Disney"},
///   {"id": 2, "text": "...", "author": "Will Rogers"}
/// ]
/// ```
pub async fn list_quotes<B>(
    _req: Request<B>,
    _params: MatchitParams<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let quotes = state.store.list();
    json_response(200, &quotes)
}

/// Returns one quote chosen by the store's index picker.
///
/// # Endpoint
/// `GET /quotes/random`
///
/// # Response
/// - **200 OK**: a single quote
///
/// # Errors
/// - **404 Not Found**: the store is empty (`{"error": "No quotes available"}`)
pub async fn random_quote<B>(
    _req: Request<B>,
    _params: MatchitParams<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let quote = state
        .store
        .pick_random()
        .map_err(map_store_error_to_router_error)?;
    json_response(200, &quote)
}

/// Reads a quote by id.
///
/// # Endpoint
/// `GET /quotes/{id}`
///
/// # Errors
/// - **400 Bad Request**: id is not an integer
/// - **404 Not Found**: no quote with that id
///
/// # Example
/// ```bash
/// curl http://localhost:8080/quotes/1
/// ```
pub async fn get_quote<B>(
    _req: Request<B>,
    params: MatchitParams<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let id = parse_quote_id(&params)?;
    let quote = state
        .store
        .find_by_id(id)
        .map_err(map_store_error_to_router_error)?;
    json_response(200, &quote)
}

/// Creates a quote.
///
/// # Endpoint
/// `POST /quotes`
///
/// # Request Body
/// ```json
/// {
///   "text": "Stay hungry, stay foolish.",
///   "author": "Steve Jobs"
/// }
/// ```
///
/// # Response
/// - **201 Created**: the stored quote with its assigned id
///
/// # Errors
/// - **400 Bad Request**: body is not valid JSON for a quote
///
/// # Notes
/// - Missing fields are stored as empty strings; a `null` body counts as `{}`
/// - The id is the store length plus one; any `id` in the body is ignored
///
/// # Example
/// ```bash
/// curl -X POST http://localhost:8080/quotes \
///   -H "Content-Type: application/json" \
///   -d '{"text": "Stay hungry, stay foolish.", "author": "Steve Jobs"}'
/// ```
pub async fn create_quote<B>(
    req: Request<B>,
    _params: MatchitParams<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let body_bytes = read_request_body(req).await?;
    let input: QuoteInput = parse_json_body(&body_bytes)?;

    let quote = state.store.create(input);

    json_response(201, &quote)
}

/// Overwrites the text and/or author of a quote.
///
/// # Endpoint
/// `PUT /quotes/{id}`
///
/// # Request Body
/// ```json
/// {
///   "text": "Updated text",
///   "author": "Updated author"
/// }
/// ```
///
/// # Response
/// - **200 OK**: the updated quote
///
/// # Errors
/// - **400 Bad Request**: invalid id, or malformed body for an existing quote
/// - **404 Not Found**: no quote with that id, checked before the body is parsed
///
/// # Notes
/// - Fields left out of the body keep their stored values
/// - The path id always wins over an `id` in the body
pub async fn update_quote<B>(
    req: Request<B>,
    params: MatchitParams<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let id = parse_quote_id(&params)?;
    let body_bytes = read_request_body(req).await?;

    let quote = state
        .store
        .update_with(id, || parse_json_body::<QuoteUpdate>(&body_bytes))?;

    json_response(200, &quote)
}

/// Deletes a quote.
///
/// # Endpoint
/// `DELETE /quotes/{id}`
///
/// # Response
/// - **200 OK**: `{"message": "Quote deleted"}`
///
/// # Errors
/// - **400 Bad Request**: id is not an integer
/// - **404 Not Found**: no quote with that id
pub async fn delete_quote<B>(
    _req: Request<B>,
    params: MatchitParams<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let id = parse_quote_id(&params)?;
    state
        .store
        .delete(id)
        .map_err(map_store_error_to_router_error)?;

    json_response(200, &message_response("Quote deleted"))
}
