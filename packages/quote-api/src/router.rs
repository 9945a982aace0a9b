//! Matchit routing configuration.

use std::sync::Arc;
use std::time::Instant;

use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use matchit::Router as MatchitRouter;
use quote_store::QuoteStore;

use crate::handlers;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Quote store shared by every request
    pub store: Arc<QuoteStore>,
}

/// HTTP request router.
pub struct Router {
    inner: MatchitRouter<RouteHandler>,
    state: AppState,
}

impl Router {
    /// Creates a new router with the quote routes registered.
    pub fn new(store: Arc<QuoteStore>) -> Self {
        let mut router = MatchitRouter::new();

        router
            .insert("/", RouteHandler::Welcome)
            .expect("Failed to insert / route");
        router
            .insert("/quotes", RouteHandler::Quotes)
            .expect("Failed to insert /quotes route");
        router
            .insert("/quotes/random", RouteHandler::RandomQuote)
            .expect("Failed to insert /quotes/random route");
        router
            .insert("/quotes/{id}", RouteHandler::Quote)
            .expect("Failed to insert /quotes/{id} route");

        Self {
            inner: router,
            state: AppState { store },
        }
    }

    /// Returns the shared state handed to handlers.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Routes a request and turns any routing or handler error into its
    /// JSON error response. Logs one line per request.
    pub async fn handle<B>(&self, req: Request<B>) -> Response<Bytes>
    where
        B: Body,
        B::Error: std::fmt::Display,
    {
        let started = Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let response = match self.route(req).await {
            Ok(response) => response,
            Err(err) => {
                if let RouterError::InternalError(msg) = &err {
                    tracing::error!("Error handling {} {}: {}", method, path, msg);
                }
                Response::from(err)
            }
        };

        tracing::info!(
            method = %method,
            path = %path,
            status = response.status().as_u16(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "request"
        );
        response
    }

    /// Routes an incoming request to the appropriate handler.
    ///
    /// A single trailing slash is ignored, so `/quotes/` reaches the same
    /// handler as `/quotes`.
    pub async fn route<B>(&self, req: Request<B>) -> Result<Response<Bytes>, RouterError>
    where
        B: Body,
        B::Error: std::fmt::Display,
    {
        let raw_path = req.uri().path().to_string();
        let path = match raw_path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => raw_path.as_str(),
        };

        match self.inner.at(path) {
            Ok(matched) => {
                matched
                    .value
                    .handle(req, matched.params, self.state.clone())
                    .await
            }
            Err(_) => Err(RouterError::NotFound(format!(
                "No route found for {}",
                raw_path
            ))),
        }
    }
}

/// Route handler function.
enum RouteHandler {
    Welcome,
    Quotes,
    RandomQuote,
    Quote,
}

impl RouteHandler {
    /// Handles a request with the given route parameters.
    async fn handle<B>(
        &self,
        req: Request<B>,
        params: matchit::Params<'_, '_>,
        state: AppState,
    ) -> Result<Response<Bytes>, RouterError>
    where
        B: Body,
        B::Error: std::fmt::Display,
    {
        let method = req.method().clone();
        match self {
            RouteHandler::Welcome => match method {
                Method::GET => handlers::welcome(req, params, state).await,
                _ => Err(RouterError::MethodNotAllowed),
            },
            RouteHandler::Quotes => match method {
                Method::GET => handlers::list_quotes(req, params, state).await,
                Method::POST => handlers::create_quote(req, params, state).await,
                _ => Err(RouterError::MethodNotAllowed),
            },
            RouteHandler::RandomQuote => match method {
                Method::GET => handlers::random_quote(req, params, state).await,
                _ => Err(RouterError::MethodNotAllowed),
            },
            RouteHandler::Quote => match method {
                Method::GET => handlers::get_quote(req, params, state).await,
                Method::PUT => handlers::update_quote(req, params, state).await,
                Method::DELETE => handlers::delete_quote(req, params, state).await,
                _ => Err(RouterError::MethodNotAllowed),
            },
        }
    }
}

/// Router error type.
#[derive(Debug)]
pub enum RouterError {
    MethodNotAllowed,
    InternalError(String),
    BadRequest(String),
    NotFound(String),
}

impl RouterError {
    /// HTTP status code for this error.
    pub fn status(&self) -> u16 {
        match self {
            RouterError::MethodNotAllowed => 405,
            RouterError::InternalError(_) => 500,
            RouterError::BadRequest(_) => 400,
            RouterError::NotFound(_) => 404,
        }
    }

    /// Message placed in the `error` field of the response body.
    pub fn message(&self) -> &str {
        match self {
            RouterError::MethodNotAllowed => "Method Not Allowed",
            RouterError::InternalError(msg)
            | RouterError::BadRequest(msg)
            | RouterError::NotFound(msg) => msg,
        }
    }
}

impl std::fmt::Display for RouterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouterError::MethodNotAllowed => write!(f, "Method Not Allowed"),
            RouterError::InternalError(msg) => write!(f, "Internal Error: {}", msg),
            RouterError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            RouterError::NotFound(msg) => write!(f, "Not Found: {}", msg),
        }
    }
}

impl std::error::Error for RouterError {}

impl From<RouterError> for Response<Bytes> {
    fn from(err: RouterError) -> Self {
        let status = err.status();
        let error_response = crate::handlers::error_response(err.message());
        let body = serde_json::to_vec(&error_response)
            .unwrap_or_else(|_| br#"{"error":"Internal Server Error"}"#.to_vec());

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Bytes::from(body))
            .unwrap_or_else(|_| {
                let mut fallback = Response::new(Bytes::from_static(b"Internal Server Error"));
                *fallback.status_mut() = hyper::StatusCode::INTERNAL_SERVER_ERROR;
                fallback
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(RouterError::MethodNotAllowed.status(), 405);
        assert_eq!(RouterError::BadRequest("x".into()).status(), 400);
        assert_eq!(RouterError::NotFound("x".into()).status(), 404);
        assert_eq!(RouterError::InternalError("x".into()).status(), 500);
    }

    #[test]
    fn test_error_into_response() {
        let response = Response::from(RouterError::BadRequest("Invalid ID".to_string()));
        assert_eq!(response.status(), 400);
        assert_eq!(
            response.headers().get("Content-Type").unwrap(),
            "application/json"
        );
        let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body, serde_json::json!({"error": "Invalid ID"}));
    }

    #[test]
    fn test_display_prefixes_kind() {
        let err = RouterError::NotFound("Quote not found".to_string());
        assert_eq!(err.to_string(), "Not Found: Quote not found");
        assert_eq!(err.message(), "Quote not found");
    }
}
