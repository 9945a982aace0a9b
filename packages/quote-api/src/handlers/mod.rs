//! HTTP endpoint implementations for the quote API.

pub mod quote_handlers;
pub mod request_utils;
pub mod response;

pub use quote_handlers::{
    create_quote, delete_quote, get_quote, list_quotes, random_quote, update_quote, welcome,
};
pub use response::{error_response, message_response, ErrorResponse, MessageResponse};
