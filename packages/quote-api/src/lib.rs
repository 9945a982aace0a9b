//! REST API server for the in-memory quote store.
//!
//! Provides the HTTP endpoints for quote CRUD and random selection,
//! request routing, and the hyper connection loop.

pub mod config;
pub mod handlers;
pub mod router;
pub mod server;
