//! slimshop API server library.
//!
//! Exposes config, state, error handling, views and routes so integration
//! tests and the binary entrypoint share the same building blocks.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
pub mod view;
