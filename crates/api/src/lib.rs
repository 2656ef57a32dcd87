//! REST API for the wardrobe matching service.
//!
//! Exposed as a library so integration tests can build the exact router
//! (middleware stack included) that `main.rs` serves.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
pub mod upload;
