//! # assethub-api
//!
//! HTTP layer for AssetHub built on Axum.
//!
//! Serves the unauthenticated public asset page that QR codes point at,
//! the uploaded photos and QR images under `/static`, and a health probe.
//! Domain errors are mapped to JSON error bodies with matching status codes.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
