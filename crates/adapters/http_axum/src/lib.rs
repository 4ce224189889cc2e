//! # vocohub-adapter-http-axum
//!
//! HTTP adapter — exposes the control service over a JSON API and a
//! server-rendered HTML dashboard (no JavaScript).
//!
//! The core never sees HTTP types: handlers unwrap the transport envelope,
//! hand the service a raw string or a field patch, and serialize the result
//! back out.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
