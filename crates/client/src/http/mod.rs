//! HTTP transport layer.

pub mod client;

pub use client::{ApiResponse, HttpTransport, HttpTransportBuilder};
