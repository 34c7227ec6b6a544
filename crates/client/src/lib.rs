//! # ITM Client
//!
//! Typed client for the ITM configuration API.
//!
//! This crate contains:
//! - The HTTP transport wrapper (base-URL resolution, standard headers,
//!   normalized responses)
//! - The [`ItmClient`] aggregating configuration and resource services
//! - CRUD services for DNS applications, DNS zones, DNS records, and
//!   platforms
//! - The standalone OAuth client-credentials token helper
//!
//! ## Architecture
//! - Data types and errors live in `itm-domain`
//! - Every operation performs exactly one awaited round trip; status-code
//!   interpretation belongs to the services, never to the transport

pub mod auth;
pub mod client;
pub mod http;
pub mod services;

// Re-export commonly used items
pub use client::{ItmClient, ItmClientBuilder};
pub use http::{ApiResponse, HttpTransport, HttpTransportBuilder};
pub use itm_domain::{ItmError, Result};
