//! HTTP client wrapper for the storefront REST backend.
//!
//! Everything the backend returns is wrapped in a `{status, message, data,
//! pagination?}` envelope; a response with `status == "error"` is an
//! application-level failure even when the HTTP status is 200. This crate
//! owns that contract, the request builder, the bearer-token store, and the
//! transport seam the rest of the workspace fetches through.

mod auth;
mod client;
mod envelope;
mod error;
mod request;
mod response;

pub use auth::TokenStore;
pub use client::{ApiClient, HttpTransport, Transport};
pub use envelope::{Envelope, Pagination};
pub use error::ApiError;
pub use request::{Method, RequestBuilder};
pub use response::Response;
