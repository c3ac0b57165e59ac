//! HTTP client for the admin backend.
//!
//! One [`ResourceClient`] talks to one resource's base URL. The
//! [`ResourceApi`] trait is the seam the admin views depend on, so they can
//! be driven by an in-memory fake in tests.

pub mod api;
pub mod error;
pub mod resource_client;

pub use api::ResourceApi;
pub use error::ClientError;
pub use resource_client::{ResourceClient, build_http_client};
