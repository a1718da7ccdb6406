//! # API Shared
//!
//! Shared wire definitions for the Marquee APIs.
//!
//! Contains:
//! - Request and response body types for the `/data` endpoints (`wire` module)
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` on the server side and `client` on the consumer side so
//! both ends agree on the JSON shapes.

pub mod health;
pub mod wire;

pub use health::{HealthRes, HealthService};
pub use wire::*;
