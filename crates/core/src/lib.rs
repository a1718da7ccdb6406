//! # Marquee Core
//!
//! Core data operations for the Marquee movie record system.
//!
//! This crate contains pure record operations and file/folder management:
//! - Movie creation, update, deletion and listing over a sharded JSON
//!   document store
//! - File system operations under the configured data directory
//!
//! **No API concerns**: HTTP servers, wire formats, or client interfaces
//! belong in `api-rest`, `api-shared`, or `client`.

pub mod config;
pub mod error;
pub mod ids;
pub mod record;
pub mod service;
pub mod store;

pub use config::{CoreConfig, DEFAULT_DATA_DIR};
pub use error::{MovieError, MovieResult};
pub use ids::RecordId;
pub use marquee_types::{NonEmptyText, TextError};
pub use record::Movie;
pub use service::MovieService;
pub use store::MovieStore;
