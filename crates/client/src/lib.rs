//! # Marquee client
//!
//! Client-side building blocks for the Marquee movie record server:
//! - [`api::ApiClient`] - blocking HTTP transport for the `/data` endpoints
//! - [`session::Session`] - the view-state machine behind the terminal UI
//!   (local record collection, draft form, transient notices, in-flight
//!   guard)
//!
//! The `marquee` binary wires the two together; the session itself performs
//! no I/O, which keeps the state transitions testable without a server.

pub mod api;
pub mod session;

pub use api::{ApiClient, ClientError, ClientResult};
pub use session::{Draft, Notice, NoticeLevel, Session, SubmitReq};
