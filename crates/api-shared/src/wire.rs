//! JSON bodies for the `/data` endpoints.
//!
//! Incoming bodies are explicit serde structs rather than free-form JSON;
//! the handler checks field presence on typed `Option`s before dispatch.
//! Missing fields deserialize to `None` so that an incomplete body reaches
//! the handler and is answered with a `400` instead of a parser rejection.
//!
//! The record identifier travels on the wire as `_id`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A movie record as it appears on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MovieRes {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub image: String,
    pub summary: String,
}

/// Body of `POST /data`. All three fields are required and must be non-empty.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateMovieReq {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Body of `PUT /data`. `_id` is required; the field values replace the
/// stored ones as supplied.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateMovieReq {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Body of `DELETE /data`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct DeleteMovieReq {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Generic message body used for confirmations and error responses.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageRes {
    pub message: String,
}
