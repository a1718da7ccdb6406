//! The movie record model.

use crate::ids::RecordId;
use chrono::{DateTime, Utc};

/// A persisted movie record.
///
/// `id` is assigned by the store on creation and never changes. `created_at`
/// is stamped at creation and serves as the explicit list sort key, so
/// listing order does not depend on filesystem enumeration order. The three
/// text fields are guaranteed non-empty at creation time; update performs a
/// full replacement without re-validation, so a record that has been updated
/// may carry empty fields.
#[derive(Clone, Debug, PartialEq)]
pub struct Movie {
    pub id: RecordId,
    pub name: String,
    pub image: String,
    pub summary: String,
    pub created_at: DateTime<Utc>,
}
