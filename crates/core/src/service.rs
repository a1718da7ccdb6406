//! Movie service.
//!
//! The service is the single entry point the API layers use for record
//! operations. It is stateless across calls; the only held state is the
//! process-wide configuration resolved at startup.

use crate::config::CoreConfig;
use crate::error::MovieResult;
use crate::ids::RecordId;
use crate::record::Movie;
use crate::store::MovieStore;
use marquee_types::NonEmptyText;
use std::sync::Arc;

/// Pure movie record operations - no API concerns
#[derive(Clone)]
pub struct MovieService {
    cfg: Arc<CoreConfig>,
}

impl MovieService {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    fn store(&self) -> MovieStore {
        MovieStore::new(self.cfg.data_dir())
    }

    /// Lists all records, sorted by creation time then identifier.
    pub fn list(&self) -> MovieResult<Vec<Movie>> {
        self.store().list()
    }

    /// Creates a new record from validated fields.
    ///
    /// The store assigns the identifier and creation timestamp; the full
    /// persisted record is returned. Creation is never idempotent: repeated
    /// calls with identical fields create distinct records.
    pub fn create(
        &self,
        name: NonEmptyText,
        image: NonEmptyText,
        summary: NonEmptyText,
    ) -> MovieResult<Movie> {
        let movie = self.store().insert(
            name.into_inner(),
            image.into_inner(),
            summary.into_inner(),
        )?;
        tracing::info!("movie created: {}", movie.id);
        Ok(movie)
    }

    /// Replaces the mutable fields of an existing record.
    ///
    /// The supplied values are stored as-is; a caller may clear fields via
    /// update. The identifier is immutable.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MovieError::NotFound`] if no record exists for `id`.
    pub fn update(
        &self,
        id: &RecordId,
        name: String,
        image: String,
        summary: String,
    ) -> MovieResult<Movie> {
        let movie = self.store().replace(id, name, image, summary)?;
        tracing::info!("movie updated: {}", movie.id);
        Ok(movie)
    }

    /// Hard-deletes a record.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MovieError::NotFound`] if no record exists for `id`,
    /// including on a repeated delete of the same identifier.
    pub fn delete(&self, id: &RecordId) -> MovieResult<()> {
        self.store().remove(id)?;
        tracing::info!("movie deleted: {id}");
        Ok(())
    }
}
