//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into
//! core services behind an `Arc`. Request handlers never read process-wide
//! environment variables, which keeps behaviour consistent across
//! multi-threaded runtimes and test harnesses.

use std::path::{Path, PathBuf};

/// Default root directory for the movie document store.
pub const DEFAULT_DATA_DIR: &str = "movie_data";

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    data_dir: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig` rooted at the given data directory.
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Root directory under which movie documents are sharded.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
