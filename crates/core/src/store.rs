//! Sharded JSON document store for movie records.
//!
//! One record occupies one directory, `<root>/<s1>/<s2>/<id>/`, holding a
//! single `movie.json` document. The store provides what the service layer
//! assumes of its database: durable storage, unique identifier assignment on
//! insert, and atomic single-document replacement (documents are written to a
//! temporary file and renamed into place, so a reader never observes a
//! half-written document).
//!
//! Identifier allocation guards against the pathological case of a UUID
//! collision or a pre-existing directory by retrying with fresh identifiers a
//! bounded number of times.

use crate::error::{MovieError, MovieResult};
use crate::ids::RecordId;
use crate::record::Movie;
use chrono::{DateTime, Utc};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const DOC_FILE: &str = "movie.json";
const DOC_TMP_FILE: &str = "movie.json.tmp";
const ID_ALLOCATION_ATTEMPTS: u32 = 5;

/// On-disk document shape. The identifier is the directory name, not a
/// document field.
#[derive(serde::Serialize, serde::Deserialize)]
struct MovieDoc {
    name: String,
    image: String,
    summary: String,
    created_at: DateTime<Utc>,
}

/// Filesystem-backed document store rooted at a data directory.
pub struct MovieStore {
    root: PathBuf,
}

impl MovieStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Persists a new record, assigning it a fresh identifier and creation
    /// timestamp.
    pub fn insert(&self, name: String, image: String, summary: String) -> MovieResult<Movie> {
        let (id, dir) = self.allocate_record_dir()?;
        let doc = MovieDoc {
            name,
            image,
            summary,
            created_at: Utc::now(),
        };
        write_doc(&dir, &doc)?;
        Ok(doc.into_movie(id))
    }

    /// Reads a single record by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MovieError::NotFound`] if no document exists for `id`.
    pub fn get(&self, id: &RecordId) -> MovieResult<Movie> {
        let doc = read_doc(&self.record_dir(id))?;
        Ok(doc.into_movie(id.clone()))
    }

    /// Replaces the three mutable fields of an existing record.
    ///
    /// The identifier and creation timestamp are preserved. The supplied
    /// values are stored as-is; emptiness is not enforced here.
    pub fn replace(
        &self,
        id: &RecordId,
        name: String,
        image: String,
        summary: String,
    ) -> MovieResult<Movie> {
        let dir = self.record_dir(id);
        let existing = read_doc(&dir)?;
        let doc = MovieDoc {
            name,
            image,
            summary,
            created_at: existing.created_at,
        };
        write_doc(&dir, &doc)?;
        Ok(doc.into_movie(id.clone()))
    }

    /// Removes a record and its directory. Hard delete, no tombstone.
    pub fn remove(&self, id: &RecordId) -> MovieResult<()> {
        let dir = self.record_dir(id);
        if !dir.join(DOC_FILE).is_file() {
            return Err(MovieError::NotFound);
        }
        fs::remove_dir_all(&dir).map_err(MovieError::RecordRemoval)
    }

    /// Lists all records, sorted by creation time then identifier.
    ///
    /// A missing root directory yields an empty list. Individual documents
    /// that cannot be read or parsed are logged as warnings and skipped
    /// rather than failing the whole listing.
    pub fn list(&self) -> MovieResult<Vec<Movie>> {
        let mut movies = Vec::new();

        let s1_iter = match fs::read_dir(&self.root) {
            Ok(it) => it,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(movies),
            Err(e) => return Err(MovieError::FileRead(e)),
        };
        for s1 in s1_iter.flatten() {
            let s1_path = s1.path();
            if !s1_path.is_dir() {
                continue;
            }

            let s2_iter = match fs::read_dir(&s1_path) {
                Ok(it) => it,
                Err(_) => continue,
            };
            for s2 in s2_iter.flatten() {
                let s2_path = s2.path();
                if !s2_path.is_dir() {
                    continue;
                }

                let id_iter = match fs::read_dir(&s2_path) {
                    Ok(it) => it,
                    Err(_) => continue,
                };
                for id_ent in id_iter.flatten() {
                    let id_path = id_ent.path();
                    if !id_path.is_dir() {
                        continue;
                    }

                    let id = match id_path
                        .file_name()
                        .and_then(|os| os.to_str())
                        .and_then(|s| RecordId::parse(s).ok())
                    {
                        Some(id) => id,
                        None => continue,
                    };

                    match read_doc(&id_path) {
                        Ok(doc) => movies.push(doc.into_movie(id)),
                        Err(e) => {
                            tracing::warn!("skipping unreadable movie document {}: {e}", id);
                        }
                    }
                }
            }
        }

        movies.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(movies)
    }

    fn record_dir(&self, id: &RecordId) -> PathBuf {
        id.sharded_dir(&self.root)
    }

    /// Allocates a fresh identifier and creates its record directory.
    fn allocate_record_dir(&self) -> MovieResult<(RecordId, PathBuf)> {
        for _ in 0..ID_ALLOCATION_ATTEMPTS {
            let id = RecordId::new();
            let dir = id.sharded_dir(&self.root);

            if let Some(parent) = dir.parent() {
                fs::create_dir_all(parent).map_err(MovieError::StorageDirCreation)?;
            }

            match fs::create_dir(&dir) {
                Ok(()) => return Ok((id, dir)),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(MovieError::RecordDirCreation(e)),
            }
        }
        Err(MovieError::RecordDirCreation(std::io::Error::new(
            ErrorKind::AlreadyExists,
            "exhausted identifier allocation attempts",
        )))
    }
}

impl MovieDoc {
    fn into_movie(self, id: RecordId) -> Movie {
        Movie {
            id,
            name: self.name,
            image: self.image,
            summary: self.summary,
            created_at: self.created_at,
        }
    }
}

fn write_doc(dir: &Path, doc: &MovieDoc) -> MovieResult<()> {
    let json = serde_json::to_string_pretty(doc).map_err(MovieError::Serialization)?;
    let tmp = dir.join(DOC_TMP_FILE);
    fs::write(&tmp, json).map_err(MovieError::FileWrite)?;
    fs::rename(&tmp, dir.join(DOC_FILE)).map_err(MovieError::FileWrite)
}

fn read_doc(dir: &Path) -> MovieResult<MovieDoc> {
    let contents = match fs::read_to_string(dir.join(DOC_FILE)) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Err(MovieError::NotFound),
        Err(e) => return Err(MovieError::FileRead(e)),
    };
    serde_json::from_str(&contents).map_err(MovieError::Deserialization)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store() -> (TempDir, MovieStore) {
        let temp = TempDir::new().unwrap();
        let store = MovieStore::new(temp.path());
        (temp, store)
    }

    #[test]
    fn insert_assigns_unique_ids_and_persists_fields() {
        let (_temp, store) = test_store();

        let a = store
            .insert("Alien".into(), "alien.png".into(), "In space.".into())
            .unwrap();
        let b = store
            .insert("Blade Runner".into(), "br.png".into(), "Replicants.".into())
            .unwrap();

        assert_ne!(a.id, b.id);

        let read = store.get(&a.id).unwrap();
        assert_eq!(read.name, "Alien");
        assert_eq!(read.image, "alien.png");
        assert_eq!(read.summary, "In space.");
        assert_eq!(read.created_at, a.created_at);
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let (_temp, store) = test_store();
        let err = store.get(&RecordId::new()).unwrap_err();
        assert!(matches!(err, MovieError::NotFound));
    }

    #[test]
    fn list_returns_records_sorted_by_creation() {
        let (_temp, store) = test_store();
        let ids: Vec<_> = (0..4)
            .map(|i| {
                store
                    .insert(format!("Movie {i}"), "poster.png".into(), "s".into())
                    .unwrap()
                    .id
            })
            .collect();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 4);
        let mut sorted = listed.clone();
        sorted.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        assert_eq!(listed, sorted);
        for id in &ids {
            assert!(listed.iter().any(|m| &m.id == id));
        }
    }

    #[test]
    fn list_of_missing_root_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = MovieStore::new(temp.path().join("does-not-exist"));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn replace_keeps_id_and_creation_timestamp() {
        let (_temp, store) = test_store();
        let movie = store
            .insert("Solaris".into(), "solaris.png".into(), "Ocean.".into())
            .unwrap();

        let updated = store
            .replace(&movie.id, "Solaris (1972)".into(), "solaris.png".into(), "".into())
            .unwrap();

        assert_eq!(updated.id, movie.id);
        assert_eq!(updated.created_at, movie.created_at);
        assert_eq!(updated.name, "Solaris (1972)");
        // Replacement does not enforce non-emptiness.
        assert_eq!(updated.summary, "");
    }

    #[test]
    fn replace_unknown_id_is_not_found() {
        let (_temp, store) = test_store();
        let err = store
            .replace(&RecordId::new(), "x".into(), "y".into(), "z".into())
            .unwrap_err();
        assert!(matches!(err, MovieError::NotFound));
    }

    #[test]
    fn remove_deletes_exactly_one_record() {
        let (_temp, store) = test_store();
        let keep = store
            .insert("Keep".into(), "keep.png".into(), "stays".into())
            .unwrap();
        let gone = store
            .insert("Gone".into(), "gone.png".into(), "leaves".into())
            .unwrap();

        store.remove(&gone.id).unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, keep.id);

        // A second delete of the same id deterministically reports not-found.
        let err = store.remove(&gone.id).unwrap_err();
        assert!(matches!(err, MovieError::NotFound));
    }
}
