//! Record identifiers and sharded-path derivation.
//!
//! Marquee stores one JSON document per movie under a sharded directory tree
//! derived from the record identifier. To keep path derivation deterministic,
//! identifiers use a canonical representation: **32 lowercase hexadecimal
//! characters** (the `simple()` form of a v4 UUID, no hyphens).
//!
//! For a canonical id `u`, the record lives at `data_dir/<u[0..2]>/<u[2..4]>/<u>/`.
//! Sharding keeps any single directory from growing an unbounded fan-out.
//!
//! Externally supplied identifiers (API request bodies, client input) must be
//! validated through [`RecordId::parse`]; non-canonical values (uppercase,
//! hyphenated, wrong length, non-hex) are rejected.

use crate::error::{MovieError, MovieResult};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use uuid::Uuid;

/// A movie record identifier in canonical form.
///
/// Once constructed, the contained identifier is guaranteed to be 32 lowercase
/// hex characters, so it can be used directly as a directory name and compared
/// byte-for-byte.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(String);

impl RecordId {
    /// Allocates a fresh identifier for a new record.
    pub fn new() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Validates an externally supplied identifier.
    ///
    /// The input must already be canonical; other UUID forms are not
    /// normalised.
    ///
    /// # Errors
    ///
    /// Returns [`MovieError::InvalidId`] if `input` is not 32 lowercase hex
    /// characters.
    pub fn parse(input: &str) -> MovieResult<Self> {
        if Self::is_canonical(input) {
            return Ok(Self(input.to_owned()));
        }
        Err(MovieError::InvalidId(input.to_owned()))
    }

    /// Returns true if `input` is in canonical form.
    pub fn is_canonical(input: &str) -> bool {
        input.len() == 32
            && input
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `parent_dir/<s1>/<s2>/<id>/` where `s1`/`s2` are the first two
    /// hex character pairs of this identifier.
    pub fn sharded_dir(&self, parent_dir: &Path) -> PathBuf {
        let s1 = &self.0[0..2];
        let s2 = &self.0[2..4];
        parent_dir.join(s1).join(s2).join(&self.0)
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = MovieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordId::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_canonical_and_unique() {
        let a = RecordId::new();
        let b = RecordId::new();
        assert!(RecordId::is_canonical(a.as_str()));
        assert_ne!(a, b);
    }

    #[test]
    fn parse_round_trips_canonical_ids() {
        let id = RecordId::new();
        let parsed = RecordId::parse(id.as_str()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn parse_rejects_non_canonical_forms() {
        assert!(RecordId::parse("").is_err());
        assert!(RecordId::parse("not-an-id").is_err());
        // Hyphenated form of a valid UUID is still rejected.
        assert!(RecordId::parse("550e8400-e29b-41d4-a716-446655440000").is_err());
        // Uppercase hex is rejected.
        assert!(RecordId::parse("550E8400E29B41D4A716446655440000").is_err());
    }

    #[test]
    fn sharded_dir_uses_leading_hex_pairs() {
        let id = RecordId::parse("550e8400e29b41d4a716446655440000").unwrap();
        let dir = id.sharded_dir(Path::new("/data"));
        assert_eq!(
            dir,
            Path::new("/data/55/0e/550e8400e29b41d4a716446655440000")
        );
    }
}
