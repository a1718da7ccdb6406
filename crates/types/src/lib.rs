//! Validated text primitives shared across Marquee crates.
//!
//! Every movie field (`name`, `image`, `summary`) is required and must carry
//! at least one non-whitespace character when a record is created. Rather than
//! re-checking strings at each layer, the boundary converts raw input into
//! [`NonEmptyText`] once and the rest of the system relies on the type.

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// A string that is guaranteed to contain at least one non-whitespace
/// character.
///
/// Input is trimmed of leading and trailing whitespace during construction;
/// a value that trims down to nothing is rejected. Deserialization goes
/// through the same check, so an empty field in a JSON body fails at the
/// parsing boundary instead of deep inside a service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// Returns `Err(TextError::Empty)` if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_trims_text() {
        let text = NonEmptyText::new("  Interstellar  ").unwrap();
        assert_eq!(text.as_str(), "Interstellar");
    }

    #[test]
    fn rejects_empty_and_whitespace_only_input() {
        assert!(NonEmptyText::new("").is_err());
        assert!(NonEmptyText::new("   \t\n").is_err());
    }

    #[test]
    fn into_inner_returns_trimmed_string() {
        let text = NonEmptyText::new(" poster.png ").unwrap();
        assert_eq!(text.into_inner(), "poster.png");
    }

    #[test]
    fn deserialization_rejects_empty_strings() {
        let ok: Result<NonEmptyText, _> = serde_json::from_str("\"Dune\"");
        assert_eq!(ok.unwrap().as_str(), "Dune");

        let err: Result<NonEmptyText, _> = serde_json::from_str("\"  \"");
        assert!(err.is_err());
    }
}
