//! View-state machine for the client.
//!
//! The session holds the local record collection, one draft form, the latest
//! transient notice, and an in-flight guard for submissions. It performs no
//! I/O: the frontend asks the session what request to issue
//! ([`Session::begin_submit`]) and feeds the transport result back
//! ([`Session::finish_submit`]), so every transition is observable in tests
//! without a server.
//!
//! Client-side validation contract: all three draft fields must be non-empty
//! before a submit request is issued, and the draft is reset only after a
//! successful submit so a failed attempt keeps the user's input for
//! correction.

use crate::api::{ClientError, ClientResult};
use marquee_api_shared::MovieRes;

/// The draft form bound to the three editable fields.
///
/// `id` distinguishes modes: absent for a not-yet-created record, present
/// for an in-progress edit of an existing one.
#[derive(Clone, Debug, Default)]
pub struct Draft {
    pub id: Option<String>,
    pub name: String,
    pub image: String,
    pub summary: String,
}

impl Draft {
    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    fn has_all_fields(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.image.trim().is_empty()
            && !self.summary.trim().is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A transient user-facing notification, the terminal equivalent of a toast.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// The request a submit resolves to, handed to the transport by the frontend.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitReq {
    Create {
        name: String,
        image: String,
        summary: String,
    },
    Update {
        id: String,
        name: String,
        image: String,
        summary: String,
    },
}

/// Client view state synchronized against server responses.
#[derive(Default)]
pub struct Session {
    records: Vec<MovieRes>,
    draft: Draft,
    notice: Option<Notice>,
    in_flight: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[MovieRes] {
        &self.records
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// Takes the pending notice, if any. Notices are one-shot.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Clears the draft back to "new record" mode.
    pub fn reset_draft(&mut self) {
        self.draft = Draft::default();
    }

    /// Applies the result of a list request.
    ///
    /// On success the local collection is replaced wholesale; on failure it
    /// is left empty and an error notice is raised.
    pub fn apply_list(&mut self, result: ClientResult<Vec<MovieRes>>) {
        match result {
            Ok(records) => self.records = records,
            Err(e) => {
                self.records.clear();
                self.notice = Some(Notice::error(format!(
                    "Failed to fetch movies: {e}. Please try again."
                )));
            }
        }
    }

    /// Copies the record at `row` (including its identifier) into the draft,
    /// switching submit behaviour to update mode.
    pub fn begin_edit(&mut self, row: usize) -> bool {
        let Some(movie) = self.records.get(row) else {
            self.notice = Some(Notice::error(format!("No movie at row {row}.")));
            return false;
        };
        self.draft = Draft {
            id: Some(movie.id.clone()),
            name: movie.name.clone(),
            image: movie.image.clone(),
            summary: movie.summary.clone(),
        };
        self.notice = Some(Notice::info(
            "Edit mode activated. Make changes and submit.",
        ));
        true
    }

    /// Resolves the draft into a submit request and marks the session busy.
    ///
    /// Returns `None` without issuing a request when a submit is already in
    /// flight, or when the draft fails client-side validation (all three
    /// fields must be non-empty).
    pub fn begin_submit(&mut self) -> Option<SubmitReq> {
        if self.in_flight {
            return None;
        }
        if !self.draft.has_all_fields() {
            self.notice = Some(Notice::error("All fields are required."));
            return None;
        }

        self.in_flight = true;
        let req = match &self.draft.id {
            Some(id) => SubmitReq::Update {
                id: id.clone(),
                name: self.draft.name.clone(),
                image: self.draft.image.clone(),
                summary: self.draft.summary.clone(),
            },
            None => SubmitReq::Create {
                name: self.draft.name.clone(),
                image: self.draft.image.clone(),
                summary: self.draft.summary.clone(),
            },
        };
        Some(req)
    }

    /// Applies the server's response to an in-flight submit.
    ///
    /// On success the returned record replaces the matching local record (by
    /// identifier) or is appended when none matches, and the draft is reset.
    /// On failure the collection is left unchanged and the draft kept.
    pub fn finish_submit(&mut self, result: ClientResult<MovieRes>) {
        self.in_flight = false;
        match result {
            Ok(movie) => {
                match self.records.iter().position(|m| m.id == movie.id) {
                    Some(pos) => {
                        self.records[pos] = movie;
                        self.notice = Some(Notice::success("Movie updated successfully!"));
                    }
                    None => {
                        self.records.push(movie);
                        self.notice = Some(Notice::success("Movie added successfully!"));
                    }
                }
                self.reset_draft();
            }
            Err(e) => {
                self.notice = Some(Notice::error(submit_error_text(&e)));
            }
        }
    }

    /// Returns the identifier of the record at `row`, if any. Deletion has
    /// no confirmation step; the frontend issues the request immediately.
    pub fn delete_target(&mut self, row: usize) -> Option<String> {
        match self.records.get(row) {
            Some(movie) => Some(movie.id.clone()),
            None => {
                self.notice = Some(Notice::error(format!("No movie at row {row}.")));
                None
            }
        }
    }

    /// Applies the result of a delete request for the record with `id`.
    pub fn apply_delete(&mut self, id: &str, result: ClientResult<()>) {
        match result {
            Ok(()) => {
                self.records.retain(|m| m.id != id);
                self.notice = Some(Notice::success("Movie deleted successfully!"));
            }
            Err(e) => {
                self.notice = Some(Notice::error(format!(
                    "Failed to delete the movie: {e}. Please try again."
                )));
            }
        }
    }
}

fn submit_error_text(e: &ClientError) -> String {
    match e {
        ClientError::Api { message, .. } => message.clone(),
        ClientError::Http(_) => format!("Failed to submit: {e}. Please try again."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str, name: &str) -> MovieRes {
        MovieRes {
            id: id.into(),
            name: name.into(),
            image: format!("{name}.png"),
            summary: format!("About {name}."),
        }
    }

    fn api_error() -> ClientError {
        ClientError::Api {
            status: 500,
            message: "Error saving data".into(),
        }
    }

    fn filled_session() -> Session {
        let mut session = Session::new();
        session.apply_list(Ok(vec![movie("a1", "Alien"), movie("b2", "Brazil")]));
        session
    }

    #[test]
    fn load_success_replaces_collection() {
        let session = filled_session();
        assert_eq!(session.records().len(), 2);
    }

    #[test]
    fn load_failure_leaves_collection_empty_with_notice() {
        let mut session = filled_session();
        session.apply_list(Err(api_error()));
        assert!(session.records().is_empty());
        let notice = session.take_notice().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        // Notices are one-shot.
        assert!(session.take_notice().is_none());
    }

    #[test]
    fn create_appends_server_record_and_resets_draft() {
        let mut session = Session::new();
        session.draft_mut().name = "Alien".into();
        session.draft_mut().image = "alien.png".into();
        session.draft_mut().summary = "In space.".into();

        let req = session.begin_submit().unwrap();
        assert!(matches!(req, SubmitReq::Create { .. }));
        assert!(session.is_busy());

        session.finish_submit(Ok(movie("a1", "Alien")));
        assert!(!session.is_busy());
        assert_eq!(session.records().len(), 1);
        assert_eq!(session.records()[0].id, "a1");
        assert!(session.draft().id.is_none());
        assert!(session.draft().name.is_empty());
        assert_eq!(session.take_notice().unwrap().level, NoticeLevel::Success);
    }

    #[test]
    fn submit_with_empty_field_issues_no_request() {
        let mut session = Session::new();
        session.draft_mut().name = "Alien".into();
        // image and summary left empty.
        assert!(session.begin_submit().is_none());
        assert!(!session.is_busy());
        assert_eq!(session.take_notice().unwrap().level, NoticeLevel::Error);
    }

    #[test]
    fn submit_while_in_flight_is_ignored() {
        let mut session = Session::new();
        session.draft_mut().name = "Alien".into();
        session.draft_mut().image = "alien.png".into();
        session.draft_mut().summary = "In space.".into();

        assert!(session.begin_submit().is_some());
        assert!(session.begin_submit().is_none());

        session.finish_submit(Ok(movie("a1", "Alien")));
        assert!(!session.is_busy());
    }

    #[test]
    fn edit_copies_record_into_draft_and_updates_by_id() {
        let mut session = filled_session();
        assert!(session.begin_edit(1));
        assert_eq!(session.take_notice().unwrap().level, NoticeLevel::Info);
        assert_eq!(session.draft().id.as_deref(), Some("b2"));
        assert_eq!(session.draft().name, "Brazil");

        session.draft_mut().name = "Brazil (1985)".into();
        let req = session.begin_submit().unwrap();
        assert!(matches!(req, SubmitReq::Update { ref id, .. } if id == "b2"));

        let mut updated = movie("b2", "Brazil (1985)");
        updated.summary = "About Brazil.".into();
        session.finish_submit(Ok(updated.clone()));

        assert_eq!(session.records().len(), 2);
        assert_eq!(session.records()[1], updated);
        // The other record is untouched.
        assert_eq!(session.records()[0], movie("a1", "Alien"));
    }

    #[test]
    fn failed_submit_keeps_collection_and_draft() {
        let mut session = filled_session();
        session.begin_edit(0);
        session.draft_mut().name = "Aliens".into();

        session.begin_submit().unwrap();
        session.finish_submit(Err(api_error()));

        assert!(!session.is_busy());
        assert_eq!(session.records()[0], movie("a1", "Alien"));
        // Draft survives for correction.
        assert_eq!(session.draft().name, "Aliens");
        let notice = session.take_notice().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.text, "Error saving data");
    }

    #[test]
    fn delete_removes_record_by_id() {
        let mut session = filled_session();
        let id = session.delete_target(0).unwrap();
        assert_eq!(id, "a1");

        session.apply_delete(&id, Ok(()));
        assert_eq!(session.records().len(), 1);
        assert_eq!(session.records()[0].id, "b2");
        assert_eq!(session.take_notice().unwrap().level, NoticeLevel::Success);
    }

    #[test]
    fn failed_delete_leaves_collection_unchanged() {
        let mut session = filled_session();
        let id = session.delete_target(0).unwrap();
        session.apply_delete(&id, Err(api_error()));
        assert_eq!(session.records().len(), 2);
        assert_eq!(session.take_notice().unwrap().level, NoticeLevel::Error);
    }

    #[test]
    fn out_of_range_rows_raise_an_error_notice() {
        let mut session = filled_session();
        assert!(!session.begin_edit(9));
        assert_eq!(session.take_notice().unwrap().level, NoticeLevel::Error);
        assert!(session.delete_target(9).is_none());
    }
}
