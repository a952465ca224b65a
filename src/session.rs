//! The submission flow: one pending form, one feed, and the step that moves
//! answers from the former into the latter.

use chrono::{DateTime, Utc};

use crate::model::{FeedStore, FormModel, IdGenerator, RecordId, ValidationError};

/// Where the session is in the submit cycle.
///
/// `Submitting` only exists while [`Session::submit`] runs; callers always
/// observe `Editing` between events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
}

/// Errors returned when a submission is refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// One or more required answers are missing. Nothing was changed.
    #[error("{} required field(s) missing", .0.len())]
    Invalid(Vec<ValidationError>),
}

/// State for one running survey session. Nothing outlives it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    form: FormModel,
    feed: FeedStore,
    ids: IdGenerator,
    phase: Phase,
}

impl Session {
    /// Creates a session with an empty form and an empty feed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Submits the pending answers using the current wall-clock time.
    pub fn submit(&mut self) -> Result<RecordId, SubmitError> {
        self.submit_at(Utc::now())
    }

    /// Submits the pending answers as of `now`.
    ///
    /// On success the record is at the front of the feed and the form is
    /// empty. On failure neither the feed nor the form is touched.
    pub fn submit_at(&mut self, now: DateTime<Utc>) -> Result<RecordId, SubmitError> {
        self.phase = Phase::Submitting;
        let result = self.commit(now);
        self.phase = Phase::Editing;
        match &result {
            Ok(id) => tracing::info!(record_id = %id, feed_len = self.feed.len(), "survey submitted"),
            Err(SubmitError::Invalid(errors)) => {
                tracing::debug!(missing = errors.len(), "submission refused")
            }
        }
        result
    }

    fn commit(&mut self, now: DateTime<Utc>) -> Result<RecordId, SubmitError> {
        let errors = self.form.validate();
        if !errors.is_empty() {
            return Err(SubmitError::Invalid(errors));
        }
        // Validation passed, so this only fails if the two checks disagree.
        let id = self.ids.next_id(now);
        let record = self
            .form
            .to_record(id, now)
            .map_err(|e| SubmitError::Invalid(vec![e]))?;
        self.feed.insert_front(record);
        self.form.reset();
        Ok(id)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn form(&self) -> &FormModel {
        &self.form
    }

    /// Mutable access for field edits.
    pub fn form_mut(&mut self) -> &mut FormModel {
        &mut self.form
    }

    pub fn feed(&self) -> &FeedStore {
        &self.feed
    }
}
