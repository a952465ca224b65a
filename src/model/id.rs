use std::fmt;

use chrono::{DateTime, Utc};

/// Identifier of a submitted [`Record`](super::Record).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(u64);

impl RecordId {
    /// Returns the raw value (milliseconds since the Unix epoch, possibly bumped).
    pub fn get(&self) -> u64 {
        self.0
    }
}

#[mutants::skip]
impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out time-derived record identifiers.
///
/// Each id is the submission time in epoch milliseconds, or one more than the
/// previous id if the clock has not advanced, so ids are strictly increasing
/// for the lifetime of the generator.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: Option<u64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for a record created at `now`.
    pub fn next_id(&mut self, now: DateTime<Utc>) -> RecordId {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = match self.last {
            Some(last) if millis <= last => last + 1,
            _ => millis,
        };
        self.last = Some(id);
        RecordId(id)
    }
}
