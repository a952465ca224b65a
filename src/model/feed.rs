use super::record::Record;

/// Accepted submissions, newest first.
///
/// The store only grows; records are never edited or removed.
#[derive(Debug, Clone, Default)]
pub struct FeedStore {
    records: Vec<Record>,
}

impl FeedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts `record` at the front of the feed.
    pub fn insert_front(&mut self, record: Record) {
        self.records.insert(0, record);
    }

    /// Returns every record, newest first.
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    /// Returns the most recently inserted record, if any.
    pub fn latest(&self) -> Option<&Record> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
