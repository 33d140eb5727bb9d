use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::model::record::AssessmentRecord;
use crate::scoring::aggregator::ScoringSession;
use crate::store::{KeyValueStore, StoreError};

pub const HISTORY_KEY: &str = "seqeval.history";

/// Assessment records kept newest first under a single key.
#[derive(Debug)]
pub struct HistoryStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> HistoryStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, HISTORY_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads the history. A value that is not a JSON array is dropped from the
    /// store and an empty history is returned; unreadable entries inside a
    /// valid array are skipped and left in place.
    pub fn load(&mut self) -> Result<Vec<AssessmentRecord>, StoreError> {
        let mut records = Vec::new();
        for (position, item) in self.load_raw()?.into_iter().enumerate() {
            match serde_json::from_value::<AssessmentRecord>(item) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(position, error = %e, "skipping unreadable history record");
                }
            }
        }
        Ok(records)
    }

    pub fn append(&mut self, record: AssessmentRecord) -> Result<(), StoreError> {
        let mut items = self.load_raw()?;
        items.insert(0, serde_json::to_value(&record)?);
        let body = serde_json::to_string(&items)?;
        self.store.set(&self.key, body)
    }

    /// Snapshots the session into a new record and stores it.
    pub fn save_session(
        &mut self,
        label: &str,
        session: &ScoringSession,
        now: DateTime<Utc>,
    ) -> Result<AssessmentRecord, StoreError> {
        let records = self.load()?;
        let newest = records.iter().map(AssessmentRecord::id).max();
        let id = next_id(now.timestamp_millis(), newest);
        let record = AssessmentRecord::new(
            id,
            label,
            now,
            *session.ratings(),
            session.overall_score(),
        );
        self.append(record.clone())?;
        tracing::info!(id, label, total = record.total(), "assessment saved");
        Ok(record)
    }

    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.store.remove(&self.key)
    }

    fn load_raw(&mut self) -> Result<Vec<Value>, StoreError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(items) => Ok(items),
            Err(e) => {
                tracing::warn!(
                    key = %self.key,
                    error = %e,
                    "stored history is corrupted; discarding it"
                );
                self.store.remove(&self.key)?;
                Ok(Vec::new())
            }
        }
    }
}

/// Millisecond timestamp, bumped past the newest stored id so ids stay unique.
fn next_id(now_millis: i64, newest: Option<i64>) -> i64 {
    match newest {
        Some(id) if id >= now_millis => id + 1,
        _ => now_millis,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/store/history.rs"]
mod tests;
