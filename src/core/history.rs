//! Dispatch history tracking.
//!
//! A bounded, ordered log of the state transitions a store has applied.
//! Useful for debugging and for asserting on the path a store took.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::num::NonZeroUsize;
use std::time::Duration;

/// Record of a single applied dispatch.
///
/// # Example
///
/// ```rust
/// use tally::core::DispatchRecord;
/// use chrono::Utc;
///
/// let record = DispatchRecord {
///     sequence: 1,
///     action: "INCREMENT".to_string(),
///     from: 0i64,
///     to: 1i64,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.action, "INCREMENT");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct DispatchRecord<S: State> {
    /// Position of this dispatch in the store's lifetime, starting at 1
    pub sequence: u64,
    /// Kind of the action that was dispatched
    pub action: String,
    /// State before the reducer ran
    pub from: S,
    /// State the reducer returned
    pub to: S,
    /// When the new state was committed
    pub timestamp: DateTime<Utc>,
}

/// Bounded history of dispatches, oldest first.
///
/// Recording beyond `capacity` evicts the oldest record.
///
/// # Example
///
/// ```rust
/// use tally::core::{DispatchHistory, DispatchRecord};
/// use chrono::Utc;
/// use std::num::NonZeroUsize;
///
/// let mut history = DispatchHistory::new(NonZeroUsize::new(2).unwrap());
///
/// for (sequence, (from, to)) in [(0i64, 1i64), (1, 2), (2, 3)].into_iter().enumerate() {
///     history.record(DispatchRecord {
///         sequence: sequence as u64 + 1,
///         action: "INCREMENT".to_string(),
///         from,
///         to,
///         timestamp: Utc::now(),
///     });
/// }
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.get_path(), vec![&1, &2, &3]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct DispatchHistory<S: State> {
    capacity: NonZeroUsize,
    records: VecDeque<DispatchRecord<S>>,
}

impl<S: State> DispatchHistory<S> {
    /// Create an empty history holding at most `capacity` records.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            capacity,
            records: VecDeque::with_capacity(capacity.get()),
        }
    }

    /// Append a record, evicting the oldest one when full.
    pub fn record(&mut self, record: DispatchRecord<S>) {
        if self.records.len() == self.capacity.get() {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    /// Get the path of states traversed by the retained records.
    ///
    /// Returns the `from` state of the oldest record followed by the `to`
    /// state of every record.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.front() {
            path.push(&first.from);
        }
        path.extend(self.records.iter().map(|record| &record.to));
        path
    }

    /// Time between the oldest and newest retained record.
    ///
    /// Returns `None` when the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.front()?, self.records.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Retained records, oldest first.
    pub fn records(&self) -> impl Iterator<Item = &DispatchRecord<S>> {
        self.records.iter()
    }

    /// Most recent record, if any.
    pub fn last(&self) -> Option<&DispatchRecord<S>> {
        self.records.back()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capacity(records: usize) -> NonZeroUsize {
        NonZeroUsize::new(records).unwrap()
    }

    fn record(sequence: u64, from: i64, to: i64) -> DispatchRecord<i64> {
        DispatchRecord {
            sequence,
            action: "STEP".to_string(),
            from,
            to,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: DispatchHistory<i64> = DispatchHistory::new(capacity(4));
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn capacity_one_keeps_only_latest() {
        let mut history = DispatchHistory::new(capacity(1));
        assert_eq!(history.capacity(), 1);

        history.record(record(1, 0, 1));
        history.record(record(2, 1, 2));
        assert_eq!(history.len(), 1);
        assert_eq!(history.last().map(|r| r.sequence), Some(2));
    }

    #[test]
    fn zero_capacity_does_not_deserialize() {
        let result =
            serde_json::from_str::<DispatchHistory<i64>>(r#"{"capacity":0,"records":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let mut history = DispatchHistory::new(capacity(8));
        history.record(record(1, 0, 1));
        history.record(record(2, 1, 0));
        history.record(record(3, 0, -1));

        assert_eq!(history.get_path(), vec![&0, &1, &0, &-1]);
    }

    #[test]
    fn oldest_records_are_evicted() {
        let mut history = DispatchHistory::new(capacity(2));
        history.record(record(1, 0, 1));
        history.record(record(2, 1, 2));
        history.record(record(3, 2, 3));

        let sequences: Vec<u64> = history.records().map(|r| r.sequence).collect();
        assert_eq!(sequences, vec![2, 3]);
        assert_eq!(history.get_path(), vec![&1, &2, &3]);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let mut history = DispatchHistory::new(capacity(4));
        history.record(record(1, 0, 1));

        std::thread::sleep(Duration::from_millis(10));

        history.record(record(2, 1, 2));

        let duration = history.duration().unwrap();
        assert!(duration >= Duration::from_millis(10));
    }

    #[test]
    fn single_record_has_duration_zero() {
        let mut history = DispatchHistory::new(capacity(4));
        history.record(record(1, 0, 1));
        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = DispatchHistory::new(capacity(4));
        history.record(record(1, 0, 1));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: DispatchHistory<i64> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.capacity(), 4);
        assert_eq!(deserialized.get_path(), vec![&0, &1]);
    }
}
