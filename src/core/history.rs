//! Computation history tracking.
//!
//! The log keeps every successful evaluation of a session, newest first.
//! Only the most recent [`VISIBLE_HISTORY_LIMIT`] entries are ever shown.

use super::evaluator::EvaluationRequest;
use super::operation::Operation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of entries returned by [`HistoryLog::visible`].
pub const VISIBLE_HISTORY_LIMIT: usize = 20;

/// Record of a single successful evaluation.
///
/// Entries are immutable values: fields are read through accessors only.
///
/// # Example
///
/// ```rust
/// use calcbook::core::{HistoryEntry, Operation};
///
/// let entry = HistoryEntry::new(Operation::Add, 2.0, Some(3.0), 5.0);
/// assert_eq!(entry.operation_label(), "Addition (a + b)");
/// assert_eq!(entry.result(), 5.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    operation: Operation,
    operand_a: f64,
    operand_b: Option<f64>,
    result: f64,
    recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time.
    pub fn new(operation: Operation, operand_a: f64, operand_b: Option<f64>, result: f64) -> Self {
        Self {
            operation,
            operand_a,
            operand_b,
            result,
            recorded_at: Utc::now(),
        }
    }

    /// Create an entry for a request that evaluated to `result`.
    pub fn from_evaluation(request: &EvaluationRequest, result: f64) -> Self {
        Self::new(
            request.operation(),
            request.operand_a(),
            request.operand_b(),
            result,
        )
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn operation_label(&self) -> &'static str {
        self.operation.label()
    }

    pub fn operand_a(&self) -> f64 {
        self.operand_a
    }

    pub fn operand_b(&self) -> Option<f64> {
        self.operand_b
    }

    pub fn result(&self) -> f64 {
        self.result
    }

    /// When the evaluation was recorded
    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

/// Newest-first log of successful evaluations.
///
/// The log is owned by the calling session and only grows: there is no
/// update, eviction or deduplication.
///
/// # Example
///
/// ```rust
/// use calcbook::core::{HistoryEntry, HistoryLog, Operation};
///
/// let mut history = HistoryLog::new();
/// history.record(HistoryEntry::new(Operation::Add, 1.0, Some(1.0), 2.0));
/// history.record(HistoryEntry::new(Operation::SquareRoot, 9.0, None, 3.0));
///
/// let results: Vec<f64> = history.visible().map(|entry| entry.result()).collect();
/// assert_eq!(results, vec![3.0, 2.0]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
}

impl HistoryLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Prepend an entry, making it the most recent.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
    }

    /// The most recent entries, newest first, capped at
    /// [`VISIBLE_HISTORY_LIMIT`].
    ///
    /// The returned iterator is lazy and can be cloned to restart it.
    /// Calling this never changes the log.
    pub fn visible(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> + Clone + '_ {
        self.entries.iter().take(VISIBLE_HISTORY_LIMIT)
    }

    /// Every recorded entry, newest first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> + Clone + '_ {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// JSON array of the visible entries.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let visible: Vec<&HistoryEntry> = self.visible().collect();
        serde_json::to_string_pretty(&visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(a: f64) -> HistoryEntry {
        HistoryEntry::new(Operation::Add, a, Some(1.0), a + 1.0)
    }

    #[test]
    fn new_history_is_empty() {
        let history = HistoryLog::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert_eq!(history.visible().count(), 0);
        assert!(history.latest().is_none());
    }

    #[test]
    fn record_prepends() {
        let mut history = HistoryLog::new();
        history.record(entry(1.0));
        history.record(entry(2.0));
        history.record(entry(3.0));

        let operands: Vec<f64> = history.visible().map(HistoryEntry::operand_a).collect();
        assert_eq!(operands, vec![3.0, 2.0, 1.0]);
        assert_eq!(history.latest().map(HistoryEntry::operand_a), Some(3.0));
    }

    #[test]
    fn visible_is_capped_but_storage_is_not() {
        let mut history = HistoryLog::new();
        for i in 0..25 {
            history.record(entry(f64::from(i)));
        }

        assert_eq!(history.len(), 25);
        assert_eq!(history.iter().len(), 25);
        assert_eq!(history.visible().len(), VISIBLE_HISTORY_LIMIT);

        let visible: Vec<f64> = history.visible().map(HistoryEntry::operand_a).collect();
        assert_eq!(visible.first(), Some(&24.0));
        assert_eq!(visible.last(), Some(&5.0));
    }

    #[test]
    fn visible_is_restartable() {
        let mut history = HistoryLog::new();
        history.record(entry(1.0));
        history.record(entry(2.0));

        let view = history.visible();
        let first: Vec<_> = view.clone().collect();
        let second: Vec<_> = view.collect();
        assert_eq!(first, second);

        let again: Vec<_> = history.visible().collect();
        assert_eq!(first, again);
    }

    #[test]
    fn entry_from_evaluation_copies_request() {
        let request = EvaluationRequest::new(Operation::SquareRoot, 9.0, Some(4.0)).unwrap();
        let entry = HistoryEntry::from_evaluation(&request, 3.0);

        assert_eq!(entry.operation(), Operation::SquareRoot);
        assert_eq!(entry.operand_a(), 9.0);
        assert_eq!(entry.operand_b(), None);
        assert_eq!(entry.result(), 3.0);
        assert!(entry.recorded_at() <= Utc::now());
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = HistoryLog::new();
        history.record(entry(1.0));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: HistoryLog = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.latest(), history.latest());
    }

    #[test]
    fn json_view_contains_only_visible_entries() {
        let mut history = HistoryLog::new();
        for i in 0..22 {
            history.record(entry(f64::from(i)));
        }

        let json = history.to_json().unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), VISIBLE_HISTORY_LIMIT);
        assert_eq!(parsed[0]["operation"], "add");
        assert_eq!(parsed[0]["operand_a"], 21.0);
    }
}
