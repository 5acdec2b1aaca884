//! Observed state-change log.
//!
//! Every change a tracker applies to its state cell is recorded as an
//! immutable `StateChange`. The log is a value: `record` returns a new log
//! rather than mutating in place.

use super::state::TransitionState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single observed state change.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct StateChange {
    /// The state being changed from.
    pub from: TransitionState,
    /// The state being changed to.
    pub to: TransitionState,
    /// When the change was applied.
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of state changes.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use presence::{StateChange, TransitionLog, TransitionState};
///
/// let log = TransitionLog::new();
/// let log = log.record(StateChange {
///     from: TransitionState::Unmounted,
///     to: TransitionState::Entering,
///     timestamp: Utc::now(),
/// });
/// let log = log.record(StateChange {
///     from: TransitionState::Entering,
///     to: TransitionState::Entered,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(
///     log.path(),
///     vec![
///         TransitionState::Unmounted,
///         TransitionState::Entering,
///         TransitionState::Entered,
///     ]
/// );
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransitionLog {
    changes: Vec<StateChange>,
}

impl TransitionLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
        }
    }

    /// Record a change, returning a new log.
    ///
    /// The existing log is left untouched.
    pub fn record(&self, change: StateChange) -> Self {
        let mut changes = self.changes.clone();
        changes.push(change);
        Self { changes }
    }

    /// The sequence of states traversed: the first change's origin, then
    /// every change's destination. Empty when nothing was recorded.
    pub fn path(&self) -> Vec<TransitionState> {
        let mut path = Vec::new();
        if let Some(first) = self.changes.first() {
            path.push(first.from);
        }
        for change in &self.changes {
            path.push(change.to);
        }
        path
    }

    /// Elapsed time between the first and last recorded change.
    ///
    /// Returns `None` when the log is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.changes.first(), self.changes.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All recorded changes, in order.
    pub fn changes(&self) -> &[StateChange] {
        &self.changes
    }

    /// The most recent change, if any.
    pub fn last(&self) -> Option<&StateChange> {
        self.changes.last()
    }

    /// Number of recorded changes.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}
