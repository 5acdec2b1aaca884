//! Observable state holder.
//!
//! A [`StateCell`] plays the host's re-render role: the tracker writes the
//! current [`TransitionState`] into it, and the host observes the value
//! either by polling [`StateCell::get`] or by registering a watcher.
//! Writing an unchanged value is a no-op, so watchers fire exactly once
//! per effective change.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::core::{StateChange, TransitionLog, TransitionState};
use chrono::Utc;

type WatchFn = Rc<dyn Fn(TransitionState)>;

struct CellInner {
    value: TransitionState,
    log: TransitionLog,
    watchers: Vec<WatchFn>,
}

/// Shared observable [`TransitionState`] cell.
///
/// Clones share one slot. Every effective change is appended to the cell's
/// [`TransitionLog`] before watchers run.
///
/// # Example
///
/// ```rust
/// use presence::{StateCell, TransitionState};
///
/// let cell = StateCell::new(TransitionState::Unmounted);
/// cell.set(TransitionState::Entering);
/// cell.set(TransitionState::Entering); // no-op
/// cell.set(TransitionState::Entered);
///
/// assert_eq!(cell.get(), TransitionState::Entered);
/// assert_eq!(cell.log().len(), 2);
/// ```
#[derive(Clone)]
pub struct StateCell {
    inner: Rc<RefCell<CellInner>>,
}

impl StateCell {
    /// Create a cell holding `initial`. The initial value is not logged.
    pub fn new(initial: TransitionState) -> Self {
        Self {
            inner: Rc::new(RefCell::new(CellInner {
                value: initial,
                log: TransitionLog::new(),
                watchers: Vec::new(),
            })),
        }
    }

    /// The current state.
    pub fn get(&self) -> TransitionState {
        self.inner.borrow().value
    }

    /// Write a state. When it differs from the current one, the change is
    /// logged and watchers run over a pre-change snapshot; otherwise
    /// nothing happens.
    pub fn set(&self, next: TransitionState) {
        let snapshot = {
            let mut inner = self.inner.borrow_mut();
            if inner.value == next {
                return;
            }
            inner.log = inner.log.record(StateChange {
                from: inner.value,
                to: next,
                timestamp: Utc::now(),
            });
            inner.value = next;
            inner.watchers.clone()
        };

        for watcher in snapshot {
            watcher(next);
        }
    }

    /// Register a watcher invoked on every effective change.
    pub fn watch<F>(&self, watcher: F)
    where
        F: Fn(TransitionState) + 'static,
    {
        self.inner.borrow_mut().watchers.push(Rc::new(watcher));
    }

    /// A snapshot of the change log.
    pub fn log(&self) -> TransitionLog {
        self.inner.borrow().log.clone()
    }
}

impl fmt::Debug for StateCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("StateCell")
            .field("value", &inner.value)
            .field("changes", &inner.log.len())
            .field("watchers", &inner.watchers.len())
            .finish()
    }
}
