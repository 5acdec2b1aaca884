//! The tracked visibility dependency.
//!
//! A [`VisibilitySignal`] is the single dependency a tracker reacts to.
//! Subscribers run synchronously inside [`VisibilitySignal::set`], exactly
//! once per distinct value; writing the current value again notifies
//! nobody.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type ChangeFn = Rc<dyn Fn(bool)>;

struct SignalInner {
    value: bool,
    subscribers: Vec<ChangeFn>,
}

/// A boolean signal with on-change subscriptions.
///
/// # Example
///
/// ```rust
/// use presence::VisibilitySignal;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let visible = VisibilitySignal::new(false);
/// let changes = Rc::new(Cell::new(0));
///
/// let seen = Rc::clone(&changes);
/// visible.on_change(move |_value| seen.set(seen.get() + 1));
///
/// visible.set(true);
/// visible.set(true); // unchanged, nobody notified
/// visible.set(false);
///
/// assert_eq!(changes.get(), 2);
/// ```
#[derive(Clone)]
pub struct VisibilitySignal {
    inner: Rc<RefCell<SignalInner>>,
}

impl VisibilitySignal {
    /// Create a signal holding `initial`.
    pub fn new(initial: bool) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SignalInner {
                value: initial,
                subscribers: Vec::new(),
            })),
        }
    }

    /// The current value.
    pub fn get(&self) -> bool {
        self.inner.borrow().value
    }

    /// Write a value, notifying subscribers when it differs from the
    /// current one.
    ///
    /// Subscribers are notified over a snapshot taken before the first
    /// callback runs; a subscription added from inside a callback first
    /// fires on the next change.
    pub fn set(&self, value: bool) {
        let snapshot = {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value;
            inner.subscribers.clone()
        };

        for subscriber in snapshot {
            subscriber(value);
        }
    }

    /// Subscribe to value changes. The callback does not run for the
    /// current value, only for subsequent distinct writes.
    pub fn on_change<F>(&self, subscriber: F)
    where
        F: Fn(bool) + 'static,
    {
        self.inner
            .borrow_mut()
            .subscribers
            .push(Rc::new(subscriber));
    }
}

impl fmt::Debug for VisibilitySignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("VisibilitySignal")
            .field("value", &inner.value)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}
