//! Completion listener bookkeeping.
//!
//! Each logical direction owns one handler registered under both
//! completion kinds, so the pair is always attached and detached as a
//! unit. At most one pair is on the element at any time: swapping to a
//! direction detaches the opposite pair before attaching its own.

use std::rc::Rc;

use crate::core::{CompletionEvent, CompletionKind, Direction};
use crate::host::{Element, ListenerFn, ListenerToken, StateCell, WeakElementRef};

/// One logical completion handler spanning both completion kinds.
struct ListenerPair {
    token: ListenerToken,
    callback: ListenerFn,
}

impl ListenerPair {
    fn new(direction: Direction, state: StateCell, observed: WeakElementRef) -> Self {
        let settled = direction.settled_state();
        let callback: ListenerFn = Rc::new(move |event: &CompletionEvent| {
            // Strict identity: only completions on the element the ref
            // currently points at count. Bubbled or stale-target events
            // fall through silently.
            if observed.id() == Some(event.target) {
                state.set(settled);
            }
        });
        Self {
            token: ListenerToken::allocate(),
            callback,
        }
    }

    fn attach(&self, element: &Element) {
        for kind in CompletionKind::ALL {
            element.add_listener(kind, self.token, Rc::clone(&self.callback));
        }
    }

    fn detach(&self, element: &Element) {
        for kind in CompletionKind::ALL {
            element.remove_listener(kind, self.token);
        }
    }
}

/// Both directional handler pairs of one tracker.
pub(crate) struct CompletionListeners {
    enter: ListenerPair,
    leave: ListenerPair,
}

impl CompletionListeners {
    pub(crate) fn new(state: StateCell, observed: WeakElementRef) -> Self {
        Self {
            enter: ListenerPair::new(Direction::Enter, state.clone(), observed.clone()),
            leave: ListenerPair::new(Direction::Leave, state, observed),
        }
    }

    /// Detach the opposite direction's pair, then attach `direction`'s.
    ///
    /// Detach runs first so an in-flight completion for the old direction
    /// finds its handler gone.
    pub(crate) fn swap_to(&self, element: &Element, direction: Direction) {
        let (stale, fresh) = match direction {
            Direction::Enter => (&self.leave, &self.enter),
            Direction::Leave => (&self.enter, &self.leave),
        };
        stale.detach(element);
        fresh.attach(element);
    }
}
