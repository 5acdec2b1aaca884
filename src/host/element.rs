//! Elements and element references.
//!
//! An [`Element`] stands in for the host runtime's rendered node: it has a
//! unique identity and a listener registry for completion events. The
//! tracker never owns an element's lifecycle; it only adds and removes its
//! own listeners and reads the element's identity.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::core::{CompletionEvent, CompletionKind, ElementId};

/// Callback invoked when a completion event is dispatched to an element.
pub type ListenerFn = Rc<dyn Fn(&CompletionEvent)>;

thread_local! {
    static NEXT_TOKEN: Cell<u64> = Cell::new(0);
}

/// Stable identity for a registered listener.
///
/// Hosts remove listeners by the token they were added under, the way DOM
/// listeners are removed by callback identity. Re-adding under the same
/// token replaces the existing registration instead of stacking a second
/// one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ListenerToken(u64);

impl ListenerToken {
    /// Mint a fresh token, unique within the current thread.
    pub fn allocate() -> Self {
        NEXT_TOKEN.with(|next| {
            let token = Self(next.get());
            next.set(next.get() + 1);
            token
        })
    }
}

struct ListenerEntry {
    kind: CompletionKind,
    token: ListenerToken,
    callback: ListenerFn,
}

/// A host element observable for completion events.
///
/// # Example
///
/// ```rust
/// use presence::{CompletionKind, Element, ListenerToken};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let element = Element::new();
/// let fired = Rc::new(Cell::new(0));
///
/// let seen = Rc::clone(&fired);
/// let token = ListenerToken::allocate();
/// element.add_listener(
///     CompletionKind::TransitionEnd,
///     token,
///     Rc::new(move |_event| seen.set(seen.get() + 1)),
/// );
///
/// element.fire(CompletionKind::TransitionEnd);
/// assert_eq!(fired.get(), 1);
///
/// element.remove_listener(CompletionKind::TransitionEnd, token);
/// element.fire(CompletionKind::TransitionEnd);
/// assert_eq!(fired.get(), 1);
/// ```
pub struct Element {
    id: ElementId,
    listeners: RefCell<Vec<ListenerEntry>>,
}

impl Element {
    /// Create a fresh element with a unique identity and no listeners.
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            id: ElementId::generate(),
            listeners: RefCell::new(Vec::new()),
        })
    }

    /// The element's identity.
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Register a listener for one completion kind.
    ///
    /// Adding under an already-registered `(kind, token)` replaces the
    /// previous callback.
    pub fn add_listener(&self, kind: CompletionKind, token: ListenerToken, callback: ListenerFn) {
        let mut listeners = self.listeners.borrow_mut();
        if let Some(entry) = listeners
            .iter_mut()
            .find(|entry| entry.kind == kind && entry.token == token)
        {
            entry.callback = callback;
        } else {
            listeners.push(ListenerEntry {
                kind,
                token,
                callback,
            });
        }
    }

    /// Remove a listener. Removing one that was never added is a no-op.
    pub fn remove_listener(&self, kind: CompletionKind, token: ListenerToken) {
        self.listeners
            .borrow_mut()
            .retain(|entry| !(entry.kind == kind && entry.token == token));
    }

    /// Deliver a completion event to every listener of the event's kind.
    ///
    /// The registry is snapshotted before the first callback runs, so
    /// callbacks may add or remove listeners without affecting this
    /// delivery. The event's target may be a different element; listeners
    /// decide whether the event concerns them.
    pub fn dispatch(&self, event: &CompletionEvent) {
        let snapshot: Vec<ListenerFn> = self
            .listeners
            .borrow()
            .iter()
            .filter(|entry| entry.kind == event.kind)
            .map(|entry| Rc::clone(&entry.callback))
            .collect();

        for callback in snapshot {
            callback(event);
        }
    }

    /// Dispatch a completion event of `kind` targeting this element itself.
    pub fn fire(&self, kind: CompletionKind) {
        self.dispatch(&CompletionEvent {
            kind,
            target: self.id,
        });
    }

    /// Total number of registered listeners across all kinds.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Check if any listener is registered for `kind`.
    pub fn has_listeners(&self, kind: CompletionKind) -> bool {
        self.listeners
            .borrow()
            .iter()
            .any(|entry| entry.kind == kind)
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.id)
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Clonable handle to a possibly-absent element.
///
/// A ref starts empty or pre-attached; the host attaches the rendered
/// element when it exists. Clones share the same slot, so attaching
/// through one clone is visible through all of them.
#[derive(Clone, Debug)]
pub struct ElementRef {
    current: Rc<RefCell<Option<Rc<Element>>>>,
}

impl ElementRef {
    /// Create a ref with no element attached.
    pub fn empty() -> Self {
        Self {
            current: Rc::new(RefCell::new(None)),
        }
    }

    /// Create a ref already attached to `element`.
    pub fn for_element(element: Rc<Element>) -> Self {
        Self {
            current: Rc::new(RefCell::new(Some(element))),
        }
    }

    /// Attach an element, replacing any previous one.
    pub fn attach(&self, element: Rc<Element>) {
        *self.current.borrow_mut() = Some(element);
    }

    /// Detach the current element, if any.
    pub fn clear(&self) {
        *self.current.borrow_mut() = None;
    }

    /// The currently attached element, if any.
    pub fn current(&self) -> Option<Rc<Element>> {
        self.current.borrow().clone()
    }

    /// Check if an element is attached.
    pub fn is_attached(&self) -> bool {
        self.current.borrow().is_some()
    }

    /// Identity of the currently attached element, if any.
    pub fn id(&self) -> Option<ElementId> {
        self.current.borrow().as_ref().map(|element| element.id())
    }

    /// Downgrade to a weak handle that does not keep the slot alive.
    ///
    /// Listeners capture weak handles: the element's registry holds the
    /// listener, so a strong handle back to the element would form a cycle.
    pub fn downgrade(&self) -> WeakElementRef {
        WeakElementRef {
            current: Rc::downgrade(&self.current),
        }
    }
}

impl Default for ElementRef {
    fn default() -> Self {
        Self::empty()
    }
}

/// Weak counterpart of [`ElementRef`].
#[derive(Clone, Debug)]
pub struct WeakElementRef {
    current: Weak<RefCell<Option<Rc<Element>>>>,
}

impl WeakElementRef {
    /// Identity of the element the ref currently points at, if the ref is
    /// still alive and attached.
    pub fn id(&self) -> Option<ElementId> {
        let slot = self.current.upgrade()?;
        let id = slot.borrow().as_ref().map(|element| element.id());
        id
    }
}
