//! Presence: a visibility-driven transition state tracker
//!
//! Presence mirrors the lifecycle of a visual transition (the CSS
//! transition/animation kind) as a small finite state machine driven by a
//! boolean visibility flag. The pure core (states, directions, events,
//! and the change log) carries no side effects; the imperative shell
//! supplies the host-side collaborators: an element with a completion
//! listener registry, a possibly-empty element ref, a tracked visibility
//! signal, and an observable state cell.
//!
//! # Core Concepts
//!
//! - **TransitionState**: one of five lifecycle states; the tracker's sole
//!   observable output
//! - **Reaction**: the synchronous block run once per distinct visibility
//!   change, swapping listener pairs and entering an in-progress state
//! - **Completion**: a `transitionend`/`animationend`-style host event
//!   that settles an in-progress state, filtered by strict element
//!   identity
//!
//! # Example
//!
//! ```rust
//! use presence::{CompletionKind, Element, TransitionState, TransitionTracker, VisibilitySignal};
//!
//! let visible = VisibilitySignal::new(false);
//! let tracker = TransitionTracker::new(&visible, false);
//!
//! let element = Element::new();
//! tracker.element_ref().attach(element.clone());
//! tracker.mount();
//!
//! // Mounted hidden: settles directly, no closing animation.
//! assert_eq!(tracker.state(), TransitionState::Exited);
//!
//! visible.set(true);
//! assert_eq!(tracker.state(), TransitionState::Entering);
//!
//! element.fire(CompletionKind::TransitionEnd);
//! assert_eq!(tracker.state(), TransitionState::Entered);
//! ```
//!
//! Everything runs on a single thread: reactions execute synchronously
//! when the signal changes, and completion events are delivered by the
//! host whenever it sees fit. There is no timeout: without a completion
//! event a tracker stays in-progress indefinitely.

pub mod builder;
pub mod core;
pub mod host;
pub mod tracker;

// Re-export commonly used types
pub use builder::{BuildError, TrackerBuilder};
pub use core::{
    CompletionEvent, CompletionKind, Direction, ElementId, StateChange, TransitionLog,
    TransitionState,
};
pub use host::{Element, ElementRef, ListenerFn, ListenerToken, StateCell, VisibilitySignal};
pub use tracker::TransitionTracker;
