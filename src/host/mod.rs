//! Imperative shell: the host-side collaborators a tracker plugs into.
//!
//! These types stand in for what a UI runtime would normally provide: a
//! rendered element with an event listener registry ([`Element`]), a
//! possibly-empty handle to it ([`ElementRef`]), the tracked visibility
//! dependency ([`VisibilitySignal`]), and the observable state slot the
//! host re-renders from ([`StateCell`]).
//!
//! Everything here is single-threaded by design: handles are `Rc`-based
//! and callbacks run synchronously on the caller's stack.

mod cell;
mod element;
mod signal;

pub use cell::StateCell;
pub use element::{Element, ElementRef, ListenerFn, ListenerToken, WeakElementRef};
pub use signal::VisibilitySignal;
