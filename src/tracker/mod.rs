//! The transition tracker: a finite state machine mirroring the lifecycle
//! of a visual transition driven by a boolean visibility signal.
//!
//! A tracker reacts to each distinct value of its [`VisibilitySignal`] by
//! swapping completion listeners on the observed element and moving into
//! an in-progress state; the host's completion events settle it. Two entry
//! points exist, sharing the steady-state logic but differing in how the
//! very first reaction is handled:
//!
//! - [`TransitionTracker::new`] owns its [`ElementRef`] and starts
//!   `Unmounted`. When constructed hidden with initial transitions
//!   disabled, the first reaction settles directly instead of running a
//!   spurious closing animation.
//! - [`TransitionTracker::with_element_ref`] borrows a caller-owned ref
//!   and computes its initial state synchronously at construction; its
//!   first reaction settles instantly and never animates.

mod listeners;
mod reaction;

use std::cell::Cell;
use std::rc::Rc;

use crate::core::{TransitionLog, TransitionState};
use crate::host::{ElementRef, StateCell, VisibilitySignal};

use reaction::{FirstReaction, ReactionCore};

/// State machine tracking one element's transition lifecycle.
///
/// # Example
///
/// ```rust
/// use presence::{CompletionKind, Element, TransitionState, TransitionTracker, VisibilitySignal};
///
/// let visible = VisibilitySignal::new(true);
/// let tracker = TransitionTracker::new(&visible, false);
///
/// let element = Element::new();
/// tracker.element_ref().attach(element.clone());
/// tracker.mount();
///
/// // Constructed visible, so the first reaction animates in.
/// assert_eq!(tracker.state(), TransitionState::Entering);
///
/// element.fire(CompletionKind::TransitionEnd);
/// assert_eq!(tracker.state(), TransitionState::Entered);
///
/// visible.set(false);
/// assert_eq!(tracker.state(), TransitionState::Exiting);
/// ```
pub struct TransitionTracker {
    core: Rc<ReactionCore>,
    signal: VisibilitySignal,
    element: ElementRef,
    state: StateCell,
    mounted: Cell<bool>,
}

impl TransitionTracker {
    /// Create a tracker owning its element ref (which starts empty).
    ///
    /// State begins as [`TransitionState::Unmounted`]. The signal's value
    /// at construction is snapshotted: when it was `false` and
    /// `initial_transition` is disabled, the first reaction settles
    /// directly with no listeners attached.
    pub fn new(visible: &VisibilitySignal, initial_transition: bool) -> Self {
        let first = FirstReaction::SkipWhenMountedHidden {
            ran: Cell::new(false),
            mounted_hidden: !visible.get(),
        };
        Self::build(
            StateCell::new(TransitionState::Unmounted),
            ElementRef::empty(),
            visible,
            initial_transition,
            first,
        )
    }

    /// Create a tracker observing a caller-owned element ref.
    ///
    /// The initial state is computed synchronously: with
    /// `initial_transition` disabled it is already settled to match the
    /// signal; with it enabled the tracker starts `Unmounted` and the
    /// first reaction settles it instantly.
    pub fn with_element_ref(
        element: ElementRef,
        visible: &VisibilitySignal,
        initial_transition: bool,
    ) -> Self {
        let initial = if initial_transition {
            TransitionState::Unmounted
        } else {
            TransitionState::settled(visible.get())
        };
        Self::build(
            StateCell::new(initial),
            element,
            visible,
            initial_transition,
            FirstReaction::SettleOnce {
                ran: Cell::new(false),
            },
        )
    }

    fn build(
        state: StateCell,
        element: ElementRef,
        visible: &VisibilitySignal,
        initial_transition: bool,
        first: FirstReaction,
    ) -> Self {
        let core = Rc::new(ReactionCore::new(
            state.clone(),
            element.clone(),
            initial_transition,
            first,
        ));

        let reaction = Rc::clone(&core);
        visible.on_change(move |value| reaction.react(value));

        Self {
            core,
            signal: visible.clone(),
            element,
            state,
            mounted: Cell::new(false),
        }
    }

    /// Run the initial reaction against the signal's current value.
    ///
    /// This models the host's first effect invocation and should be called
    /// after the element is attached; with no element attached it is a
    /// silent no-op and will not re-run on its own. Only the first call
    /// does anything; subsequent reactions come exclusively from signal
    /// changes.
    pub fn mount(&self) {
        if self.mounted.replace(true) {
            return;
        }
        self.core.react(self.signal.get());
    }

    /// The current transition state.
    pub fn state(&self) -> TransitionState {
        self.state.get()
    }

    /// A handle to the observable state cell, for hosts that re-render on
    /// change.
    pub fn state_cell(&self) -> StateCell {
        self.state.clone()
    }

    /// The element ref this tracker observes. For trackers created with
    /// [`TransitionTracker::new`] the host attaches the rendered element
    /// here.
    pub fn element_ref(&self) -> ElementRef {
        self.element.clone()
    }

    /// A snapshot of every state change observed so far.
    pub fn log(&self) -> TransitionLog {
        self.state.log()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CompletionKind;
    use crate::host::Element;

    #[test]
    fn owned_tracker_starts_unmounted_with_an_empty_ref() {
        let visible = VisibilitySignal::new(false);
        let tracker = TransitionTracker::new(&visible, false);

        assert_eq!(tracker.state(), TransitionState::Unmounted);
        assert!(!tracker.element_ref().is_attached());
    }

    #[test]
    fn mount_is_idempotent() {
        let visible = VisibilitySignal::new(true);
        let tracker = TransitionTracker::new(&visible, false);
        let element = Element::new();
        tracker.element_ref().attach(element.clone());

        tracker.mount();
        assert_eq!(tracker.state(), TransitionState::Entering);

        element.fire(CompletionKind::TransitionEnd);
        assert_eq!(tracker.state(), TransitionState::Entered);

        // A second mount must not restart the enter transition.
        tracker.mount();
        assert_eq!(tracker.state(), TransitionState::Entered);
    }

    #[test]
    fn signal_changes_drive_reactions_without_mount() {
        // Reactions fire on dependency changes and on nothing else; mount
        // is just the explicit first invocation.
        let visible = VisibilitySignal::new(false);
        let tracker = TransitionTracker::new(&visible, true);
        tracker.element_ref().attach(Element::new());

        visible.set(true);
        assert_eq!(tracker.state(), TransitionState::Entering);
    }

    #[test]
    fn shared_tracker_initial_state_follows_the_flag() {
        let shown = VisibilitySignal::new(true);
        let hidden = VisibilitySignal::new(false);

        let settled_shown =
            TransitionTracker::with_element_ref(ElementRef::empty(), &shown, false);
        assert_eq!(settled_shown.state(), TransitionState::Entered);

        let settled_hidden =
            TransitionTracker::with_element_ref(ElementRef::empty(), &hidden, false);
        assert_eq!(settled_hidden.state(), TransitionState::Exited);

        let animated = TransitionTracker::with_element_ref(ElementRef::empty(), &shown, true);
        assert_eq!(animated.state(), TransitionState::Unmounted);
    }

    #[test]
    fn log_records_the_observed_lifecycle() {
        let visible = VisibilitySignal::new(true);
        let tracker = TransitionTracker::new(&visible, false);
        let element = Element::new();
        tracker.element_ref().attach(element.clone());

        tracker.mount();
        element.fire(CompletionKind::AnimationEnd);
        visible.set(false);
        element.fire(CompletionKind::TransitionEnd);

        assert_eq!(
            tracker.log().path(),
            vec![
                TransitionState::Unmounted,
                TransitionState::Entering,
                TransitionState::Entered,
                TransitionState::Exiting,
                TransitionState::Exited,
            ]
        );
    }
}
