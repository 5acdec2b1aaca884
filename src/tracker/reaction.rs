//! The reaction: the synchronous block run once per visibility change.

use std::cell::Cell;

use crate::core::{Direction, TransitionState};
use crate::host::{ElementRef, StateCell};

use super::listeners::CompletionListeners;

/// One-shot policy applied to a tracker's first reaction.
///
/// The self-owned variant re-checks the construction-time visibility
/// snapshot; the shared variant is a bare one-shot guard independent of
/// the visibility value. The asymmetry is load-bearing and the two must
/// not be unified.
pub(crate) enum FirstReaction {
    /// Self-owned handle: when the tracker was constructed hidden and
    /// initial transitions are disabled, the first reaction settles
    /// directly instead of animating a close that was never open.
    SkipWhenMountedHidden {
        ran: Cell<bool>,
        mounted_hidden: bool,
    },
    /// Shared handle: the first reaction settles instantly when initial
    /// transitions are enabled (there is nothing to transition from on
    /// first paint) and never falls through to the steady-state step,
    /// independent of the visibility value.
    SettleOnce { ran: Cell<bool> },
}

/// Shared core of both tracker variants: the element ref, the observable
/// state cell, the listener pairs, and the first-reaction policy.
pub(crate) struct ReactionCore {
    state: StateCell,
    element: ElementRef,
    listeners: CompletionListeners,
    initial_transition: bool,
    first: FirstReaction,
}

impl ReactionCore {
    pub(crate) fn new(
        state: StateCell,
        element: ElementRef,
        initial_transition: bool,
        first: FirstReaction,
    ) -> Self {
        let listeners = CompletionListeners::new(state.clone(), element.downgrade());
        Self {
            state,
            element,
            listeners,
            initial_transition,
            first,
        }
    }

    /// Run one reaction against the current visibility value.
    ///
    /// With no element attached this is a silent no-op; the reaction does
    /// not re-run on its own and the first-reaction marker stays unspent.
    pub(crate) fn react(&self, visible: bool) {
        let Some(element) = self.element.current() else {
            return;
        };

        match &self.first {
            FirstReaction::SkipWhenMountedHidden { ran, mounted_hidden } => {
                if !ran.replace(true) && !self.initial_transition && *mounted_hidden {
                    self.state.set(TransitionState::settled(visible));
                    return;
                }
            }
            FirstReaction::SettleOnce { ran } => {
                if !ran.replace(true) {
                    if self.initial_transition {
                        self.state.set(TransitionState::settled(visible));
                    }
                    return;
                }
            }
        }

        let direction = Direction::of_visibility(visible);
        self.listeners.swap_to(&element, direction);
        self.state.set(direction.in_progress_state());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Element;
    use std::rc::Rc;

    fn core_with(first: FirstReaction, initial_transition: bool) -> (Rc<Element>, ReactionCore) {
        let element = Element::new();
        let element_ref = ElementRef::for_element(Rc::clone(&element));
        let state = StateCell::new(TransitionState::Unmounted);
        let core = ReactionCore::new(state, element_ref, initial_transition, first);
        (element, core)
    }

    #[test]
    fn react_without_element_is_a_silent_no_op() {
        let state = StateCell::new(TransitionState::Unmounted);
        let core = ReactionCore::new(
            state.clone(),
            ElementRef::empty(),
            false,
            FirstReaction::SkipWhenMountedHidden {
                ran: Cell::new(false),
                mounted_hidden: true,
            },
        );

        core.react(true);
        assert_eq!(state.get(), TransitionState::Unmounted);
    }

    #[test]
    fn element_check_precedes_the_first_reaction_marker() {
        let state = StateCell::new(TransitionState::Unmounted);
        let element_ref = ElementRef::empty();
        let core = ReactionCore::new(
            state.clone(),
            element_ref.clone(),
            false,
            FirstReaction::SkipWhenMountedHidden {
                ran: Cell::new(false),
                mounted_hidden: true,
            },
        );

        // No element yet: the marker must survive this call.
        core.react(true);

        element_ref.attach(Element::new());
        core.react(true);
        assert_eq!(state.get(), TransitionState::Entered);
    }

    #[test]
    fn mounted_hidden_skip_settles_without_listeners() {
        let (element, core) = core_with(
            FirstReaction::SkipWhenMountedHidden {
                ran: Cell::new(false),
                mounted_hidden: true,
            },
            false,
        );

        core.react(false);
        assert_eq!(element.listener_count(), 0);
    }

    #[test]
    fn mounted_visible_falls_through_to_steady_state() {
        let (element, core) = core_with(
            FirstReaction::SkipWhenMountedHidden {
                ran: Cell::new(false),
                mounted_hidden: false,
            },
            false,
        );

        core.react(true);
        assert_eq!(element.listener_count(), 2);
    }

    #[test]
    fn initial_transition_overrides_the_hidden_skip() {
        let (element, core) = core_with(
            FirstReaction::SkipWhenMountedHidden {
                ran: Cell::new(false),
                mounted_hidden: true,
            },
            true,
        );

        core.react(false);
        assert_eq!(element.listener_count(), 2);
    }

    #[test]
    fn settle_once_never_falls_through_on_the_first_call() {
        let (element, core) = core_with(FirstReaction::SettleOnce { ran: Cell::new(false) }, false);

        core.react(true);
        assert_eq!(element.listener_count(), 0);

        core.react(false);
        assert_eq!(element.listener_count(), 2);
    }

    #[test]
    fn settle_once_with_initial_transition_settles_immediately() {
        let element = Element::new();
        let element_ref = ElementRef::for_element(Rc::clone(&element));
        let state = StateCell::new(TransitionState::Unmounted);
        let core = ReactionCore::new(
            state.clone(),
            element_ref,
            true,
            FirstReaction::SettleOnce { ran: Cell::new(false) },
        );

        core.react(true);
        assert_eq!(state.get(), TransitionState::Entered);
        assert_eq!(element.listener_count(), 0);
    }
}
