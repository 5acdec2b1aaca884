//! The discrete lifecycle states of a visibility-driven transition.
//!
//! A transition is always in exactly one of five states. `Entered` and
//! `Exited` are settled; `Entering` and `Exiting` are in progress and
//! advance only when the host delivers a completion event.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a tracked transition.
///
/// This is the sole externally observable output of a tracker. States are
/// plain values: comparing, copying, and serializing them has no side
/// effects.
///
/// # Example
///
/// ```rust
/// use presence::TransitionState;
///
/// let state = TransitionState::Entering;
/// assert!(state.is_in_progress());
/// assert!(!state.is_settled());
/// assert_eq!(state.name(), "entering");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionState {
    /// No reaction has been observed yet.
    Unmounted,
    /// Hidden, with no transition pending.
    Exited,
    /// Becoming visible, awaiting a completion event.
    Entering,
    /// Visible, with no transition pending.
    Entered,
    /// Becoming hidden, awaiting a completion event.
    Exiting,
}

impl TransitionState {
    /// Get the state's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unmounted => "unmounted",
            Self::Exited => "exited",
            Self::Entering => "entering",
            Self::Entered => "entered",
            Self::Exiting => "exiting",
        }
    }

    /// Check if this state is settled (no pending transition).
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Entered | Self::Exited)
    }

    /// Check if this state is awaiting a completion event.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Self::Entering | Self::Exiting)
    }

    /// The settled state matching a visibility value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use presence::TransitionState;
    ///
    /// assert_eq!(TransitionState::settled(true), TransitionState::Entered);
    /// assert_eq!(TransitionState::settled(false), TransitionState::Exited);
    /// ```
    pub fn settled(visible: bool) -> Self {
        if visible {
            Self::Entered
        } else {
            Self::Exited
        }
    }
}

impl fmt::Display for TransitionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_returns_lowercase_identifier() {
        assert_eq!(TransitionState::Unmounted.name(), "unmounted");
        assert_eq!(TransitionState::Exited.name(), "exited");
        assert_eq!(TransitionState::Entering.name(), "entering");
        assert_eq!(TransitionState::Entered.name(), "entered");
        assert_eq!(TransitionState::Exiting.name(), "exiting");
    }

    #[test]
    fn settled_and_in_progress_partition_the_transition_states() {
        assert!(TransitionState::Entered.is_settled());
        assert!(TransitionState::Exited.is_settled());
        assert!(!TransitionState::Entering.is_settled());
        assert!(!TransitionState::Exiting.is_settled());

        assert!(TransitionState::Entering.is_in_progress());
        assert!(TransitionState::Exiting.is_in_progress());
        assert!(!TransitionState::Entered.is_in_progress());
        assert!(!TransitionState::Exited.is_in_progress());

        assert!(!TransitionState::Unmounted.is_settled());
        assert!(!TransitionState::Unmounted.is_in_progress());
    }

    #[test]
    fn settled_maps_visibility_to_state() {
        assert_eq!(TransitionState::settled(true), TransitionState::Entered);
        assert_eq!(TransitionState::settled(false), TransitionState::Exited);
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(TransitionState::Entering.to_string(), "entering");
    }

    #[test]
    fn state_serializes_to_lowercase_strings() {
        let json = serde_json::to_string(&TransitionState::Entering).unwrap();
        assert_eq!(json, "\"entering\"");

        let deserialized: TransitionState = serde_json::from_str("\"exited\"").unwrap();
        assert_eq!(deserialized, TransitionState::Exited);
    }
}
