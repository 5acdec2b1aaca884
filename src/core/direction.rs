//! Logical direction of a running transition.
//!
//! Both completion event kinds resolve to one logical direction, so the
//! tracker reasons about `Enter`/`Leave` rather than raw event kinds.

use super::state::TransitionState;
use serde::{Deserialize, Serialize};

/// Which way a transition is running.
///
/// A direction is derived from the visibility value at reaction time and
/// determines both the in-progress state set immediately and the settled
/// state applied when a completion event arrives.
///
/// # Example
///
/// ```rust
/// use presence::{Direction, TransitionState};
///
/// let direction = Direction::of_visibility(true);
/// assert_eq!(direction, Direction::Enter);
/// assert_eq!(direction.in_progress_state(), TransitionState::Entering);
/// assert_eq!(direction.settled_state(), TransitionState::Entered);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Direction {
    /// Becoming visible.
    Enter,
    /// Becoming hidden.
    Leave,
}

impl Direction {
    /// The direction a visibility value drives toward.
    pub fn of_visibility(visible: bool) -> Self {
        if visible {
            Self::Enter
        } else {
            Self::Leave
        }
    }

    /// The other direction.
    pub fn opposite(self) -> Self {
        match self {
            Self::Enter => Self::Leave,
            Self::Leave => Self::Enter,
        }
    }

    /// The in-progress state a reaction sets for this direction.
    pub fn in_progress_state(self) -> TransitionState {
        match self {
            Self::Enter => TransitionState::Entering,
            Self::Leave => TransitionState::Exiting,
        }
    }

    /// The settled state a completion event applies for this direction.
    pub fn settled_state(self) -> TransitionState {
        match self {
            Self::Enter => TransitionState::Entered,
            Self::Leave => TransitionState::Exited,
        }
    }
}
