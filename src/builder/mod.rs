//! Builder API for ergonomic tracker construction.
//!
//! The builder selects the tracker variant from what it is given: with an
//! element ref it builds a shared-handle tracker, without one it builds a
//! tracker that owns its ref.

pub mod error;

pub use error::BuildError;

use crate::host::{ElementRef, VisibilitySignal};
use crate::tracker::TransitionTracker;

/// Fluent builder for [`TransitionTracker`].
///
/// # Example
///
/// ```rust
/// use presence::{TrackerBuilder, TransitionState, VisibilitySignal};
///
/// let visible = VisibilitySignal::new(false);
/// let tracker = TrackerBuilder::new()
///     .visible(&visible)
///     .initial_transition(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(tracker.state(), TransitionState::Unmounted);
/// ```
pub struct TrackerBuilder {
    visible: Option<VisibilitySignal>,
    initial_transition: bool,
    element: Option<ElementRef>,
}

impl TrackerBuilder {
    /// Create a new builder. Initial transitions default to disabled.
    pub fn new() -> Self {
        Self {
            visible: None,
            initial_transition: false,
            element: None,
        }
    }

    /// Set the visibility signal (required).
    pub fn visible(mut self, signal: &VisibilitySignal) -> Self {
        self.visible = Some(signal.clone());
        self
    }

    /// Enable or disable animating the very first reaction.
    pub fn initial_transition(mut self, enabled: bool) -> Self {
        self.initial_transition = enabled;
        self
    }

    /// Observe a caller-owned element ref instead of owning one.
    pub fn element_ref(mut self, element: ElementRef) -> Self {
        self.element = Some(element);
        self
    }

    /// Build the tracker.
    /// Returns an error if the visibility signal is missing.
    pub fn build(self) -> Result<TransitionTracker, BuildError> {
        let visible = self.visible.ok_or(BuildError::MissingVisibilitySignal)?;

        Ok(match self.element {
            Some(element) => {
                TransitionTracker::with_element_ref(element, &visible, self.initial_transition)
            }
            None => TransitionTracker::new(&visible, self.initial_transition),
        })
    }
}

impl Default for TrackerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TransitionState;

    #[test]
    fn builder_requires_a_visibility_signal() {
        let result = TrackerBuilder::new().build();
        assert!(matches!(result, Err(BuildError::MissingVisibilitySignal)));
    }

    #[test]
    fn builder_without_element_ref_owns_its_handle() {
        let visible = VisibilitySignal::new(true);
        let tracker = TrackerBuilder::new().visible(&visible).build().unwrap();

        // The owned variant always starts unmounted.
        assert_eq!(tracker.state(), TransitionState::Unmounted);
        assert!(!tracker.element_ref().is_attached());
    }

    #[test]
    fn builder_with_element_ref_settles_at_construction() {
        let visible = VisibilitySignal::new(true);
        let tracker = TrackerBuilder::new()
            .visible(&visible)
            .element_ref(ElementRef::empty())
            .build()
            .unwrap();

        // The shared variant computes its settled state synchronously.
        assert_eq!(tracker.state(), TransitionState::Entered);
    }

    #[test]
    fn initial_transition_flag_reaches_the_tracker() {
        let visible = VisibilitySignal::new(true);
        let tracker = TrackerBuilder::new()
            .visible(&visible)
            .element_ref(ElementRef::empty())
            .initial_transition(true)
            .build()
            .unwrap();

        assert_eq!(tracker.state(), TransitionState::Unmounted);
    }
}
