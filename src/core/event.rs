//! Completion events delivered by the host runtime.
//!
//! Two event kinds exist because CSS-style hosts signal the end of a
//! transition and the end of an animation separately. The tracker treats
//! them as one logical completion signal and filters events by the strict
//! identity of their target element.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Kind of completion signal a host can deliver.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum CompletionKind {
    /// A CSS-transition-style completion (`transitionend` equivalent).
    TransitionEnd,
    /// A CSS-animation-style completion (`animationend` equivalent).
    AnimationEnd,
}

impl CompletionKind {
    /// Both kinds, in the order listeners are attached.
    pub const ALL: [CompletionKind; 2] = [Self::TransitionEnd, Self::AnimationEnd];

    /// Get the kind's host-facing name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TransitionEnd => "transitionend",
            Self::AnimationEnd => "animationend",
        }
    }
}

impl fmt::Display for CompletionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identity of an element, used to filter completion events.
///
/// Every element is minted with a unique id; an event only counts for a
/// tracker when its target id equals the observed element's id. Events
/// bubbling up from descendants carry the descendant's id and are ignored.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct ElementId(Uuid);

impl ElementId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A completion event as delivered to element listeners.
///
/// `target` is the element the transition actually ran on, which is not
/// necessarily the element the listener is registered on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CompletionEvent {
    /// Which completion signal fired.
    pub kind: CompletionKind,
    /// Identity of the element the signal fired on.
    pub target: ElementId,
}
