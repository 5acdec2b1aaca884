//! Shared Handle
//!
//! This example demonstrates the shared-handle tracker variant: the host
//! owns the element ref and the tracker's initial state is computed
//! synchronously at construction.
//!
//! Run with: cargo run --example shared_handle

use presence::{CompletionKind, Element, ElementRef, TrackerBuilder, VisibilitySignal};

fn main() {
    println!("=== Shared Handle ===\n");

    // The host already rendered the dialog and owns the ref.
    let dialog = Element::new();
    let handle = ElementRef::for_element(dialog.clone());

    let visible = VisibilitySignal::new(true);
    let tracker = TrackerBuilder::new()
        .visible(&visible)
        .element_ref(handle)
        .build()
        .expect("visibility signal was provided");

    // No animation on first paint: already settled.
    println!("At construction: {}", tracker.state());

    tracker.mount();
    println!("After mount:     {}", tracker.state());

    // Re-render on every change, the way a host framework would.
    tracker.state_cell().watch(|state| {
        println!("  re-render: panel is {state}");
    });

    visible.set(false);
    dialog.fire(CompletionKind::AnimationEnd);

    visible.set(true);
    dialog.fire(CompletionKind::TransitionEnd);

    println!("\nFinal state: {}", tracker.state());
}
