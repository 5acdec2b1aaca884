//! Fading Panel
//!
//! This example demonstrates the self-owned tracker variant driving a
//! panel that fades in and out.
//!
//! Key concepts:
//! - Mounting hidden settles directly (no spurious closing animation)
//! - Visibility flips move the tracker into an in-progress state
//! - Host completion events settle it
//!
//! Run with: cargo run --example fade_panel

use presence::{CompletionKind, Element, TransitionTracker, VisibilitySignal};

fn main() {
    println!("=== Fading Panel ===\n");

    // The panel starts hidden.
    let visible = VisibilitySignal::new(false);
    let tracker = TransitionTracker::new(&visible, false);

    // The host renders the panel and attaches it to the tracker's ref.
    let panel = Element::new();
    tracker.element_ref().attach(panel.clone());
    tracker.mount();

    println!("Mounted hidden: {}", tracker.state());

    // Show the panel; the fade-in starts.
    visible.set(true);
    println!("Visibility -> true: {}", tracker.state());

    // The host reports the CSS transition finished.
    panel.fire(CompletionKind::TransitionEnd);
    println!("Transition completed: {}", tracker.state());

    // Hide it again.
    visible.set(false);
    println!("Visibility -> false: {}", tracker.state());

    panel.fire(CompletionKind::TransitionEnd);
    println!("Transition completed: {}\n", tracker.state());

    println!("Observed lifecycle:");
    for state in tracker.log().path() {
        println!("  {state}");
    }
}
