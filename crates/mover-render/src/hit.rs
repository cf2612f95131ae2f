//! Hit testing: point → element lookup.
//!
//! Walks the scene top-to-bottom (reverse paint order) and returns the
//! first element with listeners attached that contains the point.

use mover_core::id::ElementId;
use mover_core::scene::Scene;

/// Find the topmost listening element at `(px, py)`.
/// Returns `None` for the background.
pub fn hit_test(scene: &Scene, px: f32, py: f32) -> Option<ElementId> {
    scene
        .paint_order()
        .into_iter()
        .rev()
        .find(|e| e.listening && e.rect.contains(px, py))
        .map(|e| e.id)
}
