//! The host visual surface.
//!
//! Everything the coordinator and spawner touch outside their own state
//! goes through this trait: layout queries, style mutations, listener
//! wiring, and element creation inside the designated container.

use crate::id::ElementId;
use crate::model::{BorderStyle, Color, Rect, Size};

pub trait Host {
    /// Current layout rectangle of an element, or `None` if it doesn't exist.
    fn element_rect(&self, id: ElementId) -> Option<Rect>;

    /// Layout rectangle of the element's parent container.
    fn container_rect(&self, id: ElementId) -> Option<Rect>;

    fn set_position(&mut self, id: ElementId, left: f32, top: f32);

    fn set_border(&mut self, id: ElementId, border: BorderStyle);

    fn set_z_index(&mut self, id: ElementId, z: i32);

    /// Route double-click and pointer-down events on this element to the coordinator.
    fn attach_element_listeners(&mut self, id: ElementId);

    fn detach_element_listeners(&mut self, id: ElementId);

    /// Route pointer-move, pointer-up, key-down and key-up to the coordinator.
    fn attach_global_listeners(&mut self);

    fn detach_global_listeners(&mut self);

    // ── Spawner-facing ──

    /// The designated container new elements are spawned into.
    fn container(&self) -> Rect;

    /// Append a new element to the container at its top-left corner.
    fn create_element(&mut self, fill: Color, size: Size) -> ElementId;

    /// Remove an element from the surface entirely.
    fn remove_element(&mut self, id: ElementId);
}
