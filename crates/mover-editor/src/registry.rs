//! Registry of movable elements.
//!
//! Invariants maintained here:
//! - every element appears at most once;
//! - `selected` and `grabbed` only ever reference registered elements;
//! - `z_order` holds exactly the registered elements, bottom first.

use mover_core::id::ElementId;
use mover_core::model::{ContainerBounds, Direction, Size};
use smallvec::SmallVec;
use std::collections::HashMap;

/// Geometry captured once at registration and frozen afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frozen {
    pub size: Size,
    pub bounds: ContainerBounds,
}

#[derive(Debug, Default)]
pub struct Registry {
    entries: HashMap<ElementId, Frozen>,
    /// Selection in the order elements were selected.
    selected: SmallVec<[ElementId; 8]>,
    grabbed: Option<ElementId>,
    z_order: Vec<ElementId>,
    /// Physical key-down state per arrow key, indexed by `Direction::index`.
    keys_down: [bool; 4],
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add an element on top of the stack. Returns `false` if already present.
    pub fn insert(&mut self, id: ElementId, frozen: Frozen) -> bool {
        if self.contains(id) {
            return false;
        }
        self.entries.insert(id, frozen);
        self.z_order.push(id);
        true
    }

    /// Drop an element and every piece of state that references it.
    pub fn remove(&mut self, id: ElementId) -> bool {
        if self.entries.remove(&id).is_none() {
            return false;
        }
        self.selected.retain(|s| *s != id);
        if self.grabbed == Some(id) {
            self.grabbed = None;
        }
        self.z_order.retain(|z| *z != id);
        true
    }

    pub fn frozen(&self, id: ElementId) -> Option<Frozen> {
        self.entries.get(&id).copied()
    }

    // ─── Selection ───────────────────────────────────────────────────────

    pub fn is_selected(&self, id: ElementId) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected(&self) -> &[ElementId] {
        &self.selected
    }

    /// Flip selection membership. Returns the new state, or `None` if the
    /// element isn't registered.
    pub fn toggle_selected(&mut self, id: ElementId) -> Option<bool> {
        if !self.contains(id) {
            return None;
        }
        if let Some(pos) = self.selected.iter().position(|s| *s == id) {
            self.selected.remove(pos);
            Some(false)
        } else {
            self.selected.push(id);
            Some(true)
        }
    }

    // ─── Grab ────────────────────────────────────────────────────────────

    pub fn grabbed(&self) -> Option<ElementId> {
        self.grabbed
    }

    /// Grab a registered element. Returns `false` for unknown elements.
    pub fn grab(&mut self, id: ElementId) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.grabbed = Some(id);
        true
    }

    pub fn release(&mut self) -> Option<ElementId> {
        self.grabbed.take()
    }

    // ─── Z-order ─────────────────────────────────────────────────────────

    /// Registered elements, bottom of the stack first.
    pub fn z_order(&self) -> &[ElementId] {
        &self.z_order
    }

    pub fn z_index(&self, id: ElementId) -> Option<usize> {
        self.z_order.iter().position(|z| *z == id)
    }

    /// Move an element to the top of the stack.
    pub fn raise(&mut self, id: ElementId) -> bool {
        let Some(pos) = self.z_index(id) else {
            return false;
        };
        let id = self.z_order.remove(pos);
        self.z_order.push(id);
        true
    }

    // ─── Arrow keys ──────────────────────────────────────────────────────

    /// Record a key press. Returns `false` if it was already down
    /// (auto-repeat or a duplicate event).
    pub fn press(&mut self, direction: Direction) -> bool {
        let slot = &mut self.keys_down[direction.index()];
        if *slot {
            return false;
        }
        *slot = true;
        true
    }

    /// Record a key release. Returns `false` if it wasn't down.
    pub fn lift(&mut self, direction: Direction) -> bool {
        std::mem::replace(&mut self.keys_down[direction.index()], false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mover_core::model::Rect;

    fn frozen() -> Frozen {
        Frozen {
            size: Size::new(50.0, 50.0),
            bounds: ContainerBounds::from(Rect::new(0.0, 0.0, 500.0, 500.0)),
        }
    }

    #[test]
    fn insert_is_unique() {
        let mut reg = Registry::new();
        let a = ElementId::intern("reg_a");
        assert!(reg.insert(a, frozen()));
        assert!(!reg.insert(a, frozen()));
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.z_order(), &[a]);
    }

    #[test]
    fn remove_clears_everything() {
        let mut reg = Registry::new();
        let a = ElementId::intern("reg_rm_a");
        let b = ElementId::intern("reg_rm_b");
        reg.insert(a, frozen());
        reg.insert(b, frozen());
        reg.toggle_selected(a);
        reg.grab(a);

        assert!(reg.remove(a));
        assert!(!reg.contains(a));
        assert!(!reg.is_selected(a));
        assert_eq!(reg.grabbed(), None);
        assert_eq!(reg.z_order(), &[b]);
        assert_eq!(reg.frozen(a), None);
        assert!(!reg.remove(a));
    }

    #[test]
    fn toggle_and_grab_require_registration() {
        let mut reg = Registry::new();
        let ghost = ElementId::intern("reg_ghost");
        assert_eq!(reg.toggle_selected(ghost), None);
        assert!(!reg.grab(ghost));
        assert!(!reg.raise(ghost));
    }

    #[test]
    fn raise_moves_to_top() {
        let mut reg = Registry::new();
        let a = ElementId::intern("reg_z_a");
        let b = ElementId::intern("reg_z_b");
        let c = ElementId::intern("reg_z_c");
        for id in [a, b, c] {
            reg.insert(id, frozen());
        }
        assert!(reg.raise(a));
        assert_eq!(reg.z_order(), &[b, c, a]);
        assert_eq!(reg.z_index(a), Some(2));
    }

    #[test]
    fn key_state_dedups_presses() {
        let mut reg = Registry::new();
        assert!(reg.press(Direction::Right));
        assert!(!reg.press(Direction::Right));
        assert!(reg.press(Direction::Left));
        assert!(reg.lift(Direction::Left));
        assert!(reg.lift(Direction::Right));
        assert!(!reg.lift(Direction::Right));
        assert!(reg.press(Direction::Right));
    }
}
