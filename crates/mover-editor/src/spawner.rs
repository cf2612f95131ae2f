//! Spawns and despawns movable elements in the host's container.
//!
//! Despawning is last-in, first-out.

use crate::coordinator::Coordinator;
use crate::shortcuts::{SpawnAction, SpawnKeys};
use mover_core::host::Host;
use mover_core::id::ElementId;
use mover_core::model::Color;

/// `R` yields uniform samples in `[0, 1)` (e.g. `js_sys::Math::random`).
pub struct Spawner<R: FnMut() -> f64> {
    spawned: Vec<ElementId>,
    random: R,
}

impl<R: FnMut() -> f64> Spawner<R> {
    pub fn new(random: R) -> Self {
        Self {
            spawned: Vec::new(),
            random,
        }
    }

    /// Elements spawned and not yet removed, oldest first.
    pub fn spawned(&self) -> &[ElementId] {
        &self.spawned
    }

    /// Run the action bound to `key`, if any. Returns `true` if the
    /// surface changed.
    pub fn handle_key<H: Host>(&mut self, key: &str, coordinator: &mut Coordinator<H>) -> bool {
        match SpawnKeys::resolve(key) {
            Some(SpawnAction::Spawn) => {
                self.spawn(coordinator);
                true
            }
            Some(SpawnAction::Despawn) => self.despawn(coordinator).is_some(),
            None => false,
        }
    }

    /// Create a randomly colored element, register it, and place it at a
    /// random point of the container.
    pub fn spawn<H: Host>(&mut self, coordinator: &mut Coordinator<H>) -> ElementId {
        let area = coordinator.host().container();
        let x = area.left + ((self.random)() as f32 * area.width).floor();
        let y = area.top + ((self.random)() as f32 * area.height).floor();
        let fill = Color::random(&mut self.random);
        let size = coordinator.config().element_size;

        let id = coordinator.host_mut().create_element(fill, size);
        self.spawned.push(id);
        coordinator.register(id);
        coordinator.place(id, x, y);
        log::debug!("spawned {id} {} at ({x}, {y})", fill.to_hex());
        id
    }

    /// Unregister and remove the most recently spawned element.
    pub fn despawn<H: Host>(&mut self, coordinator: &mut Coordinator<H>) -> Option<ElementId> {
        let id = self.spawned.pop()?;
        coordinator.unregister(id);
        coordinator.host_mut().remove_element(id);
        log::debug!("despawned {id}");
        Some(id)
    }
}
