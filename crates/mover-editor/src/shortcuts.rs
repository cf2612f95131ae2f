//! Spawn/despawn key mapping.
//!
//! Resolves `keypress` values into `SpawnAction`s. Arrow keys are not
//! here: the coordinator handles those on key-down/key-up directly.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnAction {
    /// Create a new element at a random spot in the container.
    Spawn,
    /// Remove the most recently spawned element.
    Despawn,
}

pub struct SpawnKeys;

impl SpawnKeys {
    /// `key` is the `KeyboardEvent.key` value. Modifiers are irrelevant:
    /// `+` usually needs Shift on its own.
    pub fn resolve(key: &str) -> Option<SpawnAction> {
        match key {
            "+" => Some(SpawnAction::Spawn),
            "-" => Some(SpawnAction::Despawn),
            _ => None,
        }
    }
}
