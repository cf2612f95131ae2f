//! Input abstraction layer.
//!
//! Normalizes pointer, double-click, and keyboard events from the host
//! into a unified `InputEvent` enum consumed by the coordinator.

/// Keyboard modifier state at the time of an input event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
        alt: false,
        meta: false,
    };

    /// Platform command key: ⌘ on macOS, Ctrl elsewhere.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// `PointerEvent.button` of the main (usually left) button.
pub const PRIMARY_BUTTON: i16 = 0;

/// A normalized input event. Coordinates are page coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Button pressed over an element (or the background).
    PointerDown {
        x: f32,
        y: f32,
        button: i16,
        modifiers: Modifiers,
    },

    PointerMove { x: f32, y: f32 },

    PointerUp { x: f32, y: f32, button: i16 },

    DoubleClick { x: f32, y: f32 },

    /// `key` is the `KeyboardEvent.key` value (e.g. `"ArrowLeft"`);
    /// `time_ms` is the event time on the same clock as `Coordinator::tick`.
    KeyDown {
        key: String,
        modifiers: Modifiers,
        time_ms: f64,
    },

    KeyUp { key: String, time_ms: f64 },
}

impl InputEvent {
    pub fn from_pointer_down(x: f32, y: f32, button: i16, modifiers: Modifiers) -> Self {
        Self::PointerDown {
            x,
            y,
            button,
            modifiers,
        }
    }

    pub fn from_pointer_move(x: f32, y: f32) -> Self {
        Self::PointerMove { x, y }
    }

    pub fn from_pointer_up(x: f32, y: f32, button: i16) -> Self {
        Self::PointerUp { x, y, button }
    }

    pub fn key_down(key: impl Into<String>, modifiers: Modifiers, time_ms: f64) -> Self {
        Self::KeyDown {
            key: key.into(),
            modifiers,
            time_ms,
        }
    }

    pub fn key_up(key: impl Into<String>, time_ms: f64) -> Self {
        Self::KeyUp {
            key: key.into(),
            time_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_ctrl_or_meta() {
        assert!(!Modifiers::NONE.command());
        assert!(Modifiers::CTRL.command());
        let meta = Modifiers {
            meta: true,
            ..Modifiers::NONE
        };
        assert!(meta.command());
        let shift = Modifiers {
            shift: true,
            ..Modifiers::NONE
        };
        assert!(!shift.command());
    }

    #[test]
    fn key_events_carry_their_time() {
        assert_eq!(
            InputEvent::key_up("ArrowUp", 12.5),
            InputEvent::KeyUp {
                key: "ArrowUp".to_string(),
                time_ms: 12.5,
            }
        );
        assert_eq!(
            InputEvent::from_pointer_up(3.0, 4.0, PRIMARY_BUTTON),
            InputEvent::PointerUp {
                x: 3.0,
                y: 4.0,
                button: 0,
            }
        );
    }
}
