//! Tunables for motion, pointer handling, spawning, and selection styling.

use crate::model::{BorderStyle, Size};
use serde::Deserialize;

/// Configuration for the coordinator and spawner.
///
/// Every field has a default, so a host may pass a partial JSON object
/// (or none at all).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MoverConfig {
    /// Milliseconds between arrow-key motion steps. Default: **7** (about 143 px/s).
    pub tick_interval_ms: f64,

    /// Distance the element's center advances per motion step. Default: **1**.
    pub step: f32,

    /// Upper bound on steps a single motion task runs in one `tick`
    /// after the host stalled. Default: **8**.
    pub max_catch_up_steps: u32,

    /// `PointerEvent.button` value that grabs and drops. Default: **0** (primary).
    pub primary_button: i16,

    /// Size of spawned elements. Default: **50 x 50**.
    pub element_size: Size,

    pub unselected_border: BorderStyle,

    pub selected_border: BorderStyle,
}

impl Default for MoverConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 7.0,
            step: 1.0,
            max_catch_up_steps: 8,
            primary_button: 0,
            element_size: Size::new(50.0, 50.0),
            unselected_border: BorderStyle::thin_solid(),
            selected_border: BorderStyle::thick_dashed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, LineStyle};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_is_default() {
        let config: MoverConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, MoverConfig::default());
    }

    #[test]
    fn partial_override() {
        let config: MoverConfig = serde_json::from_str(
            r#"{
                "tick_interval_ms": 16,
                "element_size": { "width": 80, "height": 30 },
                "selected_border": {
                    "width": 3,
                    "line": "dashed",
                    "color": { "r": 255, "g": 0, "b": 0, "a": 255 }
                }
            }"#,
        )
        .unwrap();
        assert_eq!(config.tick_interval_ms, 16.0);
        assert_eq!(config.step, 1.0);
        assert_eq!(config.element_size, Size::new(80.0, 30.0));
        assert_eq!(config.selected_border.width, 3.0);
        assert_eq!(config.selected_border.line, LineStyle::Dashed);
        assert_eq!(config.selected_border.color, Color::rgb(255, 0, 0));
        assert_eq!(config.unselected_border, BorderStyle::thin_solid());
    }
}
