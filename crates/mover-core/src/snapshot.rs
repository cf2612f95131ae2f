//! Serializable view of a [`Scene`], bottom-to-top.

use crate::host::Host;
use crate::id::ElementId;
use crate::model::{BorderStyle, Rect};
use crate::scene::Scene;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementSnapshot {
    pub id: ElementId,
    pub rect: Rect,
    /// Fill as `#RRGGBB`.
    pub color: String,
    pub border: BorderStyle,
    pub z_index: i32,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneSnapshot {
    pub container: Rect,
    pub elements: Vec<ElementSnapshot>,
}

impl SceneSnapshot {
    /// Capture the scene in paint order. `is_selected` reports selection
    /// membership, which lives with the coordinator rather than the scene.
    pub fn capture(scene: &Scene, is_selected: impl Fn(ElementId) -> bool) -> Self {
        let elements = scene
            .paint_order()
            .into_iter()
            .map(|e| ElementSnapshot {
                id: e.id,
                rect: e.rect,
                color: e.fill.to_hex(),
                border: e.border,
                z_index: e.z_index,
                selected: is_selected(e.id),
            })
            .collect();
        Self {
            container: scene.container(),
            elements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Color;

    #[test]
    fn capture_orders_bottom_to_top() {
        let mut scene = Scene::new(Rect::new(0.0, 0.0, 200.0, 200.0));
        let a = ElementId::intern("snap_a");
        let b = ElementId::intern("snap_b");
        scene.insert(a, Rect::new(0.0, 0.0, 10.0, 10.0), Color::rgb(255, 0, 0));
        scene.insert(b, Rect::new(5.0, 5.0, 10.0, 10.0), Color::rgb(0, 0, 255));
        scene.set_z_index(a, 2);
        scene.set_z_index(b, 1);

        let snap = SceneSnapshot::capture(&scene, |id| id == a);
        assert_eq!(snap.elements.len(), 2);
        assert_eq!(snap.elements[0].id, b);
        assert_eq!(snap.elements[1].id, a);
        assert!(snap.elements[1].selected);
        assert_eq!(snap.elements[1].color, "#FF0000");

        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["elements"][1]["id"], "snap_a");
        assert_eq!(json["elements"][1]["border"]["line"], "solid");
    }
}
