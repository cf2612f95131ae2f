//! In-memory host surface.
//!
//! `Scene` holds a single container and the elements appended to it, in
//! insertion order. It is the host for both the canvas bridge and the
//! native tests: renderers read it, hit testing walks it, and the
//! coordinator mutates it through the [`Host`] trait.

use crate::host::Host;
use crate::id::ElementId;
use crate::model::{BorderStyle, Color, Rect, Size};

/// One element on the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneElement {
    pub id: ElementId,
    pub rect: Rect,
    pub fill: Color,
    pub border: BorderStyle,
    pub z_index: i32,
    /// Element-level listeners (pointer-down, double-click) attached.
    pub listening: bool,
}

#[derive(Debug, Clone)]
pub struct Scene {
    container: Rect,
    elements: Vec<SceneElement>,
    global_listening: bool,
}

impl Scene {
    pub fn new(container: Rect) -> Self {
        Self {
            container,
            elements: Vec::new(),
            global_listening: false,
        }
    }

    /// Insert an element with a known name and rect (used by hosts that
    /// create elements themselves, and by tests).
    pub fn insert(&mut self, id: ElementId, rect: Rect, fill: Color) {
        if self.get(id).is_some() {
            return;
        }
        self.elements.push(SceneElement {
            id,
            rect,
            fill,
            border: BorderStyle::thin_solid(),
            z_index: 0,
            listening: false,
        });
    }

    pub fn get(&self, id: ElementId) -> Option<&SceneElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    fn get_mut(&mut self, id: ElementId) -> Option<&mut SceneElement> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Elements in insertion (document) order.
    pub fn elements(&self) -> &[SceneElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether global pointer-move/up and key listeners are attached.
    pub fn is_listening(&self) -> bool {
        self.global_listening
    }

    /// Elements bottom-to-top: ascending z-index, document order on ties.
    pub fn paint_order(&self) -> Vec<&SceneElement> {
        let mut order: Vec<&SceneElement> = self.elements.iter().collect();
        // `sort_by_key` is stable, so ties keep document order.
        order.sort_by_key(|e| e.z_index);
        order
    }

    /// Replace the container rectangle. Registered elements keep the
    /// bounds captured when they were registered.
    pub fn resize_container(&mut self, container: Rect) {
        self.container = container;
    }
}

impl Host for Scene {
    fn element_rect(&self, id: ElementId) -> Option<Rect> {
        self.get(id).map(|e| e.rect)
    }

    fn container_rect(&self, id: ElementId) -> Option<Rect> {
        self.get(id).map(|_| self.container)
    }

    fn set_position(&mut self, id: ElementId, left: f32, top: f32) {
        if let Some(e) = self.get_mut(id) {
            e.rect.left = left;
            e.rect.top = top;
        }
    }

    fn set_border(&mut self, id: ElementId, border: BorderStyle) {
        if let Some(e) = self.get_mut(id) {
            e.border = border;
        }
    }

    fn set_z_index(&mut self, id: ElementId, z: i32) {
        if let Some(e) = self.get_mut(id) {
            e.z_index = z;
        }
    }

    fn attach_element_listeners(&mut self, id: ElementId) {
        if let Some(e) = self.get_mut(id) {
            e.listening = true;
        }
    }

    fn detach_element_listeners(&mut self, id: ElementId) {
        if let Some(e) = self.get_mut(id) {
            e.listening = false;
        }
    }

    fn attach_global_listeners(&mut self) {
        log::debug!("global listeners attached");
        self.global_listening = true;
    }

    fn detach_global_listeners(&mut self) {
        log::debug!("global listeners detached");
        self.global_listening = false;
    }

    fn container(&self) -> Rect {
        self.container
    }

    fn create_element(&mut self, fill: Color, size: Size) -> ElementId {
        let id = ElementId::fresh();
        let rect = Rect::new(
            self.container.left,
            self.container.top,
            size.width,
            size.height,
        );
        self.insert(id, rect, fill);
        id
    }

    fn remove_element(&mut self, id: ElementId) {
        self.elements.retain(|e| e.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_remove() {
        let mut scene = Scene::new(Rect::new(10.0, 10.0, 400.0, 300.0));
        let id = scene.create_element(Color::rgb(1, 2, 3), Size::new(50.0, 40.0));
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.element_rect(id), Some(Rect::new(10.0, 10.0, 50.0, 40.0)));
        assert_eq!(scene.container_rect(id), Some(scene.container()));

        scene.remove_element(id);
        assert!(scene.is_empty());
        assert_eq!(scene.element_rect(id), None);
        assert_eq!(scene.container_rect(id), None);
    }

    #[test]
    fn paint_order_is_stable_on_ties() {
        let mut scene = Scene::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        let a = ElementId::intern("scene_a");
        let b = ElementId::intern("scene_b");
        let c = ElementId::intern("scene_c");
        for id in [a, b, c] {
            scene.insert(id, Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        }
        scene.set_z_index(a, 1);
        let order: Vec<ElementId> = scene.paint_order().iter().map(|e| e.id).collect();
        assert_eq!(order, vec![b, c, a]);
    }

    #[test]
    fn listener_flags() {
        let mut scene = Scene::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        let id = scene.create_element(Color::WHITE, Size::new(10.0, 10.0));
        scene.attach_element_listeners(id);
        scene.attach_global_listeners();
        assert!(scene.get(id).is_some_and(|e| e.listening));
        assert!(scene.is_listening());
        scene.detach_element_listeners(id);
        scene.detach_global_listeners();
        assert!(scene.get(id).is_some_and(|e| !e.listening));
        assert!(!scene.is_listening());
    }
}
