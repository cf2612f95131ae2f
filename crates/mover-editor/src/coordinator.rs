//! The element-movement coordinator.
//!
//! Owns the registry, the motion scheduler, and the host surface. Every
//! state transition happens synchronously inside one of the handlers below
//! or inside [`Coordinator::tick`], so no locking is needed as long as the
//! host calls in from a single event loop.
//!
//! ## Pointer
//!
//! | Event | Effect |
//! |-------|--------|
//! | primary down on element | grab, surface, place at pointer |
//! | move while grabbing | place grabbed element at pointer |
//! | primary up | drop (anywhere) |
//! | double-click on element | toggle selection + border |
//!
//! ## Keyboard
//!
//! | Key | Without ⌘/Ctrl | With ⌘/Ctrl |
//! |-----|----------------|-------------|
//! | Arrow down | start 1-step-per-tick motion of every selected element | jump every selected element to that edge |
//! | Arrow up | stop that direction's motion | — |

use crate::input::{InputEvent, Modifiers};
use crate::motion::MotionScheduler;
use crate::registry::{Frozen, Registry};
use mover_core::config::MoverConfig;
use mover_core::host::Host;
use mover_core::id::ElementId;
use mover_core::model::{ContainerBounds, Direction};
use mover_core::place::{clamp_to_bounds, edge_target};

pub struct Coordinator<H: Host> {
    host: H,
    registry: Registry,
    motion: MotionScheduler,
    config: MoverConfig,
    /// Latest time seen by `tick`, in host milliseconds.
    clock_ms: f64,
}

impl<H: Host> Coordinator<H> {
    pub fn new(host: H) -> Self {
        Self::with_config(host, MoverConfig::default())
    }

    pub fn with_config(host: H, config: MoverConfig) -> Self {
        Self {
            host,
            registry: Registry::new(),
            motion: MotionScheduler::new(config.tick_interval_ms, config.max_catch_up_steps),
            config,
            clock_ms: 0.0,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &MoverConfig {
        &self.config
    }

    pub fn is_registered(&self, id: ElementId) -> bool {
        self.registry.contains(id)
    }

    pub fn is_selected(&self, id: ElementId) -> bool {
        self.registry.is_selected(id)
    }

    pub fn grabbed(&self) -> Option<ElementId> {
        self.registry.grabbed()
    }

    /// Whether any arrow-key motion is still running.
    pub fn is_moving(&self) -> bool {
        !self.motion.is_idle()
    }

    pub fn active_motions(&self) -> usize {
        self.motion.active().count()
    }

    // ─── Registration ────────────────────────────────────────────────────

    /// Make an element movable. Captures its current size and its
    /// container's rectangle; both stay frozen until `unregister`.
    ///
    /// Returns `false` if it was already registered or isn't on the host.
    pub fn register(&mut self, id: ElementId) -> bool {
        if self.registry.contains(id) {
            return false;
        }
        let (Some(rect), Some(container)) = (self.host.element_rect(id), self.host.container_rect(id))
        else {
            log::warn!("register {id}: element is not on the host surface");
            return false;
        };

        let frozen = Frozen {
            size: rect.size(),
            bounds: ContainerBounds::from(container),
        };
        self.registry.insert(id, frozen);
        self.restack();

        let z = self.registry.z_order().len() - 1;
        self.host.set_border(id, self.config.unselected_border);
        self.host.attach_element_listeners(id);
        if self.registry.len() == 1 {
            self.host.attach_global_listeners();
        }
        log::debug!("registered {id} ({}x{}) z={z}", rect.width, rect.height);
        true
    }

    /// Undo everything `register` did. Returns `false` if not registered.
    pub fn unregister(&mut self, id: ElementId) -> bool {
        if !self.registry.remove(id) {
            return false;
        }
        self.motion.cancel_element(id);
        self.restack();
        self.host.detach_element_listeners(id);
        if self.registry.is_empty() {
            self.host.detach_global_listeners();
        }
        log::debug!("unregistered {id}");
        true
    }

    // ─── Placement ───────────────────────────────────────────────────────

    /// Center the element on `(x, y)`, pinned inside its frozen container bounds.
    ///
    /// Ignored (returns `false`) for unregistered elements and non-finite targets.
    pub fn place(&mut self, id: ElementId, x: f32, y: f32) -> bool {
        let Some(frozen) = self.registry.frozen(id) else {
            return false;
        };
        if !x.is_finite() || !y.is_finite() {
            log::warn!("place {id}: ignoring non-finite target ({x}, {y})");
            return false;
        }
        let (left, top) = clamp_to_bounds(x, y, frozen.size, &frozen.bounds);
        log::trace!("place {id} -> ({left}, {top})");
        self.host.set_position(id, left, top);
        true
    }

    /// Move the element to the top of the stack and renumber every z-index
    /// to its stack position (0 = bottom).
    pub fn surface(&mut self, id: ElementId) -> bool {
        if !self.registry.raise(id) {
            return false;
        }
        self.restack();
        true
    }

    /// Write every registered element's stack position to the host as its z-index.
    fn restack(&mut self) {
        for (i, el) in self.registry.z_order().iter().enumerate() {
            self.host.set_z_index(*el, i as i32);
        }
    }

    /// Jump flush against one edge of the element's container.
    pub fn jump(&mut self, id: ElementId, direction: Direction) -> bool {
        let (Some(frozen), Some(rect)) = (self.registry.frozen(id), self.host.element_rect(id))
        else {
            return false;
        };
        let (x, y) = edge_target(direction, &rect, frozen.size, &frozen.bounds);
        self.place(id, x, y)
    }

    /// Advance the element's center one step from its live position.
    pub fn step(&mut self, id: ElementId, direction: Direction) -> bool {
        let (Some(frozen), Some(rect)) = (self.registry.frozen(id), self.host.element_rect(id))
        else {
            return false;
        };
        let (dx, dy) = direction.delta();
        let (half_w, half_h) = frozen.size.half();
        let x = rect.left + half_w + dx * self.config.step;
        let y = rect.top + half_h + dy * self.config.step;
        self.place(id, x, y)
    }

    // ─── Event dispatch ──────────────────────────────────────────────────

    /// Route a normalized event. `target` is the element under the pointer
    /// (for pointer-down and double-click). Returns `true` if anything changed.
    pub fn handle(&mut self, event: &InputEvent, target: Option<ElementId>) -> bool {
        match event {
            InputEvent::PointerDown { x, y, button, .. } => {
                self.pointer_down(*x, *y, *button, target)
            }
            InputEvent::PointerMove { x, y } => self.pointer_move(*x, *y),
            InputEvent::PointerUp { button, .. } => self.pointer_up(*button),
            InputEvent::DoubleClick { .. } => target.is_some_and(|id| self.double_click(id)),
            InputEvent::KeyDown {
                key,
                modifiers,
                time_ms,
            } => self.key_down(key, *modifiers, *time_ms),
            InputEvent::KeyUp { key, time_ms } => self.key_up(key, *time_ms),
        }
    }

    pub fn pointer_down(&mut self, x: f32, y: f32, button: i16, target: Option<ElementId>) -> bool {
        if button != self.config.primary_button {
            return false;
        }
        let Some(id) = target else {
            return false;
        };
        if !self.registry.grab(id) {
            return false;
        }
        log::debug!("grab {id}");
        self.surface(id);
        self.place(id, x, y);
        true
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        match self.registry.grabbed() {
            Some(id) => self.place(id, x, y),
            None => false,
        }
    }

    pub fn pointer_up(&mut self, button: i16) -> bool {
        if button != self.config.primary_button {
            return false;
        }
        self.registry.release().is_some()
    }

    /// Toggle selection and swap the border indicator.
    pub fn double_click(&mut self, id: ElementId) -> bool {
        let Some(selected) = self.registry.toggle_selected(id) else {
            return false;
        };
        let border = if selected {
            self.config.selected_border
        } else {
            self.config.unselected_border
        };
        self.host.set_border(id, border);
        log::debug!("{} {id}", if selected { "select" } else { "deselect" });
        true
    }

    /// Arrow key pressed at host time `now_ms`. Ignored unless the key was
    /// previously up. Steps already due at `now_ms` run first; new tasks are
    /// scheduled from `now_ms`.
    pub fn key_down(&mut self, key: &str, modifiers: Modifiers, now_ms: f64) -> bool {
        let Some(direction) = Direction::from_key(key) else {
            return false;
        };
        let moved = self.tick(now_ms);
        if !self.registry.press(direction) {
            return moved;
        }

        let selected = self.registry.selected().to_vec();
        for id in &selected {
            if modifiers.command() {
                self.jump(*id, direction);
            } else {
                self.step(*id, direction);
                self.motion.spawn(*id, direction, self.clock_ms);
            }
        }
        !selected.is_empty() || moved
    }

    /// Arrow key released at host time `now_ms`: run the steps due up to the
    /// release, then stop every motion in that direction.
    pub fn key_up(&mut self, key: &str, now_ms: f64) -> bool {
        let Some(direction) = Direction::from_key(key) else {
            return false;
        };
        let moved = self.tick(now_ms);
        if !self.registry.lift(direction) {
            return moved;
        }
        self.motion.cancel_direction(direction) > 0 || moved
    }

    /// Advance the clock and run every motion step that has fallen due.
    /// Returns `true` if any element moved.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.clock_ms = self.clock_ms.max(now_ms);
        let steps = self.motion.due_steps(self.clock_ms);
        let mut moved = false;
        for (id, direction) in steps {
            moved |= self.step(id, direction);
        }
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PRIMARY_BUTTON;
    use mover_core::model::{BorderStyle, Color, Rect};
    use mover_core::scene::Scene;

    fn setup() -> (Coordinator<Scene>, ElementId) {
        let mut scene = Scene::new(Rect::new(0.0, 0.0, 500.0, 500.0));
        let id = ElementId::intern("coord_box");
        scene.insert(id, Rect::new(0.0, 0.0, 50.0, 50.0), Color::WHITE);
        let mut coord = Coordinator::new(scene);
        assert!(coord.register(id));
        (coord, id)
    }

    fn pos(coord: &Coordinator<Scene>, id: ElementId) -> (f32, f32) {
        let r = coord.host().element_rect(id).unwrap();
        (r.left, r.top)
    }

    #[test]
    fn place_scenario() {
        let (mut coord, id) = setup();
        coord.place(id, 10.0, 10.0);
        assert_eq!(pos(&coord, id), (0.0, 0.0));
        coord.place(id, 250.0, 250.0);
        assert_eq!(pos(&coord, id), (225.0, 225.0));
        coord.place(id, 490.0, 490.0);
        assert_eq!(pos(&coord, id), (450.0, 450.0));
    }

    #[test]
    fn place_is_idempotent() {
        let (mut coord, id) = setup();
        coord.place(id, 123.0, 321.0);
        let first = pos(&coord, id);
        coord.place(id, 123.0, 321.0);
        assert_eq!(pos(&coord, id), first);
    }

    #[test]
    fn place_rejects_non_finite() {
        let (mut coord, id) = setup();
        coord.place(id, 100.0, 100.0);
        assert!(!coord.place(id, f32::NAN, 10.0));
        assert!(!coord.place(id, 10.0, f32::INFINITY));
        assert_eq!(pos(&coord, id), (75.0, 75.0));
    }

    #[test]
    fn register_twice_is_noop() {
        let (mut coord, id) = setup();
        assert!(!coord.register(id));
        assert_eq!(coord.registry().len(), 1);
    }

    #[test]
    fn register_requires_host_element() {
        let (mut coord, _) = setup();
        assert!(!coord.register(ElementId::intern("coord_not_on_host")));
    }

    #[test]
    fn double_click_twice_restores_border() {
        let (mut coord, id) = setup();
        let original = coord.host().get(id).unwrap().border;
        assert!(coord.double_click(id));
        assert!(coord.is_selected(id));
        assert_eq!(coord.host().get(id).unwrap().border, BorderStyle::thick_dashed());
        assert!(coord.double_click(id));
        assert!(!coord.is_selected(id));
        assert_eq!(coord.host().get(id).unwrap().border, original);
    }

    #[test]
    fn secondary_button_does_not_grab() {
        let (mut coord, id) = setup();
        assert!(!coord.pointer_down(100.0, 100.0, 2, Some(id)));
        assert_eq!(coord.grabbed(), None);
        assert!(coord.pointer_down(100.0, 100.0, PRIMARY_BUTTON, Some(id)));
        assert!(!coord.pointer_up(2));
        assert_eq!(coord.grabbed(), Some(id));
        assert!(coord.pointer_up(PRIMARY_BUTTON));
        assert_eq!(coord.grabbed(), None);
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let (mut coord, id) = setup();
        coord.double_click(id);
        assert!(!coord.key_down("a", Modifiers::NONE, 0.0));
        assert!(!coord.key_up("Enter", 0.0));
        assert!(!coord.is_moving());
    }

    #[test]
    fn ctrl_arrow_jumps_to_edge() {
        let (mut coord, id) = setup();
        coord.place(id, 200.0, 300.0);
        coord.double_click(id);

        coord.key_down("ArrowRight", Modifiers::CTRL, 0.0);
        assert_eq!(pos(&coord, id), (450.0, 275.0));
        assert!(!coord.is_moving());
        coord.key_up("ArrowRight", 0.0);

        coord.key_down("ArrowUp", Modifiers::CTRL, 0.0);
        assert_eq!(pos(&coord, id), (450.0, 0.0));
        coord.key_up("ArrowUp", 0.0);
    }

    #[test]
    fn key_down_after_idle_schedules_from_press_time() {
        let (mut coord, id) = setup();
        coord.place(id, 125.0, 125.0);
        coord.double_click(id);

        assert!(coord.key_down("ArrowRight", Modifiers::NONE, 5000.0));
        assert_eq!(pos(&coord, id), (101.0, 100.0));
        assert!(!coord.tick(5006.0));
        assert!(coord.tick(5007.0));
        assert_eq!(pos(&coord, id), (102.0, 100.0));

        assert!(coord.key_up("ArrowRight", 5010.0));
        assert_eq!(pos(&coord, id), (102.0, 100.0));
    }

    #[test]
    fn key_up_runs_steps_due_before_release() {
        let (mut coord, id) = setup();
        coord.place(id, 125.0, 125.0);
        coord.double_click(id);

        coord.key_down("ArrowDown", Modifiers::NONE, 0.0);
        assert!(coord.key_up("ArrowDown", 14.0));
        assert_eq!(pos(&coord, id), (100.0, 103.0));
        assert!(!coord.tick(100.0));
    }
}
