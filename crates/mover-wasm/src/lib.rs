//! WASM bridge for Mover — exposes the coordinator to the host page.
//!
//! Compiled via `wasm-pack build --target web`. The page owns a single
//! `<canvas>`, forwards pointer/keyboard events here, calls `tick` from a
//! `requestAnimationFrame` loop, and calls `render` whenever a handler
//! reports a change.

mod logger;
mod render2d;

use mover_core::config::MoverConfig;
use mover_core::model::Rect;
use mover_core::scene::Scene;
use mover_core::snapshot::SceneSnapshot;
use mover_editor::input::{InputEvent, Modifiers};
use mover_editor::{Coordinator, Spawner};
use mover_render::hit::hit_test;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// The main WASM-facing controller for one play area.
#[wasm_bindgen]
pub struct MoverCanvas {
    coordinator: Coordinator<Scene>,
    spawner: Spawner<fn() -> f64>,
    width: f64,
    height: f64,
}

#[wasm_bindgen]
impl MoverCanvas {
    /// Create a controller whose container fills a `width` x `height` canvas.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Self {
        Self::build(width, height, MoverConfig::default())
    }

    /// Create a controller from a JSON `MoverConfig` (missing fields take defaults).
    pub fn with_config(width: f64, height: f64, config_json: &str) -> Result<MoverCanvas, JsValue> {
        let config = parse_config(config_json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self::build(width, height, config))
    }

    /// Set the console log level (`"off"` .. `"trace"`). Returns `false` for unknown names.
    pub fn set_log_level(&self, level: &str) -> bool {
        match logger::parse_level(level) {
            Some(filter) => {
                log::set_max_level(filter);
                true
            }
            None => false,
        }
    }

    /// Move/resize the container. Registered elements keep their old bounds.
    pub fn set_container(&mut self, left: f32, top: f32, width: f32, height: f32) {
        self.coordinator
            .host_mut()
            .resize_container(Rect::new(left, top, width, height));
    }

    /// Resize the canvas backing store.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Render the scene to a Canvas2D context.
    pub fn render(&self, ctx: &CanvasRenderingContext2d) {
        render2d::render_scene(ctx, self.coordinator.host(), self.width, self.height);
    }

    /// Handle pointer down. Returns true if anything changed.
    #[allow(clippy::too_many_arguments)]
    pub fn handle_pointer_down(
        &mut self,
        x: f32,
        y: f32,
        button: i16,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
    ) -> bool {
        let mods = Modifiers {
            shift,
            ctrl,
            alt,
            meta,
        };
        let event = InputEvent::from_pointer_down(x, y, button, mods);
        let hit = hit_test(self.coordinator.host(), x, y);
        self.coordinator.handle(&event, hit)
    }

    /// Handle pointer move. Returns true if an element moved.
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> bool {
        if !self.listening() {
            return false;
        }
        self.coordinator
            .handle(&InputEvent::from_pointer_move(x, y), None)
    }

    /// Handle pointer up. Returns true if an element was dropped.
    pub fn handle_pointer_up(&mut self, x: f32, y: f32, button: i16) -> bool {
        if !self.listening() {
            return false;
        }
        self.coordinator
            .handle(&InputEvent::from_pointer_up(x, y, button), None)
    }

    /// Handle double-click. Returns true if a selection toggled.
    pub fn handle_double_click(&mut self, x: f32, y: f32) -> bool {
        let hit = hit_test(self.coordinator.host(), x, y);
        self.coordinator
            .handle(&InputEvent::DoubleClick { x, y }, hit)
    }

    /// Handle `keydown`. `time_ms` is `event.timeStamp`, so motion started
    /// here is scheduled on the same clock as `tick`.
    #[allow(clippy::too_many_arguments)]
    pub fn handle_key_down(
        &mut self,
        key: &str,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
        time_ms: f64,
    ) -> bool {
        if !self.listening() {
            return false;
        }
        let mods = Modifiers {
            shift,
            ctrl,
            alt,
            meta,
        };
        self.coordinator
            .handle(&InputEvent::key_down(key, mods, time_ms), None)
    }

    /// Handle `keyup`. Returns true if any element moved or stopped.
    pub fn handle_key_up(&mut self, key: &str, time_ms: f64) -> bool {
        if !self.listening() {
            return false;
        }
        self.coordinator
            .handle(&InputEvent::key_up(key, time_ms), None)
    }

    /// Handle `keypress` for spawning (`+`) and despawning (`-`).
    pub fn handle_key_press(&mut self, key: &str) -> bool {
        self.spawner.handle_key(key, &mut self.coordinator)
    }

    /// Run due motion steps. Call once per animation frame.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.coordinator.tick(now_ms)
    }

    /// Whether arrow-key motion is running (the page may idle its frame loop otherwise).
    pub fn is_moving(&self) -> bool {
        self.coordinator.is_moving()
    }

    pub fn element_count(&self) -> usize {
        self.coordinator.registry().len()
    }

    /// Names of the selected elements, in selection order.
    pub fn get_selected_ids(&self) -> Vec<String> {
        self.coordinator
            .registry()
            .selected()
            .iter()
            .map(|id| id.as_str().to_string())
            .collect()
    }

    /// Current scene as JSON: `{"ok":true,"scene":{...}}` or `{"ok":false,"error":"..."}`.
    pub fn snapshot(&self) -> String {
        snapshot_json(&self.coordinator)
    }
}

// ─── Private helpers ─────────────────────────────────────────────────────

impl MoverCanvas {
    fn build(width: f64, height: f64, config: MoverConfig) -> Self {
        console_error_panic_hook_setup();
        logger::init(log::LevelFilter::Info);

        let container = Rect::new(0.0, 0.0, width as f32, height as f32);
        Self {
            coordinator: Coordinator::with_config(Scene::new(container), config),
            spawner: Spawner::new(random_sample as fn() -> f64),
            width,
            height,
        }
    }

    /// Global listeners are only attached while at least one element is registered.
    fn listening(&self) -> bool {
        self.coordinator.host().is_listening()
    }
}

fn random_sample() -> f64 {
    js_sys::Math::random()
}

/// Parse a JSON `MoverConfig`.
fn parse_config(json: &str) -> Result<MoverConfig, String> {
    let config: MoverConfig =
        serde_json::from_str(json).map_err(|e| format!("invalid config: {e}"))?;
    if !(config.tick_interval_ms.is_finite() && config.tick_interval_ms > 0.0) {
        return Err("invalid config: tick_interval_ms must be positive".to_string());
    }
    if !config.step.is_finite() {
        return Err("invalid config: step must be finite".to_string());
    }
    Ok(config)
}

fn snapshot_json(coordinator: &Coordinator<Scene>) -> String {
    let snapshot = SceneSnapshot::capture(coordinator.host(), |id| coordinator.is_selected(id));
    match serde_json::to_string(&snapshot) {
        Ok(json) => format!(r#"{{"ok":true,"scene":{json}}}"#),
        Err(e) => {
            let escaped = e.to_string().replace('\\', "\\\\").replace('"', "\\\"");
            format!(r#"{{"ok":false,"error":"Serialization error: {escaped}"}}"#)
        }
    }
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Mover WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
