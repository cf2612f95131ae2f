//! Canvas2D renderer.
//!
//! Draws the play area and its elements to an HTML `<canvas>` via
//! `CanvasRenderingContext2d`, bottom-to-top like the Vello painter.

use mover_core::host::Host;
use mover_core::model::{BorderStyle, LineStyle, Rect};
use mover_core::scene::{Scene, SceneElement};
use web_sys::CanvasRenderingContext2d;

const PAGE_BG: &str = "#FFFFFF";
const CONTAINER_BG: &str = "#F5F5F7";
const CONTAINER_OUTLINE: &str = "#86868B";

/// Render the whole surface.
pub fn render_scene(
    ctx: &CanvasRenderingContext2d,
    scene: &Scene,
    canvas_width: f64,
    canvas_height: f64,
) {
    ctx.set_fill_style_str(PAGE_BG);
    ctx.fill_rect(0.0, 0.0, canvas_width, canvas_height);

    draw_container(ctx, &scene.container());

    for element in scene.paint_order() {
        draw_element(ctx, element);
    }
}

fn draw_container(ctx: &CanvasRenderingContext2d, r: &Rect) {
    let (x, y, w, h) = (r.left as f64, r.top as f64, r.width as f64, r.height as f64);
    ctx.set_fill_style_str(CONTAINER_BG);
    ctx.fill_rect(x, y, w, h);
    set_dash(ctx, &[]);
    ctx.set_line_width(1.0);
    ctx.set_stroke_style_str(CONTAINER_OUTLINE);
    ctx.stroke_rect(x, y, w, h);
}

fn draw_element(ctx: &CanvasRenderingContext2d, element: &SceneElement) {
    let r = &element.rect;
    let (x, y, w, h) = (r.left as f64, r.top as f64, r.width as f64, r.height as f64);
    ctx.set_fill_style_str(&element.fill.to_hex());
    ctx.fill_rect(x, y, w, h);
    draw_border(ctx, &element.border, x, y, w, h);
}

/// Border drawn inside the box, matching CSS `box-sizing: border-box`.
fn draw_border(ctx: &CanvasRenderingContext2d, border: &BorderStyle, x: f64, y: f64, w: f64, h: f64) {
    let bw = border.width as f64;
    if bw <= 0.0 {
        return;
    }
    match border.line {
        LineStyle::Solid => set_dash(ctx, &[]),
        LineStyle::Dashed => set_dash(ctx, &[3.0 * bw, 2.0 * bw]),
    }
    ctx.set_line_width(bw);
    ctx.set_stroke_style_str(&border.color.to_hex());
    ctx.stroke_rect(x + bw / 2.0, y + bw / 2.0, w - bw, h - bw);
    set_dash(ctx, &[]);
}

fn set_dash(ctx: &CanvasRenderingContext2d, pattern: &[f64]) {
    let segments = js_sys::Array::new();
    for d in pattern {
        segments.push(&wasm_bindgen::JsValue::from_f64(*d));
    }
    let _ = ctx.set_line_dash(&segments);
}
