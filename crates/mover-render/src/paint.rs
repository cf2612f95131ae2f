//! Scene → Vello drawing commands.
//!
//! Paints the container, then every element bottom-to-top: a fill and a
//! border stroke drawn inside the element's box.

use kurbo::{Affine, Rect, Stroke as KurboStroke};
use mover_core::host::Host;
use mover_core::model::{BorderStyle, Color, LineStyle, Rect as LayoutRect};
use mover_core::scene::{Scene, SceneElement};
use peniko::{Color as PenikoColor, Fill};
use vello::Scene as VelloScene;

/// Dash pattern for selected borders, in multiples of the border width.
const DASH: [f64; 2] = [3.0, 2.0];

const CONTAINER_FILL: PenikoColor = PenikoColor::from_rgb8(0xF5, 0xF5, 0xF7);
const CONTAINER_OUTLINE: PenikoColor = PenikoColor::from_rgb8(0x86, 0x86, 0x8B);

/// Paint the whole surface into a freshly-cleared Vello scene.
/// Returns the number of elements painted.
pub fn paint_scene(out: &mut VelloScene, scene: &Scene) -> usize {
    let container = to_kurbo(&scene.container());
    out.fill(Fill::NonZero, Affine::IDENTITY, CONTAINER_FILL, None, &container);
    out.stroke(
        &KurboStroke::new(1.0),
        Affine::IDENTITY,
        CONTAINER_OUTLINE,
        None,
        &container,
    );

    let mut painted = 0;
    for element in scene.paint_order() {
        paint_element(out, element);
        painted += 1;
    }
    log::trace!("painted {painted} elements");
    painted
}

fn paint_element(out: &mut VelloScene, element: &SceneElement) {
    let rect = to_kurbo(&element.rect);
    out.fill(Fill::NonZero, Affine::IDENTITY, to_peniko(element.fill), None, &rect);

    let border = &element.border;
    if border.width <= 0.0 {
        return;
    }
    let inset = rect.inset(-(border.width as f64) / 2.0);
    out.stroke(
        &border_stroke(border),
        Affine::IDENTITY,
        to_peniko(border.color),
        None,
        &inset,
    );
}

/// Kurbo stroke for a border: solid, or dashed relative to its width.
pub fn border_stroke(border: &BorderStyle) -> KurboStroke {
    let width = border.width as f64;
    let stroke = KurboStroke::new(width);
    match border.line {
        LineStyle::Solid => stroke,
        LineStyle::Dashed => stroke.with_dashes(0.0, DASH.map(|d| d * width)),
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn to_kurbo(r: &LayoutRect) -> Rect {
    Rect::new(
        r.left as f64,
        r.top as f64,
        r.right() as f64,
        r.bottom() as f64,
    )
}

fn to_peniko(c: Color) -> PenikoColor {
    PenikoColor::from_rgba8(c.r, c.g, c.b, c.a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mover_core::id::ElementId;
    use mover_core::model::Size;

    #[test]
    fn paints_every_element() {
        let mut scene = Scene::new(LayoutRect::new(0.0, 0.0, 300.0, 300.0));
        scene.create_element(Color::rgb(200, 10, 10), Size::new(50.0, 50.0));
        let id = ElementId::intern("paint_selected");
        scene.insert(id, LayoutRect::new(60.0, 60.0, 40.0, 40.0), Color::rgb(0, 90, 200));
        scene.set_border(id, BorderStyle::thick_dashed());

        let mut out = VelloScene::new();
        assert_eq!(paint_scene(&mut out, &scene), 2);
    }

    #[test]
    fn empty_scene_paints_container_only() {
        let scene = Scene::new(LayoutRect::new(0.0, 0.0, 10.0, 10.0));
        let mut out = VelloScene::new();
        assert_eq!(paint_scene(&mut out, &scene), 0);
    }

    #[test]
    fn dashed_border_scales_with_width() {
        let stroke = border_stroke(&BorderStyle::thick_dashed());
        assert_eq!(stroke.width, 2.0);
        assert_eq!(stroke.dash_pattern.as_slice(), &[6.0, 4.0]);

        let solid = border_stroke(&BorderStyle::thin_solid());
        assert_eq!(solid.width, 1.0);
        assert!(solid.dash_pattern.is_empty());
    }
}
