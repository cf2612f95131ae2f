//! Clamp-to-bounds placement.
//!
//! Every motion (drag, arrow-key steps, jump-to-edge) funnels through
//! `clamp_to_bounds`: center the element on the target point unless that
//! would cross an edge of its container, in which case pin it flush.

use crate::model::{ContainerBounds, Direction, Rect, Size};

/// Compute the `(left, top)` that centers an element of `size` on `(x, y)`
/// while keeping it fully inside `bounds`.
///
/// The near edge wins when the element is larger than its container.
pub fn clamp_to_bounds(x: f32, y: f32, size: Size, bounds: &ContainerBounds) -> (f32, f32) {
    let (half_w, half_h) = size.half();

    let left = if x - half_w < bounds.left {
        bounds.left
    } else if x + half_w > bounds.right {
        bounds.right - size.width
    } else {
        x - half_w
    };

    let top = if y - half_h < bounds.top {
        bounds.top
    } else if y + half_h > bounds.bottom {
        bounds.bottom - size.height
    } else {
        y - half_h
    };

    (left, top)
}

/// Target center for jumping flush against one edge of the container.
///
/// The moved axis targets the edge offset by half the element's size;
/// the other axis keeps the element's live center.
pub fn edge_target(
    direction: Direction,
    current: &Rect,
    size: Size,
    bounds: &ContainerBounds,
) -> (f32, f32) {
    let (half_w, half_h) = size.half();
    let cx = current.left + half_w;
    let cy = current.top + half_h;
    match direction {
        Direction::Left => (bounds.left + half_w, cy),
        Direction::Right => (bounds.right - half_w, cy),
        Direction::Up => (cx, bounds.top + half_h),
        Direction::Down => (cx, bounds.bottom - half_h),
    }
}
