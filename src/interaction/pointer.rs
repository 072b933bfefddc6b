//! Pointer → cell mapping and tooltip placement.

use egui::{Pos2, Rect, Vec2};

use crate::geometry::{Cell, GridSpec};

/// Cell under `pointer`, given where the surface is drawn on screen.
///
/// The surface may be displayed larger or smaller than its logical size, so
/// the pointer offset is first scaled into logical surface pixels and then
/// floor-divided by the tile size. Positions outside the surface produce
/// cells outside the grid (possibly negative).
pub fn pointer_to_cell(pointer: Pos2, display: Rect, grid: &GridSpec) -> Cell {
    let (logical_w, logical_h) = grid.surface_size();
    let sx = logical_w as f32 / display.width().max(f32::EPSILON);
    let sy = logical_h as f32 / display.height().max(f32::EPSILON);
    let rel = pointer - display.min;
    let tile = grid.tile as f32;
    Cell::new(
        (rel.x * sx / tile).floor() as i32,
        (rel.y * sy / tile).floor() as i32,
    )
}

/// Top-left corner for a tooltip of `size` anchored at `anchor`.
///
/// The tooltip sits at `anchor + offset`. If that would overflow the right
/// or bottom edge of `container` it is pulled back inside, leaving `margin`
/// pixels of slack, and it never starts left of or above the container.
pub fn place_tooltip(anchor: Pos2, size: Vec2, container: Rect, offset: Vec2, margin: f32) -> Pos2 {
    let mut pos = anchor + offset;
    let right = pos.x + size.x;
    if right > container.max.x {
        pos.x += container.max.x - right - margin;
    }
    let bottom = pos.y + size.y;
    if bottom > container.max.y {
        pos.y += container.max.y - bottom - margin;
    }
    pos.x = pos.x.max(container.min.x);
    pos.y = pos.y.max(container.min.y);
    pos
}
