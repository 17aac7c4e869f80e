//! Proximity rendering: outlines the cells near the pointer.
//!
//! Only cells strictly inside the visibility radius produce draw calls.
//! Each one is pushed `offset` pixels along the pointer-to-cell direction
//! and fades linearly to transparent at the radius.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::PI;

use crate::config::HexFieldConfig;
use crate::model::{GridPoint, GridSnapshot, PointerState, Rgba};
use crate::surface::DrawSurface;

/// Where and how strongly one cell is drawn this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    pub center_x: f64,
    pub center_y: f64,
    pub opacity: f64,
}

pub fn proximity(p: GridPoint, pointer: PointerState, cfg: &HexFieldConfig) -> Option<Highlight> {
    let dx = p.x - pointer.x;
    let dy = p.y - pointer.y;
    let dist = dx.hypot(dy);
    if dist.is_nan() || dist >= cfg.visibility_radius {
        return None;
    }
    let (ox, oy) = if dist > 0.0 {
        (dx / dist * cfg.offset, dy / dist * cfg.offset)
    } else {
        (0.0, 0.0)
    };
    Some(Highlight {
        center_x: p.x + ox,
        center_y: p.y + oy,
        opacity: 1.0 - dist / cfg.visibility_radius,
    })
}

/// Stroke a regular hexagon outline with vertices at multiples of 60 degrees.
pub fn draw_hexagon<S: DrawSurface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    radius: f64,
    color: Rgba,
    line_width: f64,
) {
    let step = PI * 2.0 / 6.0;
    surface.begin_path();
    for i in 0..6 {
        let a = step * i as f64;
        let px = x + radius * a.cos();
        let py = y + radius * a.sin();
        if i == 0 {
            surface.move_to(px, py);
        } else {
            surface.line_to(px, py);
        }
    }
    surface.close_path();
    surface.set_stroke_color(color);
    surface.set_line_width(line_width);
    surface.stroke();
}

/// Clear the surface and draw every cell within reach of the pointer.
/// Returns how many cells were drawn.
pub fn render<S: DrawSurface + ?Sized>(
    grid: &GridSnapshot,
    pointer: PointerState,
    cfg: &HexFieldConfig,
    surface: &mut S,
) -> usize {
    let vp = grid.viewport();
    surface.clear_rect(0.0, 0.0, vp.width, vp.height);
    let radius = cfg.hex_size * cfg.outline_scale;
    let mut drawn = 0;
    for p in grid.points() {
        let Some(h) = proximity(*p, pointer, cfg) else {
            continue;
        };
        draw_hexagon(
            surface,
            h.center_x,
            h.center_y,
            radius,
            cfg.stroke_color.with_alpha(h.opacity),
            cfg.line_width,
        );
        drawn += 1;
    }
    drawn
}
