//! Staggered hexagon grid generation.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::config::HexFieldConfig;
use crate::model::{GridPoint, GridSnapshot, Viewport};

/// Horizontal spacing between cell centers, in hex sizes.
const HORIZ_SPACING: f64 = 1.3;
/// Horizontal shift applied to odd rows, in hex sizes.
const ROW_STAGGER: f64 = 0.65;

/// Spacing derived from the configured hex size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexMetrics {
    pub size: f64,
    pub row_height: f64,
    pub horiz_dist: f64,
    pub stagger: f64,
}

impl HexMetrics {
    pub fn new(cfg: &HexFieldConfig) -> Self {
        let size = cfg.hex_size;
        Self {
            size,
            row_height: 3f64.sqrt() * size * cfg.compaction,
            horiz_dist: HORIZ_SPACING * size,
            stagger: size * ROW_STAGGER,
        }
    }

    pub fn row_offset(&self, row: usize) -> f64 {
        if row % 2 == 1 { self.stagger } else { 0.0 }
    }

    /// Exclusive upper bounds of the loop variables for a viewport, as
    /// `(x_limit, y_limit)`. Points may additionally carry the odd-row stagger.
    pub fn limits(&self, viewport: Viewport) -> (f64, f64) {
        (
            viewport.width + 2.0 * self.size,
            viewport.height + self.row_height,
        )
    }

    fn is_usable(&self) -> bool {
        self.size.is_finite() && self.size > 0.0 && self.row_height > 0.0 && self.row_height.is_finite()
    }
}

/// Build the full set of cell centers covering `viewport`.
///
/// Rows start at y = 0 and step by the row height; odd rows are shifted
/// right by the stagger. Deterministic; degenerate viewports yield few or no points.
pub fn build_grid(viewport: Viewport, cfg: &HexFieldConfig) -> GridSnapshot {
    let m = HexMetrics::new(cfg);
    if !m.is_usable() || !viewport.width.is_finite() || !viewport.height.is_finite() {
        return GridSnapshot::new(viewport, Vec::new());
    }
    let (x_limit, y_limit) = m.limits(viewport);
    let mut points = Vec::new();
    let mut row = 0usize;
    loop {
        let y = row as f64 * m.row_height;
        if y >= y_limit {
            break;
        }
        let offset_x = m.row_offset(row);
        let mut col = 0usize;
        loop {
            let x = col as f64 * m.horiz_dist;
            if x >= x_limit {
                break;
            }
            points.push(GridPoint { x: x + offset_x, y });
            col += 1;
        }
        row += 1;
    }
    GridSnapshot::new(viewport, points)
}
