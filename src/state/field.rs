// Long-lived background state shared by the input handlers and the frame loop.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use crate::config::HexFieldConfig;
use crate::grid::build_grid;
use crate::model::{GridSnapshot, PointerState, Viewport};
use crate::render::render;
use crate::surface::DrawSurface;

#[derive(Clone, Debug)]
pub struct FieldState {
    pub config: HexFieldConfig,
    pub viewport: Viewport,
    pub grid: GridSnapshot,
    pub pointer: PointerState,
}

impl FieldState {
    /// Fresh state for `viewport` with the pointer parked at its center.
    pub fn new(viewport: Viewport, config: HexFieldConfig) -> Self {
        Self {
            grid: build_grid(viewport, &config),
            pointer: PointerState::centered_in(viewport),
            viewport,
            config,
        }
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer = PointerState { x, y };
    }

    /// Adopt a new viewport. The grid is rebuilt and swapped in whole.
    pub fn resized(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.grid = build_grid(viewport, &self.config);
    }

    pub fn apply_size<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        let (w, h) = self.viewport.pixel_size();
        surface.set_size(w, h);
    }

    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> usize {
        render(&self.grid, self.pointer, &self.config, surface)
    }
}
