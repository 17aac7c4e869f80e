//! Core data types for the hexagon background.
//! Everything here is plain data; behavior lives in `grid`, `render` and `state`.

use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Undisplaced center of one hexagon cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPoint {
    pub x: f64,
    pub y: f64,
}

/// Latest known pointer position in surface pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
}

impl PointerState {
    pub fn centered_in(viewport: Viewport) -> Self {
        Self {
            x: viewport.width * 0.5,
            y: viewport.height * 0.5,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Pixel dimensions for the backing surface; negative or NaN sizes collapse to 0.
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width.max(0.0) as u32, self.height.max(0.0) as u32)
    }
}

/// Immutable, ordered set of grid points built for one viewport.
///
/// Cloning is cheap (shared slice). A resize never edits a snapshot; it
/// builds a new one and swaps it in.
#[derive(Clone, Debug, PartialEq)]
pub struct GridSnapshot {
    viewport: Viewport,
    points: Rc<[GridPoint]>,
}

impl GridSnapshot {
    pub fn new(viewport: Viewport, points: Vec<GridPoint>) -> Self {
        Self {
            viewport,
            points: points.into(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when both handles share the same backing allocation.
    #[cfg(test)]
    pub fn same_allocation(&self, other: &GridSnapshot) -> bool {
        Rc::ptr_eq(&self.points, &other.points)
    }
}

/// Stroke color; the alpha channel is supplied per draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub fn with_alpha(self, a: f64) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a: a.clamp(0.0, 1.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub fn to_css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}
