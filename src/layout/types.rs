use serde::Serialize;

use crate::ir::Tree;

use super::error::LayoutError;
use super::relocation::AnchorPlacement;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Pixel coordinates, truncated toward zero.
    pub fn truncated(self) -> (i64, i64) {
        (self.x as i64, self.y as i64)
    }
}

/// Canvas extents in integer units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Bounds {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl Bounds {
    pub fn width(&self) -> i64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> i64 {
        self.max_y - self.min_y
    }

    pub fn view_box(&self) -> String {
        format!(
            "{} {} {} {}",
            self.min_x,
            self.min_y,
            self.width(),
            self.height()
        )
    }
}

/// Result of the layout pass: the relocated tree plus what was skipped.
#[derive(Debug, Clone)]
pub struct Layout {
    pub tree: Tree,
    pub bounds: Bounds,
    pub anchors: Vec<AnchorPlacement>,
    pub skipped: Vec<LayoutError>,
}
