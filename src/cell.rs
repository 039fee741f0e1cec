//! Cell geometry handed from parent to child during rendering.

/// An absolute rectangle on the page.
///
/// Parents compute cells for their children; a child never derives its own
/// position. Cells live for a single render call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cell {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Cell {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A cell at the origin.
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }
}
