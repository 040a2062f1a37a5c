#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// A point in viewport (client) coordinates, CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// An element's bounding box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Position of `pt` relative to this box, where `(0, 0)` is the top-left
    /// corner and `(1, 1)` the bottom-right. Not clamped.
    ///
    /// Returns `None` for a collapsed box, which has no meaningful fraction.
    #[must_use]
    pub fn fraction_of(&self, pt: Point) -> Option<Point> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        Some(Point {
            x: (pt.x - self.left) / self.width,
            y: (pt.y - self.top) / self.height,
        })
    }
}

#[cfg(feature = "hydrate")]
impl From<web_sys::DomRect> for Rect {
    fn from(r: web_sys::DomRect) -> Self {
        Self::new(r.left(), r.top(), r.width(), r.height())
    }
}

/// Viewport size in whole CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Build a viewport from raw `innerWidth` / `innerHeight`, flooring both.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width: width.floor(), height: height.floor() }
    }
}

/// CSS value for a pixel length.
#[must_use]
pub fn px_value(value: f64) -> String {
    format!("{value}px")
}

/// CSS value for a percentage.
#[must_use]
pub fn percent_value(value: f64) -> String {
    format!("{value}%")
}
