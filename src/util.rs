//! Geometry primitives shared across the crate.
//!
//! This module provides:
//! - [`Point`]: integer 2D coordinate used for cursor and layer positions
//! - [`Size`]: width/height pair for layer bounds
//! - [`Rect`]: axis-aligned rectangle with a containment test

use serde::{Deserialize, Serialize};

/// Integer 2D coordinate in surface space.
///
/// Used for cursor locations, layer positions, and hit testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Creates a point from x/y coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Width/height pair in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// Creates a size from width/height.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Axis-aligned rectangle described by its top-left corner and size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Creates a rectangle from a top-left corner and a size.
    pub fn from_parts(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Returns the top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the size of the rectangle.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Tests whether `point` falls inside the rectangle.
    ///
    /// The left/top edges are inclusive, the right/bottom edges exclusive,
    /// so adjacent rectangles never both claim a shared border pixel.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x + self.width as i32
            && point.y < self.y + self.height as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive_left_exclusive_right() {
        let rect = Rect {
            x: 10,
            y: 10,
            width: 5,
            height: 5,
        };
        assert!(rect.contains(Point::new(10, 10)));
        assert!(rect.contains(Point::new(14, 14)));
        assert!(!rect.contains(Point::new(15, 10)));
        assert!(!rect.contains(Point::new(10, 15)));
        assert!(!rect.contains(Point::new(9, 10)));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        let rect = Rect::from_parts(Point::new(3, 3), Size::default());
        assert!(!rect.contains(Point::new(3, 3)));
    }
}
