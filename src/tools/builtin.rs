//! The four built-in drawing tools.
//!
//! Each tool keeps only the input-side state the core needs to expose;
//! what a tool actually does to pixels happens in the host against the
//! rendering surface.

use super::Brush;
use crate::util::Point;

/// Drags the current layer around. Remembers where a drag started so the
/// host can compute the offset.
#[derive(Debug, Default)]
pub struct MoveTool {
    location: Point,
    grab_origin: Option<Point>,
}

impl MoveTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the current drag started, if one is in progress.
    pub fn grab_origin(&self) -> Option<Point> {
        self.grab_origin
    }

    /// Ends the drag gesture.
    pub fn release(&mut self) {
        self.grab_origin = None;
    }
}

impl Brush for MoveTool {
    fn location(&self) -> Point {
        self.location
    }

    fn set_location(&mut self, location: Point) {
        self.location = location;
    }

    fn apply(&mut self, at: Point) {
        if self.grab_origin.is_none() {
            self.grab_origin = Some(at);
        }
        self.location = at;
    }
}

/// Color sampler ("straw"): records the point to sample from.
#[derive(Debug, Default)]
pub struct Straw {
    location: Point,
    sampled_at: Option<Point>,
}

impl Straw {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently sampled point, if any.
    pub fn sampled_at(&self) -> Option<Point> {
        self.sampled_at
    }
}

impl Brush for Straw {
    fn location(&self) -> Point {
        self.location
    }

    fn set_location(&mut self, location: Point) {
        self.location = location;
    }

    fn apply(&mut self, at: Point) {
        self.sampled_at = Some(at);
        self.location = at;
    }
}

/// Eraser: accumulates the points of the current erase stroke.
#[derive(Debug, Default)]
pub struct Eraser {
    location: Point,
    stroke: Vec<Point>,
}

impl Eraser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points of the stroke in progress.
    pub fn stroke(&self) -> &[Point] {
        &self.stroke
    }

    /// Finishes the stroke, returning its points.
    pub fn take_stroke(&mut self) -> Vec<Point> {
        std::mem::take(&mut self.stroke)
    }
}

impl Brush for Eraser {
    fn location(&self) -> Point {
        self.location
    }

    fn set_location(&mut self, location: Point) {
        self.location = location;
    }

    fn apply(&mut self, at: Point) {
        self.stroke.push(at);
        self.location = at;
    }
}

/// Pencil: accumulates the points of the current freehand stroke.
#[derive(Debug, Default)]
pub struct Pencil {
    location: Point,
    stroke: Vec<Point>,
}

impl Pencil {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points of the stroke in progress.
    pub fn stroke(&self) -> &[Point] {
        &self.stroke
    }

    /// Finishes the stroke, returning its points.
    pub fn take_stroke(&mut self) -> Vec<Point> {
        std::mem::take(&mut self.stroke)
    }
}

impl Brush for Pencil {
    fn location(&self) -> Point {
        self.location
    }

    fn set_location(&mut self, location: Point) {
        self.location = location;
    }

    fn apply(&mut self, at: Point) {
        self.stroke.push(at);
        self.location = at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_tool_remembers_grab_origin() {
        let mut tool = MoveTool::new();
        tool.apply(Point::new(3, 4));
        tool.apply(Point::new(8, 9));
        assert_eq!(tool.grab_origin(), Some(Point::new(3, 4)));
        assert_eq!(tool.location(), Point::new(8, 9));
        tool.release();
        assert_eq!(tool.grab_origin(), None);
    }

    #[test]
    fn pencil_accumulates_stroke_points() {
        let mut pencil = Pencil::new();
        pencil.apply(Point::new(0, 0));
        pencil.apply(Point::new(1, 1));
        assert_eq!(pencil.stroke(), &[Point::new(0, 0), Point::new(1, 1)]);
        assert_eq!(pencil.take_stroke().len(), 2);
        assert!(pencil.stroke().is_empty());
    }

    #[test]
    fn straw_records_sample_point() {
        let mut straw = Straw::new();
        assert_eq!(straw.sampled_at(), None);
        straw.apply(Point::new(12, 7));
        assert_eq!(straw.sampled_at(), Some(Point::new(12, 7)));
    }
}
