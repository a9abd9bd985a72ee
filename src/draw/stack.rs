//! Per-frame layer stack with reserved current/last slots.
//!
//! Every frame owns one [`LayerStack`]. The bottom two positions are
//! reserved: index 0 is always the "LastLayer" (the previously edited
//! layer, kept for comparison), index 1 is always the "CurrentLayer"
//! (the layer being edited). Anything above index 1 is a free-form tail
//! of extra layers. The reserved slots are separate fields rather than
//! list entries, so a stack with fewer than two layers cannot be built
//! through the normal constructor at all.

use crate::draw::{Paintable, Surface};
use crate::draw::layer::Canvas;
use crate::util::Point;
use thiserror::Error;

/// Reserved name of the slot-0 layer.
pub const LAST_LAYER: &str = "LastLayer";
/// Reserved name of the slot-1 layer.
pub const CURRENT_LAYER: &str = "CurrentLayer";

/// Errors raised when a stack is rebuilt from host-supplied layers.
#[derive(Debug, Error)]
pub enum StackError {
    /// The reserved head slots require at least two layers.
    #[error("layer stack requires at least 2 layers, got {0}")]
    TooFewLayers(usize),
}

/// Ordered sequence of paintable layers for one frame.
///
/// Order is significant both ways: drawing walks index 0 upward
/// (back-to-front), hit testing walks the top index downward because
/// higher layers visually occlude lower ones.
impl std::fmt::Debug for LayerStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayerStack")
            .field("last", &self.last.name())
            .field("current", &self.current.name())
            .field("tail_len", &self.tail.len())
            .field("last_visible", &self.last_visible)
            .finish()
    }
}

pub struct LayerStack {
    /// Slot 0: the previously edited layer.
    last: Box<dyn Paintable>,
    /// Slot 1: the layer being edited.
    current: Box<dyn Paintable>,
    /// Extra layers at indices >= 2, in insertion order.
    tail: Vec<Box<dyn Paintable>>,
    /// Mirrors slot-0 visibility across explicit toggles (promotion
    /// forces slot 0 invisible without touching this).
    #[allow(dead_code)]
    last_visible: bool,
}

impl LayerStack {
    /// Creates a fresh stack holding the two reserved placeholder canvases.
    ///
    /// The last-layer placeholder starts invisible; the current-layer
    /// placeholder starts with canvas defaults (visible).
    pub fn new() -> Self {
        let mut last = Canvas::new(LAST_LAYER);
        last.set_visible(false);
        Self {
            last: Box::new(last),
            current: Box::new(Canvas::new(CURRENT_LAYER)),
            tail: Vec::new(),
            last_visible: false,
        }
    }

    /// Rebuilds a stack from an ordered list of layers (index 0 = last,
    /// index 1 = current, rest = tail).
    ///
    /// The head layers are relabeled to the reserved slot names so the
    /// naming invariant holds no matter what the host passed in.
    pub fn from_layers(layers: Vec<Box<dyn Paintable>>) -> Result<Self, StackError> {
        if layers.len() < 2 {
            return Err(StackError::TooFewLayers(layers.len()));
        }
        let mut iter = layers.into_iter();
        let mut last = iter.next().expect("length checked above");
        let mut current = iter.next().expect("length checked above");
        last.set_name(LAST_LAYER);
        current.set_name(CURRENT_LAYER);
        let last_visible = last.visible();
        Ok(Self {
            last,
            current,
            tail: iter.collect(),
            last_visible,
        })
    }

    /// Total number of layers, reserved slots included. Never below 2.
    pub fn len(&self) -> usize {
        2 + self.tail.len()
    }

    /// Always false; kept so the type plays well with length-based APIs.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the layer at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&dyn Paintable> {
        match index {
            0 => Some(self.last.as_ref()),
            1 => Some(self.current.as_ref()),
            _ => self.tail.get(index - 2).map(|l| l.as_ref()),
        }
    }

    /// The layer currently being edited (slot 1).
    pub fn current(&self) -> &dyn Paintable {
        self.current.as_ref()
    }

    /// Mutable access to the current layer.
    pub fn current_mut(&mut self) -> &mut dyn Paintable {
        self.current.as_mut()
    }

    /// The previously edited layer (slot 0).
    pub fn last(&self) -> &dyn Paintable {
        self.last.as_ref()
    }

    /// Replaces slot 0 verbatim: no relabeling, no visibility change.
    pub fn set_last(&mut self, layer: Box<dyn Paintable>) {
        self.last = layer;
    }

    /// Promotes `layer` to the current slot, demoting the old current
    /// layer to the last slot.
    ///
    /// Slot positions survive the swap even though content moves: the
    /// demoted layer takes over the former slot-0 position (invisible,
    /// renamed), the promoted layer takes over the former slot-1 position
    /// (visible, renamed). Callers are expected to emit a layer-changed
    /// notification afterwards.
    pub fn promote(&mut self, layer: Box<dyn Paintable>) {
        let last_location = self.last.location();
        let current_location = self.current.location();

        let mut demoted = std::mem::replace(&mut self.current, layer);
        demoted.set_location(last_location);
        demoted.set_name(LAST_LAYER);
        demoted.set_visible(false);
        self.last = demoted;

        self.current.set_location(current_location);
        self.current.set_name(CURRENT_LAYER);
        self.current.set_visible(true);
    }

    /// Current visibility of the last layer (slot 0).
    pub fn last_visible(&self) -> bool {
        self.last.visible()
    }

    /// Sets slot-0 visibility, returning whether anything changed.
    ///
    /// Setting the value already in place is a pure no-op; callers emit a
    /// visibility notification only when this returns true.
    pub fn set_last_visible(&mut self, visible: bool) -> bool {
        if self.last.visible() == visible {
            return false;
        }
        self.last.set_visible(visible);
        self.last_visible = visible;
        true
    }

    /// Appends layers to the top of the stack.
    pub fn add_layers(&mut self, layers: impl IntoIterator<Item = Box<dyn Paintable>>) {
        self.tail.extend(layers);
    }

    /// Index of the topmost layer whose bounds contain `point`.
    ///
    /// Scans from the highest index downward because later-added layers
    /// occlude earlier ones; `None` when no layer matches.
    pub fn index_of(&self, point: Point) -> Option<usize> {
        (0..self.len())
            .rev()
            .find(|&i| self.get(i).is_some_and(|layer| layer.contains(point)))
    }

    /// Draws every layer back-to-front against the supplied surface.
    ///
    /// The stack does not filter on visibility; each layer honors its own
    /// flag inside `draw`.
    pub fn draw(&self, surface: &mut dyn Surface) {
        self.last.draw(surface);
        self.current.draw(surface);
        for layer in &self.tail {
            layer.draw(surface);
        }
    }
}

impl Default for LayerStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::layer::Canvas;
    use crate::util::Size;

    fn canvas_at(name: &str, x: i32, y: i32, w: u32, h: u32) -> Box<dyn Paintable> {
        Box::new(Canvas::with_bounds(name, Point::new(x, y), Size::new(w, h)))
    }

    #[test]
    fn fresh_stack_holds_reserved_placeholders() {
        let stack = LayerStack::new();
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.last().name(), LAST_LAYER);
        assert_eq!(stack.current().name(), CURRENT_LAYER);
        assert!(!stack.last().visible());
        assert!(stack.current().visible());
    }

    #[test]
    fn promote_preserves_slot_positions() {
        let mut stack = LayerStack::from_layers(vec![
            canvas_at("a", 1, 2, 4, 4),
            canvas_at("b", 10, 20, 4, 4),
        ])
        .unwrap();

        stack.promote(canvas_at("c", 99, 99, 4, 4));

        // Old current ("b") demoted into slot 0 at the former slot-0 position.
        assert_eq!(stack.last().name(), LAST_LAYER);
        assert_eq!(stack.last().location(), Point::new(1, 2));
        assert!(!stack.last().visible());

        // New layer ("c") promoted into slot 1 at the former slot-1 position.
        assert_eq!(stack.current().name(), CURRENT_LAYER);
        assert_eq!(stack.current().location(), Point::new(10, 20));
        assert!(stack.current().visible());
    }

    #[test]
    fn set_last_visible_reports_change() {
        let mut stack = LayerStack::new();
        assert!(!stack.last_visible());
        assert!(!stack.set_last_visible(false)); // no-op
        assert!(stack.set_last_visible(true));
        assert!(stack.last_visible());
        assert!(!stack.set_last_visible(true)); // no-op again
    }

    #[test]
    fn index_of_returns_topmost_match() {
        // Slot 0 covers region A, slot 1 covers region B, the extra layer
        // covers A again; a point inside A but outside B must hit the
        // extra layer, not slot 0.
        let mut stack = LayerStack::from_layers(vec![
            canvas_at("a", 0, 0, 10, 10),
            canvas_at("b", 50, 50, 10, 10),
        ])
        .unwrap();
        stack.add_layers(vec![canvas_at("extra", 0, 0, 10, 10)]);

        assert_eq!(stack.index_of(Point::new(5, 5)), Some(2));
        assert_eq!(stack.index_of(Point::new(55, 55)), Some(1));
        assert_eq!(stack.index_of(Point::new(200, 200)), None);
    }

    #[test]
    fn from_layers_rejects_short_lists() {
        let err = LayerStack::from_layers(vec![canvas_at("only", 0, 0, 1, 1)]).unwrap_err();
        assert!(matches!(err, StackError::TooFewLayers(1)));
    }

    #[test]
    fn from_layers_relabels_reserved_slots() {
        let stack = LayerStack::from_layers(vec![
            canvas_at("whatever", 0, 0, 1, 1),
            canvas_at("something", 0, 0, 1, 1),
            canvas_at("extra", 0, 0, 1, 1),
        ])
        .unwrap();
        assert_eq!(stack.last().name(), LAST_LAYER);
        assert_eq!(stack.current().name(), CURRENT_LAYER);
        assert_eq!(stack.get(2).unwrap().name(), "extra");
    }
}
