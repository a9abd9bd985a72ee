//! Multi-frame layer-stack management (the flash list).
//!
//! Each animation frame owns one [`LayerStack`]; the list grows lazily so
//! the host can jump to any frame index without pre-allocating frames it
//! may never touch.

use crate::draw::LayerStack;
use log::debug;

/// Ordered collection of per-frame layer stacks with one active frame.
///
/// Starts with exactly one frame. Selecting an index beyond the end
/// appends freshly constructed stacks (each holding the two reserved
/// placeholder layers) until the index is valid, then activates it.
pub struct FrameList {
    frames: Vec<LayerStack>,
    active: usize,
}

impl FrameList {
    /// Creates a frame list containing a single fresh stack, active.
    pub fn new() -> Self {
        Self {
            frames: vec![LayerStack::new()],
            active: 0,
        }
    }

    /// Number of frames materialized so far.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Index of the frame currently being edited.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Makes the frame at `index` active, materializing any missing
    /// frames in between as fresh stacks.
    pub fn select(&mut self, index: usize) {
        if index >= self.frames.len() {
            debug!(
                "materializing frames {}..={} on demand",
                self.frames.len(),
                index
            );
            while index >= self.frames.len() {
                self.frames.push(LayerStack::new());
            }
        }
        self.active = index;
    }

    /// The active frame's layer stack.
    pub fn active_stack(&self) -> &LayerStack {
        &self.frames[self.active]
    }

    /// Mutable access to the active frame's layer stack.
    pub fn active_stack_mut(&mut self) -> &mut LayerStack {
        &mut self.frames[self.active]
    }

    /// Returns the stack for `index` without materializing anything.
    pub fn stack(&self, index: usize) -> Option<&LayerStack> {
        self.frames.get(index)
    }
}

impl Default for FrameList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{CURRENT_LAYER, LAST_LAYER};

    #[test]
    fn starts_with_one_active_frame() {
        let frames = FrameList::new();
        assert_eq!(frames.frame_count(), 1);
        assert_eq!(frames.active_index(), 0);
    }

    #[test]
    fn select_grows_lazily_with_fresh_stacks() {
        let mut frames = FrameList::new();
        frames.select(3);

        assert_eq!(frames.frame_count(), 4);
        assert_eq!(frames.active_index(), 3);

        // Frames 1..=3 each hold exactly the two reserved placeholders.
        for index in 1..=3 {
            let stack = frames.stack(index).unwrap();
            assert_eq!(stack.len(), 2);
            assert_eq!(stack.last().name(), LAST_LAYER);
            assert_eq!(stack.current().name(), CURRENT_LAYER);
            assert!(!stack.last().visible());
        }
    }

    #[test]
    fn select_within_bounds_only_switches() {
        let mut frames = FrameList::new();
        frames.select(2);
        frames.select(0);
        assert_eq!(frames.frame_count(), 3);
        assert_eq!(frames.active_index(), 0);
    }
}
