//! Drawing tool (brush) registry.
//!
//! Tools are named, mutually exclusive input-handling strategies; exactly
//! one is active at a time. The registry is deliberately permissive:
//! selecting a name that was never registered leaves the active tool
//! untouched instead of failing, so a stale menu entry in the host UI can
//! never crash the core.

pub mod builtin;

pub use builtin::{Eraser, MoveTool, Pencil, Straw};

use crate::util::Point;
use log::{debug, warn};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Registry name of the built-in move tool (active at construction).
pub const MOVE_TOOL: &str = "MoveTool";
/// Registry name of the built-in color sampler.
pub const STRAW: &str = "Straw";
/// Registry name of the built-in eraser.
pub const ERASER: &str = "Eraser";
/// Registry name of the built-in pencil.
pub const PENCIL: &str = "Pencil";

/// A drawing tool: interprets pointer input against the canvas.
///
/// A brush has no identity of its own; its name is the key it was
/// registered under. Each brush tracks the cursor location it was last
/// applied or moved to.
pub trait Brush {
    /// Cursor location the brush last saw.
    fn location(&self) -> Point;
    fn set_location(&mut self, location: Point);

    /// Applies the tool at `at` (a click or drag sample from the host).
    fn apply(&mut self, at: Point);
}

/// Shared handle to a registered brush.
///
/// The whole core is single-threaded (§ concurrency model), so `Rc` +
/// `RefCell` suffice; pointer identity is what makes `is_active` work
/// with last-write-wins registration.
pub type BrushHandle = Rc<RefCell<dyn Brush>>;

/// Named collection of brushes with one active selection.
pub struct ToolBox {
    brushes: HashMap<String, BrushHandle>,
    active: BrushHandle,
}

impl ToolBox {
    /// Creates a toolbox holding the four built-in tools, with the move
    /// tool active.
    pub fn new() -> Self {
        let move_tool: BrushHandle = Rc::new(RefCell::new(MoveTool::new()));
        let mut brushes: HashMap<String, BrushHandle> = HashMap::new();
        brushes.insert(MOVE_TOOL.into(), Rc::clone(&move_tool));
        brushes.insert(STRAW.into(), Rc::new(RefCell::new(Straw::new())));
        brushes.insert(ERASER.into(), Rc::new(RefCell::new(Eraser::new())));
        brushes.insert(PENCIL.into(), Rc::new(RefCell::new(Pencil::new())));
        Self {
            brushes,
            active: move_tool,
        }
    }

    /// Registers `brush` under `name`, replacing any previous entry
    /// (last write wins). Returns the stored handle.
    pub fn register(&mut self, name: impl Into<String>, brush: impl Brush + 'static) -> BrushHandle {
        let handle: BrushHandle = Rc::new(RefCell::new(brush));
        self.register_handle(name, Rc::clone(&handle));
        handle
    }

    /// Registers an existing handle under `name` (last write wins).
    pub fn register_handle(&mut self, name: impl Into<String>, handle: BrushHandle) {
        let name = name.into();
        debug!("registering tool {name:?}");
        self.brushes.insert(name, handle);
    }

    /// Removes the brush registered under `name`, if any.
    ///
    /// The active tool is untouched even when its own entry is removed;
    /// it stays active until something else is selected.
    pub fn remove(&mut self, name: &str) -> Option<BrushHandle> {
        self.brushes.remove(name)
    }

    /// Looks up a registered brush without changing the selection.
    pub fn get(&self, name: &str) -> Option<BrushHandle> {
        self.brushes.get(name).map(Rc::clone)
    }

    /// Makes the brush under `name` active.
    ///
    /// Returns the newly activated handle on a hit, `None` on a miss (in
    /// which case the selection is untouched — the permissive policy).
    pub fn select(&mut self, name: &str) -> Option<BrushHandle> {
        match self.brushes.get(name) {
            Some(handle) => {
                self.active = Rc::clone(handle);
                debug!("tool {name:?} selected");
                Some(Rc::clone(handle))
            }
            None => {
                warn!("ignoring selection of unknown tool {name:?}");
                None
            }
        }
    }

    /// The currently active brush.
    pub fn active(&self) -> BrushHandle {
        Rc::clone(&self.active)
    }

    /// True iff a brush exists under `name` and it is the very instance
    /// that is active (pointer identity, not name comparison).
    pub fn is_active(&self, name: &str) -> bool {
        self.brushes
            .get(name)
            .is_some_and(|handle| Rc::ptr_eq(handle, &self.active))
    }

    /// Cursor location pass-through: reads the active brush's location.
    pub fn cursor_location(&self) -> Point {
        self.active.borrow().location()
    }

    /// Cursor location pass-through: moves the active brush's location.
    pub fn set_cursor_location(&mut self, location: Point) {
        self.active.borrow_mut().set_location(location);
    }
}

impl Default for ToolBox {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_tool_is_active_at_construction() {
        let tools = ToolBox::new();
        assert!(tools.is_active(MOVE_TOOL));
        assert!(!tools.is_active(PENCIL));
    }

    #[test]
    fn selecting_unknown_name_is_a_noop() {
        let mut tools = ToolBox::new();
        assert!(tools.select("Airbrush").is_none());
        assert!(tools.is_active(MOVE_TOOL));
    }

    #[test]
    fn register_is_last_write_wins() {
        let mut tools = ToolBox::new();
        let first = tools.register("Custom", Pencil::new());
        let looked_up = tools.get("Custom").unwrap();
        assert!(Rc::ptr_eq(&first, &looked_up));

        let second = tools.register("Custom", Pencil::new());
        let looked_up = tools.get("Custom").unwrap();
        assert!(Rc::ptr_eq(&second, &looked_up));
        assert!(!Rc::ptr_eq(&first, &looked_up));
    }

    #[test]
    fn is_active_tracks_identity_not_name() {
        let mut tools = ToolBox::new();
        tools.select(PENCIL).unwrap();
        assert!(tools.is_active(PENCIL));

        // Re-registering under the same name displaces the entry, so the
        // still-active old instance no longer matches by identity.
        tools.register(PENCIL, Pencil::new());
        assert!(!tools.is_active(PENCIL));
    }

    #[test]
    fn cursor_location_passes_through_to_active_brush() {
        let mut tools = ToolBox::new();
        tools.set_cursor_location(Point::new(7, 9));
        assert_eq!(tools.cursor_location(), Point::new(7, 9));
        assert_eq!(tools.active().borrow().location(), Point::new(7, 9));
    }
}
