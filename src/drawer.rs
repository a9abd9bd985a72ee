//! The per-document editing state facade.
//!
//! One [`Drawer`] owns everything the canvas of an open document displays:
//! the tool registry, the frame list with its layer stacks, the current
//! drawing color, the shared property map, and the notification hub. All
//! mutations go through it so that the matching notifications fire at the
//! right moment.

use crate::config::DrawerConfig;
use crate::draw::{Color, LayerStack, Paintable, Sprite, SpriteFactory, Surface};
use crate::draw::layer::default_sprite_factory;
use crate::event::{ColorEvent, Hub, ImageEvent, LayerEvent, ToolEvent, VisibilityEvent};
use crate::frames::FrameList;
use crate::props::Properties;
use crate::tools::{Brush, BrushHandle, ToolBox};
use crate::util::Point;
use log::{info, warn};

/// Editing state core for one open document.
///
/// Single-threaded by design: the owning UI thread drives every call, and
/// notifications run inline before the mutating call returns. Nothing here
/// is `Send`; clone data out in an observer if it must cross threads.
pub struct Drawer {
    tools: ToolBox,
    frames: FrameList,
    hub: Hub,
    color: Color,
    properties: Properties,
    sprite_factory: SpriteFactory,
}

impl Drawer {
    /// Creates a drawer with the four built-in tools (move active), one
    /// frame holding the two reserved placeholder layers, a white drawing
    /// color, and an empty property map.
    pub fn new() -> Self {
        Self {
            tools: ToolBox::new(),
            frames: FrameList::new(),
            hub: Hub::new(),
            color: Color::default(),
            properties: Properties::new(),
            sprite_factory: default_sprite_factory(),
        }
    }

    /// Creates a drawer seeded from a [`DrawerConfig`].
    ///
    /// An unknown `initial_tool` name is ignored with a warning and the
    /// move tool stays active, matching the permissive selection policy.
    pub fn with_config(config: DrawerConfig) -> Self {
        let mut drawer = Self::new();
        drawer.color = config.initial_color.to_color();
        drawer.tools.select(&config.initial_tool);
        drawer.properties.extend(config.properties);
        info!("drawer initialized with tool {:?}", config.initial_tool);
        drawer
    }

    // ========================================================================
    // Notification subscriptions
    // ========================================================================

    /// Subscribes to tool-changed notifications.
    pub fn on_tool_changed(&mut self, observer: impl FnMut(&ToolEvent) + 'static) {
        self.hub.on_tool_changed(observer);
    }

    /// Subscribes to color-changed notifications.
    ///
    /// These fire before the new color is committed; the event carries both
    /// the old and the new value.
    pub fn on_color_changed(&mut self, observer: impl FnMut(&ColorEvent) + 'static) {
        self.hub.on_color_changed(observer);
    }

    /// Subscribes to layer-changed (current-layer promotion) notifications.
    pub fn on_layer_changed(&mut self, observer: impl FnMut(&LayerEvent<'_>) + 'static) {
        self.hub.on_layer_changed(observer);
    }

    /// Subscribes to layer-visibility notifications.
    pub fn on_layer_visibility_changed(
        &mut self,
        observer: impl FnMut(&VisibilityEvent) + 'static,
    ) {
        self.hub.on_layer_visibility_changed(observer);
    }

    /// Subscribes to the image-changed pass-through channel.
    pub fn on_image_changed(&mut self, observer: impl FnMut(&ImageEvent<'_>) + 'static) {
        self.hub.on_image_changed(observer);
    }

    /// Forwards an external image-changed event to subscribers.
    ///
    /// Pure pass-through: no drawer state backs this channel.
    pub fn notify_image_changed(&mut self, source: Option<&str>) {
        self.hub.emit_image_changed(&ImageEvent { source });
    }

    // ========================================================================
    // Tools
    // ========================================================================

    /// Registers `brush` under `name` (last write wins) and returns the
    /// stored handle.
    pub fn register_tool(
        &mut self,
        name: impl Into<String>,
        brush: impl Brush + 'static,
    ) -> BrushHandle {
        self.tools.register(name, brush)
    }

    /// Removes the tool registered under `name`, if any. The active tool
    /// keeps working even when its own entry is removed.
    pub fn remove_tool(&mut self, name: &str) -> Option<BrushHandle> {
        self.tools.remove(name)
    }

    /// Makes the tool under `name` active and notifies subscribers.
    ///
    /// Unknown names are a silent no-op; either way the active tool after
    /// the call is returned (the indexer-get semantics of the registry).
    pub fn select_tool(&mut self, name: &str) -> BrushHandle {
        if let Some(brush) = self.tools.select(name) {
            self.hub.emit_tool_changed(&ToolEvent { brush });
        }
        self.tools.active()
    }

    /// True iff the brush registered under `name` is the active instance.
    pub fn is_tool_active(&self, name: &str) -> bool {
        self.tools.is_active(name)
    }

    /// The currently active brush.
    pub fn active_tool(&self) -> BrushHandle {
        self.tools.active()
    }

    /// Applies the active tool at `at` (a click or drag sample).
    pub fn apply_tool(&mut self, at: Point) {
        self.tools.active().borrow_mut().apply(at);
    }

    /// Cursor location of the active brush.
    pub fn cursor_location(&self) -> Point {
        self.tools.cursor_location()
    }

    /// Moves the active brush's cursor location.
    pub fn set_cursor_location(&mut self, location: Point) {
        self.tools.set_cursor_location(location);
    }

    // ========================================================================
    // Color
    // ========================================================================

    /// The current drawing color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Assigns the drawing color.
    ///
    /// Observers are notified *before* the value is committed, so reading
    /// the color from inside an observer still yields the old value. This
    /// ordering is contractual and specific to the color channel.
    pub fn set_color(&mut self, color: Color) {
        self.hub.emit_color_changed(&ColorEvent {
            old: self.color,
            new: color,
        });
        self.color = color;
    }

    // ========================================================================
    // Layers (active frame's stack)
    // ========================================================================

    /// The active frame's layer stack.
    pub fn layers(&self) -> &LayerStack {
        self.frames.active_stack()
    }

    /// The layer being edited (reserved slot 1).
    pub fn current_layer(&self) -> &dyn Paintable {
        self.frames.active_stack().current()
    }

    /// Promotes `layer` into the current slot and notifies subscribers.
    ///
    /// The displaced current layer moves down into the last slot; slot
    /// positions are preserved across the swap (see [`LayerStack::promote`]).
    pub fn set_current_layer(&mut self, layer: Box<dyn Paintable>) {
        self.frames.active_stack_mut().promote(layer);
        let stack = self.frames.active_stack();
        self.hub.emit_layer_changed(&LayerEvent {
            last: stack.last(),
            current: stack.current(),
            changed_index: 1,
        });
    }

    /// Mutable access to the current layer, e.g. for the move tool to
    /// reposition it. Bypasses notifications by design; only promotions
    /// and visibility toggles notify.
    pub fn current_layer_mut(&mut self) -> &mut dyn Paintable {
        self.frames.active_stack_mut().current_mut()
    }

    /// The previously edited layer (reserved slot 0).
    pub fn last_layer(&self) -> &dyn Paintable {
        self.frames.active_stack().last()
    }

    /// Replaces slot 0 verbatim: no relabeling, no notification.
    pub fn set_last_layer(&mut self, layer: Box<dyn Paintable>) {
        self.frames.active_stack_mut().set_last(layer);
    }

    /// Visibility of the last layer.
    pub fn last_layer_visible(&self) -> bool {
        self.frames.active_stack().last_visible()
    }

    /// Toggles last-layer visibility.
    ///
    /// Setting the value already in place emits nothing; an actual change
    /// emits exactly one visibility notification for slot 0.
    pub fn set_last_layer_visible(&mut self, visible: bool) {
        if self.frames.active_stack_mut().set_last_visible(visible) {
            self.hub.emit_layer_visibility_changed(&VisibilityEvent {
                changed_index: 0,
                visible,
            });
        }
    }

    /// Appends layers to the top of the active stack.
    pub fn add_layers(&mut self, layers: impl IntoIterator<Item = Box<dyn Paintable>>) {
        self.frames.active_stack_mut().add_layers(layers);
    }

    /// Converts sprites through the installed factory and appends the
    /// resulting layers to the top of the active stack.
    pub fn add_sprite_layers(&mut self, sprites: impl IntoIterator<Item = Sprite>) {
        let factory = &self.sprite_factory;
        let layers: Vec<Box<dyn Paintable>> = sprites.into_iter().map(|s| factory(s)).collect();
        self.frames.active_stack_mut().add_layers(layers);
    }

    /// Installs a replacement sprite-to-layer conversion.
    pub fn set_sprite_factory(&mut self, factory: SpriteFactory) {
        self.sprite_factory = factory;
    }

    /// Rebuilds the stack from sprites. Not implemented: the intended
    /// semantics were never settled upstream, so this leaves the stack
    /// untouched rather than guessing.
    pub fn replace_layers(&mut self, _sprites: impl IntoIterator<Item = Sprite>) {
        warn!("replace_layers is not implemented; layer stack left untouched");
    }

    /// Index of the topmost layer in the active stack containing `point`,
    /// or `None` when nothing is hit.
    pub fn index_of_layer(&self, point: Point) -> Option<usize> {
        self.frames.active_stack().index_of(point)
    }

    /// Draws the active stack back-to-front onto the supplied surface.
    pub fn draw(&self, surface: &mut dyn Surface) {
        self.frames.active_stack().draw(surface);
    }

    // ========================================================================
    // Frames
    // ========================================================================

    /// Number of frames materialized so far.
    pub fn frame_count(&self) -> usize {
        self.frames.frame_count()
    }

    /// Index of the active frame.
    pub fn active_frame_index(&self) -> usize {
        self.frames.active_index()
    }

    /// Switches editing to frame `index`, materializing missing frames
    /// with fresh placeholder stacks along the way.
    pub fn select_frame(&mut self, index: usize) {
        self.frames.select(index);
    }

    // ========================================================================
    // Properties
    // ========================================================================

    /// Shared key/value configuration, opaque to the core.
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }
}

impl Default for Drawer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DrawerConfig;
    use crate::draw::{CURRENT_LAYER, LAST_LAYER, color};
    use crate::tools;

    #[test]
    fn construction_matches_documented_defaults() {
        let drawer = Drawer::new();
        assert!(drawer.is_tool_active(tools::MOVE_TOOL));
        assert_eq!(drawer.frame_count(), 1);
        assert_eq!(drawer.color(), color::WHITE);
        assert_eq!(drawer.current_layer().name(), CURRENT_LAYER);
        assert_eq!(drawer.last_layer().name(), LAST_LAYER);
        assert!(drawer.properties().is_empty());
    }

    #[test]
    fn with_config_applies_color_tool_and_properties() {
        let config = DrawerConfig::from_toml_str(
            "initial_color = \"blue\"\ninitial_tool = \"Pencil\"\n\n[properties]\ngrid = true\n",
        )
        .unwrap();
        let drawer = Drawer::with_config(config);
        assert_eq!(drawer.color(), color::BLUE);
        assert!(drawer.is_tool_active(tools::PENCIL));
        assert!(drawer.properties().contains("grid"));
    }

    #[test]
    fn with_config_ignores_unknown_initial_tool() {
        let config = DrawerConfig::from_toml_str("initial_tool = \"Airbrush\"").unwrap();
        let drawer = Drawer::with_config(config);
        assert!(drawer.is_tool_active(tools::MOVE_TOOL));
    }
}
