//! Paintable layer entities.
//!
//! Everything the editor composites is a [`Paintable`]: a named, positioned,
//! visibility-toggleable unit that can hit-test a point and draw itself onto
//! a host-supplied [`Surface`]. Two variants ship with the crate:
//! - [`Canvas`]: generic canvas-backed entity (the reserved placeholder
//!   layers are canvases)
//! - [`SpriteLayer`]: built from externally supplied [`Sprite`] data via the
//!   factory conversion

use crate::draw::{Color, Surface};
use crate::util::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// A single drawable unit within a frame's layer stack.
///
/// Visibility is each entity's own responsibility: the stack dispatches
/// `draw` to every layer and an invisible layer simply draws nothing.
pub trait Paintable {
    /// Layer name shown in the host UI; the two reserved stack slots are
    /// relabeled through this on promotion.
    fn name(&self) -> &str;
    fn set_name(&mut self, name: &str);

    /// Top-left position of the layer on the editing surface.
    fn location(&self) -> Point;
    fn set_location(&mut self, location: Point);

    /// Whether the layer participates in compositing.
    fn visible(&self) -> bool;
    fn set_visible(&mut self, visible: bool);

    /// Extent of the layer's content.
    fn size(&self) -> Size;

    /// Geometric bounds used for hit testing.
    fn bounds(&self) -> Rect {
        Rect::from_parts(self.location(), self.size())
    }

    /// Tests whether `point` falls inside the layer's bounds.
    fn contains(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }

    /// Issues this layer's drawing calls against the supplied surface.
    fn draw(&self, surface: &mut dyn Surface);
}

/// Generic canvas-backed layer.
///
/// Holds an optional backing image; without one it renders as a solid fill
/// of its `color` (useful for background plates and the reserved
/// placeholder slots, which start with no content at all).
#[derive(Debug, Clone)]
pub struct Canvas {
    name: String,
    location: Point,
    size: Size,
    visible: bool,
    /// Fill color used when no backing image is present.
    pub color: Color,
    /// Raw backing image bytes, if the host attached any.
    pub image: Option<Vec<u8>>,
}

impl Canvas {
    /// Creates an empty, visible canvas with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: Point::default(),
            size: Size::default(),
            visible: true,
            color: Color::default(),
            image: None,
        }
    }

    /// Creates a canvas with explicit placement.
    pub fn with_bounds(name: impl Into<String>, location: Point, size: Size) -> Self {
        Self {
            location,
            size,
            ..Self::new(name)
        }
    }
}

impl Paintable for Canvas {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn location(&self) -> Point {
        self.location
    }

    fn set_location(&mut self, location: Point) {
        self.location = location;
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn size(&self) -> Size {
        self.size
    }

    fn draw(&self, surface: &mut dyn Surface) {
        if !self.visible || self.size.is_empty() {
            return;
        }
        match &self.image {
            Some(pixels) => surface.blit(self.location, self.size, pixels),
            None => surface.fill_rect(self.bounds(), self.color),
        }
    }
}

/// Sprite data handed over by the extraction subsystem.
///
/// The core never interprets `pixels`; it travels through to the surface
/// when the derived layer draws.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprite {
    /// Display name carried over to the derived layer.
    pub name: String,
    /// Placement of the sprite on the editing surface.
    pub location: Point,
    /// Pixel dimensions of the sprite.
    pub size: Size,
    /// Opaque image bytes in whatever format the host's surface understands.
    pub pixels: Vec<u8>,
}

/// Layer variant backed by extracted sprite data.
#[derive(Debug, Clone)]
pub struct SpriteLayer {
    name: String,
    location: Point,
    size: Size,
    visible: bool,
    pixels: Vec<u8>,
}

impl SpriteLayer {
    /// Converts externally supplied sprite data into a layer.
    ///
    /// This is the default factory used by
    /// [`Drawer::add_sprite_layers`](crate::Drawer::add_sprite_layers); hosts
    /// can install their own conversion instead.
    pub fn from_sprite(sprite: Sprite) -> Self {
        Self {
            name: sprite.name,
            location: sprite.location,
            size: sprite.size,
            visible: true,
            pixels: sprite.pixels,
        }
    }
}

impl Paintable for SpriteLayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn location(&self) -> Point {
        self.location
    }

    fn set_location(&mut self, location: Point) {
        self.location = location;
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn size(&self) -> Size {
        self.size
    }

    fn draw(&self, surface: &mut dyn Surface) {
        if !self.visible || self.size.is_empty() {
            return;
        }
        surface.blit(self.location, self.size, &self.pixels);
    }
}

/// Conversion from sprite data to a layer, replaceable by the host.
pub type SpriteFactory = Box<dyn Fn(Sprite) -> Box<dyn Paintable>>;

/// Default factory: wrap the sprite in a [`SpriteLayer`].
pub fn default_sprite_factory() -> SpriteFactory {
    Box::new(|sprite| Box::new(SpriteLayer::from_sprite(sprite)))
}
