//! Drawing-side state: colors, paintable layers, and per-frame stacks.
//!
//! This module defines the types the editing surface composites:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Paintable`]: the layer capability trait, with [`Canvas`] and
//!   [`SpriteLayer`] variants
//! - [`LayerStack`]: the ordered per-frame layer sequence with reserved
//!   current/last slots
//! - [`Surface`]: the host-supplied rendering target abstraction

pub mod color;
pub mod layer;
pub mod stack;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use layer::{Canvas, Paintable, Sprite, SpriteFactory, SpriteLayer};
pub use stack::{CURRENT_LAYER, LAST_LAYER, LayerStack, StackError};
pub use surface::Surface;

// Re-export color constants for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, RED, TRANSPARENT, WHITE, YELLOW};
