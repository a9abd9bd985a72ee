//! Rendering surface abstraction.
//!
//! The core never rasterizes anything itself; layers issue primitive calls
//! against a [`Surface`] supplied by the host (a cairo context, a GPU target,
//! a software framebuffer). Pixel format, transforms, and clipping are the
//! surface's concern.

use crate::draw::Color;
use crate::util::{Point, Rect, Size};

/// Drawing target supplied by the host for composite rendering.
///
/// Implementations decide how each primitive maps onto actual pixels.
/// Layers call these methods from [`Paintable::draw`] in back-to-front
/// stack order.
///
/// [`Paintable::draw`]: crate::draw::Paintable::draw
pub trait Surface {
    /// Fills a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Copies raw image bytes to the surface at `origin`.
    ///
    /// `pixels` is an opaque byte blob the host produced earlier (sprite
    /// sheet data, a decoded frame); the surface decides how to interpret
    /// it for the given `size`.
    fn blit(&mut self, origin: Point, size: Size, pixels: &[u8]);
}
