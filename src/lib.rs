//! State core for a 2D sprite/image-editing surface.
//!
//! Tracks which drawing tool is active, maintains the ordered layer stacks
//! of every animation frame, and broadcasts state changes synchronously to
//! the host UI. Rasterization, file I/O, and the widget tree stay on the
//! host's side of the [`draw::Surface`] and notification boundaries.

pub mod config;
pub mod draw;
pub mod drawer;
pub mod event;
pub mod frames;
pub mod props;
pub mod tools;
pub mod util;

pub use config::DrawerConfig;
pub use drawer::Drawer;
