//! Synchronous change-notification hub.
//!
//! The host UI subscribes callbacks to independent channels (tool, color,
//! layer, layer visibility, image). Delivery is synchronous and in-process:
//! observers run inline on the caller's stack, in registration order, at
//! the exact point the state transition completes. An observer that blocks
//! therefore blocks the mutation that triggered it.
//!
//! One ordering quirk is contractual: the color channel fires *before* the
//! new color value is committed (the event carries both old and new); every
//! other channel fires after its state change has landed.

use crate::draw::{Color, Paintable};
use crate::tools::BrushHandle;

/// Payload of a tool-changed notification: the newly active brush.
#[derive(Clone)]
pub struct ToolEvent {
    pub brush: BrushHandle,
}

/// Payload of a color-changed notification.
///
/// Emitted before `new` is committed, so a reader polling the drawer from
/// inside the observer still sees `old`.
#[derive(Debug, Clone, Copy)]
pub struct ColorEvent {
    pub old: Color,
    pub new: Color,
}

/// Payload of a layer-changed notification (a current-layer promotion).
pub struct LayerEvent<'a> {
    /// Slot 0 after the swap.
    pub last: &'a dyn Paintable,
    /// Slot 1 after the swap.
    pub current: &'a dyn Paintable,
    /// Stack index whose content changed (1 for a promotion).
    pub changed_index: usize,
}

/// Payload of a layer-visibility notification.
#[derive(Debug, Clone, Copy)]
pub struct VisibilityEvent {
    /// Stack index whose visibility flipped (0 for the last layer).
    pub changed_index: usize,
    pub visible: bool,
}

/// Payload of the image-changed pass-through channel.
///
/// No core state backs this; the host routes its own external event (a
/// file reload, a sprite-sheet swap) through the same notification surface.
#[derive(Debug, Clone, Copy)]
pub struct ImageEvent<'a> {
    /// Host-defined origin tag, e.g. a file path.
    pub source: Option<&'a str>,
}

type Observer<E> = Box<dyn FnMut(&E)>;

/// Observer lists for every notification channel.
///
/// Subscriptions are add-only and live as long as the hub; channels are
/// independent, so a layer observer never sees tool traffic.
#[derive(Default)]
pub struct Hub {
    tool: Vec<Observer<ToolEvent>>,
    color: Vec<Observer<ColorEvent>>,
    layer: Vec<Box<dyn FnMut(&LayerEvent<'_>)>>,
    visibility: Vec<Observer<VisibilityEvent>>,
    image: Vec<Box<dyn FnMut(&ImageEvent<'_>)>>,
}

impl Hub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to tool-changed notifications.
    pub fn on_tool_changed(&mut self, observer: impl FnMut(&ToolEvent) + 'static) {
        self.tool.push(Box::new(observer));
    }

    /// Subscribes to color-changed notifications.
    pub fn on_color_changed(&mut self, observer: impl FnMut(&ColorEvent) + 'static) {
        self.color.push(Box::new(observer));
    }

    /// Subscribes to layer-changed (promotion) notifications.
    pub fn on_layer_changed(&mut self, observer: impl FnMut(&LayerEvent<'_>) + 'static) {
        self.layer.push(Box::new(observer));
    }

    /// Subscribes to layer-visibility notifications.
    pub fn on_layer_visibility_changed(&mut self, observer: impl FnMut(&VisibilityEvent) + 'static) {
        self.visibility.push(Box::new(observer));
    }

    /// Subscribes to the image-changed pass-through channel.
    pub fn on_image_changed(&mut self, observer: impl FnMut(&ImageEvent<'_>) + 'static) {
        self.image.push(Box::new(observer));
    }

    pub(crate) fn emit_tool_changed(&mut self, event: &ToolEvent) {
        for observer in &mut self.tool {
            observer(event);
        }
    }

    pub(crate) fn emit_color_changed(&mut self, event: &ColorEvent) {
        for observer in &mut self.color {
            observer(event);
        }
    }

    pub(crate) fn emit_layer_changed(&mut self, event: &LayerEvent<'_>) {
        for observer in &mut self.layer {
            observer(event);
        }
    }

    pub(crate) fn emit_layer_visibility_changed(&mut self, event: &VisibilityEvent) {
        for observer in &mut self.visibility {
            observer(event);
        }
    }

    pub(crate) fn emit_image_changed(&mut self, event: &ImageEvent<'_>) {
        for observer in &mut self.image {
            observer(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn observers_run_in_registration_order() {
        let mut hub = Hub::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let order = Rc::clone(&order);
            hub.on_color_changed(move |_| order.borrow_mut().push(tag));
        }

        hub.emit_color_changed(&ColorEvent {
            old: crate::draw::WHITE,
            new: crate::draw::RED,
        });
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn channels_are_independent() {
        let mut hub = Hub::new();
        let visibility_hits = Rc::new(RefCell::new(0));

        let hits = Rc::clone(&visibility_hits);
        hub.on_layer_visibility_changed(move |event| {
            assert_eq!(event.changed_index, 0);
            *hits.borrow_mut() += 1;
        });

        hub.emit_color_changed(&ColorEvent {
            old: crate::draw::WHITE,
            new: crate::draw::RED,
        });
        assert_eq!(*visibility_hits.borrow(), 0);

        hub.emit_layer_visibility_changed(&VisibilityEvent {
            changed_index: 0,
            visible: true,
        });
        assert_eq!(*visibility_hits.borrow(), 1);
    }

    #[test]
    fn image_channel_passes_source_through() {
        let mut hub = Hub::new();
        let seen = Rc::new(RefCell::new(None));

        let seen_clone = Rc::clone(&seen);
        hub.on_image_changed(move |event| {
            *seen_clone.borrow_mut() = event.source.map(str::to_owned);
        });

        hub.emit_image_changed(&ImageEvent {
            source: Some("sprites/walk.npk"),
        });
        assert_eq!(seen.borrow().as_deref(), Some("sprites/walk.npk"));
    }
}
