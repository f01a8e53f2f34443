pub mod popup;
pub mod toast;

pub use popup::{DistanceOverlay, OverlayAnchor};
pub use toast::{Toast, ToastQueue};

use crate::traits::Notifier;

/// Notifier backed by a toast queue and a single overlay slot
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    pub toasts: ToastQueue,
    pub overlay: Option<DistanceOverlay>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay.as_ref().is_some_and(|o| o.visible)
    }

    /// Draws toasts and the overlay. Returns `true` when a click was used to
    /// dismiss the overlay and must not be forwarded to the map.
    #[cfg(feature = "egui")]
    pub fn render(&mut self, ctx: &egui::Context) -> bool {
        self.toasts.expire(instant::Instant::now());
        self.toasts.render(ctx);

        let consumed = match self.overlay.as_mut() {
            Some(overlay) => overlay.render(ctx),
            None => false,
        };
        if !self.overlay_visible() {
            self.overlay = None;
        }
        consumed
    }
}

impl Notifier for NotificationCenter {
    fn notify(&mut self, message: &str) {
        self.toasts.push(message);
    }

    fn show_overlay(&mut self, overlay: &DistanceOverlay) {
        self.overlay = Some(overlay.clone());
    }
}
