use instant::Instant;
use std::time::Duration;

use crate::core::constants::TOAST_SHORT_MS;

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.created_at && now.duration_since(self.created_at) >= self.duration
    }
}

/// Short-lived messages, oldest first
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    duration: Duration,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::with_duration(Duration::from_millis(TOAST_SHORT_MS))
    }

    pub fn with_duration(duration: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            duration,
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.push_at(message, Instant::now());
    }

    pub fn push_at(&mut self, message: impl Into<String>, now: Instant) {
        self.toasts.push(Toast {
            message: message.into(),
            created_at: now,
            duration: self.duration,
        });
    }

    /// Drops every toast whose time is up; returns how many were removed
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|toast| !toast.is_expired(now));
        before - self.toasts.len()
    }

    pub fn active(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn messages(&self) -> Vec<&str> {
        self.toasts.iter().map(|t| t.message.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    #[cfg(feature = "egui")]
    pub fn render(&self, ctx: &egui::Context) {
        if self.toasts.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toasts"))
            .order(egui::Order::Tooltip)
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -48.0))
            .interactable(false)
            .show(ctx, |ui| {
                for toast in &self.toasts {
                    egui::Frame::popup(ui.style())
                        .fill(egui::Color32::from_black_alpha(200))
                        .show(ui, |ui| {
                            ui.colored_label(egui::Color32::WHITE, &toast.message);
                        });
                }
            });
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}
