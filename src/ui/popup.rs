use crate::core::geo::Point;
use serde::{Deserialize, Serialize};

/// Fixed screen position the overlay is pinned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverlayAnchor {
    Center,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl OverlayAnchor {
    /// Top-left corner of a box of `size` anchored inside `screen`
    pub fn resolve(&self, screen: Point, size: Point) -> Point {
        match self {
            OverlayAnchor::Center => {
                Point::new((screen.x - size.x) / 2.0, (screen.y - size.y) / 2.0)
            }
            OverlayAnchor::TopLeft => Point::new(0.0, 0.0),
            OverlayAnchor::TopRight => Point::new(screen.x - size.x, 0.0),
            OverlayAnchor::BottomLeft => Point::new(0.0, screen.y - size.y),
            OverlayAnchor::BottomRight => Point::new(screen.x - size.x, screen.y - size.y),
        }
    }

    #[cfg(feature = "egui")]
    pub fn align(&self) -> egui::Align2 {
        match self {
            OverlayAnchor::Center => egui::Align2::CENTER_CENTER,
            OverlayAnchor::TopLeft => egui::Align2::LEFT_TOP,
            OverlayAnchor::TopRight => egui::Align2::RIGHT_TOP,
            OverlayAnchor::BottomLeft => egui::Align2::LEFT_BOTTOM,
            OverlayAnchor::BottomRight => egui::Align2::RIGHT_BOTTOM,
        }
    }
}

impl Default for OverlayAnchor {
    fn default() -> Self {
        Self::Center
    }
}

/// Transient panel listing one line per marker. Hidden again by any tap that
/// lands outside it; the rest of the UI keeps running while it is shown.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceOverlay {
    pub title: String,
    pub lines: Vec<String>,
    pub anchor: OverlayAnchor,
    pub dismiss_on_outside_tap: bool,
    pub visible: bool,
}

impl DistanceOverlay {
    pub fn new(title: String, lines: Vec<String>, anchor: OverlayAnchor) -> Self {
        Self {
            title,
            lines,
            anchor,
            dismiss_on_outside_tap: true,
            visible: false,
        }
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Screen rectangle (min corner, max corner) for a panel of `size`
    pub fn rect(&self, screen: Point, size: Point) -> (Point, Point) {
        let min = self.anchor.resolve(screen, size);
        (min, min.add(&size))
    }

    pub fn contains(&self, point: Point, screen: Point, size: Point) -> bool {
        let (min, max) = self.rect(screen, size);
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Handles a tap while the overlay is up. Returns `true` when the tap
    /// dismissed the overlay, in which case it must not reach the map.
    pub fn handle_tap(&mut self, point: Point, screen: Point, size: Point) -> bool {
        if !self.visible || !self.dismiss_on_outside_tap {
            return false;
        }
        if self.contains(point, screen, size) {
            return false;
        }
        self.hide();
        true
    }

    /// Draws the overlay. Returns `true` if a click outside dismissed it
    /// during this frame.
    #[cfg(feature = "egui")]
    pub fn render(&mut self, ctx: &egui::Context) -> bool {
        if !self.visible {
            return false;
        }

        let (pad_x, pad_y) = crate::core::constants::OVERLAY_LINE_PADDING;
        let area = egui::Area::new(egui::Id::new("distance_overlay"))
            .order(egui::Order::Foreground)
            .anchor(self.anchor.align(), egui::Vec2::ZERO)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.strong(&self.title);
                    ui.separator();
                    for line in &self.lines {
                        egui::Frame::none()
                            .inner_margin(egui::Margin::symmetric(pad_x, pad_y))
                            .show(ui, |ui| {
                                ui.label(line);
                            });
                    }
                });
            });

        let pressed_at = ctx.input(|input| {
            if input.pointer.any_pressed() {
                input.pointer.interact_pos()
            } else {
                None
            }
        });
        let Some(pos) = pressed_at else {
            return false;
        };

        let screen = ctx.screen_rect();
        let panel = area.response.rect.size();
        self.handle_tap(
            Point::new((pos.x - screen.left()) as f64, (pos.y - screen.top()) as f64),
            Point::new(screen.width() as f64, screen.height() as f64),
            Point::new(panel.x as f64, panel.y as f64),
        )
    }
}
