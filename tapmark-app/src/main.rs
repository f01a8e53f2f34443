mod canvas;
mod config;
mod location;
mod permission;

use std::path::PathBuf;
use tapmark::{
    MapCapability, MapEvent, MapInteractionController, NotificationCenter, Point, Viewport,
};

use crate::{
    canvas::CanvasMap, config::AppConfig, location::SimulatedLocation,
    permission::DialogPermissions,
};

type Controller = MapInteractionController<CanvasMap, DialogPermissions, NotificationCenter>;

/// Desktop viewer: tap the map to drop distance markers
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref())?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title("Tapmark"),
        ..Default::default()
    };

    eframe::run_native(
        "tapmark-app",
        options,
        Box::new(move |_cc| Box::new(TapmarkApp::new(config))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}

struct TapmarkApp {
    controller: Controller,
    /// Map waiting for its first layout pass before it is handed over
    pending_map: Option<CanvasMap>,
    swallow_click: bool,
}

impl TapmarkApp {
    fn new(config: AppConfig) -> Self {
        let controller_config = config.controller_config().unwrap_or_else(|err| {
            log::warn!("Invalid controller config ({}), using defaults", err);
            Default::default()
        });

        let size = Point::new(config.window_size[0] as f64, config.window_size[1] as f64);
        let map = CanvasMap::new(
            Viewport::new(config.start_center, config.start_zoom, size),
            SimulatedLocation::new(config.fix_position, config.fix_delay()),
        );

        Self {
            controller: MapInteractionController::with_config(
                controller_config,
                DialogPermissions::new(config.permission_pre_granted),
                NotificationCenter::new(),
            ),
            pending_map: Some(map),
            swallow_click: false,
        }
    }

    fn controls(&mut self, ctx: &egui::Context) -> Vec<MapEvent> {
        let mut events = Vec::new();
        egui::Area::new(egui::Id::new("map_controls"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .show(ctx, |ui| {
                ui.vertical(|ui| {
                    let toggle_text = if self.controller.markers_visible() {
                        "Hide markers"
                    } else {
                        "Show markers"
                    };
                    if ui.button(toggle_text).clicked() {
                        events.push(MapEvent::ToggleVisibility);
                    }
                    if ui.button("Distances").clicked() {
                        events.push(MapEvent::ShowDistances);
                    }
                });
            });
        events
    }
}

impl eframe::App for TapmarkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.controller.notifier_mut().render(ctx) {
            self.swallow_click = true;
        }

        if let Some(granted) = self.controller.permissions_mut().render(ctx) {
            self.controller
                .dispatch(MapEvent::PermissionResult { granted });
        }

        let mut events = self.controls(ctx);
        if !events.is_empty() {
            // The press that closed the overlay landed on a control, not the map
            self.swallow_click = false;
        }

        egui::TopBottomPanel::top("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Markers: {}", self.controller.markers().len()));
                ui.separator();
                let fix = self.controller.map().and_then(|map| map.last_known_location());
                match fix {
                    Some(fix) => ui.label(format!("Fix: {:.5}, {:.5}", fix.lat, fix.lng)),
                    None => ui.label("No location fix"),
                };
                if let Some(map) = self.controller.map() {
                    ui.separator();
                    ui.label(format!("Zoom: {:.1}", map.viewport().zoom));
                }
                if let Some(permission) = self.controller.permissions().pending() {
                    ui.separator();
                    ui.label(format!("Waiting for {}", permission));
                }
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                if let Some(map) = self.controller.map_mut() {
                    events.extend(map.show(ui, &mut self.swallow_click));
                } else if let Some(mut map) = self.pending_map.take() {
                    // First layout pass: size the map, then report it ready
                    map.show(ui, &mut self.swallow_click);
                    self.controller.on_map_ready(map);
                }
            });

        for event in events {
            self.controller.dispatch(event);
        }

        // Toasts expire and the fix may arrive without any input
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}
