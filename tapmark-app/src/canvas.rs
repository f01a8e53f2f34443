use egui::{Color32, Pos2, Rect, Sense, Stroke};
use tapmark::{
    constants::{MARKER_HIT_RADIUS, MARKER_ICON_SIZE},
    prelude::HashMap,
    LatLng, MapCapability, MapEvent, MarkerId, Point, Result, Viewport,
};

use crate::location::SimulatedLocation;

/// Candidate graticule spacings in degrees, coarse to fine
const GRID_STEPS: [f64; 10] = [30.0, 10.0, 5.0, 1.0, 0.5, 0.1, 0.05, 0.01, 0.005, 0.001];
const MIN_GRID_SPACING_PX: f64 = 80.0;

const BACKGROUND: Color32 = Color32::from_rgb(232, 236, 228);
const GRID: Color32 = Color32::from_rgb(205, 210, 200);
const MARKER_FILL: Color32 = Color32::from_rgb(219, 68, 55);
const MY_LOCATION: Color32 = Color32::from_rgb(66, 133, 244);

#[derive(Debug, Clone)]
struct Glyph {
    position: LatLng,
    title: String,
    label: String,
    visible: bool,
}

/// Flat Web-Mercator canvas implementing the map capability: pan, zoom,
/// marker glyphs and the my-location dot.
pub struct CanvasMap {
    viewport: Viewport,
    glyphs: HashMap<MarkerId, Glyph>,
    next_id: u64,
    my_location_enabled: bool,
    location: SimulatedLocation,
}

impl CanvasMap {
    pub fn new(viewport: Viewport, location: SimulatedLocation) -> Self {
        Self {
            viewport,
            glyphs: HashMap::default(),
            next_id: 0,
            my_location_enabled: false,
            location,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Canvas pixel of `position` on the world copy closest to the view
    /// center, so points just across the antimeridian stay on screen.
    fn to_pixel(&self, position: &LatLng) -> Point {
        let shift = ((self.viewport.center.lng - position.lng) / 360.0).round() * 360.0;
        self.viewport
            .lat_lng_to_pixel(&LatLng::new(position.lat, position.lng + shift))
    }

    /// Head of the pin glyph for a marker, in canvas pixels
    fn pin_head(&self, position: &LatLng) -> Point {
        let anchor = self.to_pixel(position);
        Point::new(anchor.x, anchor.y - MARKER_ICON_SIZE.1 as f64 / 2.0)
    }

    /// Topmost visible marker under `screen`, if any
    pub fn marker_at(&self, screen: Point) -> Option<MarkerId> {
        self.glyphs
            .iter()
            .filter(|(_, glyph)| glyph.visible)
            .map(|(id, glyph)| (*id, self.pin_head(&glyph.position).distance_to(&screen)))
            .filter(|(_, distance)| *distance <= MARKER_HIT_RADIUS)
            .min_by(|a, b| a.1.total_cmp(&b.1).then(b.0.cmp(&a.0)))
            .map(|(id, _)| id)
    }

    /// Draws the map and turns pointer input into controller events.
    /// `swallow_click` drops the next click (it dismissed the overlay).
    pub fn show(&mut self, ui: &mut egui::Ui, swallow_click: &mut bool) -> Vec<MapEvent> {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let rect = response.rect;
        self.viewport
            .set_size(Point::new(rect.width() as f64, rect.height() as f64));

        if response.dragged() {
            let delta = response.drag_delta();
            self.viewport.pan(Point::new(delta.x as f64, delta.y as f64));
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.raw_scroll_delta.y) as f64;
            if scroll != 0.0 {
                let focus = response
                    .hover_pos()
                    .map(|pos| to_local(rect, pos));
                self.viewport.zoom_to(self.viewport.zoom + scroll / 120.0, focus);
            }
        }

        let mut events = Vec::new();
        if response.clicked() {
            if *swallow_click {
                *swallow_click = false;
            } else if let Some(pos) = response.interact_pointer_pos() {
                let local = to_local(rect, pos);
                match self.marker_at(local) {
                    Some(id) => events.push(MapEvent::MarkerClick { id }),
                    None => events.push(MapEvent::Tap {
                        lat_lng: self.viewport.pixel_to_lat_lng(&local).wrapped(),
                    }),
                }
            }
        } else if response.drag_released() {
            *swallow_click = false;
        }

        painter.rect_filled(rect, 0.0, BACKGROUND);
        self.paint_grid(&painter, rect);
        self.paint_my_location(&painter, rect);
        self.paint_markers(&painter, rect, response.hover_pos());

        events
    }

    fn paint_grid(&self, painter: &egui::Painter, rect: Rect) {
        let north_west = self.viewport.pixel_to_lat_lng(&Point::new(0.0, 0.0));
        let south_east = self
            .viewport
            .pixel_to_lat_lng(&Point::new(rect.width() as f64, rect.height() as f64));
        let degrees_per_px = (south_east.lng - north_west.lng).abs() / rect.width().max(1.0) as f64;

        let step = GRID_STEPS
            .iter()
            .rev()
            .copied()
            .find(|step| step / degrees_per_px >= MIN_GRID_SPACING_PX)
            .unwrap_or(GRID_STEPS[0]);
        let stroke = Stroke::new(1.0, GRID);

        let mut lng = (north_west.lng / step).floor() * step;
        while lng <= south_east.lng {
            let x = self.viewport.lat_lng_to_pixel(&LatLng::new(0.0, lng)).x as f32;
            painter.vline(rect.left() + x, rect.y_range(), stroke);
            lng += step;
        }

        let mut lat = (south_east.lat / step).floor() * step;
        while lat <= north_west.lat {
            let y = self
                .viewport
                .lat_lng_to_pixel(&LatLng::new(LatLng::clamp_lat(lat), 0.0))
                .y as f32;
            painter.hline(rect.x_range(), rect.top() + y, stroke);
            lat += step;
        }
    }

    fn paint_my_location(&self, painter: &egui::Painter, rect: Rect) {
        let Some(fix) = self.last_known_location() else {
            return;
        };
        let center = to_screen(rect, self.to_pixel(&fix));
        painter.circle_filled(center, 14.0, MY_LOCATION.gamma_multiply(0.2));
        painter.circle(center, 6.0, MY_LOCATION, Stroke::new(2.0, Color32::WHITE));
    }

    fn paint_markers(&self, painter: &egui::Painter, rect: Rect, hover: Option<Pos2>) {
        let hovered = hover.and_then(|pos| self.marker_at(to_local(rect, pos)));

        let mut ids: Vec<&MarkerId> = self.glyphs.keys().collect();
        ids.sort();
        for id in ids {
            let glyph = &self.glyphs[id];
            if !glyph.visible {
                continue;
            }
            let anchor = to_screen(rect, self.to_pixel(&glyph.position));
            let head = to_screen(rect, self.pin_head(&glyph.position));

            painter.line_segment([head, anchor], Stroke::new(2.0, MARKER_FILL));
            painter.circle(head, 8.0, MARKER_FILL, Stroke::new(1.5, Color32::WHITE));

            if hovered == Some(*id) {
                painter.text(
                    head + egui::vec2(12.0, 0.0),
                    egui::Align2::LEFT_CENTER,
                    format!("{}: {}", glyph.title, glyph.label),
                    egui::FontId::proportional(13.0),
                    Color32::BLACK,
                );
            }
        }
    }
}

impl MapCapability for CanvasMap {
    fn add_marker(&mut self, position: LatLng, title: &str, label: &str) -> Result<MarkerId> {
        let id = MarkerId(self.next_id);
        self.next_id += 1;
        self.glyphs.insert(
            id,
            Glyph {
                position,
                title: title.to_string(),
                label: label.to_string(),
                visible: true,
            },
        );
        Ok(id)
    }

    fn remove_marker(&mut self, id: MarkerId) {
        self.glyphs.remove(&id);
    }

    fn set_marker_visible(&mut self, id: MarkerId, visible: bool) {
        if let Some(glyph) = self.glyphs.get_mut(&id) {
            glyph.visible = visible;
        }
    }

    fn set_my_location_enabled(&mut self, enabled: bool) -> Result<()> {
        self.my_location_enabled = enabled;
        Ok(())
    }

    /// Like a platform map, the fix is only reported while the my-location
    /// layer is on.
    fn last_known_location(&self) -> Option<LatLng> {
        if !self.my_location_enabled {
            return None;
        }
        self.location.fix()
    }
}

fn to_local(rect: Rect, pos: Pos2) -> Point {
    Point::new((pos.x - rect.left()) as f64, (pos.y - rect.top()) as f64)
}

fn to_screen(rect: Rect, point: Point) -> Pos2 {
    Pos2::new(rect.left() + point.x as f32, rect.top() + point.y as f32)
}
