//! Pure model behind the office map widget. The frontend binds this to
//! Leaflet; the model itself knows nothing about the DOM, which is what
//! makes the layer-toggle behaviour testable.

use serde::{Deserialize, Serialize};

use crate::enums::statuses::SiteStatus;

/// One plotted office site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub id: String,
    pub label: String,
    pub lat: f64,
    pub lng: f64,
    pub status: SiteStatus,
}

/// A preset tile layer the map can switch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileProvider {
    pub key: &'static str,
    pub label: &'static str,
    pub url_template: &'static str,
    pub attribution: &'static str,
}

/// Exactly two providers; the widget toggles between them.
pub static TILE_PROVIDERS: [TileProvider; 2] = [
    TileProvider {
        key: "osm",
        label: "Street",
        url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
        attribution: "&copy; OpenStreetMap contributors",
    },
    TileProvider {
        key: "carto-light",
        label: "Light",
        url_template: "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png",
        attribution: "&copy; OpenStreetMap contributors &copy; CARTO",
    },
];

/// Default view over the state.
pub const DEFAULT_CENTER: (f64, f64) = (15.9129, 79.7400);
pub const DEFAULT_ZOOM: f64 = 7.0;

/// Marker set plus the active tile layer. Toggling the layer never
/// touches the points.
#[derive(Debug, Clone, PartialEq)]
pub struct MapModel {
    pub points: Vec<MapPoint>,
    pub active_layer: usize,
}

impl MapModel {
    pub fn new(points: Vec<MapPoint>) -> Self {
        Self {
            points,
            active_layer: 0,
        }
    }

    pub fn active_provider(&self) -> &'static TileProvider {
        &TILE_PROVIDERS[self.active_layer % TILE_PROVIDERS.len()]
    }

    /// Switch to the other preset provider.
    pub fn toggle_layer(&mut self) {
        self.active_layer = (self.active_layer + 1) % TILE_PROVIDERS.len();
    }

    /// Popup markup for one marker.
    pub fn popup_html(point: &MapPoint) -> String {
        format!(
            "<strong>{}</strong><br>{} &middot; {}",
            point.label,
            point.id,
            point.status.label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::office_sites;

    #[test]
    fn layer_toggle_round_trip_keeps_markers() {
        let mut model = MapModel::new(office_sites());
        let before: Vec<String> = model.points.iter().map(MapModel::popup_html).collect();
        let provider = model.active_provider().key;

        model.toggle_layer();
        assert_ne!(model.active_provider().key, provider);
        model.toggle_layer();
        assert_eq!(model.active_provider().key, provider);

        let after: Vec<String> = model.points.iter().map(MapModel::popup_html).collect();
        assert_eq!(model.points.len(), office_sites().len());
        assert_eq!(before, after);
    }

    #[test]
    fn popup_shows_label_id_and_status() {
        let point = &office_sites()[0];
        let html = MapModel::popup_html(point);
        assert!(html.contains(&point.label));
        assert!(html.contains(&point.id));
        assert!(html.contains(point.status.label()));
    }

    #[test]
    fn exactly_two_providers_are_preset() {
        assert_eq!(TILE_PROVIDERS.len(), 2);
        assert_ne!(TILE_PROVIDERS[0].key, TILE_PROVIDERS[1].key);
    }
}
