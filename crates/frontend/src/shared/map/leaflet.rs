//! Minimal bindings to the Leaflet global (`L`), loaded from the CDN in
//! index.html. Only the surface the office map widget needs.

use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `L.Map`
    #[derive(Clone)]
    pub type Map;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn map(element_id: &str) -> Map;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &Map, center: &JsValue, zoom: f64) -> Map;

    /// Tears down the instance and releases its DOM bindings.
    #[wasm_bindgen(method)]
    pub fn remove(this: &Map);

    /// `L.TileLayer`
    #[derive(Clone)]
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &Map) -> TileLayer;

    #[wasm_bindgen(method, js_name = remove)]
    pub fn remove_layer(this: &TileLayer);

    /// `L.CircleMarker`
    pub type CircleMarker;

    #[wasm_bindgen(js_namespace = L, js_name = circleMarker)]
    pub fn circle_marker(center: &JsValue, options: &JsValue) -> CircleMarker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn marker_add_to(this: &CircleMarker, map: &Map) -> CircleMarker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &CircleMarker, html: &str) -> CircleMarker;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileOptions {
    pub attribution: String,
    pub max_zoom: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerOptions {
    pub radius: f64,
    pub color: String,
    pub fill_color: String,
    pub fill_opacity: f64,
    pub weight: f64,
}

/// `[lat, lng]` pair in the array form Leaflet accepts.
pub fn lat_lng(lat: f64, lng: f64) -> JsValue {
    serde_wasm_bindgen::to_value(&(lat, lng)).unwrap_or(JsValue::NULL)
}

pub fn tile_options(attribution: &str) -> JsValue {
    serde_wasm_bindgen::to_value(&TileOptions {
        attribution: attribution.to_string(),
        max_zoom: 18,
    })
    .unwrap_or(JsValue::NULL)
}

pub fn marker_options(color: &str) -> JsValue {
    serde_wasm_bindgen::to_value(&MarkerOptions {
        radius: 8.0,
        color: color.to_string(),
        fill_color: color.to_string(),
        fill_opacity: 0.75,
        weight: 1.5,
    })
    .unwrap_or(JsValue::NULL)
}

