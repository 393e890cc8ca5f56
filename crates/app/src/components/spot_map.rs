use dioxus::prelude::*;
use serde::Serialize;
use shared_types::{MapConfig, ParkingSpot};

use crate::format_helpers::format_hourly_price;

const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";

/// Installs `window.parkingMap` once; every script below is prefixed with it.
const BRIDGE_JS: &str = include_str!("spot_map.js");

/// Which status wording the marker popups use.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PopupStatus {
    /// "Available" / "Occupied" (user dashboard).
    #[default]
    Occupancy,
    /// "Available" / "Reserved" (admin dashboard).
    Reservation,
}

impl PopupStatus {
    fn label(&self, spot: &ParkingSpot) -> &'static str {
        match self {
            PopupStatus::Occupancy => spot.occupancy_label(),
            PopupStatus::Reservation => spot.status_label(),
        }
    }
}

/// One Leaflet marker as handed to the JS bridge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerPayload {
    pub id: i64,
    pub lat: f64,
    pub lng: f64,
    pub popup: String,
    pub selected: bool,
}

impl MarkerPayload {
    pub fn from_spot(spot: &ParkingSpot, status: PopupStatus, selected: Option<i64>) -> Self {
        Self {
            id: spot.id,
            lat: spot.latitude,
            lng: spot.longitude,
            popup: popup_html(spot, status),
            selected: selected == Some(spot.id),
        }
    }
}

pub fn marker_payloads(
    spots: &[ParkingSpot],
    status: PopupStatus,
    selected: Option<i64>,
) -> Vec<MarkerPayload> {
    spots
        .iter()
        .map(|spot| MarkerPayload::from_spot(spot, status, selected))
        .collect()
}

fn popup_html(spot: &ParkingSpot, status: PopupStatus) -> String {
    format!(
        "<strong>{}</strong><br/>Price: {}<br/>Status: {}",
        escape_html(&spot.location),
        format_hourly_price(spot.price_per_hour),
        status.label(spot)
    )
}

/// Escape text for insertion into popup HTML.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

fn bridge_call(call: &str) -> String {
    format!("{BRIDGE_JS}\nwindow.parkingMap.{call};")
}

fn init_script(map_id: &str, config: &MapConfig) -> String {
    let config_json = serde_json::to_string(config).unwrap_or_else(|_| "{}".to_string());
    bridge_call(&format!("init({}, {config_json})", js_string(map_id)))
}

fn markers_script(map_id: &str, markers: &[MarkerPayload]) -> String {
    let markers_json = serde_json::to_string(markers).unwrap_or_else(|_| "[]".to_string());
    bridge_call(&format!("setMarkers({}, {markers_json})", js_string(map_id)))
}

fn destroy_script(map_id: &str) -> String {
    bridge_call(&format!("destroy({})", js_string(map_id)))
}

/// Imperative handle on one mounted map widget.
///
/// Calls are queued by the bridge until the Leaflet instance exists, so a
/// camera move issued before the tiles load still lands.
#[derive(Debug, Clone, PartialEq)]
pub struct MapCamera {
    map_id: String,
}

impl MapCamera {
    pub fn new(map_id: impl Into<String>) -> Self {
        Self {
            map_id: map_id.into(),
        }
    }

    pub fn fly_to_script(&self, lat: f64, lng: f64, zoom: u8) -> String {
        bridge_call(&format!(
            "flyTo({}, {lat}, {lng}, {zoom})",
            js_string(&self.map_id)
        ))
    }

    pub fn fly_to(&self, lat: f64, lng: f64, zoom: u8) {
        document::eval(&self.fly_to_script(lat, lng, zoom));
    }
}

/// Leaflet tile map with one marker per spot.
///
/// `selected` gets the green marker and the camera follows it. The camera
/// effect watches only the selection's id and coordinates, so availability
/// updates redraw markers without moving the view.
#[component]
pub fn SpotMap(
    map_id: String,
    spots: Memo<Vec<ParkingSpot>>,
    selected: Memo<Option<ParkingSpot>>,
    config: MapConfig,
    #[props(default)] status: PopupStatus,
) -> Element {
    let init_id = map_id.clone();
    let init_config = config.clone();
    use_effect(move || {
        document::eval(&init_script(&init_id, &init_config));
    });

    let markers_id = map_id.clone();
    use_effect(move || {
        let selected_id = selected.read().as_ref().map(|s| s.id);
        let markers = marker_payloads(&spots.read(), status, selected_id);
        document::eval(&markers_script(&markers_id, &markers));
    });

    let target = use_memo(move || {
        selected
            .read()
            .as_ref()
            .map(|s| (s.id, s.latitude, s.longitude))
    });
    let camera = MapCamera::new(map_id.clone());
    let zoom = config.selected_zoom;
    use_effect(move || {
        if let Some((_, lat, lng)) = target() {
            camera.fly_to(lat, lng, zoom);
        }
    });

    let drop_id = map_id.clone();
    use_drop(move || {
        document::eval(&destroy_script(&drop_id));
    });

    rsx! {
        document::Link { rel: "stylesheet", href: LEAFLET_CSS }
        document::Script { src: LEAFLET_JS }
        document::Link { rel: "stylesheet", href: asset!("./spot_map.css") }
        div { id: "{map_id}", class: "spot-map" }
    }
}
