use serde::{Deserialize, Serialize};

/// Parking backend connection settings (`[api]` in `config.toml`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

/// Reservation defaults (`[reservation]` in `config.toml`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservationConfig {
    /// Acting user id sent with every reservation until real sessions exist.
    #[serde(default = "default_user_id")]
    pub user_id: i64,
    #[serde(default = "default_hours")]
    pub hours: u32,
}

impl Default for ReservationConfig {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            hours: default_hours(),
        }
    }
}

fn default_user_id() -> i64 {
    1
}

fn default_hours() -> u32 {
    1
}

/// Map widget settings (`[map]` in `config.toml`), exposed to the browser.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapConfig {
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,
    #[serde(default = "default_center_lng")]
    pub center_lng: f64,
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    /// Zoom level the camera flies to when a spot is selected.
    #[serde(default = "default_selected_zoom")]
    pub selected_zoom: u8,
    #[serde(default = "default_tile_url")]
    pub tile_url: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: default_center_lat(),
            center_lng: default_center_lng(),
            zoom: default_zoom(),
            selected_zoom: default_selected_zoom(),
            tile_url: default_tile_url(),
        }
    }
}

fn default_center_lat() -> f64 {
    40.428
}

fn default_center_lng() -> f64 {
    -79.922
}

fn default_zoom() -> u8 {
    16
}

fn default_selected_zoom() -> u8 {
    17
}

fn default_tile_url() -> String {
    "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string()
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub reservation: ReservationConfig,
    #[serde(default)]
    pub map: MapConfig,
}
