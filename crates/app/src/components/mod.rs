pub mod spot_map;

pub use spot_map::{MapCamera, PopupStatus, SpotMap};
