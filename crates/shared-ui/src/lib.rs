pub mod components;

pub use components::*;

/// Calendar types used by the date pickers.
pub use time::{Date, Month};
