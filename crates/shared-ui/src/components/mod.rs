// Standalone components (no primitives)
pub mod alert;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form_select;
pub mod input;
pub mod search_bar;
pub mod skeleton;
pub mod status_dot;

// Overlay/popup wrappers
pub mod dialog;

// Special
pub mod date_picker;
pub mod toast;

// Re-exports for convenience
pub use alert::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use date_picker::*;
pub use dialog::*;
pub use form_select::*;
pub use input::*;
pub use search_bar::*;
pub use skeleton::*;
pub use status_dot::*;
pub use toast::*;
