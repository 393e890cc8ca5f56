pub mod config;
pub mod error;

// Parking domain
pub mod flow;
pub mod reservation;
pub mod spot;
pub mod store;
pub mod views;

pub use config::*;
pub use error::*;
pub use flow::*;
pub use reservation::*;
pub use spot::*;
pub use store::*;
pub use views::*;
