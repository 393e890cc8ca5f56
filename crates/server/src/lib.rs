#[cfg(feature = "server")]
pub mod config;

#[cfg(feature = "server")]
pub mod backend;

pub mod api;

#[cfg(feature = "server")]
pub mod error_convert;

#[cfg(feature = "server")]
pub mod health;
