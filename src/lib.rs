pub mod config;
pub mod geometry;
pub mod territory;
pub mod registry;
pub mod render;
pub mod interaction;
pub mod study;
pub mod engine;

// PNG export (enabled by default)
#[cfg(feature = "snapshot")]
pub mod snapshot;
