pub mod app;
pub mod logging;
pub mod pacing;
pub mod platform;
pub mod render;
