use log::Level;

/// Scroll offset in pixels past which the navigation bar turns solid.
pub const SCROLL_THRESHOLD: u32 = 50;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
