use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// How often the testimonial carousel advances on its own, in milliseconds.
pub const AUTOPLAY_INTERVAL_MS: u32 = 5_000;

/// Where the before/after handle sits before anyone touches it.
pub const DEFAULT_SLIDER_POSITION: f64 = 50.0;

/// Counter animation tick, roughly one frame.
pub const COUNTER_TICK_MS: u32 = 16;

/// Scroll offset past which the header switches to its solid style.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

pub const COMPANY_NAME: &str = "Commercial Cleaning Associates";
pub const COMPANY_SHORT: &str = "CCA";
pub const PHONE_DISPLAY: &str = "(480) 555-0123";
pub const PHONE_HREF: &str = "tel:+14805550123";
pub const EMAIL: &str = "info@ccacleaning.com";
pub const LOCATION: &str = "Phoenix, AZ";
