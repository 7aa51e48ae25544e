use log::Level;

/// How long a notification stays on screen before it hides itself.
pub const NOTIFICATION_DISMISS_MS: u32 = 5_000;

/// How long a submit button shows its processing label.
pub const SUBMIT_RESET_MS: u32 = 2_000;

/// Nigerian calling code, without the leading plus.
pub const COUNTRY_CODE: &str = "234";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
