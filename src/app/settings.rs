// Settings split: store (data & persistence) and ui (egui viewport).

pub mod store;
pub mod ui;

pub use store::{load_settings_from_disk, save_settings_to_disk, AppSettings, APP_SETTINGS};
pub use ui::{draw_settings_viewport, open_settings};

/// Read settings through a closure.
pub fn with_settings<F, R>(f: F) -> R
where
    F: FnOnce(&AppSettings) -> R,
{
    let st = APP_SETTINGS.read().unwrap_or_else(|e| e.into_inner());
    f(&st)
}

/// Modify settings through a closure.
pub fn with_settings_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppSettings) -> R,
{
    let mut st = APP_SETTINGS.write().unwrap_or_else(|e| e.into_inner());
    f(&mut st)
}
