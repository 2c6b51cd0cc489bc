//! Application constants and configuration

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory name under the local data dir (settings, logs)
pub const DATA_DIR_NAME: &str = "minepkg-gui";
pub const LOG_FILE_NAME: &str = "minepkg-gui.log";
/// Filter used when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info,minepkg_gui=debug";

/// Native title used before the root mount takes over
pub const NATIVE_TITLE: &str = "minepkg-wails";
/// Title set once by the root mount
pub const WINDOW_TITLE: &str = "Minepkg test app";
/// Label shown in the custom title bar
pub const TITLE_BAR_LABEL: &str = "minepkg";

pub const INITIAL_PROMPT: &str = "Please enter your name below 👇";
pub const NAME_HINT: &str = "Server IP Address";
pub const JOIN_LABEL: &str = "Join Server";

pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [1024.0, 768.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [400.0, 300.0];
