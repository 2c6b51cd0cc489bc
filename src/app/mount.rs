//! One-time startup sequencing for the root viewport

use super::main_window::MainWindow;
use crate::backend::ServerClient;
use crate::constants::WINDOW_TITLE;
use crate::host::WindowController;
use eframe::egui;
use std::sync::Arc;
use tracing::info;

/// Sets the window title, then builds the main window view. Runs once, before
/// the first frame.
pub fn mount(
    ctx: egui::Context,
    window: Arc<dyn WindowController>,
    client: Arc<dyn ServerClient>,
    runtime: tokio::runtime::Handle,
) -> MainWindow {
    window.set_title(WINDOW_TITLE);
    info!(title = WINDOW_TITLE, "Main window mounted");
    MainWindow::new(ctx, window, client, runtime)
}
