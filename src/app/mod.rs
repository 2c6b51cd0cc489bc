//! App module - contains the application state and startup wiring

mod main_window;
mod mount;

use main_window::MainWindow;

use crate::backend::LocalBackend;
use crate::host::HostWindow;
use crate::settings::Settings;
use crate::theme;
use eframe::egui;
use std::path::PathBuf;
use std::sync::Arc;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) main_window: MainWindow,
    // Worker threads for backend calls; taken on exit
    pub(crate) runtime: Option<tokio::runtime::Runtime>,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, data_dir: PathBuf) -> std::io::Result<Self> {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Phosphor icons for the title bar glyphs
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("minepkg-worker")
            .enable_all()
            .build()?;

        let main_window = mount::mount(
            cc.egui_ctx.clone(),
            Arc::new(HostWindow::new(cc.egui_ctx.clone())),
            Arc::new(LocalBackend),
            runtime.handle().clone(),
        );

        Ok(Self {
            main_window,
            runtime: Some(runtime),
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        })
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
        };
        settings.save(&self.data_dir);
    }

    /// Stop worker threads without waiting on in-flight greeting calls.
    pub fn shutdown_runtime(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}
