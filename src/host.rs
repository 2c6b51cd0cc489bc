//! Window-chrome bindings provided by the native host

use eframe::egui;
use tracing::debug;

/// Window operations the UI may request from the host.
pub trait WindowController {
    fn quit(&self);
    fn set_title(&self, title: &str);
    /// Begin moving the window with the pointer (custom title bar drag)
    fn start_drag(&self);
}

/// [`WindowController`] backed by eframe viewport commands on the root viewport.
#[derive(Clone)]
pub struct HostWindow {
    ctx: egui::Context,
}

impl HostWindow {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl WindowController for HostWindow {
    fn quit(&self) {
        debug!("Quit requested");
        self.ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }

    fn set_title(&self, title: &str) {
        debug!(title, "Setting window title");
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Title(title.to_owned()));
    }

    fn start_drag(&self) {
        self.ctx.send_viewport_cmd(egui::ViewportCommand::StartDrag);
    }
}
