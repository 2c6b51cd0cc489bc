//! Main window view: custom title bar plus the join-server form

use crate::backend::{BackendError, ServerClient};
use crate::constants::*;
use crate::host::WindowController;
use crate::theme;
use crate::types::{ChromeAction, ChromeControl, JoinStatus};
use crate::ui::components;
use eframe::egui;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

const JOIN_BUTTON_WIDTH: f32 = 120.0;

fn glyph_id(control: ChromeControl) -> egui::Id {
    egui::Id::new(("chrome_glyph", control))
}

fn name_input_id() -> egui::Id {
    egui::Id::new("server_address_input")
}

/// Latest join attempt and its status. Only the newest attempt may resolve it.
#[derive(Debug, Default)]
struct JoinSlot {
    attempt: u64,
    status: JoinStatus,
}

impl JoinSlot {
    fn begin(&mut self) -> u64 {
        self.attempt += 1;
        self.status = JoinStatus::Pending;
        self.attempt
    }

    /// Returns false when `attempt` has been superseded.
    fn resolve(&mut self, attempt: u64, status: JoinStatus) -> bool {
        if attempt != self.attempt {
            return false;
        }
        self.status = status;
        true
    }
}

fn lock(slot: &Mutex<JoinSlot>) -> MutexGuard<'_, JoinSlot> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct MainWindow {
    result_text: String,
    name: String,
    join: Arc<Mutex<JoinSlot>>,
    window: Arc<dyn WindowController>,
    client: Arc<dyn ServerClient>,
    runtime: tokio::runtime::Handle,
    ctx: egui::Context,
}

impl MainWindow {
    pub fn new(
        ctx: egui::Context,
        window: Arc<dyn WindowController>,
        client: Arc<dyn ServerClient>,
        runtime: tokio::runtime::Handle,
    ) -> Self {
        Self {
            result_text: INITIAL_PROMPT.to_owned(),
            name: String::new(),
            join: Arc::new(Mutex::new(JoinSlot::default())),
            window,
            client,
            runtime,
            ctx,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display-only prompt; no handler reassigns it.
    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    pub fn status(&self) -> JoinStatus {
        lock(&self.join).status.clone()
    }

    pub fn on_name_changed(&mut self, text: String) {
        self.name = text;
    }

    /// Logs the entered name and hands it to the greeting call on a worker
    /// thread. The returned handle completes once the status is updated; the
    /// UI drops it.
    pub fn join_server(&mut self) -> JoinHandle<()> {
        info!(name = %self.name, "Joining server");

        let attempt = lock(&self.join).begin();
        let name = self.name.clone();
        let client = Arc::clone(&self.client);
        let join = Arc::clone(&self.join);
        let ctx = self.ctx.clone();

        self.runtime.spawn(async move {
            let outcome = match tokio::task::spawn_blocking(move || client.greet(&name)).await {
                Ok(result) => result,
                Err(e) => Err(BackendError::TaskFailed(e.to_string())),
            };

            let status = match outcome {
                Ok(greeting) => {
                    debug!(attempt, len = greeting.len(), "Greeting succeeded");
                    JoinStatus::Greeted(greeting)
                }
                Err(e) => {
                    warn!(attempt, error = %e, "Greeting failed");
                    JoinStatus::Failed(e.to_string())
                }
            };

            if !lock(&join).resolve(attempt, status) {
                debug!(attempt, "Discarding result of superseded join attempt");
            }
            ctx.request_repaint();
        })
    }

    pub fn on_control(&self, control: ChromeControl) {
        debug!(?control, "Title bar control clicked");
        match control.action() {
            ChromeAction::Quit => self.window.quit(),
        }
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("title_bar")
            .frame(theme::title_bar_frame())
            .exact_height(theme::TITLE_BAR_HEIGHT)
            .show_separator_line(false)
            .show(ctx, |ui| self.render_title_bar(ui));

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(theme::SPACING_XL as i8)),
            )
            .show(ctx, |ui| self.render_body(ui));
    }

    fn render_title_bar(&mut self, ui: &mut egui::Ui) {
        // Background drag area; glyphs are added afterwards so they sit on top
        let bar_rect = ui.max_rect();
        let drag = ui.interact(
            bar_rect,
            ui.id().with("title_bar_drag"),
            egui::Sense::click_and_drag(),
        );
        if drag.drag_started_by(egui::PointerButton::Primary) {
            self.window.start_drag();
        }

        let mut clicked = None;
        ui.horizontal_centered(|ui| {
            ui.label(
                egui::RichText::new(TITLE_BAR_LABEL)
                    .size(theme::FONT_BODY)
                    .color(theme::TEXT_PRIMARY),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                for control in ChromeControl::ALL.into_iter().rev() {
                    if components::chrome_glyph(ui, glyph_id(control), control.icon()).clicked() {
                        clicked = Some(control);
                    }
                }
            });
        });

        if let Some(control) = clicked {
            self.on_control(control);
        }
    }

    fn render_body(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(self.result_text())
                    .size(theme::FONT_BODY)
                    .color(theme::TEXT_SECONDARY),
            );
        });
        ui.add_space(theme::SPACING_MD);

        let row_width = theme::INPUT_WIDTH + theme::SPACING_MD + JOIN_BUTTON_WIDTH;
        let mut join_clicked = false;
        ui.horizontal(|ui| {
            ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));

            let mut input = self.name().to_owned();
            if components::text_input(ui, name_input_id(), &mut input, NAME_HINT).changed() {
                self.on_name_changed(input);
            }

            let button = theme::button_accent(JOIN_LABEL)
                .min_size(egui::vec2(JOIN_BUTTON_WIDTH, theme::BUTTON_HEIGHT));
            join_clicked = ui.add(button).clicked();
        });

        if join_clicked {
            let _ = self.join_server();
        }

        ui.add_space(theme::SPACING_MD);
        let status_line = match self.status() {
            JoinStatus::Idle => None,
            JoinStatus::Pending => Some(("Joining…".to_owned(), theme::TEXT_MUTED)),
            JoinStatus::Greeted(greeting) => Some((greeting, theme::STATUS_SUCCESS)),
            JoinStatus::Failed(error) => Some((error, theme::STATUS_ERROR)),
        };
        if let Some((text, color)) = status_line {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(text).size(theme::FONT_LABEL).color(color));
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::testing::RecordingClient;
    use crate::backend::LocalBackend;
    use crate::host::testing::{HostCall, RecordingWindow};
    use std::io::Write;
    use std::sync::OnceLock;
    use std::time::{Duration, Instant};

    struct Fixture {
        runtime: tokio::runtime::Runtime,
        window: Arc<RecordingWindow>,
        client: Arc<RecordingClient>,
        view: MainWindow,
    }

    fn fixture(reply: crate::backend::Result<String>) -> Fixture {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let window = Arc::new(RecordingWindow::default());
        let client = Arc::new(RecordingClient::replying(reply));
        let view = MainWindow::new(
            egui::Context::default(),
            window.clone(),
            client.clone(),
            runtime.handle().clone(),
        );
        Fixture {
            runtime,
            window,
            client,
            view,
        }
    }

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn name_tracks_full_input_after_every_keystroke() {
        let mut f = fixture(Ok(String::new()));
        let typed = "play.example.com";
        for end in 1..=typed.len() {
            f.view.on_name_changed(typed[..end].to_owned());
            assert_eq!(f.view.name(), &typed[..end]);
        }

        f.view.on_name_changed("  spaced out  ".to_owned());
        assert_eq!(f.view.name(), "  spaced out  ");
    }

    /// Process-wide subscriber at the shipping filter, so worker-thread events
    /// are captured too. Installed once per test binary.
    fn shipping_logs() -> SharedBuf {
        static LOGS: OnceLock<SharedBuf> = OnceLock::new();
        LOGS.get_or_init(|| {
            let buf = SharedBuf::default();
            let writer = buf.clone();
            let subscriber = tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER))
                .with_writer(move || writer.clone())
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)
                .expect("global subscriber should only be installed here");
            buf
        })
        .clone()
    }

    #[test]
    fn join_writes_the_name_into_exactly_one_log_line() {
        let logs = shipping_logs();
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut view = MainWindow::new(
            egui::Context::default(),
            Arc::new(RecordingWindow::default()),
            Arc::new(LocalBackend),
            runtime.handle().clone(),
        );
        view.on_name_changed("play.example.com".to_owned());

        let task = view.join_server();
        runtime.block_on(task).unwrap();
        assert_eq!(
            view.status(),
            JoinStatus::Greeted("Hello play.example.com, It's show time!".into())
        );

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<&str> = output
            .lines()
            .filter(|l| l.contains("play.example.com"))
            .collect();
        assert_eq!(lines.len(), 1, "unexpected log lines: {:#?}", lines);
        assert!(lines[0].contains("Joining server"));
        assert_eq!(lines[0].matches("play.example.com").count(), 1);
    }

    #[test]
    fn join_greets_once_with_the_entered_name() {
        let mut f = fixture(Ok("Hello play.example.net, It's show time!".into()));
        f.view.on_name_changed("play.example.net".to_owned());
        let task = f.view.join_server();
        f.runtime.block_on(task).unwrap();
        assert_eq!(f.client.names(), vec!["play.example.net".to_owned()]);
    }

    #[test]
    fn empty_name_is_still_forwarded() {
        let mut f = fixture(Ok("Hello , It's show time!".into()));
        let task = f.view.join_server();
        f.runtime.block_on(task).unwrap();
        assert_eq!(f.client.names(), vec![String::new()]);
    }

    #[test]
    fn every_chrome_control_quits_once_per_click() {
        let f = fixture(Ok(String::new()));
        for (clicks, control) in ChromeControl::ALL.into_iter().enumerate() {
            f.view.on_control(control);
            assert_eq!(f.window.count(&HostCall::Quit), clicks + 1);
        }
        assert_eq!(f.window.calls().len(), 3);
    }

    #[test]
    fn prompt_is_never_reassigned() {
        let mut f = fixture(Err(BackendError::Unavailable("offline".into())));
        assert_eq!(f.view.result_text(), "Please enter your name below 👇");

        f.view.on_name_changed("mc.example.org".to_owned());
        let task = f.view.join_server();
        f.runtime.block_on(task).unwrap();
        f.view.on_control(ChromeControl::Close);

        assert_eq!(f.view.result_text(), "Please enter your name below 👇");
    }

    #[test]
    fn greeting_result_becomes_visible_status() {
        let mut f = fixture(Ok("Hello steve, It's show time!".into()));
        assert_eq!(f.view.status(), JoinStatus::Idle);
        f.view.on_name_changed("steve".to_owned());
        let task = f.view.join_server();
        f.runtime.block_on(task).unwrap();
        assert_eq!(
            f.view.status(),
            JoinStatus::Greeted("Hello steve, It's show time!".into())
        );
    }

    #[test]
    fn greeting_failure_becomes_visible_status() {
        let mut f = fixture(Err(BackendError::Unavailable("connection refused".into())));
        let task = f.view.join_server();
        f.runtime.block_on(task).unwrap();
        assert_eq!(
            f.view.status(),
            JoinStatus::Failed("backend unavailable: connection refused".into())
        );
    }

    #[test]
    fn superseded_attempt_cannot_overwrite_status() {
        let mut slot = JoinSlot::default();
        let first = slot.begin();
        let second = slot.begin();

        assert!(!slot.resolve(first, JoinStatus::Greeted("stale".into())));
        assert_eq!(slot.status, JoinStatus::Pending);

        assert!(slot.resolve(second, JoinStatus::Failed("offline".into())));
        assert_eq!(slot.status, JoinStatus::Failed("offline".into()));
    }

    #[test]
    fn rendering_frames_touches_no_host_binding() {
        let mut f = fixture(Ok(String::new()));
        let ctx = egui::Context::default();
        for _ in 0..3 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| f.view.ui(ctx));
        }
        assert!(f.window.calls().is_empty());
        assert!(f.client.names().is_empty());
    }

    /// Feeds frames with synthetic input into a view, headless.
    struct Harness {
        ctx: egui::Context,
        time: f64,
    }

    impl Harness {
        /// Runs one idle frame so widget rects are known.
        fn new(view: &mut MainWindow) -> Self {
            let mut harness = Self {
                ctx: view.ctx.clone(),
                time: 0.0,
            };
            harness.frame(view, Vec::new());
            harness
        }

        fn frame(&mut self, view: &mut MainWindow, events: Vec<egui::Event>) {
            self.time += 0.05;
            let input = egui::RawInput {
                screen_rect: Some(egui::Rect::from_min_size(
                    egui::Pos2::ZERO,
                    egui::vec2(800.0, 600.0),
                )),
                time: Some(self.time),
                events,
                ..Default::default()
            };
            let _ = self.ctx.run(input, |ctx| view.ui(ctx));
        }

        fn click(&mut self, view: &mut MainWindow, pos: egui::Pos2) {
            let button = |pressed| egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed,
                modifiers: egui::Modifiers::NONE,
            };
            self.frame(view, vec![egui::Event::PointerMoved(pos)]);
            self.frame(view, vec![button(true)]);
            self.frame(view, vec![button(false)]);
        }

        fn rect_of(&self, id: egui::Id) -> egui::Rect {
            self.ctx
                .read_response(id)
                .map(|r| r.rect)
                .expect("widget should have been laid out")
        }
    }

    #[test]
    fn clicking_each_glyph_quits_without_dragging() {
        let mut f = fixture(Ok(String::new()));
        let mut h = Harness::new(&mut f.view);

        for (clicks, control) in ChromeControl::ALL.into_iter().enumerate() {
            let center = h.rect_of(glyph_id(control)).center();
            h.click(&mut f.view, center);
            assert_eq!(f.window.count(&HostCall::Quit), clicks + 1, "{:?}", control);
        }
        assert_eq!(f.window.count(&HostCall::StartDrag), 0);
        assert_eq!(f.window.calls().len(), 3);
    }

    #[test]
    fn typed_text_reaches_name_unchanged() {
        let mut f = fixture(Ok(String::new()));
        let mut h = Harness::new(&mut f.view);

        let input = h.rect_of(name_input_id());
        h.click(&mut f.view, input.center());
        h.frame(&mut f.view, vec![egui::Event::Text("mc.a".into())]);
        assert_eq!(f.view.name(), "mc.a");
        h.frame(&mut f.view, vec![egui::Event::Text("b c".into())]);
        assert_eq!(f.view.name(), "mc.ab c");
    }

    #[test]
    fn join_button_click_greets_once() {
        let mut f = fixture(Ok("Hello mc.ab c, It's show time!".into()));
        let mut h = Harness::new(&mut f.view);

        let input = h.rect_of(name_input_id());
        h.click(&mut f.view, input.center());
        h.frame(&mut f.view, vec![egui::Event::Text("mc.ab c".into())]);

        // Join button sits right of the input, one item spacing away
        let spacing = h.ctx.style().spacing.item_spacing.x;
        let button = egui::pos2(
            input.right() + spacing + JOIN_BUTTON_WIDTH / 2.0,
            input.center().y,
        );
        h.click(&mut f.view, button);

        let deadline = Instant::now() + Duration::from_secs(5);
        while f.view.status() == JoinStatus::Pending && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(10));
        }
        assert_eq!(f.client.names(), vec!["mc.ab c".to_owned()]);
        assert_eq!(
            f.view.status(),
            JoinStatus::Greeted("Hello mc.ab c, It's show time!".into())
        );
        assert!(f.window.calls().is_empty());
    }
}
