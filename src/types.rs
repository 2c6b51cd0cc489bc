//! Common types and data structures

/// Outcome of the most recent "Join Server" attempt
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum JoinStatus {
    #[default]
    Idle,
    Pending,
    Greeted(String),
    Failed(String),
}

/// Window-chrome affordances drawn in the custom title bar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChromeControl {
    Minimize,
    Maximize,
    Close,
}

/// Host action a chrome control resolves to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChromeAction {
    Quit,
}

impl ChromeControl {
    /// Title bar order, left to right
    pub const ALL: [ChromeControl; 3] = [
        ChromeControl::Minimize,
        ChromeControl::Maximize,
        ChromeControl::Close,
    ];

    pub fn icon(self) -> &'static str {
        match self {
            ChromeControl::Minimize => egui_phosphor::regular::MINUS,
            ChromeControl::Maximize => egui_phosphor::regular::SQUARE,
            ChromeControl::Close => egui_phosphor::regular::X,
        }
    }

    /// All three controls quit the application.
    // FIXME: minimize/maximize are placeholders bound to quit; confirm product
    // intent before mapping them to ViewportCommand::Minimized/Maximized.
    pub fn action(self) -> ChromeAction {
        match self {
            ChromeControl::Minimize | ChromeControl::Maximize | ChromeControl::Close => {
                ChromeAction::Quit
            }
        }
    }
}
