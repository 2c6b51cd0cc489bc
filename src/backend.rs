//! Backend calls reachable from the UI

use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    #[error("backend task failed: {0}")]
    TaskFailed(String),
}

pub type Result<T> = std::result::Result<T, BackendError>;

/// Server-facing calls. Implementations run on a blocking worker thread.
pub trait ServerClient: Send + Sync + 'static {
    /// Greet the server with the entered name; returns the greeting text.
    fn greet(&self, name: &str) -> Result<String>;
}

/// In-process backend bundled with the app.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalBackend;

impl ServerClient for LocalBackend {
    fn greet(&self, name: &str) -> Result<String> {
        debug!(len = name.len(), "Greeting");
        Ok(format!("Hello {}, It's show time!", name))
    }
}
