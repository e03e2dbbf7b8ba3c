//! Injected notification and navigation capabilities.
//!
//! The dispatcher never talks to a concrete UI. It issues [`Notice`]
//! values through a [`Notifier`] and defers navigation to a
//! [`Navigator`], so the rendering surface stays outside this crate and
//! the dispatcher remains testable against recording doubles.

use std::fmt;
use std::time::Duration;

/// Callback a notifier runs when its notice is dismissed.
pub type OnClose = Box<dyn FnOnce() + Send>;

/// A single fire-and-forget error notice.
pub struct Notice {
    pub message: String,
    pub description: String,
    /// How long the notice stays up before auto-dismissing. `None` leaves
    /// the choice to the notification surface.
    pub duration: Option<Duration>,
    /// Invoked by the notifier exactly once, when the notice closes.
    pub on_close: Option<OnClose>,
}

impl Notice {
    pub fn new(message: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            description: description.into(),
            duration: None,
            on_close: None,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn with_on_close(mut self, on_close: impl FnOnce() + Send + 'static) -> Self {
        self.on_close = Some(Box::new(on_close));
        self
    }
}

impl fmt::Debug for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notice")
            .field("message", &self.message)
            .field("description", &self.description)
            .field("duration", &self.duration)
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}

/// Receives error notices.
///
/// Implementations own the notification lifecycle and must invoke
/// `on_close`, when present, once the notice is dismissed.
pub trait Notifier: Send + Sync {
    fn error(&self, notice: Notice);
}

/// Receives the navigation target written by the built-in 401 policy.
pub trait Navigator: Send + Sync {
    fn navigate(&self, url: &str);
}
