//! User notification sink
//!
//! Fire-and-forget success/error toasts surfaced to the submitting user.
//! The submission pipeline reports both terminal outcomes through this
//! trait; nothing consumes a return value.

/// Notification sink for user-visible toasts.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Notifier that writes toasts to the log stream.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        tracing::info!(toast = "success", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::warn!(toast = "error", "{}", message);
    }
}
