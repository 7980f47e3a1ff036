use std::io::Write;

/// Best-effort delivery of reminder notifications.
///
/// Implementations swallow their own failures; a reminder is still recorded
/// when nothing could be shown.
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, body: &str);
}

/// Rings the terminal bell and prints the notification to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, title: &str, body: &str) {
        let mut stderr = std::io::stderr().lock();
        if let Err(e) = writeln!(stderr, "\x07{}: {}", title, body) {
            tracing::debug!("Notification not shown: {}", e);
        }
    }
}

/// Used when notifications are turned off.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _title: &str, _body: &str) {}
}
