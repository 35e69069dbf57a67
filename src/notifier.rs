use std::thread;

use tracing::debug;

use crate::session::Notification;

/// Delivers session-transition notifications. Infallible from the caller's
/// point of view: delivery problems are swallowed by the implementation.
pub trait Notifier {
    fn notify(&self, notification: &Notification);
}

/// Desktop notifications via the platform notification service
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    app_name: String,
}

impl DesktopNotifier {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"))
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, notification: &Notification) {
        let app_name = self.app_name.clone();
        let notification = notification.clone();

        // show() may block on the notification daemon
        thread::spawn(move || {
            let result = notify_rust::Notification::new()
                .appname(&app_name)
                .summary(&notification.title)
                .body(&notification.body)
                .show();
            match result {
                Ok(_) => debug!(target: "notify", title = %notification.title, "delivered"),
                Err(err) => debug!(target: "notify", %err, "delivery_failed"),
            }
        });
    }
}

/// Drops every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _notification: &Notification) {}
}
