//! One-shot display of the store's pending notification.

use crossterm::style::Stylize;

use crate::gateway::Gateway;
use crate::store::{Notification, Store};

/// Format a notification as a single line, optionally coloured.
pub fn format_notification(notification: &Notification, color: bool) -> String {
    match (notification, color) {
        (Notification::Error(message), true) => {
            format!("{} {}", "Error:".red().bold(), message)
        }
        (Notification::Error(message), false) => format!("Error: {}", message),
        (Notification::Success(message), true) => {
            format!("{} {}", "Success:".green().bold(), message)
        }
        (Notification::Success(message), false) => format!("Success: {}", message),
    }
}

/// Take the pending notification and acknowledge it.
///
/// Returns the notification so the caller can show it; the store no longer
/// holds it afterwards.
pub fn take_notification<G: Gateway>(store: &Store<G>) -> Option<Notification> {
    let notification = store.snapshot().notification()?;
    store.reset_notification();
    Some(notification)
}
