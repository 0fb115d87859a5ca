//! # Notification Commands
//!
//! The toast shown above the navigation bar. The bill-out form reports its
//! outcome through `show_notification`; the toast's own close button calls
//! `dismiss_notification`.

use tracing::debug;

use crate::error::ApiError;
use crate::state::NavState;
use taborder_core::validation::validate_notification_message;
use taborder_core::{NotificationId, ToastView};

/// Shows a message, replacing whatever is on screen.
///
/// ## Arguments
/// * `message` - Text to show (trimmed, max 500 characters)
/// * `persistent` - Stay until dismissed (default: true). Transient messages
///   hide themselves after the configured delay.
pub fn show_notification(
    nav: &NavState,
    message: &str,
    persistent: Option<bool>,
) -> Result<ToastView, ApiError> {
    let persistent = persistent.unwrap_or(true);
    debug!(persistent, "show_notification command");

    let message = validate_notification_message(message)?;
    nav.notifications().show(message, persistent);
    Ok(get_notification(nav))
}

/// Hides the current message.
pub fn dismiss_notification(nav: &NavState) -> ToastView {
    debug!("dismiss_notification command");
    nav.notifications().dismiss();
    get_notification(nav)
}

/// Hides message `id` if it is still the one on screen and not persistent.
pub fn expire_notification(nav: &NavState, id: &str) -> Result<ToastView, ApiError> {
    debug!(id = %id, "expire_notification command");
    let id: NotificationId = id.parse()?;
    nav.notifications().expire(id);
    Ok(get_notification(nav))
}

/// Current toast.
pub fn get_notification(nav: &NavState) -> ToastView {
    nav.notifications().with_channel(|c| ToastView::from(c))
}
