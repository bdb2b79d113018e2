//! User notifications and console reporting for widget errors.

use gloo_timers::callback::Timeout;
use wtable_core::WidgetError;

use super::dom;
use crate::config::ALERT_DELAY_MS;

/// How an error reaches the user or the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Shown in a browser alert.
    Alert(String),
    /// Logged as a console warning.
    Warn(String),
    /// Logged at debug level only.
    Debug(String),
}

impl Notice {
    pub fn for_error(err: &WidgetError) -> Self {
        match err {
            WidgetError::DuplicateFile { .. } => Self::Alert(err.to_string()),
            WidgetError::IndexOutOfRange { .. } => Self::Warn(format!("file table: {err}")),
            // Browsers can fire drag events out of order; nothing to fix.
            WidgetError::InvalidTransferState { .. } => Self::Debug(format!("file table: {err}")),
        }
    }
}

/// Report `err` to the user or the console.
pub fn report(err: &WidgetError) {
    match Notice::for_error(err) {
        Notice::Alert(message) => alert_later(message),
        Notice::Warn(message) => web_sys::console::warn_1(&message.into()),
        Notice::Debug(message) => web_sys::console::debug_1(&message.into()),
    }
}

/// Report the error of a widget operation, if any.
///
/// `None` means the widget was already disposed; that is logged too.
pub fn report_result<T>(result: Option<Result<T, WidgetError>>) -> Option<T> {
    match result {
        Some(Ok(value)) => Some(value),
        Some(Err(err)) => {
            report(&err);
            None
        }
        None => {
            web_sys::console::warn_1(&"file table: widget no longer available".into());
            None
        }
    }
}

fn alert_later(message: String) {
    Timeout::new(ALERT_DELAY_MS, move || {
        if let Some(window) = dom::window() {
            let _ = window.alert_with_message(&message);
        }
    })
    .forget();
}
