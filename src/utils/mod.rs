//! Utility modules for DOM access and user notifications.
//!
//! Provides:
//! - [`dom`] - Window/document lookups, file and drag data conversion
//! - [`notify`] - Alerts and console logging for widget errors

pub mod dom;
pub mod notify;
