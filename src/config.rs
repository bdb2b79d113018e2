//! Application configuration.
//!
//! Centralizes the constants shared by every file table on the page.

// =============================================================================
// Page Markup
// =============================================================================

/// Class of the containers that receive a file table.
pub const CONTAINER_CLASS: &str = "w-table";

/// Container attribute naming the widget (by page order) to copy files from.
///
/// `<div class="w-table" data-seed-from="0"></div>` starts with the files of
/// the first table on the page.
pub const SEED_ATTRIBUTE: &str = "data-seed-from";

/// Container attribute mirroring the current file list as JSON.
pub const FILES_ATTRIBUTE: &str = "data-files";

// =============================================================================
// Drag Data
// =============================================================================

/// Drag data keys written on drag start and read back on drop.
pub mod drag_keys {
    /// Marks a drag that carries a file table row.
    pub const FILE: &str = "file";
    /// Label of the widget that started the drag.
    pub const LABEL: &str = "label";
}

/// Drop effect advertised while dragging a row.
pub const DRAG_EFFECT: &str = "move";

// =============================================================================
// Notifications
// =============================================================================

/// Delay before showing a duplicate-file alert, in milliseconds.
///
/// The alert is deferred so the drop or change handler finishes first.
pub const ALERT_DELAY_MS: u32 = 1;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

/// Column headers, in display order.
pub mod columns {
    pub const NAME: &str = "Name";
    pub const SIZE: &str = "Size";
    pub const MODIFIED: &str = "Modified";
}

/// Label of the file picker button.
pub const ADD_LABEL: &str = "Add file";
