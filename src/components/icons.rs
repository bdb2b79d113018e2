//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowDown as SortDown, LuArrowUp as SortUp, LuArrowUpDown as Sortable,
        LuFile as File, LuPlus as Plus,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowDown as SortDown, BsArrowDownUp as Sortable, BsArrowUp as SortUp,
        BsFileEarmark as File, BsPlusLg as Plus,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(FILE, File);
themed_icon!(PLUS, Plus);
themed_icon!(SORTABLE, Sortable);
themed_icon!(SORT_UP, SortUp);
themed_icon!(SORT_DOWN, SortDown);
