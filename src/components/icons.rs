//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;
use neon_shell_core::NavIcon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuCopy as Bills, LuHouse as Home, LuList as Items, LuLogOut as Logout, LuMenu as Menu,
        LuShoppingCart as Cart, LuUser as Customers, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBoxArrowRight as Logout, BsCart as Cart, BsFiles as Bills, BsHouseFill as Home,
        BsList as Menu, BsListUl as Items, BsPerson as Customers, BsXLg as Close,
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

themed_icon!(HOME, Home);
themed_icon!(BILLS, Bills);
themed_icon!(ITEMS, Items);
themed_icon!(CUSTOMERS, Customers);
themed_icon!(LOGOUT, Logout);
themed_icon!(CART, Cart);
themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);

/// Icon for a navigation entry's visual token.
pub fn nav_icon(icon: NavIcon) -> Icon {
    match icon {
        NavIcon::Home => HOME,
        NavIcon::Bills => BILLS,
        NavIcon::Items => ITEMS,
        NavIcon::Customers => CUSTOMERS,
    }
}
