//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBell as Bell, LuBitcoin as Bitcoin, LuBookOpen as Book, LuBriefcase as Briefcase,
        LuChevronDown as ChevronDown, LuChevronRight as ChevronRight, LuCircle as Circle,
        LuDollarSign as Dollar, LuEllipsis as More, LuFolderKanban as Kanban, LuGlobe as Language,
        LuImage as Image, LuLayers as Logo, LuLayoutDashboard as Dashboard, LuLayoutGrid as Apps,
        LuLifeBuoy as Support, LuLogOut as Logout, LuMaximize as Fullscreen, LuMenu as Menu,
        LuMoon as Moon, LuSearch as Search, LuSettings as Settings, LuShoppingCart as Cart,
        LuSun as Sun, LuTrendingUp as TrendingUp, LuUser as User, LuUsers as Users, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowsFullscreen as Fullscreen, BsBell as Bell, BsBook as Book, BsBoxArrowRight as Logout,
        BsBriefcase as Briefcase, BsCart as Cart, BsChevronDown as ChevronDown,
        BsChevronRight as ChevronRight, BsCircle as Circle, BsCurrencyBitcoin as Bitcoin,
        BsCurrencyDollar as Dollar, BsGear as Settings, BsGlobe as Language,
        BsGraphUpArrow as TrendingUp, BsGrid as Apps, BsImage as Image, BsKanban as Kanban,
        BsLayers as Logo, BsLifePreserver as Support, BsList as Menu, BsMoon as Moon,
        BsPeople as Users, BsPerson as User, BsSearch as Search, BsSpeedometer2 as Dashboard,
        BsSun as Sun, BsThreeDots as More, BsXLg as Close,
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

// Layout chrome
themed_icon!(LOGO, Logo);
themed_icon!(CLOSE, Close);
themed_icon!(MENU, Menu);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(SEARCH, Search);
themed_icon!(LANGUAGE, Language);
themed_icon!(APPS, Apps);
themed_icon!(FULLSCREEN, Fullscreen);
themed_icon!(MOON, Moon);
themed_icon!(SUN, Sun);
themed_icon!(BELL, Bell);
themed_icon!(SUPPORT, Support);
themed_icon!(MORE, More);

// Content icons referenced by data keys
themed_icon!(DASHBOARD, Dashboard);
themed_icon!(USERS, Users);
themed_icon!(USER, User);
themed_icon!(CART, Cart);
themed_icon!(BITCOIN, Bitcoin);
themed_icon!(KANBAN, Kanban);
themed_icon!(IMAGE, Image);
themed_icon!(BRIEFCASE, Briefcase);
themed_icon!(BOOK, Book);
themed_icon!(DOLLAR, Dollar);
themed_icon!(TRENDING_UP, TrendingUp);
themed_icon!(SETTINGS, Settings);
themed_icon!(LOGOUT, Logout);
themed_icon!(CIRCLE, Circle);

/// Resolve an icon key from dashboard data.
///
/// Unknown keys fall back to a plain circle so bad data never breaks a row.
pub fn lookup(key: &str) -> Icon {
    match key {
        "dashboard" => DASHBOARD,
        "users" => USERS,
        "user" => USER,
        "cart" => CART,
        "bitcoin" => BITCOIN,
        "kanban" => KANBAN,
        "image" => IMAGE,
        "briefcase" => BRIEFCASE,
        "book" => BOOK,
        "dollar" => DOLLAR,
        "trending-up" => TRENDING_UP,
        "settings" => SETTINGS,
        "logout" => LOGOUT,
        _ => CIRCLE,
    }
}
