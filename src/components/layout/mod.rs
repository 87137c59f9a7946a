//! Page frame shared by every dashboard page.
//!
//! Components:
//! - [`Layout`] - Owns the mobile sidebar flag and composes the frame
//! - [`Sidebar`] - Fixed navigation rail, off-canvas on narrow viewports
//! - [`NavItem`] - One sidebar entry (link, toggle, or collapsible group)
//! - [`Header`] - Top bar with search, menus, theme and fullscreen toggles
//! - [`Dropdown`] - Trigger button with a focus-managed popup menu

mod dropdown;
mod header;
#[allow(clippy::module_inception)]
mod layout;
mod nav_item;
mod sidebar;

pub use dropdown::Dropdown;
pub use header::Header;
pub use layout::{Layout, MobileSidebar};
pub use nav_item::NavItem;
pub use sidebar::Sidebar;
