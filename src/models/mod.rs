//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`NavEntry`], [`NavKind`] - Sidebar navigation entries
//! - [`Theme`] - Light/dark color theme
//! - [`Notification`] - Header notification feed
//! - [`CryptoAsset`] - Asset table rows
//! - [`BreadcrumbItem`] - Page breadcrumb trail
//! - [`Account`] - Signed-in user
//! - [`Route`] - Hash-based navigation

mod account;
mod asset;
mod breadcrumb;
mod navigation;
mod notification;
mod route;
mod theme;

pub use account::Account;
pub use asset::{ChangeDirection, CryptoAsset};
pub use breadcrumb::{BreadcrumbItem, TrailPart, trail};
pub use navigation::{NavEntry, NavKind, find_by_route};
pub use notification::{
    Notification, NotificationBody, badge_label, has_indicator, notification_body,
};
pub use route::Route;
pub use theme::Theme;
