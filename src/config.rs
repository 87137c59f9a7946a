//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Sample dashboard data is loaded at compile time using `include_str!`.

// =============================================================================
// Data Assets (loaded at compile time)
// =============================================================================

/// Navigation entries, notifications, assets, and account shown by default.
pub const DASHBOARD_DATA: &str = include_str!("../assets/data/dashboard.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Brand name displayed in the sidebar header.
pub const APP_NAME: &str = "VELZON";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Routing
// =============================================================================

/// Route shown when the URL carries no hash.
pub const DEFAULT_ROUTE: &str = "#/crypto";

/// Route rendered by the crypto dashboard page.
pub const CRYPTO_ROUTE: &str = "#/crypto";

/// Label of the first breadcrumb on every dashboard page.
pub const BREADCRUMB_ROOT: &str = "Dashboards";

// =============================================================================
// Layout
// =============================================================================

/// Media query matching viewports where the sidebar is always visible.
///
/// Keep in sync with the `768px` breakpoint in the layout stylesheets.
pub const DESKTOP_MEDIA_QUERY: &str = "(min-width: 768px)";

// =============================================================================
// Theme
// =============================================================================

/// localStorage key for the persisted theme preference.
pub const THEME_STORAGE_KEY: &str = "velzon.theme";

/// Class added to the document root element while the dark theme is active.
pub const DARK_ROOT_CLASS: &str = "dark";

// =============================================================================
// Notifications
// =============================================================================

/// What the notification dropdown shows when there is nothing to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyNotifications {
    /// Render an explicit "No new notifications" row.
    #[default]
    Message,
    /// Render the list container with no rows.
    Blank,
}

/// Empty-state policy used by the header unless overridden.
pub const NOTIFICATION_EMPTY_STATE: EmptyNotifications = EmptyNotifications::Message;

/// Text of the empty-state row.
pub const EMPTY_NOTIFICATIONS_TEXT: &str = "No new notifications";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    Bootstrap,
    #[default]
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
