//! Page layout component.
//!
//! ## Layout
//!
//! - **Desktop (>= 768px)**: Sidebar fixed on the left, header across the top
//! - **Mobile (< 768px)**: Sidebar off-canvas, opened from the header's menu button

use leptos::prelude::*;
use leptos_use::use_media_query;

use super::{Header, Sidebar};
use crate::components::dashboard::{CryptoDashboard, PlaceholderPage};
use crate::config::{CRYPTO_ROUTE, DESKTOP_MEDIA_QUERY};
use crate::core::DashboardData;
use crate::models::Route;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

// ============================================================================
// MobileSidebar
// ============================================================================

/// Visibility of the off-canvas sidebar on narrow viewports.
///
/// Owned by [`Layout`]. Children receive a read-only signal plus a toggle
/// callback; only the owner may force it closed.
#[derive(Clone, Copy)]
pub struct MobileSidebar {
    open: RwSignal<bool>,
}

impl MobileSidebar {
    /// Starts closed.
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
        }
    }

    /// Read-only view for children.
    pub fn is_open(&self) -> Signal<bool> {
        let open = self.open;
        Signal::derive(move || open.get())
    }

    pub fn is_open_untracked(&self) -> bool {
        self.open.get_untracked()
    }

    pub fn toggle(&self) {
        self.open.update(|open| *open = !*open);
    }

    /// Close without notifying subscribers when already closed.
    pub fn close(&self) {
        if self.open.get_untracked() {
            self.open.set(false);
        }
    }
}

impl Default for MobileSidebar {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Layout Component
// ============================================================================

/// Sidebar, header, and the content panel for the current route.
///
/// # Props
/// - `data`: Records rendered by the sidebar, header, and pages
/// - `route`: The current route (derived from the URL)
#[component]
pub fn Layout(data: DashboardData, #[prop(into)] route: Signal<Route>) -> impl IntoView {
    let sidebar = MobileSidebar::new();
    let on_toggle = Callback::new(move |_: ()| sidebar.toggle());

    // Reset the overlay once the rail is permanently visible
    let is_desktop = use_media_query(DESKTOP_MEDIA_QUERY);
    Effect::new(move || {
        if is_desktop.get() {
            sidebar.close();
        }
    });

    // Route -> page label lookup for pages without dedicated content
    let pages = StoredValue::new(data.clone());
    let DashboardData {
        account,
        languages,
        nav,
        footer,
        notifications,
        ..
    } = data;

    let content = move || {
        let current = route.get();
        if current.matches(CRYPTO_ROUTE) {
            let assets = pages.with_value(|data| data.assets.clone());
            return view! { <CryptoDashboard assets=assets /> }.into_any();
        }

        let label = pages.with_value(|data| {
            data.find_entry(current.as_str())
                .map(|entry| entry.label.clone())
        });
        view! { <PlaceholderPage label=label /> }.into_any()
    };

    view! {
        <div class=css::layout>
            <Sidebar
                entries=nav
                footer=footer
                current_route=route
                is_mobile_open=sidebar.is_open()
                on_toggle=on_toggle
            />
            <Header
                notifications=notifications
                account=account
                languages=languages
                on_toggle_sidebar=on_toggle
            />
            <main class=css::content>{content}</main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_starts_closed() {
        let owner = Owner::new();
        owner.set();

        assert!(!MobileSidebar::new().is_open_untracked());
    }

    #[test]
    fn test_toggle_parity() {
        let owner = Owner::new();
        owner.set();

        let sidebar = MobileSidebar::new();
        for presses in 1..=6 {
            sidebar.toggle();
            assert_eq!(sidebar.is_open_untracked(), presses % 2 == 1);
        }
    }

    #[test]
    fn test_close_is_idempotent() {
        let owner = Owner::new();
        owner.set();

        let sidebar = MobileSidebar::new();
        sidebar.close();
        assert!(!sidebar.is_open_untracked());
        sidebar.toggle();
        sidebar.close();
        sidebar.close();
        assert!(!sidebar.is_open_untracked());
    }
}
