//! Root application module.
//!
//! Contains the main App component, AppContext definition, ThemeStore,
//! and application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::config::DARK_ROOT_CLASS;
use crate::core::DashboardData;
use crate::core::theme::{load_theme, save_theme};
use crate::models::Theme;
use crate::utils::dom;

// ============================================================================
// ThemeStore
// ============================================================================

/// Application-wide theme, the single source of truth for light/dark mode.
///
/// Every header instance reads the same store, so they always agree. Readers
/// subscribe by calling [`ThemeStore::get`] inside a reactive scope; writers
/// go through [`ThemeStore::set`] or [`ThemeStore::toggle`].
///
/// # Note
///
/// This struct is `Copy` because its only field is a Leptos signal.
#[derive(Clone, Copy)]
pub struct ThemeStore {
    theme: RwSignal<Theme>,
}

impl ThemeStore {
    pub fn new(initial: Theme) -> Self {
        Self {
            theme: RwSignal::new(initial),
        }
    }

    /// Current theme (tracked).
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    /// Current theme without subscribing.
    pub fn get_untracked(&self) -> Theme {
        self.theme.get_untracked()
    }

    pub fn set(&self, theme: Theme) {
        self.theme.set(theme);
    }

    pub fn toggle(&self) {
        self.theme.update(|t| *t = t.toggled());
    }
}

/// Mirror the theme onto the document root and persist it.
fn setup_theme_effects(theme: ThemeStore) {
    Effect::new(move || {
        let current = theme.get();
        dom::set_root_class(DARK_ROOT_CLASS, current.is_dark());
        if let Err(err) = save_theme(current) {
            dom::console_warn(&format!("Theme not saved: {}", err));
        }
    });
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// Only state shared by unrelated components lives here. The mobile sidebar
/// flag is owned by the layout and passed down as props.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Light/dark theme.
    pub theme: ThemeStore,
}

impl AppContext {
    /// Creates a new application context, restoring the saved theme.
    pub fn new() -> Self {
        Self {
            theme: ThemeStore::new(load_theme()),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Loads the bundled dashboard data
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    setup_theme_effects(ctx.theme);

    let data = DashboardData::bundled();
    if let Err(err) = &data {
        dom::console_error(&err.to_string());
    }

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: var(--background);
                    color: var(--foreground);
                    font-family: system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: var(--destructive); margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: var(--muted-foreground); margin-bottom: 2rem;">
                            "The dashboard could not be loaded. Please try reloading the page."
                        </p>
                        <ul style="
                            text-align: left;
                            margin: 0 0 1rem 0;
                            padding-left: 1.5rem;
                            color: var(--destructive);
                            font-size: 0.9rem;
                        ">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: var(--primary);
                                color: var(--primary-foreground);
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            {data.map(|data| view! { <AppRouter data=data /> })}
        </ErrorBoundary>
    }
}
