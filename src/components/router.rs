//! Application router component.
//!
//! Handles URL-based routing with hash history.
//! Uses native hashchange events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the current page is derived from `#/page`
//! - **Layout never re-renders on navigation**: only the content area and
//!   active-entry highlighting react to the route
//! - **hashchange events**: browser back/forward buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::layout::Layout;
use crate::core::DashboardData;
use crate::models::Route;

/// Main application router.
///
/// The route is the only input the layout takes from outside the page:
/// sidebar highlighting and the content panel both derive from it.
#[component]
pub fn AppRouter(data: DashboardData) -> impl IntoView {
    // Create route signal from current URL hash
    let route = RwSignal::new(Route::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(Route::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let route_memo = Memo::new(move |_| route.get());

    view! { <Layout data=data route=route_memo /> }
}
