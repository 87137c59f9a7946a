//! Sidebar navigation component.

use leptos::prelude::*;
use leptos_icons::Icon;
use stylance::classes;

use super::NavItem;
use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_VERSION};
use crate::models::{NavEntry, Route};

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

/// Fixed navigation rail.
///
/// On narrow viewports the rail is translated off-screen unless
/// `is_mobile_open` is set. The close button, the backdrop, and following a
/// link all request a change through `on_toggle`; the sidebar never writes
/// the flag itself.
///
/// # Props
/// - `entries`: "Menu" section entries
/// - `footer`: Entries pinned to the bottom (Settings, Logout)
/// - `current_route`: Route used for active highlighting
/// - `on_activate`: Receives the route of clicked `Toggle` entries
#[component]
pub fn Sidebar(
    entries: Vec<NavEntry>,
    #[prop(optional)] footer: Vec<NavEntry>,
    #[prop(into)] current_route: Signal<Route>,
    #[prop(into)] is_mobile_open: Signal<bool>,
    on_toggle: Callback<()>,
    #[prop(optional)] on_activate: Option<Callback<String>>,
) -> impl IntoView {
    let on_navigate = Callback::new(move |_: ()| {
        if is_mobile_open.get_untracked() {
            on_toggle.run(());
        }
    });

    let render_entries = move |entries: Vec<NavEntry>| {
        entries
            .into_iter()
            .map(|entry| {
                view! {
                    <NavItem
                        entry=entry
                        current_route=current_route
                        on_activate=on_activate
                        on_navigate=Some(on_navigate)
                    />
                }
            })
            .collect_view()
    };

    view! {
        <Show when=move || is_mobile_open.get()>
            <div
                class=css::backdrop
                aria-hidden="true"
                on:click=move |_| on_toggle.run(())
            ></div>
        </Show>

        <aside
            class=move || classes!(css::sidebar, is_mobile_open.get().then_some(css::sidebarOpen))
            aria-label="Main navigation"
        >
            <div class=css::brand>
                <div class=css::brandName>
                    <span class=css::brandLogo><Icon icon=ic::LOGO /></span>
                    <h1 class=css::brandTitle>{APP_NAME}</h1>
                </div>
                <button
                    type="button"
                    class=classes!(css::iconButton, css::mobileOnly)
                    on:click=move |_| on_toggle.run(())
                    aria-label="Close sidebar"
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </div>

            <nav class=css::nav>
                <h2 class=css::navHeading>"Menu"</h2>
                <ul class=css::navList>{render_entries(entries)}</ul>
            </nav>

            <div class=css::sidebarFooter>
                <ul class=css::navList>{render_entries(footer)}</ul>
                <p class=css::version>{format!("v{}", APP_VERSION)}</p>
            </div>
        </aside>
    }
}
