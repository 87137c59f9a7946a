//! Sidebar entry component.

use leptos::prelude::*;
use leptos_icons::Icon;
use stylance::classes;

use crate::components::icons as ic;
use crate::models::{NavEntry, NavKind, Route};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

/// One selectable sidebar row.
///
/// | Kind | Click | Local state |
/// |------|-------|-------------|
/// | `Link` | Navigates to the route | none |
/// | `Toggle` | Calls `on_activate` with the route | none |
/// | `Collapsible` | Shows/hides nested entries | `expanded` |
///
/// A collapsible group starts expanded only when its own route is the
/// current route. Landing on one of its children leaves it collapsed; the
/// child is still highlighted once the group is opened.
#[component]
pub fn NavItem(
    entry: NavEntry,
    #[prop(into)] current_route: Signal<Route>,
    #[prop(optional)] is_sub_item: bool,
    #[prop(optional_no_strip)] on_activate: Option<Callback<String>>,
    #[prop(optional_no_strip)] on_navigate: Option<Callback<()>>,
) -> impl IntoView {
    let expanded_at_start = current_route.with_untracked(|r| entry.initially_expanded(r.as_str()));
    let collapsible = entry.is_collapsible();
    let NavEntry {
        route,
        icon,
        label,
        kind,
    } = entry;

    let is_active = Signal::derive({
        let route = route.clone();
        move || current_route.with(|r| r.matches(&route))
    });

    let row_class = move || {
        classes!(
            css::navRow,
            if is_active.get() { css::navRowActive } else { css::navRowIdle },
            is_sub_item.then_some(css::navRowSub),
            collapsible.then_some(css::navRowGroup)
        )
    };

    let icon = ic::lookup(&icon);
    let name = label.clone();
    let body = move || {
        view! {
            <span class=css::navIcon><Icon icon=icon /></span>
            <span class=css::navLabel>{label.clone()}</span>
        }
    };

    match kind {
        NavKind::Link => view! {
            <li>
                <a
                    href=route
                    class=row_class
                    aria-current=move || is_active.get().then_some("page")
                    on:click=move |_| {
                        if let Some(on_navigate) = on_navigate {
                            on_navigate.run(());
                        }
                    }
                >
                    {body()}
                </a>
            </li>
        }
        .into_any(),

        NavKind::Toggle => {
            let on_click = move |_: leptos::ev::MouseEvent| match on_activate {
                Some(on_activate) => on_activate.run(route.clone()),
                None => dom::console_log(&format!("{} clicked", name)),
            };

            view! {
                <li>
                    <button type="button" class=row_class on:click=on_click>
                        {body()}
                    </button>
                </li>
            }
            .into_any()
        }

        NavKind::Collapsible(children) => {
            let expanded = RwSignal::new(expanded_at_start);
            let chevron_class =
                move || classes!(css::chevron, expanded.get().then_some(css::chevronOpen));

            view! {
                <li>
                    <button
                        type="button"
                        class=row_class
                        aria-expanded=move || expanded.get().to_string()
                        on:click=move |_| expanded.update(|open| *open = !*open)
                    >
                        {body()}
                        <span class=chevron_class><Icon icon=ic::CHEVRON_DOWN /></span>
                    </button>
                    <Show when=move || expanded.get()>
                        <ul class=css::subList>
                            {children
                                .iter()
                                .cloned()
                                .map(|child| {
                                    view! {
                                        <NavItem
                                            entry=child
                                            current_route=current_route
                                            is_sub_item=true
                                            on_activate=on_activate
                                            on_navigate=on_navigate
                                        />
                                    }
                                    .into_any()
                                })
                                .collect_view()}
                        </ul>
                    </Show>
                </li>
            }
            .into_any()
        }
    }
}
