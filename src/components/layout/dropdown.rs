//! Header dropdown menu.

use leptos::prelude::*;
use stylance::classes;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

/// Trigger button with a popup menu.
///
/// The menu closes when an item inside it is clicked or when focus leaves
/// the dropdown wrapper. Each dropdown keeps its own open flag.
#[component]
pub fn Dropdown(
    #[prop(into)] title: String,
    #[prop(into)] trigger_class: String,
    #[prop(into)] trigger: ViewFn,
    #[prop(optional)] menu_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let menu_open = RwSignal::new(false);

    // Close menu when focus leaves the dropdown wrapper
    let on_focusout = move |event: web_sys::FocusEvent| {
        if let Some(related) = event.related_target() {
            // If focus is moving to another element, check if it's within the dropdown
            if let Some(current) = event.current_target() {
                use wasm_bindgen::JsCast;
                if let (Some(wrapper), Some(target)) = (
                    current.dyn_ref::<web_sys::Node>(),
                    related.dyn_ref::<web_sys::Node>(),
                ) && !wrapper.contains(Some(target))
                {
                    menu_open.set(false);
                }
            }
        } else {
            // Focus moved outside the document (e.g., clicked elsewhere)
            menu_open.set(false);
        }
    };

    view! {
        <div class=css::dropdownWrapper on:focusout=on_focusout>
            <button
                type="button"
                class=trigger_class
                title=title
                aria-haspopup="menu"
                aria-expanded=move || menu_open.get().to_string()
                on:click=move |_| menu_open.update(|v| *v = !*v)
            >
                {trigger.run()}
            </button>
            <Show when=move || menu_open.get()>
                <div
                    class=classes!(css::dropdownMenu, menu_class)
                    role="menu"
                    on:click=move |_| menu_open.set(false)
                >
                    {children()}
                </div>
            </Show>
        </div>
    }
}
