//! Round avatar with image and fallback content.

use leptos::prelude::*;
use stylance::classes;

stylance::import_crate_style!(css, "src/components/avatar.module.css");

/// Shows `src` when present and loadable, otherwise `fallback`.
#[component]
pub fn Avatar(
    #[prop(into)] src: Option<String>,
    #[prop(into)] alt: String,
    #[prop(into)] fallback: ViewFn,
    #[prop(optional)] class: Option<&'static str>,
) -> impl IntoView {
    let image_failed = RwSignal::new(src.is_none());

    view! {
        <span class=classes!(css::avatar, class)>
            {move || {
                if image_failed.get() {
                    view! { <span class=css::fallback>{fallback.run()}</span> }.into_any()
                } else {
                    view! {
                        <img
                            class=css::image
                            src=src.clone()
                            alt=alt.clone()
                            on:error=move |_| image_failed.set(true)
                        />
                    }
                    .into_any()
                }
            }}
        </span>
    }
}
