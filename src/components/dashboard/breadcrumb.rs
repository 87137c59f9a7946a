//! Breadcrumb navigation component.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::{BreadcrumbItem, TrailPart, trail};

stylance::import_crate_style!(css, "src/components/dashboard/dashboard.module.css");

/// Page title on the left, breadcrumb trail on the right.
#[component]
pub fn BreadcrumbNav(
    items: Vec<BreadcrumbItem>,
    #[prop(into)] page_title: String,
) -> impl IntoView {
    view! {
        <div class=css::pageHeading>
            <h2 class=css::pageTitle>{page_title}</h2>
            <nav aria-label="breadcrumb">
                <ol class=css::breadcrumbs>
                    {trail(&items)
                        .into_iter()
                        .map(|part| match part {
                            TrailPart::Link { label, href } => view! {
                                <li><a class=css::crumbLink href=href>{label}</a></li>
                            }
                            .into_any(),
                            TrailPart::Text(label) => view! {
                                <li><span class=css::crumbCurrent>{label}</span></li>
                            }
                            .into_any(),
                            TrailPart::Separator => view! {
                                <li class=css::crumbSeparator aria-hidden="true">
                                    <Icon icon=ic::CHEVRON_RIGHT />
                                </li>
                            }
                            .into_any(),
                        })
                        .collect_view()}
                </ol>
            </nav>
        </div>
    }
}
