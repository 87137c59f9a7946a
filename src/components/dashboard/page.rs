//! Page content for each route.

use leptos::prelude::*;

use super::{BreadcrumbNav, CryptoAssetList};
use crate::config::{BREADCRUMB_ROOT, DEFAULT_ROUTE};
use crate::models::{BreadcrumbItem, CryptoAsset};

stylance::import_crate_style!(css, "src/components/dashboard/dashboard.module.css");

/// The crypto dashboard: breadcrumbs and the asset table.
#[component]
pub fn CryptoDashboard(assets: Vec<CryptoAsset>) -> impl IntoView {
    view! {
        <BreadcrumbNav
            items=vec![BreadcrumbItem::text(BREADCRUMB_ROOT), BreadcrumbItem::text("Crypto")]
            page_title="Crypto"
        />
        <CryptoAssetList assets=assets />
    }
}

/// Known page without content, or an unknown route when `label` is `None`.
///
/// The root crumb links back to the default dashboard.
#[component]
pub fn PlaceholderPage(label: Option<String>) -> impl IntoView {
    let (title, message) = match label {
        Some(label) => {
            let message = format!("The {} dashboard has no content yet.", label);
            (label, message)
        }
        None => (
            "Not Found".to_string(),
            "No page matches this address.".to_string(),
        ),
    };

    view! {
        <BreadcrumbNav
            items=vec![
                BreadcrumbItem::link(BREADCRUMB_ROOT, DEFAULT_ROUTE),
                BreadcrumbItem::text(title.clone()),
            ]
            page_title=title
        />
        <section class=css::card>
            <p class=css::emptyState>{message}</p>
        </section>
    }
}
