//! Crypto asset table.

use leptos::prelude::*;
use leptos_icons::Icon;
use stylance::classes;

use crate::components::avatar::Avatar;
use crate::components::icons as ic;
use crate::models::{ChangeDirection, CryptoAsset};

stylance::import_crate_style!(css, "src/components/dashboard/dashboard.module.css");

/// Holdings table. Rows render in the order given; no sorting or filtering.
///
/// | Column | Example |
/// |--------|---------|
/// | Price | `$46,376.25` |
/// | Holdings | `0.75 BTC` |
/// | 24h Change | `+2.35%` (colored by sign) |
/// | Value | `$34,782.19` |
#[component]
pub fn CryptoAssetList(
    assets: Vec<CryptoAsset>,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    let title = title.unwrap_or_else(|| "My Assets".to_string());

    view! {
        <section class=css::card>
            <header class=css::cardHeader>
                <h3 class=css::cardTitle>{title}</h3>
            </header>
            <div class=css::tableScroll>
                <table class=css::table>
                    <thead>
                        <tr>
                            <th class=css::assetColumn>"Asset"</th>
                            <th>"Price"</th>
                            <th>"Holdings"</th>
                            <th>"24h Change"</th>
                            <th class=css::alignRight>"Value"</th>
                            <th class=classes!(css::alignRight, css::actionColumn)>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {assets
                            .into_iter()
                            .map(|asset| view! { <AssetRow asset=asset /> })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </section>
    }
}

#[component]
fn AssetRow(asset: CryptoAsset) -> impl IntoView {
    let change_class = match asset.change_direction() {
        ChangeDirection::Up => css::changeUp,
        ChangeDirection::Down => css::changeDown,
    };
    let icon = ic::lookup(&asset.icon);

    view! {
        <tr>
            <td>
                <div class=css::assetCell>
                    <Avatar
                        src=asset.icon_url.clone()
                        alt=asset.name.clone()
                        fallback=move || view! { <Icon icon=icon /> }
                    />
                    <div>
                        <span class=css::assetName>{asset.name.clone()}</span>
                        <p class=css::assetSymbol>{asset.symbol.clone()}</p>
                    </div>
                </div>
            </td>
            <td>{asset.price_display()}</td>
            <td>{asset.holdings_display()}</td>
            <td class=change_class>{asset.change_display()}</td>
            <td class=classes!(css::alignRight, css::assetValue)>{asset.value_display()}</td>
            <td class=css::alignRight>
                <button type="button" class=css::rowMenu title="More actions">
                    <Icon icon=ic::MORE />
                </button>
            </td>
        </tr>
    }
}
