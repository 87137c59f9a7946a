//! Browser checks for the document-root helpers and mounted components.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use any_spawner::Executor;
use leptos::mount::mount_to;
use leptos::prelude::*;
use leptos::task::tick;
use velzon::app::AppContext;
use velzon::components::dashboard::BreadcrumbNav;
use velzon::components::layout::{Header, NavItem};
use velzon::config::{DARK_ROOT_CLASS, EMPTY_NOTIFICATIONS_TEXT};
use velzon::core::theme::{load_theme, save_theme};
use velzon::models::{Account, BreadcrumbItem, NavEntry, Notification, Route, Theme};
use velzon::utils::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

stylance::import_crate_style!(dashboard_css, "src/components/dashboard/dashboard.module.css");
stylance::import_crate_style!(layout_css, "src/components/layout/layout.module.css");

wasm_bindgen_test_configure!(run_in_browser);

// ============================================================================
// Helpers
// ============================================================================

/// Detached-on-drop container under `<body>` for mounting one component.
struct Scratch(HtmlElement);

impl Scratch {
    fn new() -> Self {
        let _ = Executor::init_wasm_bindgen();
        let document = dom::document().expect("document");
        let element = document
            .create_element("div")
            .expect("create div")
            .unchecked_into::<HtmlElement>();
        document
            .body()
            .expect("body")
            .append_child(&element)
            .expect("append scratch");
        Self(element)
    }

    fn root(&self) -> HtmlElement {
        self.0.clone()
    }

    fn all(&self, selector: &str) -> Vec<Element> {
        let list = self.0.query_selector_all(selector).expect("valid selector");
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn one(&self, selector: &str) -> HtmlElement {
        self.0
            .query_selector(selector)
            .expect("valid selector")
            .unwrap_or_else(|| panic!("no element matches {selector}"))
            .unchecked_into()
    }

    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        self.0.remove();
    }
}

fn class(name: &str) -> String {
    format!(".{}", name)
}

fn account() -> Account {
    Account {
        name: "Anna Adame".to_string(),
        role: "Founder".to_string(),
        initials: "AA".to_string(),
        avatar_url: None,
    }
}

fn feed() -> Vec<Notification> {
    ["New order received", "Server #1 overloaded.", "New user registered."]
        .iter()
        .enumerate()
        .map(|(i, text)| Notification {
            id: (i + 1).to_string(),
            text: text.to_string(),
            time: format!("{} min ago", i + 1),
        })
        .collect()
}

fn account_group() -> NavEntry {
    NavEntry::collapsible(
        "#/account",
        "user",
        "Account",
        vec![
            NavEntry::link("#/account/profile", "user", "Profile"),
            NavEntry::link("#/account/billing", "dollar", "Billing"),
        ],
    )
}

// ============================================================================
// Document root
// ============================================================================

#[wasm_bindgen_test]
fn root_class_toggles() {
    assert!(dom::set_root_class(DARK_ROOT_CLASS, true));
    assert!(dom::root_has_class(DARK_ROOT_CLASS));

    assert!(dom::set_root_class(DARK_ROOT_CLASS, false));
    assert!(!dom::root_has_class(DARK_ROOT_CLASS));
}

#[wasm_bindgen_test]
fn theme_root_class_matches_dom() {
    for theme in [Theme::Light, Theme::Dark, Theme::Light] {
        dom::set_root_class(DARK_ROOT_CLASS, theme.is_dark());
        assert_eq!(dom::root_has_class(DARK_ROOT_CLASS), theme.is_dark());
    }
}

#[wasm_bindgen_test]
fn theme_survives_storage_round_trip() {
    save_theme(Theme::Dark).expect("localStorage available");
    assert_eq!(load_theme(), Theme::Dark);

    save_theme(Theme::Light).expect("localStorage available");
    assert_eq!(load_theme(), Theme::Light);
}

#[wasm_bindgen_test]
async fn fullscreen_without_gesture_is_not_an_error() {
    let _ = Executor::init_wasm_bindgen();
    let document = dom::document().expect("document");
    let dark_before = dom::root_has_class(DARK_ROOT_CLASS);

    // No user gesture: the browser rejects the request asynchronously.
    assert_eq!(dom::toggle_fullscreen(), Ok(()));
    tick().await;

    assert!(document.fullscreen_element().is_none());
    assert_eq!(dom::root_has_class(DARK_ROOT_CLASS), dark_before);
}

// ============================================================================
// Mounted components
// ============================================================================

#[wasm_bindgen_test]
fn breadcrumb_has_one_separator_between_items() {
    let scratch = Scratch::new();
    let _view = mount_to(scratch.root(), || {
        view! {
            <BreadcrumbNav
                items=vec![BreadcrumbItem::text("Dashboards"), BreadcrumbItem::text("Crypto")]
                page_title="Crypto"
            />
        }
    });

    let separators = scratch.all(&class(dashboard_css::crumbSeparator));
    assert_eq!(separators.len(), 1);

    let items = scratch.all("ol > li");
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].text_content().as_deref(), Some("Dashboards"));
    assert_eq!(items[2].text_content().as_deref(), Some("Crypto"));
    assert!(!items[2].class_name().contains(dashboard_css::crumbSeparator));
}

#[wasm_bindgen_test]
async fn empty_feed_shows_message_without_indicator() {
    let scratch = Scratch::new();
    let _view = mount_to(scratch.root(), || {
        provide_context(AppContext::new());
        view! {
            <Header
                notifications=Vec::new()
                account=account()
                on_toggle_sidebar=Callback::new(|_: ()| {})
            />
        }
    });

    assert!(scratch.all(&class(layout_css::indicator)).is_empty());

    scratch.one("button[title='Notifications']").click();
    tick().await;

    assert!(scratch.text().contains(EMPTY_NOTIFICATIONS_TEXT));
    assert!(scratch.all(&class(layout_css::notificationItem)).is_empty());
}

#[wasm_bindgen_test]
async fn feed_shows_indicator_and_rows_in_order() {
    let scratch = Scratch::new();
    let _view = mount_to(scratch.root(), || {
        provide_context(AppContext::new());
        view! {
            <Header
                notifications=feed()
                account=account()
                on_toggle_sidebar=Callback::new(|_: ()| {})
            />
        }
    });

    assert_eq!(scratch.all(&class(layout_css::indicator)).len(), 1);

    scratch.one("button[title='Notifications']").click();
    tick().await;

    let rows: Vec<_> = scratch
        .all(&class(layout_css::notificationText))
        .iter()
        .filter_map(|row| row.text_content())
        .collect();
    assert_eq!(
        rows,
        ["New order received", "Server #1 overloaded.", "New user registered."]
    );
    assert!(scratch.text().contains("3 New"));
    assert!(!scratch.text().contains(EMPTY_NOTIFICATIONS_TEXT));
}

#[wasm_bindgen_test]
async fn collapsible_entry_toggled_twice_restores() {
    let scratch = Scratch::new();
    let _view = mount_to(scratch.root(), || {
        view! {
            <ul>
                <NavItem entry=account_group() current_route=Route::from_hash("#/crypto") />
            </ul>
        }
    });
    let sub_lists = || scratch.all(&class(layout_css::subList)).len();
    let toggle = scratch.one("button[aria-expanded]");

    assert_eq!(sub_lists(), 0);

    toggle.click();
    tick().await;
    assert_eq!(sub_lists(), 1);
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));
    assert!(scratch.text().contains("Billing"));

    toggle.click();
    tick().await;
    assert_eq!(sub_lists(), 0);
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
}

#[wasm_bindgen_test]
fn active_collapsible_entry_starts_expanded() {
    let scratch = Scratch::new();
    let _view = mount_to(scratch.root(), || {
        view! {
            <ul>
                <NavItem entry=account_group() current_route=Route::from_hash("#/account") />
            </ul>
        }
    });

    assert_eq!(scratch.all(&class(layout_css::subList)).len(), 1);
}
