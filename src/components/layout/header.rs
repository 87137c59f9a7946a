//! Top header bar.
//!
//! Contains the mobile menu button, the search field, and the action
//! buttons: language, apps, fullscreen, theme, notifications, account.

use leptos::prelude::*;
use leptos_icons::Icon;
use stylance::classes;

use super::Dropdown;
use crate::app::AppContext;
use crate::components::avatar::Avatar;
use crate::components::icons as ic;
use crate::config::{EMPTY_NOTIFICATIONS_TEXT, EmptyNotifications, NOTIFICATION_EMPTY_STATE};
use crate::models::{
    Account, Notification, NotificationBody, Theme, badge_label, has_indicator, notification_body,
};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

/// Header bar across the top of the page.
///
/// # Props
/// - `notifications`: Feed shown in the bell dropdown, in order
/// - `account`: User shown in the account dropdown
/// - `languages`: Display names for the language dropdown
/// - `empty_state`: What an empty feed renders (defaults to
///   [`NOTIFICATION_EMPTY_STATE`])
/// - `on_toggle_sidebar`: Requests the mobile sidebar be opened or closed
#[component]
pub fn Header(
    notifications: Vec<Notification>,
    account: Account,
    #[prop(optional)] languages: Vec<String>,
    #[prop(default = NOTIFICATION_EMPTY_STATE)] empty_state: EmptyNotifications,
    on_toggle_sidebar: Callback<()>,
) -> impl IntoView {
    view! {
        <header class=css::header>
            <div class=css::headerStart>
                <button
                    type="button"
                    class=classes!(css::iconButton, css::mobileOnly)
                    on:click=move |_| on_toggle_sidebar.run(())
                    aria-label="Toggle sidebar"
                >
                    <Icon icon=ic::MENU />
                </button>
                <label class=css::search>
                    <span class=css::searchIcon><Icon icon=ic::SEARCH /></span>
                    <input
                        type="search"
                        class=css::searchInput
                        placeholder="Search..."
                        aria-label="Search"
                    />
                </label>
            </div>

            <div class=css::headerActions>
                <LanguageMenu languages=languages />
                <button
                    type="button"
                    class=classes!(css::iconButton, css::wideOnly)
                    title="Apps"
                    on:click=|_| dom::console_log("Apps clicked")
                >
                    <Icon icon=ic::APPS />
                </button>
                <FullscreenButton />
                <ThemeToggle />
                <NotificationMenu notifications=notifications empty_state=empty_state />
                <AccountMenu account=account />
            </div>
        </header>
    }
}

/// Inert language selector.
#[component]
fn LanguageMenu(languages: Vec<String>) -> impl IntoView {
    view! {
        <Dropdown
            title="Language"
            trigger_class=classes!(css::iconButton, css::wideOnly)
            trigger=|| view! { <Icon icon=ic::LANGUAGE /> }
        >
            {languages
                .iter()
                .map(|language| {
                    let selected = language.clone();
                    view! {
                        <button
                            type="button"
                            class=css::dropdownItem
                            role="menuitem"
                            on:click=move |_| {
                                dom::console_log(&format!("Language selected: {}", selected))
                            }
                        >
                            {language.clone()}
                        </button>
                    }
                })
                .collect_view()}
        </Dropdown>
    }
}

/// Enter or leave browser fullscreen; failures are logged only.
#[component]
fn FullscreenButton() -> impl IntoView {
    let on_click = move |_: leptos::ev::MouseEvent| {
        if let Err(err) = dom::toggle_fullscreen() {
            dom::console_error(&err.to_string());
        }
    };

    view! {
        <button
            type="button"
            class=classes!(css::iconButton, css::wideOnly)
            title="Fullscreen"
            on:click=on_click
        >
            <Icon icon=ic::FULLSCREEN />
        </button>
    }
}

/// Light/dark switch backed by the shared theme store.
///
/// Shows the icon of the theme it switches *to*.
#[component]
fn ThemeToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let theme = ctx.theme;

    view! {
        <button
            type="button"
            class=css::iconButton
            title=move || theme.get().toggle_title()
            on:click=move |_| theme.toggle()
        >
            {move || match theme.get() {
                Theme::Light => view! { <Icon icon=ic::MOON /> }.into_any(),
                Theme::Dark => view! { <Icon icon=ic::SUN /> }.into_any(),
            }}
        </button>
    }
}

/// Bell with pulsing indicator and the notification dropdown.
#[component]
fn NotificationMenu(
    notifications: Vec<Notification>,
    empty_state: EmptyNotifications,
) -> impl IntoView {
    let indicator = has_indicator(&notifications);
    let badge = badge_label(notifications.len());

    let trigger = move || {
        view! {
            <Icon icon=ic::BELL />
            {indicator.then(|| view! {
                <span class=css::indicator>
                    <span class=css::indicatorPing></span>
                    <span class=css::indicatorDot></span>
                </span>
            })}
        }
    };

    view! {
        <Dropdown
            title="Notifications"
            trigger_class=css::iconButton
            menu_class=css::dropdownMenuWide
            trigger=trigger
        >
            <div class=css::dropdownLabel>
                "Notifications"
                <span class=css::badge>{badge.clone()}</span>
            </div>
            <div class=css::dropdownDivider></div>
            {render_notification_body(&notifications, empty_state)}
            <div class=css::dropdownDivider></div>
            <button
                type="button"
                class=css::dropdownFooter
                role="menuitem"
                on:click=|_| dom::console_log("View all notifications clicked")
            >
                "View all notifications"
            </button>
        </Dropdown>
    }
}

fn render_notification_body(items: &[Notification], empty_state: EmptyNotifications) -> AnyView {
    match notification_body(items, empty_state) {
        NotificationBody::Entries(items) => view! {
            <ul class=css::notificationList>
                {items
                    .iter()
                    .map(|n| view! {
                        <li class=css::notificationItem role="menuitem">
                            <p class=css::notificationText>{n.text.clone()}</p>
                            <p class=css::notificationTime>{n.time.clone()}</p>
                        </li>
                    })
                    .collect_view()}
            </ul>
        }
        .into_any(),
        NotificationBody::EmptyMessage => view! {
            <p class=css::notificationEmpty>{EMPTY_NOTIFICATIONS_TEXT}</p>
        }
        .into_any(),
        NotificationBody::Blank => view! { <ul class=css::notificationList></ul> }.into_any(),
    }
}

/// Avatar trigger with the inert account menu.
#[component]
fn AccountMenu(account: Account) -> impl IntoView {
    let Account {
        name,
        role,
        initials,
        avatar_url,
    } = account;

    let trigger = move || {
        let initials = initials.clone();
        view! {
            <Avatar src=avatar_url.clone() alt=name.clone() fallback=move || initials.clone() />
            <span class=css::accountText>
                <span class=css::accountName>{name.clone()}</span>
                <span class=css::accountRole>{role.clone()}</span>
            </span>
        }
    };

    view! {
        <Dropdown title="Account" trigger_class=css::accountButton trigger=trigger>
            <div class=css::dropdownLabel>"My Account"</div>
            <div class=css::dropdownDivider></div>
            <MenuAction icon=ic::USER label="Profile" />
            <MenuAction icon=ic::SETTINGS label="Settings" />
            <MenuAction icon=ic::SUPPORT label="Support" />
            <div class=css::dropdownDivider></div>
            <MenuAction icon=ic::LOGOUT label="Log out" />
        </Dropdown>
    }
}

/// Placeholder menu entry; clicking only logs.
#[component]
fn MenuAction(icon: icondata::Icon, label: &'static str) -> impl IntoView {
    view! {
        <button
            type="button"
            class=css::dropdownItem
            role="menuitem"
            on:click=move |_| dom::console_log(&format!("{} clicked", label))
        >
            <span class=css::dropdownIcon><Icon icon=icon /></span>
            {label}
        </button>
    }
}
