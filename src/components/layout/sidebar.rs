//! Collapsible sidebar: logo, menu entries, logout, and the cart affordance.

use leptos::prelude::*;
use leptos_icons::Icon;
use neon_shell_core::{NavSlot, NavigationEntry, badge_label};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, CART_ROUTE, HOME_ROUTE};
use crate::utils::BrowserShell;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

/// Class list for a menu row.
fn menu_class(is_open: bool, active: bool) -> String {
    let base = if is_open {
        css::menuTitleIconOpen
    } else {
        css::menuTitleIcon
    };
    if active {
        format!("{} {}", base, css::active)
    } else {
        base.to_string()
    }
}

#[component]
pub fn Sidebar(shell: RwSignal<BrowserShell>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_open = Memo::new(move |_| shell.with(|s| s.is_open()));
    let cart_count = Memo::new(move |_| ctx.cart.with(|c| c.len()));

    // The registry is fixed, so the list structure is built once; only the
    // active flags and labels react.
    let slots: Vec<Option<NavigationEntry>> = shell.with_untracked(|s| {
        s.nav_slots()
            .map(|slot| match slot {
                NavSlot::Entry { entry, .. } => Some(entry.clone()),
                NavSlot::Logout => None,
            })
            .collect()
    });
    let menu = slots
        .into_iter()
        .map(|slot| match slot {
            Some(entry) => view! { <NavItem shell=shell entry=entry is_open=is_open /> }.into_any(),
            None => view! { <LogoutItem shell=shell is_open=is_open /> }.into_any(),
        })
        .collect_view();

    view! {
        <aside
            class=move || if is_open.get() { css::sidebarOpen } else { css::sidebar }
            on:mouseenter=move |_| shell.update(|s| s.hover_enter())
            on:mouseleave=move |_| shell.update(|s| s.hover_leave())
        >
            <div class=css::sidebarHeader>
                <div on:click=move |_| shell.update(|s| s.navigate(HOME_ROUTE))>
                    <h1 class=css::logo>{APP_NAME}</h1>
                </div>

                <Show when=move || is_open.get()>
                    <button
                        class=css::sidebarCloseButton
                        on:click=move |_| shell.update(|s| s.close())
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </Show>
            </div>

            <div class=css::sidebarContent>
                <nav class=css::sidebarNav>{menu}</nav>
            </div>

            <div
                class=css::cartSection
                on:click=move |_| shell.update(|s| s.navigate(CART_ROUTE))
            >
                <Icon icon=ic::CART />
                {move || {
                    badge_label(cart_count.get())
                        .map(|count| view! { <span class=css::cartBadge>{count}</span> })
                }}
            </div>
        </aside>
    }
}

#[component]
fn NavItem(
    shell: RwSignal<BrowserShell>,
    entry: NavigationEntry,
    is_open: Memo<bool>,
) -> impl IntoView {
    let NavigationEntry {
        route,
        section,
        label,
        icon,
    } = entry;
    let glyph = ic::nav_icon(icon);
    let title = label.clone();
    let active = Memo::new(move |_| shell.with(|s| s.is_active(&section)));

    view! {
        <div
            class=css::menuSection
            title=title
            on:click=move |_| shell.update(|s| s.select(&route))
        >
            <div class=move || menu_class(is_open.get(), active.get())>
                <Icon icon=glyph />
                {move || is_open.get().then(|| view! { <p>{label.clone()}</p> })}
            </div>
        </div>
    }
}

#[component]
fn LogoutItem(shell: RwSignal<BrowserShell>, is_open: Memo<bool>) -> impl IntoView {
    view! {
        <div
            class=css::menuSection
            title="Logout"
            on:click=move |_| shell.update(|s| s.logout())
        >
            <div class=css::menuTitleIcon>
                <Icon icon=ic::LOGOUT />
                {move || is_open.get().then(|| view! { <p>"Logout"</p> })}
            </div>
        </div>
    }
}
