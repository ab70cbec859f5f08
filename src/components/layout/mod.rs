//! Persistent navigation shell.
//!
//! [`DefaultLayout`] mounts one [`BrowserShell`] per shell lifetime and wires
//! the three signals it keeps in step:
//!
//! - route changes re-resolve the active section
//! - pointer, toggle and close events drive the sidebar openness
//! - cart revisions are mirrored to localStorage

mod sidebar;

use leptos::prelude::*;
use leptos_icons::Icon;
use neon_shell_core::{CartMirror, NavigationRegistry, ShellController};

use self::sidebar::Sidebar;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::LOADING_TEXT;
use crate::models::Route;
use crate::utils::{BrowserShell, BrowserStorage, HashNavigator, WindowViewport};

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

/// Re-resolve the active section whenever the observed route changes.
fn setup_route_effect(shell: RwSignal<BrowserShell>, route: Memo<Route>) {
    Effect::new(move || {
        let route = route.get();
        shell.update(|s| s.observe_route(route.path()));
    });
}

/// Persist the cart once per store revision.
fn setup_cart_mirror(ctx: AppContext) {
    let mirror = StoredValue::new(CartMirror::new(BrowserStorage));
    Effect::new(move || {
        ctx.cart.with(|cart| {
            mirror.update_value(|mirror| {
                if let Err(err) = mirror.observe(cart) {
                    tracing::error!(error = %err, "failed to persist cart");
                }
            });
        });
    });
}

/// Shell frame: sidebar, content header with the menu trigger, and the page.
#[component]
pub fn DefaultLayout(route: Memo<Route>, children: Children) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let mut controller = ShellController::new(
        NavigationRegistry::standard(),
        BrowserStorage,
        WindowViewport,
        HashNavigator,
    );
    // Deep links render highlighted on first paint.
    controller.observe_route(route.get_untracked().path());
    let shell = RwSignal::new(controller);

    setup_route_effect(shell, route);
    setup_cart_mirror(ctx);

    let on_toggle = move |_: leptos::ev::MouseEvent| shell.update(|s| s.toggle());

    view! {
        <div class=css::layout>
            <Show when=move || ctx.loading.get()>
                <div class=css::spinner>{LOADING_TEXT}</div>
            </Show>

            <Sidebar shell=shell />

            <div class=css::content>
                <div class=css::contentHeader>
                    <button class=css::menuTrigger on:click=on_toggle>
                        <Icon icon=ic::MENU />
                    </button>
                </div>
                <div class=css::contentBody>{children()}</div>
            </div>
        </div>
    }
}
