//! Placeholder page content rendered inside the shell.

use leptos::prelude::*;
use neon_shell_core::NavigationRegistry;

use crate::app::AppContext;
use crate::config::{APP_NAME, CART_ROUTE, HOME_ROUTE};
use crate::models::Route;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

/// Page body for the current route.
#[component]
pub fn PageOutlet(route: Memo<Route>) -> impl IntoView {
    let registry = NavigationRegistry::standard();

    move || {
        let path = route.with(|r| r.path().to_string());
        match path.as_str() {
            CART_ROUTE => view! { <CartPage /> }.into_any(),
            other => {
                let title = registry
                    .find_by_route(other)
                    .map(|entry| entry.label.clone())
                    .unwrap_or_else(|| "Page not found".to_string());
                view! { <h2 class=css::title>{title}</h2> }.into_any()
            }
        }
    }
}

#[component]
fn CartPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let lines = move || {
        ctx.cart.with(|cart| {
            cart.items()
                .iter()
                .map(|item| {
                    let text = format!("{} x{} ({:.2})", item.name, item.quantity, item.line_total());
                    view! { <li>{text}</li> }
                })
                .collect_view()
        })
    };

    view! {
        <h2 class=css::title>"Cart"</h2>
        <Show
            when=move || ctx.cart.with(|c| !c.is_empty())
            fallback=|| view! { <p class=css::muted>"The cart is empty."</p> }
        >
            <ul class=css::lines>{lines}</ul>
            <button on:click=move |_| ctx.update_cart(|items| items.clear())>
                "Clear cart"
            </button>
        </Show>
    }
}

/// Rendered without the shell after logout.
#[component]
pub fn LoginPage() -> impl IntoView {
    let home = Route::from_path(HOME_ROUTE).to_hash();

    view! {
        <div class=css::login>
            <h2 class=css::title>{APP_NAME}</h2>
            <p class=css::muted>"You are signed out."</p>
            <a href=home>"Back to the register"</a>
        </div>
    }
}
