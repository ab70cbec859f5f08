//! Application router component.
//!
//! Handles URL-based routing with hash history so the app can be served from
//! any static host. Uses native hashchange events instead of leptos_router.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the route signal is derived from `#/path`
//! - **Shell persists across navigation**: DefaultLayout stays mounted for every
//!   route except the login page
//! - **hashchange events**: back/forward, deep links and the shell's own
//!   navigation all arrive through the same listener

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::layout::DefaultLayout;
use crate::components::pages::{LoginPage, PageOutlet};
use crate::models::Route;

/// Main application router.
///
/// - `#/login` → Login page, rendered without the shell
/// - anything else → Shell with the matching page inside
#[component]
pub fn AppRouter() -> impl IntoView {
    let route = RwSignal::new(Route::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(Route::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let route_memo = Memo::new(move |_| route.get());
    let is_login = Memo::new(move |_| route_memo.with(Route::is_login));

    view! {
        <Show when=move || !is_login.get() fallback=|| view! { <LoginPage /> }>
            <DefaultLayout route=route_memo>
                <PageOutlet route=route_memo />
            </DefaultLayout>
        </Show>
    }
}
