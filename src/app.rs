//! Root application module.
//!
//! Contains the main App component and the AppContext holding the global
//! store state (cart contents and loading flag) that the shell observes.

use leptos::prelude::*;
use neon_shell_core::{CartSnapshot, KeyValueStorage};

use crate::components::AppRouter;
use crate::config::CART_ITEMS_KEY;
use crate::models::{CartItem, parse_cart};
use crate::utils::BrowserStorage;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive store.
///
/// Provided at the root of the component tree and read with
/// `use_context::<AppContext>()`. Pages own the mutations; the shell only
/// observes these signals.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Cart contents. Every mutation starts a new snapshot revision.
    pub cart: RwSignal<CartSnapshot<CartItem>>,

    /// Set while a page is waiting on the backend.
    pub loading: RwSignal<bool>,
}

impl AppContext {
    /// Creates the store, seeding the cart from the persisted copy.
    pub fn new() -> Self {
        Self {
            cart: RwSignal::new(CartSnapshot::from_items(restore_cart())),
            loading: RwSignal::new(false),
        }
    }

    /// Applies a store-side cart mutation.
    pub fn update_cart(&self, f: impl FnOnce(&mut Vec<CartItem>)) {
        self.cart.update(|cart| cart.update(f));
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

fn restore_cart() -> Vec<CartItem> {
    match BrowserStorage.get(CART_ITEMS_KEY) {
        Ok(Some(json)) => parse_cart(&json),
        Ok(None) => Vec::new(),
        Err(err) => {
            tracing::warn!(error = %err, "could not read persisted cart");
            Vec::new()
        }
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router, which mounts the shell
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                ">
                    <h1 style="color: #ff6b6b; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="margin: 0 0 1rem 0; color: #ff6b6b;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
