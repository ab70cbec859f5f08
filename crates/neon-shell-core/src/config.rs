//! Fixed keys, routes and thresholds shared by the shell.

// =============================================================================
// Storage Keys
// =============================================================================

/// localStorage key holding the serialized cart.
pub const CART_ITEMS_KEY: &str = "cartItems";

/// localStorage key of the credential marker cleared on logout.
pub const AUTH_KEY: &str = "auth";

// =============================================================================
// Routes
// =============================================================================

/// Landing route, also the target of the logo.
pub const HOME_ROUTE: &str = "/";

/// Target of the cart affordance.
pub const CART_ROUTE: &str = "/cart";

/// Target of the logout action.
pub const LOGIN_ROUTE: &str = "/login";

// =============================================================================
// Layout
// =============================================================================

/// Viewport widths at or below this value use the narrow layout policy.
pub const RESPONSIVE_BREAKPOINT: f64 = 768.0;
