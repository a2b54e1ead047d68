//! Access Policy
//!
//! Role checks for protected areas and the post-sign-in destination. A role
//! mismatch is answered with a redirect to the caller's own area, never with
//! access.

use serde::{Deserialize, Serialize};

use super::profile::Role;

/// Top-level app areas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// Project wizard
    #[default]
    Home,
    /// Sign in / sign up
    Auth,
    /// Client dashboard (quote tickets)
    Tickets,
    VendorDashboard,
    Profile,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Auth => "/auth",
            Route::Tickets => "/dashboard",
            Route::VendorDashboard => "/vendor-dashboard",
            Route::Profile => "/profile",
        }
    }

    /// Role an area is reserved for; `None` = any signed-in user
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Route::Tickets => Some(Role::Client),
            Route::VendorDashboard => Some(Role::Vendor),
            _ => None,
        }
    }

    /// Whether the area needs a session at all
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Tickets | Route::VendorDashboard | Route::Profile)
    }
}

/// Each role's own dashboard
pub fn home_for(role: Role) -> Route {
    match role {
        Role::Client => Route::Tickets,
        Role::Vendor => Route::VendorDashboard,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Access {
    Granted,
    Redirect { to: Route, reason: Option<String> },
}

/// Decide whether the current user may enter `route`
pub fn check_access(current_role: Option<Role>, route: Route) -> Access {
    if !route.is_protected() {
        return Access::Granted;
    }
    let Some(role) = current_role else {
        return Access::Redirect { to: Route::Auth, reason: None };
    };

    match route.required_role() {
        Some(required) if required != role => Access::Redirect {
            to: home_for(role),
            reason: Some(format!(
                "You cannot access {} areas with a {} account.",
                required.as_str(),
                role.as_str()
            )),
        },
        _ => Access::Granted,
    }
}

/// Where to land after signing in.
///
/// `requested_area` is the account type the auth page was opened for;
/// `returning_to_quote` is set when the user came from the quote flow.
pub fn post_auth_destination(requested_area: Role, actual_role: Role, returning_to_quote: bool) -> Route {
    if requested_area != actual_role {
        return home_for(actual_role);
    }
    match (returning_to_quote, actual_role) {
        (true, Role::Client) => Route::Home,
        (_, role) => home_for(role),
    }
}
