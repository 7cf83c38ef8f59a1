//! Per-navigation access decisions.
//!
//! Both guards are pure policy checks:
//! - No IO
//! - No panics
//! - No memory between navigations
//!
//! A decision is computed fresh on every navigation and never cached: a token
//! expiring mid-session must be caught on the very next navigation, not only
//! at login time.

use schoolgate_auth::SessionStatus;

use crate::route::RouteAccess;

/// Path of the login route, the redirect target for unauthenticated sessions.
pub const LOGIN_PATH: &str = "/login";

/// Render directive produced by a guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested route's content.
    Allow,
    /// Redirect to the login route, silently (no error banner).
    RedirectToLogin,
    /// Render the generic not-found page.
    ///
    /// An unauthorized role gets the same page as an unmatched URL, so the
    /// guard never confirms to it that the route exists.
    RenderNotFound,
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }

    /// Redirect target, if this decision redirects.
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            GuardDecision::RedirectToLogin => Some(LOGIN_PATH),
            _ => None,
        }
    }
}

/// Decide access to a guarded route.
///
/// Authentication is checked before the role requirement, so an expired
/// session is always routed to login rather than to the not-found page.
pub fn evaluate_route(session: &SessionStatus, access: &RouteAccess) -> GuardDecision {
    let Some(claims) = session.claims() else {
        return GuardDecision::RedirectToLogin;
    };

    match access {
        RouteAccess::Authenticated => GuardDecision::Allow,
        RouteAccess::Requires(requirement) => {
            if requirement.permits(&claims.role) {
                GuardDecision::Allow
            } else {
                tracing::debug!(
                    role = claims.role.wire_name(),
                    "session role not permitted for route"
                );
                GuardDecision::RenderNotFound
            }
        }
    }
}

/// Decide access to the login route (the inverse guard).
///
/// A live session navigating back to the login form gets the generic
/// not-found page instead of a second login flow.
pub fn evaluate_login_route(session: &SessionStatus) -> GuardDecision {
    if session.is_valid() {
        GuardDecision::RenderNotFound
    } else {
        GuardDecision::Allow
    }
}
