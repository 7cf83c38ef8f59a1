use chrono::{DateTime, Utc};

use schoolgate_auth::{Claims, RoleRequirement, SessionStatus, evaluate_session};
use schoolgate_core::RoutePath;
use schoolgate_nav::{
    GuardDecision, MenuEntry, MenuItem, RouteAccess, RouteTable, evaluate_login_route,
    evaluate_route, visible_menu,
};
use schoolgate_store::SessionStore;

/// Owns the session slot and answers every per-navigation question.
///
/// Time is injected: every evaluation takes `now`, so expiry-boundary
/// behavior is testable without a clock stub. Nothing is cached between
/// calls; session state may change between any two navigations.
#[derive(Debug)]
pub struct SessionManager<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> SessionManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Store the token issued by a completed login exchange.
    pub fn establish(&mut self, token: &str) {
        self.store.set(token);
        tracing::info!("session established");
    }

    /// Log out: delete the stored token.
    pub fn terminate(&mut self) {
        self.store.clear();
        tracing::info!("session terminated");
    }

    /// Evaluate the stored token without touching it.
    pub fn evaluate(&self, now: DateTime<Utc>) -> SessionStatus {
        evaluate_session(self.store.get().as_deref(), now)
    }

    /// Authentication predicate: `true` iff a decodable, unexpired token is
    /// stored.
    ///
    /// An expired or unreadable token is scrubbed from the store as part of
    /// answering `false`; callers must not assume this call is read-only.
    pub fn authenticate(&mut self, now: DateTime<Utc>) -> bool {
        self.scrubbed_status(now).is_valid()
    }

    /// Role predicate: whether the current session's role satisfies
    /// `requirement`.
    ///
    /// Read-only by contract: no session, an expired token, and an
    /// unrecognized role all answer `false` without mutating the store.
    pub fn has_required_role(&self, requirement: &RoleRequirement, now: DateTime<Utc>) -> bool {
        match self.evaluate(now).role() {
            Some(role) => requirement.permits(role),
            None => false,
        }
    }

    /// Claim set of the current valid session, for downstream consumers
    /// (e.g. a grading screen resolving its teacher record).
    pub fn current_claims(&self, now: DateTime<Utc>) -> Option<Claims> {
        match self.evaluate(now) {
            SessionStatus::Valid(claims) => Some(claims),
            _ => None,
        }
    }

    /// Guard a navigation to a route with a known access declaration.
    pub fn guard_route(&mut self, access: &RouteAccess, now: DateTime<Utc>) -> GuardDecision {
        let status = self.scrubbed_status(now);
        evaluate_route(&status, access)
    }

    /// Guard a navigation by path against the route table.
    ///
    /// A path with no rule renders the not-found page outright; unmatched
    /// and unauthorized routes are indistinguishable to the user.
    pub fn guard_navigation(
        &mut self,
        table: &RouteTable,
        path: &RoutePath,
        now: DateTime<Utc>,
    ) -> GuardDecision {
        match table.lookup(path) {
            Some(rule) => self.guard_route(&rule.access, now),
            None => GuardDecision::RenderNotFound,
        }
    }

    /// Guard the login route (the inverse guard).
    pub fn guard_login(&mut self, now: DateTime<Utc>) -> GuardDecision {
        let status = self.scrubbed_status(now);
        evaluate_login_route(&status)
    }

    /// Sidebar menu for the current session. Empty when no valid session.
    pub fn visible_menu<'a>(
        &self,
        catalog: &'a [MenuItem],
        current_path: &RoutePath,
        now: DateTime<Utc>,
    ) -> Vec<MenuEntry<'a>> {
        match self.evaluate(now) {
            SessionStatus::Valid(claims) => visible_menu(catalog, &claims.role, current_path),
            _ => Vec::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Evaluate, deleting a token that can never become valid again.
    fn scrubbed_status(&mut self, now: DateTime<Utc>) -> SessionStatus {
        let status = self.evaluate(now);
        if status.needs_scrub() {
            tracing::debug!("scrubbing unusable session token");
            self.store.clear();
        }
        status
    }
}
