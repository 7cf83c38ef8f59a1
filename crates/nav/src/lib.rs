//! `schoolgate-nav` — navigation policy: route table, guards, menu filtering.
//!
//! Everything here is a pure function over a [`SessionStatus`] and static
//! declarations; the stateful composition lives in `schoolgate-session`.
//!
//! [`SessionStatus`]: schoolgate_auth::SessionStatus

pub mod guard;
pub mod menu;
pub mod route;

pub use guard::{GuardDecision, LOGIN_PATH, evaluate_login_route, evaluate_route};
pub use menu::{MenuEntry, MenuItem, visible_menu};
pub use route::{RouteAccess, RouteRule, RouteTable};
