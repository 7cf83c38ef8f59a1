//! `schoolgate-auth` — pure session/authorization boundary.
//!
//! This crate is intentionally decoupled from storage and rendering.

pub mod claims;
pub mod roles;
pub mod session;
pub mod token;

pub use claims::Claims;
pub use roles::{Role, RoleClaim, RoleRequirement, UnknownRoleError};
pub use session::{SessionStatus, evaluate_session};
pub use token::{DecodeError, decode};
