//! `schoolgate-session` — stateful session layer over a token store.
//!
//! Composes the pure pieces: `schoolgate-store` holds the token,
//! `schoolgate-auth` evaluates it, `schoolgate-nav` turns the evaluation into
//! render directives. This crate owns the one sanctioned mutation-on-read:
//! scrubbing a token that can never become valid again.

pub mod manager;

pub use manager::SessionManager;
