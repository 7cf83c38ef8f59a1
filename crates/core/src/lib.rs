//! `schoolgate-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod id;
pub mod path;

pub use id::{AccountId, TeacherId};
pub use path::RoutePath;
