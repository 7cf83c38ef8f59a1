//! Route path identifier.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A route path as declared in the route table and menu catalog.
///
/// Paths are opaque at this layer: matching is exact string equality, with no
/// prefix or glob semantics. Two navigations to `/students` and `/students/`
/// are different routes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutePath(Cow<'static, str>);

impl RoutePath {
    pub fn new(path: impl Into<Cow<'static, str>>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for RoutePath {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for RoutePath {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}
