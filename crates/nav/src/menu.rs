//! Sidebar menu catalog and per-session filtering.

use std::borrow::Cow;

use schoolgate_auth::{Role, RoleClaim};
use schoolgate_core::RoutePath;

/// One sidebar item, declared at build time and only ever filtered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: Cow<'static, str>,
    /// Icon reference, opaque to this layer.
    pub icon: Cow<'static, str>,
    pub path: RoutePath,
    /// Roles the item is shown to. Visibility is opt-in per role; an empty
    /// list hides the item from everyone.
    pub allowed_roles: Vec<Role>,
}

impl MenuItem {
    pub fn new(
        label: impl Into<Cow<'static, str>>,
        icon: impl Into<Cow<'static, str>>,
        path: impl Into<RoutePath>,
        allowed_roles: Vec<Role>,
    ) -> Self {
        Self {
            label: label.into(),
            icon: icon.into(),
            path: path.into(),
            allowed_roles,
        }
    }

    fn visible_to(&self, claim: &RoleClaim) -> bool {
        match claim.known() {
            Some(role) => self.allowed_roles.contains(&role),
            None => false,
        }
    }
}

/// A visible menu item annotated for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry<'a> {
    pub item: &'a MenuItem,
    /// Whether the item's path equals the current path exactly.
    pub active: bool,
}

/// Filter the catalog down to what the given role sees.
///
/// Keeps catalog declaration order; recomputed on every render where role or
/// path changes, holding no state of its own.
pub fn visible_menu<'a>(
    catalog: &'a [MenuItem],
    role: &RoleClaim,
    current_path: &RoutePath,
) -> Vec<MenuEntry<'a>> {
    catalog
        .iter()
        .filter(|item| item.visible_to(role))
        .map(|item| MenuEntry {
            item,
            active: item.path == *current_path,
        })
        .collect()
}
