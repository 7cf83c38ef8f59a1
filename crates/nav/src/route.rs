use schoolgate_auth::RoleRequirement;
use schoolgate_core::RoutePath;

/// Access declaration for a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAccess {
    /// Any authenticated session may enter; no role list is declared.
    Authenticated,
    /// The session role must satisfy the requirement.
    Requires(RoleRequirement),
}

/// One route declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRule {
    pub path: RoutePath,
    pub access: RouteAccess,
}

impl RouteRule {
    pub fn new(path: impl Into<RoutePath>, access: RouteAccess) -> Self {
        Self {
            path: path.into(),
            access,
        }
    }
}

/// The application's guarded-route catalog, declared at startup and never
/// mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    rules: Vec<RouteRule>,
}

impl RouteTable {
    pub fn new(rules: Vec<RouteRule>) -> Self {
        Self { rules }
    }

    /// Exact-path lookup; no prefix or glob matching. A path with no rule is
    /// an unmatched route.
    pub fn lookup(&self, path: &RoutePath) -> Option<&RouteRule> {
        self.rules.iter().find(|rule| rule.path == *path)
    }

    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }
}
