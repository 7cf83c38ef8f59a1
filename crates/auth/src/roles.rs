use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role granted to a signed-in account.
///
/// The catalog is closed: route rules and menu items name roles through this
/// enum, so a typo in a declaration is a compile error instead of an item that
/// silently never renders. Wire names are the exact strings the account
/// service puts in issued tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    Principal,
    VicePrincipal,
    DepartmentHead,
    Teacher,
    ClericalStaff,
    Parent,
    Student,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::Principal,
        Role::VicePrincipal,
        Role::DepartmentHead,
        Role::Teacher,
        Role::ClericalStaff,
        Role::Parent,
        Role::Student,
    ];

    /// The role string carried in issued tokens.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Role::Principal => "Hiệu trưởng",
            Role::VicePrincipal => "Hiệu phó",
            Role::DepartmentHead => "Trưởng bộ môn",
            Role::Teacher => "Giáo viên",
            Role::ClericalStaff => "Văn thư",
            Role::Parent => "Phụ huynh",
            Role::Student => "Học sinh",
        }
    }

    pub fn from_wire(name: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.wire_name() == name)
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// A role name outside the catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown role name: {0:?}")]
pub struct UnknownRoleError(pub String);

impl TryFrom<String> for Role {
    type Error = UnknownRoleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Role::from_wire(&value).ok_or(UnknownRoleError(value))
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        value.wire_name().to_string()
    }
}

/// The role slot of a decoded claim set.
///
/// Tokens come from a separate account service, so a role name outside the
/// catalog must not make the whole token unreadable. An unrecognized name is
/// kept verbatim: the session still authenticates (expiry is the only
/// authentication input), but it satisfies no requirement and matches no menu
/// item. The conversion logs once so catalog drift is observable instead of
/// surfacing as an inexplicably empty sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoleClaim {
    Known(Role),
    Unrecognized(String),
}

impl RoleClaim {
    pub fn known(&self) -> Option<Role> {
        match self {
            RoleClaim::Known(role) => Some(*role),
            RoleClaim::Unrecognized(_) => None,
        }
    }

    pub fn wire_name(&self) -> &str {
        match self {
            RoleClaim::Known(role) => role.wire_name(),
            RoleClaim::Unrecognized(name) => name,
        }
    }
}

impl From<String> for RoleClaim {
    fn from(value: String) -> Self {
        match Role::from_wire(&value) {
            Some(role) => RoleClaim::Known(role),
            None => {
                tracing::warn!(role = %value, "token carries a role outside the catalog");
                RoleClaim::Unrecognized(value)
            }
        }
    }
}

impl From<RoleClaim> for String {
    fn from(value: RoleClaim) -> Self {
        match value {
            RoleClaim::Known(role) => role.wire_name().to_string(),
            RoleClaim::Unrecognized(name) => name,
        }
    }
}

impl From<Role> for RoleClaim {
    fn from(value: Role) -> Self {
        RoleClaim::Known(value)
    }
}

/// Role requirement attached to a restricted route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleRequirement {
    /// Satisfied by exactly this role.
    Exactly(Role),
    /// Satisfied by any role in the list.
    OneOf(Vec<Role>),
}

impl RoleRequirement {
    /// Whether the given role claim satisfies this requirement.
    ///
    /// - No IO
    /// - No panics
    /// - No session mutation (scrubbing is the session manager's concern)
    ///
    /// An unrecognized role name never satisfies anything.
    pub fn permits(&self, claim: &RoleClaim) -> bool {
        let Some(role) = claim.known() else {
            return false;
        };

        match self {
            RoleRequirement::Exactly(required) => role == *required,
            RoleRequirement::OneOf(required) => required.contains(&role),
        }
    }
}
