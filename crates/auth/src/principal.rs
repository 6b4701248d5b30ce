use serde::{Deserialize, Serialize};

use sundry_primitives::lowercase;

use crate::{Permission, Role};

/// Identity of a caller, keyed by a case-insensitive identifier (an email).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrincipalId(String);

impl PrincipalId {
    /// Normalizes the identifier: surrounding whitespace is dropped and it is lower-cased.
    pub fn new(identifier: &str) -> Self {
        Self(lowercase(identifier.trim()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A fully resolved principal for authorization decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    pub principal_id: PrincipalId,
    pub roles: Vec<Role>,
    /// Effective permissions granted through `roles`.
    pub permissions: Vec<Permission>,
}

impl Principal {
    pub fn has_role(&self, role: &Role) -> bool {
        self.roles.contains(role)
    }
}
