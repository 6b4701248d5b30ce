use std::collections::HashMap;

use crate::{Permission, Principal, PrincipalId, Role};

/// Fixed policy source: identifier → roles, role → permissions.
///
/// Identifiers without an explicit assignment receive `default_roles`.
#[derive(Debug, Clone)]
pub struct RoleDirectory {
    assignments: HashMap<PrincipalId, Vec<Role>>,
    default_roles: Vec<Role>,
    grants: HashMap<Role, Vec<Permission>>,
}

impl Default for RoleDirectory {
    /// `clark@kent.com` is the only admin; everyone else is a contributor.
    fn default() -> Self {
        Self::empty()
            .grant(Role::ADMIN, Permission::PRODUCTS_CREATE)
            .grant(Role::ADMIN, Permission::PRODUCTS_READ)
            .grant(Role::CONTRIBUTOR, Permission::PRODUCTS_READ)
            .with_default_roles(vec![Role::CONTRIBUTOR])
            .with_role("clark@kent.com", Role::ADMIN)
    }
}

impl RoleDirectory {
    /// A directory with no assignments, grants, or default roles.
    pub fn empty() -> Self {
        Self {
            assignments: HashMap::new(),
            default_roles: Vec::new(),
            grants: HashMap::new(),
        }
    }

    /// Assign `role` to `identifier` (in addition to roles already assigned).
    pub fn with_role(mut self, identifier: &str, role: Role) -> Self {
        let roles = self.assignments.entry(PrincipalId::new(identifier)).or_default();
        if !roles.contains(&role) {
            roles.push(role);
        }
        self
    }

    pub fn with_default_roles(mut self, roles: Vec<Role>) -> Self {
        self.default_roles = roles;
        self
    }

    /// Grant `permission` to every holder of `role`.
    pub fn grant(mut self, role: Role, permission: Permission) -> Self {
        let perms = self.grants.entry(role).or_default();
        if !perms.contains(&permission) {
            perms.push(permission);
        }
        self
    }

    pub fn roles_for(&self, principal_id: &PrincipalId) -> &[Role] {
        self.assignments
            .get(principal_id)
            .map(Vec::as_slice)
            .unwrap_or(self.default_roles.as_slice())
    }

    pub fn permissions_for(&self, role: &Role) -> &[Permission] {
        self.grants.get(role).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Resolve an identifier into a principal with its effective permissions.
    pub fn resolve(&self, identifier: &str) -> Principal {
        let principal_id = PrincipalId::new(identifier);
        let roles = self.roles_for(&principal_id).to_vec();

        let mut permissions: Vec<Permission> = Vec::new();
        for role in &roles {
            for perm in self.permissions_for(role) {
                if !permissions.contains(perm) {
                    permissions.push(perm.clone());
                }
            }
        }

        Principal {
            principal_id,
            roles,
            permissions,
        }
    }
}
